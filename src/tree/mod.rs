// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Persistent Measured Finger Tree
//!
//! A 2-3 finger tree annotated with a monoidal measure, after Hinze and
//! Paterson. Every tree value is immutable; operations return new trees that
//! share untouched structure with their inputs through `Arc`.
//!
//! Structure:
//! - `Empty`, `Single(node)`, or `Deep(prefix, middle, suffix)`
//! - Digits hold one to four links; the middle tree holds 2-3 branches one
//!   level deeper than the digits around it
//! - Each branch and each deep spine caches the combined measure below it
//!
//! Operations:
//! - push_front / push_back: amortized O(1)
//! - pop_front / pop_back: amortized O(1)
//! - concat: O(log min(n, m))
//! - split: O(log n), by a monotone predicate on the accumulated measure
//! - measure: O(1)

mod iter;
mod node;

use std::sync::Arc;

pub(crate) use self::iter::Leaves;
#[cfg(test)]
pub(crate) use self::node::allocations;
use self::node::Digit;
use self::node::Link;
use self::node::Node;
use self::node::measure_links;
use self::node::pack_nodes;
use self::node::share;
use self::node::split_digit;

/// A monoid: an associative `combine` with an identity element.
pub(crate) trait Monoid: Clone {
    /// The identity element.
    fn identity() -> Self;

    /// Combine two values. Must be associative.
    fn combine(&self, other: &Self) -> Self;
}

/// Something with a measure in the monoid `V`.
pub(crate) trait Measured<V: Monoid> {
    fn measure(&self) -> V;
}

/// The spine of a deep tree.
#[derive(Debug)]
pub(crate) struct Deep<V, A> {
    /// Combined measure of prefix, middle and suffix.
    measure: V,
    prefix: Digit<V, A>,
    middle: FingerTree<V, A>,
    suffix: Digit<V, A>,
}

/// A persistent sequence of `A` measured in `V`.
#[derive(Debug)]
pub(crate) enum FingerTree<V, A> {
    Empty,
    Single(Link<V, A>),
    Deep(Arc<Deep<V, A>>),
}

impl<V, A> Clone for FingerTree<V, A> {
    fn clone(&self) -> Self {
        return match self {
            FingerTree::Empty => FingerTree::Empty,
            FingerTree::Single(node) => FingerTree::Single(Arc::clone(node)),
            FingerTree::Deep(deep) => FingerTree::Deep(Arc::clone(deep)),
        };
    }
}

impl<V, A> Default for FingerTree<V, A> {
    fn default() -> Self {
        return FingerTree::Empty;
    }
}

/// Build a deep tree, combining the cached measures of its parts.
fn deep<V: Monoid, A: Measured<V>>(
    prefix: Digit<V, A>,
    middle: FingerTree<V, A>,
    suffix: Digit<V, A>,
) -> FingerTree<V, A> {
    let measure = measure_links(&prefix)
        .combine(&middle.measure())
        .combine(&measure_links(&suffix));
    return FingerTree::Deep(share(Deep { measure, prefix, middle, suffix }));
}

/// A tree holding the links of a short digit, in order.
fn from_links<V: Monoid, A: Measured<V>>(links: &[Link<V, A>]) -> FingerTree<V, A> {
    let mut tree = FingerTree::Empty;
    for link in links {
        tree = tree.push_back_link(link.clone());
    }
    return tree;
}

/// A deep tree whose prefix may have run out: borrow from the middle.
fn deep_left<V: Monoid, A: Measured<V>>(
    prefix: &[Link<V, A>],
    middle: &FingerTree<V, A>,
    suffix: &[Link<V, A>],
) -> FingerTree<V, A> {
    if !prefix.is_empty() {
        return deep(Digit::from(prefix), middle.clone(), Digit::from(suffix));
    }
    return match middle.pop_front_link() {
        None => from_links(suffix),
        Some((node, rest)) => deep(node.children(), rest, Digit::from(suffix)),
    };
}

/// A deep tree whose suffix may have run out: borrow from the middle.
fn deep_right<V: Monoid, A: Measured<V>>(
    prefix: &[Link<V, A>],
    middle: &FingerTree<V, A>,
    suffix: &[Link<V, A>],
) -> FingerTree<V, A> {
    if !suffix.is_empty() {
        return deep(Digit::from(prefix), middle.clone(), Digit::from(suffix));
    }
    return match middle.pop_back_link() {
        None => from_links(prefix),
        Some((rest, node)) => deep(Digit::from(prefix), rest, node.children()),
    };
}

impl<V: Monoid, A: Measured<V>> FingerTree<V, A> {
    /// The empty tree.
    pub fn new() -> Self {
        return FingerTree::Empty;
    }

    /// A tree holding exactly one element.
    pub fn singleton(item: A) -> Self {
        return FingerTree::Single(Node::leaf(item));
    }

    pub fn is_empty(&self) -> bool {
        return matches!(self, FingerTree::Empty);
    }

    /// The combined measure of every element, in O(1).
    pub fn measure(&self) -> V {
        return match self {
            FingerTree::Empty => V::identity(),
            FingerTree::Single(node) => node.measure(),
            FingerTree::Deep(deep) => deep.measure.clone(),
        };
    }

    /// A new tree with `item` in front.
    pub fn push_front(&self, item: A) -> Self {
        return self.push_front_link(Node::leaf(item));
    }

    /// A new tree with `item` at the back.
    pub fn push_back(&self, item: A) -> Self {
        return self.push_back_link(Node::leaf(item));
    }

    fn push_front_link(&self, link: Link<V, A>) -> Self {
        match self {
            FingerTree::Empty => return FingerTree::Single(link),
            FingerTree::Single(node) => {
                let measure = link.measure().combine(&node.measure());
                let mut prefix = Digit::new();
                prefix.push(link);
                let mut suffix = Digit::new();
                suffix.push(node.clone());
                let middle = FingerTree::Empty;
                return FingerTree::Deep(share(Deep { measure, prefix, middle, suffix }));
            }
            FingerTree::Deep(deep) => {
                let measure = link.measure().combine(&deep.measure);
                let (prefix, middle) = if deep.prefix.len() == 4 {
                    // Keep the new link and the old head; push the rest down a level.
                    let mut prefix = Digit::new();
                    prefix.push(link);
                    prefix.push(deep.prefix[0].clone());
                    let node = Node::branch3(
                        deep.prefix[1].clone(),
                        deep.prefix[2].clone(),
                        deep.prefix[3].clone(),
                    );
                    (prefix, deep.middle.push_front_link(node))
                } else {
                    let mut prefix = Digit::with_capacity(deep.prefix.len() + 1);
                    prefix.push(link);
                    prefix.extend(deep.prefix.iter().cloned());
                    (prefix, deep.middle.clone())
                };
                let suffix = deep.suffix.clone();
                return FingerTree::Deep(share(Deep { measure, prefix, middle, suffix }));
            }
        }
    }

    fn push_back_link(&self, link: Link<V, A>) -> Self {
        match self {
            FingerTree::Empty => return FingerTree::Single(link),
            FingerTree::Single(node) => {
                let measure = node.measure().combine(&link.measure());
                let mut prefix = Digit::new();
                prefix.push(node.clone());
                let mut suffix = Digit::new();
                suffix.push(link);
                let middle = FingerTree::Empty;
                return FingerTree::Deep(share(Deep { measure, prefix, middle, suffix }));
            }
            FingerTree::Deep(deep) => {
                let measure = deep.measure.combine(&link.measure());
                let (middle, suffix) = if deep.suffix.len() == 4 {
                    let node = Node::branch3(
                        deep.suffix[0].clone(),
                        deep.suffix[1].clone(),
                        deep.suffix[2].clone(),
                    );
                    let mut suffix = Digit::new();
                    suffix.push(deep.suffix[3].clone());
                    suffix.push(link);
                    (deep.middle.push_back_link(node), suffix)
                } else {
                    let mut suffix = deep.suffix.clone();
                    suffix.push(link);
                    (deep.middle.clone(), suffix)
                };
                let prefix = deep.prefix.clone();
                return FingerTree::Deep(share(Deep { measure, prefix, middle, suffix }));
            }
        }
    }

    fn pop_front_link(&self) -> Option<(Link<V, A>, Self)> {
        return match self {
            FingerTree::Empty => None,
            FingerTree::Single(node) => Some((node.clone(), FingerTree::Empty)),
            FingerTree::Deep(deep) => {
                let head = deep.prefix[0].clone();
                let rest = deep_left(&deep.prefix[1..], &deep.middle, &deep.suffix);
                Some((head, rest))
            }
        };
    }

    fn pop_back_link(&self) -> Option<(Self, Link<V, A>)> {
        return match self {
            FingerTree::Empty => None,
            FingerTree::Single(node) => Some((FingerTree::Empty, node.clone())),
            FingerTree::Deep(deep) => {
                let last = deep.suffix.len() - 1;
                let tail = deep.suffix[last].clone();
                let rest = deep_right(&deep.prefix, &deep.middle, &deep.suffix[..last]);
                Some((rest, tail))
            }
        };
    }

    /// Concatenate two trees. Both inputs are left untouched.
    pub fn concat(&self, other: &Self) -> Self {
        return Self::app3(self, Vec::new(), other);
    }

    /// Concatenate `left`, a run of same-level links, and `right`.
    fn app3(left: &Self, links: Vec<Link<V, A>>, right: &Self) -> Self {
        match (left, right) {
            (FingerTree::Empty, _) => {
                let mut tree = right.clone();
                for link in links.into_iter().rev() {
                    tree = tree.push_front_link(link);
                }
                return tree;
            }
            (_, FingerTree::Empty) => {
                let mut tree = left.clone();
                for link in links {
                    tree = tree.push_back_link(link);
                }
                return tree;
            }
            (FingerTree::Single(node), _) => {
                let mut tree = right.clone();
                for link in links.into_iter().rev() {
                    tree = tree.push_front_link(link);
                }
                return tree.push_front_link(node.clone());
            }
            (_, FingerTree::Single(node)) => {
                let mut tree = left.clone();
                for link in links {
                    tree = tree.push_back_link(link);
                }
                return tree.push_back_link(node.clone());
            }
            (FingerTree::Deep(l), FingerTree::Deep(r)) => {
                let measure = l.measure
                    .combine(&measure_links(&links))
                    .combine(&r.measure);

                let mut inner = Vec::with_capacity(l.suffix.len() + links.len() + r.prefix.len());
                inner.extend(l.suffix.iter().cloned());
                inner.extend(links);
                inner.extend(r.prefix.iter().cloned());

                let middle = Self::app3(&l.middle, pack_nodes(inner), &r.middle);
                let prefix = l.prefix.clone();
                let suffix = r.suffix.clone();
                return FingerTree::Deep(share(Deep { measure, prefix, middle, suffix }));
            }
        }
    }

    /// Split into the longest prefix on which `predicate` is false and the
    /// rest. The predicate is applied to accumulated measures and must be
    /// monotone: once true, true for every longer prefix.
    ///
    /// If the predicate never holds, the whole tree is on the left.
    pub fn split<P: Fn(&V) -> bool>(&self, predicate: P) -> (Self, Self) {
        if self.is_empty() {
            return (FingerTree::Empty, FingerTree::Empty);
        }
        if !predicate(&self.measure()) {
            return (self.clone(), FingerTree::Empty);
        }
        let (left, pivot, right) = self.split_tree(&V::identity(), &predicate);
        return (left, right.push_front_link(pivot));
    }

    /// Split a non-empty tree around the link at which `predicate` first
    /// holds, given the measure `start` accumulated before the tree.
    fn split_tree<P: Fn(&V) -> bool>(&self, start: &V, predicate: &P) -> (Self, Link<V, A>, Self) {
        let deep = match self {
            FingerTree::Empty => unreachable!("split of an empty tree"),
            FingerTree::Single(node) => {
                return (FingerTree::Empty, node.clone(), FingerTree::Empty);
            }
            FingerTree::Deep(deep) => deep,
        };

        let after_prefix = start.combine(&measure_links(&deep.prefix));
        if predicate(&after_prefix) {
            let (i, _) = split_digit(&deep.prefix, start, predicate);
            let left = from_links(&deep.prefix[..i]);
            let right = deep_left(&deep.prefix[i + 1..], &deep.middle, &deep.suffix);
            return (left, deep.prefix[i].clone(), right);
        }

        let after_middle = after_prefix.combine(&deep.middle.measure());
        if predicate(&after_middle) {
            let (middle_left, node, middle_right) = deep.middle.split_tree(&after_prefix, predicate);
            let before_node = after_prefix.combine(&middle_left.measure());
            let children = node.children();
            let (i, _) = split_digit(&children, &before_node, predicate);
            let left = deep_right(&deep.prefix, &middle_left, &children[..i]);
            let right = deep_left(&children[i + 1..], &middle_right, &deep.suffix);
            return (left, children[i].clone(), right);
        }

        let (i, _) = split_digit(&deep.suffix, &after_middle, predicate);
        let left = deep_right(&deep.prefix, &deep.middle, &deep.suffix[..i]);
        let right = from_links(&deep.suffix[i + 1..]);
        return (left, deep.suffix[i].clone(), right);
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&A> {
        let mut link = match self {
            FingerTree::Empty => return None,
            FingerTree::Single(node) => node,
            FingerTree::Deep(deep) => &deep.prefix[0],
        };
        loop {
            match link.as_ref() {
                Node::Leaf(item) => return Some(item),
                Node::Branch2(_, first, _) | Node::Branch3(_, first, _, _) => link = first,
            }
        }
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<&A> {
        let mut link = match self {
            FingerTree::Empty => return None,
            FingerTree::Single(node) => node,
            FingerTree::Deep(deep) => &deep.suffix[deep.suffix.len() - 1],
        };
        loop {
            match link.as_ref() {
                Node::Leaf(item) => return Some(item),
                Node::Branch2(_, _, last) | Node::Branch3(_, _, _, last) => link = last,
            }
        }
    }

    /// Iterate the elements left to right.
    pub fn iter(&self) -> Leaves<'_, V, A> {
        return Leaves::new(self);
    }
}

impl<V: Monoid, A: Measured<V> + Clone> FingerTree<V, A> {
    /// Remove the first element.
    pub fn pop_front(&self) -> Option<(A, Self)> {
        let (link, rest) = self.pop_front_link()?;
        return match link.as_ref() {
            Node::Leaf(item) => Some((item.clone(), rest)),
            _ => unreachable!("branch at the top level"),
        };
    }

    /// Remove the last element.
    pub fn pop_back(&self) -> Option<(Self, A)> {
        let (rest, link) = self.pop_back_link()?;
        return match link.as_ref() {
            Node::Leaf(item) => Some((rest, item.clone())),
            _ => unreachable!("branch at the top level"),
        };
    }

    /// Split around the element at which `predicate` first holds.
    ///
    /// Returns `None` if the predicate never holds.
    pub fn split_around<P: Fn(&V) -> bool>(&self, predicate: P) -> Option<(Self, A, V, Self)> {
        if self.is_empty() || !predicate(&self.measure()) {
            return None;
        }
        let (left, pivot, right) = self.split_tree(&V::identity(), &predicate);
        let before = left.measure();
        return match pivot.as_ref() {
            Node::Leaf(item) => Some((left, item.clone(), before, right)),
            _ => unreachable!("branch at the top level"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Count(usize);

    impl Monoid for Count {
        fn identity() -> Self {
            return Count(0);
        }

        fn combine(&self, other: &Self) -> Self {
            return Count(self.0 + other.0);
        }
    }

    impl Measured<Count> for u32 {
        fn measure(&self) -> Count {
            return Count(1);
        }
    }

    fn from_range(range: std::ops::Range<u32>) -> FingerTree<Count, u32> {
        let mut tree = FingerTree::new();
        for i in range {
            tree = tree.push_back(i);
        }
        return tree;
    }

    fn to_vec(tree: &FingerTree<Count, u32>) -> Vec<u32> {
        return tree.iter().copied().collect();
    }

    /// Recompute every cached measure from scratch and compare.
    fn check_node(link: &Link<Count, u32>) -> usize {
        return match link.as_ref() {
            Node::Leaf(_) => 1,
            Node::Branch2(m, a, b) => {
                let total = check_node(a) + check_node(b);
                assert_eq!(m.0, total);
                total
            }
            Node::Branch3(m, a, b, c) => {
                let total = check_node(a) + check_node(b) + check_node(c);
                assert_eq!(m.0, total);
                total
            }
        };
    }

    fn check_tree(tree: &FingerTree<Count, u32>) -> usize {
        return match tree {
            FingerTree::Empty => 0,
            FingerTree::Single(node) => check_node(node),
            FingerTree::Deep(deep) => {
                assert!((1..=4).contains(&deep.prefix.len()));
                assert!((1..=4).contains(&deep.suffix.len()));
                let total = deep.prefix.iter().map(check_node).sum::<usize>()
                    + check_tree(&deep.middle)
                    + deep.suffix.iter().map(check_node).sum::<usize>();
                assert_eq!(deep.measure.0, total);
                total
            }
        };
    }

    #[test]
    fn empty_tree() {
        let tree = FingerTree::<Count, u32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.measure(), Count(0));
        assert_eq!(tree.front(), None);
        assert!(tree.pop_back().is_none());
    }

    #[test]
    fn push_back_keeps_order_and_measure() {
        let tree = from_range(0..100);
        assert_eq!(to_vec(&tree), (0..100).collect::<Vec<_>>());
        assert_eq!(check_tree(&tree), 100);
    }

    #[test]
    fn push_front_keeps_order_and_measure() {
        let mut tree = FingerTree::new();
        for i in (0..100).rev() {
            tree = tree.push_front(i);
        }
        assert_eq!(to_vec(&tree), (0..100).collect::<Vec<_>>());
        assert_eq!(check_tree(&tree), 100);
        assert_eq!(tree.front(), Some(&0));
        assert_eq!(tree.back(), Some(&99));
    }

    #[test]
    fn pop_both_ends() {
        let mut tree = from_range(0..50);
        let mut seen = Vec::new();
        while let Some((item, rest)) = tree.pop_front() {
            seen.push(item);
            check_tree(&rest);
            tree = rest;
        }
        assert_eq!(seen, (0..50).collect::<Vec<_>>());

        let mut tree = from_range(0..50);
        let mut seen = Vec::new();
        while let Some((rest, item)) = tree.pop_back() {
            seen.push(item);
            check_tree(&rest);
            tree = rest;
        }
        assert_eq!(seen, (0..50).rev().collect::<Vec<_>>());
    }

    #[test]
    fn concat_many_sizes() {
        for n in 0..40 {
            for m in [0, 1, 2, 5, 13, 40] {
                let a = from_range(0..n);
                let b = from_range(n..n + m);
                let joined = a.concat(&b);
                assert_eq!(check_tree(&joined), (n + m) as usize);
                assert_eq!(to_vec(&joined), (0..n + m).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn concat_leaves_inputs_untouched() {
        let a = from_range(0..20);
        let b = from_range(20..30);
        let _ = a.concat(&b);
        assert_eq!(to_vec(&a), (0..20).collect::<Vec<_>>());
        assert_eq!(to_vec(&b), (20..30).collect::<Vec<_>>());
    }

    #[test]
    fn split_everywhere() {
        let tree = from_range(0..64);
        for k in 0..=64usize {
            let (left, right) = tree.split(|m| m.0 > k);
            assert_eq!(check_tree(&left), k);
            assert_eq!(check_tree(&right), 64 - k);
            assert_eq!(to_vec(&left), (0..k as u32).collect::<Vec<_>>());
            assert_eq!(to_vec(&right), (k as u32..64).collect::<Vec<_>>());
        }
    }

    #[test]
    fn split_around_reports_offset() {
        let tree = from_range(0..10);
        let (left, pivot, before, right) = tree.split_around(|m| m.0 > 6).unwrap();
        assert_eq!(pivot, 6);
        assert_eq!(before, Count(6));
        assert_eq!(to_vec(&left), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(to_vec(&right), vec![7, 8, 9]);
        assert!(tree.split_around(|m| m.0 > 10).is_none());
    }
}
