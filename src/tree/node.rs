// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! 2-3 nodes and digits.
//!
//! A node is either a leaf holding one element, or a branch holding two or
//! three child links plus the cached measure of everything below it. Nodes
//! are immutable once built and shared through `Arc`, so a branch can be
//! referenced from any number of trees at once.

use std::sync::Arc;

use smallvec::SmallVec;

use super::Measured;
use super::Monoid;

/// A shared pointer to a node.
pub(crate) type Link<V, A> = Arc<Node<V, A>>;

/// One to four links at either end of a deep tree.
pub(crate) type Digit<V, A> = SmallVec<[Link<V, A>; 4]>;

#[cfg(test)]
thread_local! {
    static ALLOCATIONS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Number of tree allocations made on this thread so far.
#[cfg(test)]
pub(crate) fn allocations() -> usize {
    return ALLOCATIONS.with(|count| count.get());
}

/// Move a value behind an `Arc`. Every node and deep spine allocation in
/// the tree goes through here so tests can count them.
#[inline]
pub(crate) fn share<T>(value: T) -> Arc<T> {
    #[cfg(test)]
    ALLOCATIONS.with(|count| count.set(count.get() + 1));
    return Arc::new(value);
}

/// A node in a finger tree.
#[derive(Debug)]
pub(crate) enum Node<V, A> {
    /// A single element.
    Leaf(A),
    /// Two children and their combined measure.
    Branch2(V, Link<V, A>, Link<V, A>),
    /// Three children and their combined measure.
    Branch3(V, Link<V, A>, Link<V, A>, Link<V, A>),
}

impl<V: Monoid, A: Measured<V>> Node<V, A> {
    pub(crate) fn leaf(item: A) -> Link<V, A> {
        return share(Node::Leaf(item));
    }

    pub(crate) fn branch2(a: Link<V, A>, b: Link<V, A>) -> Link<V, A> {
        let measure = a.measure().combine(&b.measure());
        return share(Node::Branch2(measure, a, b));
    }

    pub(crate) fn branch3(a: Link<V, A>, b: Link<V, A>, c: Link<V, A>) -> Link<V, A> {
        let measure = a.measure().combine(&b.measure()).combine(&c.measure());
        return share(Node::Branch3(measure, a, b, c));
    }

    /// The children of a branch as a digit.
    ///
    /// Only branches ever sit below the top level of a tree, so this is
    /// never asked of a leaf.
    pub(crate) fn children(&self) -> Digit<V, A> {
        let mut digit = Digit::new();
        match self {
            Node::Leaf(_) => unreachable!("children of a leaf node"),
            Node::Branch2(_, a, b) => {
                digit.push(a.clone());
                digit.push(b.clone());
            }
            Node::Branch3(_, a, b, c) => {
                digit.push(a.clone());
                digit.push(b.clone());
                digit.push(c.clone());
            }
        }
        return digit;
    }
}

impl<V: Monoid, A: Measured<V>> Measured<V> for Node<V, A> {
    #[inline]
    fn measure(&self) -> V {
        return match self {
            Node::Leaf(item) => item.measure(),
            Node::Branch2(measure, _, _) => measure.clone(),
            Node::Branch3(measure, _, _, _) => measure.clone(),
        };
    }
}

impl<V: Monoid, A: Measured<V>> Measured<V> for Link<V, A> {
    #[inline]
    fn measure(&self) -> V {
        return self.as_ref().measure();
    }
}

/// Combined measure of a run of links.
pub(crate) fn measure_links<V: Monoid, A: Measured<V>>(links: &[Link<V, A>]) -> V {
    let mut total = V::identity();
    for link in links {
        total = total.combine(&link.measure());
    }
    return total;
}

/// Pack a run of at least two links into 2-3 nodes, preferring threes.
///
/// Used when the facing digits of two deep trees meet in the middle of a
/// concatenation.
pub(crate) fn pack_nodes<V: Monoid, A: Measured<V>>(links: Vec<Link<V, A>>) -> Vec<Link<V, A>> {
    debug_assert!(links.len() >= 2);
    let mut packed = Vec::with_capacity(links.len() / 2);
    let mut remaining = links.len();
    let mut iter = links.into_iter();
    while remaining > 0 {
        let (Some(a), Some(b)) = (iter.next(), iter.next()) else {
            break;
        };
        match remaining {
            2 => {
                packed.push(Node::branch2(a, b));
                break;
            }
            4 => {
                packed.push(Node::branch2(a, b));
                if let (Some(c), Some(d)) = (iter.next(), iter.next()) {
                    packed.push(Node::branch2(c, d));
                }
                break;
            }
            _ => {
                if let Some(c) = iter.next() {
                    packed.push(Node::branch3(a, b, c));
                }
                remaining -= 3;
            }
        }
    }
    return packed;
}

/// Index of the first link in `digit` at which `predicate` holds on the
/// accumulated measure, starting from `start`. Falls back to the last link.
///
/// Returns the index and the measure accumulated before that link.
pub(crate) fn split_digit<V, A, P>(digit: &[Link<V, A>], start: &V, predicate: &P) -> (usize, V)
where
    V: Monoid,
    A: Measured<V>,
    P: Fn(&V) -> bool,
{
    let mut before = start.clone();
    let last = digit.len().saturating_sub(1);
    for (i, link) in digit.iter().enumerate() {
        if i == last {
            return (i, before);
        }
        let after = before.combine(&link.measure());
        if predicate(&after) {
            return (i, before);
        }
        before = after;
    }
    return (last, before);
}
