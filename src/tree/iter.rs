// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

use super::FingerTree;
use super::node::Node;

/// Work left to do, deepest-last on the stack.
enum Pending<'a, V, A> {
    Tree(&'a FingerTree<V, A>),
    Node(&'a Node<V, A>),
}

/// Left-to-right iterator over the elements of a finger tree.
///
/// Holds a stack bounded by the depth of the tree; nothing is copied.
pub(crate) struct Leaves<'a, V, A> {
    stack: Vec<Pending<'a, V, A>>,
}

impl<'a, V, A> Leaves<'a, V, A> {
    pub(crate) fn new(tree: &'a FingerTree<V, A>) -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push(Pending::Tree(tree));
        return Leaves { stack };
    }
}

impl<'a, V, A> Iterator for Leaves<'a, V, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<&'a A> {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Tree(FingerTree::Empty) => {}
                Pending::Tree(FingerTree::Single(node)) => self.stack.push(Pending::Node(node)),
                Pending::Tree(FingerTree::Deep(deep)) => {
                    for link in deep.suffix.iter().rev() {
                        self.stack.push(Pending::Node(link));
                    }
                    self.stack.push(Pending::Tree(&deep.middle));
                    for link in deep.prefix.iter().rev() {
                        self.stack.push(Pending::Node(link));
                    }
                }
                Pending::Node(Node::Leaf(item)) => return Some(item),
                Pending::Node(Node::Branch2(_, a, b)) => {
                    self.stack.push(Pending::Node(b));
                    self.stack.push(Pending::Node(a));
                }
                Pending::Node(Node::Branch3(_, a, b, c)) => {
                    self.stack.push(Pending::Node(c));
                    self.stack.push(Pending::Node(b));
                    self.stack.push(Pending::Node(a));
                }
            }
        }
        return None;
    }
}
