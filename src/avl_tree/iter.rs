use crate::avl_tree::node::Node;
use crate::avl_tree::tree::Tree;

/// The order in which [`AvlTree::traverse`](struct.AvlTree.html#method.traverse) visits keys.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TraversalOrder {
    /// Visits a node, then its left subtree, then its right subtree.
    PreOrder,
    /// Visits the left subtree, then the node, then the right subtree. Keys are yielded in
    /// ascending order.
    InOrder,
}

/// An owning iterator for `AvlTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned keys.
pub struct AvlTreeIntoIter<T> {
    current: Tree<T>,
    stack: Vec<Node<T>>,
    remaining: usize,
}

impl<T> AvlTreeIntoIter<T> {
    pub(crate) fn new(tree: Tree<T>, len: usize) -> Self {
        AvlTreeIntoIter {
            current: tree,
            stack: Vec::new(),
            remaining: len,
        }
    }
}

impl<T> Iterator for AvlTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            self.remaining -= 1;
            key
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for AvlTreeIntoIter<T> {}

/// An iterator for `AvlTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct AvlTreeIter<'a, T>
where
    T: 'a,
{
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> AvlTreeIter<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(tree: &'a Tree<T>, len: usize) -> Self {
        AvlTreeIter {
            current: tree,
            stack: Vec::new(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for AvlTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            self.remaining -= 1;
            &node.key
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for AvlTreeIter<'a, T> where T: 'a {}

impl<'a, T> Clone for AvlTreeIter<'a, T>
where
    T: 'a,
{
    fn clone(&self) -> Self {
        AvlTreeIter {
            current: self.current,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// A pre-order iterator for `AvlTree<T>`.
///
/// This iterator yields the key of a node before the keys of its left subtree, and the keys of
/// the left subtree before the keys of the right subtree.
pub struct AvlTreePreOrderIter<'a, T>
where
    T: 'a,
{
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> AvlTreePreOrderIter<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(tree: &'a Tree<T>, len: usize) -> Self {
        AvlTreePreOrderIter {
            stack: tree.iter().map(|node| &**node).collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for AvlTreePreOrderIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|node| {
            if let Some(ref right) = node.right {
                self.stack.push(right);
            }
            if let Some(ref left) = node.left {
                self.stack.push(left);
            }
            self.remaining -= 1;
            &node.key
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for AvlTreePreOrderIter<'a, T> where T: 'a {}

impl<'a, T> Clone for AvlTreePreOrderIter<'a, T>
where
    T: 'a,
{
    fn clone(&self) -> Self {
        AvlTreePreOrderIter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An iterator for `AvlTree<T>` that visits keys in a [`TraversalOrder`](enum.TraversalOrder.html)
/// chosen at runtime.
pub enum Traversal<'a, T>
where
    T: 'a,
{
    PreOrder(AvlTreePreOrderIter<'a, T>),
    InOrder(AvlTreeIter<'a, T>),
}

impl<'a, T> Traversal<'a, T>
where
    T: 'a,
{
    /// Returns the order in which this traversal visits keys.
    pub fn order(&self) -> TraversalOrder {
        match self {
            Traversal::PreOrder(_) => TraversalOrder::PreOrder,
            Traversal::InOrder(_) => TraversalOrder::InOrder,
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::PreOrder(iter) => iter.next(),
            Traversal::InOrder(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Traversal::PreOrder(iter) => iter.size_hint(),
            Traversal::InOrder(iter) => iter.size_hint(),
        }
    }
}

impl<'a, T> ExactSizeIterator for Traversal<'a, T> where T: 'a {}

impl<'a, T> Clone for Traversal<'a, T>
where
    T: 'a,
{
    fn clone(&self) -> Self {
        match self {
            Traversal::PreOrder(iter) => Traversal::PreOrder(iter.clone()),
            Traversal::InOrder(iter) => Traversal::InOrder(iter.clone()),
        }
    }
}
