use crate::avl_tree::tree::{self, Tree};
use std::cmp;
use std::fmt;

/// A struct representing an internal node of an avl tree.
#[derive(Clone)]
pub struct Node<T> {
    pub key: T,
    pub height: usize,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> isize {
        (tree::height(&self.left) as isize) - (tree::height(&self.right) as isize)
    }
}

/// A read-only view of a node inside an `AvlTree<T>`.
///
/// A `NodeRef` borrows the tree immutably, so the tree cannot be modified while the reference is
/// alive.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.key(), &20);
/// assert_eq!(root.height(), 2);
/// assert_eq!(root.left().map(|node| *node.key()), Some(10));
/// assert_eq!(root.right().map(|node| *node.key()), Some(30));
/// ```
pub struct NodeRef<'a, T>
where
    T: 'a,
{
    node: &'a Node<T>,
}

impl<'a, T> NodeRef<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        NodeRef { node }
    }

    pub(crate) fn from_tree(tree: &'a Tree<T>) -> Option<Self> {
        tree.as_ref().map(|node| NodeRef::new(&**node))
    }

    /// Returns the key stored in the node.
    pub fn key(&self) -> &'a T {
        &self.node.key
    }

    /// Returns the height of the subtree rooted at the node. A leaf has a height of one.
    pub fn height(&self) -> usize {
        self.node.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance(&self) -> isize {
        self.node.balance()
    }

    /// Returns the left child of the node, if any.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        NodeRef::from_tree(&self.node.left)
    }

    /// Returns the right child of the node, if any.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        NodeRef::from_tree(&self.node.right)
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.node.key)
            .field("height", &self.node.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeRef};

    #[test]
    fn test_update_and_balance() {
        let mut node = Node::new(2);
        node.left = Some(Box::new(Node::new(1)));
        node.update();
        assert_eq!(node.height, 2);
        assert_eq!(node.balance(), 1);

        node.right = Some(Box::new(Node::new(3)));
        node.update();
        assert_eq!(node.height, 2);
        assert_eq!(node.balance(), 0);
    }

    #[test]
    fn test_node_ref() {
        let mut node = Node::new(2);
        node.right = Some(Box::new(Node::new(3)));
        node.update();

        let node_ref = NodeRef::new(&node);
        assert_eq!(node_ref.key(), &2);
        assert_eq!(node_ref.balance(), -1);
        assert!(!node_ref.is_leaf());
        assert!(node_ref.left().is_none());
        assert!(node_ref.right().map_or(false, |child| child.is_leaf()));
    }
}
