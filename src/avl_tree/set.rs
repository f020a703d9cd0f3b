use crate::avl_tree::iter::{
    AvlTreeIntoIter, AvlTreeIter, AvlTreePreOrderIter, Traversal, TraversalOrder,
};
use crate::avl_tree::node::NodeRef;
use crate::avl_tree::tree;
use crate::avl_tree::{Error, Result};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set of unique keys implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every node caches the height
/// of its subtree, so `height` runs in constant time, while lookups, insertions and removals run
/// in time proportional to the height of the tree.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::{AvlTree, TraversalOrder};
///
/// let mut tree = AvlTree::new();
/// for key in &[10, 20, 30, 40, 50, 25] {
///     tree.insert(*key);
/// }
///
/// assert_eq!(tree.len(), 6);
/// assert_eq!(tree.height(), 3);
/// assert!(tree.is_balanced());
///
/// assert_eq!(
///     tree.traverse(TraversalOrder::InOrder).collect::<Vec<&u32>>(),
///     vec![&10, &20, &25, &30, &40, &50],
/// );
/// assert_eq!(
///     tree.traverse(TraversalOrder::PreOrder).collect::<Vec<&u32>>(),
///     vec![&30, &20, &10, &25, &40, &50],
/// );
///
/// assert!(tree.delete(&20));
/// assert!(!tree.delete(&20));
/// assert!(tree.search(&20).is_none());
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree { tree: None, len: 0 }
    }

    /// Inserts a key into the tree. Returns `true` if the key was added and `false` if an equal
    /// key was already present, in which case the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the tree. If the key exists in the tree, it will return the removed
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let removed = tree::remove(&mut self.tree, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes a key from the tree and returns `true` if it was present. Deleting an absent key
    /// is a no-op.
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
    /// assert!(tree.delete(&20));
    /// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&10, &30]);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn delete<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Returns the node holding a particular key, or `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// let node = tree.search(&2).unwrap();
    /// assert_eq!(node.key(), &2);
    /// assert!(node.is_leaf());
    /// assert!(tree.search(&3).is_none());
    /// ```
    pub fn search<V>(&self, key: &V) -> Option<NodeRef<T>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(NodeRef::new)
    }

    /// Returns the key in the tree that is equal to a particular key, or `None` if such a key
    /// does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(String::from("avl"));
    /// assert_eq!(tree.get("avl"), Some(&String::from("avl")));
    /// assert_eq!(tree.get("bst"), None);
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|node| &node.key)
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns the root node of the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.root().is_none());
    ///
    /// tree.insert(30);
    /// tree.insert(20);
    /// tree.insert(10);
    /// assert_eq!(tree.root().map(|node| *node.key()), Some(20));
    /// ```
    pub fn root(&self) -> Option<NodeRef<T>> {
        NodeRef::from_tree(&self.tree)
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of keys in the tree. Equivalent to `len`.
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree. An empty tree has a height of zero and a tree with a
    /// single key has a height of one.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.extend(1..8);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns `true` if the heights of the two subtrees of every node differ by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = (1..=20).collect();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.tree)
    }

    /// Verifies every structural invariant of the tree: keys are strictly increasing in-order,
    /// cached heights match the subtrees, every node is balanced, and the length matches the
    /// number of nodes. Returns the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = vec![5, 3, 8, 1].into_iter().collect();
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<()>
    where
        T: Ord,
    {
        let actual = tree::check(&self.tree, None, None)?;
        if actual != self.len {
            return Err(Error::LengthMismatch {
                expected: actual,
                actual: self.len,
            });
        }
        Ok(())
    }

    /// Returns the size, height and balance of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = (1..=20).collect();
    /// let summary = tree.summary();
    /// assert_eq!(summary.len, 20);
    /// assert_eq!(summary.height, 5);
    /// assert!(summary.balanced);
    /// ```
    pub fn summary(&self) -> Summary {
        Summary {
            len: self.len(),
            height: self.height(),
            balanced: self.is_balanced(),
        }
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns a key in the tree that is less than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.floor(&0), None);
    /// assert_eq!(tree.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the tree that is greater than or equal to a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.ceil(&0), Some(&1));
    /// assert_eq!(tree.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal,
    /// so keys come out in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<T> {
        AvlTreeIter::new(&self.tree, self.len)
    }

    /// Returns an iterator over the tree that yields keys using pre-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.pre_order().collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    /// ```
    pub fn pre_order(&self) -> AvlTreePreOrderIter<T> {
        AvlTreePreOrderIter::new(&self.tree, self.len)
    }

    /// Returns an iterator over the tree that visits keys in the given order. Each call starts a
    /// fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::{AvlTree, TraversalOrder};
    ///
    /// let tree: AvlTree<u32> = vec![3, 2, 1].into_iter().collect();
    /// assert_eq!(
    ///     tree.traverse(TraversalOrder::InOrder).collect::<Vec<&u32>>(),
    ///     vec![&1, &2, &3],
    /// );
    /// assert_eq!(
    ///     tree.traverse(TraversalOrder::PreOrder).collect::<Vec<&u32>>(),
    ///     vec![&2, &1, &3],
    /// );
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<T> {
        match order {
            TraversalOrder::PreOrder => Traversal::PreOrder(self.pre_order()),
            TraversalOrder::InOrder => Traversal::InOrder(self.iter()),
        }
    }
}

/// The size, height and balance of an `AvlTree<T>` at a point in time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    pub len: usize,
    pub height: usize,
    pub balanced: bool,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.len == 0 {
            return write!(f, "empty tree");
        }
        write!(
            f,
            "nodes: {}, height: {}, balanced: {}",
            self.len, self.height, self.balanced,
        )
    }
}

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;
    type IntoIter = AvlTreeIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        AvlTreeIntoIter::new(self.tree, self.len)
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = AvlTreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> PartialEq for AvlTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &AvlTree<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlTree<T> where T: Eq {}

impl<T> fmt::Debug for AvlTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
