use crate::avl_tree::node::Node;
use crate::avl_tree::{Error, Result};
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left at subtree of height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right at subtree of height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Recomputes the height of the root of the tree and restores its balance factor. A taller child
// with a balance factor of zero is fixed with a single rotation.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let min_node = remove_min(&mut node.left);
            balance(tree);
            return min_node;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

/// Inserts `key` into the tree, returning `false` and leaving the tree untouched if an equal key
/// already exists.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => return false,
        },
        None => {
            debug!("linking new leaf");
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

/// Removes the key equal to `key` from the tree. A node with two children takes the key of its
/// in-order successor, and the successor node is unlinked from the right subtree instead.
pub fn remove<T, V>(tree: &mut Tree<T>, key: &V) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let removed = match tree.take() {
        Some(mut node) => match key.cmp(node.key.borrow()) {
            Ordering::Less => {
                let removed = remove(&mut node.left, key);
                *tree = Some(node);
                removed
            },
            Ordering::Greater => {
                let removed = remove(&mut node.right, key);
                *tree = Some(node);
                removed
            },
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => {
                    debug!("unlinking node with at most a right child");
                    let Node { key, .. } = *node;
                    *tree = right;
                    Some(key)
                },
                (left, None) => {
                    debug!("unlinking node with only a left child");
                    let Node { key, .. } = *node;
                    *tree = left;
                    Some(key)
                },
                (left, right) => {
                    debug!("replacing key of node with two children by its successor");
                    let mut right = right;
                    let Node { key: successor_key, .. } = *remove_min(&mut right);
                    let key = mem::replace(&mut node.key, successor_key);
                    node.left = left;
                    node.right = right;
                    *tree = Some(node);
                    Some(key)
                },
            },
        },
        None => return None,
    };

    if removed.is_some() {
        balance(tree);
    }
    removed
}

pub fn get<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a Node<T>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.key.borrow()) {
        Ordering::Less => get(&node.left, key),
        Ordering::Greater => get(&node.right, key),
        Ordering::Equal => Some(&**node),
    })
}

pub fn ceil<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.key.borrow()) {
        Ordering::Greater => ceil(&node.right, key),
        Ordering::Less => match ceil(&node.left, key) {
            None => Some(&node.key),
            res => res,
        },
        Ordering::Equal => Some(&node.key),
    })
}

pub fn floor<'a, T, V>(tree: &'a Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.key.borrow()) {
        Ordering::Less => floor(&node.left, key),
        Ordering::Greater => match floor(&node.right, key) {
            None => Some(&node.key),
            res => res,
        },
        Ordering::Equal => Some(&node.key),
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Checks the balance factor of every node using the cached heights.
pub fn is_balanced<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            node.balance().abs() <= 1 && is_balanced(&node.left) && is_balanced(&node.right)
        },
    }
}

/// Verifies ordering, cached heights and balance factors in pre-order and returns the number of
/// nodes in the tree. Every key must lie strictly between `lower` and `upper`.
pub fn check<T>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> Result<usize>
where
    T: Ord,
{
    let node = match tree {
        None => return Ok(0),
        Some(ref node) => node,
    };

    let below_lower = lower.map_or(false, |lower| node.key <= *lower);
    let above_upper = upper.map_or(false, |upper| node.key >= *upper);
    if below_lower || above_upper {
        return Err(Error::Unordered);
    }

    let expected = height(&node.left).max(height(&node.right)) + 1;
    if node.height != expected {
        return Err(Error::HeightMismatch {
            expected,
            actual: node.height,
        });
    }

    let balance = node.balance();
    if balance.abs() > 1 {
        return Err(Error::Unbalanced { balance });
    }

    let left_len = check(&node.left, lower, Some(&node.key))?;
    let right_len = check(&node.right, Some(&node.key), upper)?;
    Ok(left_len + right_len + 1)
}

#[cfg(test)]
mod tests {
    use super::{balance, check, insert, remove, rotate_left, rotate_right, Tree};
    use crate::avl_tree::node::Node;
    use crate::avl_tree::Error;

    fn leaf(key: u32) -> Tree<u32> {
        Some(Box::new(Node::new(key)))
    }

    fn join(key: u32, left: Tree<u32>, right: Tree<u32>) -> Tree<u32> {
        let mut node = Node::new(key);
        node.left = left;
        node.right = right;
        node.update();
        Some(Box::new(node))
    }

    fn pre_order(tree: &Tree<u32>, keys: &mut Vec<u32>) {
        if let Some(ref node) = tree {
            keys.push(node.key);
            pre_order(&node.left, keys);
            pre_order(&node.right, keys);
        }
    }

    #[test]
    fn test_rotate_left() {
        let tree = join(1, None, join(2, None, leaf(3)));
        let node = rotate_left(tree.unwrap());
        assert_eq!(node.key, 2);
        assert_eq!(node.height, 2);
        assert_eq!(node.left.as_ref().map(|node| node.height), Some(1));
    }

    #[test]
    fn test_rotate_right() {
        let tree = join(3, join(2, leaf(1), None), None);
        let node = rotate_right(tree.unwrap());
        assert_eq!(node.key, 2);
        assert_eq!(node.height, 2);
        assert_eq!(node.right.as_ref().map(|node| node.height), Some(1));
    }

    #[test]
    fn test_rotate_moves_inner_subtree() {
        let tree = join(4, join(2, leaf(1), leaf(3)), leaf(5));
        let node = rotate_right(tree.unwrap());
        let mut keys = Vec::new();
        pre_order(&Some(node), &mut keys);
        assert_eq!(keys, vec![2, 1, 4, 3, 5]);
    }

    #[test]
    fn test_balance_left_right() {
        let mut tree = join(3, join(1, None, leaf(2)), None);
        balance(&mut tree);
        let mut keys = Vec::new();
        pre_order(&tree, &mut keys);
        assert_eq!(keys, vec![2, 1, 3]);
        assert_eq!(check(&tree, None, None), Ok(3));
    }

    #[test]
    fn test_balance_prefers_single_rotation() {
        let mut tree = join(20, join(10, leaf(5), leaf(15)), None);
        balance(&mut tree);
        let mut keys = Vec::new();
        pre_order(&tree, &mut keys);
        assert_eq!(keys, vec![10, 5, 20, 15]);
        assert_eq!(check(&tree, None, None), Ok(4));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = None;
        assert!(insert(&mut tree, 1));
        assert!(!insert(&mut tree, 1));
        assert_eq!(check(&tree, None, None), Ok(1));
    }

    #[test]
    fn test_remove_successor_path_rebalanced() {
        let mut tree = join(
            3,
            join(2, leaf(1), None),
            join(5, leaf(4), join(6, None, leaf(7))),
        );
        assert_eq!(check(&tree, None, None), Ok(7));
        assert_eq!(remove(&mut tree, &3), Some(3));

        let mut keys = Vec::new();
        pre_order(&tree, &mut keys);
        assert_eq!(keys, vec![4, 2, 1, 6, 5, 7]);
        assert_eq!(check(&tree, None, None), Ok(6));
    }

    #[test]
    fn test_check_unordered() {
        let tree = join(2, leaf(3), None);
        assert_eq!(check(&tree, None, None), Err(Error::Unordered));
    }

    #[test]
    fn test_check_height_mismatch() {
        let mut tree = join(2, leaf(1), None);
        if let Some(ref mut node) = tree {
            node.height = 5;
        }
        assert_eq!(
            check(&tree, None, None),
            Err(Error::HeightMismatch { expected: 2, actual: 5 }),
        );
    }

    #[test]
    fn test_check_unbalanced() {
        let tree = join(3, join(2, leaf(1), None), None);
        assert_eq!(check(&tree, None, None), Err(Error::Unbalanced { balance: 2 }));
    }
}
