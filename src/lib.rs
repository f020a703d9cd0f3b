//! Collections built on self-balancing binary search trees.
//!
//! The [`avl_tree`](avl_tree/index.html) module provides `AvlTree<T>`, an ordered set that keeps
//! the heights of the two subtrees of every node within one of each other.

pub mod avl_tree;
