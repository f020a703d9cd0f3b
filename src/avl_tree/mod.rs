//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod iter;
mod node;
mod serialize;
mod set;
mod tree;

pub use self::iter::{AvlTreeIntoIter, AvlTreeIter, AvlTreePreOrderIter, Traversal, TraversalOrder};
pub use self::node::NodeRef;
pub use self::set::{AvlTree, Summary};

use std::error;
use std::fmt;
use std::result;

/// The structural invariant that an `AvlTree<T>` was found to violate by
/// [`AvlTree::check_invariants`](struct.AvlTree.html#method.check_invariants).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A key is not strictly between the keys of its ancestors.
    Unordered,
    /// The heights of the two subtrees of a node differ by more than one.
    Unbalanced { balance: isize },
    /// The cached height of a node does not match the heights of its subtrees.
    HeightMismatch { expected: usize, actual: usize },
    /// The cached length of the tree does not match the number of reachable nodes.
    LengthMismatch { expected: usize, actual: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unordered => write!(f, "keys are not in strictly increasing order"),
            Error::Unbalanced { balance } => {
                write!(f, "node has a balance factor of {}", balance)
            },
            Error::HeightMismatch { expected, actual } => {
                write!(f, "node has height {} but its subtrees imply {}", actual, expected)
            },
            Error::LengthMismatch { expected, actual } => {
                write!(f, "tree reports {} keys but {} are reachable", actual, expected)
            },
        }
    }
}

/// Convenience `Result` type for invariant checks.
pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::Unbalanced { balance: -2 }.to_string(),
            "node has a balance factor of -2",
        );
        assert_eq!(
            Error::HeightMismatch { expected: 2, actual: 3 }.to_string(),
            "node has height 3 but its subtrees imply 2",
        );
        assert_eq!(
            Error::LengthMismatch { expected: 4, actual: 5 }.to_string(),
            "tree reports 5 keys but 4 are reachable",
        );
    }
}
