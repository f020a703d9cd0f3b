use balanced_collections::avl_tree::{AvlTree, TraversalOrder};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 10_000;
const KEY_RANGE: u32 = 1_000;

#[test]
fn int_test_avl_tree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = AvlTree::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_RANGE);

        if rng.gen::<bool>() {
            assert_eq!(tree.insert(key), expected.insert(key));
        } else {
            assert_eq!(tree.remove(&key), expected.take(&key));
        }

        assert_eq!(tree.len(), expected.len());
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    assert_eq!(
        tree.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
    assert_eq!(tree.min(), expected.iter().next());
    assert_eq!(tree.max(), expected.iter().next_back());
}

#[test]
fn int_test_size_conservation() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut tree = AvlTree::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_RANGE);
        let len = tree.len();
        let present = tree.contains(&key);

        if rng.gen::<bool>() {
            tree.insert(key);
            assert_eq!(tree.len(), if present { len } else { len + 1 });
        } else {
            tree.delete(&key);
            assert_eq!(tree.len(), if present { len - 1 } else { len });
        }
        assert!(tree.is_balanced());
    }
}

#[test]
fn int_test_in_order_is_sorted() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([3, 3, 3, 3]);
    let mut tree = AvlTree::new();

    for _ in 0..NUM_OF_OPERATIONS {
        tree.insert(rng.gen::<i64>());
    }

    let keys = tree.traverse(TraversalOrder::InOrder).collect::<Vec<&i64>>();
    assert_eq!(keys.len(), tree.len());
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(tree.pre_order().count(), tree.len());
}

#[test]
fn int_test_round_trip() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([4, 4, 4, 4]);
    let mut tree = AvlTree::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_RANGE);
        tree.insert(key);
        assert!(tree.search(&key).is_some());
        assert!(tree.delete(&key));
        assert!(tree.search(&key).is_none());
        assert!(tree.is_empty());
    }
}

#[test]
fn int_test_idempotent_insert() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([5, 5, 5, 5]);
    let mut tree = AvlTree::new();

    for _ in 0..NUM_OF_OPERATIONS / 10 {
        tree.insert(rng.gen_range(0, KEY_RANGE));
    }

    for _ in 0..NUM_OF_OPERATIONS / 10 {
        let key = rng.gen_range(0, KEY_RANGE);
        tree.insert(key);
        let shape = tree.pre_order().cloned().collect::<Vec<u32>>();
        assert!(!tree.insert(key));
        assert_eq!(tree.pre_order().cloned().collect::<Vec<u32>>(), shape);
    }
}

#[test]
fn int_test_height_bound() {
    let mut tree = AvlTree::new();

    for key in 1..=NUM_OF_OPERATIONS {
        tree.insert(key);
        let bound = (1.44 * ((key + 2) as f64).log2()).ceil() as usize;
        assert!(tree.height() <= bound);
    }

    for key in (1..=NUM_OF_OPERATIONS).step_by(2) {
        assert!(tree.delete(&key));
    }
    assert_eq!(tree.len(), NUM_OF_OPERATIONS / 2);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn int_test_node_heights() {
    let tree = (0..100u32).rev().collect::<AvlTree<u32>>();
    let mut stack = tree.root().into_iter().collect::<Vec<_>>();

    while let Some(node) = stack.pop() {
        let left = node.left().map_or(0, |child| child.height());
        let right = node.right().map_or(0, |child| child.height());
        assert_eq!(node.height(), 1 + left.max(right));
        assert!(node.balance().abs() <= 1);
        stack.extend(node.left());
        stack.extend(node.right());
    }
}
