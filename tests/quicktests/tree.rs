use unbalanced_bst::{Tree, TreeError};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// removes, and rotations we have the same set of elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
            Op::Rotate(direction, x) => {
                let before = bst.clone();
                match bst.rotate(x, *direction) {
                    Ok(()) => assert!(set.contains(x)),
                    Err(TreeError::NotFound) => {
                        assert!(!set.contains(x));
                        assert!(*bst == before);
                    }
                    Err(_) => {
                        assert!(set.contains(x));
                        assert!(*bst == before);
                    }
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.iter().eq(set.iter())
        && tree.node_count() == set.len()
        && tree.find_min().ok() == set.first()
        && tree.find_max().ok() == set.last()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, again: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(again);
    let count = tree.node_count();
    let shape = tree.clone();

    tree.insert(again);
    tree.node_count() == count && tree == shape
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removals: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for x in &removals {
        tree.remove(x);
    }

    let mut still_present = xs;
    // We may have inserted the same element multiple times - drop each one.
    still_present.retain(|x| !removals.contains(x));
    still_present.sort_unstable();
    still_present.dedup();

    removals.iter().all(|x| !tree.contains(x)) && tree.iter().copied().eq(still_present)
}

#[quickcheck]
fn empty_tree_underflows(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for x in &xs {
        tree.remove(x);
    }

    tree.is_empty()
        && tree.find_min() == Err(TreeError::Underflow)
        && tree.find_max() == Err(TreeError::Underflow)
}
