use unbalanced_bst::{Tree, TreeError};

use crate::Op;

#[quickcheck]
fn copy_is_independent(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let snapshot: Vec<i8> = tree.iter().copied().collect();
    let mut copy = tree.copy();

    let equal = copy.equals(&tree) && copy.compare_structure(&tree);
    for op in &ops {
        match op {
            Op::Insert(x) => copy.insert(*x),
            Op::Remove(x) => copy.remove(x),
            Op::Rotate(direction, x) => match copy.rotate(x, *direction) {
                Ok(()) | Err(TreeError::NotFound | TreeError::RotationUnavailable { .. }) => {}
                Err(err) => panic!("unexpected rotation error: {err}"),
            },
        }
    }

    equal && tree.iter().copied().eq(snapshot)
}

#[quickcheck]
fn mirror_round_trips(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let twice = tree.mirror().mirror();

    twice.equals(&tree) && twice.compare_structure(&tree) && tree.is_mirror(&tree.mirror())
}

#[quickcheck]
fn mirror_reverses_order(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut reversed = tree.in_order();
    reversed.reverse();

    tree.mirror().in_order() == reversed
}

#[quickcheck]
fn rotations_keep_shape_metrics(xs: Vec<i8>, pivots: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let count = tree.node_count();
    let sorted: Vec<i8> = tree.iter().copied().collect();

    for (i, pivot) in pivots.iter().enumerate() {
        let rotated = if i % 2 == 0 {
            tree.rotate_left(pivot)
        } else {
            tree.rotate_right(pivot)
        };
        match rotated {
            Ok(()) if tree.contains(pivot) => {}
            Err(TreeError::NotFound) if !tree.contains(pivot) => {}
            Err(TreeError::RotationUnavailable { .. }) if tree.contains(pivot) => {}
            _ => return false,
        }
    }

    tree.node_count() == count && tree.iter().copied().eq(sorted)
}

#[test]
fn reference_scenario() {
    let full: Tree<_> = [25, 20, 30, 18, 22, 28, 33].into_iter().collect();
    let low: Tree<_> = (0..=40).collect();
    let high: Tree<_> = (60..=100).collect();

    assert!(full.is_full());
    assert!(!low.is_full());
    assert_eq!(low.node_count(), 41);
    assert!(low.compare_structure(&high));
    assert!(!low.equals(&high));

    let mut rotated: Tree<_> = [100, 150, 50, 70, 40, 45].into_iter().collect();
    let original = rotated.render_levels();
    rotated.rotate_right(&100).unwrap();
    rotated.rotate_right(&100).unwrap();
    rotated.rotate_left(&70).unwrap();
    rotated.rotate_left(&50).unwrap();
    assert_eq!(rotated.render_levels(), original);
}
