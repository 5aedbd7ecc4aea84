#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};
use unbalanced_bst::Direction;

mod analysis;
mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T into the tree
    Insert(T),
    /// Remove the T from the tree
    Remove(T),
    /// Rotate the node holding T
    Rotate(Direction, T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => {
                let direction = if bool::arbitrary(g) {
                    Direction::Left
                } else {
                    Direction::Right
                };
                Op::Rotate(direction, T::arbitrary(g))
            }
            _ => unreachable!(),
        }
    }
}
