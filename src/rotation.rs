//! Single rotations addressed by the element stored in the pivot node.
//!
//! A rotation promotes one child of the pivot into the pivot's slot and
//! demotes the pivot underneath it. The in-order sequence of elements is
//! unchanged, so the BST invariants survive, but nothing tries to keep the
//! tree balanced: this is a raw primitive for callers to reshape the tree.

use std::fmt;

use tracing::debug;

use crate::error::TreeError;
use crate::tree::{find_slot, Link, Tree};

/// Which way to rotate around a pivot node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Promote the pivot's right child.
    Left,
    /// Promote the pivot's left child.
    Right,
}

impl Direction {
    /// The side of the pivot whose child gets promoted.
    pub(crate) fn promoted_side(self) -> &'static str {
        match self {
            Self::Left => "right",
            Self::Right => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

impl<T> Tree<T> {
    /// Rotates the node holding `value` to the right: its left child takes
    /// its place and the node becomes that child's right child. The left
    /// child's old right subtree moves over to become the node's left subtree.
    ///
    /// Returns [`TreeError::NotFound`] if `value` isn't in the tree and
    /// [`TreeError::RotationUnavailable`] if its node has no left child. The
    /// tree is left untouched in both cases.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      slot                slot
    ///       |                   |
    ///     pivot               left
    ///     /   \              /    \
    ///   left   z   rotate ->  x   pivot
    ///   /  \                      /  \
    ///  x    y                    y    z
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// tree.rotate_right(&2).unwrap();
    ///
    /// assert_eq!(tree.find_min(), Ok(&1));
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.in_order(), vec![&1, &2, &3]);
    /// ```
    pub fn rotate_right(&mut self, value: &T) -> Result<(), TreeError>
    where
        T: Ord,
    {
        self.rotate(value, Direction::Right)
    }

    /// Rotates the node holding `value` to the left: its right child takes
    /// its place and the node becomes that child's left child. This undoes a
    /// [`rotate_right`][Tree::rotate_right] on the promoted node.
    ///
    /// Returns [`TreeError::NotFound`] if `value` isn't in the tree and
    /// [`TreeError::RotationUnavailable`] if its node has no right child. The
    /// tree is left untouched in both cases.
    pub fn rotate_left(&mut self, value: &T) -> Result<(), TreeError>
    where
        T: Ord,
    {
        self.rotate(value, Direction::Left)
    }

    /// Rotates the node holding `value` in the given direction. See
    /// [`rotate_left`][Tree::rotate_left] and [`rotate_right`][Tree::rotate_right].
    pub fn rotate(&mut self, value: &T, direction: Direction) -> Result<(), TreeError>
    where
        T: Ord,
    {
        let (slot, depth) = find_slot(&mut self.root, value).ok_or(TreeError::NotFound)?;
        rotate_slot(slot, direction)?;
        debug!(%direction, depth, "rotated node");
        Ok(())
    }
}

/// Performs the pointer surgery on the node in `slot`. Nothing is moved until the child to
/// promote is known to exist.
fn rotate_slot<T>(slot: &mut Link<T>, direction: Direction) -> Result<(), TreeError> {
    let unavailable = TreeError::RotationUnavailable { direction };
    let pivot = slot.as_mut().ok_or(TreeError::NotFound)?;

    let promoted = match direction {
        Direction::Right => {
            let mut left = pivot.left.take().ok_or(unavailable)?;
            pivot.left = left.right.take();
            left.right = slot.take();
            left
        }
        Direction::Left => {
            let mut right = pivot.right.take().ok_or(unavailable)?;
            pivot.right = right.left.take();
            right.left = slot.take();
            right
        }
    };
    *slot = Some(promoted);
    Ok(())
}
