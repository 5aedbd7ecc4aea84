//! This crate exposes an unbalanced Binary Search Tree (BST) along with a
//! handful of structural-analysis operations and single rotations that are
//! addressed by value.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the element that
//! was inserted and may have up to two child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because both comparisons are strict, a tree never holds the same element
//! twice. Inserting an element that is already present does nothing.
//!
//! The tree in this crate makes no attempt to keep itself balanced. Inserting
//! elements in sorted order produces a chain whose height equals its size.
//! [`Tree::rotate_left`] and [`Tree::rotate_right`] are exposed so callers can
//! reshape the tree themselves; they preserve the ordering invariants above but
//! do not enforce any balance policy.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::{Tree, TreeError};
//!
//! let mut tree: Tree<i32> = [100, 150, 50, 70, 40, 45].into_iter().collect();
//! assert_eq!(tree.find_min(), Ok(&40));
//! assert_eq!(tree.node_count(), 6);
//!
//! // Promote 50 over 100.
//! tree.rotate_right(&100).unwrap();
//! assert_eq!(tree.in_order(), vec![&40, &45, &50, &70, &100, &150]);
//!
//! // 150 has no left child to promote.
//! assert!(matches!(
//!     tree.rotate_right(&150),
//!     Err(TreeError::RotationUnavailable { .. })
//! ));
//! assert_eq!(tree.rotate_right(&75), Err(TreeError::NotFound));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod analysis;
mod error;
mod render;
mod rotation;
mod tree;

pub use error::TreeError;
pub use rotation::Direction;
pub use tree::{Iter, Tree};
