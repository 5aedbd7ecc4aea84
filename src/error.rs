use crate::rotation::Direction;

/// Errors returned by [`Tree`][crate::Tree] operations.
///
/// Searching for or removing an element that isn't present is never an error.
/// These variants only cover the calls that cannot produce a meaningful
/// answer. None of them mutate the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The minimum or maximum was requested from an empty tree.
    #[error("tree is empty")]
    Underflow,
    /// The element to rotate around isn't in the tree.
    #[error("value isn't in the binary search tree")]
    NotFound,
    /// The element to rotate around was found but lacks the child that would
    /// be promoted (the left child for a right rotation, and vice versa).
    #[error("cannot rotate {}: the node has no {} child", .direction, .direction.promoted_side())]
    RotationUnavailable {
        /// The rotation that was requested.
        direction: Direction,
    },
}
