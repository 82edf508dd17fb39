use thiserror::Error;

/// Failures of [`Tree`][crate::Tree] operations whose preconditions don't hold.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The operation needs a value that isn't stored in the tree.
    #[error("value not found in tree")]
    NotFound,

    /// The operation needs at least one stored value.
    #[error("tree is empty")]
    EmptyTree,
}
