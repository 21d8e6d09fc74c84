//! Errors for queries that have no meaningful answer on the given tree.

use thiserror::Error;

/// Invalid arguments to a [`Tree`][crate::Tree] query.
///
/// Missing values, duplicate inserts and traversals of an empty tree are not
/// errors. These are reserved for questions the tree cannot answer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The query needs a root but the tree has none.
    #[error("the tree is empty")]
    EmptyTree,

    /// The node could not be reached from the root by ordered descent. This
    /// covers nodes owned by another tree, even when they hold an equal value.
    #[error("node is not reachable from the root of this tree")]
    NodeNotInTree,
}

/// Shorthand for results of [`Tree`][crate::Tree] queries.
pub type TreeResult<T> = Result<T, TreeError>;
