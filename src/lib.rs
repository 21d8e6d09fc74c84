//! An array-seeded Binary Search Tree (BST) that can be rebalanced on demand.
//!
//! Values are kept in binary search order: everything under a node's left
//! child is smaller than the node and everything under its right child is
//! larger. Duplicates are never stored.
//!
//! A [`Tree`] is seeded from a sequence in any order. The values are sorted,
//! deduplicated and split at the middle over and over, so a freshly built
//! tree is as shallow as its size allows. After that, [`Tree::insert`] and
//! [`Tree::delete`] only relink nodes. A run of ascending inserts leaves a
//! right-leaning chain, and nothing fixes it until the caller asks.
//!
//! [`Tree::is_balanced`] is a shallow check. It compares the heights
//! of the root's two subtrees and ignores everything below them.
//! [`Tree::rebalance`] throws the shape away and rebuilds the tree from its
//! sorted values.
//!
//! # Examples
//!
//! ```
//! use array_bst::Tree;
//!
//! let mut tree = Tree::build([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//! assert_eq!(tree.in_order(), vec![1, 3, 4, 5, 7, 8, 9, 23, 67, 324, 6345]);
//! assert_eq!(tree.is_balanced(), Ok(true));
//!
//! for value in [400, 500, 600, 700, 800] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.is_balanced(), Ok(false));
//!
//! tree.rebalance();
//! assert_eq!(tree.is_balanced(), Ok(true));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
pub mod error;
pub mod node;
mod traversal;
pub mod tree;
mod util;

pub use error::{TreeError, TreeResult};
pub use node::Node;
pub use tree::Tree;
