//! This crate exposes a Binary Search Tree (BST) and a merge sort / binary search pipeline,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! [`Tree`] stores a set of values: inserting a value that is already present does nothing.
//! Every value in a node's left subtree is smaller than the node's value and every value in its
//! right subtree is larger, so an in-order walk yields the values ascending and a search only
//! follows one path down from the root.
//!
//! There is no balancing. Inserting values in sorted order gives a list-shaped tree whose height
//! is its length, which makes lookups linear but never exhausts the stack.
//!
//! ## Sorting and searching
//!
//! [`merge_sort`] splits a sequence in half, sorts each half recursively and merges the results.
//! Its output can be handed to [`binary_search`], which halves the candidate range on every probe
//! and returns `None` once the range is empty.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod search;
pub mod sort;
pub mod tree;
mod util;

pub use error::Error;
pub use search::binary_search;
pub use sort::{merge, merge_by, merge_sort, merge_sort_by};
pub use tree::{Node, Tree};
pub use util::Removal;
