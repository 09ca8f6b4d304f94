//! Ordered dictionary backed by an unbalanced binary search tree.
//!
//! This crate provides a key-value container that keeps its pairs in a plain
//! binary search tree. It supports insertion, lookup, size and mode queries,
//! clearing, and a line-oriented text dump in ascending key order.
//!
//! A dictionary is created in one of two modes:
//!
//! - **unique**: inserting a key that is already present fails with
//!   [`DictionaryError::DuplicateKey`] and leaves the dictionary unchanged;
//! - **multi**: repeated keys are accepted. Each one is placed to the right
//!   of every earlier pair with the same key, so iteration and dumps list
//!   them in insertion order and [`Dictionary::get`] returns the newest.
//!
//! The tree is never rebalanced. Sorted insertion sequences degrade it to a
//! list and every operation to O(n).
//!
//! # Examples
//!
//! ```
//! use bst_dictionary::Dictionary;
//!
//! let mut dict = Dictionary::new(false);
//! dict.insert("x", 1).unwrap();
//! dict.insert("x", 2).unwrap();
//! assert_eq!(dict.get(&"x"), Some(&2));
//! assert_eq!(dict.len(), 2);
//!
//! let mut out: Vec<u8> = Vec::new();
//! dict.dump(&mut out).unwrap();
//! assert_eq!(out, b"x 1\nx 2\n");
//! ```

mod clear_operations;
mod compact_arena;
mod construction;
mod dump;
mod error;
mod get_operations;
mod handle;
mod insert_operations;
mod iteration;
mod types;
mod validation;

pub use compact_arena::{CompactArena, CompactArenaStats};
pub use construction::{sizing, DEFAULT_CAPACITY};
pub use error::{DictResult, DictResultExt, DictionaryError, KeyResult, ModifyResult};
pub use handle::DictionaryHandle;
pub use iteration::{ItemIterator, KeyIterator, ValueIterator};
pub use types::{Dictionary, Node, NodeId, NULL_NODE};
