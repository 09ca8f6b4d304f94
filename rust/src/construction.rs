//! Construction and initialization logic for Dictionary and nodes.
//!
//! A dictionary's only configuration is fixed at construction: whether keys
//! must be unique, and optionally how many nodes to reserve room for.

use crate::compact_arena::CompactArena;
use crate::types::{Dictionary, Node, NodeId, NULL_NODE};

/// Default number of node slots reserved by `with_default_capacity`.
pub const DEFAULT_CAPACITY: usize = 16;

impl<K, V> Dictionary<K, V> {
    /// Create an empty dictionary.
    ///
    /// # Arguments
    ///
    /// * `unique` - When true, every stored key must be distinct
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let dict = Dictionary::<String, i32>::new(true);
    /// assert!(dict.is_empty());
    /// assert!(dict.is_unique());
    /// ```
    pub fn new(unique: bool) -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            unique,
            arena: CompactArena::new(),
        }
    }

    /// Create an empty dictionary with room for `capacity` nodes before the
    /// arena has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let dict = Dictionary::<i32, i32>::with_capacity(false, 1024);
    /// assert!(dict.arena_stats().total_capacity >= 1024);
    /// ```
    pub fn with_capacity(unique: bool, capacity: usize) -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            unique,
            arena: CompactArena::with_capacity(capacity),
        }
    }

    /// Create an empty dictionary with `DEFAULT_CAPACITY` reserved slots.
    pub fn with_default_capacity(unique: bool) -> Self {
        Self::with_capacity(unique, DEFAULT_CAPACITY)
    }
}

impl<K, V> Node<K, V> {
    /// Creates a detached node hanging under `parent`.
    pub(crate) fn new(key: K, value: V, parent: NodeId) -> Self {
        Self {
            key,
            value,
            left: NULL_NODE,
            right: NULL_NODE,
            parent,
        }
    }
}

impl<K, V> Default for Dictionary<K, V> {
    /// Create an empty dictionary that accepts repeated keys.
    fn default() -> Self {
        Self::new(false)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Dictionary<K, V> {
    /// Collects pairs into a dictionary that accepts repeated keys, so the
    /// collection never fails.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut dict = Self::with_capacity(false, iter.size_hint().0);
        for (key, value) in iter {
            dict.attach(key, value);
        }
        dict
    }
}

/// Sizing helpers for construction
pub mod sizing {
    use super::DEFAULT_CAPACITY;

    /// Suggest an arena reservation for an expected number of pairs.
    ///
    /// Small dictionaries get the default; larger ones reserve exactly what
    /// they expect so the arena never reallocates while filling up.
    pub fn recommended_capacity(expected_pairs: usize) -> usize {
        expected_pairs.max(DEFAULT_CAPACITY)
    }
}
