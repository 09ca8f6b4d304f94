//! INSERT operations for Dictionary.
//!
//! This module contains the insertion operations: single-pair insertion with
//! the uniqueness check, the tie-goes-right attach walk, and all-or-nothing
//! batch insertion.

use std::fmt::Debug;

use crate::error::{DictionaryError, DictResultExt, ModifyResult};
use crate::types::{Dictionary, Node, NodeId, NULL_NODE};

impl<K: Ord, V> Dictionary<K, V> {
    /// Insert a key-value pair.
    ///
    /// In unique mode the key must not already be present; otherwise the call
    /// fails with `DuplicateKey` and the dictionary is left untouched. In
    /// multi mode any key is accepted and a repeated key lands to the right
    /// of every earlier pair with the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut dict = Dictionary::new(true);
    /// dict.insert("k", 1).unwrap();
    ///
    /// let err = dict.insert("k", 2).unwrap_err();
    /// assert!(err.is_duplicate_key());
    /// assert_eq!(dict.len(), 1);
    /// assert_eq!(dict.get(&"k"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> ModifyResult<()>
    where
        K: Debug,
    {
        // Checked before allocating so a rejected pair never reaches the arena.
        if self.unique && self.find_first(&key).is_some() {
            return Err(DictionaryError::duplicate_key(&key));
        }

        self.attach(key, value);
        Ok(())
    }

    /// Insert many pairs, all or nothing.
    ///
    /// In unique mode every key is checked against the dictionary and against
    /// the rest of the batch before the first pair is inserted, so a failing
    /// batch leaves the dictionary exactly as it was.
    pub fn batch_insert(&mut self, items: Vec<(K, V)>) -> ModifyResult<()>
    where
        K: Debug,
    {
        if self.unique {
            self.check_batch_keys(&items)
                .with_operation("batch_insert")?;
        }

        for (key, value) in items {
            self.attach(key, value);
        }

        Ok(())
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Reject a batch that repeats a stored key or repeats a key within itself.
    fn check_batch_keys(&self, items: &[(K, V)]) -> ModifyResult<()>
    where
        K: Debug,
    {
        if let Some((key, _)) = items.iter().find(|(key, _)| self.find_first(key).is_some()) {
            return Err(DictionaryError::duplicate_key(key));
        }

        let mut keys: Vec<&K> = items.iter().map(|(key, _)| key).collect();
        keys.sort();
        if let Some(pair) = keys.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(DictionaryError::duplicate_key(pair[1]));
        }

        Ok(())
    }

    /// Allocate a node for the pair and hang it at the end of its search path.
    pub(crate) fn attach(&mut self, key: K, value: V) -> NodeId {
        let (parent, go_left) = self.find_attach_point(&key);
        let id = self.allocate_node(Node::new(key, value, parent));

        if parent == NULL_NODE {
            self.root = id;
        } else if let Some(parent_node) = self.arena.get_mut(parent) {
            if go_left {
                parent_node.left = id;
            } else {
                parent_node.right = id;
            }
        }

        self.len += 1;
        id
    }

    /// Allocate a node in the arena and return its ID.
    #[inline]
    fn allocate_node(&mut self, node: Node<K, V>) -> NodeId {
        self.arena.allocate(node)
    }
}
