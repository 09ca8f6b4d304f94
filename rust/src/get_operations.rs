//! GET operations for Dictionary.
//!
//! This module contains the read-only operations: key lookup, size and mode
//! queries, and helpers for walking the search path of a key.

use std::cmp::Ordering;

use crate::types::{link, Dictionary, Node, NodeId, NULL_NODE};

impl<K, V> Dictionary<K, V> {
    /// Returns the number of stored pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the dictionary holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the uniqueness mode fixed at construction.
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Id of the root node, `None` when empty.
    pub fn root_id(&self) -> Option<NodeId> {
        link(self.root)
    }

    /// Get a node by id.
    pub fn get_node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.arena.get(id)
    }
}

impl<K: Ord, V> Dictionary<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// When several pairs share the key, the most recently inserted one wins:
    /// equal keys chain rightward along the search path, and the walk keeps
    /// going right past every match.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut dict = Dictionary::new(false);
    /// dict.insert("x", 1).unwrap();
    /// dict.insert("x", 2).unwrap();
    /// assert_eq!(dict.get(&"x"), Some(&2));
    /// assert_eq!(dict.get(&"y"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_last(key)
            .and_then(|id| self.arena.get(id))
            .map(|node| &node.value)
    }

    /// Get a mutable reference to the value associated with a key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_last(key)?;
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Check if key exists in the dictionary.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_first(key).is_some()
    }

    /// Every value stored under `key`, oldest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut dict = Dictionary::new(false);
    /// dict.insert(5, "a").unwrap();
    /// dict.insert(9, "b").unwrap();
    /// dict.insert(5, "c").unwrap();
    /// assert_eq!(dict.get_all(&5), vec![&"a", &"c"]);
    /// ```
    pub fn get_all(&self, key: &K) -> Vec<&V> {
        let mut values = Vec::new();
        let mut current = self.root;

        while let Some(node) = self.arena.get(current) {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => {
                    values.push(&node.value);
                    node.right
                }
                Ordering::Greater => node.right,
            };
        }

        values
    }

    // ============================================================================
    // SEARCH HELPERS
    // ============================================================================

    /// Id of the first node on the search path whose key equals `key`.
    pub(crate) fn find_first(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;

        while let Some(node) = self.arena.get(current) {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(current),
                Ordering::Greater => node.right,
            };
        }

        None
    }

    /// Id of the last node on the search path whose key equals `key`.
    pub(crate) fn find_last(&self, key: &K) -> Option<NodeId> {
        if self.unique {
            return self.find_first(key);
        }

        let mut found = None;
        let mut current = self.root;

        while let Some(node) = self.arena.get(current) {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => {
                    found = Some(current);
                    node.right
                }
                Ordering::Greater => node.right,
            };
        }

        found
    }

    /// Id of the node a new pair with `key` would hang under, and whether it
    /// goes to that node's left. Ties go right.
    pub(crate) fn find_attach_point(&self, key: &K) -> (NodeId, bool) {
        let mut parent = NULL_NODE;
        let mut go_left = false;
        let mut current = self.root;

        while let Some(node) = self.arena.get(current) {
            parent = current;
            go_left = *key < node.key;
            current = if go_left { node.left } else { node.right };
        }

        (parent, go_left)
    }
}
