//! CLEAR operations for Dictionary.
//!
//! Nodes are only ever released all at once. Release runs in post-order so
//! both subtrees of a node are gone before the node itself.

use crate::types::{Dictionary, NodeId, NULL_NODE};

impl<K, V> Dictionary<K, V> {
    /// Release every node and reset the dictionary to empty.
    ///
    /// The uniqueness mode is kept. Calling this on an empty dictionary is a
    /// no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut dict = Dictionary::new(true);
    /// dict.insert(1, "one").unwrap();
    /// dict.clear();
    /// assert!(dict.is_empty());
    /// assert!(dict.is_unique());
    /// dict.insert(1, "one again").unwrap();
    /// ```
    pub fn clear(&mut self) {
        self.release_all();
    }

    /// Release every node in post-order, returning how many were released.
    pub(crate) fn release_all(&mut self) -> usize {
        let order = self.post_order_ids();
        let mut released = 0;

        for id in order {
            if self.arena.deallocate(id).is_some() {
                released += 1;
            }
        }

        self.arena.clear();
        self.root = NULL_NODE;
        self.len = 0;
        released
    }

    /// Node ids ordered left subtree, right subtree, node.
    pub(crate) fn post_order_ids(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len);
        let mut pending = vec![self.root];

        // Visiting node, right, left and reversing yields left, right, node.
        while let Some(id) = pending.pop() {
            if let Some(node) = self.arena.get(id) {
                order.push(id);
                pending.push(node.left);
                pending.push(node.right);
            }
        }

        order.reverse();
        order
    }
}
