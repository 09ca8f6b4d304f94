//! Iterator implementations for Dictionary.
//!
//! All iterators walk the tree in order with an explicit stack of pending
//! ancestors, so degenerate trees do not recurse.

use crate::types::{Dictionary, Node, NodeId};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order iterator over key-value pairs.
pub struct ItemIterator<'a, K, V> {
    dict: &'a Dictionary<K, V>,
    /// Nodes whose left subtree is done but which are not yet yielded.
    stack: Vec<NodeId>,
    remaining: usize,
}

/// Iterator over keys in ascending order.
pub struct KeyIterator<'a, K, V> {
    items: ItemIterator<'a, K, V>,
}

/// Iterator over values in key order.
pub struct ValueIterator<'a, K, V> {
    items: ItemIterator<'a, K, V>,
}

// ============================================================================
// DICTIONARY ITERATOR METHODS
// ============================================================================

impl<K, V> Dictionary<K, V> {
    /// Returns an iterator over all key-value pairs in ascending key order.
    ///
    /// Pairs sharing a key come out in insertion order.
    pub fn items(&self) -> ItemIterator<'_, K, V> {
        ItemIterator::new(self)
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> KeyIterator<'_, K, V> {
        KeyIterator {
            items: self.items(),
        }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> ValueIterator<'_, K, V> {
        ValueIterator {
            items: self.items(),
        }
    }

    /// Returns the pair with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.extreme(|node| node.left)
            .map(|node| (&node.key, &node.value))
    }

    /// Returns the pair with the largest key; among equal keys, the newest.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.extreme(|node| node.right)
            .map(|node| (&node.key, &node.value))
    }

    /// Follow one child link from the root until it runs out.
    fn extreme(&self, step: impl Fn(&Node<K, V>) -> NodeId) -> Option<&Node<K, V>> {
        let mut node = self.arena.get(self.root)?;
        while let Some(next) = self.arena.get(step(node)) {
            node = next;
        }
        Some(node)
    }
}

// ============================================================================
// ITEMITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, K, V> ItemIterator<'a, K, V> {
    pub fn new(dict: &'a Dictionary<K, V>) -> Self {
        let mut iter = Self {
            dict,
            stack: Vec::new(),
            remaining: dict.len,
        };
        iter.push_left_spine(dict.root);
        iter
    }

    fn push_left_spine(&mut self, mut id: NodeId) {
        while let Some(node) = self.dict.arena.get(id) {
            self.stack.push(id);
            id = node.left;
        }
    }
}

impl<'a, K, V> Iterator for ItemIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.dict.arena.get(id)?;
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for ItemIterator<'a, K, V> {}

impl<'a, K, V> Clone for ItemIterator<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            dict: self.dict,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

// ============================================================================
// KEY AND VALUE ITERATORS
// ============================================================================

impl<'a, K, V> Iterator for KeyIterator<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, K, V> Iterator for ValueIterator<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ItemIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}
