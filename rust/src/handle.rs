//! Nullable dictionary reference.
//!
//! `DictionaryHandle` models a dictionary reference that may be absent,
//! either never created or already destroyed. Every access through an absent
//! handle fails with `InvalidReference`; only `destroy` tolerates it.

use std::fmt::{Debug, Display};
use std::io::Write;

use crate::error::{DictResult, DictResultExt, DictionaryError};
use crate::types::Dictionary;

/// A dictionary reference that may be absent.
#[derive(Debug)]
pub struct DictionaryHandle<K, V> {
    inner: Option<Dictionary<K, V>>,
}

impl<K, V> DictionaryHandle<K, V> {
    /// Create a handle owning a new empty dictionary.
    pub fn new(unique: bool) -> Self {
        Self {
            inner: Some(Dictionary::new(unique)),
        }
    }

    /// Create an absent handle.
    pub fn null() -> Self {
        Self { inner: None }
    }

    /// Returns true if the handle no longer refers to a dictionary.
    pub fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    /// Release the dictionary and every node it owns. Repeated calls are
    /// no-ops.
    pub fn destroy(&mut self) {
        if let Some(mut dict) = self.inner.take() {
            dict.clear();
        }
    }

    /// Borrow the dictionary.
    pub fn dictionary(&self) -> DictResult<&Dictionary<K, V>> {
        self.require("dictionary")
    }

    /// Mutably borrow the dictionary.
    pub fn dictionary_mut(&mut self) -> DictResult<&mut Dictionary<K, V>> {
        self.inner
            .as_mut()
            .ok_or_else(|| DictionaryError::invalid_reference("dictionary_mut"))
    }

    /// Number of stored pairs.
    pub fn size(&self) -> DictResult<usize> {
        self.require("size").map(Dictionary::len)
    }

    /// Uniqueness mode fixed at construction.
    pub fn get_unique(&self) -> DictResult<bool> {
        self.require("getUnique").map(Dictionary::is_unique)
    }

    /// Reset the dictionary to empty.
    pub fn make_empty(&mut self) -> DictResult<()> {
        let dict = self
            .inner
            .as_mut()
            .ok_or_else(|| DictionaryError::invalid_reference("makeEmpty"))?;
        dict.clear();
        Ok(())
    }

    fn require(&self, operation: &str) -> DictResult<&Dictionary<K, V>> {
        self.inner
            .as_ref()
            .ok_or_else(|| DictionaryError::invalid_reference(operation))
    }
}

impl<K: Ord, V> DictionaryHandle<K, V> {
    /// Value stored under `key`, `None` if there is no such pair.
    pub fn lookup(&self, key: &K) -> DictResult<Option<&V>> {
        Ok(self.require("lookup")?.get(key))
    }

    /// Insert a pair, subject to the dictionary's uniqueness mode.
    pub fn insert(&mut self, key: K, value: V) -> DictResult<()>
    where
        K: Debug,
    {
        self.inner
            .as_mut()
            .ok_or_else(|| DictionaryError::invalid_reference("insert"))?
            .insert(key, value)
    }
}

impl<K: Display, V: Display> DictionaryHandle<K, V> {
    /// Write every pair to `out`, one per line, in ascending key order.
    pub fn dump<W: Write + ?Sized>(&self, out: &mut W) -> DictResult<()> {
        self.require("printDictionary")?
            .dump(out)
            .with_operation("printDictionary")
    }
}

impl<K, V> From<Dictionary<K, V>> for DictionaryHandle<K, V> {
    fn from(dict: Dictionary<K, V>) -> Self {
        Self { inner: Some(dict) }
    }
}

impl<K, V> Default for DictionaryHandle<K, V> {
    fn default() -> Self {
        Self::null()
    }
}
