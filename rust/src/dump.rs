//! Text dump of a dictionary.
//!
//! One pair per line, key and value separated by a single space, in
//! ascending key order. No header, no count, no blank lines.

use std::fmt::{self, Display};
use std::io::Write;

use crate::error::DictResult;
use crate::types::Dictionary;

impl<K: Display, V: Display> Dictionary<K, V> {
    /// Write every pair to `out` in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut dict = Dictionary::new(true);
    /// dict.insert("bob", 30).unwrap();
    /// dict.insert("amy", 25).unwrap();
    ///
    /// let mut out: Vec<u8> = Vec::new();
    /// dict.dump(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "amy 25\nbob 30\n");
    /// ```
    pub fn dump<W: Write + ?Sized>(&self, out: &mut W) -> DictResult<()> {
        for (key, value) in self.items() {
            writeln!(out, "{} {}", key, value)?;
        }
        Ok(())
    }
}

impl<K: Display, V: Display> Display for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.items() {
            writeln!(f, "{} {}", key, value)?;
        }
        Ok(())
    }
}
