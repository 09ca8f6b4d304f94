//! Validation and debugging utilities for Dictionary.
//!
//! This module contains invariant checking, structural statistics and the
//! tree printer used when debugging.

use std::fmt::Debug;
use std::io::{self, Write};

use crate::compact_arena::CompactArenaStats;
use crate::types::{Dictionary, NodeId, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord, V> Dictionary<K, V> {
    /// Check if the tree maintains its invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies the ordering (left subtree < node <= right subtree), the
    /// parent back-references, that the pair count matches both the reachable
    /// nodes and the arena, and key distinctness in unique mode.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        let reachable = self.check_node_invariants()?;

        if reachable != self.len {
            return Err(format!(
                "Tree has {} reachable nodes but len is {}",
                reachable, self.len
            ));
        }

        if self.arena.len() != self.len {
            return Err(format!(
                "Arena holds {} nodes but len is {}",
                self.arena.len(),
                self.len
            ));
        }

        if self.unique {
            self.check_unique_keys()?;
        }

        Ok(())
    }

    /// Walk every node checking key bounds and parent links.
    /// Returns the number of nodes reached.
    fn check_node_invariants(&self) -> Result<usize, String> {
        if self.root == NULL_NODE {
            return Ok(0);
        }

        let root = self
            .arena
            .get(self.root)
            .ok_or_else(|| format!("Root {} is not allocated", self.root))?;
        if root.parent != NULL_NODE {
            return Err(format!("Root {} has parent {}", self.root, root.parent));
        }

        // (node, lower bound inclusive, upper bound exclusive)
        let mut pending: Vec<(NodeId, Option<&K>, Option<&K>)> = vec![(self.root, None, None)];
        let mut reached = 0;

        while let Some((id, lower, upper)) = pending.pop() {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| format!("Node {} is linked but not allocated", id))?;
            reached += 1;
            if reached > self.arena.len() {
                return Err("Tree links form a cycle".to_string());
            }

            if lower.map_or(false, |min| node.key < *min) {
                return Err(format!("Node {} is smaller than an ancestor it follows", id));
            }
            if upper.map_or(false, |max| node.key >= *max) {
                return Err(format!("Node {} is not smaller than an ancestor it precedes", id));
            }

            for child in [node.left, node.right] {
                if child == NULL_NODE {
                    continue;
                }
                let child_node = self
                    .arena
                    .get(child)
                    .ok_or_else(|| format!("Node {} links to missing child {}", id, child))?;
                if child_node.parent != id {
                    return Err(format!(
                        "Node {} has parent {} but hangs under {}",
                        child, child_node.parent, id
                    ));
                }
            }

            if node.left != NULL_NODE {
                pending.push((node.left, lower, Some(&node.key)));
            }
            if node.right != NULL_NODE {
                pending.push((node.right, Some(&node.key), upper));
            }
        }

        Ok(reached)
    }

    /// In unique mode neighbouring keys in order must differ.
    fn check_unique_keys(&self) -> Result<(), String> {
        let keys: Vec<&K> = self.keys().collect();
        if let Some(index) = keys.windows(2).position(|pair| pair[0] == pair[1]) {
            return Err(format!(
                "Unique dictionary repeats a key at position {}",
                index + 1
            ));
        }
        Ok(())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }
}

// ============================================================================
// DEBUGGING AND STATISTICS
// ============================================================================

impl<K, V> Dictionary<K, V> {
    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self.root, 1)];

        while let Some((id, level)) = pending.pop() {
            if let Some(node) = self.arena.get(id) {
                deepest = deepest.max(level);
                pending.push((node.left, level + 1));
                pending.push((node.right, level + 1));
            }
        }

        deepest
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.arena.stats()
    }

    /// Returns all key-value pairs as a vector (for testing/debugging).
    pub fn slice(&self) -> Vec<(&K, &V)> {
        self.items().collect()
    }
}

impl<K: Debug, V: Debug> Dictionary<K, V> {
    /// Write the tree shape, one node per line, indented by depth.
    pub fn write_tree_structure<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Tree structure ({} pairs, unique={}):", self.len, self.unique)?;
        let mut pending = vec![(self.root, 0usize, "root")];

        while let Some((id, depth, side)) = pending.pop() {
            if let Some(node) = self.arena.get(id) {
                writeln!(
                    out,
                    "{}{} Node[id={}, parent={:?}]: {:?} => {:?}",
                    "  ".repeat(depth),
                    side,
                    id,
                    node.parent(),
                    node.key,
                    node.value
                )?;
                pending.push((node.right, depth + 1, "R"));
                pending.push((node.left, depth + 1, "L"));
            }
        }

        Ok(())
    }

    /// Prints the tree shape to stdout for debugging.
    pub fn print_tree_structure(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_tree_structure(&mut handle) {
            eprintln!("Warning: failed to print tree structure: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary<i32, &'static str> {
        let mut dict = Dictionary::new(false);
        for (k, v) in [(5, "e"), (3, "c"), (8, "h"), (5, "E"), (1, "a"), (9, "i")] {
            dict.insert(k, v).unwrap();
        }
        dict
    }

    #[test]
    fn test_valid_tree_passes() {
        let dict = sample();
        assert!(dict.check_invariants());
        assert_eq!(dict.validate(), Ok(()));
        assert!(Dictionary::<i32, i32>::new(true).check_invariants());
    }

    #[test]
    fn test_detects_ordering_violation() {
        let mut dict = sample();
        let root = dict.root;
        let left = dict.arena.get(root).unwrap().left;
        dict.arena.get_mut(left).unwrap().key = 7;

        assert!(!dict.check_invariants());
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut dict = sample();
        let root = dict.root;
        let right = dict.arena.get(root).unwrap().right;
        dict.arena.get_mut(right).unwrap().parent = NULL_NODE;

        let err = dict.check_invariants_detailed().unwrap_err();
        assert!(err.contains("parent"));
    }

    #[test]
    fn test_detects_count_mismatch() {
        let mut dict = sample();
        dict.len += 1;
        assert!(dict.check_invariants_detailed().is_err());
    }

    #[test]
    fn test_equal_key_on_left_is_rejected() {
        let mut dict = Dictionary::new(false);
        dict.insert(5, ()).unwrap();
        dict.insert(2, ()).unwrap();
        let root = dict.root;
        let left = dict.arena.get(root).unwrap().left;
        dict.arena.get_mut(left).unwrap().key = 5;

        assert!(!dict.check_invariants());
    }

    #[test]
    fn test_depth_of_degenerate_tree() {
        let dict: Dictionary<i32, i32> = (0..100).map(|i| (i, i)).collect();
        assert_eq!(dict.depth(), 100);
        assert_eq!(Dictionary::<i32, i32>::new(true).depth(), 0);
        assert_eq!(sample().depth(), 3);
    }

    #[test]
    fn test_write_tree_structure() {
        let mut dict = Dictionary::new(true);
        dict.insert(2, 'b').unwrap();
        dict.insert(1, 'a').unwrap();

        let mut out = Vec::new();
        dict.write_tree_structure(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Tree structure (2 pairs, unique=true):"));
        assert!(text.contains("root Node[id=0, parent=None]: 2 => 'b'"));
        assert!(text.contains("  L Node[id=1, parent=Some(0)]: 1 => 'a'"));
    }
}
