//! Core types and data structures for Dictionary.
//!
//! This module contains the tree vertex type, the dictionary handle itself,
//! and the node id constants shared by the arena and the tree walks.

use crate::compact_arena::CompactArena;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Marks an absent child or parent link
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Ordered dictionary backed by an unbalanced binary search tree.
///
/// Pairs are kept in a plain BST: keys less than a node's key live in its
/// left subtree, keys greater than *or equal to* it live in its right
/// subtree. There is no rebalancing, so sorted insertion sequences produce a
/// degenerate, list-shaped tree.
///
/// A dictionary is created either in unique mode, where inserting a key that
/// is already present fails with [`DictionaryError::DuplicateKey`], or in
/// multi mode, where equal keys chain to the right of each other in
/// insertion order.
///
/// # Type Parameters
///
/// * `K` - Key type; ordering comes from its `Ord` implementation
/// * `V` - Value type
///
/// # Examples
///
/// ```
/// use bst_dictionary::Dictionary;
///
/// let mut dict = Dictionary::new(true);
/// dict.insert("bob", 30).unwrap();
/// dict.insert("amy", 25).unwrap();
/// dict.insert("cid", 40).unwrap();
///
/// assert_eq!(dict.get(&"amy"), Some(&25));
/// assert_eq!(dict.len(), 3);
/// assert_eq!(dict.to_string(), "amy 25\nbob 30\ncid 40\n");
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(depth), O(n) worst case
/// - **Lookup**: O(depth), O(n) worst case
/// - **Clear**: O(n)
/// - **Iteration**: O(n)
///
/// [`DictionaryError::DuplicateKey`]: crate::DictionaryError::DuplicateKey
#[derive(Debug)]
pub struct Dictionary<K, V> {
    /// The top node of the tree, or `NULL_NODE` when empty.
    pub(crate) root: NodeId,
    /// Number of stored pairs.
    pub(crate) len: usize,
    /// Fixed at construction.
    pub(crate) unique: bool,
    /// Arena storage for every node reachable from `root`.
    pub(crate) arena: CompactArena<Node<K, V>>,
}

/// One stored pair and its tree links.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    /// Non-owning back-reference to the node this one hangs under.
    pub(crate) parent: NodeId,
}

impl<K, V> Node<K, V> {
    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Id of the left child, if any.
    pub fn left(&self) -> Option<NodeId> {
        link(self.left)
    }

    /// Id of the right child, if any.
    pub fn right(&self) -> Option<NodeId> {
        link(self.right)
    }

    /// Id of the parent, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        link(self.parent)
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left == NULL_NODE && self.right == NULL_NODE
    }
}

#[inline]
pub(crate) fn link(id: NodeId) -> Option<NodeId> {
    if id == NULL_NODE {
        None
    } else {
        Some(id)
    }
}
