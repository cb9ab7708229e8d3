/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AVL tree implementation.
//!
//! This module contains the core tree structure and algorithms, split into
//! sub-modules by concern:
//! - `insert`: Write path (BST insert + rebalance)
//! - `delete`: Write path (three-case delete + rebalance)
//! - `find`: Read path (search, min/max, successor/predecessor, range)
//! - `rebalance`: Height maintenance, balance factors, and rotations
//! - `invariants`: Test-gated structural invariant checks

mod delete;
mod find;
mod insert;
#[cfg(any(test, feature = "unittest"))]
mod invariants;
mod rebalance;

use crate::arena::{NodeArena, NodeIndex};
use crate::iter::InOrderIter;
use crate::node::Node;

/// A self-balancing binary search tree over keys with a strict total order.
///
/// Maintains three interlocking invariants after every completed mutation:
///
/// - **BST ordering**: for every node, all keys in its left subtree are
///   strictly less than its key, all keys in its right subtree strictly
///   greater. Duplicate keys are not stored.
/// - **Height correctness**: every node caches
///   `1 + max(height(left), height(right))`, counting an absent child as -1.
/// - **AVL balance**: `|height(left) - height(right)| <= 1` for every node,
///   which bounds the tree height at ~1.44 log2(n).
///
/// # Arena Storage
///
/// All nodes are stored in a [`NodeArena`] and reference each other by
/// `NodeIndex` instead of `Box`. Parent links are non-owning back-reference
/// indices used only for upward traversal, so the ownership graph stays a
/// strict tree even though navigation runs both ways.
///
/// # Concurrency
///
/// Single-threaded by contract. Every operation is a bounded sequence of
/// index rewrites that runs to completion; callers needing shared access
/// should wrap the tree in their own lock.
#[derive(Debug)]
pub struct AvlTree<K> {
    /// The root node index, `None` when the tree is empty.
    root: Option<NodeIndex>,
    /// Arena holding all tree nodes.
    nodes: NodeArena<K>,
    /// Number of keys stored, maintained incrementally.
    len: usize,
}

impl<K> AvlTree<K> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            nodes: NodeArena::new(),
            len: 0,
        }
    }

    /// Get the number of keys stored in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no keys.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the height of the tree: 0 for a single node, -1 when empty.
    pub fn height(&self) -> i32 {
        self.root.map_or(-1, |root| self.nodes[root].height)
    }

    /// Remove every key, keeping the arena's allocated capacity.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.nodes.clear();
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> InOrderIter<'_, K> {
        InOrderIter::new(self)
    }

    /// Collect all keys in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// Resolve a `NodeIndex` to a shared reference to the node.
    pub(crate) fn node(&self, idx: NodeIndex) -> &Node<K> {
        &self.nodes[idx]
    }

    /// Get the root node index.
    pub(crate) const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Point `parent`'s child slot that holds `old` at `new` instead,
    /// or reassign the root when `parent` is `None`.
    pub(crate) fn replace_child(
        &mut self,
        parent: Option<NodeIndex>,
        old: NodeIndex,
        new: Option<NodeIndex>,
    ) {
        match parent {
            None => self.root = new,
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = new,
            Some(p) => {
                debug_assert_eq!(
                    self.nodes[p].right,
                    Some(old),
                    "replace_child: node is not a child of the given parent"
                );
                self.nodes[p].right = new;
            }
        }
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}
