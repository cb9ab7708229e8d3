/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: search, min/max, successor/predecessor, and range queries.
//!
//! Everything in this module is a pure traversal relying only on the BST
//! ordering invariant; nothing here mutates the tree.

use std::cmp::Ordering;

use super::AvlTree;
use crate::TreeError;
use crate::arena::NodeIndex;

impl<K: Ord> AvlTree<K> {
    /// Look up `key`, returning a reference to the stored key if present.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find_node(key).map(|idx| &self.nodes[idx].key)
    }

    /// Returns true if `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Get the smallest key in the tree, or `None` when empty.
    pub fn min(&self) -> Option<&K> {
        self.root.map(|root| &self.nodes[self.subtree_min(root)].key)
    }

    /// Get the largest key in the tree, or `None` when empty.
    pub fn max(&self) -> Option<&K> {
        self.root.map(|root| &self.nodes[self.subtree_max(root)].key)
    }

    /// Get the smallest stored key strictly greater than `key`.
    ///
    /// `key` itself does not have to be stored: callers probing a candidate
    /// key (e.g. a scheduler checking the spacing around a proposed slot)
    /// get the neighbor the candidate would have after insertion.
    pub fn successor(&self, key: &K) -> Option<&K> {
        if let Some(idx) = self.find_node(key) {
            return self
                .node_successor(idx)
                .map(|succ| &self.nodes[succ].key);
        }

        // Key is absent: the successor is the last node where the descent
        // towards the key's insertion slot went left.
        let mut best = None;
        let mut curr = self.root;
        while let Some(idx) = curr {
            let node = &self.nodes[idx];
            if *key < node.key {
                best = Some(idx);
                curr = node.left;
            } else {
                curr = node.right;
            }
        }
        best.map(|idx| &self.nodes[idx].key)
    }

    /// Get the largest stored key strictly less than `key`.
    ///
    /// Mirror image of [`successor`](Self::successor); `key` does not have
    /// to be stored.
    pub fn predecessor(&self, key: &K) -> Option<&K> {
        if let Some(idx) = self.find_node(key) {
            return self
                .node_predecessor(idx)
                .map(|pred| &self.nodes[pred].key);
        }

        let mut best = None;
        let mut curr = self.root;
        while let Some(idx) = curr {
            let node = &self.nodes[idx];
            if *key > node.key {
                best = Some(idx);
                curr = node.right;
            } else {
                curr = node.left;
            }
        }
        best.map(|idx| &self.nodes[idx].key)
    }

    /// Collect all keys in the inclusive range `[lo, hi]`, ascending.
    ///
    /// Returns [`TreeError::InvalidRange`] when `lo > hi`. An empty result
    /// is a normal `Ok` value.
    ///
    /// # Algorithm
    ///
    /// Rather than filtering a full traversal, descend from the root while
    /// both bounds fall strictly on the same side of the current key. The
    /// node where the descent stops is the lowest common ancestor of the
    /// two bounds' insertion points; a pruned in-order walk rooted there
    /// visits only subtrees that can intersect the range, so the total cost
    /// is O(height + result size).
    pub fn range(&self, lo: &K, hi: &K) -> Result<Vec<&K>, TreeError> {
        if lo > hi {
            return Err(TreeError::InvalidRange);
        }

        let mut curr = self.root;
        while let Some(idx) = curr {
            let node = &self.nodes[idx];
            if *hi < node.key {
                curr = node.left;
            } else if *lo > node.key {
                curr = node.right;
            } else {
                break;
            }
        }

        let mut out = Vec::new();
        if let Some(lca) = curr {
            self.collect_in_range(lca, lo, hi, &mut out);
        }
        Ok(out)
    }

    /// Pruned in-order traversal of the subtree rooted at `idx`.
    ///
    /// A subtree is entered only if the current key leaves room for range
    /// members on that side, so each call either emits a key or touches at
    /// most one out-of-range node per level.
    fn collect_in_range<'a>(&'a self, idx: NodeIndex, lo: &K, hi: &K, out: &mut Vec<&'a K>) {
        let node = &self.nodes[idx];

        if *lo < node.key
            && let Some(left) = node.left
        {
            self.collect_in_range(left, lo, hi, out);
        }
        if *lo <= node.key && node.key <= *hi {
            out.push(&node.key);
        }
        if *hi > node.key
            && let Some(right) = node.right
        {
            self.collect_in_range(right, lo, hi, out);
        }
    }

    /// Descend from the root to the node holding `key`, if any.
    pub(crate) fn find_node(&self, key: &K) -> Option<NodeIndex> {
        let mut curr = self.root;
        while let Some(idx) = curr {
            match key.cmp(&self.nodes[idx].key) {
                Ordering::Less => curr = self.nodes[idx].left,
                Ordering::Greater => curr = self.nodes[idx].right,
                Ordering::Equal => return Some(idx),
            }
        }
        None
    }

    /// Minimum of the subtree rooted at `idx`: descend all-left.
    pub(crate) fn subtree_min(&self, mut idx: NodeIndex) -> NodeIndex {
        while let Some(left) = self.nodes[idx].left {
            idx = left;
        }
        idx
    }

    /// Maximum of the subtree rooted at `idx`: descend all-right.
    pub(crate) fn subtree_max(&self, mut idx: NodeIndex) -> NodeIndex {
        while let Some(right) = self.nodes[idx].right {
            idx = right;
        }
        idx
    }

    /// In-order successor of the node at `idx`.
    ///
    /// If a right subtree exists the successor is its minimum. Otherwise
    /// walk parent links upward; the first ancestor reached from its left
    /// child is the successor, and reaching the root without ever being a
    /// left child means the node holds the maximum key.
    pub(crate) fn node_successor(&self, idx: NodeIndex) -> Option<NodeIndex> {
        if let Some(right) = self.nodes[idx].right {
            return Some(self.subtree_min(right));
        }

        let mut curr = idx;
        while let Some(parent) = self.nodes[curr].parent {
            if self.nodes[parent].left == Some(curr) {
                return Some(parent);
            }
            curr = parent;
        }
        None
    }

    /// In-order predecessor of the node at `idx`. Mirror image of
    /// [`node_successor`](Self::node_successor).
    pub(crate) fn node_predecessor(&self, idx: NodeIndex) -> Option<NodeIndex> {
        if let Some(left) = self.nodes[idx].left {
            return Some(self.subtree_max(left));
        }

        let mut curr = idx;
        while let Some(parent) = self.nodes[curr].parent {
            if self.nodes[parent].right == Some(curr) {
                return Some(parent);
            }
            curr = parent;
        }
        None
    }
}
