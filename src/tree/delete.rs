/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: deletion.
//!
//! Deletion applies one of the three standard BST structural cases (leaf,
//! one child, two children) and then repairs heights and balance from the
//! deepest altered node upward. Unlike insertion, a delete can require
//! rotations at several ancestor levels, which the upward repair loop in
//! [`rebalance`](super::rebalance) handles.

use super::AvlTree;
use crate::arena::NodeIndex;

impl<K: Ord> AvlTree<K> {
    /// Remove `key` from the tree.
    ///
    /// Returns `false` when the key is absent; absence is a normal result,
    /// never an error.
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = match self.find_node(key) {
            Some(idx) => {
                self.remove_node(idx);
                self.len -= 1;
                true
            }
            None => false,
        };

        #[cfg(any(test, feature = "unittest"))]
        self.check_tree_invariants();

        removed
    }

    /// Structurally remove the node at `idx` and rebalance.
    ///
    /// For a two-child node the node itself is not unlinked: its key is
    /// overwritten with the in-order successor's key and the successor node
    /// (which has no left child) is the one physically released. This keeps
    /// the surviving node identity stable for the two-child case.
    fn remove_node(&mut self, idx: NodeIndex) {
        match (self.nodes[idx].left, self.nodes[idx].right) {
            (None, None) => {
                // Leaf: detach from the parent's child slot, or clear the
                // root if this was the last node.
                let parent = self.nodes[idx].parent;
                self.replace_child(parent, idx, None);
                self.nodes.remove(idx);
                self.rebalance_from(parent);
            }
            (Some(child), None) | (None, Some(child)) => {
                // One child: splice the child into this node's position.
                let parent = self.nodes[idx].parent;
                self.nodes[child].parent = parent;
                self.replace_child(parent, idx, Some(child));
                self.nodes.remove(idx);
                self.rebalance_from(parent);
            }
            (Some(_), Some(right)) => {
                // Two children: the in-order successor is the minimum of
                // the right subtree and has no left child by construction,
                // so detaching it is a one-child splice at most.
                let succ = self.subtree_min(right);
                let succ_parent = self.nodes[succ]
                    .parent
                    .expect("successor inside a subtree always has a parent");
                let succ_right = self.nodes[succ].right;

                if let Some(sr) = succ_right {
                    self.nodes[sr].parent = Some(succ_parent);
                }
                self.replace_child(Some(succ_parent), succ, succ_right);

                let succ_node = self.nodes.remove(succ);
                self.nodes[idx].key = succ_node.key;

                // The deepest structurally altered node is the successor's
                // former parent (which may be `idx` itself when the right
                // child had no left descendants).
                self.rebalance_from(Some(succ_parent));
            }
        }
    }
}
