/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion.
//!
//! Insertion is a plain BST descent that attaches a new leaf, followed by
//! the bottom-up height/balance repair in [`rebalance`](super::rebalance).

use std::cmp::Ordering;

use super::AvlTree;
use crate::node::Node;

impl<K: Ord> AvlTree<K> {
    /// Insert `key` into the tree.
    ///
    /// Returns `true` if the key was inserted. Inserting a key that is
    /// already present is a no-op returning `false`; the stored key and the
    /// tree structure are left untouched.
    ///
    /// After the structural edit the tree is rebalanced from the new leaf
    /// upward, so the AVL invariant holds again by the time this returns.
    /// A single insert raises the tree height by at most one.
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = self.insert_inner(key);

        #[cfg(any(test, feature = "unittest"))]
        self.check_tree_invariants();

        inserted
    }

    fn insert_inner(&mut self, key: K) -> bool {
        // Descend to the insertion slot, remembering the last visited node
        // and which side the final empty slot was on.
        let mut parent = None;
        let mut went_left = false;
        let mut curr = self.root;
        while let Some(idx) = curr {
            match key.cmp(&self.nodes[idx].key) {
                Ordering::Less => {
                    parent = Some(idx);
                    went_left = true;
                    curr = self.nodes[idx].left;
                }
                Ordering::Greater => {
                    parent = Some(idx);
                    went_left = false;
                    curr = self.nodes[idx].right;
                }
                Ordering::Equal => return false,
            }
        }

        let new_idx = self.nodes.insert(Node::leaf(key, parent));
        match parent {
            None => self.root = Some(new_idx),
            Some(p) if went_left => self.nodes[p].left = Some(new_idx),
            Some(p) => self.nodes[p].right = Some(new_idx),
        }
        self.len += 1;

        self.rebalance_from(Some(new_idx));
        true
    }
}
