/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Height maintenance, balance factors, and AVL rotations.
//!
//! Invoked by the write path after every structural edit; never part of
//! the public surface. The repair walks parent links from the deepest
//! altered node all the way to the root, recomputing cached heights and
//! rotating wherever a node's balance factor leaves [-1, 1].

use super::AvlTree;
use crate::arena::NodeIndex;

impl<K: Ord> AvlTree<K> {
    /// Repair heights and balance on the path from `start` to the root.
    ///
    /// At each ancestor: recompute the cached height, then classify any
    /// imbalance by the heavier side and the heavier grandchild side, and
    /// apply the single or double rotation that fixes it.
    ///
    /// The walk deliberately continues past the first fix: one rotation is
    /// enough after an insert, but a delete can shorten a subtree in a way
    /// that unbalances several ancestors, each needing its own rotation.
    pub(super) fn rebalance_from(&mut self, start: Option<NodeIndex>) {
        let mut curr = start;
        while let Some(idx) = curr {
            self.update_height(idx);

            // Capture before rotating: a rotation re-parents `idx`, but the
            // subtree that replaces it hangs off the same ancestor.
            let parent = self.nodes[idx].parent;

            let bf = self.balance_factor(idx);
            if bf > 1 {
                // Left-heavy. A left child tilted right needs the double
                // (LR) rotation; a balanced or left-tilted child takes the
                // single (LL) rotation. The balanced case only occurs after
                // a delete, and rotating it double would push the imbalance
                // below the repair walk.
                let left = self.nodes[idx]
                    .left
                    .expect("left-heavy node always has a left child");
                if self.balance_factor(left) < 0 {
                    self.rotate_left(left);
                }
                self.rotate_right(idx);
            } else if bf < -1 {
                // Right-heavy: mirror image (RL / RR).
                let right = self.nodes[idx]
                    .right
                    .expect("right-heavy node always has a right child");
                if self.balance_factor(right) > 0 {
                    self.rotate_right(right);
                }
                self.rotate_left(idx);
            }

            curr = parent;
        }
    }

    /// Height of an optional child; an absent child counts as -1.
    fn height_of(&self, child: Option<NodeIndex>) -> i32 {
        child.map_or(-1, |idx| self.nodes[idx].height)
    }

    /// Recompute the cached height of `idx` from its children.
    fn update_height(&mut self, idx: NodeIndex) {
        let height = 1 + self
            .height_of(self.nodes[idx].left)
            .max(self.height_of(self.nodes[idx].right));
        self.nodes[idx].height = height;
    }

    /// Balance factor of `idx`: height(left) - height(right).
    fn balance_factor(&self, idx: NodeIndex) -> i32 {
        self.height_of(self.nodes[idx].left) - self.height_of(self.nodes[idx].right)
    }

    /// Left rotation around `idx`: its right child becomes the subtree
    /// root, `idx` becomes that child's left child, and the child's former
    /// left subtree moves under `idx`. O(1) index rewrites.
    fn rotate_left(&mut self, idx: NodeIndex) {
        let pivot = self.nodes[idx]
            .right
            .expect("rotate_left requires a right child");
        let parent = self.nodes[idx].parent;
        let moved = self.nodes[pivot].left;

        self.nodes[idx].right = moved;
        if let Some(m) = moved {
            self.nodes[m].parent = Some(idx);
        }

        self.nodes[pivot].left = Some(idx);
        self.nodes[idx].parent = Some(pivot);
        self.nodes[pivot].parent = parent;
        self.replace_child(parent, idx, Some(pivot));

        // The rotated pair are the only nodes whose subtrees changed;
        // `idx` is now below `pivot`, so it goes first.
        self.update_height(idx);
        self.update_height(pivot);
    }

    /// Right rotation around `idx`. Mirror image of
    /// [`rotate_left`](Self::rotate_left).
    fn rotate_right(&mut self, idx: NodeIndex) {
        let pivot = self.nodes[idx]
            .left
            .expect("rotate_right requires a left child");
        let parent = self.nodes[idx].parent;
        let moved = self.nodes[pivot].right;

        self.nodes[idx].left = moved;
        if let Some(m) = moved {
            self.nodes[m].parent = Some(idx);
        }

        self.nodes[pivot].right = Some(idx);
        self.nodes[idx].parent = Some(pivot);
        self.nodes[pivot].parent = parent;
        self.replace_child(parent, idx, Some(pivot));

        self.update_height(idx);
        self.update_height(pivot);
    }
}
