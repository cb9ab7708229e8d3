/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug invariant checks for the AVL tree.
//!
//! These checks are compiled under `cfg(test)` or the `unittest` feature
//! flag and run after every mutation (`insert`, `remove`) to catch
//! structural violations early. A failure here is an implementation bug,
//! never a recoverable runtime condition, so every check is an assertion.

use super::AvlTree;
use crate::arena::NodeIndex;

impl<K: Ord> AvlTree<K> {
    /// Verify all structural invariants of the tree.
    ///
    /// Panics with a descriptive message if any invariant is violated:
    ///
    /// - BST ordering between every node and both its subtrees
    /// - cached heights equal to the heights recomputed from scratch
    /// - AVL balance factor within [-1, 1] at every node
    /// - parent back-references consistent with child links
    /// - memoized `len` equal to the number of reachable nodes, which in
    ///   turn must equal the number of occupied arena slots
    pub fn check_tree_invariants(&self) {
        let reachable = match self.root {
            Some(root) => {
                assert!(
                    self.nodes[root].parent.is_none(),
                    "root node must not have a parent"
                );
                self.check_node_invariants(root, None, None).0
            }
            None => 0,
        };

        assert_eq!(
            reachable, self.len,
            "memoized len ({}) does not match reachable node count ({reachable})",
            self.len,
        );
        assert_eq!(
            self.nodes.len(),
            self.len,
            "arena holds {} nodes but the tree owns {}; a node leaked or was freed twice",
            self.nodes.len(),
            self.len,
        );
    }

    /// Recursively check the subtree rooted at `idx` against the open
    /// key interval `(lo, hi)`.
    ///
    /// Returns `(size, height)` of the subtree, recomputed from scratch.
    fn check_node_invariants(
        &self,
        idx: NodeIndex,
        lo: Option<&K>,
        hi: Option<&K>,
    ) -> (usize, i32) {
        let node = &self.nodes[idx];

        if let Some(lo) = lo {
            assert!(
                *lo < node.key,
                "BST ordering violated at {idx:?}: key is not above its lower bound"
            );
        }
        if let Some(hi) = hi {
            assert!(
                node.key < *hi,
                "BST ordering violated at {idx:?}: key is not below its upper bound"
            );
        }

        let (left_size, left_height) = match node.left {
            Some(left) => {
                assert_eq!(
                    self.nodes[left].parent,
                    Some(idx),
                    "left child {left:?} does not point back at its parent {idx:?}"
                );
                self.check_node_invariants(left, lo, Some(&node.key))
            }
            None => (0, -1),
        };
        let (right_size, right_height) = match node.right {
            Some(right) => {
                assert_eq!(
                    self.nodes[right].parent,
                    Some(idx),
                    "right child {right:?} does not point back at its parent {idx:?}"
                );
                self.check_node_invariants(right, Some(&node.key), hi)
            }
            None => (0, -1),
        };

        let expected_height = 1 + left_height.max(right_height);
        assert_eq!(
            node.height, expected_height,
            "cached height at {idx:?} is {}, recomputed {expected_height} \
             (left={left_height}, right={right_height})",
            node.height,
        );

        let bf = left_height - right_height;
        assert!(
            bf.abs() <= 1,
            "AVL balance violated at {idx:?}: balance factor {bf} \
             (left={left_height}, right={right_height})",
        );

        (1 + left_size + right_size, node.height)
    }
}
