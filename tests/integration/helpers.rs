/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Shared test helpers for the avl_tree integration tests.

use avl_tree::AvlTree;

/// Build a tree from the given keys in the given order.
pub fn build_tree(keys: &[i64]) -> AvlTree<i64> {
    keys.iter().copied().collect()
}

/// Assert that the tree's in-order sequence is exactly `expected`.
pub fn assert_in_order(tree: &AvlTree<i64>, expected: &[i64]) {
    let keys: Vec<i64> = tree.iter().copied().collect();
    assert_eq!(keys, expected);
}

/// The AVL height bound: a tree with `n` keys is never taller than
/// `1.4405 * log2(n + 2)`.
pub fn assert_height_bound(tree: &AvlTree<i64>) {
    let n = tree.len();
    let bound = 1.4405 * ((n + 2) as f64).log2();
    assert!(
        (tree.height() as f64) <= bound,
        "height {} exceeds AVL bound {bound:.2} for {n} keys",
        tree.height(),
    );
}
