/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for in-order iteration.

use avl_tree::AvlTree;

use crate::helpers::build_tree;

#[test]
fn test_iter_is_ascending() {
    let tree = build_tree(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    let keys: Vec<i64> = tree.iter().copied().collect();
    assert_eq!(keys, [1, 3, 4, 6, 7, 8, 10, 13, 14]);
}

#[test]
fn test_iter_empty_tree() {
    let tree = AvlTree::<i64>::new();
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn test_into_iterator_for_ref() {
    let tree = build_tree(&[2, 1, 3]);
    let mut collected = Vec::new();
    for key in &tree {
        collected.push(*key);
    }
    assert_eq!(collected, [1, 2, 3]);
}

#[test]
fn test_iter_survives_deep_trees() {
    // The iterator uses an explicit stack; a few thousand nodes must not
    // blow anything up and must still come out sorted.
    let mut tree = AvlTree::new();
    for key in (0..4096i64).rev() {
        tree.insert(key);
    }
    let keys: Vec<i64> = tree.iter().copied().collect();
    assert_eq!(keys.len(), 4096);
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_in_order_matches_iter() {
    let tree = build_tree(&[5, 1, 9, 3, 7, 12]);
    let via_iter: Vec<&i64> = tree.iter().collect();
    assert_eq!(tree.in_order(), via_iter);
}
