/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the AVL tree using `proptest`.

use std::collections::BTreeSet;

use avl_tree::AvlTree;

proptest::proptest! {
    #[test]
    fn prop_in_order_is_sorted_and_deduplicated(
        keys in proptest::collection::vec(-10_000i64..10_000, 1..300)
    ) {
        let mut tree = AvlTree::new();
        let mut expected = BTreeSet::new();
        for &key in &keys {
            let inserted = tree.insert(key);
            assert_eq!(inserted, expected.insert(key));
        }

        assert_eq!(tree.len(), expected.len());
        let in_order: Vec<i64> = tree.iter().copied().collect();
        let sorted: Vec<i64> = expected.iter().copied().collect();
        assert_eq!(in_order, sorted);
    }

    #[test]
    fn prop_height_stays_within_avl_bound(
        keys in proptest::collection::vec(-10_000i64..10_000, 1..500)
    ) {
        let tree: AvlTree<i64> = keys.iter().copied().collect();
        let bound = 1.4405 * ((tree.len() + 2) as f64).log2();
        assert!(
            (tree.height() as f64) <= bound,
            "height {} exceeds AVL bound {bound:.2} for {} keys",
            tree.height(),
            tree.len(),
        );
    }

    #[test]
    fn prop_interleaved_inserts_and_deletes_match_model(
        ops in proptest::collection::vec((proptest::bool::ANY, -100i64..100), 1..400)
    ) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();
        for &(is_insert, key) in &ops {
            if is_insert {
                assert_eq!(tree.insert(key), model.insert(key));
            } else {
                assert_eq!(tree.remove(&key), model.remove(&key));
            }
            assert_eq!(tree.len(), model.len());
        }

        let in_order: Vec<i64> = tree.iter().copied().collect();
        let expected: Vec<i64> = model.iter().copied().collect();
        assert_eq!(in_order, expected);
    }

    #[test]
    fn prop_deleting_everything_empties_the_tree(
        keys in proptest::collection::vec(-10_000i64..10_000, 1..200)
    ) {
        let mut tree = AvlTree::new();
        let distinct: BTreeSet<i64> = keys.iter().copied().collect();
        for &key in &keys {
            tree.insert(key);
        }
        for key in &distinct {
            assert!(tree.remove(key));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn prop_successor_predecessor_duality(
        keys in proptest::collection::btree_set(-10_000i64..10_000, 2..200)
    ) {
        let tree: AvlTree<i64> = keys.iter().copied().collect();
        let sorted: Vec<i64> = keys.iter().copied().collect();
        for pair in sorted.windows(2) {
            assert_eq!(tree.successor(&pair[0]), Some(&pair[1]));
            assert_eq!(tree.predecessor(&pair[1]), Some(&pair[0]));
        }
        assert_eq!(tree.successor(sorted.last().unwrap()), None);
        assert_eq!(tree.predecessor(sorted.first().unwrap()), None);
    }

    #[test]
    fn prop_range_equals_filtered_in_order(
        keys in proptest::collection::btree_set(-1_000i64..1_000, 0..200),
        bounds in (-1_200i64..1_200, -1_200i64..1_200)
    ) {
        let (a, b) = bounds;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let tree: AvlTree<i64> = keys.iter().copied().collect();
        let got: Vec<i64> = tree.range(&lo, &hi).unwrap().into_iter().copied().collect();
        let expected: Vec<i64> = keys.range(lo..=hi).copied().collect();
        assert_eq!(got, expected);
    }
}
