/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AvlTree - A self-balancing binary search tree over generic ordered keys.
//!
//! This crate provides an ordered key store that maintains logarithmic height
//! under arbitrary insertion/deletion sequences via AVL rotations. On top of
//! the balanced structure it offers the usual ordered-set toolkit: search,
//! minimum/maximum, successor/predecessor, in-order iteration, and range
//! queries pruned through the lowest common ancestor of the two bounds.
//!
//! # Overview
//!
//! The tree stores exactly one key per node. Keys may be any type with a
//! strict total order (`Ord`). It provides:
//!
//! - O(log n) insert, delete, and search
//! - O(log n) min/max/successor/predecessor
//! - Range queries in O(log n + result size)
//! - Ascending in-order iteration
//!
//! # Arena Storage
//!
//! Nodes live in an arena ([`slab::Slab`] under the hood) and reference each
//! other by index. Parent links are plain back-reference indices, never
//! ownership edges, so the ownership graph stays a strict tree and rotations
//! only rewrite indices.
//!
//! # Example
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30, 25] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.in_order(), [&10, &20, &25, &30]);
//! assert_eq!(tree.successor(&20), Some(&25));
//!
//! // Inclusive range query
//! let hits = tree.range(&15, &27).unwrap();
//! assert_eq!(hits, [&20, &25]);
//!
//! tree.remove(&20);
//! assert_eq!(tree.len(), 3);
//! ```

mod arena;
mod error;
mod iter;
mod node;
mod tree;

pub use error::TreeError;
pub use iter::InOrderIter;
pub use tree::AvlTree;
