/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for tree nodes.
//!
//! This module provides arena-based storage for tree nodes, offering better
//! cache locality and cheaper rotations (index rewrites instead of moving
//! allocations) compared to boxed pointers.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::node::Node;

/// Index into the node arena.
///
/// A lightweight handle that stays stable across mutations to other slots
/// in the slab. Tree edges (parent/left/right) are stored as `NodeIndex`
/// values, so identity comparisons are slot comparisons, never reference
/// aliasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct NodeIndex(usize);

impl NodeIndex {
    /// Return the underlying slot for indexing into the [`Slab`].
    const fn slot(self) -> usize {
        self.0
    }
}

/// Arena storage for [`Node`]s.
///
/// A newtype wrapper around [`Slab<Node<K>>`] that provides type-safe
/// indexing via [`NodeIndex`] instead of raw `usize`.
#[derive(Debug)]
pub(crate) struct NodeArena<K> {
    nodes: Slab<Node<K>>,
}

impl<K> NodeArena<K> {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Get the number of nodes currently stored in the arena.
    ///
    /// This is not to be confused with the current _capacity_ of the
    /// arena, i.e. the size of the underlying currently-allocated slab.
    #[cfg(any(test, feature = "unittest"))]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a node into the arena, returning its index.
    pub fn insert(&mut self, node: Node<K>) -> NodeIndex {
        NodeIndex(self.nodes.insert(node))
    }

    /// Remove a node from the arena, returning it.
    ///
    /// # Panics
    ///
    /// Panics if the index is invalid.
    pub fn remove(&mut self, idx: NodeIndex) -> Node<K> {
        self.nodes.remove(idx.slot())
    }

    /// Drop all nodes, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<K> Default for NodeArena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Index<NodeIndex> for NodeArena<K> {
    type Output = Node<K>;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.slot()]
    }
}

impl<K> IndexMut<NodeIndex> for NodeArena<K> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.slot()]
    }
}
