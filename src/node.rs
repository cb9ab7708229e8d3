/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Node - One stored key in the AVL tree plus its structural bookkeeping.

use crate::arena::NodeIndex;

/// A node in the AVL tree.
///
/// All keys in the left subtree are strictly less than `key`, all keys in
/// the right subtree strictly greater. Child links are the owning edges of
/// the tree; the parent link is a non-owning back-reference used only for
/// upward traversal.
#[derive(Debug)]
pub(crate) struct Node<K> {
    /// The stored key.
    pub key: K,

    /// Cached height of the subtree rooted at this node.
    /// A leaf has height 0; an absent child counts as height -1.
    pub height: i32,

    /// Back-reference to the parent node. `None` for the root.
    pub parent: Option<NodeIndex>,

    /// Left child (keys < `key`).
    pub left: Option<NodeIndex>,

    /// Right child (keys > `key`).
    pub right: Option<NodeIndex>,
}

impl<K> Node<K> {
    /// Create a new leaf node attached under `parent`.
    pub const fn leaf(key: K, parent: Option<NodeIndex>) -> Self {
        Self {
            key,
            height: 0,
            parent,
            left: None,
            right: None,
        }
    }
}
