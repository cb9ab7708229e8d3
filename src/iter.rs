/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Iterator for traversing the tree in key order.

use crate::arena::NodeIndex;
use crate::tree::AvlTree;

/// An iterator that performs an in-order traversal of the tree, yielding
/// keys in ascending order.
///
/// The traversal is done iteratively using an explicit stack of left
/// spines rather than recursion, so deep trees cannot overflow the call
/// stack. The stack never holds more than `height + 1` entries.
#[derive(Debug)]
pub struct InOrderIter<'a, K> {
    /// Reference to the tree (used to resolve node indices).
    tree: &'a AvlTree<K>,
    /// Nodes whose key is still to be emitted, leftmost on top.
    stack: Vec<NodeIndex>,
}

impl<'a, K> InOrderIter<'a, K> {
    /// Create a new iterator over the whole tree.
    pub(crate) fn new(tree: &'a AvlTree<K>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::with_capacity(8),
        };
        iter.push_left_spine(tree.root_index());
        iter
    }

    /// Push `from` and its chain of left descendants onto the stack.
    fn push_left_spine(&mut self, from: Option<NodeIndex>) {
        let mut curr = from;
        while let Some(idx) = curr {
            self.stack.push(idx);
            curr = self.tree.node(idx).left;
        }
    }
}

impl<'a, K> Iterator for InOrderIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.tree.node(idx);
        self.push_left_spine(node.right);
        Some(&node.key)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = InOrderIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        InOrderIter::new(self)
    }
}
