/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Error types for tree operations.
//!
//! Routine absence of a key is never an error: search misses are `None`,
//! delete misses are `false`. The only recoverable error is a malformed
//! range query.

/// Errors returned by fallible tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A range query was issued with a lower bound greater than its
    /// upper bound.
    #[error("invalid range: lower bound is greater than upper bound")]
    InvalidRange,
}
