// SPDX-License-Identifier: Apache-2.0

use crate::allocator::AllocError;

/// Errors that can occur while building a tree from JSON text.
///
/// There are exactly two kinds: either memory ran out, or the input does not
/// follow the accepted grammar. The error is returned per call; no shared
/// error state is kept anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// An allocation or growth operation was refused by the allocation gate.
    OutOfMemory,
    /// The input deviated from the accepted JSON grammar.
    MalformedInput,
}

impl From<AllocError> for ParseError {
    fn from(_: AllocError) -> Self {
        ParseError::OutOfMemory
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::OutOfMemory => write!(f, "out of memory"),
            ParseError::MalformedInput => write!(f, "malformed input"),
        }
    }
}
