/*
 * SPDX-FileCopyrightText: 2025 the swf-bitstream authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Decode errors reported by [`BitStream`](crate::stream::BitStream).
//!
//! The stream performs no recovery: every error is returned to the caller,
//! which decides whether to skip the enclosing tag or abandon the asset.

/// Error type for all reads and seeks on a [`BitStream`](crate::stream::BitStream).
///
/// Positions are byte offsets from the start of the buffer. A failed read
/// does not advance the cursor, so the position in the error is also the
/// position at which the stream can still be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub enum StreamError {
    /// A read of `requested` more bytes would pass the end of the buffer.
    UnexpectedEof { pos: usize, requested: usize },
    /// A seek outside `[0, len]`.
    SeekOutOfBounds { pos: i64, len: usize },
    /// A null-terminated string read hit the end of the buffer before a NUL.
    UnterminatedString { pos: usize },
    /// A string read found bytes that are not valid UTF-8.
    InvalidUtf8 { pos: usize },
}

impl core::error::Error for StreamError {}
impl core::fmt::Display for StreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StreamError::UnexpectedEof { pos, requested } => {
                write!(
                    f,
                    "Unexpected end of stream at byte {} ({} more bytes requested)",
                    pos, requested
                )
            }
            StreamError::SeekOutOfBounds { pos, len } => {
                write!(f, "Seek to byte {} outside stream of {} bytes", pos, len)
            }
            StreamError::UnterminatedString { pos } => {
                write!(f, "String starting at byte {} has no terminator", pos)
            }
            StreamError::InvalidUtf8 { pos } => {
                write!(f, "String starting at byte {} is not valid UTF-8", pos)
            }
        }
    }
}
