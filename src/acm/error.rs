// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the scramblers.
//!
//! All geometry problems are caught at construction (or when a new source
//! buffer is handed to `initialize`). Once a scrambler exists, `scramble`
//! cannot fail: every value it produces is reduced modulo the lattice size.

use core::fmt;

/// Errors that can occur while building or driving a scrambler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// Texture is not square, not a power of two, or too large to address.
    InvalidDimensions { width: u32, height: u32 },
    /// Mesh index count is not a multiple of 3.
    InvalidLength(usize),
    /// Mesh vertex count is zero.
    InvalidVertexCount,
    /// Source buffer length does not match the scrambler's geometry.
    BufferSizeMismatch { expected: usize, actual: usize },
    /// The cycle driver was cancelled through its [`Progress`](super::progress::Progress).
    Cancelled,
}

impl fmt::Display for ScrambleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "texture must be square with power-of-two dimensions (got {width}x{height})"
            ),
            Self::InvalidLength(len) => {
                write!(f, "index count {len} is not a multiple of 3")
            }
            Self::InvalidVertexCount => write!(f, "vertex count must be non-zero"),
            Self::BufferSizeMismatch { expected, actual } => {
                write!(f, "source buffer has {actual} elements, expected {expected}")
            }
            Self::Cancelled => write!(f, "operation cancelled"),
        }
    }
}

impl std::error::Error for ScrambleError {}

pub type Result<T> = std::result::Result<T, ScrambleError>;
