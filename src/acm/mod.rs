// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Arnold Cat Map scramblers.
//!
//! Two independent scramblers apply iterated modular transforms to asset
//! data:
//!
//! - [`TextureScrambler`]: permutes the pixels of a square power-of-two RGBA
//!   texture by moving a table of 2D coordinates through the cat map and
//!   gathering pixel bytes through it.
//! - [`MeshIndicesScrambler`]: remaps every `(x, y, z)` index triple of a
//!   triangle mesh modulo the vertex count.
//!
//! Both are deterministic in (source, `a`, `b`, total iterations) and return to
//! their starting state after a finite period (see [`period`]) whenever the
//! transform is invertible. This is obfuscation, not encryption: the map and
//! its parameters are trivially invertible by anyone who knows them.

pub mod cycle;
pub mod error;
pub mod mesh;
pub mod period;
pub mod progress;
pub mod texture;

pub use cycle::{run_mesh_cycle, run_texture_cycle, CycleOutcome, DEFAULT_MAX_ITERATIONS};
pub use error::ScrambleError;
pub use mesh::MeshIndicesScrambler;
pub use period::{mesh_period, texture_period};
pub use progress::Progress;
pub use texture::{Coord, TextureScrambler, BYTES_PER_PIXEL};

/// Cat-map coefficients `a` and `b`, shared by both scramblers.
///
/// The transforms use `a`, `b` and `a*b + 1`; with the default `a = b = 1` the
/// texture map is the classic `[[2, 1], [1, 1]]` cat map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScramblerConfig {
    pub a: u32,
    pub b: u32,
}

impl ScramblerConfig {
    pub const fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }
}

impl Default for ScramblerConfig {
    fn default() -> Self {
        Self { a: 1, b: 1 }
    }
}

/// Coefficients reduced modulo a lattice size.
///
/// Every operand is brought below the modulus before it is multiplied, so the
/// arithmetic stays in `u64` for any `u32` input and matches the exact integer
/// formulas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Reduced {
    pub a: u64,
    pub b: u64,
    pub ab1: u64,
    pub modulus: u64,
}

impl Reduced {
    /// `modulus` must be non-zero.
    pub(crate) fn new(config: ScramblerConfig, modulus: u32) -> Self {
        let n = u64::from(modulus);
        let a = u64::from(config.a) % n;
        let b = u64::from(config.b) % n;
        let ab1 = (a * b + 1) % n;
        Self { a, b, ab1, modulus: n }
    }

    /// `(p*x + q*y) mod n`.
    #[inline]
    pub(crate) fn mul_add(&self, p: u64, x: u64, q: u64, y: u64) -> u64 {
        let n = self.modulus;
        ((p * (x % n)) % n + (q * (y % n)) % n) % n
    }
}
