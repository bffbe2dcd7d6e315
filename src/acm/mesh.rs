// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Index triple scrambler for triangle meshes.
//!
//! Each triangle `(x, y, z)` of the index buffer is remapped in place:
//!
//! ```text
//! x' = (x + a*z)           mod vertex_count
//! y' = y                   mod vertex_count
//! z' = (b*x + (a*b + 1)*z) mod vertex_count
//! ```
//!
//! Unlike the texture scrambler there is no gather step: the indices
//! themselves become new values, and the state buffer is the output.
//! The `(x, z)` matrix `[[1, a], [b, ab + 1]]` has determinant 1 for every
//! `a` and `b`, so the map is always invertible on in-range indices.

use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::error::{Result, ScrambleError};
use super::{Reduced, ScramblerConfig};

/// Arnold Cat Map scrambler over the index triples of one mesh.
#[derive(Debug, Clone)]
pub struct MeshIndicesScrambler {
    scrambled: Vec<u32>,
    vertex_count: u32,
    config: ScramblerConfig,
    coeffs: Reduced,
    iterations: u64,
}

/// One round for a single triangle. All three corners are read first.
#[inline]
fn step(tri: &mut [u32], k: &Reduced) {
    let (x, y, z) = (u64::from(tri[0]), u64::from(tri[1]), u64::from(tri[2]));
    tri[0] = k.mul_add(1, x, k.a, z) as u32;
    tri[1] = (y % k.modulus) as u32;
    tri[2] = k.mul_add(k.b, x, k.ab1, z) as u32;
}

impl MeshIndicesScrambler {
    /// Create a scrambler over `indices`, a flat list of triangle corners.
    ///
    /// # Errors
    /// - [`ScrambleError::InvalidLength`] if `indices.len()` is not a multiple of 3.
    /// - [`ScrambleError::InvalidVertexCount`] if `vertex_count` is zero.
    pub fn new(indices: &[u32], vertex_count: u32, config: ScramblerConfig) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(ScrambleError::InvalidLength(indices.len()));
        }
        if vertex_count == 0 {
            return Err(ScrambleError::InvalidVertexCount);
        }

        let mut scrambler = Self {
            scrambled: vec![0; indices.len()],
            vertex_count,
            config,
            coeffs: Reduced::new(config, vertex_count),
            iterations: 0,
        };
        scrambler.initialize(indices)?;
        Ok(scrambler)
    }

    /// Copy `indices` into the state buffer verbatim. The index count must
    /// match the one the scrambler was created with.
    pub fn initialize(&mut self, indices: &[u32]) -> Result<()> {
        if indices.len() != self.scrambled.len() {
            return Err(ScrambleError::BufferSizeMismatch {
                expected: self.scrambled.len(),
                actual: indices.len(),
            });
        }
        self.scrambled.copy_from_slice(indices);
        self.iterations = 0;

        debug!(
            triangles = self.triangle_count(),
            vertex_count = self.vertex_count,
            a = self.config.a,
            b = self.config.b,
            "mesh scrambler initialized"
        );
        Ok(())
    }

    /// Apply `iterations` rounds to every triangle.
    ///
    /// Triangles are independent of each other; calls compose additively.
    #[instrument(level = "trace", skip(self), fields(vertex_count = self.vertex_count))]
    pub fn scramble(&mut self, iterations: u32) {
        let coeffs = self.coeffs;
        let advance = |tri: &mut [u32]| {
            for _ in 0..iterations {
                step(tri, &coeffs);
            }
        };

        #[cfg(feature = "parallel")]
        self.scrambled.par_chunks_exact_mut(3).for_each(advance);
        #[cfg(not(feature = "parallel"))]
        self.scrambled.chunks_exact_mut(3).for_each(advance);

        self.iterations += u64::from(iterations);
    }

    /// Current indices, three per triangle.
    pub fn scrambled_indices(&self) -> &[u32] {
        &self.scrambled
    }

    pub fn triangle_count(&self) -> usize {
        self.scrambled.len() / 3
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn config(&self) -> ScramblerConfig {
        self.config
    }

    /// Iterations applied since the last [`initialize`](Self::initialize).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}
