// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Pixel coordinate scrambler for square power-of-two RGBA textures.
//!
//! The scrambler owns a table with one 2D coordinate per output slot. Slot
//! `x * height + y` starts out holding `(x, y)`; every iteration moves each
//! coordinate through the cat map
//!
//! ```text
//! x' = ((a*b + 1)*x + y) mod width
//! y' = (a*x + b*y)       mod height
//! ```
//!
//! and after the requested iterations the output buffer is gathered through
//! the table: slot `i` receives the 4 bytes of source pixel
//! `table[i].x * height + table[i].y`. The source buffer is borrowed and never
//! written.

use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::error::{Result, ScrambleError};
use super::{Reduced, ScramblerConfig};

/// Channels per pixel (RGBA32).
pub const BYTES_PER_PIXEL: usize = 4;

/// A lattice coordinate in the scrambler's table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Arnold Cat Map scrambler over the pixels of one texture.
#[derive(Debug, Clone)]
pub struct TextureScrambler<'a> {
    source: &'a [u8],
    scrambled: Vec<u8>,
    coordinates: Vec<Coord>,
    width: u32,
    height: u32,
    config: ScramblerConfig,
    coeffs: Reduced,
    iterations: u64,
}

/// Check the geometry and return the pixel count.
fn validate_dimensions(width: u32, height: u32) -> Result<usize> {
    let invalid = ScrambleError::InvalidDimensions { width, height };
    if width != height || !width.is_power_of_two() {
        return Err(invalid);
    }
    (width as usize)
        .checked_mul(height as usize)
        .filter(|count| count.checked_mul(BYTES_PER_PIXEL).is_some())
        .ok_or(invalid)
}

/// Coordinate held by `slot` in the identity table.
#[inline]
fn identity_coord(slot: usize, height: u32) -> Coord {
    let h = height as usize;
    Coord::new((slot / h) as u32, (slot % h) as u32)
}

/// One cat-map round for a single coordinate.
#[inline]
fn step(c: Coord, k: &Reduced) -> Coord {
    let (x, y) = (u64::from(c.x), u64::from(c.y));
    Coord {
        x: k.mul_add(k.ab1, x, 1, y) as u32,
        y: k.mul_add(k.a, x, k.b, y) as u32,
    }
}

impl<'a> TextureScrambler<'a> {
    /// Create a scrambler for a `width` x `height` texture.
    ///
    /// `pixels` must hold `width * height * 4` bytes laid out so that pixel
    /// `x * height + y` starts at byte `(x * height + y) * 4`.
    ///
    /// # Errors
    /// - [`ScrambleError::InvalidDimensions`] unless the texture is square with
    ///   a (non-zero) power-of-two side.
    /// - [`ScrambleError::BufferSizeMismatch`] if `pixels` has the wrong length.
    pub fn new(pixels: &'a [u8], width: u32, height: u32, config: ScramblerConfig) -> Result<Self> {
        let pixel_count = validate_dimensions(width, height)?;

        let mut scrambler = Self {
            source: &[],
            scrambled: vec![0; pixel_count * BYTES_PER_PIXEL],
            coordinates: vec![Coord::default(); pixel_count],
            width,
            height,
            config,
            coeffs: Reduced::new(config, width),
            iterations: 0,
        };
        scrambler.initialize(pixels)?;
        Ok(scrambler)
    }

    /// Point the scrambler at a new source buffer and reset the coordinate
    /// table to the identity. Storage is reused; the geometry cannot change.
    ///
    /// The output buffer keeps its previous contents until the next
    /// [`scramble`](Self::scramble).
    pub fn initialize(&mut self, pixels: &'a [u8]) -> Result<()> {
        let expected = self.scrambled.len();
        if pixels.len() != expected {
            return Err(ScrambleError::BufferSizeMismatch { expected, actual: pixels.len() });
        }

        self.source = pixels;
        let height = self.height;
        for (slot, coord) in self.coordinates.iter_mut().enumerate() {
            *coord = identity_coord(slot, height);
        }
        self.iterations = 0;

        debug!(
            width = self.width,
            height,
            a = self.config.a,
            b = self.config.b,
            "texture scrambler initialized"
        );
        Ok(())
    }

    /// Advance the coordinate table by `iterations` rounds and regather the
    /// output buffer.
    ///
    /// Calls compose: `scramble(k1)` then `scramble(k2)` equals a single
    /// `scramble(k1 + k2)`. `scramble(0)` only regathers.
    #[instrument(level = "trace", skip(self), fields(width = self.width))]
    pub fn scramble(&mut self, iterations: u32) {
        let coeffs = self.coeffs;
        // Coordinates never read each other, so running every round on one
        // coordinate before moving to the next gives the same table.
        let advance = |c: &mut Coord| {
            for _ in 0..iterations {
                *c = step(*c, &coeffs);
            }
        };

        #[cfg(feature = "parallel")]
        self.coordinates.par_iter_mut().for_each(advance);
        #[cfg(not(feature = "parallel"))]
        self.coordinates.iter_mut().for_each(advance);

        self.iterations += u64::from(iterations);
        self.gather();
    }

    fn gather(&mut self) {
        let source = self.source;
        let coordinates = &self.coordinates;
        let height = self.height as usize;
        let copy = |(slot, out): (usize, &mut [u8])| {
            let c = coordinates[slot];
            let start = (c.x as usize * height + c.y as usize) * BYTES_PER_PIXEL;
            out.copy_from_slice(&source[start..start + BYTES_PER_PIXEL]);
        };

        #[cfg(feature = "parallel")]
        self.scrambled
            .par_chunks_exact_mut(BYTES_PER_PIXEL)
            .enumerate()
            .for_each(copy);
        #[cfg(not(feature = "parallel"))]
        self.scrambled
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .enumerate()
            .for_each(copy);
    }

    /// Pixels gathered by the last [`scramble`](Self::scramble) call
    /// (all zero before the first call).
    pub fn scrambled_pixels(&self) -> &[u8] {
        &self.scrambled
    }

    /// Current coordinate table, indexed by output slot.
    pub fn coordinates(&self) -> &[Coord] {
        &self.coordinates
    }

    /// `true` if every slot holds its starting coordinate.
    pub fn is_identity(&self) -> bool {
        self.coordinates
            .iter()
            .enumerate()
            .all(|(slot, &c)| c == identity_coord(slot, self.height))
    }

    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> ScramblerConfig {
        self.config
    }

    /// Iterations applied since the last [`initialize`](Self::initialize).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}
