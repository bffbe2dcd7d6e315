// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! # acm-scrambler
//!
//! Reversible scrambling of visual asset data with the Arnold Cat Map.
//! Provides two independent scramblers:
//!
//! - **Texture** ([`TextureScrambler`]): permutes the pixels of a square
//!   power-of-two RGBA32 texture.
//! - **Mesh** ([`MeshIndicesScrambler`]): remaps the index triples of a
//!   triangle mesh modulo its vertex count.
//!
//! Each `scramble(k)` call advances the state by `k` iterations from wherever
//! it stands. After a parameter-dependent period ([`texture_period`],
//! [`mesh_period`]) the original data reappears. This deters casual asset
//! extraction; it is not encryption.
//!
//! With the default `parallel` feature the per-pixel and per-triangle work
//! runs on rayon's thread pool.
//!
//! # Quick start
//!
//! ```rust
//! use acm_scrambler::{ScramblerConfig, TextureScrambler};
//!
//! let pixels: Vec<u8> = (0..4 * 4 * 4).map(|i| i as u8).collect();
//! let mut scrambler = TextureScrambler::new(&pixels, 4, 4, ScramblerConfig::default()).unwrap();
//!
//! scrambler.scramble(1);
//! assert_ne!(scrambler.scrambled_pixels(), &pixels[..]);
//!
//! // The 4x4 cat map has period 3.
//! scrambler.scramble(2);
//! assert_eq!(scrambler.scrambled_pixels(), &pixels[..]);
//! ```

pub mod acm;

pub use acm::error::{Result, ScrambleError};
pub use acm::{mesh_period, texture_period, Coord, ScramblerConfig, BYTES_PER_PIXEL};
pub use acm::{run_mesh_cycle, run_texture_cycle, CycleOutcome, Progress, DEFAULT_MAX_ITERATIONS};
pub use acm::{MeshIndicesScrambler, TextureScrambler};
