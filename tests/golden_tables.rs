// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Pinned transform outputs.
//!
//! These tables are the ground truth for the modular formulas and the
//! `x * height + y` slot layout. If any of them changes, previously
//! scrambled assets can no longer be restored by running out the period.

use acm_scrambler::{Coord, MeshIndicesScrambler, ScramblerConfig, TextureScrambler};

fn coords(pairs: &[(u32, u32)]) -> Vec<Coord> {
    pairs.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

fn table_after(side: u32, iterations: u32) -> Vec<Coord> {
    let px = vec![0u8; (side * side * 4) as usize];
    let mut s = TextureScrambler::new(&px, side, side, ScramblerConfig::default()).unwrap();
    s.scramble(iterations);
    s.coordinates().to_vec()
}

#[test]
fn pin_width2_tables() {
    assert_eq!(table_after(2, 0), coords(&[(0, 0), (0, 1), (1, 0), (1, 1)]));
    assert_eq!(table_after(2, 1), coords(&[(0, 0), (1, 1), (0, 1), (1, 0)]));
    assert_eq!(table_after(2, 2), coords(&[(0, 0), (1, 0), (1, 1), (0, 1)]));
    assert_eq!(table_after(2, 3), table_after(2, 0));
}

#[test]
fn pin_width4_one_iteration() {
    let expected = coords(&[
        (0, 0), (1, 1), (2, 2), (3, 3),
        (2, 1), (3, 2), (0, 3), (1, 0),
        (0, 2), (1, 3), (2, 0), (3, 1),
        (2, 3), (3, 0), (0, 1), (1, 2),
    ]);
    assert_eq!(table_after(4, 1), expected);
}

#[test]
fn pin_width4_two_iterations() {
    let expected = coords(&[
        (0, 0), (3, 2), (2, 0), (1, 2),
        (1, 3), (0, 1), (3, 3), (2, 1),
        (2, 2), (1, 0), (0, 2), (3, 0),
        (3, 1), (2, 3), (1, 1), (0, 3),
    ]);
    assert_eq!(table_after(4, 2), expected);
}

#[test]
fn pin_width4_gathered_pixels() {
    // Pixel p is [p, 0x10 + p, 0x20 + p, 0xFF].
    let px: Vec<u8> = (0u8..16).flat_map(|p| [p, 0x10 + p, 0x20 + p, 0xFF]).collect();
    let mut s = TextureScrambler::new(&px, 4, 4, ScramblerConfig::default()).unwrap();
    s.scramble(1);

    let order: Vec<u8> = s.scrambled_pixels().chunks(4).map(|p| p[0]).collect();
    assert_eq!(order, vec![0, 5, 10, 15, 9, 14, 3, 4, 2, 7, 8, 13, 11, 12, 1, 6]);
    for (slot, pixel) in s.scrambled_pixels().chunks(4).enumerate() {
        let p = order[slot];
        assert_eq!(pixel, &[p, 0x10 + p, 0x20 + p, 0xFF], "slot {slot}");
    }
}

#[test]
fn pin_mesh_one_iteration() {
    let mut s = MeshIndicesScrambler::new(&[0, 1, 2, 1, 2, 3], 4, ScramblerConfig::default()).unwrap();
    s.scramble(1);
    assert_eq!(s.scrambled_indices(), &[2, 1, 0, 0, 2, 3]);
}

#[test]
fn pin_mesh_custom_coefficients() {
    // a = 2, b = 3, ab1 = 7; (1, 4, 5) mod 10:
    // x' = 1 + 2*5 = 11 -> 1, y' = 4, z' = 3*1 + 7*5 = 38 -> 8
    let mut s = MeshIndicesScrambler::new(&[1, 4, 5], 10, ScramblerConfig::new(2, 3)).unwrap();
    s.scramble(1);
    assert_eq!(s.scrambled_indices(), &[1, 4, 8]);
}
