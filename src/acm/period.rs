// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Analytic periods of the two transforms.
//!
//! Both scramblers are linear maps on `Z_n x Z_n`, so the number of
//! iterations after which they return to the starting state is the
//! multiplicative order of their 2x2 matrix modulo `n`:
//!
//! - texture: `[[ab+1, 1], [a, b]]` on `(x, y)`, `n = width`
//! - mesh: `[[1, a], [b, ab+1]]` on `(x, z)`, `n = vertex_count`
//!
//! The order exists only when the determinant is a unit modulo `n`. The
//! mesh matrix always has determinant 1; the texture matrix has
//! determinant `(ab+1)b - a`, which is even for some `(a, b)` (e.g. `a = b = 2`)
//! and then collapses coordinates so the table never comes back.

use super::{Reduced, ScramblerConfig};

type Matrix = [[u64; 2]; 2];

fn mul_mod(l: &Matrix, r: &Matrix, n: u64) -> Matrix {
    let entry = |i: usize, j: usize| ((l[i][0] * r[0][j]) % n + (l[i][1] * r[1][j]) % n) % n;
    [[entry(0, 0), entry(0, 1)], [entry(1, 0), entry(1, 1)]]
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Multiplicative order of `m` modulo `n`, or `None` if `m` is not invertible.
fn matrix_order(m: Matrix, n: u64) -> Option<u64> {
    let det = ((m[0][0] * m[1][1]) % n + n - (m[0][1] * m[1][0]) % n) % n;
    if gcd(det, n) != 1 {
        return None;
    }

    let one = 1 % n;
    let identity = [[one, 0], [0, one]];
    // The order of any element of GL2(Z_n) is below n^2.
    let bound = n.saturating_mul(n).max(1);

    let mut power = m;
    let mut k = 1u64;
    while power != identity {
        if k >= bound {
            return None;
        }
        power = mul_mod(&power, &m, n);
        k += 1;
    }
    Some(k)
}

/// Iterations after which a [`TextureScrambler`](super::TextureScrambler) of
/// side `size` returns its coordinate table to the identity.
///
/// Returns `None` for `size == 0` and for coefficients whose map is not
/// invertible modulo `size`.
pub fn texture_period(size: u32, config: ScramblerConfig) -> Option<u64> {
    if size == 0 {
        return None;
    }
    let k = Reduced::new(config, size);
    matrix_order([[k.ab1, 1 % k.modulus], [k.a, k.b]], k.modulus)
}

/// Iterations after which a [`MeshIndicesScrambler`](super::MeshIndicesScrambler)
/// returns any buffer of in-range indices to its starting values.
///
/// A particular buffer may come back earlier; a buffer holding every `(x, z)`
/// pair returns exactly at this period. Returns `None` for `vertex_count == 0`.
pub fn mesh_period(vertex_count: u32, config: ScramblerConfig) -> Option<u64> {
    if vertex_count == 0 {
        return None;
    }
    let k = Reduced::new(config, vertex_count);
    matrix_order([[1 % k.modulus, k.a], [k.b, k.ab1]], k.modulus)
}
