// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Scramble the index buffer of a triangulated grid until it comes back.
//!
//! Usage: `cargo run --example mesh_cycle -- [cells] [a] [b]`
//! (defaults: 32 1 1).

use acm_scrambler::{mesh_period, run_mesh_cycle, MeshIndicesScrambler, Progress, ScramblerConfig, DEFAULT_MAX_ITERATIONS};
use tracing_subscriber::EnvFilter;

/// Largest grid accepted on the command line.
const MAX_CELLS: u32 = 1024;

fn validate_cells(cells: u32) -> Result<u32, String> {
    if cells == 0 || cells > MAX_CELLS {
        return Err(format!("cells must be in 1..={MAX_CELLS} (got {cells})"));
    }
    Ok(cells)
}

/// Two triangles per cell of a `cells` x `cells` grid; returns (indices, vertex count).
fn grid(cells: u32) -> (Vec<u32>, u32) {
    let stride = cells + 1;
    let mut indices = Vec::with_capacity(cells as usize * cells as usize * 6);
    for row in 0..cells {
        for col in 0..cells {
            let v = row * stride + col;
            indices.extend_from_slice(&[v, v + stride, v + 1, v + 1, v + stride, v + stride + 1]);
        }
    }
    (indices, stride * stride)
}

fn arg(args: &[String], i: usize, default: u32) -> u32 {
    args.get(i).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args: Vec<String> = std::env::args().collect();
    let cells = validate_cells(arg(&args, 1, 32)).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let config = ScramblerConfig::new(arg(&args, 2, 1), arg(&args, 3, 1));
    let (indices, vertex_count) = grid(cells);

    eprintln!(
        "Grid {cells}x{cells}: {} triangles, {vertex_count} vertices, period {:?}",
        indices.len() / 3,
        mesh_period(vertex_count, config)
    );

    let mut scrambler = MeshIndicesScrambler::new(&indices, vertex_count, config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let progress = Progress::new();
    let result = run_mesh_cycle(&mut scrambler, &indices, DEFAULT_MAX_ITERATIONS, &progress, |round, idx| {
        if round % 100 == 0 {
            eprintln!("  iteration {round}: first triangle {:?}", idx.get(..3));
        }
    });

    match result {
        Ok(outcome) if outcome.is_restored() => {
            eprintln!("RESTORED after {} iterations", outcome.iterations())
        }
        Ok(outcome) => eprintln!("NOT RESTORED within {} iterations", outcome.iterations()),
        Err(e) => eprintln!("FAILED: {e}"),
    }
}
