// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Scramble a generated RGBA texture until it comes back.
//!
//! Usage: `cargo run --example texture_cycle -- [side] [a] [b]`
//! (defaults: 256 1 1). Set `RUST_LOG=acm_scrambler=debug` for library events.

use std::time::{Duration, Instant};

use acm_scrambler::{run_texture_cycle, texture_period, Progress, ScramblerConfig, TextureScrambler, DEFAULT_MAX_ITERATIONS};
use tracing_subscriber::EnvFilter;

/// Largest side accepted on the command line.
const MAX_SIDE: u32 = 4096;

/// Reject sides whose pixel buffer would not be a sensible demo size.
fn validate_side(side: u32) -> Result<u32, String> {
    if side == 0 || side > MAX_SIDE {
        return Err(format!("side must be in 1..={MAX_SIDE} (got {side})"));
    }
    Ok(side)
}

/// Checkerboard over a diagonal gradient, so the scrambling is visible in any dump.
fn pattern(side: u32) -> Vec<u8> {
    let mut px = Vec::with_capacity(side as usize * side as usize * 4);
    for x in 0..side {
        for y in 0..side {
            let check = if ((x / 8) + (y / 8)) % 2 == 0 { 255 } else { 0 };
            px.extend_from_slice(&[(x * 255 / side) as u8, (y * 255 / side) as u8, check, 255]);
        }
    }
    px
}

fn arg(args: &[String], i: usize, default: u32) -> u32 {
    args.get(i).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args: Vec<String> = std::env::args().collect();
    let side = validate_side(arg(&args, 1, 256)).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let config = ScramblerConfig::new(arg(&args, 2, 1), arg(&args, 3, 1));
    let pixels = pattern(side);

    match texture_period(side, config) {
        Some(p) => eprintln!("Texture {side}x{side}, a={} b={}: period {p}", config.a, config.b),
        None => eprintln!("Texture {side}x{side}, a={} b={}: map is not invertible", config.a, config.b),
    }

    let mut scrambler = TextureScrambler::new(&pixels, side, side, config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let progress = Progress::new();
    let start = Instant::now();
    let result = std::thread::scope(|scope| {
        let worker = scope.spawn(|| run_texture_cycle(&mut scrambler, DEFAULT_MAX_ITERATIONS, &progress, |_, _| {}));
        while !worker.is_finished() {
            let (step, total) = progress.get();
            eprintln!("  iteration {step}/{total}");
            std::thread::sleep(Duration::from_millis(200));
        }
        worker.join()
    });

    match result {
        Ok(Ok(outcome)) if outcome.is_restored() => eprintln!(
            "RESTORED after {} iterations [{:.2}s]",
            outcome.iterations(),
            start.elapsed().as_secs_f64()
        ),
        Ok(Ok(outcome)) => eprintln!("NOT RESTORED within {} iterations", outcome.iterations()),
        Ok(Err(e)) => eprintln!("FAILED: {e}"),
        Err(_) => eprintln!("FAILED: worker panicked"),
    }
}
