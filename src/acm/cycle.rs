// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Round-by-round driver for watching a scrambler go through its cycle.
//!
//! Scrambles one iteration at a time, hands every intermediate buffer to a
//! callback (e.g. to upload it to a texture or mesh), and stops as soon as the
//! buffer equals the original again or the iteration budget runs out.
//! Detection compares buffers, not permutation state, so content with
//! repeated values can be reported restored before the full period.
//!
//! Iterations already applied stay applied when a run is cancelled.

use tracing::debug;

use super::error::{Result, ScrambleError};
use super::mesh::MeshIndicesScrambler;
use super::progress::Progress;
use super::texture::TextureScrambler;

/// Iteration budget used by the demos.
pub const DEFAULT_MAX_ITERATIONS: u32 = 3000;

/// How a cycle run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The buffer matched the original after `iterations` rounds of this run.
    Restored { iterations: u64 },
    /// The budget ran out after `iterations` rounds without a match.
    Exhausted { iterations: u64 },
}

impl CycleOutcome {
    pub fn iterations(&self) -> u64 {
        match *self {
            Self::Restored { iterations } | Self::Exhausted { iterations } => iterations,
        }
    }

    pub fn is_restored(&self) -> bool {
        matches!(self, Self::Restored { .. })
    }
}

/// Run up to `max_iterations` rounds; `round` performs one and reports
/// whether the original is back.
fn drive<F>(max_iterations: u32, progress: &Progress, mut round: F) -> Result<CycleOutcome>
where
    F: FnMut(u64) -> bool,
{
    progress.init(max_iterations);

    for i in 1..=u64::from(max_iterations) {
        progress.check_cancelled()?;
        let restored = round(i);
        progress.advance();
        if restored {
            progress.finish();
            debug!(iterations = i, "original restored");
            return Ok(CycleOutcome::Restored { iterations: i });
        }
    }

    progress.finish();
    debug!(max_iterations, "iteration budget exhausted");
    Ok(CycleOutcome::Exhausted { iterations: u64::from(max_iterations) })
}

/// Scramble `scrambler` one iteration per round until its pixels equal the
/// source pixels again.
///
/// `on_round` receives the 1-based round number and the freshly gathered
/// pixels.
///
/// # Errors
/// [`ScrambleError::Cancelled`] if `progress` is cancelled between rounds.
pub fn run_texture_cycle<F>(
    scrambler: &mut TextureScrambler<'_>,
    max_iterations: u32,
    progress: &Progress,
    mut on_round: F,
) -> Result<CycleOutcome>
where
    F: FnMut(u64, &[u8]),
{
    drive(max_iterations, progress, |round| {
        scrambler.scramble(1);
        on_round(round, scrambler.scrambled_pixels());
        scrambler.scrambled_pixels() == scrambler.source()
    })
}

/// Scramble `scrambler` one iteration per round until its indices equal
/// `original` again.
///
/// # Errors
/// - [`ScrambleError::BufferSizeMismatch`] if `original` has a different
///   length than the scrambler's index buffer.
/// - [`ScrambleError::Cancelled`] if `progress` is cancelled between rounds.
pub fn run_mesh_cycle<F>(
    scrambler: &mut MeshIndicesScrambler,
    original: &[u32],
    max_iterations: u32,
    progress: &Progress,
    mut on_round: F,
) -> Result<CycleOutcome>
where
    F: FnMut(u64, &[u32]),
{
    let expected = scrambler.scrambled_indices().len();
    if original.len() != expected {
        return Err(ScrambleError::BufferSizeMismatch { expected, actual: original.len() });
    }

    drive(max_iterations, progress, |round| {
        scrambler.scramble(1);
        on_round(round, scrambler.scrambled_indices());
        scrambler.scrambled_indices() == original
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acm::ScramblerConfig;

    fn indexed_pixels(side: u32) -> Vec<u8> {
        (0..side * side)
            .flat_map(|p| [p as u8, 0, 0, 255])
            .collect()
    }

    #[test]
    fn texture_2x2_restores_after_three() {
        let px = indexed_pixels(2);
        let mut s = TextureScrambler::new(&px, 2, 2, ScramblerConfig::default()).unwrap();
        let progress = Progress::new();
        let mut rounds = Vec::new();

        let outcome = run_texture_cycle(&mut s, 100, &progress, |round, _| rounds.push(round)).unwrap();

        assert_eq!(outcome, CycleOutcome::Restored { iterations: 3 });
        assert_eq!(rounds, vec![1, 2, 3]);
        assert_eq!(progress.get(), (100, 100));
        assert!(s.is_identity());
    }

    #[test]
    fn uniform_texture_restores_immediately() {
        let px = vec![7u8; 8 * 8 * 4];
        let mut s = TextureScrambler::new(&px, 8, 8, ScramblerConfig::default()).unwrap();
        let outcome = run_texture_cycle(&mut s, 100, &Progress::new(), |_, _| {}).unwrap();
        assert_eq!(outcome.iterations(), 1);
        assert!(!s.is_identity());
    }

    #[test]
    fn non_invertible_map_exhausts_budget() {
        let px = indexed_pixels(4);
        let mut s = TextureScrambler::new(&px, 4, 4, ScramblerConfig::new(2, 2)).unwrap();
        let outcome = run_texture_cycle(&mut s, 20, &Progress::new(), |_, _| {}).unwrap();
        assert_eq!(outcome, CycleOutcome::Exhausted { iterations: 20 });
        assert!(!outcome.is_restored());
        assert_eq!(s.iterations(), 20);
    }

    #[test]
    fn mesh_scenario_restores_after_three() {
        let original = [0, 1, 2, 1, 2, 3];
        let mut s = MeshIndicesScrambler::new(&original, 4, ScramblerConfig::default()).unwrap();
        let mut seen = Vec::new();
        let outcome = run_mesh_cycle(&mut s, &original, 50, &Progress::new(), |_, idx| {
            seen.push(idx.to_vec());
        })
        .unwrap();

        assert_eq!(outcome, CycleOutcome::Restored { iterations: 3 });
        assert_eq!(
            seen,
            vec![
                vec![2, 1, 0, 0, 2, 3],
                vec![2, 1, 2, 3, 2, 2],
                vec![0, 1, 2, 1, 2, 3],
            ]
        );
    }

    #[test]
    fn mesh_original_length_checked() {
        let mut s = MeshIndicesScrambler::new(&[0, 1, 2], 4, ScramblerConfig::default()).unwrap();
        let err = run_mesh_cycle(&mut s, &[0, 1], 5, &Progress::new(), |_, _| {}).unwrap_err();
        assert_eq!(err, ScrambleError::BufferSizeMismatch { expected: 3, actual: 2 });
    }

    #[test]
    fn cancel_keeps_applied_iterations() {
        let px = indexed_pixels(16);
        let mut s = TextureScrambler::new(&px, 16, 16, ScramblerConfig::default()).unwrap();
        let progress = Progress::new();

        let result = run_texture_cycle(&mut s, 1000, &progress, |round, _| {
            if round == 4 {
                progress.cancel();
            }
        });

        assert_eq!(result, Err(ScrambleError::Cancelled));
        assert_eq!(s.iterations(), 4);
    }

    #[test]
    fn cancel_before_start_applies_nothing() {
        let px = indexed_pixels(64);
        let mut s = TextureScrambler::new(&px, 64, 64, ScramblerConfig::default()).unwrap();
        let progress = Progress::new();
        progress.cancel();

        let result = run_texture_cycle(&mut s, DEFAULT_MAX_ITERATIONS, &progress, |_, _| {});

        assert_eq!(result, Err(ScrambleError::Cancelled));
        assert_eq!(s.iterations(), 0);
        assert!(s.is_identity());

        progress.reset();
        let outcome = run_texture_cycle(&mut s, DEFAULT_MAX_ITERATIONS, &progress, |_, _| {}).unwrap();
        assert!(outcome.is_restored());
    }
}
