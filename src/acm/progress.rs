// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Progress tracking and cancellation for long scramble runs.
//!
//! A [`Progress`] is owned by the caller and shared by reference with the
//! worker running the cycle driver. It uses atomics so a UI thread can poll
//! [`Progress::get`] or call [`Progress::cancel`] while the worker advances.
//! There is no global instance: independent runs use independent trackers.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use super::error::ScrambleError;

/// Step counter plus cancellation flag for one run.
#[derive(Debug, Default)]
pub struct Progress {
    step: AtomicU32,
    total: AtomicU32,
    cancelled: AtomicBool,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset progress to 0 and set the total step count.
    ///
    /// A pending cancellation is kept, so a `cancel` issued before the run
    /// starts still stops it.
    pub fn init(&self, total: u32) {
        self.step.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    /// Clear counters and the cancellation flag to reuse the tracker.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
        self.init(0);
    }

    /// Request cancellation. The cycle driver checks this before every round.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Return [`ScrambleError::Cancelled`] if cancellation was requested.
    pub fn check_cancelled(&self) -> Result<(), ScrambleError> {
        if self.is_cancelled() {
            Err(ScrambleError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Advance by one step.
    ///
    /// While a total is known the step is capped at `total - 1`, so only
    /// [`finish`](Self::finish) reports completion. With a total of 0
    /// (indeterminate) the step advances freely.
    pub fn advance(&self) {
        let total = self.total.load(Ordering::Relaxed);
        if total == 0 {
            self.step.fetch_add(1, Ordering::Relaxed);
        } else {
            let _ = self.step.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| {
                if s + 1 < total { Some(s + 1) } else { Some(s) }
            });
        }
    }

    /// Current `(step, total)`.
    pub fn get(&self) -> (u32, u32) {
        (self.step.load(Ordering::Relaxed), self.total.load(Ordering::Relaxed))
    }

    /// Mark progress as complete (step = total).
    pub fn finish(&self) {
        let t = self.total.load(Ordering::Relaxed);
        self.step.store(t, Ordering::Relaxed);
    }
}
