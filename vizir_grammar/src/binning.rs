// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" bin boundaries for binned quantitative fields.

/// Bin boundaries covering an extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bins {
    /// Lower edge of the first bin.
    pub start: f64,
    /// Upper edge of the last bin.
    pub stop: f64,
    /// Width of each bin.
    pub step: f64,
}

impl Bins {
    /// Number of bins between `start` and `stop`.
    pub fn count(&self) -> u64 {
        let n = ((self.stop - self.start) / self.step).round().max(1.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "finite and at least one by construction"
        )]
        {
            n as u64
        }
    }
}

/// Chooses base-10 bins (steps of 1, 2 or 5 times a power of ten) covering
/// `[min, max]` with at most `max_bins` bins.
///
/// Returns `None` for non-finite extents.
pub fn bins(mut min: f64, mut max: f64, max_bins: u32) -> Option<Bins> {
    const DIVISORS: [f64; 2] = [5.0, 2.0];

    if !min.is_finite() || !max.is_finite() {
        return None;
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    if span == 0.0 {
        return Some(Bins {
            start: min,
            stop: min + 1.0,
            step: 1.0,
        });
    }

    let max_bins = f64::from(max_bins.max(1));
    let level = max_bins.log10().ceil();
    let mut step = 10_f64.powf(span.log10().round() - level);
    while (span / step).ceil() > max_bins {
        step *= 10.0;
    }
    for div in DIVISORS {
        let v = step / div;
        if span / v <= max_bins {
            step = v;
        }
    }

    // Snap `min` down with a little slack for float error in `min / step`.
    let log = step.log10();
    let precision = if log >= 0.0 { 0.0 } else { (-log).trunc() + 1.0 };
    let eps = 10_f64.powf(-precision - 1.0);
    Some(Bins {
        start: min.min((min / step + eps).floor() * step),
        stop: (max / step).ceil() * step,
        step,
    })
}
