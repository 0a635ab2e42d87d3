// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Most decimals a label is printed with.
const MAX_DECIMALS: usize = 15;

/// Significant digits shown for steps with no exact decimal form (such as `1/3`).
const FALLBACK_DIGITS: usize = 6;

/// Number of decimals needed to print every multiple of `step` exactly.
///
/// Steps with no short decimal form get six significant digits.
pub(crate) fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut scale = 1.0;
    let mut magnitude = None;
    for decimals in 0..=MAX_DECIMALS {
        let scaled = step * scale;
        let whole = scaled.round();
        let err = (scaled - whole).abs();
        if whole >= 1.0 && err <= 1.0e-9 * scaled && err <= 1.0e-3 {
            return decimals;
        }
        if magnitude.is_none() && scaled >= 1.0 {
            magnitude = Some(decimals);
        }
        scale *= 10.0;
    }
    let magnitude = magnitude.unwrap_or(MAX_DECIMALS);
    (magnitude + FALLBACK_DIGITS - 1).min(MAX_DECIMALS)
}

/// Formats a tick value with as many decimals as its step needs.
///
/// Negative zero prints as `0`.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    let decimals = step_decimals(step);
    let s = format!("{v:.decimals$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => String::from(rest),
        _ => s,
    }
}
