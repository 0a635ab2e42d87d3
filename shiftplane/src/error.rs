// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for plane construction and sampling.

use core::fmt;

use crate::range::Axis;

/// An invalid or inconsistent range or size parameter.
///
/// These are detected before any grid is created, so no partial plane exists when one is
/// returned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigurationError {
    /// A bound or step of the range is NaN or infinite.
    NonFinite {
        /// The offending axis.
        axis: Axis,
    },
    /// The range does not satisfy `min < max`.
    EmptyRange {
        /// The offending axis.
        axis: Axis,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The step is zero or negative.
    NonPositiveStep {
        /// The offending axis.
        axis: Axis,
        /// Configured step.
        step: f64,
    },
    /// The step does not divide `max - min` into whole ticks.
    UnevenStep {
        /// The offending axis.
        axis: Axis,
        /// `max - min` of the range.
        span: f64,
        /// Configured step.
        step: f64,
    },
    /// The range has more steps than a single range may enumerate.
    TooManyTicks {
        /// The offending axis.
        axis: Axis,
        /// `(max - min) / step`, which may be far beyond `usize`.
        steps: f64,
        /// Largest number of ticks or samples a range may produce.
        limit: usize,
    },
    /// The frame minus padding leaves no room for the plane.
    FrameTooSmall {
        /// The offending axis.
        axis: Axis,
        /// Frame extent along the axis.
        extent: f64,
        /// Padding applied on each side.
        padding: f64,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { axis } => write!(f, "{axis} range has a non-finite bound or step"),
            Self::EmptyRange { axis, min, max } => {
                write!(f, "{axis} range is empty: min {min} is not below max {max}")
            }
            Self::NonPositiveStep { axis, step } => {
                write!(f, "{axis} step must be positive, got {step}")
            }
            Self::UnevenStep { axis, span, step } => {
                write!(f, "{axis} step {step} does not evenly divide span {span}")
            }
            Self::TooManyTicks { axis, steps, limit } => write!(
                f,
                "{axis} range has {steps} steps, more than the limit of {limit} ticks"
            ),
            Self::FrameTooSmall {
                axis,
                extent,
                padding,
            } => write!(
                f,
                "{axis} frame extent {extent} leaves no room after padding {padding} on each side"
            ),
        }
    }
}

impl core::error::Error for ConfigurationError {}

/// Errors returned while building a shifted plane or sampling onto it.
#[derive(Clone, Debug, PartialEq)]
pub enum ShiftPlaneError {
    /// Range or frame parameters were rejected.
    Configuration(ConfigurationError),
    /// Display and logical tick sequences have different lengths, so zipping them would
    /// mislabel the axis.
    LabelMismatch {
        /// Number of display ticks.
        display: usize,
        /// Number of logical ticks.
        logical: usize,
    },
}

impl fmt::Display for ShiftPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "invalid configuration: {err}"),
            Self::LabelMismatch { display, logical } => write!(
                f,
                "label mismatch: {display} display ticks but {logical} logical ticks"
            ),
        }
    }
}

impl core::error::Error for ShiftPlaneError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::LabelMismatch { .. } => None,
        }
    }
}

impl From<ConfigurationError> for ShiftPlaneError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

/// A function sample that evaluated to a non-finite value and was left out of a curve.
///
/// This is recovered locally: the curve is split at the sample instead of failing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleUndefined {
    /// Logical x at which the function was evaluated.
    pub logical_x: f64,
    /// The non-finite value returned.
    pub value: f64,
}
