//! Error types for space construction.

use std::fmt;

/// Errors arising from space descriptor construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// A box bound is NaN or infinite.
    BoundsNotFinite {
        /// The offending lower bound.
        low: f32,
        /// The offending upper bound.
        high: f32,
    },
    /// The lower bound exceeds the upper bound.
    LowAboveHigh {
        /// The offending lower bound.
        low: f32,
        /// The offending upper bound.
        high: f32,
    },
    /// A box shape contains a zero-length axis.
    ZeroAxis,
    /// Attempted to construct a discrete space with zero choices.
    ZeroCardinality,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsNotFinite { low, high } => {
                write!(f, "box bounds must be finite, got [{low}, {high}]")
            }
            Self::LowAboveHigh { low, high } => {
                write!(f, "box lower bound {low} exceeds upper bound {high}")
            }
            Self::ZeroAxis => write!(f, "box shape must not contain a zero-length axis"),
            Self::ZeroCardinality => write!(f, "discrete space must have at least one choice"),
        }
    }
}

impl std::error::Error for SpaceError {}
