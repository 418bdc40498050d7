//! Error taxonomy shared by the color engine.

use thiserror::Error;

/// Errors raised while parsing colors, validating configuration edits or inverting scales.
///
/// Every variant is recoverable where it is detected: an edit is refused and the previous
/// value kept, a corpus row is skipped, or an inversion falls back to the nearest fraction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The string is not a CSS color literal.
    #[error("invalid color literal `{literal}`: {reason}")]
    InvalidColorLiteral {
        /// Literal as received.
        literal: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// A numeric parameter fell outside of its domain.
    #[error("{parameter} out of range: {value} (expected {expected})")]
    OutOfRangeParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Rejected value.
        value: f64,
        /// Human-readable description of the accepted domain.
        expected: &'static str,
    },
    /// The lightness correction curve cannot reach the requested lightness.
    #[error("lightness {target:.2} is not reachable; clamped to fraction {fraction:.4}")]
    IllConditionedInversion {
        /// Requested lightness.
        target: f64,
        /// Nearest achievable input fraction.
        fraction: f64,
    },
    /// No base color carries this name.
    #[error("unknown base color `{0}`")]
    UnknownBaseColor(String),
    /// The lightness step table has no such step.
    #[error("unknown lightness step {0}")]
    UnknownStep(u32),
    /// Two base colors share a name.
    #[error("duplicate base color `{0}`")]
    DuplicateBaseColor(String),
    /// Two lightness steps share an identifier.
    #[error("duplicate lightness step {0}")]
    DuplicateStep(u32),
    /// Base color names must not be blank.
    #[error("base color name must not be empty")]
    EmptyName,
}
