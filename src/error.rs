//! Errors raised while configuring noise modules.
//!
//! Every variant is raised by the setter or constructor that received the bad value.
//! Evaluation itself never fails.

use thiserror::Error;

/// A rejected configuration. The module or collaborator that raised it is left unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// The octave count of a fractal generator was outside `1..=max`.
    #[error("octave count {octave_count} is outside 1..={max}")]
    OctaveCountOutOfRange {
        /// The rejected count.
        octave_count: i64,
        /// The greatest count allowed.
        max: u32,
    },

    /// The frequency was zero, negative, or not finite.
    #[error("frequency must be finite and positive, got {0}")]
    InvalidFrequency(f64),

    /// A parameter that must be finite was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteParameter {
        /// The parameter's name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A lower bound was greater than its upper bound.
    #[error("lower bound {lower} is greater than upper bound {upper}")]
    InvalidBounds {
        /// The rejected lower bound.
        lower: f64,
        /// The rejected upper bound.
        upper: f64,
    },

    /// A source module was bound to a slot the module does not have.
    #[error("source index {index} is out of range for a module with {count} source(s)")]
    SourceIndexOutOfRange {
        /// The requested slot.
        index: usize,
        /// The number of slots the module has.
        count: usize,
    },

    /// A raster was sized past its maximum dimensions.
    #[error("raster size {width}x{height} exceeds the maximum")]
    RasterTooLarge {
        /// The requested width.
        width: usize,
        /// The requested height.
        height: usize,
    },

    /// A gradient already has a stop at this position.
    #[error("gradient already has a point at {0}")]
    DuplicateGradientPosition(f64),

    /// A gradient was sampled with fewer than two stops.
    #[error("gradient needs at least 2 points to be sampled, has {0}")]
    NotEnoughGradientPoints(usize),
}

/// A [`Result`] with a [`NoiseError`].
pub type NoiseResult<T> = Result<T, NoiseError>;
