//! Contains the modifier [`Module`]s. Each reads one source and reshapes its output.

use crate::{
    Module, ModuleRef, SourceModules,
    error::{NoiseError, NoiseResult},
    math_noise::{ClampTo, ValueMap, exponent_curve},
};

/// A [`Module`] that clamps the output of its source into a range.
///
/// The bounds default to `-1..=1`. The lower bound can never exceed the upper bound.
#[derive(Debug, Clone)]
pub struct Clamp {
    sources: SourceModules<1>,
    bounds: ClampTo,
}

impl Default for Clamp {
    fn default() -> Self {
        Self {
            sources: SourceModules::default(),
            bounds: ClampTo {
                lower: Self::DEFAULT_LOWER_BOUND,
                upper: Self::DEFAULT_UPPER_BOUND,
            },
        }
    }
}

impl Clamp {
    /// The lower bound by default.
    pub const DEFAULT_LOWER_BOUND: f64 = -1.0;
    /// The upper bound by default.
    pub const DEFAULT_UPPER_BOUND: f64 = 1.0;

    /// Creates a [`Clamp`] reading from `source` with the default bounds.
    pub fn new(source: ModuleRef) -> Self {
        Self {
            sources: SourceModules::with_sources([source]),
            ..Self::default()
        }
    }

    /// The least value this outputs.
    pub fn lower_bound(&self) -> f64 {
        self.bounds.lower
    }

    /// The greatest value this outputs.
    pub fn upper_bound(&self) -> f64 {
        self.bounds.upper
    }

    /// Sets both bounds at once.
    ///
    /// Fails if `lower` is greater than `upper` or either is NaN, leaving the old bounds in place.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> NoiseResult<()> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            tracing::debug!(lower, upper, "rejected clamp bounds");
            return Err(NoiseError::InvalidBounds { lower, upper });
        }
        self.bounds = ClampTo { lower, upper };
        Ok(())
    }
}

impl Module for Clamp {
    fn source_module_count(&self) -> usize {
        SourceModules::<1>::COUNT
    }

    fn set_source_module(&mut self, index: usize, source: ModuleRef) -> NoiseResult<()> {
        self.sources.bind(index, source)
    }

    fn is_ready(&self) -> bool {
        self.sources.all_bound()
    }

    #[inline]
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let value = self.sources.expect_bound(0, "Clamp").get_value(x, y, z);
        self.bounds.map(value)
    }
}

/// A [`Module`] that reshapes the output of its source by an exponent.
///
/// The source is assumed to be SNorm. Its value is mapped to `0..=1`, raised to the exponent,
/// clamped back into `0..=1`, and mapped back to `-1..=1`. Exponents above 1 push values down
/// toward -1; exponents below 1 push them up toward 1. An exponent of 1 changes nothing.
///
/// The mapped value is made non-negative before the power, so a source below -1 is reflected
/// rather than clamped: a source of -2 maps to -0.5 in `0..=1` space and is raised as 0.5.
#[derive(Debug, Clone)]
pub struct Exponent {
    sources: SourceModules<1>,
    exponent: f64,
}

impl Default for Exponent {
    fn default() -> Self {
        Self {
            sources: SourceModules::default(),
            exponent: Self::DEFAULT_EXPONENT,
        }
    }
}

impl Exponent {
    /// The exponent by default.
    pub const DEFAULT_EXPONENT: f64 = 1.0;

    /// Creates an [`Exponent`] reading from `source` with the default exponent.
    pub fn new(source: ModuleRef) -> Self {
        Self {
            sources: SourceModules::with_sources([source]),
            ..Self::default()
        }
    }

    /// The exponent.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Sets the exponent. Any value is accepted.
    pub fn set_exponent(&mut self, exponent: f64) {
        self.exponent = exponent;
    }
}

impl Module for Exponent {
    fn source_module_count(&self) -> usize {
        SourceModules::<1>::COUNT
    }

    fn set_source_module(&mut self, index: usize, source: ModuleRef) -> NoiseResult<()> {
        self.sources.bind(index, source)
    }

    fn is_ready(&self) -> bool {
        self.sources.all_bound()
    }

    #[inline]
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let value = self.sources.expect_bound(0, "Exponent").get_value(x, y, z);
        exponent_curve(self.exponent).map(value)
    }
}
