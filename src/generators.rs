//! Contains the generator [`Module`]s. Generators have no sources; they produce values from the coordinate alone.

use crate::{
    ConfigurableNoise, Module,
    curves::NoiseQuality,
    error::{NoiseError, NoiseResult},
    layering::{
        FractalSettings, validate_frequency, validate_lacunarity, validate_octave_count,
        validate_persistence,
    },
    math_noise::{BillowFold, Identity},
};
use bevy_math::DVec3;

/// A [`Module`] that outputs the same value everywhere.
///
/// This is most useful as a fixed input to a modifier.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Const {
    value: f64,
}

impl Const {
    /// The value of a [`Const`] by default.
    pub const DEFAULT_VALUE: f64 = 0.0;

    /// Creates a [`Const`] that outputs `value`.
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// The value this outputs.
    pub fn const_value(&self) -> f64 {
        self.value
    }

    /// Sets the value this outputs.
    pub fn set_const_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl Module for Const {
    fn source_module_count(&self) -> usize {
        0
    }

    #[inline]
    fn get_value(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.value
    }
}

/// Implements the parameter surface and [`Module`] for a fractal generator that folds each octave through `$octave`.
macro_rules! impl_fractal_generator {
    ($name:ident, $octave:ty) => {
        impl Default for $name {
            fn default() -> Self {
                Self {
                    settings: FractalSettings::default(),
                }
            }
        }

        impl $name {
            #[doc = concat!("Creates a [`", stringify!($name), "`] with the default settings.")]
            pub fn new() -> Self {
                Self::default()
            }

            #[doc = concat!("Creates a [`", stringify!($name), "`] from `settings`, failing if any field is invalid.")]
            pub fn from_settings(settings: FractalSettings) -> NoiseResult<Self> {
                settings.validate().inspect_err(|err| {
                    tracing::debug!(%err, module = stringify!($name), "rejected fractal settings");
                })?;
                Ok(Self { settings })
            }

            /// The current settings.
            pub fn settings(&self) -> &FractalSettings {
                &self.settings
            }

            /// The frequency multiplier between octaves.
            pub fn lacunarity(&self) -> f64 {
                self.settings.lacunarity
            }

            /// The weight multiplier between octaves.
            pub fn persistence(&self) -> f64 {
                self.settings.persistence
            }

            /// The number of octaves.
            pub fn octave_count(&self) -> u32 {
                self.settings.octave_count
            }

            /// The interpolation quality of each octave.
            pub fn noise_quality(&self) -> NoiseQuality {
                self.settings.quality
            }

            /// Sets the frequency multiplier between octaves. Fails if it is not finite.
            pub fn set_lacunarity(&mut self, lacunarity: f64) -> NoiseResult<()> {
                self.settings.lacunarity = validate_lacunarity(lacunarity)?;
                Ok(())
            }

            /// Sets the weight multiplier between octaves. Fails if it is not finite.
            pub fn set_persistence(&mut self, persistence: f64) -> NoiseResult<()> {
                self.settings.persistence = validate_persistence(persistence)?;
                Ok(())
            }

            /// Sets the number of octaves. Fails unless it is in `1..=MAX_OCTAVE_COUNT`.
            pub fn set_octave_count(&mut self, octave_count: i32) -> NoiseResult<()> {
                let octave_count = validate_octave_count(i64::from(octave_count))
                    .inspect_err(|err| {
                        tracing::debug!(%err, module = stringify!($name), "rejected octave count");
                    })?;
                self.settings.octave_count = octave_count;
                Ok(())
            }

            /// Sets the interpolation quality of each octave.
            pub fn set_noise_quality(&mut self, quality: NoiseQuality) {
                self.settings.quality = quality;
            }
        }

        impl TryFrom<FractalSettings> for $name {
            type Error = NoiseError;

            fn try_from(settings: FractalSettings) -> NoiseResult<Self> {
                Self::from_settings(settings)
            }
        }

        impl From<$name> for FractalSettings {
            fn from(noise: $name) -> Self {
                noise.settings
            }
        }

        impl ConfigurableNoise for $name {
            fn set_seed(&mut self, seed: i32) {
                self.settings.seed = seed;
            }

            fn seed(&self) -> i32 {
                self.settings.seed
            }

            fn set_frequency(&mut self, frequency: f64) -> NoiseResult<()> {
                self.settings.frequency = validate_frequency(frequency).inspect_err(|err| {
                    tracing::debug!(%err, module = stringify!($name), "rejected frequency");
                })?;
                Ok(())
            }

            fn frequency(&self) -> f64 {
                self.settings.frequency
            }
        }

        impl Module for $name {
            fn source_module_count(&self) -> usize {
                0
            }

            #[inline]
            fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
                self.settings
                    .sum_octaves(DVec3::new(x, y, z), &<$octave>::default())
            }
        }
    };
}

/// A [`Module`] that outputs fractal brownian motion: octaves of coherent noise summed at rising frequencies and falling weights.
///
/// Octave `i` samples coherent noise at `frequency * lacunarity^i` with seed `seed + i`, weighted by `persistence^i`.
/// With the default settings values mostly fall within -1..=1, but that is not a hard bound.
///
/// ```
/// # use noise_graph::prelude::*;
/// let mut perlin = Perlin::new();
/// perlin.set_octave_count(4).unwrap();
/// perlin.set_seed(7);
/// let value = perlin.get_value(0.5, 0.5, 0.5);
/// assert!(value.is_finite());
/// ```
///
/// Deserializing reads a [`FractalSettings`] and fails if [`FractalSettings::validate`] would.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "FractalSettings", into = "FractalSettings")
)]
pub struct Perlin {
    settings: FractalSettings,
}

impl_fractal_generator!(Perlin, Identity);

/// A [`Module`] like [`Perlin`], but each octave is folded by `2 * |v| - 1` before it is weighted.
///
/// Folding turns valleys into ridges, which gives a lumpy, cloud-like texture.
///
/// Deserializing reads a [`FractalSettings`] and fails if [`FractalSettings::validate`] would.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "FractalSettings", into = "FractalSettings")
)]
pub struct Billow {
    settings: FractalSettings,
}

impl_fractal_generator!(Billow, BillowFold);
