//! Contains logic for layering octaves of coherent noise on top of each other.
//!
//! [`FractalSettings`] is the shared parameter set of the fractal generators. Each octave samples
//! [`coherent_noise_3d`] at an ever higher frequency and adds it to the result at an ever lower weight.

use bevy_math::DVec3;

use crate::{
    cell_noise::coherent_noise_3d,
    curves::NoiseQuality,
    error::{NoiseError, NoiseResult},
    math_noise::ValueMap,
};

/// The frequency of the first octave by default.
pub const DEFAULT_FREQUENCY: f64 = 1.0;
/// The frequency multiplier between octaves by default.
pub const DEFAULT_LACUNARITY: f64 = 2.0;
/// The weight multiplier between octaves by default.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
/// The number of octaves by default.
pub const DEFAULT_OCTAVE_COUNT: u32 = 6;
/// The seed by default.
pub const DEFAULT_SEED: i32 = 0;
/// The most octaves a fractal generator may have.
pub const MAX_OCTAVE_COUNT: u32 = 30;

/// Lacunarities in this range give the best results. Others are allowed but logged.
pub const RECOMMENDED_LACUNARITY: core::ops::RangeInclusive<f64> = 1.5..=3.5;
/// Persistences in this range give the best results. Others are allowed but logged.
pub const RECOMMENDED_PERSISTENCE: core::ops::RangeInclusive<f64> = 0.0..=1.0;

/// The parameters of a fractal generator.
///
/// This is plain data so it can be loaded from configuration; use [`validate`](Self::validate) before trusting it.
/// The generators only accept settings that pass validation.
///
/// ```
/// # use noise_graph::prelude::*;
/// let settings = FractalSettings {
///     octave_count: 4,
///     seed: 12,
///     ..Default::default()
/// };
/// let perlin = Perlin::from_settings(settings).unwrap();
/// assert_eq!(perlin.octave_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FractalSettings {
    /// The frequency of the first octave. Must be finite and positive.
    pub frequency: f64,
    /// Lacunarity measures how far apart each octave will be.
    /// Effectively, this is a frequency multiplier.
    /// Ex: if this is 3, each octave will operate on 1/3 the scale.
    pub lacunarity: f64,
    /// The weight multiplier between octaves.
    /// Values less than 1 make earlier octaves weigh more, which gives smoother noise.
    pub persistence: f64,
    /// The number of octaves, in `1..=MAX_OCTAVE_COUNT`.
    pub octave_count: u32,
    /// The seed of the first octave. Octave `i` uses `seed + i`.
    pub seed: i32,
    /// The interpolation quality of each octave.
    pub quality: NoiseQuality,
}

impl Default for FractalSettings {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            persistence: DEFAULT_PERSISTENCE,
            octave_count: DEFAULT_OCTAVE_COUNT,
            seed: DEFAULT_SEED,
            quality: NoiseQuality::Std,
        }
    }
}

impl FractalSettings {
    /// Checks every field against its documented rule.
    pub fn validate(&self) -> NoiseResult<()> {
        validate_frequency(self.frequency)?;
        validate_lacunarity(self.lacunarity)?;
        validate_persistence(self.persistence)?;
        validate_octave_count(i64::from(self.octave_count))?;
        Ok(())
    }

    /// Sums all the octaves at `point`, passing each octave's sample through `octave` before weighting it.
    #[inline]
    pub fn sum_octaves(&self, point: DVec3, octave: &impl ValueMap) -> f64 {
        let mut weights = PersistenceWeights::new(self.persistence);
        let mut working_loc = point * self.frequency;
        let mut result = 0.0;
        for i in 0..self.octave_count {
            let seed = self.seed.wrapping_add(i as i32);
            let signal = octave.map(coherent_noise_3d(working_loc, seed, self.quality));
            result += signal * weights.next_weight();
            working_loc *= self.lacunarity;
        }
        result
    }
}

/// The weights of successive octaves: 1, then multiplied by the persistence for each octave after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistenceWeights {
    persistence: f64,
    next: f64,
}

impl PersistenceWeights {
    /// Starts the weights at 1.
    #[inline]
    pub fn new(persistence: f64) -> Self {
        Self {
            persistence,
            next: 1.0,
        }
    }

    /// Generates the weight of the next octave.
    #[inline]
    pub fn next_weight(&mut self) -> f64 {
        let result = self.next;
        self.next *= self.persistence;
        result
    }
}

/// Checks that `octave_count` is in `1..=MAX_OCTAVE_COUNT`.
pub fn validate_octave_count(octave_count: i64) -> NoiseResult<u32> {
    if (1..=i64::from(MAX_OCTAVE_COUNT)).contains(&octave_count) {
        Ok(octave_count as u32)
    } else {
        Err(NoiseError::OctaveCountOutOfRange {
            octave_count,
            max: MAX_OCTAVE_COUNT,
        })
    }
}

/// Checks that `frequency` is finite and positive.
pub fn validate_frequency(frequency: f64) -> NoiseResult<f64> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(frequency)
    } else {
        Err(NoiseError::InvalidFrequency(frequency))
    }
}

/// Checks that `lacunarity` is finite, logging when it is outside [`RECOMMENDED_LACUNARITY`].
pub fn validate_lacunarity(lacunarity: f64) -> NoiseResult<f64> {
    let lacunarity = validate_finite("lacunarity", lacunarity)?;
    if !RECOMMENDED_LACUNARITY.contains(&lacunarity) {
        tracing::warn!(lacunarity, "lacunarity is outside the recommended range");
    }
    Ok(lacunarity)
}

/// Checks that `persistence` is finite, logging when it is outside [`RECOMMENDED_PERSISTENCE`].
pub fn validate_persistence(persistence: f64) -> NoiseResult<f64> {
    let persistence = validate_finite("persistence", persistence)?;
    if !RECOMMENDED_PERSISTENCE.contains(&persistence) {
        tracing::warn!(persistence, "persistence is outside the recommended range");
    }
    Ok(persistence)
}

/// Checks that `value` is neither NaN nor infinite.
pub fn validate_finite(name: &'static str, value: f64) -> NoiseResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NoiseError::NonFiniteParameter { name, value })
    }
}
