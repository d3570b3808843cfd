//! Defines RNG for noise especially.
//! This hashes lattice points into random bits without the `rand` crate, so the same point and seed always give the same bits.

use bevy_math::{IVec3, UVec3};

/// A seeded RNG inspired by [FxHash](https://crates.io/crates/fxhash).
/// This is similar to a hash function, but does not use std's hash traits, as those produce `u64` outputs only.
///
/// This stores the seed of the RNG.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoiseRng(pub u32);

/// Represents something that can be used as an input to [`NoiseRng`]'s randomizers.
pub trait NoiseRngInput {
    /// Collapses these values into a single [`u32`] to be put through the RNG.
    fn collapse_for_rng(self) -> u32;
}

impl NoiseRng {
    /// This is a large prime number with even bit distribution.
    /// This lets use use this as a multiplier in the rng.
    const KEY: u32 = 249_222_277;
    /// These keys are designed to help collapse different dimensions of inputs together.
    const COEFFICIENT_KEYS: [u32; 2] = [189_221_569, 139_217_773];
    /// Spreads neighboring seeds apart before they are mixed with the input.
    const SEED_KEY: u32 = 149_243_933;

    /// Creates a [`NoiseRng`] from a signed seed, as used by the noise modules.
    #[inline(always)]
    pub fn from_seed(seed: i32) -> Self {
        Self(seed as u32)
    }

    /// Based on `input`, generates a random `u32`.
    ///
    /// The high bits carry the most entropy, so prefer shifting over masking when reducing the range.
    #[inline(always)]
    pub fn rand_u32(&self, input: impl NoiseRngInput) -> u32 {
        let i = input.collapse_for_rng();
        let a = (i ^ self.0.wrapping_mul(Self::SEED_KEY)).wrapping_mul(Self::KEY);
        // Every step here is invertible, so distinct inputs under one seed never collide.
        let b = (a ^ (a >> 15)).wrapping_mul(Self::KEY);
        b ^ (b >> 13)
    }
}

impl NoiseRngInput for UVec3 {
    #[inline(always)]
    fn collapse_for_rng(self) -> u32 {
        self.x
            .wrapping_add(self.y.wrapping_mul(NoiseRng::COEFFICIENT_KEYS[0]))
            .wrapping_add(self.z.wrapping_mul(NoiseRng::COEFFICIENT_KEYS[1]))
    }
}

impl NoiseRngInput for IVec3 {
    #[inline(always)]
    fn collapse_for_rng(self) -> u32 {
        self.as_uvec3().collapse_for_rng()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_input_same_bits() {
        let rng = NoiseRng::from_seed(42);
        let point = IVec3::new(-3, 7, 11);
        assert_eq!(rng.rand_u32(point), rng.rand_u32(point));
    }

    #[test]
    fn neighboring_seeds_spread_over_indices() {
        let point = IVec3::new(1, 2, 3);
        let mut seen = [false; 16];
        for seed in 0..64 {
            seen[(NoiseRng::from_seed(seed).rand_u32(point) >> 28) as usize] = true;
        }
        assert!(seen.iter().filter(|s| **s).count() >= 6);
    }

    #[test]
    fn negative_coordinates_hash() {
        let rng = NoiseRng::default();
        assert_ne!(
            rng.rand_u32(IVec3::new(-1, 0, 0)),
            rng.rand_u32(IVec3::new(1, 0, 0))
        );
    }
}
