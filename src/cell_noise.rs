//! Contains the coherent-noise primitive: gradient noise over the integer lattice.
//! Every fractal generator in this crate is built by layering samples of [`coherent_noise_3d`].

use bevy_math::DVec3;

use crate::{
    cells::{LatticeCell, make_int32_range},
    curves::{EaseCurve, NoiseQuality},
    rng::NoiseRng,
};

/// This trait facilitates generating gradients and computing their dot products.
pub trait GradientGenerator {
    /// Gets the dot product of `offset` with some gradient vector based on this seed.
    /// Each element of `offset` can be assumed to be in -1..=1.
    fn get_gradient_dot(&self, seed: u32, offset: DVec3) -> f64 {
        self.get_gradient(seed).dot(offset)
    }

    /// Gets the gradient that would be used in [`get_gradient_dot`](GradientGenerator::get_gradient_dot).
    fn get_gradient(&self, seed: u32) -> DVec3;
}

/// A simple [`GradientGenerator`] that maps seeds directly to the 12 edge directions of a cube.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuickGradients;

impl GradientGenerator for QuickGradients {
    #[inline]
    fn get_gradient(&self, seed: u32) -> DVec3 {
        GRADIENT_TABLE[(seed >> 28) as usize]
    }
}

/// A table of gradient vectors pointing at the midpoints of a cube's edges.
/// Only -1, 0, and 1 are used so that the float multiplication is faster.
///
/// There are 12 unique directions. The first 4 are repeated at the end so the table can be indexed with 4 bits.
const GRADIENT_TABLE: [DVec3; 16] = [
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(-1.0, 1.0, 0.0),
    DVec3::new(1.0, -1.0, 0.0),
    DVec3::new(-1.0, -1.0, 0.0),
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(-1.0, 0.0, 1.0),
    DVec3::new(1.0, 0.0, -1.0),
    DVec3::new(-1.0, 0.0, -1.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(0.0, -1.0, 1.0),
    DVec3::new(0.0, 1.0, -1.0),
    DVec3::new(0.0, -1.0, -1.0),
    // repeats
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(-1.0, 1.0, 0.0),
    DVec3::new(1.0, -1.0, 0.0),
    DVec3::new(-1.0, -1.0, 0.0),
];

/// Gradient noise sampled within one lattice cell, eased by the curve `C`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MixCellGradients<C, G> {
    /// The [`EaseCurve`].
    pub curve: C,
    /// The [`GradientGenerator`].
    pub gradients: G,
}

impl<C: EaseCurve, G: GradientGenerator> MixCellGradients<C, G> {
    /// Samples the gradient noise at `point` for `seeds`.
    #[inline]
    pub fn evaluate(&self, point: DVec3, seeds: NoiseRng) -> f64 {
        let cell = LatticeCell::partition(point);
        cell.interpolate_within(
            seeds,
            |corner| {
                self.gradients
                    .get_gradient_dot(corner.rough_id, corner.offset)
            },
            &self.curve,
        )
    }
}

/// Samples seeded 3d coherent gradient noise at `point`.
///
/// The result is deterministic in all inputs and continuous in `point`. Different seeds give unrelated fields.
/// Values usually fall within -1..=1 but that is not a hard bound.
/// Coherent noise is exactly 0 at every integer lattice point.
#[inline]
pub fn coherent_noise_3d(point: DVec3, seed: i32, quality: NoiseQuality) -> f64 {
    let point = DVec3::new(
        make_int32_range(point.x),
        make_int32_range(point.y),
        make_int32_range(point.z),
    );
    let seeds = NoiseRng::from_seed(seed);
    MixCellGradients {
        curve: quality,
        gradients: QuickGradients,
    }
    .evaluate(point, seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn grid() -> impl Iterator<Item = DVec3> {
        (0..12).flat_map(|x| {
            (0..12).flat_map(move |y| {
                (0..4).map(move |z| DVec3::new(x as f64, y as f64, z as f64) * 0.37 - 2.0)
            })
        })
    }

    #[test]
    fn deterministic() {
        for p in grid() {
            assert_eq!(
                coherent_noise_3d(p, 7, NoiseQuality::Std).to_bits(),
                coherent_noise_3d(p, 7, NoiseQuality::Std).to_bits()
            );
        }
    }

    #[test]
    fn zero_on_lattice_points() {
        for quality in [NoiseQuality::Fast, NoiseQuality::Std, NoiseQuality::Best] {
            let value = coherent_noise_3d(DVec3::new(3.0, -2.0, 5.0), 11, quality);
            assert_abs_diff_eq!(value, 0.0);
        }
    }

    #[test]
    fn seeds_decorrelate() {
        let differs = grid().any(|p| {
            coherent_noise_3d(p, 0, NoiseQuality::Std) != coherent_noise_3d(p, 1, NoiseQuality::Std)
        });
        assert!(differs);
    }

    #[test]
    fn continuous() {
        let step = DVec3::splat(1e-6);
        for quality in [NoiseQuality::Fast, NoiseQuality::Std, NoiseQuality::Best] {
            for p in grid() {
                let a = coherent_noise_3d(p, 4, quality);
                let b = coherent_noise_3d(p + step, 4, quality);
                assert!((a - b).abs() < 1e-4, "jump of {} at {p}", (a - b).abs());
            }
        }
    }

    #[test]
    fn nominal_range() {
        for quality in [NoiseQuality::Fast, NoiseQuality::Std, NoiseQuality::Best] {
            for p in grid() {
                let value = coherent_noise_3d(p, 9, quality);
                assert!(value.is_finite());
                assert!(value.abs() <= 1.5, "{value} at {p}");
            }
        }
    }

    #[test]
    fn quick_gradients_use_cube_edges() {
        for seed in [0, 1 << 28, 5 << 28, u32::MAX] {
            let gradient = QuickGradients.get_gradient(seed);
            assert_abs_diff_eq!(gradient.length_squared(), 2.0);
        }
    }

    #[test]
    fn known_values_per_quality() {
        let point = DVec3::new(0.3, -1.7, 2.2);
        assert_eq!(
            coherent_noise_3d(point, 0, NoiseQuality::Fast).to_bits(),
            0xbfdd_8ada_b9f5_59b7
        );
        assert_eq!(
            coherent_noise_3d(point, 0, NoiseQuality::Std).to_bits(),
            0xbfdd_bd1b_032f_981e
        );
        assert_eq!(
            coherent_noise_3d(point, 0, NoiseQuality::Best).to_bits(),
            0xbfdd_c5f2_670c_c990
        );
    }
}
