//! This contains logic for dividing 3d space into lattice cells.

use bevy_math::{DVec3, IVec3};

use crate::{curves::EaseCurve, rng::NoiseRng};

/// Represents a point in some domain `T` that is relevant to a particular [`LatticeCell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPoint<T> {
    /// Identifies this point roughly from others, roughly meaning the ids are not necessarily unique.
    /// The ids must be determenistic per point. Ids for the same point must match, even if they are from different [`LatticeCell`]s.
    pub rough_id: u32,
    /// Defines the offset of the sample point from this one.
    pub offset: T,
}

/// Represents a unit cube of the integer lattice and a position within it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeCell {
    /// The least corner of this cell.
    pub floored: IVec3,
    /// The positive offset from [`floored`](Self::floored) to the point in the cell.
    /// Each element is in `0..1`.
    pub offset: DVec3,
}

impl LatticeCell {
    /// Finds the cell containing `point`.
    ///
    /// `point` should already be in the range produced by [`make_int32_range`], otherwise the cell index saturates.
    #[inline]
    pub fn partition(point: DVec3) -> Self {
        let floor = point.floor();
        Self {
            floored: floor.as_ivec3(),
            offset: point - floor,
        }
    }

    #[inline]
    fn point_at_offset(&self, rng: NoiseRng, offset: IVec3) -> CellPoint<DVec3> {
        CellPoint {
            rough_id: rng.rand_u32(self.floored + offset),
            offset: self.offset - offset.as_dvec3(),
        }
    }

    /// Maps each of the 8 corners, ordered by `x`, then `y`, then `z`, with `z` changing fastest.
    #[inline]
    pub fn corners_map<T>(&self, rng: NoiseRng, mut f: impl FnMut(CellPoint<DVec3>) -> T) -> [T; 8] {
        [
            f(self.point_at_offset(rng, IVec3::new(0, 0, 0))),
            f(self.point_at_offset(rng, IVec3::new(0, 0, 1))),
            f(self.point_at_offset(rng, IVec3::new(0, 1, 0))),
            f(self.point_at_offset(rng, IVec3::new(0, 1, 1))),
            f(self.point_at_offset(rng, IVec3::new(1, 0, 0))),
            f(self.point_at_offset(rng, IVec3::new(1, 0, 1))),
            f(self.point_at_offset(rng, IVec3::new(1, 1, 0))),
            f(self.point_at_offset(rng, IVec3::new(1, 1, 1))),
        ]
    }

    /// Interpolates between the values `f` produces for each corner of this cell, easing each axis by `curve`.
    #[inline]
    pub fn interpolate_within(
        &self,
        rng: NoiseRng,
        f: impl FnMut(CellPoint<DVec3>) -> f64,
        curve: &impl EaseCurve,
    ) -> f64 {
        // points
        let [ldb, ldf, lub, luf, rdb, rdf, rub, ruf] = self.corners_map(rng, f);
        let mix = DVec3::new(
            curve.ease(self.offset.x),
            curve.ease(self.offset.y),
            curve.ease(self.offset.z),
        );

        // lerp
        let ld = lerp(ldb, ldf, mix.z);
        let lu = lerp(lub, luf, mix.z);
        let rd = lerp(rdb, rdf, mix.z);
        let ru = lerp(rub, ruf, mix.z);
        let l = lerp(ld, lu, mix.y);
        let r = lerp(rd, ru, mix.y);
        lerp(l, r, mix.x)
    }
}

#[inline(always)]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// The bound past which coordinates are folded back, so cell indices always fit in an `i32`.
const INT32_FOLD: f64 = 1_073_741_824.0;

/// Folds `n` into roughly `-2^30..2^30` so it can be floored into an `i32` lattice index.
///
/// Values inside the range are returned unchanged. Values outside it are wrapped, which keeps
/// the field finite but repeats it far from the origin.
#[inline]
pub fn make_int32_range(n: f64) -> f64 {
    if n >= INT32_FOLD {
        (2.0 * (n % INT32_FOLD)) - INT32_FOLD
    } else if n <= -INT32_FOLD {
        (2.0 * (n % INT32_FOLD)) + INT32_FOLD
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Linear;
    use approx::assert_abs_diff_eq;

    #[test]
    fn partition_handles_negatives() {
        let cell = LatticeCell::partition(DVec3::new(-0.25, 1.5, 2.0));
        assert_eq!(cell.floored, IVec3::new(-1, 1, 2));
        assert_abs_diff_eq!(cell.offset.x, 0.75);
        assert_abs_diff_eq!(cell.offset.y, 0.5);
        assert_abs_diff_eq!(cell.offset.z, 0.0);
    }

    #[test]
    fn shared_corners_share_ids() {
        let rng = NoiseRng(3);
        let a = LatticeCell::partition(DVec3::new(0.5, 0.5, 0.5));
        let b = LatticeCell::partition(DVec3::new(1.5, 0.5, 0.5));
        let a_ids = a.corners_map(rng, |p| p.rough_id);
        let b_ids = b.corners_map(rng, |p| p.rough_id);
        // a's x = 1 face is b's x = 0 face.
        assert_eq!(a_ids[4..], b_ids[..4]);
    }

    #[test]
    fn linear_interpolation_of_offsets() {
        let cell = LatticeCell::partition(DVec3::new(0.25, 0.0, 0.0));
        let value = cell.interpolate_within(NoiseRng(0), |p| -p.offset.x, &Linear);
        // corners at x = 0 give -0.25, corners at x = 1 give 0.75
        assert_abs_diff_eq!(value, 0.25 * 0.75 + 0.75 * -0.25, epsilon = 1e-12);
    }

    #[test]
    fn int32_range_folds_large_values() {
        assert_eq!(make_int32_range(12.5), 12.5);
        let folded = make_int32_range(5.0e12);
        assert!(folded.abs() <= INT32_FOLD);
        let folded = make_int32_range(-5.0e12);
        assert!(folded.abs() <= INT32_FOLD);
    }
}
