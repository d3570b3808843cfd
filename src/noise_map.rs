//! Contains [`NoiseMap`], a dense 2d raster of sampled noise values.

use bevy_math::DVec3;

use crate::{
    Module,
    error::{NoiseError, NoiseResult},
};

/// The widest a [`NoiseMap`] may be.
pub const RASTER_MAX_WIDTH: usize = 32767;
/// The tallest a [`NoiseMap`] may be.
pub const RASTER_MAX_HEIGHT: usize = 32767;

/// A 2d grid of `f32` noise values, stored row by row.
///
/// Reads outside the grid return the [`border_value`](Self::border_value) instead of failing,
/// which lets filters read past the edges without bounds checks.
///
/// ```
/// # use noise_graph::prelude::*;
/// # use bevy_math::DVec3;
/// let perlin = Perlin::new();
/// let mut map = NoiseMap::new(16, 8).unwrap();
/// map.fill_from_module(&perlin, |x, y| DVec3::new(x as f64 / 16.0, 0.0, y as f64 / 8.0));
/// map.set_border_value(-1.0);
/// assert_eq!(map.get_value(-1, 3), -1.0);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NoiseMap {
    values: Vec<f32>,
    width: usize,
    height: usize,
    border_value: f32,
}

impl NoiseMap {
    /// Creates a map of this size with every value set to 0.
    pub fn new(width: usize, height: usize) -> NoiseResult<Self> {
        let mut map = Self::default();
        map.set_size(width, height)?;
        Ok(map)
    }

    /// Resizes the map. Existing values are not preserved; every value is reset to 0.
    ///
    /// A zero width or height makes the map empty. Fails if either dimension is above its maximum.
    pub fn set_size(&mut self, width: usize, height: usize) -> NoiseResult<()> {
        if width > RASTER_MAX_WIDTH || height > RASTER_MAX_HEIGHT {
            tracing::debug!(width, height, "rejected raster size");
            return Err(NoiseError::RasterTooLarge { width, height });
        }
        if width == 0 || height == 0 {
            self.values = Vec::new();
            self.width = 0;
            self.height = 0;
        } else {
            self.values.clear();
            self.values.resize(width * height, 0.0);
            self.width = width;
            self.height = height;
        }
        Ok(())
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the map holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value returned for reads outside the map.
    pub fn border_value(&self) -> f32 {
        self.border_value
    }

    /// Sets the value returned for reads outside the map.
    pub fn set_border_value(&mut self, border_value: f32) {
        self.border_value = border_value;
    }

    #[inline]
    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = usize::try_from(y).ok().filter(|y| *y < self.height)?;
        Some(y * self.width + x)
    }

    /// Gets the value at `(x, y)`, or the border value if that is outside the map.
    #[inline]
    pub fn get_value(&self, x: i64, y: i64) -> f32 {
        self.index_of(x, y)
            .map_or(self.border_value, |index| self.values[index])
    }

    /// Sets the value at `(x, y)`. Writes outside the map are ignored.
    #[inline]
    pub fn set_value(&mut self, x: i64, y: i64, value: f32) {
        if let Some(index) = self.index_of(x, y) {
            self.values[index] = value;
        }
    }

    /// Sets every value to `value`.
    pub fn clear(&mut self, value: f32) {
        self.values.fill(value);
    }

    /// Iterates the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        // `chunks_exact` panics on 0, and an empty map has no rows anyway.
        self.values.chunks_exact(self.width.max(1))
    }

    /// Sets every value to `f(x, y)`.
    pub fn fill(&mut self, mut f: impl FnMut(usize, usize) -> f32) {
        let width = self.width;
        for (y, row) in self.values.chunks_exact_mut(width.max(1)).enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = f(x, y);
            }
        }
    }

    /// Samples `module` for every value, where `map_point` decides which 3d point each cell samples.
    ///
    /// # Panics
    ///
    /// Panics if `module` has an unbound source.
    pub fn fill_from_module(
        &mut self,
        module: &(impl Module + ?Sized),
        mut map_point: impl FnMut(usize, usize) -> DVec3,
    ) {
        tracing::trace!(
            width = self.width,
            height = self.height,
            "filling noise map from module"
        );
        self.fill(|x, y| module.sample(map_point(x, y)) as f32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Const;

    #[test]
    fn out_of_range_reads_return_border() {
        let mut map = NoiseMap::new(4, 3).unwrap();
        map.set_border_value(9.5);
        map.clear(1.0);
        assert_eq!(map.get_value(0, 0), 1.0);
        assert_eq!(map.get_value(3, 2), 1.0);
        assert_eq!(map.get_value(4, 0), 9.5);
        assert_eq!(map.get_value(0, 3), 9.5);
        assert_eq!(map.get_value(-1, 0), 9.5);
    }

    #[test]
    fn out_of_range_writes_ignored() {
        let mut map = NoiseMap::new(2, 2).unwrap();
        map.set_value(5, 0, 3.0);
        map.set_value(-1, -1, 3.0);
        assert!(map.rows().flatten().all(|v| *v == 0.0));
        map.set_value(1, 1, 3.0);
        assert_eq!(map.get_value(1, 1), 3.0);
    }

    #[test]
    fn oversize_rejected() {
        let mut map = NoiseMap::new(2, 2).unwrap();
        assert_eq!(
            map.set_size(RASTER_MAX_WIDTH + 1, 1),
            Err(NoiseError::RasterTooLarge {
                width: RASTER_MAX_WIDTH + 1,
                height: 1
            })
        );
        assert_eq!(map.width(), 2);
    }

    #[test]
    fn zero_size_is_empty() {
        let mut map = NoiseMap::new(0, 10).unwrap();
        map.set_border_value(-2.0);
        assert!(map.is_empty());
        assert_eq!(map.height(), 0);
        assert_eq!(map.get_value(0, 0), -2.0);
        assert_eq!(map.rows().count(), 0);
        map.fill(|_, _| 1.0);
    }

    #[test]
    fn fill_visits_each_cell() {
        let mut map = NoiseMap::new(3, 2).unwrap();
        map.fill(|x, y| (y * 10 + x) as f32);
        let rows: Vec<_> = map.rows().map(<[f32]>::to_vec).collect();
        assert_eq!(rows, vec![vec![0.0, 1.0, 2.0], vec![10.0, 11.0, 12.0]]);
    }

    #[test]
    fn fill_from_module_samples() {
        let mut map = NoiseMap::new(5, 5).unwrap();
        map.fill_from_module(&Const::new(0.75), |x, y| DVec3::new(x as f64, 0.0, y as f64));
        assert!(map.rows().flatten().all(|v| *v == 0.75));
    }
}
