//! Contains [`ColorGradient`], which maps noise values to colors.

use crate::{
    error::{NoiseError, NoiseResult},
    layering::validate_finite,
};

/// An 8 bit per channel RGBA color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The alpha channel.
    pub alpha: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Creates a color from its channels.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Blends each channel linearly from `self` at `alpha = 0` to `other` at `alpha = 1`.
    pub fn lerp(self, other: Self, alpha: f32) -> Self {
        let channel = |a: u8, b: u8| {
            let a = a as f32 / 255.0;
            let b = b as f32 / 255.0;
            // Truncates like the classic 8 bit blend; `as` saturates into 0..=255.
            ((b * alpha + a * (1.0 - alpha)) * 255.0) as u8
        };
        Self {
            red: channel(self.red, other.red),
            green: channel(self.green, other.green),
            blue: channel(self.blue, other.blue),
            alpha: channel(self.alpha, other.alpha),
        }
    }
}

/// A color placed at some position in a [`ColorGradient`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientPoint {
    /// Where this color sits.
    pub position: f64,
    /// The color at this position.
    pub color: Color,
}

/// A piecewise linear map from values to colors.
///
/// Points are kept sorted by position. Values before the first point or after the last get that point's color.
///
/// ```
/// # use noise_graph::gradient::{Color, ColorGradient};
/// let mut gradient = ColorGradient::default();
/// gradient.add_point(-1.0, Color::BLACK).unwrap();
/// gradient.add_point(1.0, Color::WHITE).unwrap();
/// assert_eq!(gradient.color_at(2.0).unwrap(), Color::WHITE);
/// ```
///
/// Serialized as its list of points. Deserializing adds them one by one, so duplicate or non-finite positions fail.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<GradientPoint>", into = "Vec<GradientPoint>")
)]
pub struct ColorGradient {
    points: Vec<GradientPoint>,
}

impl ColorGradient {
    /// A gradient from black at -1 to white at 1.
    pub fn grayscale() -> Self {
        Self {
            points: vec![
                GradientPoint {
                    position: -1.0,
                    color: Color::BLACK,
                },
                GradientPoint {
                    position: 1.0,
                    color: Color::WHITE,
                },
            ],
        }
    }

    /// A gradient of deep water through beaches and grass up to snowy peaks, for values in -1..=1.
    pub fn terrain() -> Self {
        let stops = [
            (-1.00, Color::rgba(0, 0, 128, 255)),
            (-0.20, Color::rgba(32, 64, 128, 255)),
            (-0.04, Color::rgba(64, 96, 192, 255)),
            (-0.02, Color::rgba(192, 192, 128, 255)),
            (0.00, Color::rgba(0, 192, 0, 255)),
            (0.25, Color::rgba(192, 192, 0, 255)),
            (0.50, Color::rgba(160, 96, 64, 255)),
            (0.75, Color::rgba(128, 255, 255, 255)),
            (1.00, Color::WHITE),
        ];
        Self {
            points: stops
                .into_iter()
                .map(|(position, color)| GradientPoint { position, color })
                .collect(),
        }
    }

    /// Adds a color at `position`, keeping the points sorted.
    ///
    /// Fails if `position` is not finite or there is already a point at exactly `position`.
    pub fn add_point(&mut self, position: f64, color: Color) -> NoiseResult<()> {
        let position = validate_finite("position", position)?;
        let insert_at = self.points.partition_point(|p| p.position < position);
        if self
            .points
            .get(insert_at)
            .is_some_and(|p| p.position == position)
        {
            tracing::debug!(position, "rejected duplicate gradient point");
            return Err(NoiseError::DuplicateGradientPosition(position));
        }
        self.points
            .insert(insert_at, GradientPoint { position, color });
        Ok(())
    }

    /// Removes every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The points, sorted by position.
    pub fn points(&self) -> &[GradientPoint] {
        &self.points
    }

    /// Gets the color at `position`, blending the two points around it.
    ///
    /// Fails if the gradient has fewer than two points.
    pub fn color_at(&self, position: f64) -> NoiseResult<Color> {
        if self.points.len() < 2 {
            return Err(NoiseError::NotEnoughGradientPoints(self.points.len()));
        }
        let last = self.points.len() - 1;
        let upper = self
            .points
            .partition_point(|p| p.position <= position)
            .min(last);
        let lower = upper.saturating_sub(1);
        let (a, b) = (self.points[lower], self.points[upper]);
        if position <= a.position {
            return Ok(a.color);
        }
        if position >= b.position {
            return Ok(b.color);
        }
        let alpha = (position - a.position) / (b.position - a.position);
        Ok(a.color.lerp(b.color, alpha as f32))
    }
}

impl TryFrom<Vec<GradientPoint>> for ColorGradient {
    type Error = NoiseError;

    fn try_from(points: Vec<GradientPoint>) -> NoiseResult<Self> {
        let mut gradient = Self::default();
        for point in points {
            gradient.add_point(point.position, point.color)?;
        }
        Ok(gradient)
    }
}

impl From<ColorGradient> for Vec<GradientPoint> {
    fn from(gradient: ColorGradient) -> Self {
        gradient.points
    }
}
