//! Contains the interpolation curves used inside lattice cells, and the [`NoiseQuality`] that picks between them.

/// A curve that eases a unit interval onto itself.
/// Implementors must map 0 to 0 and 1 to 1 so neighboring cells meet without seams.
pub trait EaseCurve {
    /// Samples the curve at `t`, where `t` is in `0..=1`.
    fn ease(&self, t: f64) -> f64;
}

/// Linear interpolation.
/// Fast, but the seams between cells show as creases.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Linear;

impl EaseCurve for Linear {
    #[inline]
    fn ease(&self, t: f64) -> f64 {
        t
    }
}

/// Smoothstep interpolation. This has a continuous first derivative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Smoothstep;

impl EaseCurve for Smoothstep {
    #[inline]
    fn ease(&self, t: f64) -> f64 {
        t * t * (t * (-2.0) + 3.0)
    }
}

/// Quintic interpolation, `6t^5 - 15t^4 + 10t^3`. This has a continuous second derivative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Quintic;

impl EaseCurve for Quintic {
    #[inline]
    fn ease(&self, t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }
}

/// How smoothly coherent noise is interpolated between lattice points.
/// Smoother curves cost more per sample.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum NoiseQuality {
    /// Uses [`Linear`] interpolation.
    Fast,
    /// Uses [`Smoothstep`] interpolation.
    #[default]
    Std,
    /// Uses [`Quintic`] interpolation.
    Best,
}

impl EaseCurve for NoiseQuality {
    #[inline]
    fn ease(&self, t: f64) -> f64 {
        match self {
            NoiseQuality::Fast => Linear.ease(t),
            NoiseQuality::Std => Smoothstep.ease(t),
            NoiseQuality::Best => Quintic.ease(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const QUALITIES: [NoiseQuality; 3] = [NoiseQuality::Fast, NoiseQuality::Std, NoiseQuality::Best];

    #[test]
    fn curves_fix_endpoints() {
        for quality in QUALITIES {
            assert_abs_diff_eq!(quality.ease(0.0), 0.0);
            assert_abs_diff_eq!(quality.ease(1.0), 1.0);
            assert_abs_diff_eq!(quality.ease(0.5), 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn smoother_curves_flatten_near_edges() {
        let t = 0.1;
        assert!(NoiseQuality::Best.ease(t) < NoiseQuality::Std.ease(t));
        assert!(NoiseQuality::Std.ease(t) < NoiseQuality::Fast.ease(t));
    }

    #[test]
    fn default_quality_is_std() {
        assert_eq!(NoiseQuality::default(), NoiseQuality::Std);
    }
}
