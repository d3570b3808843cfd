//! Contains small math-based maps on noise values.
//! Note that some of them have specific requirements for the domain of their inputs.
//!
//! Maps can be chained in tuples: `(First, Second, ...)` applies `First`, then `Second`, and so on.

/// Maps a single noise value to another.
pub trait ValueMap {
    /// Maps `value`.
    fn map(&self, value: f64) -> f64;
}

/// A [`ValueMap`] that leaves values unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Identity;

/// A [`ValueMap`] that maps values from (-1,1) to (0, 1).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SNormToUNorm;

/// A [`ValueMap`] that maps values from (0, 1) to (-1,1).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UNormToSNorm;

/// A [`ValueMap`] that takes the absolute value of its input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Abs;

/// A [`ValueMap`] that raises the input to some power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowF(pub f64);

/// A [`ValueMap`] that clamps its input into some range.
/// The lower bound must not exceed the upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampTo {
    /// The least value this produces.
    pub lower: f64,
    /// The greatest value this produces.
    pub upper: f64,
}

impl ClampTo {
    /// Clamps into `0..=1`.
    pub const UNORM: Self = Self {
        lower: 0.0,
        upper: 1.0,
    };
}

/// A [`ValueMap`] that produces a billowing effect for SNorm values.
/// Negative excursions are folded upward: `2 * |v| - 1`.
pub type BillowFold = (Abs, UNormToSNorm);

/// A [`ValueMap`] that reshapes SNorm values by raising their UNorm equivalent to a power.
///
/// The UNorm value is made non-negative before the power, so fractional powers of values that
/// drift just below 0 can not produce NaN. The powered value is clamped to `0..=1` before mapping back.
pub type ExponentCurve = (SNormToUNorm, Abs, PowF, ClampTo, UNormToSNorm);

/// Creates an [`ExponentCurve`] for this `exponent`.
#[inline]
pub fn exponent_curve(exponent: f64) -> ExponentCurve {
    (SNormToUNorm, Abs, PowF(exponent), ClampTo::UNORM, UNormToSNorm)
}

impl ValueMap for Identity {
    #[inline]
    fn map(&self, value: f64) -> f64 {
        value
    }
}

impl ValueMap for SNormToUNorm {
    #[inline]
    fn map(&self, value: f64) -> f64 {
        (value + 1.0) * 0.5
    }
}

impl ValueMap for UNormToSNorm {
    #[inline]
    fn map(&self, value: f64) -> f64 {
        value * 2.0 - 1.0
    }
}

impl ValueMap for Abs {
    #[inline]
    fn map(&self, value: f64) -> f64 {
        value.abs()
    }
}

impl ValueMap for PowF {
    #[inline]
    fn map(&self, value: f64) -> f64 {
        value.powf(self.0)
    }
}

impl ValueMap for ClampTo {
    #[inline]
    fn map(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }
}

macro_rules! impl_value_map_tuple {
    ($($t:ident-$i:tt),+) => {
        impl<$($t: ValueMap),+> ValueMap for ($($t,)+) {
            #[inline]
            fn map(&self, value: f64) -> f64 {
                $(let value = self.$i.map(value);)+
                value
            }
        }
    };
}

impl_value_map_tuple!(T0-0);
impl_value_map_tuple!(T0-0, T1-1);
impl_value_map_tuple!(T0-0, T1-1, T2-2);
impl_value_map_tuple!(T0-0, T1-1, T2-2, T3-3);
impl_value_map_tuple!(T0-0, T1-1, T2-2, T3-3, T4-4);
