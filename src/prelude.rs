//! Contains common imports

pub use crate::{
    ConfigurableNoise, Module, ModuleRef, SourceModules,
    cell_noise::coherent_noise_3d,
    curves::NoiseQuality,
    error::{NoiseError, NoiseResult},
    generators::{Billow, Const, Perlin},
    gradient::{Color, ColorGradient},
    layering::{FractalSettings, MAX_OCTAVE_COUNT},
    modifiers::{Clamp, Exponent},
    noise_map::NoiseMap,
};
