#![allow(
    clippy::doc_markdown,
    reason = "These rules should not apply to the readme."
)]
#![doc = include_str!("../README.md")]

pub mod cell_noise;
pub mod cells;
pub mod curves;
pub mod error;
pub mod generators;
pub mod gradient;
pub mod layering;
pub mod math_noise;
pub mod modifiers;
pub mod noise_map;
pub mod prelude;
pub mod rng;

use core::fmt::Debug;
use std::sync::Arc;

use bevy_math::DVec3;
use error::{NoiseError, NoiseResult};

/// A node of a noise graph: something that produces a value for any 3d coordinate.
///
/// A module may read from other modules, called its sources. It declares how many it needs with
/// [`source_module_count`](Module::source_module_count), and a graph builder binds each one with
/// [`set_source_module`](Module::set_source_module) before the module is evaluated.
///
/// There is no graph container. A graph is whichever module you treat as its root; evaluating it
/// evaluates every module it reaches, once per call, with nothing cached between calls.
///
/// ```
/// # use std::sync::Arc;
/// # use noise_graph::prelude::*;
/// let mut clamp = Clamp::default();
/// clamp.set_source_module(0, Arc::new(Const::new(5.0))).unwrap();
/// clamp.set_bounds(-1.0, 1.0).unwrap();
/// assert_eq!(clamp.get_value(0.0, 3.0, -2.0), 1.0);
/// ```
pub trait Module: Debug + Send + Sync {
    /// The number of sources this module reads from. Every one must be bound before evaluation.
    fn source_module_count(&self) -> usize;

    /// Binds `source` to the slot `index`, replacing whatever was bound there.
    ///
    /// Fails if `index` is not less than [`source_module_count`](Module::source_module_count).
    fn set_source_module(&mut self, index: usize, source: ModuleRef) -> NoiseResult<()> {
        let _ = source;
        Err(NoiseError::SourceIndexOutOfRange {
            index,
            count: self.source_module_count(),
        })
    }

    /// Returns `true` once every source slot is bound.
    fn is_ready(&self) -> bool {
        self.source_module_count() == 0
    }

    /// Evaluates this module at `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// Panics if a source slot is unbound. Check [`is_ready`](Module::is_ready) first if unsure.
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64;

    /// Evaluates this module at `point`.
    #[inline]
    fn sample(&self, point: DVec3) -> f64 {
        self.get_value(point.x, point.y, point.z)
    }
}

/// A shared handle to a [`Module`].
///
/// Modules hold their sources through these, so a source lives at least as long as everything that reads from it.
/// Sources are bound through `&mut` before a module is shared, so a handle can never lead back to itself.
pub type ModuleRef = Arc<dyn Module>;

/// A fixed number `N` of source slots for a [`Module`].
#[derive(Debug, Clone)]
pub struct SourceModules<const N: usize> {
    slots: [Option<ModuleRef>; N],
}

impl<const N: usize> Default for SourceModules<N> {
    fn default() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }
}

impl<const N: usize> SourceModules<N> {
    /// The number of slots.
    pub const COUNT: usize = N;

    /// Creates slots with every one bound, in order.
    pub fn with_sources(sources: [ModuleRef; N]) -> Self {
        Self {
            slots: sources.map(Some),
        }
    }

    /// Binds `source` to `index`.
    pub fn bind(&mut self, index: usize, source: ModuleRef) -> NoiseResult<()> {
        let Some(slot) = self.slots.get_mut(index) else {
            tracing::debug!(index, count = N, "rejected source module binding");
            return Err(NoiseError::SourceIndexOutOfRange { index, count: N });
        };
        tracing::trace!(index, count = N, "bound source module");
        *slot = Some(source);
        Ok(())
    }

    /// Gets the source bound to `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ModuleRef> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns `true` if every slot is bound.
    pub fn all_bound(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Gets the source bound to `index` for evaluation.
    ///
    /// # Panics
    ///
    /// Panics if the slot is unbound, naming `module` and `index`.
    #[inline]
    #[track_caller]
    pub fn expect_bound(&self, index: usize, module: &'static str) -> &dyn Module {
        match self.get(index) {
            Some(source) => source.as_ref(),
            None => panic!("{module} was evaluated before source module {index} was bound"),
        }
    }
}

/// Specifies that this noise is configurable by seed and scale.
pub trait ConfigurableNoise {
    /// Sets the seed of the noise.
    fn set_seed(&mut self, seed: i32);

    /// Gets the seed of the noise.
    fn seed(&self) -> i32;

    /// Sets the scale of the noise via its frequency.
    /// Fails unless the frequency is finite and positive.
    fn set_frequency(&mut self, frequency: f64) -> NoiseResult<()>;

    /// Gets the scale of the noise via its frequency.
    fn frequency(&self) -> f64;

    /// Sets the scale of the noise via its period.
    fn set_period(&mut self, period: f64) -> NoiseResult<()> {
        self.set_frequency(1.0 / period)
    }

    /// Gets the scale of the noise via its period.
    fn period(&self) -> f64 {
        1.0 / self.frequency()
    }
}
