//! Ordered system pipeline.
//!
//! A [`Pipeline`] owns an ordered list of boxed [`System`]s. Each call to
//! [`Pipeline::run`] invokes every system exactly once, in registration order,
//! with the same elapsed time. Systems never call each other: everything one
//! system wants another to see goes through component data in the [`World`].
//!
//! # Example
//!
//! ```
//! use horde_ecs::prelude::*;
//!
//! struct Ticker(u32);
//!
//! impl System for Ticker {
//!     fn name(&self) -> &str {
//!         "ticker"
//!     }
//!
//!     fn update(&mut self, _world: &mut World, _dt: f64) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut world = World::new();
//! let mut pipeline = Pipeline::new();
//! pipeline.add_system(Ticker(0));
//!
//! for _ in 0..10 {
//!     pipeline.run(&mut world, 1.0 / 60.0);
//! }
//! assert_eq!(pipeline.frame_count(), 10);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::world::World;

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// A per-frame update unit.
///
/// `update` may read and write any component in the world but must not block.
/// Whether a system does anything on a given frame is its own decision; the
/// pipeline always calls it.
pub trait System {
    /// Human-readable name used for diagnostics (e.g. `"movement"`).
    fn name(&self) -> &str;

    /// Advance this system by `dt` seconds.
    fn update(&mut self, world: &mut World, dt: f64);
}

// ---------------------------------------------------------------------------
// FrameDiagnostics
// ---------------------------------------------------------------------------

/// Timing diagnostics for the last frame.
#[derive(Debug, Clone, Default)]
pub struct FrameDiagnostics {
    /// Wall-clock time per system (in order of execution).
    pub system_times: Vec<(String, Duration)>,
    /// Total time for the frame.
    pub total_time: Duration,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// The fixed, ordered sequence of systems run once per frame.
#[derive(Default)]
pub struct Pipeline {
    systems: Vec<Box<dyn System>>,
    frame_counter: u64,
    last_diagnostics: FrameDiagnostics,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("systems", &self.system_names())
            .field("frame_counter", &self.frame_counter)
            .finish()
    }
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
            frame_counter: 0,
            last_diagnostics: FrameDiagnostics::default(),
        }
    }

    /// Append a system. Systems run in the order they are added.
    ///
    /// # Panics
    ///
    /// Panics if a system with the same name is already registered.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.add_boxed(Box::new(system));
    }

    /// Append an already boxed system. See [`add_system`](Self::add_system).
    pub fn add_boxed(&mut self, system: Box<dyn System>) {
        let name = system.name().to_owned();
        assert!(
            !self.systems.iter().any(|s| s.name() == name),
            "duplicate system name: {name:?}"
        );
        debug!(system = %name, position = self.systems.len(), "registered system");
        self.systems.push(system);
    }

    /// Run one frame: every system, in order, with the same `dt`.
    pub fn run(&mut self, world: &mut World, dt: f64) {
        let frame_start = Instant::now();
        let mut system_times = Vec::with_capacity(self.systems.len());

        for system in &mut self.systems {
            let sys_start = Instant::now();
            system.update(world, dt);
            system_times.push((system.name().to_owned(), sys_start.elapsed()));
        }

        self.frame_counter += 1;
        self.last_diagnostics = FrameDiagnostics {
            system_times,
            total_time: frame_start.elapsed(),
        };
    }

    // -- accessors ----------------------------------------------------------

    /// The number of frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    /// The number of registered systems.
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// The names of all registered systems, in execution order.
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// Diagnostics from the last frame (timing per system).
    pub fn last_diagnostics(&self) -> &FrameDiagnostics {
        &self.last_diagnostics
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
