//! World lifecycle and frame driver.
//!
//! A [`Game`] owns the [`World`] and the [`Pipeline`]. Construction creates the
//! player and registers the seven gameplay systems in their fixed order. After
//! that the host either calls [`Game::step`] with an elapsed time of its own,
//! or hands wall-clock instants to [`Game::frame`] between
//! [`Game::start`] and [`Game::stop`].
//!
//! Each frame:
//!
//! 1. The raw elapsed time is clamped to `[0, max_dt]`. Non-finite values
//!    become `0`.
//! 2. Every system runs once, in order, with that clamped `dt`.
//!
//! ```
//! use horde_game::prelude::*;
//!
//! let mut game = Game::new(GameConfig { seed: Some(1), ..Default::default() }).unwrap();
//! assert_eq!(game.step(5.0), 0.1);
//! assert_eq!(game.frame_count(), 1);
//! ```

use std::time::Instant;

use horde_ecs::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::{debug, warn};

use crate::components::{Stats, Velocity};
use crate::config::{ConfigError, GameConfig};
use crate::systems::{
    AttackSystem, CombatSystem, InputHandle, InputSystem, MonsterAiSystem, MovementSystem,
    ProgressionSystem, SpawnerSystem,
};
use crate::view::{Camera, HudSnapshot, Viewport, ViewportHandle};

/// Clamp a raw elapsed time into `[0, max_dt]`.
///
/// NaN, infinities and negative values map to `0`.
pub fn clamp_dt(raw: f64, max_dt: f64) -> f64 {
    if !raw.is_finite() || raw < 0.0 {
        warn!(raw_dt = raw, "invalid elapsed time, using 0");
        return 0.0;
    }
    raw.min(max_dt)
}

/// The running simulation.
pub struct Game {
    world: World,
    pipeline: Pipeline,
    player: EntityId,
    input: InputHandle,
    viewport: ViewportHandle,
    max_dt: f64,
    running: bool,
    last_instant: Option<Instant>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("player", &self.player)
            .field("frame_count", &self.pipeline.frame_count())
            .field("running", &self.running)
            .field("max_dt", &self.max_dt)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Validate `config`, create the player and register every system.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let p = &config.player;
        let player = world.create_entity();
        world.set(player, p.position);
        world.set(player, Velocity::ZERO);
        world.set(player, p.renderable);
        world.set(player, p.stats);
        world.set(player, p.weapon);

        let seed = config.seed.unwrap_or_else(rand::random);
        debug!(%player, seed, "created player");

        let viewport = ViewportHandle::new(config.spawner.viewport);
        let input_system = InputSystem::new(player, p.speed);
        let input = input_system.handle();

        let mut pipeline = Pipeline::new();
        pipeline.add_system(input_system);
        pipeline.add_system(SpawnerSystem::new(
            player,
            &config.spawner,
            config.monster.clone(),
            viewport.clone(),
            Pcg64::seed_from_u64(seed),
        ));
        pipeline.add_system(MonsterAiSystem::new(player));
        pipeline.add_system(MovementSystem::new());
        pipeline.add_system(AttackSystem::new(player));
        pipeline.add_system(CombatSystem::new(player));
        pipeline.add_system(ProgressionSystem::new(player, config.progression.clone()));

        Ok(Self {
            world,
            pipeline,
            player,
            input,
            viewport,
            max_dt: config.frame.max_dt,
            running: false,
            last_instant: None,
        })
    }

    /// Run one frame with `raw_dt` seconds of elapsed time. Returns the clamped
    /// value every system received.
    pub fn step(&mut self, raw_dt: f64) -> f64 {
        let dt = clamp_dt(raw_dt, self.max_dt);
        self.pipeline.run(&mut self.world, dt);
        dt
    }

    // -- wall-clock driver --------------------------------------------------

    /// Begin accepting frames. The first [`frame`](Self::frame) measures its
    /// elapsed time from `now`.
    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.last_instant = Some(now);
    }

    /// Stop accepting frames. The world is left as it is.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_instant = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame for the wall-clock instant `now`. Returns the applied
    /// `dt`, or `None` when the game is stopped.
    pub fn frame(&mut self, now: Instant) -> Option<f64> {
        if !self.running {
            return None;
        }
        let elapsed = self
            .last_instant
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f64());
        self.last_instant = Some(now);
        Some(self.step(elapsed))
    }

    // -- host boundary ------------------------------------------------------

    /// Handle for delivering key presses to the input system.
    pub fn input(&self) -> &InputHandle {
        &self.input
    }

    /// The presentation layer resized. Spawn placement follows immediately.
    ///
    /// Sizes that are not finite and positive are logged and ignored; the
    /// previous viewport stays in effect.
    pub fn resize(&mut self, width: f64, height: f64) {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(width) || !usable(height) {
            warn!(width, height, "invalid viewport size, keeping previous");
            return;
        }
        self.viewport.set(Viewport { width, height });
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    /// A camera centered on the player for the current viewport.
    pub fn camera(&self) -> Camera {
        Camera::follow(&self.world, self.player, self.viewport.get())
    }

    /// Current HUD values. `None` only if the player's [`Stats`] were removed.
    pub fn hud(&self) -> Option<HudSnapshot> {
        HudSnapshot::read(&self.world, self.player)
    }

    // -- accessors ----------------------------------------------------------

    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Frames executed so far.
    pub fn frame_count(&self) -> u64 {
        self.pipeline.frame_count()
    }

    /// The player's level, if it still has [`Stats`].
    pub fn player_level(&self) -> Option<u32> {
        self.world.get::<Stats>(self.player).map(|s| s.level)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
