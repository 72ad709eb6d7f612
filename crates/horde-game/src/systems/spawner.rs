//! Periodic monster spawning.
//!
//! Every `interval` seconds one monster appears at a random angle around the
//! player, just beyond the edge of the visible area.

use std::f64::consts::TAU;
use std::time::Duration;

use horde_ecs::prelude::*;
use rand::Rng;
use rand_pcg::Pcg64;
use tracing::debug;

use crate::components::{Health, Monster, Position, Velocity};
use crate::config::{MonsterConfig, SpawnerConfig};
use crate::view::ViewportHandle;

/// Pipeline name of the [`SpawnerSystem`].
pub const SPAWNER_SYSTEM_NAME: &str = "spawner";

/// Spawns monsters on a fixed timer.
///
/// Elapsed time is accumulated as a [`Duration`] (integer nanoseconds) so that
/// a run of identical frames reaches the interval on exactly the expected
/// frame instead of drifting with float accumulation.
#[derive(Debug)]
pub struct SpawnerSystem {
    player: EntityId,
    timer: Duration,
    interval: Duration,
    spawn_distance: f64,
    viewport: ViewportHandle,
    monster: MonsterConfig,
    rng: Pcg64,
    spawned: u64,
}

impl SpawnerSystem {
    /// # Panics
    ///
    /// Panics if `config.interval` is not a positive, representable
    /// [`Duration`]. [`GameConfig::validate`](crate::config::GameConfig::validate)
    /// rejects such values first.
    pub fn new(
        player: EntityId,
        config: &SpawnerConfig,
        monster: MonsterConfig,
        viewport: ViewportHandle,
        rng: Pcg64,
    ) -> Self {
        let interval = Duration::try_from_secs_f64(config.interval)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or_else(|| {
                panic!(
                    "spawn interval must be a positive duration, got {}",
                    config.interval
                )
            });
        Self {
            player,
            timer: Duration::ZERO,
            interval,
            spawn_distance: config.spawn_distance,
            viewport,
            monster,
            rng,
            spawned: 0,
        }
    }

    /// Distance from the player at which monsters appear.
    pub fn spawn_radius(&self) -> f64 {
        self.viewport.get().half_extent() + self.spawn_distance
    }

    /// Number of monsters spawned so far.
    pub fn spawned_count(&self) -> u64 {
        self.spawned
    }

    /// Time accumulated toward the next spawn.
    pub fn timer(&self) -> Duration {
        self.timer
    }

    /// Create one monster around the player. Does nothing (and returns `None`)
    /// if the player has no position.
    pub fn spawn_monster(&mut self, world: &mut World) -> Option<EntityId> {
        let center = *world.get::<Position>(self.player)?;
        let angle = self.rng.gen_range(0.0..TAU);
        let radius = self.spawn_radius();
        let position = Position {
            x: center.x + angle.cos() * radius,
            y: center.y + angle.sin() * radius,
        };

        let entity = world.create_entity();
        world.set(entity, position);
        world.set(entity, Velocity::ZERO);
        world.set(entity, self.monster.renderable);
        world.set(entity, Health::full(self.monster.health));
        world.set(
            entity,
            Monster {
                speed: self.monster.speed,
                xp_reward: self.monster.xp_reward,
            },
        );

        self.spawned += 1;
        debug!(%entity, x = position.x, y = position.y, "spawned monster");
        Some(entity)
    }
}

impl System for SpawnerSystem {
    fn name(&self) -> &str {
        SPAWNER_SYSTEM_NAME
    }

    fn update(&mut self, world: &mut World, dt: f64) {
        // NaN and negative add nothing; an overlong frame saturates.
        let elapsed = match Duration::try_from_secs_f64(dt) {
            Ok(d) => d,
            Err(_) if dt > 0.0 => Duration::MAX,
            Err(_) => Duration::ZERO,
        };
        self.timer = self.timer.saturating_add(elapsed);
        if self.timer >= self.interval {
            self.spawn_monster(world);
            // Reset, not carry the remainder: one spawn per frame at most.
            self.timer = Duration::ZERO;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
