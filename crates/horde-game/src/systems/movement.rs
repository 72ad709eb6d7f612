//! Position integration.

use horde_ecs::prelude::*;
use tracing::trace;

use crate::components::{Position, Velocity};

/// Pipeline name of the [`MovementSystem`].
pub const MOVEMENT_SYSTEM_NAME: &str = "movement";

/// Moves every entity with a [`Velocity`] and a [`Position`] by `velocity * dt`.
#[derive(Debug, Default)]
pub struct MovementSystem;

impl MovementSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for MovementSystem {
    fn name(&self) -> &str {
        MOVEMENT_SYSTEM_NAME
    }

    fn update(&mut self, world: &mut World, dt: f64) {
        for entity in world.entities_with::<Velocity>() {
            let Some(velocity) = world.get::<Velocity>(entity).copied() else {
                continue;
            };
            let Some(position) = world.get_mut::<Position>(entity) else {
                continue;
            };
            position.x += velocity.vx * dt;
            position.y += velocity.vy * dt;
            if velocity != Velocity::ZERO {
                trace!(%entity, x = position.x, y = position.y, "moved");
            }
        }
    }
}
