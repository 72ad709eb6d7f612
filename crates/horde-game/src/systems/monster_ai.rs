//! Monsters chase the player.

use horde_ecs::prelude::*;

use crate::components::{Monster, Position, Velocity};

/// Pipeline name of the [`MonsterAiSystem`].
pub const MONSTER_AI_SYSTEM_NAME: &str = "monster_ai";

/// Points every monster's velocity straight at the player.
///
/// Runs before movement, so it sees the positions from the start of the frame.
#[derive(Debug)]
pub struct MonsterAiSystem {
    player: EntityId,
}

impl MonsterAiSystem {
    pub fn new(player: EntityId) -> Self {
        Self { player }
    }
}

/// Velocity of magnitude `speed` from `from` toward `to`; zero when the two
/// points coincide.
pub fn chase_velocity(from: &Position, to: &Position, speed: f64) -> Velocity {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let distance = dx.hypot(dy);
    if distance > 0.0 {
        Velocity {
            vx: dx / distance * speed,
            vy: dy / distance * speed,
        }
    } else {
        Velocity::ZERO
    }
}

impl System for MonsterAiSystem {
    fn name(&self) -> &str {
        MONSTER_AI_SYSTEM_NAME
    }

    fn update(&mut self, world: &mut World, _dt: f64) {
        let Some(target) = world.get::<Position>(self.player).copied() else {
            return;
        };

        for entity in world.entities_with::<Monster>() {
            let (Some(monster), Some(position)) =
                (world.get::<Monster>(entity), world.get::<Position>(entity))
            else {
                continue;
            };
            let chase = chase_velocity(position, &target, monster.speed);
            if let Some(velocity) = world.get_mut::<Velocity>(entity) {
                *velocity = chase;
            }
        }
    }
}
