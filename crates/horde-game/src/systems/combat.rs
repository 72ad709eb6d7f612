//! Death detection and experience rewards.

use horde_ecs::prelude::*;
use tracing::debug;

use crate::components::{Health, Monster, Stats};

/// Pipeline name of the [`CombatSystem`].
pub const COMBAT_SYSTEM_NAME: &str = "combat";

/// Removes monsters whose health reached zero and credits their XP to the
/// player.
///
/// Dead monsters are collected during the scan and destroyed only after it
/// completes.
#[derive(Debug)]
pub struct CombatSystem {
    player: EntityId,
    kills: u64,
}

impl CombatSystem {
    pub fn new(player: EntityId) -> Self {
        Self { player, kills: 0 }
    }

    /// Monsters destroyed so far.
    pub fn kill_count(&self) -> u64 {
        self.kills
    }
}

impl System for CombatSystem {
    fn name(&self) -> &str {
        COMBAT_SYSTEM_NAME
    }

    fn update(&mut self, world: &mut World, _dt: f64) {
        let dead: Vec<(EntityId, u32)> = world
            .store()
            .get_all::<Monster>()
            .filter(|(entity, _)| world.get::<Health>(*entity).is_some_and(Health::is_depleted))
            .map(|(entity, monster)| (entity, monster.xp_reward))
            .collect();
        if dead.is_empty() {
            return;
        }

        if let Some(stats) = world.get_mut::<Stats>(self.player) {
            for (_, xp) in &dead {
                stats.xp_current = stats.xp_current.saturating_add(*xp);
            }
        }

        for (entity, xp) in dead {
            world.destroy_entity(entity);
            self.kills += 1;
            debug!(%entity, xp, "monster killed");
        }
    }
}
