//! Level progression.

use horde_ecs::prelude::*;
use tracing::info;

use crate::components::{Stats, Weapon};
use crate::config::ProgressionConfig;

/// Pipeline name of the [`ProgressionSystem`].
pub const PROGRESSION_SYSTEM_NAME: &str = "progression";

/// Converts accumulated XP into level-ups.
///
/// Runs after combat so the XP granted this frame is spent this frame. After
/// an update `xp_current < xp_to_next` always holds.
#[derive(Debug)]
pub struct ProgressionSystem {
    player: EntityId,
    config: ProgressionConfig,
}

impl ProgressionSystem {
    /// # Panics
    ///
    /// Panics if `config.xp_per_level` is zero.
    pub fn new(player: EntityId, config: ProgressionConfig) -> Self {
        assert!(config.xp_per_level > 0, "xp_per_level must be non-zero");
        Self { player, config }
    }
}

/// Multiply and round down.
fn grow(value: u32, factor: f64) -> u32 {
    // `as` saturates for out-of-range floats.
    (f64::from(value) * factor).floor() as u32
}

/// Apply a single level-up to `stats` and `weapon`.
///
/// The next requirement depends only on the new level (`xp_per_level *
/// level`), not on the previous requirement.
pub fn level_up(stats: &mut Stats, weapon: &mut Weapon, config: &ProgressionConfig) {
    stats.level = stats.level.saturating_add(1);
    stats.xp_current -= stats.xp_to_next.min(stats.xp_current);

    stats.health_max = grow(stats.health_max, config.health_growth);
    stats.health_current = stats.health_max;

    weapon.damage = grow(weapon.damage, config.damage_growth);
    weapon.attack_cooldown =
        (weapon.attack_cooldown * config.cooldown_factor).max(config.min_cooldown);
    weapon.cooldown_remaining = weapon.cooldown_remaining.min(weapon.attack_cooldown);

    stats.xp_to_next = config.xp_per_level.saturating_mul(stats.level);
}

impl System for ProgressionSystem {
    fn name(&self) -> &str {
        PROGRESSION_SYSTEM_NAME
    }

    fn update(&mut self, world: &mut World, _dt: f64) {
        let (Some(mut stats), Some(mut weapon)) = (
            world.get::<Stats>(self.player).copied(),
            world.get::<Weapon>(self.player).copied(),
        ) else {
            return;
        };
        if stats.xp_current < stats.xp_to_next {
            return;
        }

        while stats.xp_current >= stats.xp_to_next {
            level_up(&mut stats, &mut weapon, &self.config);
            info!(
                level = stats.level,
                health_max = stats.health_max,
                damage = weapon.damage,
                attack_cooldown = weapon.attack_cooldown,
                "level up"
            );
        }

        world.set(self.player, stats);
        world.set(self.player, weapon);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::WorldState;

    fn setup(xp_current: u32) -> (World, EntityId, ProgressionSystem) {
        let mut world = World::new();
        let player = world.create_entity();
        world.set(
            player,
            Stats {
                health_current: 40,
                health_max: 100,
                xp_current,
                xp_to_next: 100,
                level: 1,
            },
        );
        world.set(
            player,
            Weapon {
                damage: 25,
                attack_cooldown: 1.0,
                cooldown_remaining: 0.0,
                range: 50.0,
            },
        );
        let system = ProgressionSystem::new(player, ProgressionConfig::default());
        (world, player, system)
    }

    #[test]
    fn below_threshold_changes_nothing() {
        let (mut world, player, mut system) = setup(99);
        let before = WorldState::capture(&world);
        system.update(&mut world, 0.016);
        assert_eq!(WorldState::capture(&world), before);
        let stats = world.get::<Stats>(player).unwrap();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.xp_current, 99);
        assert_eq!(stats.health_current, 40);
    }

    #[test]
    fn single_level_up_grows_everything() {
        let (mut world, player, mut system) = setup(100);
        system.update(&mut world, 0.016);

        let stats = *world.get::<Stats>(player).unwrap();
        assert_eq!(stats.level, 2);
        assert_eq!(stats.xp_current, 0);
        assert_eq!(stats.xp_to_next, 200);
        assert_eq!(stats.health_max, 120);
        assert_eq!(stats.health_current, 120);

        let weapon = *world.get::<Weapon>(player).unwrap();
        assert_eq!(weapon.damage, 27);
        assert!((weapon.attack_cooldown - 0.95).abs() < 1e-12);
    }

    #[test]
    fn large_grant_resolves_in_one_pass() {
        // 250 xp at level 1: level 2 costs 100, leaving 150 < 200.
        let (mut world, player, mut system) = setup(250);
        system.update(&mut world, 0.016);
        let stats = world.get::<Stats>(player).unwrap();
        assert_eq!(stats.level, 2);
        assert_eq!(stats.xp_current, 150);
        assert_eq!(stats.xp_to_next, 200);
    }

    #[test]
    fn multiple_level_ups_in_one_pass() {
        // 100 + 200 + 300 = 600 reaches level 4 with 5 left over.
        let (mut world, player, mut system) = setup(605);
        system.update(&mut world, 0.016);
        let stats = *world.get::<Stats>(player).unwrap();
        assert_eq!(stats.level, 4);
        assert_eq!(stats.xp_current, 5);
        assert_eq!(stats.xp_to_next, 400);
        assert_eq!(stats.health_max, 172);

        let weapon = world.get::<Weapon>(player).unwrap();
        assert_eq!(weapon.damage, 31);
        assert!((weapon.attack_cooldown - 0.857375).abs() < 1e-9);
    }

    #[test]
    fn cooldown_never_below_minimum() {
        let config = ProgressionConfig::default();
        let mut stats = Stats {
            health_current: 1,
            health_max: 1,
            xp_current: 0,
            xp_to_next: 0,
            level: 1,
        };
        let mut weapon = Weapon {
            damage: 1,
            attack_cooldown: 0.1,
            cooldown_remaining: 0.1,
            range: 1.0,
        };
        level_up(&mut stats, &mut weapon, &config);
        assert_eq!(weapon.attack_cooldown, 0.1);
        assert!(weapon.cooldown_remaining <= weapon.attack_cooldown);
    }

    #[test]
    fn remaining_cooldown_clamped_to_shrunk_cycle() {
        let (mut world, player, mut system) = setup(100);
        if let Some(w) = world.get_mut::<Weapon>(player) {
            w.cooldown_remaining = 1.0;
        }
        system.update(&mut world, 0.016);
        let weapon = world.get::<Weapon>(player).unwrap();
        assert!(weapon.cooldown_remaining <= weapon.attack_cooldown);
    }

    #[test]
    fn missing_weapon_is_noop() {
        let (mut world, player, mut system) = setup(500);
        world.remove::<Weapon>(player);
        let before = WorldState::capture(&world);
        system.update(&mut world, 0.016);
        assert_eq!(WorldState::capture(&world), before);
        assert_eq!(world.get::<Stats>(player).unwrap().level, 1);
        assert!(!world.has::<Weapon>(player));
    }
}
