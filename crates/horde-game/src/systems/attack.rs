//! Player auto-attack.

use horde_ecs::prelude::*;
use tracing::trace;

use crate::components::{Health, Monster, Position, Weapon};

/// Pipeline name of the [`AttackSystem`].
pub const ATTACK_SYSTEM_NAME: &str = "attack";

/// Ticks the weapon cooldown and, when ready, hits the nearest monster in
/// range.
///
/// A miss (no monster in range) consumes no cooldown: the weapon stays ready
/// until a target shows up.
#[derive(Debug)]
pub struct AttackSystem {
    player: EntityId,
}

impl AttackSystem {
    pub fn new(player: EntityId) -> Self {
        Self { player }
    }
}

/// The damageable monster closest to `origin` whose distance is at most
/// `range`, with that distance.
///
/// Among exactly equidistant monsters the winner depends on store iteration
/// order and is not specified.
pub fn nearest_monster_in_range(
    world: &World,
    origin: &Position,
    range: f64,
) -> Option<(EntityId, f64)> {
    world
        .store()
        .get_all::<Monster>()
        .filter(|(entity, _)| world.has::<Health>(*entity))
        .filter_map(|(entity, _)| {
            let distance = origin.distance_to(world.get::<Position>(entity)?);
            (distance <= range).then_some((entity, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

impl System for AttackSystem {
    fn name(&self) -> &str {
        ATTACK_SYSTEM_NAME
    }

    fn update(&mut self, world: &mut World, dt: f64) {
        let Some(origin) = world.get::<Position>(self.player).copied() else {
            return;
        };
        let Some(weapon) = world.get_mut::<Weapon>(self.player) else {
            return;
        };

        weapon.cooldown_remaining = (weapon.cooldown_remaining - dt)
            .max(0.0)
            .min(weapon.attack_cooldown);
        if !weapon.is_ready() {
            return;
        }
        let Weapon { damage, range, .. } = *weapon;

        let Some((target, distance)) = nearest_monster_in_range(world, &origin, range) else {
            return;
        };
        let Some(health) = world.get_mut::<Health>(target) else {
            return;
        };
        let remaining = health.apply_damage(damage);

        if let Some(weapon) = world.get_mut::<Weapon>(self.player) {
            weapon.cooldown_remaining = weapon.attack_cooldown;
        }
        trace!(%target, distance, damage, remaining, "attack hit");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::WorldState;

    fn weapon() -> Weapon {
        Weapon {
            damage: 25,
            attack_cooldown: 1.0,
            cooldown_remaining: 0.0,
            range: 50.0,
        }
    }

    fn setup() -> (World, EntityId, AttackSystem) {
        let mut world = World::new();
        let player = world.create_entity();
        world.set(player, Position { x: 0.0, y: 0.0 });
        world.set(player, weapon());
        (world, player, AttackSystem::new(player))
    }

    fn spawn_monster(world: &mut World, x: f64, y: f64, hp: u32) -> EntityId {
        let e = world.create_entity();
        world.set(e, Position { x, y });
        world.set(
            e,
            Health {
                current: hp,
                max: 50,
            },
        );
        world.set(
            e,
            Monster {
                speed: 100.0,
                xp_reward: 10,
            },
        );
        e
    }

    fn hp(world: &World, e: EntityId) -> u32 {
        world.get::<Health>(e).unwrap().current
    }

    fn cooldown(world: &World, player: EntityId) -> f64 {
        world.get::<Weapon>(player).unwrap().cooldown_remaining
    }

    #[test]
    fn hits_nearest_in_range_and_starts_cooldown() {
        let (mut world, player, mut system) = setup();
        let near = spawn_monster(&mut world, 30.0, 0.0, 50);
        let nearer = spawn_monster(&mut world, 0.0, 20.0, 50);
        let out_of_range = spawn_monster(&mut world, 60.0, 0.0, 50);

        system.update(&mut world, 0.016);

        assert_eq!(hp(&world, nearer), 25);
        assert_eq!(hp(&world, near), 50);
        assert_eq!(hp(&world, out_of_range), 50);
        assert_eq!(cooldown(&world, player), 1.0);
    }

    #[test]
    fn monster_exactly_at_range_is_targetable() {
        let (mut world, _player, mut system) = setup();
        let edge = spawn_monster(&mut world, 50.0, 0.0, 50);
        system.update(&mut world, 0.016);
        assert_eq!(hp(&world, edge), 25);
    }

    #[test]
    fn no_attack_while_cooling_down() {
        let (mut world, player, mut system) = setup();
        let m = spawn_monster(&mut world, 10.0, 0.0, 50);
        system.update(&mut world, 0.1);
        assert_eq!(hp(&world, m), 25);

        for _ in 0..10 {
            system.update(&mut world, 0.1);
            assert_eq!(hp(&world, m), 25);
        }
        // Ten subtractions of 0.1 leave a float sliver above zero.
        assert!(cooldown(&world, player) < 1e-9);
        system.update(&mut world, 0.1);
        assert_eq!(hp(&world, m), 0);
    }

    #[test]
    fn miss_keeps_weapon_ready() {
        let (mut world, player, mut system) = setup();
        spawn_monster(&mut world, 500.0, 0.0, 50);
        let before = WorldState::capture(&world);
        system.update(&mut world, 0.016);
        assert_eq!(WorldState::capture(&world), before);
        assert_eq!(cooldown(&world, player), 0.0);
    }

    #[test]
    fn health_floors_at_zero() {
        let (mut world, _player, mut system) = setup();
        let m = spawn_monster(&mut world, 10.0, 0.0, 10);
        system.update(&mut world, 0.016);
        assert_eq!(hp(&world, m), 0);
    }

    #[test]
    fn cooldown_clamped_into_cycle() {
        let (mut world, player, mut system) = setup();
        if let Some(w) = world.get_mut::<Weapon>(player) {
            w.cooldown_remaining = 3.0;
        }
        system.update(&mut world, 0.1);
        let c = cooldown(&world, player);
        assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn equidistant_tie_picks_one_valid_target() {
        let (mut world, _player, mut system) = setup();
        let a = spawn_monster(&mut world, 20.0, 0.0, 50);
        let b = spawn_monster(&mut world, -20.0, 0.0, 50);
        system.update(&mut world, 0.016);
        let hits = [a, b].iter().filter(|&&e| hp(&world, e) == 25).count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn player_without_weapon_is_noop() {
        let (mut world, player, mut system) = setup();
        world.remove::<Weapon>(player);
        let m = spawn_monster(&mut world, 10.0, 0.0, 50);
        let before = WorldState::capture(&world);
        system.update(&mut world, 0.016);
        assert_eq!(WorldState::capture(&world), before);
        assert_eq!(hp(&world, m), 50);
    }
}
