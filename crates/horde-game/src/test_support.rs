//! Whole-world comparison for unit tests.

use horde_ecs::prelude::*;

use crate::components::{Health, Monster, Position, Renderable, Stats, Velocity, Weapon};

/// Every association of every game component kind, sorted by entity.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WorldState {
    associations: usize,
    positions: Vec<(EntityId, Position)>,
    velocities: Vec<(EntityId, Velocity)>,
    renderables: Vec<(EntityId, Renderable)>,
    healths: Vec<(EntityId, Health)>,
    monsters: Vec<(EntityId, Monster)>,
    stats: Vec<(EntityId, Stats)>,
    weapons: Vec<(EntityId, Weapon)>,
}

impl WorldState {
    pub(crate) fn capture(world: &World) -> Self {
        Self {
            associations: world.store().association_count(),
            positions: column(world),
            velocities: column(world),
            renderables: column(world),
            healths: column(world),
            monsters: column(world),
            stats: column(world),
            weapons: column(world),
        }
    }
}

fn column<T: Component + Copy>(world: &World) -> Vec<(EntityId, T)> {
    let mut values: Vec<(EntityId, T)> = world
        .store()
        .get_all::<T>()
        .map(|(e, v)| (e, *v))
        .collect();
    values.sort_by_key(|(e, _)| *e);
    values
}
