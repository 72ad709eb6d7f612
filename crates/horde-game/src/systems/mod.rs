//! The seven gameplay systems.
//!
//! [`Game`](crate::game::Game) registers them in this order, and every
//! cross-system effect relies on it:
//!
//! 1. [`InputSystem`]
//! 2. [`SpawnerSystem`]
//! 3. [`MonsterAiSystem`]
//! 4. [`MovementSystem`]
//! 5. [`AttackSystem`]
//! 6. [`CombatSystem`]
//! 7. [`ProgressionSystem`]

pub mod attack;
pub mod combat;
pub mod input;
pub mod monster_ai;
pub mod movement;
pub mod progression;
pub mod spawner;

pub use attack::{nearest_monster_in_range, AttackSystem, ATTACK_SYSTEM_NAME};
pub use combat::{CombatSystem, COMBAT_SYSTEM_NAME};
pub use input::{Direction, InputHandle, InputSystem, INPUT_SYSTEM_NAME};
pub use monster_ai::{chase_velocity, MonsterAiSystem, MONSTER_AI_SYSTEM_NAME};
pub use movement::{MovementSystem, MOVEMENT_SYSTEM_NAME};
pub use progression::{level_up, ProgressionSystem, PROGRESSION_SYSTEM_NAME};
pub use spawner::{SpawnerSystem, SPAWNER_SYSTEM_NAME};

/// System names in pipeline order.
pub const PIPELINE_ORDER: [&str; 7] = [
    INPUT_SYSTEM_NAME,
    SPAWNER_SYSTEM_NAME,
    MONSTER_AI_SYSTEM_NAME,
    MOVEMENT_SYSTEM_NAME,
    ATTACK_SYSTEM_NAME,
    COMBAT_SYSTEM_NAME,
    PROGRESSION_SYSTEM_NAME,
];
