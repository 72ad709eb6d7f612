//! Component kinds used by the survival simulation.
//!
//! Monsters carry `Position`, `Velocity`, `Renderable`, `Health` and
//! `Monster`; the player carries `Position`, `Velocity`, `Renderable`, `Stats`
//! and `Weapon`. Systems treat a missing component as "not applicable".

use std::fmt;

use horde_ecs::component::Component;
use serde::{Deserialize, Serialize};

/// World-space location.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (grows downward).
    pub y: f64,
}

impl Position {
    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl Component for Position {
    const NAME: &'static str = "position";
}

/// Linear velocity in units per second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    /// Horizontal speed.
    pub vx: f64,
    /// Vertical speed.
    pub vy: f64,
}

impl Velocity {
    /// The zero vector.
    pub const ZERO: Self = Self { vx: 0.0, vy: 0.0 };

    /// Length of the velocity vector.
    pub fn magnitude(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

impl Component for Velocity {
    const NAME: &'static str = "velocity";
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GREEN: Self = Self { r: 0, g: 255, b: 0 };
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Presentation hint. Never read by gameplay systems.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Renderable {
    pub color: Color,
    pub radius: f64,
}

impl Component for Renderable {
    const NAME: &'static str = "renderable";
}

/// Hit-point pool for monsters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    /// A full pool of `max` hit points.
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Subtract `amount`, flooring at zero. Returns the new current value.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Whether the pool has been emptied.
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// `current / max` in `[0, 1]`; zero when `max` is zero.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            (f64::from(self.current) / f64::from(self.max)).min(1.0)
        }
    }
}

impl Component for Health {
    const NAME: &'static str = "health";
}

/// Per-monster tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Chase speed in units per second.
    pub speed: f64,
    /// Experience granted to the player on death.
    pub xp_reward: u32,
}

impl Component for Monster {
    const NAME: &'static str = "monster";
}

/// Player progression state.
///
/// Separate from [`Health`] so that other entity kinds need not carry
/// progression fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub health_current: u32,
    pub health_max: u32,
    pub xp_current: u32,
    pub xp_to_next: u32,
    pub level: u32,
}

impl Component for Stats {
    const NAME: &'static str = "stats";
}

/// Player auto-attack configuration.
///
/// `cooldown_remaining` stays within `[0, attack_cooldown]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: u32,
    /// Full cycle length in seconds.
    pub attack_cooldown: f64,
    /// Seconds left before the next attack is allowed.
    pub cooldown_remaining: f64,
    /// Maximum target distance.
    pub range: f64,
}

impl Weapon {
    /// Whether an attack may happen now.
    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining <= 0.0
    }
}

impl Component for Weapon {
    const NAME: &'static str = "weapon";
}
