//! Horde Game -- top-down survival simulation on top of [`horde_ecs`].
//!
//! The player moves under keyboard control, monsters spawn around it on a
//! timer and chase it, an auto-attacking weapon hits the nearest monster in
//! range, dead monsters grant experience and experience drives level-ups.
//!
//! [`Game`](game::Game) wires everything together: it creates the player,
//! registers the seven systems in their fixed order and clamps each frame's
//! elapsed time before running the pipeline.
//!
//! # Quick Start
//!
//! ```
//! use horde_game::prelude::*;
//!
//! let config = GameConfig { seed: Some(42), ..Default::default() };
//! let mut game = Game::new(config).unwrap();
//!
//! game.input().press(Direction::Up);
//! for _ in 0..60 {
//!     game.step(1.0 / 60.0);
//! }
//!
//! let hud = game.hud().unwrap();
//! assert_eq!(hud.level, 1);
//! assert_eq!(game.frame_count(), 60);
//! ```

#![deny(unsafe_code)]

pub mod components;
pub mod config;
pub mod game;
pub mod systems;
pub mod view;

#[cfg(test)]
mod test_support;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

/// Re-export the ECS crate for convenience.
pub use horde_ecs;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common game usage.
pub mod prelude {
    pub use horde_ecs::prelude::*;

    pub use crate::components::{
        Color, Health, Monster, Position, Renderable, Stats, Velocity, Weapon,
    };
    pub use crate::config::{ConfigError, GameConfig};
    pub use crate::game::{clamp_dt, Game};
    pub use crate::systems::{Direction, InputHandle, PIPELINE_ORDER};
    pub use crate::view::{draw_list, Camera, DrawItem, HudSnapshot, Viewport, ViewportHandle};
}
