//! Horde ECS -- a small keyed-table Entity Component System.
//!
//! Entities are opaque, never-reused identifiers. Components are plain data
//! types stored in one column per kind, so a query over a kind touches only
//! the entities that carry it. Systems are trait objects run in a fixed order
//! by a [`Pipeline`](pipeline::Pipeline).
//!
//! # Quick Start
//!
//! ```
//! use horde_ecs::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Position { x: f64, y: f64 }
//!
//! impl Component for Position {
//!     const NAME: &'static str = "position";
//! }
//!
//! let mut world = World::new();
//! let entity = world.create_entity();
//! world.set(entity, Position { x: 0.0, y: 0.0 });
//!
//! assert_eq!(world.get::<Position>(entity), Some(&Position { x: 0.0, y: 0.0 }));
//!
//! world.destroy_entity(entity);
//! assert!(!world.has::<Position>(entity));
//! ```

#![deny(unsafe_code)]

pub mod component;
pub mod entity;
pub mod pipeline;
pub mod world;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::component::{Component, ComponentStore};
    pub use crate::entity::{EntityAllocator, EntityId};
    pub use crate::pipeline::{FrameDiagnostics, Pipeline, System};
    pub use crate::world::World;
}
