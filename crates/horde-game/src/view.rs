//! Read-only presentation boundary.
//!
//! A renderer only needs to know where things are, what they look like, and
//! what the HUD should say. Everything here takes `&World` and never writes
//! simulation components. Actual drawing (pixels, fonts, HiDPI scaling) lives
//! outside this crate.

use std::cell::Cell;
use std::rc::Rc;

use horde_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{Color, Health, Monster, Position, Renderable, Stats, Weapon};

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Logical size of the visible play area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Half of the larger side.
    pub fn half_extent(&self) -> f64 {
        self.width.max(self.height) / 2.0
    }
}

/// Shared, live viewport size.
///
/// The presentation layer writes it on resize; the spawner reads it so spawn
/// placement tracks the real window.
#[derive(Debug, Clone)]
pub struct ViewportHandle(Rc<Cell<Viewport>>);

impl ViewportHandle {
    pub fn new(viewport: Viewport) -> Self {
        Self(Rc::new(Cell::new(viewport)))
    }

    pub fn get(&self) -> Viewport {
        self.0.get()
    }

    pub fn set(&self, viewport: Viewport) {
        self.0.set(viewport);
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

/// A camera centered on one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World coordinate of the viewport's top-left corner.
    pub offset_x: f64,
    pub offset_y: f64,
    pub viewport: Viewport,
}

impl Camera {
    /// Center the camera on `target`'s position. A target without a position
    /// leaves the camera at the world origin.
    pub fn follow(world: &World, target: EntityId, viewport: Viewport) -> Self {
        let (offset_x, offset_y) = world.get::<Position>(target).map_or((0.0, 0.0), |p| {
            (p.x - viewport.width / 2.0, p.y - viewport.height / 2.0)
        });
        Self {
            offset_x,
            offset_y,
            viewport,
        }
    }

    /// Convert a world position to screen coordinates.
    pub fn world_to_screen(&self, position: &Position) -> (f64, f64) {
        (position.x - self.offset_x, position.y - self.offset_y)
    }

    /// Whether a circle of `radius` at `position` overlaps the viewport.
    pub fn is_visible(&self, position: &Position, radius: f64) -> bool {
        let (sx, sy) = self.world_to_screen(position);
        sx + radius >= 0.0
            && sx - radius <= self.viewport.width
            && sy + radius >= 0.0
            && sy - radius <= self.viewport.height
    }
}

// ---------------------------------------------------------------------------
// Draw list
// ---------------------------------------------------------------------------

/// One circle to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub entity: EntityId,
    pub screen_x: f64,
    pub screen_y: f64,
    pub radius: f64,
    pub color: Color,
    /// Remaining health in `[0, 1]` for entities with a health bar.
    pub health_fraction: Option<f64>,
}

/// Everything with a position and a renderable that the camera can see.
///
/// Sorted by entity id so output is stable between calls.
pub fn draw_list(world: &World, camera: &Camera) -> Vec<DrawItem> {
    let mut items: Vec<DrawItem> = world
        .store()
        .get_all::<Renderable>()
        .filter_map(|(entity, renderable)| {
            let position = world.get::<Position>(entity)?;
            if !camera.is_visible(position, renderable.radius) {
                return None;
            }
            let (screen_x, screen_y) = camera.world_to_screen(position);
            Some(DrawItem {
                entity,
                screen_x,
                screen_y,
                radius: renderable.radius,
                color: renderable.color,
                health_fraction: world.get::<Health>(entity).map(Health::fraction),
            })
        })
        .collect();
    items.sort_by_key(|item| item.entity);
    items
}

// ---------------------------------------------------------------------------
// HUD
// ---------------------------------------------------------------------------

/// What the heads-up display shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub level: u32,
    pub health_current: u32,
    pub health_max: u32,
    pub xp_current: u32,
    pub xp_to_next: u32,
    pub damage: Option<u32>,
    pub attack_cooldown: Option<f64>,
    /// Number of monsters alive.
    pub monsters: usize,
}

impl HudSnapshot {
    /// Copy the player's progression state. `None` if the player has no
    /// [`Stats`].
    pub fn read(world: &World, player: EntityId) -> Option<Self> {
        let stats = world.get::<Stats>(player)?;
        let weapon = world.get::<Weapon>(player);
        Some(Self {
            level: stats.level,
            health_current: stats.health_current,
            health_max: stats.health_max,
            xp_current: stats.xp_current,
            xp_to_next: stats.xp_to_next,
            damage: weapon.map(|w| w.damage),
            attack_cooldown: weapon.map(|w| w.attack_cooldown),
            monsters: world.store().count::<Monster>(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
