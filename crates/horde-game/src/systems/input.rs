//! Player movement input.
//!
//! Key presses arrive asynchronously from the host through an [`InputHandle`];
//! the [`InputSystem`] turns whatever is held at the start of the frame into
//! the player's velocity.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use horde_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Velocity;

/// Pipeline name of the [`InputSystem`].
pub const INPUT_SYSTEM_NAME: &str = "input";

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A logical movement direction. Screen y grows downward, so `Up` is `-y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Map a DOM-style physical key code (`"KeyW"`, `"ArrowUp"`, ...) to a
    /// direction. WASD and the arrow keys are recognized.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(Self::Up),
            "KeyS" | "ArrowDown" => Some(Self::Down),
            "KeyA" | "ArrowLeft" => Some(Self::Left),
            "KeyD" | "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// Unit vector for this direction.
    fn unit(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// InputHandle
// ---------------------------------------------------------------------------

/// The set of held movement directions, shared between the host (which
/// delivers key notifications) and the [`InputSystem`] (which reads them).
#[derive(Debug, Clone, Default)]
pub struct InputHandle(Rc<RefCell<HashSet<Direction>>>);

impl InputHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A movement key went down.
    pub fn press(&self, direction: Direction) {
        self.0.borrow_mut().insert(direction);
    }

    /// A movement key went up.
    pub fn release(&self, direction: Direction) {
        self.0.borrow_mut().remove(&direction);
    }

    /// The window lost focus: forget every held key.
    pub fn focus_lost(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.0.borrow().contains(&direction)
    }

    /// Held directions in [`Direction::ALL`] order.
    pub fn held(&self) -> Vec<Direction> {
        let keys = self.0.borrow();
        Direction::ALL
            .into_iter()
            .filter(|d| keys.contains(d))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// InputSystem
// ---------------------------------------------------------------------------

/// Rebuilds the player's [`Velocity`] from held keys every frame.
#[derive(Debug)]
pub struct InputSystem {
    player: EntityId,
    speed: f64,
    keys: InputHandle,
}

impl InputSystem {
    pub fn new(player: EntityId, speed: f64) -> Self {
        Self {
            player,
            speed,
            keys: InputHandle::new(),
        }
    }

    /// A handle the host uses to deliver key notifications.
    pub fn handle(&self) -> InputHandle {
        self.keys.clone()
    }

    /// Velocity for the currently held keys. Opposite keys cancel; diagonals
    /// are rescaled so their magnitude equals `speed`.
    pub fn velocity_for(&self, held: &[Direction]) -> Velocity {
        let (mut vx, mut vy) = (0.0, 0.0);
        for direction in held {
            let (ux, uy) = direction.unit();
            vx += ux * self.speed;
            vy += uy * self.speed;
        }
        if vx != 0.0 && vy != 0.0 {
            let length = vx.hypot(vy);
            vx = vx / length * self.speed;
            vy = vy / length * self.speed;
        }
        Velocity { vx, vy }
    }
}

impl System for InputSystem {
    fn name(&self) -> &str {
        INPUT_SYSTEM_NAME
    }

    fn update(&mut self, world: &mut World, _dt: f64) {
        let velocity = self.velocity_for(&self.keys.held());
        if let Some(v) = world.get_mut::<Velocity>(self.player) {
            *v = velocity;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
