//! Game state and core simulation types
//!
//! Everything the tick mutates lives here. All sizes are fixed at construction
//! from the viewport; only positions (and checkpoint claim state) change during
//! play.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::InputTracker;
use crate::consts::*;
use crate::frame::DrawRect;
use crate::viewport::Viewport;

/// Session lifecycle. The transition is one-way: claiming the final checkpoint
/// moves Active -> Finished, after which input and checkpoint checks are dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play: input live, checkpoints claimable
    Active,
    /// Final checkpoint claimed; the tick keeps running but nothing moves
    Finished,
}

/// Notification emitted toward the host UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A checkpoint was claimed this tick. Non-final messages are auto-dismissed
    /// by the host after `MESSAGE_DISMISS_MS`; the final message persists.
    CheckpointReached {
        message: &'static str,
        is_final: bool,
    },
}

/// The player sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(
                viewport.scale(PLAYER_START_X),
                viewport.scale(PLAYER_START_Y),
            ),
            vel: Vec2::ZERO,
            width: viewport.scale(PLAYER_SIZE),
            height: viewport.scale(PLAYER_SIZE),
        }
    }

    pub fn draw(&self) -> DrawRect {
        DrawRect {
            pos: self.pos,
            width: self.width,
            height: self.height,
            color: PLAYER_COLOR,
        }
    }

    /// Canvas-space bottom edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Integrate one tick of physics: position, then the canvas-floor rule,
    /// then the horizontal band clamp.
    ///
    /// The floor here is the canvas boundary itself; platform support is
    /// resolved separately by the tick. Note the floor test re-reads the
    /// already-integrated position.
    pub fn update(&mut self, viewport: Viewport) {
        self.pos += self.vel;

        if self.pos.y + self.height + self.vel.y <= viewport.height {
            if self.pos.y < 0.0 {
                // Poked above the canvas top: pin to it and start falling
                self.pos.y = 0.0;
                self.vel.y = GRAVITY;
            } else {
                self.vel.y += GRAVITY;
            }
        } else {
            // Would cross the canvas bottom: come to rest
            self.vel.y = 0.0;
        }

        // Keep the player inside a fixed horizontal band; the world scrolls
        // instead of the player traversing it
        if self.pos.x < self.width {
            self.pos.x = self.width;
        }
        if self.pos.x >= viewport.width - 2.0 * self.width {
            self.pos.x = viewport.width - 2.0 * self.width;
        }
    }
}

/// A static platform; position shifts only through world scroll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    /// `y` is already in canvas units; platform width is never scaled
    pub fn new(x: f32, y: f32, viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width: PLATFORM_WIDTH,
            height: viewport.scale(PLATFORM_HEIGHT),
        }
    }

    pub fn draw(&self) -> DrawRect {
        DrawRect {
            pos: self.pos,
            width: self.width,
            height: self.height,
            color: PLATFORM_COLOR,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}

/// A claimable checkpoint; claim order follows layout order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub claimed: bool,
}

impl Checkpoint {
    /// `y` is already in canvas units
    pub fn new(x: f32, y: f32, viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width: viewport.scale(CHECKPOINT_WIDTH),
            height: viewport.scale(CHECKPOINT_HEIGHT),
            claimed: false,
        }
    }

    pub fn draw(&self) -> DrawRect {
        DrawRect {
            pos: self.pos,
            width: self.width,
            height: self.height,
            color: CHECKPOINT_COLOR,
        }
    }

    /// One-way removal from play: zero size, off-world position, claimed flag.
    /// Idempotent in effect; no collision predicate can hold afterwards.
    pub fn claim(&mut self) {
        self.width = 0.0;
        self.height = 0.0;
        self.pos.y = f32::INFINITY;
        self.claimed = true;
    }
}

/// Platform layout in design units (x unscaled, y scaled at construction)
pub const PLATFORM_LAYOUT: [(f32, f32); 12] = [
    (500.0, 450.0),
    (700.0, 400.0),
    (850.0, 350.0),
    (900.0, 350.0),
    (1050.0, 150.0),
    (2500.0, 450.0),
    (2900.0, 400.0),
    (3150.0, 350.0),
    (3900.0, 450.0),
    (4200.0, 400.0),
    (4400.0, 200.0),
    (4700.0, 150.0),
];

/// Checkpoint layout in design units, in required claim order
pub const CHECKPOINT_LAYOUT: [(f32, f32); 3] = [(1170.0, 80.0), (2900.0, 330.0), (4800.0, 80.0)];

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Viewport captured at session start; sizes and thresholds derive from it
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub player: Player,
    /// Layout order
    pub platforms: Vec<Platform>,
    /// Layout order == required claim order
    pub checkpoints: Vec<Checkpoint>,
    /// Pressed-state of the movement keys, mutated only by key events
    pub keys: InputTracker,
    /// Scaled scroll band bounds (left/right thresholds for world scroll)
    pub scroll_left_threshold: f32,
    pub scroll_right_threshold: f32,
    /// Tick counter, for host logging only
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh session from the static layout tables
    pub fn new(viewport: Viewport) -> Self {
        let platforms = PLATFORM_LAYOUT
            .iter()
            .map(|&(x, y)| Platform::new(x, viewport.scale(y), viewport))
            .collect();
        let checkpoints = CHECKPOINT_LAYOUT
            .iter()
            .map(|&(x, y)| Checkpoint::new(x, viewport.scale(y), viewport))
            .collect();

        Self {
            viewport,
            phase: GamePhase::Active,
            player: Player::new(viewport),
            platforms,
            checkpoints,
            keys: InputTracker::default(),
            scroll_left_threshold: viewport.scale(SCROLL_LEFT_THRESHOLD),
            scroll_right_threshold: viewport.scale(SCROLL_RIGHT_THRESHOLD),
            time_ticks: 0,
        }
    }
}
