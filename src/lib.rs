//! Checkpoint Run - a side-scrolling checkpoint platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platform contact, checkpoint claims)
//! - `frame`: Per-tick drawable output handed to the host for rasterization
//! - `viewport`: Viewport-proportional sizing fixed at session start
//!
//! The host (browser glue, demo binary, test harness) owns the frame cadence and
//! the key event source; everything gameplay-relevant lives under `sim`.

pub mod frame;
pub mod sim;
pub mod viewport;

pub use frame::{DrawRect, Frame};
pub use viewport::Viewport;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied to the player each tick while airborne
    pub const GRAVITY: f32 = 0.5;

    /// Walk speed while the player moves freely inside the scroll band
    pub const WALK_SPEED: f32 = 5.0;
    /// World scroll speed once the player is pinned against a scroll threshold
    pub const SCROLL_SPEED: f32 = 5.0;
    /// Velocity delta applied by a non-zero-magnitude key event
    pub const KEY_MAGNITUDE: f32 = 8.0;
    /// Upward velocity delta applied by every jump event
    pub const JUMP_IMPULSE: f32 = 8.0;

    /// Design viewport height; shorter viewports scale sizes down proportionally
    pub const NOMINAL_VIEWPORT_HEIGHT: f32 = 500.0;

    /// Player square size (design units, scaled at construction)
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Player start position (design units)
    pub const PLAYER_START_X: f32 = 10.0;
    pub const PLAYER_START_Y: f32 = 400.0;

    /// Platform width is fixed in design units and never scaled
    pub const PLATFORM_WIDTH: f32 = 200.0;
    /// Platform height (design units, scaled at construction)
    pub const PLATFORM_HEIGHT: f32 = 40.0;

    /// Checkpoint size (design units, scaled at construction)
    pub const CHECKPOINT_WIDTH: f32 = 40.0;
    pub const CHECKPOINT_HEIGHT: f32 = 70.0;
    /// Unscaled window past a checkpoint's left edge that still shows the
    /// intermediate message
    pub const CHECKPOINT_MESSAGE_WINDOW: f32 = 40.0;

    /// Scroll thresholds (design units, scaled at construction): the player walks
    /// freely between them; pinned against one, the world scrolls instead
    pub const SCROLL_LEFT_THRESHOLD: f32 = 100.0;
    pub const SCROLL_RIGHT_THRESHOLD: f32 = 400.0;

    /// Entity fill colors as CSS hex, passed through to the host untouched
    pub const PLAYER_COLOR: &str = "#99c9ff";
    pub const PLATFORM_COLOR: &str = "#acd157";
    pub const CHECKPOINT_COLOR: &str = "#f1be32";

    /// Checkpoint notification messages
    pub const CHECKPOINT_MESSAGE: &str = "You reached a checkpoint!";
    pub const FINAL_CHECKPOINT_MESSAGE: &str = "You reached the final checkpoint!";

    /// How long the host keeps a non-final checkpoint message visible
    pub const MESSAGE_DISMISS_MS: u64 = 2000;
}
