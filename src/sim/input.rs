//! Input boundary and movement commands
//!
//! Browser key identifiers are decoded into a closed [`GameKey`] enum exactly
//! once, at the boundary; everything past that point works with the enum. Key
//! events mutate player velocity directly and synchronously between ticks, so
//! the tick itself only ever reads the pressed-state tracker.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use crate::consts::{JUMP_IMPULSE, KEY_MAGNITUDE};

/// The closed set of recognized game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKey {
    MoveLeft,
    MoveRight,
    Jump,
}

impl GameKey {
    /// Decode a browser `KeyboardEvent.key` value. Unrecognized keys map to
    /// `None` and are ignored by the host.
    pub fn from_browser_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(GameKey::MoveLeft),
            "ArrowRight" => Some(GameKey::MoveRight),
            "ArrowUp" | " " | "Spacebar" => Some(GameKey::Jump),
            _ => None,
        }
    }
}

/// Pressed-state of the horizontal movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTracker {
    pub left: bool,
    pub right: bool,
}

/// Apply one discrete key event to the session.
///
/// Finished sessions ignore every key and pin velocity to zero. Horizontal
/// keys apply velocity as a delta rather than a set, so momentarily-overlapping
/// left and right presses cancel; a zero magnitude (key release) zeroes the
/// horizontal velocity outright.
pub fn handle_key(state: &mut GameState, key: GameKey, magnitude: f32, pressed: bool) {
    if state.phase == GamePhase::Finished {
        state.player.vel = Vec2::ZERO;
        return;
    }

    match key {
        GameKey::MoveLeft => {
            state.keys.left = pressed;
            if magnitude == 0.0 {
                state.player.vel.x = 0.0;
            } else {
                state.player.vel.x -= magnitude;
            }
        }
        GameKey::MoveRight => {
            state.keys.right = pressed;
            if magnitude == 0.0 {
                state.player.vel.x = 0.0;
            } else {
                state.player.vel.x += magnitude;
            }
        }
        GameKey::Jump => {
            // Fires on press and release alike, with no grounded check or
            // cooldown; rapid events stack additively. Kept as-is on purpose.
            state.player.vel.y -= JUMP_IMPULSE;
        }
    }
}

/// Host-facing key event: press carries the fixed key magnitude, release zero
pub fn key_changed(state: &mut GameState, key: GameKey, pressed: bool) {
    let magnitude = if pressed { KEY_MAGNITUDE } else { 0.0 };
    handle_key(state, key, magnitude, pressed);
}
