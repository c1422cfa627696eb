//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and host-free:
//! - One tick per host frame callback, no internal timing
//! - Stable iteration order (layout order for platforms and checkpoints)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{PlatformContact, checkpoint_reached, platform_contact};
pub use input::{GameKey, InputTracker, handle_key, key_changed};
pub use state::{Checkpoint, GameEvent, GamePhase, GameState, Platform, Player};
pub use tick::tick;
