//! Checkpoint Run entry point
//!
//! Headless demo host: drives the simulation at a fixed ~60 Hz cadence with
//! scripted input and logs the notifications the browser glue would surface.
//! The host side also owns the checkpoint message lifetime, including the
//! 2-second auto-dismiss for non-final messages.

use std::time::{Duration, Instant};

use checkpoint_run::consts::MESSAGE_DISMISS_MS;
use checkpoint_run::frame::Frame;
use checkpoint_run::sim::{GameEvent, GameKey, GamePhase, GameState, key_changed, tick};
use checkpoint_run::viewport::Viewport;

/// Nominal browser refresh callback interval
const FRAME: Duration = Duration::from_millis(16);
/// Cap the scripted run at one minute of play
const MAX_FRAMES: u64 = 3600;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let viewport = Viewport::new(1280.0, 720.0);
    let mut state = GameState::new(viewport);
    let mut frame = Frame::new();

    log::info!(
        "session start: viewport {}x{}, {} platforms, {} checkpoints",
        viewport.width,
        viewport.height,
        state.platforms.len(),
        state.checkpoints.len()
    );

    // Scripted input: hold right for the whole run, hop periodically
    key_changed(&mut state, GameKey::MoveRight, true);

    // Pending auto-dismiss deadline for the visible message. A new non-final
    // claim replaces it without cancelling; overlapping claims are not
    // deduplicated.
    let mut message_hide_at: Option<Instant> = None;

    for n in 0..MAX_FRAMES {
        if state.phase == GamePhase::Active && n % 75 == 50 {
            key_changed(&mut state, GameKey::Jump, true);
        }

        for event in tick(&mut state, &mut frame) {
            let GameEvent::CheckpointReached { message, is_final } = event;
            log::info!("checkpoint screen: {message}");
            if is_final {
                message_hide_at = None;
            } else {
                message_hide_at = Some(Instant::now() + Duration::from_millis(MESSAGE_DISMISS_MS));
            }
        }

        if let Some(deadline) = message_hide_at
            && Instant::now() >= deadline
        {
            log::info!("checkpoint screen hidden");
            message_hide_at = None;
        }

        log::trace!(
            "tick {}: {} rects, player at ({:.1}, {:.1})",
            state.time_ticks,
            frame.len(),
            state.player.pos.x,
            state.player.pos.y
        );

        if state.phase == GamePhase::Finished {
            log::info!("run finished after {} ticks", state.time_ticks);
            break;
        }

        std::thread::sleep(FRAME);
    }
}
