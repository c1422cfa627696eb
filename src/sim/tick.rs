//! Per-frame simulation step
//!
//! The host calls [`tick`] once per display-refresh callback. Each call redraws
//! the frame, integrates player physics, couples held keys to walking or world
//! scroll, resolves platform contact, and evaluates checkpoint claims in
//! sequence order. The loop has no natural end: after the final checkpoint the
//! session phase suppresses input and claims, and ticks keep running
//! harmlessly.

use super::collision::{PlatformContact, checkpoint_reached, platform_contact};
use super::input::{GameKey, handle_key};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::frame::Frame;

/// Advance the session by one frame.
///
/// Rebuilds `frame` back-to-front (platforms, checkpoints, player at its
/// pre-integration position) and returns the checkpoint notifications raised
/// this tick, at most one under normal play.
pub fn tick(state: &mut GameState, frame: &mut Frame) -> Vec<GameEvent> {
    let mut events = Vec::new();

    frame.clear();
    for platform in &state.platforms {
        frame.push(platform.draw());
    }
    for checkpoint in &state.checkpoints {
        frame.push(checkpoint.draw());
    }

    frame.push(state.player.draw());
    state.player.update(state.viewport);

    // Held keys either walk the player inside the scroll band or, once pinned
    // against a threshold, scroll the whole world past it. Scroll stops for
    // good once the session finishes; walking deliberately does not (a key
    // still held at the final claim keeps its pressed state).
    if state.keys.right && state.player.pos.x < state.scroll_right_threshold {
        state.player.vel.x = WALK_SPEED;
    } else if state.keys.left && state.player.pos.x > state.scroll_left_threshold {
        state.player.vel.x = -WALK_SPEED;
    } else {
        state.player.vel.x = 0.0;

        if state.phase == GamePhase::Active {
            if state.keys.right {
                shift_world(state, -SCROLL_SPEED);
            } else if state.keys.left {
                shift_world(state, SCROLL_SPEED);
            }
        }
    }

    // Platform contact, every platform every tick
    for platform in &state.platforms {
        match platform_contact(&state.player, platform) {
            PlatformContact::Resting => {
                state.player.vel.y = 0.0;
            }
            PlatformContact::Landing => {
                // Snap to rest height and resume falling; a resting contact on
                // a later tick holds the player in place
                state.player.pos.y = platform.pos.y + state.player.height;
                state.player.vel.y = GRAVITY;
            }
            PlatformContact::Airborne => {}
        }
    }

    // Checkpoint claims, strictly in sequence order
    let last = state.checkpoints.len() - 1;
    for i in 0..state.checkpoints.len() {
        let in_sequence = i == 0 || state.checkpoints[i - 1].claimed;
        if state.phase != GamePhase::Active
            || !in_sequence
            || !checkpoint_reached(&state.player, &state.checkpoints[i])
        {
            continue;
        }

        // claim() moves the checkpoint off-world but leaves pos.x alone, which
        // the message window below still reads
        let checkpoint_x = state.checkpoints[i].pos.x;
        state.checkpoints[i].claim();

        if i == last {
            state.phase = GamePhase::Finished;
            events.push(GameEvent::CheckpointReached {
                message: FINAL_CHECKPOINT_MESSAGE,
                is_final: true,
            });
            // Stop the player through the movement-command path; the finished
            // phase zeroes both velocity axes
            handle_key(state, GameKey::MoveRight, 0.0, false);
        } else if state.player.pos.x >= checkpoint_x
            && state.player.pos.x <= checkpoint_x + CHECKPOINT_MESSAGE_WINDOW
        {
            events.push(GameEvent::CheckpointReached {
                message: CHECKPOINT_MESSAGE,
                is_final: false,
            });
        }
    }

    state.time_ticks += 1;
    events
}

fn shift_world(state: &mut GameState, dx: f32) {
    for platform in &mut state.platforms {
        platform.pos.x += dx;
    }
    for checkpoint in &mut state.checkpoints {
        checkpoint.pos.x += dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::key_changed;
    use crate::viewport::Viewport;
    use glam::Vec2;

    const VIEWPORT: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    /// Park the player away from every platform and checkpoint
    fn quiet_state() -> GameState {
        let mut state = GameState::new(VIEWPORT);
        state.player.pos = Vec2::new(100.0, 300.0);
        state.player.vel = Vec2::ZERO;
        state
    }

    #[test]
    fn test_draw_order_and_count() {
        let mut state = GameState::new(VIEWPORT);
        let mut frame = Frame::new();
        tick(&mut state, &mut frame);

        // 12 platforms, 3 checkpoints, 1 player, in that order
        assert_eq!(frame.len(), 16);
        let rects = frame.rects();
        assert_eq!(rects[0].color, PLATFORM_COLOR);
        assert_eq!(rects[11].color, PLATFORM_COLOR);
        assert_eq!(rects[12].color, CHECKPOINT_COLOR);
        assert_eq!(rects[15].color, PLAYER_COLOR);
    }

    #[test]
    fn test_player_drawn_at_pre_integration_position() {
        let mut state = quiet_state();
        state.player.vel = Vec2::new(0.0, 4.0);
        let mut frame = Frame::new();
        tick(&mut state, &mut frame);

        let player_rect = frame.rects()[15];
        assert_eq!(player_rect.pos, Vec2::new(100.0, 300.0));
        assert_eq!(state.player.pos, Vec2::new(100.0, 304.0));
    }

    #[test]
    fn test_walk_right_inside_band() {
        let mut state = quiet_state();
        key_changed(&mut state, GameKey::MoveRight, true);
        let mut frame = Frame::new();
        tick(&mut state, &mut frame);

        // Left of the scroll threshold: the player walks, the world stays put
        assert_eq!(state.player.vel.x, WALK_SPEED);
        assert_eq!(state.platforms[0].pos.x, 500.0);
    }

    #[test]
    fn test_pinned_right_scrolls_world() {
        // Short viewport so the scaled right threshold (50) sits at the
        // player's position
        let viewport = Viewport::new(800.0, 62.0);
        let mut state = GameState::new(viewport);
        assert_eq!(state.scroll_right_threshold, 50.0);
        state.player.pos = Vec2::new(50.0, 30.0);
        state.player.vel = Vec2::ZERO;
        state.keys.right = true;

        let platform_xs: Vec<f32> = state.platforms.iter().map(|p| p.pos.x).collect();
        let checkpoint_xs: Vec<f32> = state.checkpoints.iter().map(|c| c.pos.x).collect();

        let mut frame = Frame::new();
        tick(&mut state, &mut frame);

        assert_eq!(state.player.vel.x, 0.0);
        for (platform, old_x) in state.platforms.iter().zip(platform_xs) {
            assert_eq!(platform.pos.x, old_x - SCROLL_SPEED);
        }
        for (checkpoint, old_x) in state.checkpoints.iter().zip(checkpoint_xs) {
            assert_eq!(checkpoint.pos.x, old_x - SCROLL_SPEED);
        }
    }

    #[test]
    fn test_pinned_left_scrolls_world_back() {
        let viewport = Viewport::new(800.0, 62.0);
        let mut state = GameState::new(viewport);
        // Scaled left threshold: ceil(100 * 62 / 500) = 13
        assert_eq!(state.scroll_left_threshold, 13.0);
        state.player.pos = Vec2::new(13.0, 30.0);
        state.player.vel = Vec2::ZERO;
        state.keys.left = true;

        let mut frame = Frame::new();
        tick(&mut state, &mut frame);

        assert_eq!(state.player.vel.x, 0.0);
        assert_eq!(state.platforms[0].pos.x, 500.0 + SCROLL_SPEED);
    }

    #[test]
    fn test_falling_keeps_accelerating_above_floor() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(100.0, 750.0);
        state.player.vel = Vec2::new(0.0, 4.0);

        let mut frame = Frame::new();
        tick(&mut state, &mut frame);

        // 754 + 40 + 4 = 798 <= 800: no floor reset yet
        assert_eq!(state.player.vel.y, 4.5);
    }

    #[test]
    fn test_resting_contact_zeroes_fall() {
        let mut state = quiet_state();
        // Just above platform 0 (500, 450), falling fast enough to reach it
        state.player.pos = Vec2::new(550.0, 404.0);
        state.player.vel = Vec2::new(0.0, 4.0);

        let mut frame = Frame::new();
        tick(&mut state, &mut frame);

        // After integration the bottom sits at 448, one tick from the top
        assert_eq!(state.player.pos.y, 408.0);
        assert_eq!(state.player.vel.y, 0.0);
    }

    #[test]
    fn test_landing_snap_re_primes_gravity() {
        let mut state = quiet_state();
        // Deep inside platform 0's body after integration
        state.player.pos = Vec2::new(550.0, 460.0);
        state.player.vel = Vec2::ZERO;

        let mut frame = Frame::new();
        tick(&mut state, &mut frame);

        assert_eq!(state.player.pos.y, 450.0 + state.player.height);
        assert_eq!(state.player.vel.y, GRAVITY);
    }

    #[test]
    fn test_checkpoints_claim_in_sequence_only() {
        let mut state = quiet_state();
        // Drop the second checkpoint onto the player; the first is unclaimed
        state.checkpoints[1].pos = Vec2::new(90.0, 290.0);

        let mut frame = Frame::new();
        let events = tick(&mut state, &mut frame);
        assert!(events.is_empty());
        assert!(!state.checkpoints[1].claimed);

        // Once the first is claimed the same position claims immediately
        state.checkpoints[0].claim();
        let events = tick(&mut state, &mut frame);
        assert_eq!(
            events,
            vec![GameEvent::CheckpointReached {
                message: CHECKPOINT_MESSAGE,
                is_final: false,
            }]
        );
        assert!(state.checkpoints[1].claimed);
        assert_eq!(state.phase, GamePhase::Active);
    }

    #[test]
    fn test_final_checkpoint_finishes_session_once() {
        let mut state = quiet_state();
        state.checkpoints[0].claim();
        state.checkpoints[1].claim();
        state.checkpoints[2].pos = Vec2::new(90.0, 290.0);

        let mut frame = Frame::new();
        let events = tick(&mut state, &mut frame);
        assert_eq!(
            events,
            vec![GameEvent::CheckpointReached {
                message: FINAL_CHECKPOINT_MESSAGE,
                is_final: true,
            }]
        );
        assert_eq!(state.phase, GamePhase::Finished);
        assert_eq!(state.player.vel, Vec2::ZERO);

        // The notification never repeats and keys stay dead
        let events = tick(&mut state, &mut frame);
        assert!(events.is_empty());
        key_changed(&mut state, GameKey::MoveLeft, true);
        key_changed(&mut state, GameKey::Jump, true);
        assert_eq!(state.player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_finished_session_never_scrolls() {
        let viewport = Viewport::new(800.0, 62.0);
        let mut state = GameState::new(viewport);
        state.phase = GamePhase::Finished;
        // Pinned at the threshold with the key still recorded as held
        state.player.pos = Vec2::new(50.0, 30.0);
        state.player.vel = Vec2::ZERO;
        state.keys.right = true;

        let mut frame = Frame::new();
        tick(&mut state, &mut frame);

        assert_eq!(state.player.vel.x, 0.0);
        assert_eq!(state.platforms[0].pos.x, 500.0);
    }

    #[test]
    fn test_ticks_are_deterministic() {
        let mut a = GameState::new(VIEWPORT);
        let mut b = GameState::new(VIEWPORT);
        let mut frame = Frame::new();

        for state in [&mut a, &mut b] {
            key_changed(state, GameKey::MoveRight, true);
            for _ in 0..120 {
                tick(state, &mut frame);
            }
            key_changed(state, GameKey::Jump, true);
            for _ in 0..60 {
                tick(state, &mut frame);
            }
        }

        assert_eq!(a.player, b.player);
        assert_eq!(a.platforms, b.platforms);
        assert_eq!(a.time_ticks, b.time_ticks);
    }
}
