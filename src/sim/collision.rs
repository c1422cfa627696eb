//! Platform contact and checkpoint reach predicates
//!
//! Platform support is resolved as a single contact classification per platform
//! per tick. Resting wins over landing for the same platform; the landing snap
//! re-primes gravity and relies on a resting contact on a later tick to hold
//! the player, so the two states cooperate across frames rather than acting as
//! independent physics.

use super::state::{Checkpoint, Platform, Player};

/// Contact classification between the player and one platform for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformContact {
    /// No interaction this tick
    Airborne,
    /// On or about to land on the platform top: vertical velocity is zeroed
    Resting,
    /// Overlapping the platform body: snap to rest height and resume falling
    Landing,
}

/// Horizontal overlap with asymmetric margins: half a player width of slack on
/// the left edge, a third on the right
fn overlaps_horizontally(player: &Player, platform: &Platform) -> bool {
    player.pos.x >= platform.pos.x - player.width / 2.0
        && player.pos.x <= platform.pos.x + platform.width - player.width / 3.0
}

/// Classify the player's contact with one platform
pub fn platform_contact(player: &Player, platform: &Platform) -> PlatformContact {
    if !overlaps_horizontally(player, platform) {
        return PlatformContact::Airborne;
    }

    let bottom = player.bottom();
    if bottom <= platform.top() && bottom + player.vel.y >= platform.top() {
        return PlatformContact::Resting;
    }

    if bottom >= platform.top() && player.pos.y <= platform.bottom() {
        return PlatformContact::Landing;
    }

    PlatformContact::Airborne
}

/// Whether the player currently satisfies every positional condition to claim
/// this checkpoint. Claimed checkpoints have zero size and an off-world
/// position, so this can never hold for them again. Sequence order and the
/// session phase are enforced by the tick, not here.
pub fn checkpoint_reached(player: &Player, checkpoint: &Checkpoint) -> bool {
    player.pos.x >= checkpoint.pos.x
        && player.pos.y >= checkpoint.pos.y
        && player.pos.y + player.height <= checkpoint.pos.y + checkpoint.height
        && player.pos.x - player.width
            <= checkpoint.pos.x - checkpoint.width + player.width * 0.9
}
