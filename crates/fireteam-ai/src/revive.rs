//! Revive controller: downed -> reviving -> idle, with reviving -> downed as
//! the cancel path. Progress is accumulated simulated time.

use glam::Vec3;

use fireteam_core::constants::REVIVE_HEALTH_FRACTION;
use fireteam_core::enums::MarineState;

/// Outcome of advancing a revive by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReviveStep {
    /// Still reviving, with the new accumulated progress.
    InProgress { progress: f32 },
    /// Threshold crossed this tick.
    Completed,
}

/// State after the player starts a revive. Beginning on a marine that is
/// already being revived is a no-op; any other state is not revivable.
pub fn begin(state: MarineState) -> Option<MarineState> {
    match state {
        MarineState::Downed | MarineState::Reviving => Some(MarineState::Reviving),
        _ => None,
    }
}

/// State after the player lets go. Only a reviving marine can be cancelled.
pub fn cancel(state: MarineState) -> Option<MarineState> {
    match state {
        MarineState::Reviving => Some(MarineState::Downed),
        _ => None,
    }
}

/// Accumulate `dt` seconds of reviving.
pub fn advance(progress: f32, dt: f32, revive_time: f32) -> ReviveStep {
    let progress = progress + dt.max(0.0);
    if progress >= revive_time {
        ReviveStep::Completed
    } else {
        ReviveStep::InProgress { progress }
    }
}

/// Whether the player stands close enough to the marine.
pub fn in_reach(player: Vec3, marine: Vec3, proximity: f32) -> bool {
    player.distance(marine) <= proximity
}

/// Downed or reviving marines within reach of the player can be revived.
pub fn is_revivable(state: MarineState, player: Vec3, marine: Vec3, proximity: f32) -> bool {
    state.is_incapacitated() && in_reach(player, marine, proximity)
}

/// Health a marine comes back with.
pub fn revived_health(max_health: f32) -> f32 {
    max_health * REVIVE_HEALTH_FRACTION
}
