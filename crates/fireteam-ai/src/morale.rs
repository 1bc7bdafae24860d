//! Squad morale: a scalar in [0, 1] that drops when marines go down and
//! recovers over time while anyone is still standing.

use fireteam_core::constants::MORALE_MAX;

/// Morale after a marine transitions to downed.
pub fn after_marine_downed(morale: f32, loss: f32) -> f32 {
    (morale - loss).clamp(0.0, MORALE_MAX)
}

/// Time-based recovery. No recovery while the squad is wiped.
pub fn recover(morale: f32, rate: f32, dt: f32, active_count: usize) -> f32 {
    if active_count == 0 {
        return morale.clamp(0.0, MORALE_MAX);
    }
    (morale + rate * dt).clamp(0.0, MORALE_MAX)
}
