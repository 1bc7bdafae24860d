//! Marine behavior finite state machine.
//!
//! Evaluated once per marine per tick after the target and cover queries.
//! No squad state is touched here; the caller applies the result.

use glam::Vec3;

use fireteam_core::constants::*;
use fireteam_core::enums::MarineState;
use fireteam_core::types::wrap_angle;

/// Input to the marine FSM for a single marine.
#[derive(Debug, Clone, Copy)]
pub struct MarineContext {
    pub state: MarineState,
    pub health: f32,
    pub max_health: f32,
    /// Squad morale.
    pub morale: f32,
    /// A target was selected this tick.
    pub has_target: bool,
    /// A last known target area exists (current or remembered).
    pub has_target_area: bool,
    /// Nearest cover within the seek radius, looked up when badly hurt.
    pub cover: Option<Vec3>,
    /// Marine stands on its formation slot.
    pub at_slot: bool,
}

/// Output from the marine FSM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarineUpdate {
    pub new_state: MarineState,
    pub state_changed: bool,
    /// The marine went down this tick.
    pub downed: bool,
}

/// Evaluate the FSM for one marine.
pub fn evaluate(ctx: &MarineContext) -> MarineUpdate {
    // Only the revive controller moves a marine out of these.
    if ctx.state.is_incapacitated() {
        return no_change(ctx.state);
    }

    if ctx.health <= 0.0 {
        return MarineUpdate {
            new_state: MarineState::Downed,
            state_changed: true,
            downed: true,
        };
    }

    let ratio = if ctx.max_health > 0.0 {
        ctx.health / ctx.max_health
    } else {
        0.0
    };

    let new_state = if ratio < COVER_HEALTH_FRACTION && ctx.cover.is_some() {
        MarineState::TakingCover
    } else if ctx.morale > SUPPRESS_MORALE
        && ratio > SUPPRESS_HEALTH_FRACTION
        && ctx.has_target_area
    {
        MarineState::Suppressing
    } else if ctx.has_target {
        MarineState::Combat
    } else if ctx.at_slot {
        MarineState::Idle
    } else {
        MarineState::Moving
    };

    MarineUpdate {
        new_state,
        state_changed: new_state != ctx.state,
        downed: false,
    }
}

fn no_change(state: MarineState) -> MarineUpdate {
    MarineUpdate {
        new_state: state,
        state_changed: false,
        downed: false,
    }
}

/// Firing gate: only combat marines with a target and a spent cooldown fire.
pub fn can_fire(state: MarineState, fire_cooldown: f32, has_target: bool) -> bool {
    state == MarineState::Combat && fire_cooldown <= 0.0 && has_target
}

/// Turn `current` yaw toward `desired`, closing `min(1, dt * rot_speed)` of
/// the remaining angle along the short way round.
pub fn turn_toward(current: f32, desired: f32, dt: f32, rot_speed: f32) -> f32 {
    let diff = wrap_angle(desired - current);
    let fraction = (dt * rot_speed).clamp(0.0, 1.0);
    wrap_angle(current + diff * fraction)
}
