//! Anchor computation and clamped movement integration.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use fireteam_core::constants::{FOLLOW_STAGGER, RETREAT_DISTANCE};

/// Follow-order anchor for a squad. Squads fan out sideways and stagger
/// further back with their index instead of stacking on one point.
pub fn follow_anchor(player: Vec3, squad_index: usize, follow_distance: f32) -> Vec3 {
    let index = squad_index as f32;
    let side = (index * FRAC_PI_2).sin() * follow_distance;
    let behind = follow_distance + index * FOLLOW_STAGGER;
    player + Vec3::new(side, 0.0, behind)
}

/// Fallback point for a retreat ordered without a waypoint.
pub fn retreat_point(position: Vec3) -> Vec3 {
    position + Vec3::new(0.0, 0.0, RETREAT_DISTANCE)
}

/// Result of one movement step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub position: Vec3,
    /// Within the arrive distance; position snapped onto the target.
    pub arrived: bool,
    /// Unit direction travelled, if any.
    pub direction: Option<Vec3>,
}

/// Move toward `target` by at most `speed * dt` without overshooting;
/// snap onto it within `arrive_distance`.
pub fn step_toward(current: Vec3, target: Vec3, speed: f32, dt: f32, arrive_distance: f32) -> Step {
    let delta = target - current;
    let distance = delta.length();
    if distance <= arrive_distance {
        return Step {
            position: target,
            arrived: true,
            direction: None,
        };
    }
    let direction = delta / distance;
    let travel = distance.min(speed * dt.max(0.0));
    Step {
        position: current + direction * travel,
        arrived: false,
        direction: Some(direction),
    }
}
