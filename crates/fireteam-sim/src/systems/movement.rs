//! Squad anchor movement.
//!
//! Picks the anchor for the current order, applies the catch-up sprint and
//! integrates position without overshoot.

use glam::Vec3;

use fireteam_ai::movement::{follow_anchor, step_toward};
use fireteam_ai::profiles::{get_profile, move_speed, AnchorRule};
use fireteam_core::config::Tuning;
use fireteam_core::constants::SQUAD_ARRIVE_DISTANCE;
use fireteam_core::types::yaw_toward;

use crate::squad::Squad;

/// Where the squad is heading this tick.
pub fn anchor_target(squad: &Squad, player: Vec3, tuning: &Tuning) -> Vec3 {
    match get_profile(squad.order, tuning).anchor {
        AnchorRule::FollowPlayer => follow_anchor(player, squad.index, tuning.follow_distance),
        AnchorRule::Waypoint => squad.waypoint.unwrap_or(squad.hold_point),
    }
}

/// Run squad movement for one tick. Wiped squads stay put.
pub fn run(squad: &mut Squad, player: Vec3, dt: f32, tuning: &Tuning) {
    if squad.is_wiped {
        return;
    }
    let profile = get_profile(squad.order, tuning);
    let target = anchor_target(squad, player, tuning);
    let speed = move_speed(&profile, squad.position.distance(player), tuning);
    squad.move_speed = speed;

    let step = step_toward(squad.position, target, speed, dt, SQUAD_ARRIVE_DISTANCE);
    squad.position = step.position;
    if let Some(heading) = step.direction.and_then(|dir| yaw_toward(Vec3::ZERO, dir)) {
        squad.heading = heading;
    }
}
