//! Order-specific movement profiles.

use fireteam_core::config::Tuning;
use fireteam_core::constants::HOLD_SPEED_FACTOR;
use fireteam_core::enums::OrderKind;

/// Where a squad's anchor comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorRule {
    /// Trail the player at the squad's follow offset.
    FollowPlayer,
    /// Head for the waypoint, or the point fixed when the order was issued.
    Waypoint,
}

/// Movement profile for an order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderProfile {
    pub anchor: AnchorRule,
    /// Move speed (m/s) before the catch-up override.
    pub speed: f32,
}

/// Get the movement profile for a given order.
pub fn get_profile(order: OrderKind, tuning: &Tuning) -> OrderProfile {
    match order {
        OrderKind::FollowPlayer => OrderProfile {
            anchor: AnchorRule::FollowPlayer,
            speed: tuning.normal_speed,
        },
        OrderKind::HoldPosition => OrderProfile {
            anchor: AnchorRule::Waypoint,
            speed: tuning.normal_speed * HOLD_SPEED_FACTOR,
        },
        OrderKind::Advance => OrderProfile {
            anchor: AnchorRule::Waypoint,
            speed: tuning.sprint_speed,
        },
        OrderKind::Retreat => OrderProfile {
            anchor: AnchorRule::Waypoint,
            speed: tuning.normal_speed,
        },
    }
}

/// Effective speed: any squad too far from the player sprints.
pub fn move_speed(profile: &OrderProfile, distance_to_player: f32, tuning: &Tuning) -> f32 {
    if distance_to_player > tuning.catch_up_distance {
        tuning.sprint_speed
    } else {
        profile.speed
    }
}
