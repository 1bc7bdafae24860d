//! Fundamental geometric and simulation types.
//!
//! Positions are `glam::Vec3` in meters: x = right, y = up, z = back.
//! Squads advance toward -z, so "behind the player" is +z.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ThreatLevel;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of updates run so far.
    pub tick: u64,
    /// Accumulated simulated seconds (sum of every delta passed to update).
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one update of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Read-only view of a hostile, supplied by the enemy system every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vec3,
    pub threat_level: ThreatLevel,
    pub health: f32,
}

impl Enemy {
    pub fn new(position: Vec3, threat_level: ThreatLevel, health: f32) -> Self {
        Self {
            position,
            threat_level,
            health,
        }
    }
}

/// Yaw (radians) that faces from `from` toward `to` on the ground plane.
/// 0 faces +z. Returns `None` when the points coincide horizontally.
pub fn yaw_toward(from: Vec3, to: Vec3) -> Option<f32> {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    if dx * dx + dz * dz < 1e-8 {
        return None;
    }
    Some(dx.atan2(dz))
}

/// Wrap an angle into `[-PI, PI)`.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}
