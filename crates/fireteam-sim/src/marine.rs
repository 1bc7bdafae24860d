//! Marine data model.
//!
//! A marine is created with its squad and lives until the squad is disposed.
//! It only holds semantic state; meshes and animation belong to the renderer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use fireteam_core::enums::MarineState;

/// An AI-controlled ally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marine {
    pub id: String,
    pub squad_id: String,
    pub name: String,
    /// Formation slot, fixed for the marine's lifetime.
    pub slot: usize,
    pub health: f32,
    pub max_health: f32,
    pub is_active: bool,
    pub state: MarineState,
    pub position: Vec3,
    /// Facing (radians, 0 = +z).
    pub yaw: f32,
    /// Current or last known target area.
    pub target_enemy_pos: Option<Vec3>,
    pub fire_cooldown: f32,
    pub revive_progress: f32,
    /// Simulated time of this marine's last callout.
    pub last_callout_time: f32,
}

impl Marine {
    pub fn new(
        id: String,
        squad_id: String,
        name: String,
        slot: usize,
        position: Vec3,
        max_health: f32,
        callout_cooldown: f32,
    ) -> Self {
        Self {
            id,
            squad_id,
            name,
            slot,
            health: max_health,
            max_health,
            is_active: true,
            state: MarineState::Idle,
            position,
            yaw: 0.0,
            target_enemy_pos: None,
            fire_cooldown: 0.0,
            revive_progress: 0.0,
            // Lets a fresh marine speak straight away.
            last_callout_time: -callout_cooldown,
        }
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    /// Subtract health, clamped at zero. Inactive marines ignore damage.
    /// Returns whether the damage landed.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.is_active {
            return false;
        }
        self.health = (self.health - amount.max(0.0)).clamp(0.0, self.max_health);
        true
    }

    /// Switch to downed and drop everything combat related.
    pub(crate) fn go_down(&mut self) {
        self.health = 0.0;
        self.is_active = false;
        self.state = MarineState::Downed;
        self.target_enemy_pos = None;
        self.fire_cooldown = 0.0;
        self.revive_progress = 0.0;
    }

    /// Bring a marine back into the fight.
    pub(crate) fn revive(&mut self, health: f32) {
        self.is_active = true;
        self.state = MarineState::Idle;
        self.health = health.clamp(0.0, self.max_health);
        self.revive_progress = 0.0;
    }

    /// Eligible for the firing-marines query.
    pub fn can_fire(&self) -> bool {
        self.is_active
            && fireteam_ai::fsm::can_fire(
                self.state,
                self.fire_cooldown,
                self.target_enemy_pos.is_some(),
            )
    }
}
