//! Mission tuning. Loaded from JSON; every missing field falls back to the
//! matching constant in [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::SquadError;

/// Designer-tunable numbers of the behavior model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub max_health: f32,
    pub attack_range: f32,
    pub fire_interval: f32,
    pub cover_seek_radius: f32,
    pub morale_loss_per_down: f32,
    pub morale_recovery_rate: f32,
    pub rotation_speed: f32,
    pub revive_time: f32,
    pub revive_proximity: f32,
    pub callout_cooldown: f32,
    pub squad_callout_spacing: f32,
    pub follow_distance: f32,
    pub normal_speed: f32,
    pub sprint_speed: f32,
    pub catch_up_distance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_health: MARINE_MAX_HEALTH,
            attack_range: ATTACK_RANGE,
            fire_interval: FIRE_INTERVAL,
            cover_seek_radius: COVER_SEEK_RADIUS,
            morale_loss_per_down: MORALE_LOSS_PER_DOWN,
            morale_recovery_rate: MORALE_RECOVERY_RATE,
            rotation_speed: ROTATION_SPEED,
            revive_time: REVIVE_TIME,
            revive_proximity: REVIVE_PROXIMITY,
            callout_cooldown: CALLOUT_COOLDOWN,
            squad_callout_spacing: SQUAD_CALLOUT_SPACING,
            follow_distance: FOLLOW_DISTANCE,
            normal_speed: NORMAL_SPEED,
            sprint_speed: SPRINT_SPEED,
            catch_up_distance: CATCH_UP_DISTANCE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SquadError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| SquadError::Config(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the behavior model cannot run with.
    pub fn validate(&self) -> Result<(), SquadError> {
        let positive = [
            ("max_health", self.max_health),
            ("attack_range", self.attack_range),
            ("revive_time", self.revive_time),
            ("normal_speed", self.normal_speed),
            ("sprint_speed", self.sprint_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(SquadError::Config(format!("{name} must be positive, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&self.morale_loss_per_down) {
            return Err(SquadError::Config(format!(
                "morale_loss_per_down must be within 0..=1, got {}",
                self.morale_loss_per_down
            )));
        }
        Ok(())
    }
}
