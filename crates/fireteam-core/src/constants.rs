//! Squad AI constants and tuning parameters.
//!
//! Values that designers tune per mission are mirrored in [`crate::config::Tuning`];
//! the rest are fixed rules of the behavior model.

// --- Squad composition ---

/// Marines per squad.
pub const SQUAD_SIZE: usize = 4;

/// Callsigns handed out in squad creation order.
pub const CALLSIGNS: [&str; 4] = ["ALPHA", "BRAVO", "CHARLIE", "DELTA"];

/// Marine name pool. Names are drawn without repeats until the pool runs dry.
pub const MARINE_NAMES: [&str; 16] = [
    "Hicks", "Vasquez", "Hudson", "Drake", "Apone", "Frost", "Dietrich", "Crowe",
    "Wierzbowski", "Spunkmeyer", "Ferro", "Gorman", "Ramirez", "Okafor", "Lindqvist", "Tanaka",
];

/// Marine maximum health.
pub const MARINE_MAX_HEALTH: f32 = 100.0;

// --- Targeting ---

/// Maximum distance at which a marine selects a target (m).
pub const ATTACK_RANGE: f32 = 50.0;

/// Enemies beyond `ATTACK_RANGE * NEARBY_ENEMY_RANGE_FACTOR` are ignored for state decisions.
pub const NEARBY_ENEMY_RANGE_FACTOR: f32 = 1.5;

/// Base of the target score; distance is subtracted from it.
pub const TARGET_SCORE_BASE: f32 = 100.0;

/// Score bonus for a high-threat enemy.
pub const THREAT_BONUS_HIGH: f32 = 40.0;

/// Score bonus for a medium-threat enemy.
pub const THREAT_BONUS_MEDIUM: f32 = 20.0;

/// Score bonus for a nearly dead enemy.
pub const LOW_HEALTH_BONUS: f32 = 25.0;

/// Enemies below this health earn the low-health bonus.
pub const LOW_HEALTH_ENEMY_THRESHOLD: f32 = 30.0;

/// Hit chance lost at maximum range (fraction).
pub const HIT_CHANCE_RANGE_PENALTY: f32 = 0.3;

/// Hit chance multiplier at zero morale.
pub const HIT_CHANCE_MORALE_BASE: f32 = 0.7;

/// Extra hit chance multiplier gained at full morale.
pub const HIT_CHANCE_MORALE_FACTOR: f32 = 0.2;

/// Seconds between shots once a marine fires.
pub const FIRE_INTERVAL: f32 = 0.25;

// --- Cover ---

/// Radius searched for cover positions (m).
pub const COVER_SEEK_RADIUS: f32 = 15.0;

// --- Morale ---

/// Morale ceiling.
pub const MORALE_MAX: f32 = 1.0;

/// Morale lost each time a marine goes down.
pub const MORALE_LOSS_PER_DOWN: f32 = 0.2;

/// Morale regained per second while any marine is active.
pub const MORALE_RECOVERY_RATE: f32 = 0.02;

// --- Marine state machine ---

/// Health fraction below which a marine seeks cover.
pub const COVER_HEALTH_FRACTION: f32 = 0.3;

/// Squad morale above which a healthy marine suppresses.
pub const SUPPRESS_MORALE: f32 = 0.7;

/// Health fraction above which a confident marine suppresses.
pub const SUPPRESS_HEALTH_FRACTION: f32 = 0.7;

/// Facing turn rate: fraction of remaining yaw closed per second.
pub const ROTATION_SPEED: f32 = 6.0;

// --- Revive ---

/// Seconds of uninterrupted reviving needed to bring a marine back.
pub const REVIVE_TIME: f32 = 3.0;

/// Maximum player distance for starting or continuing a revive (m).
pub const REVIVE_PROXIMITY: f32 = 4.0;

/// Fraction of max health restored on revive.
pub const REVIVE_HEALTH_FRACTION: f32 = 0.5;

// --- Callouts ---

/// Minimum seconds between two callouts from the same marine.
pub const CALLOUT_COOLDOWN: f32 = 8.0;

/// Minimum seconds between two priority-chain callouts from the same squad.
pub const SQUAD_CALLOUT_SPACING: f32 = 3.0;

/// Nearby enemy count above which a squad may be overwhelmed.
pub const OVERWHELMED_ENEMY_COUNT: usize = 8;

/// Morale below which a squad may be overwhelmed.
pub const OVERWHELMED_MORALE: f32 = 0.5;

/// Player distance to an overwhelmed squad that counts as a rescue (m).
pub const RESCUE_RADIUS: f32 = 15.0;

/// Recent damage that triggers a taking-fire callout (hp).
pub const TAKING_FIRE_THRESHOLD: f32 = 40.0;

/// Decay of the recent damage meter (hp per second).
pub const TAKING_FIRE_DECAY: f32 = 10.0;

// --- Movement ---

/// Distance kept behind the player under follow orders (m).
pub const FOLLOW_DISTANCE: f32 = 8.0;

/// Extra distance behind the player per squad index (m).
pub const FOLLOW_STAGGER: f32 = 3.0;

/// Normal squad move speed (m/s).
pub const NORMAL_SPEED: f32 = 6.0;

/// Sprint speed used when advancing or catching up (m/s).
pub const SPRINT_SPEED: f32 = 9.0;

/// Speed multiplier while holding position.
pub const HOLD_SPEED_FACTOR: f32 = 0.5;

/// Beyond this distance from the player a squad sprints regardless of order (m).
pub const CATCH_UP_DISTANCE: f32 = 25.0;

/// Squad anchor snaps to its target within this distance (m).
pub const SQUAD_ARRIVE_DISTANCE: f32 = 1.0;

/// Marine snaps to its formation slot within this distance (m).
pub const MARINE_ARRIVE_DISTANCE: f32 = 0.5;

/// Distance behind the current position used as a retreat point without waypoint (m).
pub const RETREAT_DISTANCE: f32 = 20.0;
