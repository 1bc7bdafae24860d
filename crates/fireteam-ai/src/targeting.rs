//! Target selection and hit chance.
//!
//! score = (100 - distance) + threat bonus + low-health bonus, highest wins,
//! first encountered wins ties.

use glam::Vec3;

use fireteam_core::constants::*;
use fireteam_core::enums::ThreatLevel;
use fireteam_core::types::Enemy;

/// Result of target selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPick {
    /// Index into the enemy slice that was searched.
    pub index: usize,
    pub position: Vec3,
    pub distance: f32,
    pub score: f32,
}

/// Score bonus for an enemy's threat classification.
pub fn threat_bonus(level: ThreatLevel) -> f32 {
    match level {
        ThreatLevel::High => THREAT_BONUS_HIGH,
        ThreatLevel::Medium => THREAT_BONUS_MEDIUM,
        ThreatLevel::Low => 0.0,
    }
}

/// Score of one enemy at a given distance.
pub fn target_score(enemy: &Enemy, distance: f32) -> f32 {
    let low_health_bonus = if enemy.health < LOW_HEALTH_ENEMY_THRESHOLD {
        LOW_HEALTH_BONUS
    } else {
        0.0
    };
    (TARGET_SCORE_BASE - distance) + threat_bonus(enemy.threat_level) + low_health_bonus
}

/// Pick the best enemy within `attack_range` of `from`, or `None`.
pub fn select_target(from: Vec3, attack_range: f32, enemies: &[Enemy]) -> Option<TargetPick> {
    let mut best: Option<TargetPick> = None;
    for (index, enemy) in enemies.iter().enumerate() {
        let distance = from.distance(enemy.position);
        // NaN positions would otherwise win the slot and block every later pick.
        if distance.is_nan() || distance > attack_range {
            continue;
        }
        let score = target_score(enemy, distance);
        if best.map_or(true, |b| score > b.score) {
            best = Some(TargetPick {
                index,
                position: enemy.position,
                distance,
                score,
            });
        }
    }
    best
}

/// Enemies close enough to matter for state decisions (within 1.5x attack range).
pub fn nearby_enemies(from: Vec3, attack_range: f32, enemies: &[Enemy]) -> Vec<Enemy> {
    let limit = attack_range * NEARBY_ENEMY_RANGE_FACTOR;
    enemies
        .iter()
        .filter(|e| from.distance(e.position) <= limit)
        .copied()
        .collect()
}

/// Nearest enemy and its distance.
pub fn nearest_enemy(from: Vec3, enemies: &[Enemy]) -> Option<(Enemy, f32)> {
    let mut best: Option<(Enemy, f32)> = None;
    for enemy in enemies {
        let distance = from.distance(enemy.position);
        if distance.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((*enemy, distance));
        }
    }
    best
}

/// Probability that a shot at `distance` hits, given squad morale.
///
/// hitChance = (1 - (distance / range) * 0.3) * (0.7 + morale * 0.2)
pub fn hit_chance(distance: f32, attack_range: f32, morale: f32) -> f32 {
    let range_factor = 1.0 - (distance / attack_range) * HIT_CHANCE_RANGE_PENALTY;
    let morale_factor = HIT_CHANCE_MORALE_BASE + morale.clamp(0.0, 1.0) * HIT_CHANCE_MORALE_FACTOR;
    (range_factor * morale_factor).clamp(0.0, 1.0)
}
