//! Marine combat pass: targeting, cover, state machine, slot movement and facing.

use glam::Vec3;

use fireteam_ai::cover::find_cover;
use fireteam_ai::fsm::{evaluate, turn_toward, MarineContext};
use fireteam_ai::movement::step_toward;
use fireteam_ai::targeting::{nearby_enemies, select_target};
use fireteam_core::constants::{COVER_HEALTH_FRACTION, MARINE_ARRIVE_DISTANCE};
use fireteam_core::types::{yaw_toward, Enemy};

use crate::squad::Squad;
use crate::systems::{casualty, TickContext};

/// Run the combat pass for every active marine of a squad.
pub fn run(
    squad: &mut Squad,
    enemies: &[Enemy],
    cover_points: &[Vec3],
    dt: f32,
    ctx: &mut TickContext,
) {
    let tuning = ctx.tuning;
    let speed = squad.move_speed;

    for index in 0..squad.marines.len() {
        if !squad.marines[index].is_active {
            continue;
        }
        let morale = squad.morale;
        let slot = squad.slot_position(squad.marines[index].slot);
        let marine = &mut squad.marines[index];

        marine.fire_cooldown = (marine.fire_cooldown - dt).max(0.0);

        let nearby = nearby_enemies(marine.position, tuning.attack_range, enemies);
        let target = select_target(marine.position, tuning.attack_range, &nearby);
        match target {
            Some(pick) => marine.target_enemy_pos = Some(pick.position),
            None if nearby.is_empty() => marine.target_enemy_pos = None,
            None => {}
        }

        let cover = if marine.health > 0.0 && marine.health_fraction() < COVER_HEALTH_FRACTION {
            find_cover(marine.position, cover_points, tuning.cover_seek_radius)
        } else {
            None
        };
        let step = step_toward(
            marine.position,
            cover.unwrap_or(slot),
            speed,
            dt,
            MARINE_ARRIVE_DISTANCE,
        );

        let update = evaluate(&MarineContext {
            state: marine.state,
            health: marine.health,
            max_health: marine.max_health,
            morale,
            has_target: target.is_some(),
            has_target_area: marine.target_enemy_pos.is_some(),
            cover,
            at_slot: step.arrived,
        });

        if update.downed {
            casualty::down_marine(squad, index, ctx);
            continue;
        }

        marine.position = step.position;
        if update.state_changed {
            log::debug!("{}: {:?} -> {:?}", marine.id, marine.state, update.new_state);
            marine.state = update.new_state;
        }

        let desired = marine
            .target_enemy_pos
            .and_then(|t| yaw_toward(marine.position, t))
            .or_else(|| step.direction.and_then(|dir| yaw_toward(Vec3::ZERO, dir)));
        if let Some(desired) = desired {
            marine.yaw = turn_toward(marine.yaw, desired, dt, tuning.rotation_speed);
        }
    }
}
