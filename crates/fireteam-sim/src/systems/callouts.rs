//! Callout dispatcher.
//!
//! Each tick a squad may send one hostile-sighting line chosen by the priority
//! chain, plus event lines for sustained fire and rescue. Marine-attributed
//! lines respect the per-marine cooldown.

use glam::Vec3;

use fireteam_ai::callouts::{compose, cooldown_ready, priority_category, Speaker};
use fireteam_ai::targeting::{nearby_enemies, nearest_enemy};
use fireteam_core::constants::{
    OVERWHELMED_ENEMY_COUNT, RESCUE_RADIUS, TAKING_FIRE_DECAY, TAKING_FIRE_THRESHOLD,
};
use fireteam_core::enums::{CalloutCategory, NotificationLevel};
use fireteam_core::types::Enemy;

use crate::squad::Squad;
use crate::systems::TickContext;

/// Run the dispatcher for one squad.
pub fn run(squad: &mut Squad, enemies: &[Enemy], player: Vec3, dt: f32, ctx: &mut TickContext) {
    squad.recent_damage = (squad.recent_damage - TAKING_FIRE_DECAY * dt).max(0.0);
    if squad.is_wiped {
        return;
    }

    if squad.recent_damage >= TAKING_FIRE_THRESHOLD {
        let speaker = squad
            .last_damaged
            .filter(|&i| ready_speaker(squad, i, ctx.now, ctx.tuning.callout_cooldown))
            .or_else(|| first_ready_speaker(squad, ctx.now, ctx.tuning.callout_cooldown));
        if let Some(index) = speaker {
            marine_callout(squad, index, CalloutCategory::TakingFire, ctx);
            squad.recent_damage = 0.0;
        }
    }

    let nearby = nearby_enemies(squad.position, ctx.tuning.attack_range, enemies);

    if squad.was_overwhelmed
        && !squad.was_rescued
        && (squad.position.distance(player) <= RESCUE_RADIUS
            || nearby.len() <= OVERWHELMED_ENEMY_COUNT / 2)
    {
        squad.was_rescued = true;
        squad.was_overwhelmed = false;
        log::info!("{} squad rescued", squad.callsign);
        let callout = compose(
            &mut *ctx.rng,
            CalloutCategory::Rescued,
            Speaker::Lead(&squad.callsign),
            None,
        );
        ctx.comms(callout);
        ctx.notify(
            NotificationLevel::Info,
            format!("{} squad relieved", squad.callsign),
        );
    }

    let Some((nearest, _)) = nearest_enemy(squad.position, &nearby) else {
        return;
    };
    if !cooldown_ready(
        ctx.now,
        squad.last_callout_time,
        ctx.tuning.squad_callout_spacing,
    ) {
        return;
    }
    let Some(index) = first_ready_speaker(squad, ctx.now, ctx.tuning.callout_cooldown) else {
        return;
    };

    let category = priority_category(nearby.len(), squad.morale, nearest.threat_level);
    if marine_callout(squad, index, category, ctx) {
        squad.last_callout_time = ctx.now;
        if category == CalloutCategory::Overwhelmed {
            squad.was_overwhelmed = true;
        }
    }
}

/// Send a line from marine `index` if its cooldown allows. Returns whether it went out.
pub fn marine_callout(
    squad: &mut Squad,
    index: usize,
    category: CalloutCategory,
    ctx: &mut TickContext,
) -> bool {
    if !ready_speaker(squad, index, ctx.now, ctx.tuning.callout_cooldown) {
        return false;
    }
    let marine = &mut squad.marines[index];
    let callout = compose(
        &mut *ctx.rng,
        category,
        Speaker::Marine(&marine.name),
        None,
    );
    marine.last_callout_time = ctx.now;
    ctx.comms(callout);
    true
}

fn ready_speaker(squad: &Squad, index: usize, now: f32, cooldown: f32) -> bool {
    squad
        .marines
        .get(index)
        .is_some_and(|m| m.is_active && cooldown_ready(now, m.last_callout_time, cooldown))
}

fn first_ready_speaker(squad: &Squad, now: f32, cooldown: f32) -> Option<usize> {
    (0..squad.marines.len()).find(|&i| ready_speaker(squad, i, now, cooldown))
}
