//! Revive progression for marines the player is working on.

use glam::Vec3;

use fireteam_ai::revive::{self, ReviveStep};
use fireteam_core::enums::{CalloutCategory, MarineState, NotificationLevel};
use fireteam_core::events::SquadEvent;

use crate::squad::Squad;
use crate::systems::{callouts, TickContext};

/// Advance every reviving marine. Walking away from a marine cancels its revive.
pub fn run(squad: &mut Squad, player: Vec3, dt: f32, ctx: &mut TickContext) {
    for index in 0..squad.marines.len() {
        let marine = &mut squad.marines[index];
        if marine.state != MarineState::Reviving {
            continue;
        }
        if !revive::in_reach(player, marine.position, ctx.tuning.revive_proximity) {
            log::debug!("revive of {} interrupted, player out of reach", marine.id);
            marine.state = MarineState::Downed;
            marine.revive_progress = 0.0;
            continue;
        }
        match revive::advance(marine.revive_progress, dt, ctx.tuning.revive_time) {
            ReviveStep::InProgress { progress } => marine.revive_progress = progress,
            ReviveStep::Completed => complete(squad, index, ctx),
        }
    }
}

/// Finish a revive: marine back at half health, squad counts updated.
pub fn complete(squad: &mut Squad, index: usize, ctx: &mut TickContext) {
    let Some(marine) = squad.marines.get_mut(index) else {
        return;
    };
    marine.revive(revive::revived_health(marine.max_health));
    let marine_id = marine.id.clone();
    let name = marine.name.clone();
    squad.refresh_counts();

    log::info!(
        "{} revived ({} active in {})",
        marine_id,
        squad.active_count,
        squad.callsign
    );
    ctx.events.push(SquadEvent::MarineRevived { marine_id });
    ctx.notify(
        NotificationLevel::Info,
        format!("Pvt. {name} is back on their feet"),
    );
    callouts::marine_callout(squad, index, CalloutCategory::ReviveThanks, ctx);
}
