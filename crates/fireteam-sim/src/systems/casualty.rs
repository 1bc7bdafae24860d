//! Downing and wipe bookkeeping, shared by damage intake and the combat pass.

use fireteam_ai::callouts::{compose, Speaker};
use fireteam_ai::morale;
use fireteam_core::enums::{CalloutCategory, NotificationLevel};
use fireteam_core::events::SquadEvent;

use crate::squad::Squad;
use crate::systems::TickContext;

/// Take marine `index` out of the fight: morale hit, man-down call, wipe check.
pub fn down_marine(squad: &mut Squad, index: usize, ctx: &mut TickContext) {
    let Some(marine) = squad.marines.get_mut(index) else {
        return;
    };
    if marine.state.is_incapacitated() {
        return;
    }
    marine.go_down();
    let marine_id = marine.id.clone();
    let name = marine.name.clone();
    squad.took_casualty = true;

    squad.morale = morale::after_marine_downed(squad.morale, ctx.tuning.morale_loss_per_down);
    log::debug!(
        "{} down in {} (morale {:.2})",
        marine_id,
        squad.callsign,
        squad.morale
    );

    ctx.events.push(SquadEvent::MarineDowned {
        marine_id,
        squad_id: squad.id.clone(),
    });
    ctx.notify(
        NotificationLevel::Warning,
        format!("Pvt. {name} ({}) is down", squad.callsign),
    );
    let callout = compose(
        &mut *ctx.rng,
        CalloutCategory::ManDown,
        Speaker::Lead(&squad.callsign),
        Some(&name),
    );
    ctx.comms(callout);

    if squad.refresh_counts() {
        log::info!("{} squad wiped", squad.callsign);
        ctx.events.push(SquadEvent::SquadWiped {
            squad_id: squad.id.clone(),
        });
        ctx.notify(
            NotificationLevel::Critical,
            format!("{} squad is down!", squad.callsign),
        );
    }
}
