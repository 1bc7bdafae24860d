//! Snapshot system: builds a complete SquadSnapshot from squad state.
//!
//! This system is read-only.

use fireteam_core::state::{MarineView, SquadSnapshot, SquadView};
use fireteam_core::types::SimTime;

use crate::marine::Marine;
use crate::squad::Squad;

/// Build the snapshot handed to renderers, HUD and audio.
pub fn build_snapshot(squads: &[Squad], time: &SimTime) -> SquadSnapshot {
    let squads: Vec<SquadView> = squads.iter().map(build_squad).collect();
    let total_active = squads.iter().map(|s| s.active_count).sum();
    SquadSnapshot {
        time: *time,
        squads,
        total_active,
    }
}

fn build_squad(squad: &Squad) -> SquadView {
    SquadView {
        id: squad.id.clone(),
        callsign: squad.callsign.clone(),
        position: squad.position,
        heading: squad.heading,
        formation: squad.formation,
        order: squad.order,
        morale: squad.morale,
        active_count: squad.active_count,
        is_wiped: squad.is_wiped,
        marines: squad.marines.iter().map(build_marine).collect(),
    }
}

fn build_marine(marine: &Marine) -> MarineView {
    MarineView {
        id: marine.id.clone(),
        name: marine.name.clone(),
        position: marine.position,
        yaw: marine.yaw,
        state: marine.state,
        health: marine.health,
        max_health: marine.max_health,
        is_active: marine.is_active,
        revive_progress: marine.revive_progress,
        target: marine.target_enemy_pos,
    }
}
