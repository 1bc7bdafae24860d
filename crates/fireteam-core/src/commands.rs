//! Commands sent by the game layer to the squad manager.
//!
//! Queued commands are applied at the next update boundary, in order.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All externally triggered squad actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SquadCommand {
    // --- Orders ---
    /// Change a squad's formation.
    SetFormation {
        squad_index: usize,
        formation: FormationKind,
    },
    /// Give one squad an order, optionally with a waypoint.
    IssueOrder {
        squad_index: usize,
        order: OrderKind,
        waypoint: Option<Vec3>,
    },
    /// Give every squad the same order, keeping their waypoints.
    IssueGlobalOrder { order: OrderKind },

    // --- Player interaction ---
    /// Player starts reviving a downed marine.
    BeginRevive {
        marine_id: String,
        player_position: Vec3,
    },
    /// Player lets go of the revive.
    CancelRevive { marine_id: String },

    // --- Combat feed ---
    /// Damage resolved by the enemy system.
    ApplyDamage { marine_id: String, amount: f32 },
}
