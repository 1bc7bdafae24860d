//! Squad state snapshot: the visible state handed to presentation layers after an update.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::SimTime;

/// Complete squad state for renderers, HUD and audio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SquadSnapshot {
    pub time: SimTime,
    pub squads: Vec<SquadView>,
    pub total_active: usize,
}

/// One squad as shown to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadView {
    pub id: String,
    pub callsign: String,
    pub position: Vec3,
    /// Heading (radians, 0 = +z).
    pub heading: f32,
    pub formation: FormationKind,
    pub order: OrderKind,
    pub morale: f32,
    pub active_count: usize,
    pub is_wiped: bool,
    pub marines: Vec<MarineView>,
}

/// One marine as shown to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarineView {
    pub id: String,
    pub name: String,
    pub position: Vec3,
    /// Facing (radians, 0 = +z).
    pub yaw: f32,
    pub state: MarineState,
    pub health: f32,
    pub max_health: f32,
    pub is_active: bool,
    pub revive_progress: f32,
    pub target: Option<Vec3>,
}
