//! Squad data model: four marines sharing formation, order and morale.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use fireteam_ai::formation::slot_position;
use fireteam_ai::movement::retreat_point;
use fireteam_core::config::Tuning;
use fireteam_core::constants::MORALE_MAX;
use fireteam_core::enums::{FormationKind, OrderKind};

use crate::marine::Marine;

/// A squad and everything it exclusively owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub id: String,
    pub callsign: String,
    /// Creation index; drives the follow stagger.
    pub index: usize,
    pub formation: FormationKind,
    pub order: OrderKind,
    pub morale: f32,
    pub marines: Vec<Marine>,
    pub active_count: usize,
    pub is_wiped: bool,
    pub was_rescued: bool,
    /// An overwhelmed callout went out and no rescue has happened yet.
    pub was_overwhelmed: bool,
    pub waypoint: Option<Vec3>,
    /// Anchor used by waypoint orders when no waypoint was given.
    pub hold_point: Vec3,
    /// Current anchor position.
    pub position: Vec3,
    /// Heading (radians, 0 = +z), from the last movement direction.
    pub heading: f32,
    /// Speed chosen by the last movement update.
    pub move_speed: f32,
    /// Sustained damage meter for taking-fire callouts.
    pub recent_damage: f32,
    /// Slot of the marine hit last.
    pub last_damaged: Option<usize>,
    /// Simulated time of the squad's last priority-chain callout.
    pub last_callout_time: f32,
    /// A marine went down since the last morale recovery step.
    #[serde(skip)]
    pub took_casualty: bool,
}

impl Squad {
    /// Create a squad at `position` with marines standing on their slots.
    pub fn new(
        index: usize,
        callsign: String,
        position: Vec3,
        names: Vec<String>,
        tuning: &Tuning,
    ) -> Self {
        let id = format!("squad-{index}");
        let formation = FormationKind::default();
        let marines: Vec<Marine> = names
            .into_iter()
            .enumerate()
            .map(|(slot, name)| {
                Marine::new(
                    format!("{id}-{slot}"),
                    id.clone(),
                    name,
                    slot,
                    slot_position(position, 0.0, formation, slot),
                    tuning.max_health,
                    tuning.callout_cooldown,
                )
            })
            .collect();
        let active_count = marines.len();
        Self {
            id,
            callsign,
            index,
            formation,
            order: OrderKind::default(),
            morale: MORALE_MAX,
            marines,
            active_count,
            is_wiped: active_count == 0,
            was_rescued: false,
            was_overwhelmed: false,
            waypoint: None,
            hold_point: position,
            position,
            heading: 0.0,
            move_speed: tuning.normal_speed,
            recent_damage: 0.0,
            last_damaged: None,
            last_callout_time: -tuning.squad_callout_spacing,
            took_casualty: false,
        }
    }

    /// Recompute `active_count` and `is_wiped`. Returns true when the squad
    /// has just become wiped.
    pub fn refresh_counts(&mut self) -> bool {
        let was_wiped = self.is_wiped;
        self.active_count = self.marines.iter().filter(|m| m.is_active).count();
        self.is_wiped = self.active_count == 0;
        self.is_wiped && !was_wiped
    }

    pub fn set_formation(&mut self, formation: FormationKind) {
        self.formation = formation;
    }

    /// Apply an order. The fallback anchor for waypoint orders is fixed here.
    pub fn issue_order(&mut self, order: OrderKind, waypoint: Option<Vec3>) {
        self.order = order;
        self.waypoint = waypoint;
        self.hold_point = match order {
            OrderKind::Retreat => retreat_point(self.position),
            _ => self.position,
        };
    }

    /// World position of a formation slot around the current anchor.
    pub fn slot_position(&self, slot: usize) -> Vec3 {
        slot_position(self.position, self.heading, self.formation, slot)
    }

    pub fn marine(&self, id: &str) -> Option<&Marine> {
        self.marines.iter().find(|m| m.id == id)
    }

    pub fn marine_index(&self, id: &str) -> Option<usize> {
        self.marines.iter().position(|m| m.id == id)
    }
}
