//! Events emitted by the squad AI for comms, UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Everything the squad AI reports to the outside world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SquadEvent {
    /// Radio line for the comms panel / voice system.
    CommsMessage {
        sender: String,
        text: String,
        category: CalloutCategory,
    },
    /// Banner-style notification.
    Notification(Notification),
    /// A marine's health reached zero.
    MarineDowned { marine_id: String, squad_id: String },
    /// A revive completed.
    MarineRevived { marine_id: String },
    /// The last active marine of a squad went down.
    SquadWiped { squad_id: String },
}

/// Notification for the UI queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    /// Simulated seconds when raised.
    pub time: f32,
}
