//! Per-tick systems that operate on one squad at a time.
//!
//! Systems are functions over `&mut Squad`; they own no state. Anything they
//! report goes into the event buffer of the shared `TickContext`.

pub mod callouts;
pub mod casualty;
pub mod combat;
pub mod movement;
pub mod revive;
pub mod snapshot;

use rand_chacha::ChaCha8Rng;

use fireteam_ai::callouts::Callout;
use fireteam_core::config::Tuning;
use fireteam_core::enums::NotificationLevel;
use fireteam_core::events::{Notification, SquadEvent};

/// Shared mutable context handed to every system.
pub struct TickContext<'a> {
    pub tuning: &'a Tuning,
    pub rng: &'a mut ChaCha8Rng,
    pub events: &'a mut Vec<SquadEvent>,
    /// Simulated seconds at the start of this update.
    pub now: f32,
}

impl TickContext<'_> {
    pub fn notify(&mut self, level: NotificationLevel, message: String) {
        self.events.push(SquadEvent::Notification(Notification {
            level,
            message,
            time: self.now,
        }));
    }

    pub fn comms(&mut self, callout: Callout) {
        log::debug!("[{}] {}", callout.sender, callout.text);
        self.events.push(SquadEvent::CommsMessage {
            sender: callout.sender,
            text: callout.text,
            category: callout.category,
        });
    }
}
