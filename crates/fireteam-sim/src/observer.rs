//! Callback surface for comms, UI and audio collaborators.

use fireteam_core::events::{Notification, SquadEvent};

/// Receives squad events as they happen. Every method defaults to a no-op.
pub trait SquadObserver {
    fn on_comms_message(&mut self, _sender: &str, _text: &str) {}

    fn on_notification(&mut self, _notification: &Notification) {}

    fn on_marine_revived(&mut self, _marine_id: &str) {}

    fn on_squad_wiped(&mut self, _squad_id: &str) {}
}

/// Route one event to the matching observer callback.
pub fn notify(observer: &mut dyn SquadObserver, event: &SquadEvent) {
    match event {
        SquadEvent::CommsMessage { sender, text, .. } => observer.on_comms_message(sender, text),
        SquadEvent::Notification(notification) => observer.on_notification(notification),
        SquadEvent::MarineRevived { marine_id } => observer.on_marine_revived(marine_id),
        SquadEvent::SquadWiped { squad_id } => observer.on_squad_wiped(squad_id),
        SquadEvent::MarineDowned { .. } => {}
    }
}
