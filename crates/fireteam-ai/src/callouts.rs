//! Scripted radio callouts.
//!
//! Hostile-sighting callouts follow a priority chain evaluated per squad per
//! tick; the other categories are raised by specific events. Every category
//! owns a fixed pool of lines and one is drawn uniformly at random.

use rand::seq::SliceRandom;
use rand::Rng;

use fireteam_core::constants::{OVERWHELMED_ENEMY_COUNT, OVERWHELMED_MORALE};
use fireteam_core::enums::{CalloutCategory, ThreatLevel};

/// Placeholder replaced by the subject marine's name.
pub const NAME_PLACEHOLDER: &str = "%NAME%";

const CONTACT: &[&str] = &[
    "Contact front!",
    "Hostiles spotted, engaging!",
    "Eyes on targets!",
    "Movement ahead, weapons free!",
];

const THREAT_HIGH: &[&str] = &[
    "Big one incoming, focus fire!",
    "Heavy hostile, watch yourselves!",
    "We've got a bruiser, light it up!",
];

const OVERWHELMED: &[&str] = &[
    "There's too many of them!",
    "We're getting overrun here!",
    "Need support, we can't hold!",
    "They're everywhere, fall back!",
];

const TAKING_FIRE: &[&str] = &[
    "Taking fire!",
    "We're pinned down!",
    "Incoming, get down!",
];

const MAN_DOWN: &[&str] = &[
    "Man down! %NAME% is hit!",
    "%NAME% is down, cover them!",
    "We lost %NAME%, someone get to them!",
];

const RESCUED: &[&str] = &[
    "Good to see you, we thought we were done for.",
    "Cavalry's here! Push them back!",
    "About time! Let's finish this.",
];

const REVIVE_THANKS: &[&str] = &[
    "Thanks, I owe you one.",
    "Back in the fight!",
    "Appreciate it. Let's go.",
];

/// Line pool for a category. Never empty.
pub fn lines(category: CalloutCategory) -> &'static [&'static str] {
    match category {
        CalloutCategory::Contact => CONTACT,
        CalloutCategory::ThreatHigh => THREAT_HIGH,
        CalloutCategory::Overwhelmed => OVERWHELMED,
        CalloutCategory::TakingFire => TAKING_FIRE,
        CalloutCategory::ManDown => MAN_DOWN,
        CalloutCategory::Rescued => RESCUED,
        CalloutCategory::ReviveThanks => REVIVE_THANKS,
    }
}

/// Priority chain for hostile-sighting callouts.
pub fn priority_category(
    enemy_count: usize,
    morale: f32,
    nearest_threat: ThreatLevel,
) -> CalloutCategory {
    if enemy_count > OVERWHELMED_ENEMY_COUNT && morale < OVERWHELMED_MORALE {
        CalloutCategory::Overwhelmed
    } else if nearest_threat == ThreatLevel::High {
        CalloutCategory::ThreatHigh
    } else {
        CalloutCategory::Contact
    }
}

/// Per-speaker cooldown gate.
pub fn cooldown_ready(now: f32, last_callout: f32, cooldown: f32) -> bool {
    now - last_callout >= cooldown
}

/// Who is keying the radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker<'a> {
    /// A marine, by name.
    Marine(&'a str),
    /// The squad lead, by squad callsign.
    Lead(&'a str),
}

impl Speaker<'_> {
    pub fn sender(&self) -> String {
        match self {
            Speaker::Marine(name) => format!("Pvt. {name}"),
            Speaker::Lead(callsign) => format!("{callsign} Lead"),
        }
    }
}

/// A composed radio line, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callout {
    pub category: CalloutCategory,
    pub sender: String,
    pub text: String,
}

/// Draw a line for `category` and fill in the subject's name.
pub fn compose<R: Rng + ?Sized>(
    rng: &mut R,
    category: CalloutCategory,
    speaker: Speaker<'_>,
    subject: Option<&str>,
) -> Callout {
    let line = lines(category).choose(rng).copied().unwrap_or_default();
    let text = match subject {
        Some(name) => line.replace(NAME_PLACEHOLDER, name),
        None => line.to_string(),
    };
    Callout {
        category,
        sender: speaker.sender(),
        text,
    }
}
