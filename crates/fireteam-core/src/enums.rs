//! Enumeration types used throughout the squad AI.

use serde::{Deserialize, Serialize};

/// Per-marine behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarineState {
    /// At the formation slot with nothing to shoot.
    #[default]
    Idle,
    /// Walking to the formation slot.
    Moving,
    /// Engaging a selected target.
    Combat,
    /// Badly hurt, falling back to the nearest cover.
    TakingCover,
    /// Healthy and confident, laying fire on the last known target area.
    Suppressing,
    /// Health reached zero. Waits for a revive.
    Downed,
    /// Being revived by the player.
    Reviving,
}

impl MarineState {
    /// Downed and reviving marines are out of the fight.
    pub fn is_incapacitated(self) -> bool {
        matches!(self, MarineState::Downed | MarineState::Reviving)
    }
}

/// Named offset layout applied to squad slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormationKind {
    #[default]
    Diamond,
    Line,
    Cover,
}

/// Squad-level directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    #[default]
    FollowPlayer,
    HoldPosition,
    Advance,
    Retreat,
}

/// Enemy classification used in target scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Radio callout category. Each maps to a fixed pool of line variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutCategory {
    /// Default hostile sighting.
    Contact,
    /// Nearest enemy is a high threat.
    ThreatHigh,
    /// Too many enemies and morale is breaking.
    Overwhelmed,
    /// Squad is absorbing sustained damage.
    TakingFire,
    /// A marine went down. Lines carry a `%NAME%` placeholder.
    ManDown,
    /// Overwhelmed state ended by reinforcement. Once per squad.
    Rescued,
    /// Revived marine thanks the player.
    ReviveThanks,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Warning,
    Critical,
}
