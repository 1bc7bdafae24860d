//! Error type for squad operations.
//!
//! The simulation itself never fails; these cover caller contract violations
//! (bad indices or ids) and rejected configuration.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SquadError {
    #[error("no squad at index {index}")]
    SquadNotFound { index: usize },
    #[error("no marine with id {id}")]
    MarineNotFound { id: String },
    #[error("marine {id} is not downed")]
    NotDowned { id: String },
    #[error("marine {id} is {distance:.1}m away, too far to revive")]
    OutOfReviveRange { id: String, distance: f32 },
    #[error("invalid tuning: {0}")]
    Config(String),
}
