//! Squad decision logic for FIRETEAM.
//!
//! Pure functions over plain data: formation geometry, target and cover
//! selection, morale, revive and marine state transitions, callout rules and
//! per-order movement profiles. Nothing here owns squad state.

pub mod callouts;
pub mod cover;
pub mod formation;
pub mod fsm;
pub mod morale;
pub mod movement;
pub mod profiles;
pub mod revive;
pub mod targeting;

pub use fireteam_core as core;

#[cfg(test)]
mod tests;
