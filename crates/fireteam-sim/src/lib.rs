//! Squad simulation for FIRETEAM.
//!
//! Owns every squad and marine, runs the per-tick systems and produces
//! `SquadSnapshot`s and `SquadEvent`s for the presentation layer.

pub mod manager;
pub mod marine;
pub mod observer;
pub mod squad;
pub mod systems;

pub use fireteam_core as core;
pub use manager::{SimConfig, SquadManager};
pub use observer::SquadObserver;
