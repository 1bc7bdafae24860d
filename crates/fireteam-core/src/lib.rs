//! Core types and definitions for the FIRETEAM squad AI.
//!
//! This crate defines the vocabulary shared across all other crates:
//! enums, tuning constants and config, commands, events, snapshots and errors.
//! It contains no decision logic and no engine or renderer dependency.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use glam::Vec3;
