//! Core types and definitions for the SKIRMISH combat sandbox.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, errors, and constants.
//! It has no dependency on any runtime or presentation framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod kinematics;
pub mod presentation;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
