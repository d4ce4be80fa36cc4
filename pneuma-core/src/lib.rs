//! Board-agnostic core logic for the Pneuma breath pacing coach
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Breathing settings, phase tables, presets, and the settings document
//! - Session state machine and cycle engine
//! - Settings menu
//! - Port traits the engine drives (presentation, cue, input, clock)

#![no_std]
#![deny(unsafe_code)]

pub mod menu;
pub mod session;
pub mod settings;
pub mod traits;
