//! Breathing settings and their fixed lookup tables

pub mod document;
pub mod phase;
pub mod presets;
pub mod tones;
pub mod types;

pub use document::{decode, encode, Document, DocumentError};
pub use phase::{InvalidPhase, Phase, PHASE_COUNT};
pub use presets::Preset;
pub use tones::{note_frequency, phase_tone};
pub use types::*;
