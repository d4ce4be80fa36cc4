//! Audio cue adapters

pub mod buzzer;

pub use buzzer::BuzzerCue;
