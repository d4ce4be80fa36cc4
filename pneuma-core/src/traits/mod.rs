//! Port traits
//!
//! These traits define the interface between the cycle engine and the
//! hardware-specific adapters that draw, beep, and read buttons.

pub mod clock;
pub mod cue;
pub mod input;
pub mod presentation;

pub use clock::Clock;
pub use cue::CuePort;
pub use input::InputPort;
pub use presentation::PresentationPort;
