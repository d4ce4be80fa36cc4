//! Input adapters

pub mod buttons;

pub use buttons::{ButtonPanel, PanelButton, PanelTiming, BUTTON_COUNT};
