//! Presentation adapters for the Pneuma breath pacing coach
//!
//! This crate provides:
//! - `visual_extent`, the shared progress-to-size mapping
//! - `CircleVisualizer` and `BarVisualizer`, `PresentationPort`s over any
//!   `embedded-graphics` RGB565 draw target
//! - `Screen` text buffer, the settings menu layout, and its renderer
//!
//! # Architecture
//!
//! The cycle engine only emits `(progress, phase)`. Each visualizer owns its
//! geometry, so adding a new display means adding one adapter here rather
//! than touching the engine.

#![no_std]

pub mod extent;
pub mod menu_screen;
pub mod palette;
pub mod screen;
pub mod visualizer;

// Re-export key types
pub use extent::visual_extent;
pub use menu_screen::{draw_screen, menu_screen};
pub use palette::{Palette, NIGHTLIGHT};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
pub use visualizer::{BarVisualizer, CircleVisualizer};
