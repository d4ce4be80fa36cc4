//! Port adapters
//!
//! This crate implements the port traits from `pneuma-core` on top of the
//! hardware traits from `pneuma-hal`:
//!
//! - Audio cue on a PWM buzzer
//! - Button panel (session interrupt and menu navigation)
//! - Settings persistence in flash

#![no_std]
#![deny(unsafe_code)]

pub mod cue;
pub mod input;
pub mod storage;
