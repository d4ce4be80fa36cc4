//! RP2040-specific HAL for the Pneuma firmware
//!
//! This crate provides RP2040 implementations of the shared `pneuma-hal`
//! traits:
//!
//! - Pulled-up push buttons (implements `pneuma_hal::InputPin`)
//! - PWM piezo buzzer (implements `pneuma_hal::ToneOutput`)
//! - Flash storage driver (implements `pneuma_hal::FlashStorage`)

#![no_std]

pub mod flash;
pub mod gpio;
pub mod pwm;

// Re-export shared traits from pneuma-hal for convenience
pub use pneuma_hal::{FlashStorage as FlashStorageTrait, InputPin, StorageKey, ToneOutput};
