//! Tone output abstraction
//!
//! A piezo buzzer driven by a PWM channel. Implementations pick the
//! clock divider and wrap value for the requested frequency and drive a
//! 50% duty cycle.

/// Square-wave tone generator
pub trait ToneOutput {
    /// Start (or retune) a tone at the given frequency in Hz
    ///
    /// A frequency of 0 is treated as [`ToneOutput::silence`].
    fn set_frequency(&mut self, hz: u16);

    /// Stop any tone. Must be safe to call when already silent.
    fn silence(&mut self);

    /// Frequency currently sounding, if any
    fn current_frequency(&self) -> Option<u16>;
}

/// Largest PWM wrap value on a 16-bit counter
pub const MAX_TOP: u32 = u16::MAX as u32;

/// Largest integer clock divider
pub const MAX_DIVIDER: u32 = 255;

/// Counter settings for one tone on a 16-bit PWM slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTiming {
    /// Integer clock divider (1..=255)
    pub divider: u8,
    /// Counter wrap value
    pub top: u16,
}

impl PwmTiming {
    /// Compute divider and wrap for `hz` from a `clock_hz` source
    ///
    /// Picks the smallest divider that fits the period in 16 bits, which
    /// keeps the most frequency resolution. Returns `None` for 0 Hz or a
    /// tone too low to reach even at the largest divider.
    pub fn for_frequency(clock_hz: u32, hz: u16) -> Option<Self> {
        if hz == 0 {
            return None;
        }

        let ticks = clock_hz / hz as u32;
        let divider = (ticks / (MAX_TOP + 1) + 1).max(1);
        if divider > MAX_DIVIDER {
            return None;
        }

        let top = (ticks / divider).checked_sub(1)?;
        Some(Self {
            divider: divider as u8,
            top: top.min(MAX_TOP) as u16,
        })
    }

    /// Compare value for a 50% duty square wave
    pub fn half_duty(&self) -> u16 {
        ((self.top as u32 + 1) / 2) as u16
    }

    /// Frequency actually produced from `clock_hz`
    pub fn actual_frequency(&self, clock_hz: u32) -> u32 {
        clock_hz / (self.divider as u32 * (self.top as u32 + 1))
    }
}
