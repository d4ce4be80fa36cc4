//! Named breathing patterns
//!
//! All durations are in half-seconds, same unit as [`BreathingSettings`].
//!
//! [`BreathingSettings`]: super::BreathingSettings

use super::phase::PHASE_COUNT;

/// A fixed combination of phase durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Preset {
    /// 4 s in, 7 s hold, 8 s out
    FourSevenEight,
    /// Equal four-second sides
    Box,
    /// Exhale about 1.618 times the inhale
    Golden,
    /// 5.5 s in, 5.5 s out (resonant breathing)
    Natural,
}

impl Preset {
    /// All presets in menu order
    pub const ALL: [Preset; 4] = [
        Preset::FourSevenEight,
        Preset::Box,
        Preset::Golden,
        Preset::Natural,
    ];

    /// Short name shown in the menu
    pub const fn name(self) -> &'static str {
        match self {
            Preset::FourSevenEight => "4-7-8",
            Preset::Box => "box",
            Preset::Golden => "gold",
            Preset::Natural => "nat",
        }
    }

    /// Half-second durations in cycle order (in, hold, out, stay)
    pub const fn half_seconds(self) -> [u16; PHASE_COUNT] {
        match self {
            Preset::FourSevenEight => [8, 14, 16, 0],
            Preset::Box => [8, 8, 8, 8],
            Preset::Golden => [8, 0, 13, 0],
            Preset::Natural => [11, 0, 11, 0],
        }
    }
}
