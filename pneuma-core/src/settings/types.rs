//! Breathing settings
//!
//! Settings are small and `Copy`: the menu edits them in place and the
//! cycle engine reads a snapshot for the length of one session.

use super::phase::{Phase, PHASE_COUNT};
use super::presets::Preset;
use super::tones::phase_tone;

/// Shortest selectable session, in minutes
pub const MIN_TOTAL_DURATION: u16 = 1;

/// Longest selectable session, in minutes
pub const MAX_TOTAL_DURATION: u16 = 99;

/// Longest selectable phase, in half-seconds (30 s)
pub const MAX_HALF_SECONDS: u16 = 60;

/// Milliseconds per stored half-second unit
pub const MS_PER_HALF_SECOND: u32 = 500;

/// Factory default session length in minutes
pub const DEFAULT_TOTAL_DURATION: u16 = 10;

/// Factory default phase durations in half-seconds (in, hold, out, stay)
pub const DEFAULT_HALF_SECONDS: [u16; PHASE_COUNT] = [8, 0, 12, 4];

/// Lowest allowed stored value for a phase
///
/// Inhale and exhale can never be skipped; the two holds can.
pub const fn min_half_seconds(phase: Phase) -> u16 {
    match phase {
        Phase::In | Phase::Out => 1,
        Phase::Hold | Phase::Stay => 0,
    }
}

/// User-editable session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BreathingSettings {
    /// Session length cap in minutes
    pub total_duration: u16,
    /// Phase durations in half-seconds, indexed by [`Phase::index`]
    pub half_seconds: [u16; PHASE_COUNT],
}

impl Default for BreathingSettings {
    fn default() -> Self {
        Self {
            total_duration: DEFAULT_TOTAL_DURATION,
            half_seconds: DEFAULT_HALF_SECONDS,
        }
    }
}

impl BreathingSettings {
    /// Stored half-second count for a phase
    pub fn half_seconds(&self, phase: Phase) -> u16 {
        self.half_seconds[phase.index()]
    }

    /// Overwrite the stored half-second count for a phase
    pub fn set_half_seconds(&mut self, phase: Phase, value: u16) {
        self.half_seconds[phase.index()] = value;
    }

    /// Phase duration in seconds (0.0 means the phase is skipped)
    pub fn get_seconds(&self, phase: Phase) -> f32 {
        self.half_seconds(phase) as f32 / 2.0
    }

    /// Phase duration in milliseconds
    pub fn phase_duration_ms(&self, phase: Phase) -> u32 {
        self.half_seconds(phase) as u32 * MS_PER_HALF_SECOND
    }

    /// Cue pitch in Hz for a phase
    pub fn get_signal_tone(&self, phase: Phase) -> u16 {
        phase_tone(phase)
    }

    /// Session length cap in milliseconds
    pub fn total_duration_ms(&self) -> u64 {
        self.total_duration as u64 * 60 * 1000
    }

    /// Length of one full cycle in milliseconds
    pub fn cycle_duration_ms(&self) -> u32 {
        Phase::CYCLE
            .iter()
            .map(|&phase| self.phase_duration_ms(phase))
            .sum()
    }

    /// Restore factory defaults
    ///
    /// This only touches the in-memory copy. Discarding the persisted
    /// document is the settings store's job.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace all four phase durations with a preset
    ///
    /// The total duration is left alone.
    pub fn apply_preset(&mut self, preset: Preset) {
        self.half_seconds = preset.half_seconds();
    }

    /// Check every field against the editing limits
    pub fn is_valid(&self) -> bool {
        (MIN_TOTAL_DURATION..=MAX_TOTAL_DURATION).contains(&self.total_duration)
            && Phase::CYCLE.iter().all(|&phase| {
                (min_half_seconds(phase)..=MAX_HALF_SECONDS).contains(&self.half_seconds(phase))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = BreathingSettings::default();
        assert_eq!(settings.total_duration, 10);
        assert_eq!(settings.half_seconds(Phase::In), 8);
        assert_eq!(settings.half_seconds(Phase::Hold), 0);
        assert_eq!(settings.half_seconds(Phase::Out), 12);
        assert_eq!(settings.half_seconds(Phase::Stay), 4);
        assert!(settings.is_valid());
    }

    #[test]
    fn test_get_seconds() {
        let settings = BreathingSettings::default();
        assert_eq!(settings.get_seconds(Phase::In), 4.0);
        assert_eq!(settings.get_seconds(Phase::Hold), 0.0);
        assert_eq!(settings.get_seconds(Phase::Out), 6.0);
        assert_eq!(settings.get_seconds(Phase::Stay), 2.0);
    }

    #[test]
    fn test_odd_half_seconds() {
        let mut settings = BreathingSettings::default();
        settings.set_half_seconds(Phase::Out, 13);
        assert_eq!(settings.get_seconds(Phase::Out), 6.5);
        assert_eq!(settings.phase_duration_ms(Phase::Out), 6500);
    }

    #[test]
    fn test_signal_tones_descend() {
        let settings = BreathingSettings::default();
        let tones = Phase::CYCLE.map(|phase| settings.get_signal_tone(phase));
        assert_eq!(tones, [4699, 3951, 3520, 1568]);
    }

    #[test]
    fn test_total_duration_ms() {
        let mut settings = BreathingSettings::default();
        settings.total_duration = 1;
        assert_eq!(settings.total_duration_ms(), 60_000);
    }

    #[test]
    fn test_cycle_duration() {
        let settings = BreathingSettings::default();
        assert_eq!(settings.cycle_duration_ms(), 4000 + 6000 + 2000);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut settings = BreathingSettings {
            total_duration: 42,
            half_seconds: [1, 2, 3, 4],
        };
        settings.reset();
        assert_eq!(settings, BreathingSettings::default());
    }

    #[test]
    fn test_apply_preset() {
        let mut settings = BreathingSettings::default();
        settings.apply_preset(Preset::FourSevenEight);
        assert_eq!(settings.half_seconds, [8, 14, 16, 0]);
        assert_eq!(settings.total_duration, DEFAULT_TOTAL_DURATION);

        settings.apply_preset(Preset::Box);
        assert_eq!(settings.half_seconds, [8, 8, 8, 8]);
    }

    #[test]
    fn test_validity_floors() {
        let mut settings = BreathingSettings::default();
        settings.set_half_seconds(Phase::In, 0);
        assert!(!settings.is_valid());

        let mut settings = BreathingSettings::default();
        settings.total_duration = 0;
        assert!(!settings.is_valid());

        let mut settings = BreathingSettings::default();
        settings.set_half_seconds(Phase::Stay, 0);
        assert!(settings.is_valid());
    }

    #[test]
    fn test_validity_caps() {
        let mut settings = BreathingSettings::default();
        settings.total_duration = MAX_TOTAL_DURATION + 1;
        assert!(!settings.is_valid());

        let mut settings = BreathingSettings::default();
        settings.set_half_seconds(Phase::Hold, MAX_HALF_SECONDS + 1);
        assert!(!settings.is_valid());
    }
}
