//! Buzzer cue
//!
//! Plays phase cues on any [`ToneOutput`].

use pneuma_core::traits::CuePort;
use pneuma_hal::ToneOutput;

/// Cue port over a square-wave tone output
pub struct BuzzerCue<T> {
    output: T,
}

impl<T: ToneOutput> BuzzerCue<T> {
    /// Wrap a tone output, silencing it first
    pub fn new(mut output: T) -> Self {
        output.silence();
        Self { output }
    }

    /// Check if a tone is sounding
    pub fn is_sounding(&self) -> bool {
        self.output.current_frequency().is_some()
    }

    /// Release the tone output
    pub fn into_inner(self) -> T {
        self.output
    }
}

impl<T: ToneOutput> CuePort for BuzzerCue<T> {
    fn play(&mut self, hz: u16) {
        self.output.set_frequency(hz);
    }

    fn mute(&mut self) {
        if self.is_sounding() {
            self.output.silence();
        }
    }
}
