//! Audio cue port

/// Sink for the short tone marking a phase start
pub trait CuePort {
    /// Start sounding `hz` (always > 0). Returns immediately.
    fn play(&mut self, hz: u16);

    /// Stop any tone. Muting an idle cue is a no-op.
    fn mute(&mut self);
}

impl<T: CuePort + ?Sized> CuePort for &mut T {
    fn play(&mut self, hz: u16) {
        (**self).play(hz)
    }

    fn mute(&mut self) {
        (**self).mute()
    }
}
