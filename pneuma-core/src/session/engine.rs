//! Cycle engine
//!
//! Drives one breathing session: walks the four phases in order, turns
//! elapsed time into progress for the presentation port, gates the phase
//! cue, and stops on interrupt or once the session time is used up.
//!
//! Timing is a busy poll against a monotonic [`Clock`]. Interrupts are
//! checked at the top of every cycle, before every phase, and on every
//! inner-loop iteration, so a button press ends the session within one
//! iteration.

use embedded_hal::delay::DelayNs;

use super::events::SessionEvent;
use super::machine::SessionState;
use super::progress::progress;
use crate::settings::tones::TONE_G6;
use crate::settings::{BreathingSettings, Phase};
use crate::traits::{Clock, CuePort, InputPort, PresentationPort};

/// How long a phase cue sounds before it is muted
pub const DEFAULT_CUE_DURATION_MS: u32 = 10;

/// Tone played once a session runs to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EndChime {
    /// No chime
    #[default]
    Off,
    /// Play `pitch_hz` for `duration_ms`
    Tone { pitch_hz: u16, duration_ms: u32 },
}

impl EndChime {
    /// Half a second of the keep-phase pitch
    pub const STAY: EndChime = EndChime::Tone {
        pitch_hz: TONE_G6,
        duration_ms: 500,
    };
}

/// Engine behaviour knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineConfig {
    /// Cue length in milliseconds
    pub cue_duration_ms: u32,
    /// Sleep between inner-loop iterations (0 = tight poll)
    pub poll_interval_ms: u32,
    /// Chime on normal completion
    pub end_chime: EndChime,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cue_duration_ms: DEFAULT_CUE_DURATION_MS,
            poll_interval_ms: 0,
            end_chime: EndChime::Off,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionOutcome {
    /// Total duration elapsed
    Completed,
    /// User pressed a button
    Interrupted,
}

/// Summary of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionReport {
    /// How the session ended
    pub outcome: SessionOutcome,
    /// Full cycles completed
    pub cycles: u32,
    /// Wall time from start to the final mute
    pub elapsed_ms: u64,
}

/// Breathing session driver
///
/// Owns the presentation, cue, and input ports for as long as it lives;
/// [`CycleEngine::into_parts`] hands them back.
pub struct CycleEngine<P, C, I, T> {
    presentation: P,
    cue: C,
    input: I,
    timer: T,
    config: EngineConfig,
    state: SessionState,
}

impl<P, C, I, T> CycleEngine<P, C, I, T>
where
    P: PresentationPort,
    C: CuePort,
    I: InputPort,
    T: Clock + DelayNs,
{
    /// Create an engine with the default configuration
    pub fn new(presentation: P, cue: C, input: I, timer: T) -> Self {
        Self {
            presentation,
            cue,
            input,
            timer,
            config: EngineConfig::default(),
            state: SessionState::Idle,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// State after the last transition
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Release the ports
    pub fn into_parts(self) -> (P, C, I, T) {
        (self.presentation, self.cue, self.input, self.timer)
    }

    /// Run one session to completion or interrupt
    pub fn run(&mut self, settings: &BreathingSettings) -> SessionReport {
        self.state = self.state.transition(SessionEvent::Reset);
        self.cue.mute();
        self.presentation.clear();

        let session_start = self.timer.now_ms();
        let total_duration_ms = settings.total_duration_ms();
        let mut cycles = 0u32;

        // Nothing to pace
        if settings.cycle_duration_ms() == 0 {
            self.state = self.state.transition(SessionEvent::DurationElapsed);
        }

        while !self.state.is_terminal() {
            if self.input.any_interrupt_signal() {
                self.interrupt();
                break;
            }

            for phase in Phase::CYCLE {
                let duration_ms = settings.phase_duration_ms(phase);
                if duration_ms == 0 {
                    continue;
                }

                if self.input.any_interrupt_signal() {
                    self.interrupt();
                    break;
                }

                self.run_phase(phase, duration_ms, settings.get_signal_tone(phase));
                if self.state.is_terminal() {
                    break;
                }
            }

            if self.state.is_terminal() {
                break;
            }
            cycles += 1;

            if self.timer.now_ms().saturating_sub(session_start) > total_duration_ms {
                self.state = self.state.transition(SessionEvent::DurationElapsed);
            }
        }

        let elapsed_ms = self.timer.now_ms().saturating_sub(session_start);

        let outcome = if self.state == SessionState::Completed {
            self.play_end_chime();
            SessionOutcome::Completed
        } else {
            SessionOutcome::Interrupted
        };

        // Also ends the chime
        self.cue.mute();

        SessionReport {
            outcome,
            cycles,
            elapsed_ms,
        }
    }

    fn run_phase(&mut self, phase: Phase, duration_ms: u32, tone_hz: u16) {
        let phase_start = self.timer.now_ms();
        self.cue.play(tone_hz);
        self.state = self.state.transition(SessionEvent::EnterPhase(phase));

        loop {
            let elapsed = self.timer.now_ms().saturating_sub(phase_start);
            if elapsed > self.config.cue_duration_ms as u64 {
                self.mute_cue();
            }

            let progress = progress(elapsed, duration_ms);
            self.presentation.render(progress, phase);

            if self.input.any_interrupt_signal() {
                self.interrupt();
                return;
            }
            if progress >= 1.0 {
                break;
            }

            if self.config.poll_interval_ms > 0 {
                self.timer.delay_ms(self.config.poll_interval_ms);
            }
        }

        // Phases shorter than the cue still get exactly one mute
        self.mute_cue();
    }

    /// Mute once per phase entry
    fn mute_cue(&mut self) {
        if self.state.cue_active() {
            self.cue.mute();
            self.state = self.state.transition(SessionEvent::CueMuted);
        }
    }

    fn interrupt(&mut self) {
        self.mute_cue();
        self.state = self.state.transition(SessionEvent::Interrupt);
    }

    fn play_end_chime(&mut self) {
        if let EndChime::Tone {
            pitch_hz,
            duration_ms,
        } = self.config.end_chime
        {
            self.cue.play(pitch_hz);
            self.timer.delay_ms(duration_ms);
        }
    }
}
