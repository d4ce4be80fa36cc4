//! Session state machine
//!
//! Replaces a global "playing" flag: the engine owns one of these for the
//! length of a run and hands the final value back to the caller.

use super::events::SessionEvent;
use crate::settings::Phase;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// No session running
    #[default]
    Idle,
    /// Phase in progress, cue silent
    Running(Phase),
    /// Phase in progress, cue still sounding
    CueActive(Phase),
    /// User stopped the session
    Interrupted,
    /// Total duration elapsed
    Completed,
}

impl SessionState {
    /// Phase being traversed, if any
    pub fn phase(&self) -> Option<Phase> {
        match self {
            SessionState::Running(phase) | SessionState::CueActive(phase) => Some(*phase),
            _ => None,
        }
    }

    /// Check if the cue is sounding
    pub fn cue_active(&self) -> bool {
        matches!(self, SessionState::CueActive(_))
    }

    /// Check if a session is in progress
    pub fn is_running(&self) -> bool {
        self.phase().is_some()
    }

    /// Check if the run has ended
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Interrupted | SessionState::Completed)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: SessionEvent) -> Self {
        use SessionEvent::*;
        use SessionState::*;

        match (self, event) {
            // Phase entry always requests a cue
            (Idle | Running(_) | CueActive(_), EnterPhase(phase)) => CueActive(phase),

            (CueActive(phase), CueMuted) => Running(phase),

            (Idle | Running(_) | CueActive(_), Interrupt) => Interrupted,

            // Idle covers a settings set where every phase is zero
            (Idle | Running(_), DurationElapsed) => Completed,

            (_, Reset) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_entry_starts_cue() {
        let state = SessionState::Idle.transition(SessionEvent::EnterPhase(Phase::In));
        assert_eq!(state, SessionState::CueActive(Phase::In));
        assert!(state.cue_active());
        assert_eq!(state.phase(), Some(Phase::In));
    }

    #[test]
    fn test_cue_mute_keeps_phase() {
        let state = SessionState::CueActive(Phase::Out).transition(SessionEvent::CueMuted);
        assert_eq!(state, SessionState::Running(Phase::Out));
        assert!(!state.cue_active());
    }

    #[test]
    fn test_mute_when_silent_is_ignored() {
        let state = SessionState::Running(Phase::Hold);
        assert_eq!(state.transition(SessionEvent::CueMuted), state);
        assert_eq!(SessionState::Idle.transition(SessionEvent::CueMuted), SessionState::Idle);
    }

    #[test]
    fn test_interrupt_from_any_live_state() {
        let states = [
            SessionState::Idle,
            SessionState::Running(Phase::In),
            SessionState::CueActive(Phase::Stay),
        ];

        for state in states {
            assert_eq!(
                state.transition(SessionEvent::Interrupt),
                SessionState::Interrupted
            );
        }
    }

    #[test]
    fn test_terminal_states_are_sticky() {
        for state in [SessionState::Interrupted, SessionState::Completed] {
            assert!(state.is_terminal());
            assert_eq!(state.transition(SessionEvent::EnterPhase(Phase::In)), state);
            assert_eq!(state.transition(SessionEvent::Interrupt), state);
            assert_eq!(state.transition(SessionEvent::DurationElapsed), state);
            assert_eq!(state.transition(SessionEvent::Reset), SessionState::Idle);
        }
    }

    #[test]
    fn test_completion_waits_for_cue_mute() {
        let state = SessionState::CueActive(Phase::Out);
        assert_eq!(state.transition(SessionEvent::DurationElapsed), state);

        let state = state
            .transition(SessionEvent::CueMuted)
            .transition(SessionEvent::DurationElapsed);
        assert_eq!(state, SessionState::Completed);
    }

    #[test]
    fn test_full_cycle_flow() {
        let mut state = SessionState::Idle;
        for phase in Phase::CYCLE {
            state = state.transition(SessionEvent::EnterPhase(phase));
            assert_eq!(state, SessionState::CueActive(phase));
            state = state.transition(SessionEvent::CueMuted);
            assert_eq!(state, SessionState::Running(phase));
            assert!(state.is_running());
        }
        state = state.transition(SessionEvent::DurationElapsed);
        assert_eq!(state, SessionState::Completed);
        assert!(!state.is_running());
    }
}
