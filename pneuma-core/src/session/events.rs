//! Events that drive a breathing session

use crate::settings::Phase;

/// Events that can trigger session state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionEvent {
    /// A phase with non-zero duration started and its cue was requested
    EnterPhase(Phase),
    /// The cue for the current phase was muted
    CueMuted,
    /// The input port reported an interrupt
    Interrupt,
    /// Session time ran out at a cycle boundary
    DurationElapsed,
    /// Caller is preparing a new run
    Reset,
}
