//! Breathing phases
//!
//! The cycle order is fixed. Per-phase lookups (duration, tone) index
//! tables with [`Phase::index`] instead of branching on the phase.

/// Number of phases in one breathing cycle
pub const PHASE_COUNT: usize = 4;

/// One stage of a breathing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Phase {
    /// Inhale
    In = 0,
    /// Hold with full lungs
    Hold = 1,
    /// Exhale
    Out = 2,
    /// Hold with empty lungs
    Stay = 3,
}

/// A raw phase index outside `0..PHASE_COUNT`
///
/// Phases are never user input, so hitting this means a corrupted phase
/// list or storage record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidPhase(pub u8);

impl Phase {
    /// Phases in cycle order
    pub const CYCLE: [Phase; PHASE_COUNT] = [Phase::In, Phase::Hold, Phase::Out, Phase::Stay];

    /// Table index for this phase
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short label used on screen
    pub const fn label(self) -> &'static str {
        match self {
            Phase::In => "in",
            Phase::Hold => "hold",
            Phase::Out => "out",
            Phase::Stay => "keep",
        }
    }

    /// Phase following this one in the cycle
    pub const fn next(self) -> Phase {
        match self {
            Phase::In => Phase::Hold,
            Phase::Hold => Phase::Out,
            Phase::Out => Phase::Stay,
            Phase::Stay => Phase::In,
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = InvalidPhase;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Phase::CYCLE
            .get(value as usize)
            .copied()
            .ok_or(InvalidPhase(value))
    }
}
