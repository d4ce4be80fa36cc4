//! Breathing session: state machine, progress model, and cycle engine

pub mod engine;
pub mod events;
pub mod machine;
pub mod progress;

pub use engine::{
    CycleEngine, EndChime, EngineConfig, SessionOutcome, SessionReport, DEFAULT_CUE_DURATION_MS,
};
pub use events::SessionEvent;
pub use machine::SessionState;
pub use progress::progress;
