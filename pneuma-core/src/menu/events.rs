//! Menu navigation events and resulting actions

/// Discrete navigation signals from the input port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationEvent {
    /// Move selection up one line
    Up,
    /// Move selection down one line
    Down,
    /// Raise the selected value, or activate the selected line
    Increase,
    /// Lower the selected value, or activate the selected line
    Decrease,
    /// Restore factory defaults
    Reset,
}

/// What the caller should do after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuAction {
    /// Nothing changed
    None,
    /// Selection or settings changed, redraw the menu
    Redraw,
    /// Persist settings and start a session
    StartSession,
    /// Settings were reset, discard the persisted copy and redraw
    FactoryReset,
}
