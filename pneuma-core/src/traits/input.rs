//! Input port

/// Source of session interrupts
pub trait InputPort {
    /// Check whether the user asked to stop the session
    ///
    /// Must not block. Typically true while any button is held.
    fn any_interrupt_signal(&mut self) -> bool;
}

impl<T: InputPort + ?Sized> InputPort for &mut T {
    fn any_interrupt_signal(&mut self) -> bool {
        (**self).any_interrupt_signal()
    }
}
