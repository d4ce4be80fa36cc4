//! Monotonic time source

/// Millisecond monotonic clock
///
/// The engine pairs this with [`embedded_hal::delay::DelayNs`] for the
/// optional poll interval, so one timer type usually implements both.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
