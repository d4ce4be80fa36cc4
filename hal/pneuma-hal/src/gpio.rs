//! GPIO pin abstractions
//!
//! Buttons are the only digital I/O the coach needs, so only the input
//! side is modelled here.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Logical level at which a button counts as pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pressed pulls the pin low (pull-up wiring)
    Low,
    /// Pressed drives the pin high (pull-down wiring)
    High,
}

impl ActiveLevel {
    /// Check whether a pin currently reads as active
    pub fn is_active<P: InputPin + ?Sized>(self, pin: &P) -> bool {
        match self {
            ActiveLevel::Low => pin.is_low(),
            ActiveLevel::High => pin.is_high(),
        }
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPin(bool);

    impl InputPin for FixedPin {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_active_low() {
        assert!(ActiveLevel::Low.is_active(&FixedPin(false)));
        assert!(!ActiveLevel::Low.is_active(&FixedPin(true)));
    }

    #[test]
    fn test_active_high() {
        assert!(ActiveLevel::High.is_active(&FixedPin(true)));
        assert!(!ActiveLevel::High.is_active(&FixedPin(false)));
    }

    #[test]
    fn test_reference_forwarding() {
        let pin = FixedPin(true);
        let by_ref = &pin;
        assert!(by_ref.is_high());
        assert!(!by_ref.is_low());
    }
}
