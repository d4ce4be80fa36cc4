//! Push-button inputs

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;

/// A button on a GPIO with the internal pull-up enabled
///
/// Pressing shorts the pin to ground, so pair with
/// [`pneuma_hal::gpio::ActiveLevel::Low`].
pub struct Button<'d> {
    input: Input<'d>,
}

impl<'d> Button<'d> {
    /// Configure `pin` as a pulled-up input
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }
}

impl pneuma_hal::InputPin for Button<'_> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}
