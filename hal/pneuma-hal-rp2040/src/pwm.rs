//! PWM piezo buzzer
//!
//! One PWM slice drives the buzzer from channel A at 50% duty. Changing
//! pitch rewrites divider and wrap; silence just disables the slice.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{ChannelAPin, Config, Pwm, Slice};
use embassy_rp::Peri;
use fixed::FixedU16;

use pneuma_hal::tone::{PwmTiming, ToneOutput};

/// Piezo buzzer on a PWM channel A output
pub struct PwmBuzzer<'d> {
    pwm: Pwm<'d>,
    config: Config,
    frequency: Option<u16>,
}

impl<'d> PwmBuzzer<'d> {
    /// Take a PWM slice and its channel A pin, starting silent
    pub fn new<T: Slice>(slice: Peri<'d, T>, pin: Peri<'d, impl ChannelAPin<T>>) -> Self {
        let mut config = Config::default();
        config.enable = false;
        config.compare_a = 0;

        Self {
            pwm: Pwm::new_output_a(slice, pin, config.clone()),
            config,
            frequency: None,
        }
    }
}

impl ToneOutput for PwmBuzzer<'_> {
    fn set_frequency(&mut self, hz: u16) {
        let Some(timing) = PwmTiming::for_frequency(clk_sys_freq(), hz) else {
            self.silence();
            return;
        };

        self.config.divider = FixedU16::from_num(timing.divider);
        self.config.top = timing.top;
        self.config.compare_a = timing.half_duty();
        self.config.enable = true;
        self.pwm.set_config(&self.config);
        self.frequency = Some(hz);
    }

    fn silence(&mut self) {
        if self.frequency.is_none() {
            return;
        }
        self.config.compare_a = 0;
        self.config.enable = false;
        self.pwm.set_config(&self.config);
        self.frequency = None;
    }

    fn current_frequency(&self) -> Option<u16> {
        self.frequency
    }
}
