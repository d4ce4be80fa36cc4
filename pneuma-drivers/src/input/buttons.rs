//! Four-button panel
//!
//! Serves two consumers:
//! - the cycle engine, which only asks whether any button is down
//! - the menu, which wants discrete navigation events
//!
//! Navigation events fire on the press edge and auto-repeat while held.
//! Holding Up and Down together for [`PanelTiming::reset_hold_ms`] emits a
//! single [`NavigationEvent::Reset`].

use embedded_hal::delay::DelayNs;
use pneuma_core::menu::NavigationEvent;
use pneuma_core::traits::InputPort;
use pneuma_hal::gpio::{ActiveLevel, InputPin};

/// Buttons on the panel
pub const BUTTON_COUNT: usize = 4;

/// Panel button positions, in pin-array order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PanelButton {
    /// Selection up
    Up = 0,
    /// Selection down
    Down = 1,
    /// Increase / activate
    Increase = 2,
    /// Decrease / activate
    Decrease = 3,
}

impl PanelButton {
    /// All buttons in pin-array order
    pub const ALL: [PanelButton; BUTTON_COUNT] = [
        PanelButton::Up,
        PanelButton::Down,
        PanelButton::Increase,
        PanelButton::Decrease,
    ];

    /// Navigation event for a press of this button
    pub const fn event(self) -> NavigationEvent {
        match self {
            PanelButton::Up => NavigationEvent::Up,
            PanelButton::Down => NavigationEvent::Down,
            PanelButton::Increase => NavigationEvent::Increase,
            PanelButton::Decrease => NavigationEvent::Decrease,
        }
    }
}

/// Press timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelTiming {
    /// Hold time before auto-repeat starts
    pub repeat_delay_ms: u32,
    /// Time between repeats
    pub repeat_interval_ms: u32,
    /// Up+Down hold time for factory reset
    pub reset_hold_ms: u32,
    /// Poll period used by [`ButtonPanel::wait_released`]
    pub release_poll_ms: u32,
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self {
            repeat_delay_ms: 500,
            repeat_interval_ms: 150,
            reset_hold_ms: 2000,
            release_poll_ms: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyState {
    pressed: bool,
    pressed_at: u64,
    last_event: u64,
}

/// Four buttons sharing one active level
pub struct ButtonPanel<P> {
    pins: [P; BUTTON_COUNT],
    level: ActiveLevel,
    timing: PanelTiming,
    keys: [KeyState; BUTTON_COUNT],
    combo_since: Option<u64>,
    /// Set after a reset fires; cleared once every button is up
    suppressed: bool,
}

impl<P: InputPin> ButtonPanel<P> {
    /// Create a panel from pins ordered as [`PanelButton::ALL`]
    pub fn new(pins: [P; BUTTON_COUNT], level: ActiveLevel) -> Self {
        Self {
            pins,
            level,
            timing: PanelTiming::default(),
            keys: [KeyState::default(); BUTTON_COUNT],
            combo_since: None,
            suppressed: false,
        }
    }

    /// Replace the press timing
    pub fn with_timing(mut self, timing: PanelTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Check if one button is held
    pub fn is_pressed(&self, button: PanelButton) -> bool {
        self.level.is_active(&self.pins[button as usize])
    }

    /// Check if any button is held
    pub fn any_pressed(&self) -> bool {
        PanelButton::ALL.iter().any(|&b| self.is_pressed(b))
    }

    /// Sample the buttons and return at most one navigation event
    pub fn poll_navigation(&mut self, now_ms: u64) -> Option<NavigationEvent> {
        let pressed = PanelButton::ALL.map(|b| self.is_pressed(b));

        if pressed.iter().all(|&p| !p) {
            self.suppressed = false;
        }

        let combo = pressed[PanelButton::Up as usize] && pressed[PanelButton::Down as usize];
        let mut event = None;

        if combo {
            let since = *self.combo_since.get_or_insert(now_ms);
            if !self.suppressed && now_ms.saturating_sub(since) >= self.timing.reset_hold_ms as u64
            {
                self.suppressed = true;
                event = Some(NavigationEvent::Reset);
            }
        } else {
            self.combo_since = None;
        }

        for button in PanelButton::ALL {
            let i = button as usize;
            let key = &mut self.keys[i];

            if !pressed[i] {
                key.pressed = false;
                continue;
            }

            if !key.pressed {
                key.pressed = true;
                key.pressed_at = now_ms;
                key.last_event = now_ms;
                if !combo && !self.suppressed && event.is_none() {
                    event = Some(button.event());
                }
                continue;
            }

            let held = now_ms.saturating_sub(key.pressed_at);
            let since_last = now_ms.saturating_sub(key.last_event);
            if !combo
                && !self.suppressed
                && event.is_none()
                && held >= self.timing.repeat_delay_ms as u64
                && since_last >= self.timing.repeat_interval_ms as u64
            {
                key.last_event = now_ms;
                event = Some(button.event());
            }
        }

        event
    }

    /// Block until every button is up
    ///
    /// Used before a session starts so the press that chose START does
    /// not immediately interrupt it.
    pub fn wait_released<D: DelayNs>(&mut self, delay: &mut D) {
        while self.any_pressed() {
            delay.delay_ms(self.timing.release_poll_ms);
        }
        self.keys = [KeyState::default(); BUTTON_COUNT];
        self.combo_since = None;
        self.suppressed = false;
    }
}

impl<P: InputPin> InputPort for ButtonPanel<P> {
    fn any_interrupt_signal(&mut self) -> bool {
        self.any_pressed()
    }
}
