//! Settings menu
//!
//! A single cursor over ten lines. Up/Down move the cursor with
//! wrap-around; Increase/Decrease act on the line under it.

use super::events::{MenuAction, NavigationEvent};
use crate::settings::{
    min_half_seconds, BreathingSettings, Phase, Preset, MAX_HALF_SECONDS, MAX_TOTAL_DURATION,
    MIN_TOTAL_DURATION,
};

/// Number of selectable lines
pub const MENU_LEN: usize = 10;

/// One selectable menu line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    /// Session length in minutes
    TotalDuration,
    /// Duration of one phase
    Phase(Phase),
    /// Apply a preset
    Preset(Preset),
    /// Start a session
    Start,
}

impl MenuItem {
    /// Lines in display order
    pub const ALL: [MenuItem; MENU_LEN] = [
        MenuItem::TotalDuration,
        MenuItem::Phase(Phase::In),
        MenuItem::Phase(Phase::Hold),
        MenuItem::Phase(Phase::Out),
        MenuItem::Phase(Phase::Stay),
        MenuItem::Preset(Preset::FourSevenEight),
        MenuItem::Preset(Preset::Box),
        MenuItem::Preset(Preset::Golden),
        MenuItem::Preset(Preset::Natural),
        MenuItem::Start,
    ];

    /// Label shown for this line
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::TotalDuration => "min",
            MenuItem::Phase(phase) => phase.label(),
            MenuItem::Preset(preset) => preset.name(),
            MenuItem::Start => "START BREATHING",
        }
    }
}

/// Menu cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Menu {
    selected: u8,
}

impl Menu {
    /// Create a menu with the first line selected
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Index of the selected line
    pub fn selected(&self) -> usize {
        self.selected as usize
    }

    /// The selected line
    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected()]
    }

    /// Check if `item` is under the cursor
    pub fn is_selected(&self, item: MenuItem) -> bool {
        self.selected_item() == item
    }

    /// Process a navigation event
    pub fn handle(
        &mut self,
        event: NavigationEvent,
        settings: &mut BreathingSettings,
    ) -> MenuAction {
        match event {
            NavigationEvent::Up => {
                self.selected = if self.selected == 0 {
                    (MENU_LEN - 1) as u8
                } else {
                    self.selected - 1
                };
                MenuAction::Redraw
            }
            NavigationEvent::Down => {
                self.selected = (self.selected + 1) % MENU_LEN as u8;
                MenuAction::Redraw
            }
            NavigationEvent::Increase => self.activate(settings, 1),
            NavigationEvent::Decrease => self.activate(settings, -1),
            NavigationEvent::Reset => {
                settings.reset();
                self.selected = 0;
                MenuAction::FactoryReset
            }
        }
    }

    fn activate(&self, settings: &mut BreathingSettings, delta: i8) -> MenuAction {
        match self.selected_item() {
            MenuItem::TotalDuration => {
                let value = step(
                    settings.total_duration,
                    delta,
                    MIN_TOTAL_DURATION,
                    MAX_TOTAL_DURATION,
                );
                changed(&mut settings.total_duration, value)
            }
            MenuItem::Phase(phase) => {
                let value = step(
                    settings.half_seconds(phase),
                    delta,
                    min_half_seconds(phase),
                    MAX_HALF_SECONDS,
                );
                changed(&mut settings.half_seconds[phase.index()], value)
            }
            MenuItem::Preset(preset) => {
                settings.apply_preset(preset);
                MenuAction::Redraw
            }
            MenuItem::Start => MenuAction::StartSession,
        }
    }
}

/// Move `value` by one in the direction of `delta`, staying in `min..=max`
fn step(value: u16, delta: i8, min: u16, max: u16) -> u16 {
    let next = if delta < 0 {
        value.saturating_sub(1)
    } else {
        value.saturating_add(1)
    };
    next.clamp(min, max)
}

fn changed(field: &mut u16, value: u16) -> MenuAction {
    if *field == value {
        MenuAction::None
    } else {
        *field = value;
        MenuAction::Redraw
    }
}
