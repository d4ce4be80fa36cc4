//! Settings menu layout and rendering
//!
//! ```text
//! Pneuma
//! ------------------------
//! Duration [min]  10
//! in    hold  out   keep
//! 4.0   0.0   6.0   2.0
//!
//! 4-7-8  box  gold  nat
//! START BREATHING
//! ```
//!
//! The selected value is underlined.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use pneuma_core::menu::{Menu, MenuItem};
use pneuma_core::settings::BreathingSettings;

use crate::palette::Palette;
use crate::screen::{Screen, SCREEN_COLS};

const TITLE_ROW: usize = 0;
const RULE_ROW: usize = 1;
const DURATION_ROW: usize = 2;
const PHASE_LABEL_ROW: usize = 3;
const PHASE_VALUE_ROW: usize = 4;
const PRESET_ROW: usize = 6;
const START_ROW: usize = 7;

const DURATION_COL: usize = 16;
const PHASE_COLS: [usize; 4] = [0, 6, 12, 18];
const PRESET_COLS: [usize; 4] = [0, 7, 12, 18];

/// Pixel pitch between text rows
pub const LINE_HEIGHT: i32 = 30;

/// Half-seconds as `"s.f"` seconds (`13` -> `"6.5"`)
pub fn seconds_text(half_seconds: u16) -> String<8> {
    let mut text = String::new();
    let _ = write!(text, "{}.{}", half_seconds / 2, (half_seconds % 2) * 5);
    text
}

/// Lay out the menu for `settings` with `menu`'s selection underlined
pub fn menu_screen(settings: &BreathingSettings, menu: &Menu) -> Screen {
    let mut screen = Screen::new();
    screen.set_line(TITLE_ROW, "Pneuma");
    screen.set_line(RULE_ROW, core::str::from_utf8(&[b'-'; SCREEN_COLS]).unwrap_or(""));
    screen.put(DURATION_ROW, 0, "Duration [min]");

    let mut preset_index = 0;
    for item in MenuItem::ALL {
        let (row, col, end) = match item {
            MenuItem::TotalDuration => {
                let mut value: String<8> = String::new();
                let _ = write!(value, "{}", settings.total_duration);
                let end = screen.put(DURATION_ROW, DURATION_COL, &value);
                (DURATION_ROW, DURATION_COL, end)
            }
            MenuItem::Phase(phase) => {
                let col = PHASE_COLS[phase.index()];
                screen.put(PHASE_LABEL_ROW, col, phase.label());
                let value = seconds_text(settings.half_seconds(phase));
                let end = screen.put(PHASE_VALUE_ROW, col, &value);
                (PHASE_VALUE_ROW, col, end)
            }
            MenuItem::Preset(preset) => {
                let col = PRESET_COLS[preset_index];
                preset_index += 1;
                let end = screen.put(PRESET_ROW, col, preset.name());
                (PRESET_ROW, col, end)
            }
            MenuItem::Start => {
                let end = screen.put(START_ROW, 0, item.label());
                (START_ROW, 0, end)
            }
        };

        if menu.is_selected(item) {
            screen.set_highlight(row, col as u8, end as u8);
        }
    }

    screen
}

/// Draw a screen buffer with a 10x20 font, underlining highlights
pub fn draw_screen<D>(screen: &Screen, target: &mut D, palette: Palette) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(palette.background)?;

    let style = MonoTextStyle::new(&FONT_10X20, palette.foreground);
    let char_width = FONT_10X20.character_size.width as i32;
    let char_height = FONT_10X20.character_size.height as i32;
    let origin = target.bounding_box().top_left;

    for (row, line) in screen.lines().enumerate() {
        let y = origin.y + row as i32 * LINE_HEIGHT;

        if !line.is_empty() {
            Text::with_baseline(line, Point::new(origin.x, y), style, Baseline::Top).draw(target)?;
        }

        if let Some((start, end)) = screen.get_highlight(row) {
            let underline_y = y + char_height + 2;
            Line::new(
                Point::new(origin.x + start as i32 * char_width, underline_y),
                Point::new(origin.x + end as i32 * char_width - 1, underline_y),
            )
            .into_styled(PrimitiveStyle::with_stroke(palette.foreground, 2))
            .draw(target)?;
        }
    }

    Ok(())
}
