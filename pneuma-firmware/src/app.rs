//! Application loop
//!
//! Menu mode polls the button panel every few milliseconds and redraws the
//! menu on change. Choosing START saves the settings and hands the display,
//! buzzer and buttons to a [`CycleEngine`] until the session completes or a
//! button interrupts it.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use pneuma_core::menu::{Menu, MenuAction};
use pneuma_core::session::{CycleEngine, EndChime, EngineConfig, SessionOutcome};
use pneuma_core::settings::BreathingSettings;
use pneuma_display::{draw_screen, menu_screen, CircleVisualizer, Palette};
use pneuma_drivers::cue::BuzzerCue;
use pneuma_drivers::input::ButtonPanel;
use pneuma_drivers::storage::SettingsStore;
use pneuma_hal::{FlashStorage, InputPin, ToneOutput};

use crate::timer::EmbassyClock;

/// Menu polling interval
const MENU_POLL_MS: u64 = 20;

/// Engine settings used on the device
const ENGINE_CONFIG: EngineConfig = EngineConfig {
    cue_duration_ms: pneuma_core::session::DEFAULT_CUE_DURATION_MS,
    poll_interval_ms: 0,
    end_chime: EndChime::STAY,
};

/// Board peripherals, already initialised
pub struct Parts<D, T, P, S> {
    pub display: D,
    pub buzzer: T,
    pub buttons: ButtonPanel<P>,
    pub storage: S,
}

/// Run the coach forever
pub async fn run<D, T, P, S>(parts: Parts<D, T, P, S>) -> !
where
    D: DrawTarget<Color = Rgb565>,
    T: ToneOutput,
    P: InputPin,
    S: FlashStorage,
{
    let Parts {
        mut display,
        buzzer,
        mut buttons,
        storage,
    } = parts;

    let mut cue = BuzzerCue::new(buzzer);
    let mut store = SettingsStore::new(storage);
    let palette = Palette::default();

    let mut settings = BreathingSettings::default();
    if !store.load(&mut settings).await {
        info!("Using factory defaults");
    }

    let mut menu = Menu::new();
    redraw(&mut display, &settings, &menu, palette);

    let mut ticker = Ticker::every(Duration::from_millis(MENU_POLL_MS));
    loop {
        ticker.next().await;

        let Some(event) = buttons.poll_navigation(Instant::now().as_millis()) else {
            continue;
        };
        debug!("Navigation: {}", event);

        match menu.handle(event, &mut settings) {
            MenuAction::None => {}
            MenuAction::Redraw => redraw(&mut display, &settings, &menu, palette),
            MenuAction::StartSession => {
                if let Err(e) = store.save(&settings).await {
                    warn!("Settings save failed: {}", e);
                }

                buttons.wait_released(&mut EmbassyClock);
                display = run_session(display, &mut cue, &mut buttons, &settings, palette);
                buttons.wait_released(&mut EmbassyClock);

                redraw(&mut display, &settings, &menu, palette);
                ticker.reset();
            }
            MenuAction::FactoryReset => {
                if let Err(e) = store.reset(&mut settings).await {
                    warn!("Stored settings not cleared: {}", e);
                }
                redraw(&mut display, &settings, &menu, palette);
            }
        }
    }
}

/// Run one breathing session and give the display back
fn run_session<D, T, P>(
    display: D,
    cue: &mut BuzzerCue<T>,
    buttons: &mut ButtonPanel<P>,
    settings: &BreathingSettings,
    palette: Palette,
) -> D
where
    D: DrawTarget<Color = Rgb565>,
    T: ToneOutput,
    P: InputPin,
{
    info!(
        "Session start: {} min, half-seconds {}",
        settings.total_duration, settings.half_seconds
    );

    let visualizer = CircleVisualizer::new(display, palette);
    let mut engine =
        CycleEngine::new(visualizer, cue, buttons, EmbassyClock).with_config(ENGINE_CONFIG);
    let report = engine.run(settings);

    match report.outcome {
        SessionOutcome::Completed => info!(
            "Session complete: {} cycles in {} ms",
            report.cycles, report.elapsed_ms
        ),
        SessionOutcome::Interrupted => info!(
            "Session interrupted after {} cycles, {} ms",
            report.cycles, report.elapsed_ms
        ),
    }

    let (visualizer, _, _, _) = engine.into_parts();
    visualizer.into_inner()
}

fn redraw<D>(display: &mut D, settings: &BreathingSettings, menu: &Menu, palette: Palette)
where
    D: DrawTarget<Color = Rgb565>,
{
    let screen = menu_screen(settings, menu);
    if draw_screen(&screen, display, palette).is_err() {
        warn!("Menu draw failed");
    }
}
