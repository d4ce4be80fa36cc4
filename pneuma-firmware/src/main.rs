//! Pneuma - Breath Pacing Coach Firmware
//!
//! Firmware for a Raspberry Pi Pico on the Pimoroni Pico Explorer. A pulsing
//! circle on the 240x240 TFT paces inhale, hold, exhale and keep; a piezo
//! chirp marks each phase change.
//!
//! # Wiring
//!
//! | Function        | Pin            |
//! |-----------------|----------------|
//! | Button A (up)   | GP12           |
//! | Button B (down) | GP13           |
//! | Button X (+)    | GP14           |
//! | Button Y (-)    | GP15           |
//! | Buzzer          | GP0 (PWM0 A)   |
//! | TFT DC          | GP16           |
//! | TFT CS          | GP17           |
//! | TFT SCK         | GP18 (SPI0)    |
//! | TFT MOSI        | GP19 (SPI0)    |
//!
//! The buzzer is the Explorer's AUDIO header jumpered to GP0.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use {defmt_rtt as _, panic_probe as _};

use pneuma_drivers::input::ButtonPanel;
use pneuma_hal::gpio::ActiveLevel;
use pneuma_hal_rp2040::flash::Rp2040FlashStorage;
use pneuma_hal_rp2040::gpio::Button;
use pneuma_hal_rp2040::pwm::PwmBuzzer;

use crate::app::Parts;
use crate::st7789::St7789;
use crate::timer::EmbassyClock;

mod app;
mod st7789;
mod timer;

/// TFT SPI clock
const DISPLAY_SPI_HZ: u32 = 62_500_000;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Pneuma firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Display on SPI0 (write-only)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = DISPLAY_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let dc = Output::new(p.PIN_16, Level::Low);
    let cs = Output::new(p.PIN_17, Level::High);

    let mut display = St7789::new(spi, dc, cs);
    match display.init(&mut EmbassyClock) {
        Ok(()) => info!("Display initialized"),
        Err(e) => error!("Display init failed: {}", e),
    }

    // Buttons, pressed = low
    let buttons = ButtonPanel::new(
        [
            Button::new(p.PIN_12),
            Button::new(p.PIN_13),
            Button::new(p.PIN_14),
            Button::new(p.PIN_15),
        ],
        ActiveLevel::Low,
    );

    let buzzer = PwmBuzzer::new(p.PWM_SLICE0, p.PIN_0);
    let storage = Rp2040FlashStorage::new(p.FLASH, p.DMA_CH0);

    info!("Entering menu");
    app::run(Parts {
        display,
        buzzer,
        buttons,
        storage,
    })
    .await
}
