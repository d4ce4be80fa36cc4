//! ST7789 TFT Display Driver
//!
//! Driver for the 240x240 ST7789 panel on the Pico Explorer, write-only over
//! SPI with separate data/command and chip-select lines. There is no frame
//! buffer: every draw call streams pixels straight into panel RAM through an
//! address window.

use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Display dimensions
pub const WIDTH: u32 = 240;
pub const HEIGHT: u32 = 240;

/// Pixels sent per SPI write
const CHUNK_PIXELS: usize = 32;

/// ST7789 commands
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVON: u8 = 0x21;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// Display bus failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI write failed
    Spi,
    /// DC or CS pin could not be driven
    Pin,
}

/// ST7789 TFT driver
pub struct St7789<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS> St7789<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Create a new ST7789 driver
    pub fn new(spi: SPI, dc: DC, cs: CS) -> Self {
        Self { spi, dc, cs }
    }

    /// Initialize the display
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        self.command(cmd::SWRESET, &[])?;
        delay.delay_ms(150);
        self.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(10);

        self.command(cmd::COLMOD, &[0x55])?; // 16 bits per pixel
        self.command(cmd::MADCTL, &[0x00])?; // Top-left origin, RGB order
        self.command(cmd::INVON, &[])?; // IPS panel needs inversion
        self.command(cmd::NORON, &[])?;
        delay.delay_ms(10);

        self.command(cmd::DISPON, &[])?;
        delay.delay_ms(10);
        Ok(())
    }

    /// Send a command with its parameter bytes
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.transaction(|display| {
            display.write_command(command)?;
            if !params.is_empty() {
                display.write_data(params)?;
            }
            Ok(())
        })
    }

    /// Run `f` with chip select asserted
    fn transaction<F>(&mut self, f: F) -> Result<(), DisplayError>
    where
        F: FnOnce(&mut Self) -> Result<(), DisplayError>,
    {
        self.cs.set_low().map_err(|_| DisplayError::Pin)?;
        let result = f(self).and_then(|()| self.spi.flush().map_err(|_| DisplayError::Spi));
        self.cs.set_high().map_err(|_| DisplayError::Pin)?;
        result
    }

    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Pin)?;
        self.spi.write(&[command]).map_err(|_| DisplayError::Spi)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::Pin)?;
        self.spi.write(data).map_err(|_| DisplayError::Spi)
    }

    /// Set the RAM address window to `area` (must be inside the panel)
    fn set_window(&mut self, area: &Rectangle) -> Result<(), DisplayError> {
        let x0 = area.top_left.x as u16;
        let y0 = area.top_left.y as u16;
        let x1 = x0 + area.size.width as u16 - 1;
        let y1 = y0 + area.size.height as u16 - 1;

        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        self.command(cmd::CASET, &[x0h, x0l, x1h, x1l])?;

        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(cmd::RASET, &[y0h, y0l, y1h, y1l])
    }

    /// Stream `colors` into `area`, row by row
    fn write_area<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), DisplayError>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        self.set_window(area)?;
        self.transaction(|display| {
            display.write_command(cmd::RAMWR)?;
            display.dc.set_high().map_err(|_| DisplayError::Pin)?;

            let mut chunk = [0u8; CHUNK_PIXELS * 2];
            let mut len = 0;
            for color in colors {
                let [hi, lo] = RawU16::from(color).into_inner().to_be_bytes();
                chunk[len] = hi;
                chunk[len + 1] = lo;
                len += 2;
                if len == chunk.len() {
                    display.spi.write(&chunk).map_err(|_| DisplayError::Spi)?;
                    len = 0;
                }
            }
            if len > 0 {
                display
                    .spi
                    .write(&chunk[..len])
                    .map_err(|_| DisplayError::Spi)?;
            }
            Ok(())
        })
    }
}

impl<SPI, DC, CS> OriginDimensions for St7789<SPI, DC, CS> {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl<SPI, DC, CS> DrawTarget for St7789<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                let area = Rectangle::new(point, Size::new(1, 1));
                self.write_area(&area, core::iter::once(color))?;
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        if area.intersection(&self.bounding_box()) == *area {
            if area.size.width == 0 || area.size.height == 0 {
                return Ok(());
            }
            self.write_area(area, colors)
        } else {
            self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            )
        }
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }
        let count = (area.size.width * area.size.height) as usize;
        self.write_area(&area, core::iter::repeat(color).take(count))
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}
