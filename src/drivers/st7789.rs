//! Sitronix ST7789 240×240 TFT over 4-wire SPI.
//!
//! The panel is a 240×240 window into the controller's 240×320 RAM.  It is
//! mounted rotated by 270°, which puts the visible window at a column
//! offset of 80.
//!
//! Pixels are RGB565, sent big-endian.  A full frame is streamed in
//! [`CHUNK_BYTES`] pieces because `spidev` limits a single transfer to
//! 4 KiB by default.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::error::DisplayError;

pub const WIDTH: u16 = 240;
pub const HEIGHT: u16 = 240;

pub const CHUNK_BYTES: usize = 4096;

mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// 16 bits per pixel.
const COLMOD_RGB565: u8 = 0x55;

/// Memory access control plus the RAM window offset it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    pub madctl: u8,
    pub x_offset: u16,
    pub y_offset: u16,
}

impl Orientation {
    /// MV | MY: how the enclosure holds the panel.
    pub const ROTATED_270: Self = Self {
        madctl: 0xA0,
        x_offset: 80,
        y_offset: 0,
    };
}

pub struct St7789<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    orientation: Orientation,
}

impl<SPI, DC, RST> St7789<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, rst: RST, orientation: Orientation) -> Self {
        Self {
            spi,
            dc,
            rst,
            orientation,
        }
    }

    /// Hardware reset followed by the power-up command sequence.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_low().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(120);

        self.command(cmd::SWRESET, &[])?;
        delay.delay_ms(150);
        self.command(cmd::SLPOUT, &[])?;
        delay.delay_ms(10);
        self.command(cmd::COLMOD, &[COLMOD_RGB565])?;
        self.command(cmd::MADCTL, &[self.orientation.madctl])?;
        self.command(cmd::INVON, &[])?;
        self.command(cmd::NORON, &[])?;
        delay.delay_ms(10);
        self.command(cmd::DISPON, &[])?;
        delay.delay_ms(10);
        Ok(())
    }

    /// Write a full frame of `WIDTH × HEIGHT` RGB565 pixels.
    pub fn write_frame(&mut self, pixels: &[u16]) -> Result<(), DisplayError> {
        let expected = usize::from(WIDTH) * usize::from(HEIGHT);
        if pixels.len() != expected {
            return Err(DisplayError::FrameSize {
                expected,
                got: pixels.len(),
            });
        }
        self.set_window(0, 0, WIDTH - 1, HEIGHT - 1)?;
        self.command(cmd::RAMWR, &[])?;

        self.dc.set_high().map_err(|_| DisplayError::Pin)?;
        let mut buf = [0u8; CHUNK_BYTES];
        for chunk in pixels.chunks(CHUNK_BYTES / 2) {
            for (i, px) in chunk.iter().enumerate() {
                let [hi, lo] = px.to_be_bytes();
                buf[2 * i] = hi;
                buf[2 * i + 1] = lo;
            }
            self.spi
                .write(&buf[..chunk.len() * 2])
                .map_err(|_| DisplayError::Bus)?;
        }
        Ok(())
    }

    /// Display off, then sleep-in.
    pub fn sleep(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        self.command(cmd::DISPOFF, &[])?;
        self.command(cmd::SLPIN, &[])?;
        delay.delay_ms(5);
        Ok(())
    }

    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        let Orientation {
            x_offset, y_offset, ..
        } = self.orientation;
        self.command(cmd::CASET, &window_bytes(x0 + x_offset, x1 + x_offset))?;
        self.command(cmd::RASET, &window_bytes(y0 + y_offset, y1 + y_offset))
    }

    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Pin)?;
        self.spi.write(&[command]).map_err(|_| DisplayError::Bus)?;
        if !params.is_empty() {
            self.dc.set_high().map_err(|_| DisplayError::Pin)?;
            self.spi.write(params).map_err(|_| DisplayError::Bus)?;
        }
        Ok(())
    }
}

fn window_bytes(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}
