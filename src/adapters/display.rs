//! LCD adapter: [`DisplayPort`] on top of the ST7789 driver.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use log::info;

use crate::app::ports::DisplayPort;
use crate::drivers::st7789::St7789;
use crate::error::DisplayError;
use crate::render::framebuffer::FrameBuffer;

pub struct LcdDisplay<SPI, DC, RST, DL> {
    panel: St7789<SPI, DC, RST>,
    delay: DL,
}

impl<SPI, DC, RST, DL> LcdDisplay<SPI, DC, RST, DL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DL: DelayNs,
{
    /// Reset and initialise the panel.  Failure here is fatal for the
    /// monitor, so it is returned rather than logged.
    pub fn init(mut panel: St7789<SPI, DC, RST>, mut delay: DL) -> Result<Self, DisplayError> {
        panel.init(&mut delay)?;
        info!("ST7789 display OK");
        Ok(Self { panel, delay })
    }
}

impl<SPI, DC, RST, DL> DisplayPort for LcdDisplay<SPI, DC, RST, DL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DL: DelayNs,
{
    fn flush(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        self.panel.write_frame(frame.pixels())
    }

    fn power_off(&mut self) -> Result<(), DisplayError> {
        self.panel.sleep(&mut self.delay)
    }
}
