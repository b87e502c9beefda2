//! Raspberry Pi wiring via `rppal`.
//!
//! Opens the GPIO, I2C and SPI peripherals named in [`PinAssignments`]
//! and hands them to the generic adapters.  Pins are reset to inputs when
//! the returned handles are dropped.

use anyhow::{Context, Result};
use log::{info, warn};
use rppal::gpio::{Gpio, InputPin, OutputPin};
use rppal::hal::Delay;
use rppal::i2c::I2c;
use rppal::spi::{Bus, Mode, SimpleHalSpiDevice, SlaveSelect, Spi};

use super::display::LcdDisplay;
use super::hardware::{HardwareAdapter, connect_adc};
use crate::drivers::ads1115::Ads1115;
use crate::drivers::dht11::Dht11;
use crate::drivers::st7789::{Orientation, St7789};
use crate::pins::{ADS1115_ADDR, DISPLAY_SPI_HZ, PinAssignments};

pub type RpiHardware = HardwareAdapter<I2c, InputPin, InputPin, Delay>;
pub type RpiDisplay = LcdDisplay<SimpleHalSpiDevice, OutputPin, OutputPin, Delay>;

/// Sensors and buttons.  A missing ADC or DHT11 is not fatal; the GPIO
/// controller itself is.
pub fn open_hardware(gpio: &Gpio, pins: &PinAssignments) -> Result<RpiHardware> {
    let pir = gpio
        .get(pins.pir)
        .with_context(|| format!("PIR on GPIO {}", pins.pir))?
        .into_input();

    let mut buttons = Vec::with_capacity(3);
    for pin in pins.buttons {
        let button = gpio
            .get(pin)
            .with_context(|| format!("button on GPIO {pin}"))?
            .into_input_pullup();
        buttons.push(button);
    }
    let buttons: [InputPin; 3] = buttons
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected exactly three buttons"))?;

    let adc = match I2c::new() {
        Ok(i2c) => connect_adc(Ads1115::new(i2c, ADS1115_ADDR)),
        Err(e) => {
            warn!("I2C bus unavailable: {}", e);
            None
        }
    };

    let dht = Dht11::new(&pins.dht11_iio_device);
    if dht.is_present() {
        info!("DHT11 OK ({})", pins.dht11_iio_device);
    } else {
        warn!("DHT11 IIO device not found at {}", pins.dht11_iio_device);
    }

    Ok(HardwareAdapter::new(adc, dht, pir, buttons, Delay::new()))
}

/// ST7789 on SPI0 CE0.  Any failure here stops the monitor.
pub fn open_display(gpio: &Gpio, pins: &PinAssignments) -> Result<RpiDisplay> {
    let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, DISPLAY_SPI_HZ, Mode::Mode0)
        .context("opening SPI0")?;
    let dc = gpio
        .get(pins.display_dc)
        .with_context(|| format!("display DC on GPIO {}", pins.display_dc))?
        .into_output();
    let rst = gpio
        .get(pins.display_rst)
        .with_context(|| format!("display RST on GPIO {}", pins.display_rst))?
        .into_output();

    let panel = St7789::new(SimpleHalSpiDevice::new(spi), dc, rst, Orientation::ROTATED_270);
    LcdDisplay::init(panel, Delay::new()).context("initialising ST7789")
}
