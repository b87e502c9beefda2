//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the ADC driver, the DHT11 handle, the PIR pin and the three
//! button pins, exposing them through [`SensorPort`] and [`ButtonPort`].
//! It is generic over the `embedded-hal` traits, so the same code runs on
//! rppal in production and on mock pins in the integration tests.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal::i2c::I2c;
use log::{info, warn};

use crate::app::ports::{ButtonPort, SensorPort};
use crate::drivers::ads1115::Ads1115;
use crate::drivers::button::ButtonId;
use crate::drivers::dht11::Dht11;
use crate::error::SensorError;
use crate::pins::{ADC_CH_GAS, ADC_CH_LIGHT, ADC_CH_MIC};
use crate::sensors::DeviceStatus;
use crate::sensors::climate::ClimateReading;

/// Probe the ADC once; a missing ADC turns every analog read into
/// [`SensorError::NotConnected`] for the rest of the run.
pub fn connect_adc<I2C: I2c>(mut adc: Ads1115<I2C>) -> Option<Ads1115<I2C>> {
    match adc.probe() {
        Ok(()) => {
            info!("ADS1115 OK");
            Some(adc)
        }
        Err(e) => {
            warn!("ADS1115 not found: {:?}", e);
            None
        }
    }
}

/// Concrete adapter that combines all sensor and button hardware.
pub struct HardwareAdapter<I2C, PIR, BTN, DL> {
    adc: Option<Ads1115<I2C>>,
    dht: Dht11,
    pir: PIR,
    buttons: [BTN; 3],
    delay: DL,
}

impl<I2C, PIR, BTN, DL> HardwareAdapter<I2C, PIR, BTN, DL>
where
    I2C: I2c,
    PIR: InputPin,
    BTN: InputPin,
    DL: DelayNs,
{
    pub fn new(
        adc: Option<Ads1115<I2C>>,
        dht: Dht11,
        pir: PIR,
        buttons: [BTN; 3],
        delay: DL,
    ) -> Self {
        Self {
            adc,
            dht,
            pir,
            buttons,
            delay,
        }
    }

    /// Sensor side of the startup status (the display is reported by
    /// its own adapter).
    pub fn status(&self) -> DeviceStatus {
        DeviceStatus {
            climate: self.dht.is_present(),
            adc: self.adc.is_some(),
            display: false,
        }
    }

    fn adc_raw(&mut self, channel: u8) -> Result<i16, SensorError> {
        let adc = self.adc.as_mut().ok_or(SensorError::NotConnected)?;
        adc.read_raw(channel, &mut self.delay)
            .map_err(|_| SensorError::BusFailed)
    }

    fn adc_volts(&mut self, channel: u8) -> Result<f32, SensorError> {
        let adc = self.adc.as_mut().ok_or(SensorError::NotConnected)?;
        adc.read_volts(channel, &mut self.delay)
            .map_err(|_| SensorError::BusFailed)
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<I2C, PIR, BTN, DL> SensorPort for HardwareAdapter<I2C, PIR, BTN, DL>
where
    I2C: I2c,
    PIR: InputPin,
    BTN: InputPin,
    DL: DelayNs,
{
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        self.dht.read()
    }

    fn read_light_volts(&mut self) -> Result<f32, SensorError> {
        self.adc_volts(ADC_CH_LIGHT)
    }

    fn read_gas_volts(&mut self) -> Result<f32, SensorError> {
        self.adc_volts(ADC_CH_GAS)
    }

    fn read_mic_raw(&mut self) -> Result<i32, SensorError> {
        self.adc_raw(ADC_CH_MIC).map(i32::from)
    }

    fn read_motion(&mut self) -> Result<bool, SensorError> {
        self.pir.is_high().map_err(|_| SensorError::GpioReadFailed)
    }
}

// ── ButtonPort implementation ─────────────────────────────────

impl<I2C, PIR, BTN, DL> ButtonPort for HardwareAdapter<I2C, PIR, BTN, DL>
where
    I2C: I2c,
    PIR: InputPin,
    BTN: InputPin,
    DL: DelayNs,
{
    fn is_pressed(&mut self, button: ButtonId) -> Result<bool, SensorError> {
        // pull-up: low while held
        self.buttons[button.index()]
            .is_low()
            .map_err(|_| SensorError::GpioReadFailed)
    }
}
