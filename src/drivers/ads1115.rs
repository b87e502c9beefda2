//! TI ADS1115 16-bit I2C ADC, single-shot mode.
//!
//! Three single-ended inputs are used: LDR (AIN0), microphone (AIN1) and
//! MQ-135 (AIN2).  Each conversion is started by writing the config
//! register, then the result is read back after the conversion time.
//!
//! Settings: PGA ±4.096 V, 128 SPS, comparator disabled.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

const REG_CONVERSION: u8 = 0x00;
const REG_CONFIG: u8 = 0x01;

/// OS = 1: start a single conversion.
const CFG_OS_SINGLE: u16 = 0x8000;
/// PGA = 001: ±4.096 V full scale.
const CFG_PGA_4V096: u16 = 0b001 << 9;
/// MODE = 1: single-shot.
const CFG_MODE_SINGLE: u16 = 1 << 8;
/// DR = 100: 128 samples per second.
const CFG_DR_128SPS: u16 = 0b100 << 5;
/// COMP_QUE = 11: comparator off.
const CFG_COMP_DISABLE: u16 = 0b11;

/// One conversion at 128 SPS takes ~7.8 ms.
const CONVERSION_DELAY_US: u32 = 9_000;

pub const FULL_SCALE_VOLTS: f32 = 4.096;

pub struct Ads1115<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Ads1115<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn config_word(channel: u8) -> u16 {
        let mux = (0b100 | u16::from(channel & 0b11)) << 12;
        CFG_OS_SINGLE | mux | CFG_PGA_4V096 | CFG_MODE_SINGLE | CFG_DR_128SPS | CFG_COMP_DISABLE
    }

    /// Probe by reading the config register.
    pub fn probe(&mut self) -> Result<(), I2C::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(self.address, &[REG_CONFIG], &mut buf)
    }

    /// Raw signed conversion result for single-ended `channel` (0–3).
    pub fn read_raw(&mut self, channel: u8, delay: &mut impl DelayNs) -> Result<i16, I2C::Error> {
        let [hi, lo] = Self::config_word(channel).to_be_bytes();
        self.i2c.write(self.address, &[REG_CONFIG, hi, lo])?;
        delay.delay_us(CONVERSION_DELAY_US);
        let mut buf = [0u8; 2];
        self.i2c.write_read(self.address, &[REG_CONVERSION], &mut buf)?;
        Ok(i16::from_be_bytes(buf))
    }

    pub fn read_volts(&mut self, channel: u8, delay: &mut impl DelayNs) -> Result<f32, I2C::Error> {
        self.read_raw(channel, delay).map(raw_to_volts)
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

pub fn raw_to_volts(raw: i16) -> f32 {
    f32::from(raw) * FULL_SCALE_VOLTS / 32768.0
}
