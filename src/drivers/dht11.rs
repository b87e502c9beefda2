//! DHT11 through the kernel `dht11` IIO driver.
//!
//! With `dtoverlay=dht11,gpiopin=23` the kernel does the single-wire timing
//! and exposes the last reading under sysfs:
//!
//! - `in_temp_input`: milli-degrees Celsius
//! - `in_humidityrelative_input`: milli-percent
//!
//! A read that fails its checksum surfaces as `EIO`/`ETIMEDOUT` on the
//! file read; that is reported as [`SensorError::NoData`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SensorError;
use crate::sensors::climate::ClimateReading;

const TEMP_FILE: &str = "in_temp_input";
const HUMIDITY_FILE: &str = "in_humidityrelative_input";

pub struct Dht11 {
    device_dir: PathBuf,
}

impl Dht11 {
    pub fn new(device_dir: impl Into<PathBuf>) -> Self {
        Self {
            device_dir: device_dir.into(),
        }
    }

    /// `true` if the IIO device directory exists.
    pub fn is_present(&self) -> bool {
        self.device_dir.join(TEMP_FILE).exists()
    }

    pub fn read(&self) -> Result<ClimateReading, SensorError> {
        let celsius = read_milli(&self.device_dir.join(TEMP_FILE))?;
        let humidity = read_milli(&self.device_dir.join(HUMIDITY_FILE))?;
        if !(0.0..=100.0).contains(&humidity) {
            return Err(SensorError::OutOfRange);
        }
        Ok(ClimateReading::new(celsius, humidity))
    }
}

fn read_milli(path: &Path) -> Result<f32, SensorError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SensorError::NotConnected,
        _ => SensorError::NoData,
    })?;
    let milli: i32 = text.trim().parse().map_err(|_| SensorError::NoData)?;
    Ok(milli as f32 / 1000.0)
}
