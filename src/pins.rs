//! GPIO / peripheral pin assignments for the Zenalyze box (BCM numbering).
//!
//! Single source of truth: every adapter references this module rather
//! than hard-coding pin numbers.  Each pin can be moved through an
//! environment variable; the constants below are the wired defaults.

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Sensors, Digital
// ---------------------------------------------------------------------------

/// HC-SR501 PIR motion sensor. HIGH = motion.
pub const PIR_GPIO: u8 = 14;

// ---------------------------------------------------------------------------
// Sensors, Analog (ADS1115 on I²C-1, address 0x48)
// ---------------------------------------------------------------------------

pub const ADS1115_ADDR: u8 = 0x48;
/// LDR voltage divider.
pub const ADC_CH_LIGHT: u8 = 0;
/// Electret microphone module, analog out.
pub const ADC_CH_MIC: u8 = 1;
/// MQ-135 gas sensor, analog out.
pub const ADC_CH_GAS: u8 = 2;

/// DHT11 is served by the kernel `dht11` IIO driver (dtoverlay=dht11,gpiopin=23).
pub const DHT11_IIO_DEVICE: &str = "/sys/bus/iio/devices/iio:device0";

// ---------------------------------------------------------------------------
// Mood buttons (active-low, internal pull-up)
// ---------------------------------------------------------------------------

pub const BUTTON_1_GPIO: u8 = 16;
pub const BUTTON_2_GPIO: u8 = 20;
pub const BUTTON_3_GPIO: u8 = 21;

// ---------------------------------------------------------------------------
// ST7789 240×240 display on SPI0 CE0
// ---------------------------------------------------------------------------

pub const DISPLAY_DC_GPIO: u8 = 24;
pub const DISPLAY_RST_GPIO: u8 = 25;
pub const DISPLAY_SPI_HZ: u32 = 40_000_000;

/// Resolved pin map, after environment overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinAssignments {
    pub pir: u8,
    pub buttons: [u8; 3],
    pub display_dc: u8,
    pub display_rst: u8,
    pub dht11_iio_device: String,
}

impl Default for PinAssignments {
    fn default() -> Self {
        Self {
            pir: PIR_GPIO,
            buttons: [BUTTON_1_GPIO, BUTTON_2_GPIO, BUTTON_3_GPIO],
            display_dc: DISPLAY_DC_GPIO,
            display_rst: DISPLAY_RST_GPIO,
            dht11_iio_device: DHT11_IIO_DEVICE.to_string(),
        }
    }
}

impl PinAssignments {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let pin = |key: &'static str, default: u8| -> Result<u8, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(v) => match v.trim().parse::<u8>() {
                    Ok(n) if n <= 27 => Ok(n),
                    _ => Err(ConfigError::InvalidValue { key, value: v }),
                },
            }
        };

        let pins = Self {
            pir: pin("PIN_PIR", PIR_GPIO)?,
            buttons: [
                pin("PIN_BTN1", BUTTON_1_GPIO)?,
                pin("PIN_BTN2", BUTTON_2_GPIO)?,
                pin("PIN_BTN3", BUTTON_3_GPIO)?,
            ],
            display_dc: pin("PIN_DISPLAY_DC", DISPLAY_DC_GPIO)?,
            display_rst: pin("PIN_DISPLAY_RST", DISPLAY_RST_GPIO)?,
            dht11_iio_device: lookup("DHT11_IIO_DEVICE")
                .unwrap_or_else(|| DHT11_IIO_DEVICE.to_string()),
        };
        pins.validate()?;
        Ok(pins)
    }

    /// No GPIO may be claimed twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            self.pir,
            self.buttons[0],
            self.buttons[1],
            self.buttons[2],
            self.display_dc,
            self.display_rst,
        ];
        for (i, a) in all.iter().enumerate() {
            if all[i + 1..].contains(a) {
                return Err(ConfigError::ValidationFailed("a GPIO is assigned twice"));
            }
        }
        Ok(())
    }
}
