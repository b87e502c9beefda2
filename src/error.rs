//! Unified error types for the Zenalyze monitor.
//!
//! A single `Error` enum that every subsystem can convert into, so `main`
//! can hand it to `anyhow`.  Inside the loop most of these never escape:
//! sensor errors select the last-known-good fallback, display and log
//! errors are reported and the tick carries on.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum Error {
    /// A sensor could not be read or returned implausible data.
    Sensor(SensorError),
    /// The LCD could not be initialised or written.
    Display(DisplayError),
    /// A mood event could not be appended to the log.
    MoodLog(MoodLogError),
    /// Configuration is missing or invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::MoodLog(e) => write!(f, "mood log: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The device was not found at startup; reads are skipped.
    NotConnected,
    /// I2C transaction to the ADC failed.
    BusFailed,
    /// GPIO level could not be read.
    GpioReadFailed,
    /// The sensor answered but had no data this cycle (DHT11 checksum, EIO).
    NoData,
    /// Reading is outside the physically plausible range.
    OutOfRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConnected => write!(f, "not connected"),
            Self::BusFailed => write!(f, "bus transaction failed"),
            Self::GpioReadFailed => write!(f, "GPIO read failed"),
            Self::NoData => write!(f, "no data"),
            Self::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

impl std::error::Error for SensorError {}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Display errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// SPI write failed.
    Bus,
    /// Data/command or reset pin could not be driven.
    Pin,
    /// Frame size does not match the panel.
    FrameSize { expected: usize, got: usize },
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus => write!(f, "SPI write failed"),
            Self::Pin => write!(f, "control pin write failed"),
            Self::FrameSize { expected, got } => {
                write!(f, "frame has {got} pixels, panel needs {expected}")
            }
        }
    }
}

impl std::error::Error for DisplayError {}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

// ---------------------------------------------------------------------------
// Mood log errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum MoodLogError {
    /// Creating the parent directory, opening or appending failed.
    Io(std::io::Error),
    /// A line read back from the log did not parse.
    Malformed { line: String, reason: &'static str },
}

impl fmt::Display for MoodLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Malformed { line, reason } => write!(f, "malformed record ({reason}): {line}"),
        }
    }
}

impl std::error::Error for MoodLogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Malformed { .. } => None,
        }
    }
}

impl From<std::io::Error> for MoodLogError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<MoodLogError> for Error {
    fn from(e: MoodLogError) -> Self {
        Self::MoodLog(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The required `.env` file does not exist.
    MissingEnvFile(String),
    /// The `.env` file exists but could not be parsed.
    EnvFile(String),
    /// A variable is set but its value does not parse.
    InvalidValue { key: &'static str, value: String },
    /// A value parsed but failed range validation.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEnvFile(path) => write!(f, "{path} not found"),
            Self::EnvFile(msg) => write!(f, "could not load env file: {msg}"),
            Self::InvalidValue { key, value } => write!(f, "{key}={value:?} is not valid"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

pub type Result<T> = core::result::Result<T, Error>;
