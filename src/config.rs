//! Monitor configuration parameters
//!
//! All tunable parameters for the Zenalyze monitor.  Defaults come from
//! the selected [`Variant`]; a handful of values can be overridden through
//! environment variables (usually set in the required `.env` file).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classify::NoiseThresholds;
use crate::error::ConfigError;
use crate::pins::PinAssignments;

pub const ENV_FILE: &str = ".env";
pub const DEFAULT_MOOD_LOG: &str = "data/estados_animo.csv";

/// Which of the two monitor programs runs on the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Splash screen, then the generative mandala; buttons record moods.
    Mandala,
    /// Paged numeric dashboard; buttons 1 and 3 flip pages.
    Dashboard,
}

impl Variant {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mandala" => Some(Self::Mandala),
            "dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }
}

/// When a DHT11 reading counts as valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimateValidity {
    /// Both values present and non-zero.
    NonZero,
    /// Both values present; zero is accepted.
    Present,
}

impl ClimateValidity {
    pub fn accepts(self, celsius: f32, humidity: f32) -> bool {
        if !celsius.is_finite() || !humidity.is_finite() {
            return false;
        }
        match self {
            Self::NonZero => celsius != 0.0 && humidity != 0.0,
            Self::Present => true,
        }
    }
}

/// MQ-135 voltage → CO2-equivalent ppm, linear between clean air and full scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasCalibration {
    pub clean_air_volts: f32,
    pub max_volts: f32,
    pub baseline_ppm: f32,
    pub span_ppm: f32,
    pub ceiling_ppm: f32,
}

impl Default for GasCalibration {
    fn default() -> Self {
        Self {
            clean_air_volts: 0.5,
            max_volts: 3.0,
            baseline_ppm: 400.0,
            span_ppm: 2100.0,
            ceiling_ppm: 3000.0,
        }
    }
}

/// LDR voltage → lux approximation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightCalibration {
    pub reference_volts: f32,
    pub full_scale_lux: f32,
}

impl Default for LightCalibration {
    fn default() -> Self {
        Self {
            reference_volts: 3.3,
            full_scale_lux: 1000.0,
        }
    }
}

/// Core monitor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub variant: Variant,

    // --- Timing ---
    /// Minimum time between two sensor poll cycles (milliseconds)
    pub sensor_interval_ms: u64,
    /// Sleep between loop ticks (milliseconds)
    pub frame_interval_ms: u64,
    /// Minimum time between two accepted presses of one button (milliseconds)
    pub debounce_ms: u64,
    /// How long the status splash is shown after start (milliseconds)
    pub splash_duration_ms: u64,
    /// How long the mood overlay stays on the mandala (milliseconds)
    pub overlay_duration_ms: u64,

    // --- Microphone ---
    pub noise: NoiseThresholds,
    /// Samples averaged into the microphone baseline at startup
    pub mic_calibration_samples: u32,
    /// Pause between two calibration samples (milliseconds)
    pub mic_calibration_interval_ms: u64,

    // --- Conversions ---
    pub gas: GasCalibration,
    pub light: LightCalibration,
    pub climate_validity: ClimateValidity,

    // --- Storage ---
    pub mood_log_path: PathBuf,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Mandala)
    }
}

impl MonitorConfig {
    pub fn for_variant(variant: Variant) -> Self {
        let (sensor_interval_ms, climate_validity, splash_duration_ms) = match variant {
            Variant::Mandala => (300, ClimateValidity::NonZero, 4000),
            Variant::Dashboard => (1000, ClimateValidity::Present, 0),
        };
        Self {
            variant,
            sensor_interval_ms,
            frame_interval_ms: 25, // 40 FPS
            debounce_ms: 300,
            splash_duration_ms,
            overlay_duration_ms: 3000,
            noise: NoiseThresholds::default(),
            mic_calibration_samples: 50,
            mic_calibration_interval_ms: 20,
            gas: GasCalibration::default(),
            light: LightCalibration::default(),
            climate_validity,
            mood_log_path: PathBuf::from(DEFAULT_MOOD_LOG),
        }
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production,
    /// a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let variant = match lookup("ZENALYZE_VARIANT") {
            Some(v) => Variant::parse(&v).ok_or(ConfigError::InvalidValue {
                key: "ZENALYZE_VARIANT",
                value: v,
            })?,
            None => Variant::Mandala,
        };
        let mut config = Self::for_variant(variant);

        if let Some(path) = lookup("ZENALYZE_MOOD_LOG") {
            config.mood_log_path = PathBuf::from(path);
        }
        if let Some(ms) = parse_u64(&lookup, "ZENALYZE_SENSOR_INTERVAL_MS")? {
            config.sensor_interval_ms = ms;
        }
        if let Some(ms) = parse_u64(&lookup, "ZENALYZE_SPLASH_MS")? {
            config.splash_duration_ms = ms;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("frame_interval_ms must be > 0"));
        }
        if !self.noise.is_ordered() {
            return Err(ConfigError::ValidationFailed(
                "noise thresholds must be strictly increasing",
            ));
        }
        if self.gas.max_volts <= self.gas.clean_air_volts {
            return Err(ConfigError::ValidationFailed(
                "gas max_volts must exceed clean_air_volts",
            ));
        }
        if self.light.reference_volts <= 0.0 {
            return Err(ConfigError::ValidationFailed("light reference_volts must be > 0"));
        }
        Ok(())
    }
}

fn parse_u64(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    lookup(key)
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue { key, value: v })
        })
        .transpose()
}

/// Load the required `.env` file into the process environment.
///
/// A missing file is a fatal startup error; variables already set in the
/// environment win over the file.
pub fn load_env_file(path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingEnvFile(path.display().to_string()));
    }
    dotenv::from_path(path).map_err(|e| ConfigError::EnvFile(e.to_string()))
}

/// Startup configuration: load `path` into the environment, then read the
/// pin wiring and the monitor settings from it.
pub fn load(path: &Path) -> crate::Result<(PinAssignments, MonitorConfig)> {
    load_env_file(path)?;
    let pins = PinAssignments::from_env()?;
    let config = MonitorConfig::from_env()?;
    Ok((pins, config))
}
