//! Threshold classification of continuous readings into named bands.
//!
//! Every classifier is a pure function over fixed breakpoints.  All of
//! them use strict `<`: a value sitting exactly on a breakpoint belongs to
//! the band above it.  The one exception is [`LightLevel`], which keeps the
//! `lux > 200` rule the mandala has always used.
//!
//! NaN compares false against every breakpoint and therefore lands in the
//! highest band, so each classifier stays total.

use serde::{Deserialize, Serialize};

/// Index of the band `value` falls into: the first breakpoint it is
/// strictly below, or `breakpoints.len()` if none.
///
/// `breakpoints` must be sorted ascending.
pub fn band_index(value: f32, breakpoints: &[f32]) -> usize {
    breakpoints
        .iter()
        .position(|&bp| value < bp)
        .unwrap_or(breakpoints.len())
}

// ---------------------------------------------------------------------------
// Noise
// ---------------------------------------------------------------------------

/// Microphone noise level, from the difference to the calibrated baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NoiseLevel {
    Silence,
    Low,
    Medium,
    High,
}

impl NoiseLevel {
    pub const ALL: [Self; 4] = [Self::Silence, Self::Low, Self::Medium, Self::High];

    /// Label written to the mood log.
    pub fn label(self) -> &'static str {
        match self {
            Self::Silence => "silencio",
            Self::Low => "bajo",
            Self::Medium => "medio",
            Self::High => "alto",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.label() == label)
    }

    /// Upper-case word for the dashboard.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Silence => "SILENCE",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Breakpoints on the raw-ADC difference from baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseThresholds {
    pub low: f32,
    pub medium: f32,
    pub high: f32,
}

impl Default for NoiseThresholds {
    fn default() -> Self {
        Self {
            low: 300.0,
            medium: 800.0,
            high: 1500.0,
        }
    }
}

impl NoiseThresholds {
    pub fn classify(&self, delta: f32) -> NoiseLevel {
        NoiseLevel::ALL[band_index(delta, &[self.low, self.medium, self.high])]
    }

    pub fn is_ordered(&self) -> bool {
        self.low < self.medium && self.medium < self.high
    }
}

// ---------------------------------------------------------------------------
// Air quality
// ---------------------------------------------------------------------------

/// CO2-equivalent air quality, four bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AirQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

const AIR_QUALITY_BREAKPOINTS_PPM: [f32; 3] = [600.0, 800.0, 1000.0];

impl AirQuality {
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    pub fn classify(ppm: u32) -> Self {
        Self::ALL[band_index(ppm as f32, &AIR_QUALITY_BREAKPOINTS_PPM)]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }
}

// ---------------------------------------------------------------------------
// Light
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightLevel {
    Dim,
    Bright,
}

pub const BRIGHT_ABOVE_LUX: u32 = 200;

impl LightLevel {
    pub fn classify(lux: u32) -> Self {
        if lux > BRIGHT_ABOVE_LUX {
            Self::Bright
        } else {
            Self::Dim
        }
    }
}

// ---------------------------------------------------------------------------
// Temperature
// ---------------------------------------------------------------------------

/// Colour band for the mandala's outer ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemperatureBand {
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
}

const TEMPERATURE_BREAKPOINTS_C: [f32; 4] = [18.0, 22.0, 25.0, 28.0];

impl TemperatureBand {
    pub const ALL: [Self; 5] = [Self::Cold, Self::Cool, Self::Mild, Self::Warm, Self::Hot];

    pub fn classify(celsius: f32) -> Self {
        Self::ALL[band_index(celsius, &TEMPERATURE_BREAKPOINTS_C)]
    }
}
