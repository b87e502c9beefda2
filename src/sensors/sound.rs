//! Analog microphone on ADS1115 channel 1.
//!
//! The module's output idles around a DC level that differs per unit, so
//! the baseline is measured at startup ([`MicBaseline`]) and the noise
//! level is classified from the absolute distance to it.

use crate::classify::NoiseLevel;

/// Running mean of calibration samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MicBaseline {
    sum: f64,
    count: u32,
}

impl MicBaseline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sample(&mut self, raw: i32) {
        self.sum += f64::from(raw);
        self.count += 1;
    }

    pub fn sample_count(&self) -> u32 {
        self.count
    }

    /// Mean of the samples, or `None` if every calibration read failed.
    pub fn mean(&self) -> Option<f32> {
        (self.count > 0).then(|| (self.sum / f64::from(self.count)) as f32)
    }
}

pub fn delta_from_baseline(raw: i32, baseline: f32) -> f32 {
    (raw as f32 - baseline).abs()
}

/// Per-band tally of microphone polls, reported at shutdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoiseStats {
    counts: [u32; 4],
}

impl NoiseStats {
    pub fn record(&mut self, level: NoiseLevel) {
        let slot = &mut self.counts[level as usize];
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, level: NoiseLevel) -> u32 {
        self.counts[level as usize]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}
