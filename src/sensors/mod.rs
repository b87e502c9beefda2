//! Sensor subsystem: unit conversions and the aggregating [`SensorHub`].
//!
//! The hub owns the latest [`SensorSnapshot`] and refreshes it from a
//! [`SensorPort`] at most once per `sensor_interval_ms`.
//!
//! Every read is matched explicitly: a good value replaces the field, a
//! failed or implausible one leaves the previous value in place.  No field
//! ever falls back to zero or a default once the hub is running.

pub mod climate;
pub mod gas;
pub mod light;
pub mod motion;
pub mod sound;

use log::{debug, info, warn};
use serde::Serialize;

use crate::app::ports::{Clock, SensorPort};
use crate::classify::{AirQuality, NoiseLevel, NoiseThresholds};
use crate::config::{ClimateValidity, GasCalibration, LightCalibration, MonitorConfig, Variant};
use motion::MotionEdge;
use sound::{MicBaseline, NoiseStats};

/// The most recent accepted reading for each sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorSnapshot {
    /// DHT11 temperature (°C).
    pub temperature_c: f32,
    /// DHT11 relative humidity (%).
    pub humidity: f32,

    /// MQ-135 CO2-equivalent estimate (ppm).
    pub co2_ppm: u32,
    /// Band of `co2_ppm`; always updated together with it.
    pub air_quality: AirQuality,

    /// LDR brightness index (0 – 1000).
    pub lux: u32,
    /// LDR divider voltage the `lux` value was derived from.
    pub light_volts: f32,

    pub noise: NoiseLevel,
    /// Last raw microphone ADC value.
    pub mic_raw: i32,
    /// Absolute difference of `mic_raw` to the calibrated baseline.
    pub mic_delta: f32,

    /// PIR output.
    pub motion: bool,
}

impl SensorSnapshot {
    /// Values shown before the first successful poll.
    pub fn initial(variant: Variant) -> Self {
        match variant {
            Variant::Mandala => Self {
                temperature_c: 22.0,
                humidity: 50.0,
                co2_ppm: 400,
                air_quality: AirQuality::classify(400),
                lux: 300,
                light_volts: 0.0,
                noise: NoiseLevel::Silence,
                mic_raw: 0,
                mic_delta: 0.0,
                motion: false,
            },
            Variant::Dashboard => Self {
                temperature_c: 0.0,
                humidity: 0.0,
                co2_ppm: 0,
                air_quality: AirQuality::classify(0),
                lux: 0,
                light_volts: 0.0,
                noise: NoiseLevel::Silence,
                mic_raw: 0,
                mic_delta: 0.0,
                motion: false,
            },
        }
    }

    /// The dashboard treats a zero temperature or humidity as "never read".
    pub fn has_climate(&self) -> bool {
        self.temperature_c != 0.0 && self.humidity != 0.0
    }
}

/// Which devices came up at startup.  Shown on the splash; the dashboard
/// uses `adc` to decide between values and "NOT CONNECTED".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeviceStatus {
    pub climate: bool,
    pub adc: bool,
    pub display: bool,
}

/// What a poll cycle produced besides the updated snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollOutcome {
    pub motion: Option<MotionEdge>,
    /// Number of reads this cycle that fell back to the previous value.
    pub fallbacks: u8,
}

/// Aggregates all sensor reads and produces a unified snapshot.
pub struct SensorHub {
    snapshot: SensorSnapshot,
    interval_ms: u64,
    last_poll_ms: Option<u64>,
    validity: ClimateValidity,
    noise_thresholds: NoiseThresholds,
    gas_cal: GasCalibration,
    light_cal: LightCalibration,
    mic_baseline: f32,
    noise_stats: NoiseStats,
    calibration_samples: u32,
    calibration_interval_ms: u64,
}

impl SensorHub {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            snapshot: SensorSnapshot::initial(config.variant),
            interval_ms: config.sensor_interval_ms,
            last_poll_ms: None,
            validity: config.climate_validity,
            noise_thresholds: config.noise,
            gas_cal: config.gas,
            light_cal: config.light,
            mic_baseline: 0.0,
            noise_stats: NoiseStats::default(),
            calibration_samples: config.mic_calibration_samples,
            calibration_interval_ms: config.mic_calibration_interval_ms,
        }
    }

    pub fn snapshot(&self) -> &SensorSnapshot {
        &self.snapshot
    }

    pub fn mic_baseline(&self) -> f32 {
        self.mic_baseline
    }

    pub fn set_mic_baseline(&mut self, baseline: f32) {
        self.mic_baseline = baseline;
    }

    pub fn noise_stats(&self) -> &NoiseStats {
        &self.noise_stats
    }

    /// Average the idle microphone level into the baseline.
    ///
    /// Failed samples are skipped; if none succeed the baseline stays where
    /// it was.  Returns the new baseline when one was measured.
    pub fn calibrate_microphone(
        &mut self,
        port: &mut impl SensorPort,
        clock: &mut impl Clock,
    ) -> Option<f32> {
        info!("Calibrating microphone ({} samples)...", self.calibration_samples);
        let mut baseline = MicBaseline::new();
        for _ in 0..self.calibration_samples {
            match port.read_mic_raw() {
                Ok(raw) => baseline.add_sample(raw),
                Err(e) => debug!("mic calibration sample failed: {}", e),
            }
            clock.sleep_ms(self.calibration_interval_ms);
        }
        match baseline.mean() {
            Some(mean) => {
                self.mic_baseline = mean;
                info!(
                    "Microphone baseline: {:.0} ({} samples)",
                    mean,
                    baseline.sample_count()
                );
                Some(mean)
            }
            None => {
                warn!("Microphone calibration got no samples, baseline stays {:.0}", self.mic_baseline);
                None
            }
        }
    }

    /// Rate-limited poll.  Returns `None` when the interval has not yet
    /// elapsed since the previous poll cycle; the snapshot is untouched.
    pub fn poll(&mut self, port: &mut impl SensorPort, now_ms: u64) -> Option<PollOutcome> {
        if let Some(last) = self.last_poll_ms {
            if now_ms.saturating_sub(last) < self.interval_ms {
                return None;
            }
        }
        self.last_poll_ms = Some(now_ms);
        Some(self.read_all(port))
    }

    /// Read every sensor once, keeping the previous value of any field
    /// whose read fails or is implausible.
    pub fn read_all(&mut self, port: &mut impl SensorPort) -> PollOutcome {
        let mut outcome = PollOutcome::default();
        let snap = &mut self.snapshot;

        match port.read_climate() {
            Ok(r) if self.validity.accepts(r.celsius, r.humidity) => {
                snap.temperature_c = r.celsius;
                snap.humidity = r.humidity;
            }
            Ok(r) => {
                debug!("DHT11: rejected {:?}, keeping last value", r);
                outcome.fallbacks += 1;
            }
            Err(e) => {
                debug!("DHT11: {}, keeping last value", e);
                outcome.fallbacks += 1;
            }
        }

        match port.read_light_volts() {
            Ok(v) if light::is_plausible(v) => {
                snap.light_volts = v;
                snap.lux = light::volts_to_lux(v, &self.light_cal);
            }
            Ok(v) => {
                debug!("LDR: implausible {:.3} V, keeping last value", v);
                outcome.fallbacks += 1;
            }
            Err(e) => {
                debug!("LDR: {}, keeping last value", e);
                outcome.fallbacks += 1;
            }
        }

        match port.read_gas_volts() {
            Ok(v) if gas::is_plausible(v) => {
                snap.co2_ppm = gas::volts_to_ppm(v, &self.gas_cal);
                snap.air_quality = AirQuality::classify(snap.co2_ppm);
            }
            Ok(v) => {
                debug!("MQ-135: implausible {:.3} V, keeping last value", v);
                outcome.fallbacks += 1;
            }
            Err(e) => {
                debug!("MQ-135: {}, keeping last value", e);
                outcome.fallbacks += 1;
            }
        }

        match port.read_mic_raw() {
            Ok(raw) => {
                let delta = sound::delta_from_baseline(raw, self.mic_baseline);
                snap.mic_raw = raw;
                snap.mic_delta = delta;
                snap.noise = self.noise_thresholds.classify(delta);
                self.noise_stats.record(snap.noise);
            }
            Err(e) => {
                debug!("Mic: {}, keeping last value", e);
                outcome.fallbacks += 1;
            }
        }

        match port.read_motion() {
            Ok(level) => {
                outcome.motion = motion::edge(snap.motion, level);
                snap.motion = level;
            }
            Err(e) => {
                debug!("PIR: {}, keeping last value", e);
                outcome.fallbacks += 1;
            }
        }

        outcome
    }
}
