//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (`env_logger` on stderr in production).

use log::{Level, debug, info, log_enabled, trace, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::classify::NoiseLevel;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started {
                variant,
                mic_baseline,
            } => {
                info!("START | variant={:?} mic_baseline={:.0}", variant, mic_baseline);
            }
            AppEvent::Telemetry {
                snapshot: s,
                fallbacks,
            } => {
                debug!(
                    "TELEM | T={:.1}\u{00b0}C H={:.0}% | CO2={}ppm ({:?}) | light={}lux ({:.2}V) | \
                     mic={} dif={:.0} {:?} | motion={} | stale={}",
                    s.temperature_c,
                    s.humidity,
                    s.co2_ppm,
                    s.air_quality,
                    s.lux,
                    s.light_volts,
                    s.mic_raw,
                    s.mic_delta,
                    s.noise,
                    s.motion,
                    fallbacks,
                );
                if log_enabled!(Level::Trace) {
                    if let Ok(json) = serde_json::to_string(s) {
                        trace!("TELEM | {}", json);
                    }
                }
            }
            AppEvent::MotionStarted => info!("PIR | motion detected"),
            AppEvent::MotionEnded => info!("PIR | idle"),
            AppEvent::MoodRecorded { mood, snapshot } => {
                info!(
                    "MOOD | {} | T={:.1} H={:.1} CO2={} light={} noise={}",
                    mood,
                    snapshot.temperature_c,
                    snapshot.humidity,
                    snapshot.co2_ppm,
                    snapshot.lux,
                    snapshot.noise.label(),
                );
            }
            AppEvent::MoodLogFailed { mood, reason } => {
                warn!("MOOD | {} not saved: {}", mood, reason);
            }
            AppEvent::PageChanged(page) => {
                info!("PAGE | {}", page.title());
            }
            AppEvent::ViewChanged { from, to } => {
                info!("VIEW | {:?} -> {:?}", from, to);
            }
            AppEvent::FrameDropped(e) => {
                warn!("LCD | frame skipped: {}", e);
            }
            AppEvent::Stopped { ticks, noise } => {
                info!("STOP | ticks={}", ticks);
                let total = noise.total();
                if total > 0 {
                    for level in NoiseLevel::ALL {
                        let n = noise.count(level);
                        info!(
                            "STOP | noise {}: {} ({:.1}%)",
                            level.label(),
                            n,
                            f64::from(n) * 100.0 / f64::from(total)
                        );
                    }
                }
            }
        }
    }
}
