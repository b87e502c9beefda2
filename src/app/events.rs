//! Outbound application events.
//!
//! The [`Monitor`](super::service::Monitor) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  The log adapter turns them
//! into console lines; tests record them to assert on behaviour.

use crate::config::Variant;
use crate::error::DisplayError;
use crate::mood::Mood;
use crate::render::{Page, View};
use crate::sensors::SensorSnapshot;
use crate::sensors::sound::NoiseStats;

/// Structured events emitted by the monitor core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The loop is about to run its first tick.
    Started { variant: Variant, mic_baseline: f32 },

    /// A sensor poll cycle completed (rate-limited, not every tick).
    /// `fallbacks` counts the reads that kept their previous value.
    Telemetry {
        snapshot: SensorSnapshot,
        fallbacks: u8,
    },

    /// PIR went high.
    MotionStarted,

    /// PIR went low.
    MotionEnded,

    /// A mood was appended to the log.
    MoodRecorded { mood: Mood, snapshot: SensorSnapshot },

    /// Appending to the log failed; the loop carries on.
    MoodLogFailed { mood: Mood, reason: String },

    /// Dashboard page changed by a button.
    PageChanged(Page),

    /// The active view changed (splash dismissed or page turned).
    ViewChanged { from: View, to: View },

    /// A frame could not be pushed to the display and was skipped.
    FrameDropped(DisplayError),

    /// The loop has exited and the display is off.
    Stopped { ticks: u64, noise: NoiseStats },
}
