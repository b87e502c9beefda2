//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Monitor (domain)
//! ```
//!
//! Driven adapters (sensors, buttons, display, mood log, event sinks,
//! clock) implement these traits.  The [`Monitor`](super::service::Monitor)
//! consumes them via generics, so the domain core never touches hardware
//! directly and every tick can be driven from tests with synthetic time.

use chrono::NaiveDateTime;

use crate::drivers::button::ButtonId;
use crate::error::{DisplayError, MoodLogError, SensorError};
use crate::mood::MoodEvent;
use crate::render::framebuffer::FrameBuffer;
use crate::sensors::climate::ClimateReading;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Raw sensor reads.  Every call may fail; the
/// [`SensorHub`](crate::sensors::SensorHub) decides what a failure means
/// (keep the last good value).
pub trait SensorPort {
    /// DHT11 temperature (°C) and relative humidity (%).
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError>;

    /// LDR divider voltage.
    fn read_light_volts(&mut self) -> Result<f32, SensorError>;

    /// MQ-135 analog output voltage.
    fn read_gas_volts(&mut self) -> Result<f32, SensorError>;

    /// Raw signed 16-bit ADC value of the microphone channel.
    fn read_mic_raw(&mut self) -> Result<i32, SensorError>;

    /// PIR level, `true` = motion.
    fn read_motion(&mut self) -> Result<bool, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Button port
// ───────────────────────────────────────────────────────────────

pub trait ButtonPort {
    /// `true` while the button is held down (already inverted for
    /// active-low wiring).
    fn is_pressed(&mut self, button: ButtonId) -> Result<bool, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → LCD)
// ───────────────────────────────────────────────────────────────

pub trait DisplayPort {
    /// Push a complete frame to the panel.
    fn flush(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError>;

    /// Blank the panel and put it to sleep; called on the shutdown path.
    fn power_off(&mut self) -> Result<(), DisplayError>;
}

// ───────────────────────────────────────────────────────────────
// Mood log port
// ───────────────────────────────────────────────────────────────

/// Append-only store of mood events.
pub trait MoodSink {
    fn record(&mut self, event: &MoodEvent) -> Result<(), MoodLogError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// One reading of both clocks, taken at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Now {
    /// Monotonic milliseconds since the monitor started.
    pub mono_ms: u64,
    /// Local wall-clock time, used only for mood timestamps.
    pub wall: NaiveDateTime,
}

pub trait Clock {
    fn now(&self) -> Now;

    fn sleep_ms(&mut self, ms: u64);
}
