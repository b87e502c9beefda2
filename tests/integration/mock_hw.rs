//! Mock adapters for integration tests.
//!
//! Scripted sensor values, held buttons, a recording display and an
//! in-memory mood log, so tests can drive the monitor tick by tick and
//! assert on everything it touched.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{NaiveDate, NaiveDateTime};

use zenalyze::app::events::AppEvent;
use zenalyze::app::ports::{
    ButtonPort, Clock, DisplayPort, EventSink, MoodSink, Now, SensorPort,
};
use zenalyze::app::service::DeviceContext;
use zenalyze::drivers::button::ButtonId;
use zenalyze::error::{DisplayError, MoodLogError, SensorError};
use zenalyze::mood::MoodEvent;
use zenalyze::render::framebuffer::FrameBuffer;
use zenalyze::sensors::DeviceStatus;
use zenalyze::sensors::climate::ClimateReading;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub climate: Result<ClimateReading, SensorError>,
    pub light_volts: Result<f32, SensorError>,
    pub gas_volts: Result<f32, SensorError>,
    pub mic_raw: Result<i32, SensorError>,
    pub motion: Result<bool, SensorError>,
    pub held: [bool; 3],
    pub polls: u32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn healthy() -> Self {
        Self {
            climate: Ok(ClimateReading::new(24.0, 61.0)),
            light_volts: Ok(1.65),
            gas_volts: Ok(1.75),
            mic_raw: Ok(1000),
            motion: Ok(false),
            held: [false; 3],
            polls: 0,
        }
    }

    /// Every read fails as if the ADC and DHT11 were unplugged.
    pub fn disconnected() -> Self {
        Self {
            climate: Err(SensorError::NotConnected),
            light_volts: Err(SensorError::NotConnected),
            gas_volts: Err(SensorError::NotConnected),
            mic_raw: Err(SensorError::NotConnected),
            motion: Err(SensorError::GpioReadFailed),
            held: [false; 3],
            polls: 0,
        }
    }

    pub fn press(&mut self, button: ButtonId) {
        self.held[button.index()] = true;
    }

    pub fn release(&mut self, button: ButtonId) {
        self.held[button.index()] = false;
    }
}

impl SensorPort for MockHardware {
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        self.polls += 1;
        self.climate
    }

    fn read_light_volts(&mut self) -> Result<f32, SensorError> {
        self.light_volts
    }

    fn read_gas_volts(&mut self) -> Result<f32, SensorError> {
        self.gas_volts
    }

    fn read_mic_raw(&mut self) -> Result<i32, SensorError> {
        self.mic_raw
    }

    fn read_motion(&mut self) -> Result<bool, SensorError> {
        self.motion
    }
}

impl ButtonPort for MockHardware {
    fn is_pressed(&mut self, button: ButtonId) -> Result<bool, SensorError> {
        Ok(self.held[button.index()])
    }
}

// ── MockDisplay ───────────────────────────────────────────────

#[derive(Default)]
pub struct MockDisplay {
    pub frames: u32,
    pub fail: bool,
    pub powered_off: bool,
}

impl DisplayPort for MockDisplay {
    fn flush(&mut self, _frame: &FrameBuffer) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Bus);
        }
        self.frames += 1;
        Ok(())
    }

    fn power_off(&mut self) -> Result<(), DisplayError> {
        self.powered_off = true;
        Ok(())
    }
}

// ── MemoryMoodLog ─────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryMoodLog {
    pub events: Vec<MoodEvent>,
    pub fail: bool,
}

impl MoodSink for MemoryMoodLog {
    fn record(&mut self, event: &MoodEvent) -> Result<(), MoodLogError> {
        if self.fail {
            return Err(MoodLogError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }
        self.events.push(*event);
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── MockClock ─────────────────────────────────────────────────

/// Manual clock.  `sleep_ms` advances it; `stop_after` lets the runner
/// tests end the loop after a fixed number of sleeps.
pub struct MockClock {
    pub mono_ms: u64,
    pub sleeps: u32,
    pub stop_after: Option<(u32, Arc<AtomicBool>)>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn new() -> Self {
        Self {
            mono_ms: 0,
            sleeps: 0,
            stop_after: None,
        }
    }

    pub fn stopping_after(sleeps: u32, stop: &Arc<AtomicBool>) -> Self {
        Self {
            stop_after: Some((sleeps, Arc::clone(stop))),
            ..Self::new()
        }
    }
}

impl Clock for MockClock {
    fn now(&self) -> Now {
        at(self.mono_ms)
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.mono_ms += ms;
        self.sleeps += 1;
        if let Some((n, stop)) = &self.stop_after {
            if self.sleeps >= *n {
                stop.store(true, Ordering::Relaxed);
            }
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────

pub fn wall() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

/// A `Now` at `mono_ms`, with the wall clock advancing alongside.
pub fn at(mono_ms: u64) -> Now {
    Now {
        mono_ms,
        wall: wall() + chrono::Duration::milliseconds(mono_ms as i64),
    }
}

pub fn context(hw: MockHardware) -> DeviceContext<MockHardware, MockDisplay> {
    DeviceContext::new(
        hw,
        MockDisplay::default(),
        DeviceStatus {
            climate: true,
            adc: true,
            display: true,
        },
        "192.168.1.20",
    )
}
