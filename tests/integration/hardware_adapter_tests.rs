//! HardwareAdapter against mock I2C, mock GPIO and a fake IIO directory.
//!
//! Covers the ADC channel routing, active-low buttons and the startup
//! status, then drives a full monitor tick through the real adapter.

use std::cell::Cell;
use std::convert::Infallible;
use std::fs;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, InputPin};
use embedded_hal::i2c::{ErrorKind, ErrorType as I2cErrorType, I2c, Operation};

use zenalyze::adapters::hardware::{HardwareAdapter, connect_adc};
use zenalyze::app::ports::{ButtonPort, SensorPort};
use zenalyze::app::service::{DeviceContext, Monitor};
use zenalyze::classify::AirQuality;
use zenalyze::config::{MonitorConfig, Variant};
use zenalyze::drivers::ads1115::Ads1115;
use zenalyze::drivers::button::ButtonId;
use zenalyze::drivers::dht11::Dht11;
use zenalyze::error::SensorError;
use zenalyze::pins::ADS1115_ADDR;

use crate::mock_hw::{MemoryMoodLog, MockDisplay, RecordingSink, at};

// ── Mock I2C: one canned conversion result per channel ────────

#[derive(Default)]
struct MockAdc {
    raw: [i16; 4],
    selected: usize,
    absent: bool,
}

impl I2cErrorType for MockAdc {
    type Error = ErrorKind;
}

impl I2c for MockAdc {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.absent {
            return Err(ErrorKind::Other);
        }
        for op in operations {
            match op {
                // config write: MUX lives in bits 14..12 of the first data byte
                Operation::Write([0x01, hi, _lo]) => self.selected = usize::from((*hi >> 4) & 0b11),
                Operation::Write(_) => {}
                Operation::Read(buf) => buf.copy_from_slice(&self.raw[self.selected].to_be_bytes()),
            }
        }
        Ok(())
    }
}

// ── Mock GPIO ─────────────────────────────────────────────────

#[derive(Clone, Default)]
struct Level(Rc<Cell<bool>>);

impl Level {
    fn set(&self, high: bool) {
        self.0.set(high);
    }
}

impl PinErrorType for Level {
    type Error = Infallible;
}

impl InputPin for Level {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

// ── Fixture ───────────────────────────────────────────────────

type Adapter = HardwareAdapter<MockAdc, Level, Level, NoDelay>;

struct Rig {
    hw: Adapter,
    pir: Level,
    buttons: [Level; 3],
    _iio: tempfile::TempDir,
}

fn iio_device(temp_milli: &str, humidity_milli: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in_temp_input"), temp_milli).unwrap();
    fs::write(dir.path().join("in_humidityrelative_input"), humidity_milli).unwrap();
    dir
}

fn rig(adc: MockAdc) -> Rig {
    let iio = iio_device("23000\n", "48000\n");
    let pir = Level::default();
    // pull-ups: idle high
    let buttons = [Level::default(), Level::default(), Level::default()];
    for b in &buttons {
        b.set(true);
    }
    let hw = HardwareAdapter::new(
        connect_adc(Ads1115::new(adc, ADS1115_ADDR)),
        Dht11::new(iio.path()),
        pir.clone(),
        buttons.clone(),
        NoDelay,
    );
    Rig {
        hw,
        pir,
        buttons,
        _iio: iio,
    }
}

fn healthy_adc() -> MockAdc {
    MockAdc {
        // 2.048 V, 1500 counts, 1.024 V
        raw: [16_384, 1_500, 8_192, 0],
        ..Default::default()
    }
}

// ── Tests ─────────────────────────────────────────────────────

#[test]
fn status_reports_detected_devices() {
    let r = rig(healthy_adc());
    let status = r.hw.status();
    assert!(status.adc);
    assert!(status.climate);
    assert!(!status.display);
}

#[test]
fn channels_are_routed_to_the_right_inputs() {
    let mut r = rig(healthy_adc());
    assert_eq!(r.hw.read_light_volts(), Ok(2.048));
    assert_eq!(r.hw.read_mic_raw(), Ok(1_500));
    assert_eq!(r.hw.read_gas_volts(), Ok(1.024));
    let climate = r.hw.read_climate().unwrap();
    assert_eq!((climate.celsius, climate.humidity), (23.0, 48.0));
}

#[test]
fn missing_adc_reads_not_connected() {
    let mut r = rig(MockAdc {
        absent: true,
        ..Default::default()
    });
    assert!(!r.hw.status().adc);
    assert_eq!(r.hw.read_light_volts(), Err(SensorError::NotConnected));
    assert_eq!(r.hw.read_mic_raw(), Err(SensorError::NotConnected));
    assert_eq!(r.hw.read_gas_volts(), Err(SensorError::NotConnected));
}

#[test]
fn buttons_are_active_low() {
    let mut r = rig(healthy_adc());
    for id in ButtonId::ALL {
        assert_eq!(r.hw.is_pressed(id), Ok(false));
    }
    r.buttons[1].set(false);
    assert_eq!(r.hw.is_pressed(ButtonId::Two), Ok(true));
    assert_eq!(r.hw.is_pressed(ButtonId::One), Ok(false));
}

#[test]
fn pir_is_active_high() {
    let mut r = rig(healthy_adc());
    assert_eq!(r.hw.read_motion(), Ok(false));
    r.pir.set(true);
    assert_eq!(r.hw.read_motion(), Ok(true));
}

#[test]
fn monitor_tick_through_real_adapter() {
    let r = rig(healthy_adc());
    let status = r.hw.status();
    let mut ctx = DeviceContext::new(r.hw, MockDisplay::default(), status, "10.0.0.7");
    let mut m = Monitor::new(MonitorConfig::for_variant(Variant::Dashboard));
    m.set_mic_baseline(1_500.0);
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    r.pir.set(true);
    m.tick(at(0), &mut ctx, &mut log, &mut sink);

    let s = m.snapshot();
    assert_eq!((s.temperature_c, s.humidity), (23.0, 48.0));
    assert_eq!(s.lux, 620);
    assert_eq!(s.co2_ppm, 840);
    assert_eq!(s.air_quality, AirQuality::Fair);
    assert_eq!(s.mic_delta, 0.0);
    assert!(s.motion);
    assert_eq!(ctx.display.frames, 1);
}
