//! Paged numeric dashboard.
//!
//! Three pages share a header, a page title, a divider and a button
//! footer; only the body differs.  Values the device never delivered are
//! shown as "ERROR" / "NOT CONNECTED" rather than as zeros.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use super::palette;
use crate::sensors::{DeviceStatus, SensorSnapshot};

pub const PAGE_COUNT: u8 = 3;
pub const BAR_MAX_SEGMENTS: usize = 20;
/// Microphone delta per bar segment.
pub const BAR_STEP: f32 = 30.0;

const BODY_TOP: i32 = 90;
const FOOTER_Y: i32 = 222;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    ClimateLight,
    MotionAir,
    Noise,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::ClimateLight, Self::MotionAir, Self::Noise];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % PAGE_COUNT)]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Self {
        Self::from_index(self.index() + PAGE_COUNT - 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::ClimateLight => "Page 1/3: Climate & Light",
            Self::MotionAir => "Page 2/3: Motion & Air",
            Self::Noise => "Page 3/3: Noise",
        }
    }
}

/// Number of `|` segments for a microphone delta.
pub fn bar_segments(delta: f32) -> usize {
    if delta > 0.0 {
        ((delta / BAR_STEP) as usize).min(BAR_MAX_SEGMENTS)
    } else {
        0
    }
}

/// Writes one text line per call, moving down by `step` each time.
struct Column {
    x: i32,
    y: i32,
}

impl Column {
    fn text<D>(
        &mut self,
        target: &mut D,
        text: &str,
        font: &MonoFont<'_>,
        color: Rgb565,
        step: i32,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Text::with_baseline(
            text,
            Point::new(self.x, self.y),
            MonoTextStyle::new(font, color),
            Baseline::Top,
        )
        .draw(target)?;
        self.y += step;
        Ok(())
    }

    fn value<D>(&mut self, target: &mut D, text: &str, color: Rgb565) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.text(target, text, &FONT_10X20, color, 30)
    }
}

pub fn draw<D>(
    target: &mut D,
    page: Page,
    snapshot: &SensorSnapshot,
    status: &DeviceStatus,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(palette::BLACK)?;

    let mut col = Column { x: 10, y: 10 };
    col.text(target, "SENSOR MONITOR", &FONT_10X20, palette::WHITE, 35)?;
    col.text(target, page.title(), &FONT_9X15, palette::CYAN, 30)?;
    Line::new(Point::new(0, col.y), Point::new(239, col.y))
        .into_styled(PrimitiveStyle::with_stroke(palette::BLUE, 2))
        .draw(target)?;
    col.y = BODY_TOP;

    match page {
        Page::ClimateLight => climate_light(target, &mut col, snapshot, status)?,
        Page::MotionAir => motion_air(target, &mut col, snapshot, status)?,
        Page::Noise => noise(target, &mut col, snapshot, status)?,
    }

    col.y = FOOTER_Y;
    col.text(target, "BTN1=Back  BTN3=Next", &FONT_6X10, palette::GRAY, 0)
}

fn climate_light<D>(
    target: &mut D,
    col: &mut Column,
    s: &SensorSnapshot,
    status: &DeviceStatus,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut buf: String<32> = String::new();
    if s.has_climate() {
        let _ = write!(buf, "Temp: {:.1} C", s.temperature_c);
        col.value(target, &buf, palette::CYAN)?;
        buf.clear();
        let _ = write!(buf, "Humidity: {:.0}%", s.humidity);
        col.value(target, &buf, palette::CYAN)?;
    } else {
        col.value(target, "Temp/Hum: ERROR", palette::RED)?;
    }
    col.y += 20;

    if status.adc {
        buf.clear();
        let _ = write!(buf, "Light: {} lux", s.lux);
        col.value(target, &buf, palette::YELLOW)?;
        buf.clear();
        let _ = write!(buf, "V: {:.2}V", s.light_volts);
        col.value(target, &buf, palette::YELLOW)?;
    } else {
        col.value(target, "LDR: NOT CONNECTED", palette::RED)?;
    }
    Ok(())
}

fn motion_air<D>(
    target: &mut D,
    col: &mut Column,
    s: &SensorSnapshot,
    status: &DeviceStatus,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if s.motion {
        col.value(target, "MOTION", palette::RED)?;
    } else {
        col.value(target, "Idle", palette::GREEN)?;
    }
    col.y += 5;

    if status.adc {
        let mut buf: String<32> = String::new();
        let _ = write!(buf, "CO2: {} ppm", s.co2_ppm);
        col.value(target, &buf, palette::YELLOW)?;
        buf.clear();
        let _ = write!(buf, "Air: {}", s.air_quality.display_name());
        col.value(target, &buf, palette::air_quality_text(s.air_quality))?;
    } else {
        col.value(target, "MQ-135: ERROR", palette::RED)?;
    }
    Ok(())
}

fn noise<D>(
    target: &mut D,
    col: &mut Column,
    s: &SensorSnapshot,
    status: &DeviceStatus,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if !status.adc {
        return col.value(target, "Microphone: ERROR", palette::RED);
    }

    let color = palette::noise_text(s.noise);
    let mut buf: String<32> = String::new();
    let _ = write!(buf, "Value: {}", s.mic_raw);
    col.value(target, &buf, palette::WHITE)?;
    buf.clear();
    let _ = write!(buf, "Diff: {}", s.mic_delta as i32);
    col.value(target, &buf, palette::WHITE)?;
    buf.clear();
    let _ = write!(buf, "Level: {}", s.noise.display_name());
    col.value(target, &buf, color)?;
    col.y += 5;

    let mut bar: String<BAR_MAX_SEGMENTS> = String::new();
    for _ in 0..bar_segments(s.mic_delta) {
        let _ = bar.push('|');
    }
    col.text(target, &bar, &FONT_6X10, color, 0)
}
