//! Startup status screen.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_9X15, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use super::palette;
use crate::config::Variant;
use crate::sensors::DeviceStatus;

pub struct SplashInfo<'a> {
    pub variant: Variant,
    pub status: DeviceStatus,
    /// Local address, or "Not connected".
    pub ip: &'a str,
}

fn line<D>(target: &mut D, x: i32, y: i32, text: &str, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_baseline(
        text,
        Point::new(x, y),
        MonoTextStyle::new(&FONT_9X15, color),
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}

/// `(text, colour)` for each legend line.
pub fn legend(variant: Variant) -> &'static [(&'static str, Rgb565)] {
    match variant {
        Variant::Mandala => &[
            ("Mood buttons:", palette::CYAN),
            ("BTN1: Good", palette::GREEN),
            ("BTN2: Neutral", palette::YELLOW),
            ("BTN3: Bad", palette::RED),
        ],
        Variant::Dashboard => &[
            ("Buttons:", palette::CYAN),
            ("BTN1: Previous page", palette::WHITE),
            ("BTN3: Next page", palette::WHITE),
        ],
    }
}

pub fn draw<D>(target: &mut D, info: &SplashInfo<'_>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(palette::BLACK)?;

    let mut y = 12;
    Text::with_baseline(
        "ZENALYZE",
        Point::new(30, y),
        MonoTextStyle::new(&FONT_10X20, palette::CYAN),
        Baseline::Top,
    )
    .draw(target)?;
    y += 30;

    line(target, 20, y, "Sensor status:", palette::WHITE)?;
    y += 20;

    let devices = [
        ("DHT11", info.status.climate),
        ("ADS1115", info.status.adc),
        ("Display", info.status.display),
    ];
    for (name, ok) in devices {
        let mut text = heapless::String::<24>::new();
        let _ = write!(text, "{}: {}", name, if ok { "OK" } else { "ERROR" });
        let color = if ok { palette::GREEN } else { palette::RED };
        line(target, 30, y, &text, color)?;
        y += 18;
    }

    y += 8;
    let mut ip = heapless::String::<32>::new();
    let _ = write!(ip, "IP: {}", info.ip);
    line(target, 20, y, &ip, palette::YELLOW)?;
    y += 26;

    for (i, (text, color)) in legend(info.variant).iter().enumerate() {
        let x = if i == 0 { 20 } else { 25 };
        line(target, x, y, text, *color)?;
        y += 18;
    }
    Ok(())
}
