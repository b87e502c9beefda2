//! Colours used by the views, from 8-bit RGB.

use embedded_graphics::pixelcolor::Rgb565;

use crate::classify::{AirQuality, LightLevel, NoiseLevel, TemperatureBand};

/// 8-bit RGB → RGB565, dropping the low bits.
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

pub const BLACK: Rgb565 = rgb(0, 0, 0);
pub const WHITE: Rgb565 = rgb(255, 255, 255);
pub const CYAN: Rgb565 = rgb(0, 255, 255);
pub const GREEN: Rgb565 = rgb(0, 200, 0);
pub const RED: Rgb565 = rgb(255, 0, 0);
pub const YELLOW: Rgb565 = rgb(255, 255, 0);
pub const ORANGE: Rgb565 = rgb(255, 165, 0);
pub const BLUE: Rgb565 = rgb(0, 0, 255);
pub const GRAY: Rgb565 = rgb(128, 128, 128);

// Mandala
pub const PURPLE: Rgb565 = rgb(0xA8, 0x55, 0xF7);
pub const RING_BLUE: Rgb565 = rgb(0x60, 0xA5, 0xFA);
pub const AIR_GREEN: Rgb565 = rgb(0x10, 0xB9, 0x81);
pub const AIR_AMBER: Rgb565 = rgb(0xF5, 0x9E, 0x0B);
pub const AIR_RED: Rgb565 = rgb(0xEF, 0x44, 0x44);
pub const LIGHT_BRIGHT: Rgb565 = rgb(0xFD, 0xE0, 0x47);
pub const LIGHT_DIM: Rgb565 = rgb(0x3B, 0x82, 0xF6);

pub fn temperature(band: TemperatureBand) -> Rgb565 {
    match band {
        TemperatureBand::Cold => rgb(100, 150, 220),
        TemperatureBand::Cool => rgb(100, 220, 150),
        TemperatureBand::Mild => rgb(150, 220, 100),
        TemperatureBand::Warm => rgb(220, 200, 100),
        TemperatureBand::Hot => rgb(220, 100, 150),
    }
}

/// Mandala core colour.
pub fn noise(level: NoiseLevel) -> Rgb565 {
    match level {
        NoiseLevel::Silence => rgb(100, 220, 180),
        NoiseLevel::Low => rgb(150, 200, 255),
        NoiseLevel::Medium => rgb(200, 150, 255),
        NoiseLevel::High => rgb(255, 150, 150),
    }
}

/// Dashboard text colour for the noise level.
pub fn noise_text(level: NoiseLevel) -> Rgb565 {
    match level {
        NoiseLevel::Silence => GREEN,
        NoiseLevel::Low => YELLOW,
        NoiseLevel::Medium => ORANGE,
        NoiseLevel::High => RED,
    }
}

/// Mandala petals: three colours over the ppm value.
pub fn air(ppm: u32) -> Rgb565 {
    if ppm < 600 {
        AIR_GREEN
    } else if ppm < 1000 {
        AIR_AMBER
    } else {
        AIR_RED
    }
}

/// Dashboard text colour for the four air-quality bands.
pub fn air_quality_text(quality: AirQuality) -> Rgb565 {
    match quality {
        AirQuality::Excellent => GREEN,
        AirQuality::Good => YELLOW,
        AirQuality::Fair => ORANGE,
        AirQuality::Poor => RED,
    }
}

pub fn light(level: LightLevel) -> Rgb565 {
    match level {
        LightLevel::Bright => LIGHT_BRIGHT,
        LightLevel::Dim => LIGHT_DIM,
    }
}
