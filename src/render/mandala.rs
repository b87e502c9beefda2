//! Generative mandala.
//!
//! Every visual parameter is a pure function of the snapshot and the
//! rotation angle ([`MandalaParams::from_snapshot`]); drawing only turns
//! those parameters into primitives.  From the outside in:
//!
//! | Element           | Driven by    | Geometry (maxR = 100)              |
//! |-------------------|--------------|------------------------------------|
//! | outer ring        | temperature  | r = 0.9·maxR, 3 px                 |
//! | 6 triangles       | rotation     | between 0.75·maxR and 0.85·maxR    |
//! | 12 petals         | CO2 ppm      | lines from 0.21·maxR to 0.7·maxR   |
//! | 3–8 rings         | humidity     | r = maxR·(0.3 + i/n·0.25)          |
//! | core ring         | noise level  | r = 0.2·maxR, 3 px                 |
//! | centre dot        | —            | r = 3, white                       |
//! | light ring        | lux          | r = 0.08·maxR, 2 px                |

use core::f32::consts::TAU;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Triangle};

use super::framebuffer::{CENTER, WIDTH};
use super::palette;
use crate::classify::{LightLevel, TemperatureBand};
use crate::sensors::SensorSnapshot;

pub const MAX_RADIUS: f32 = (WIDTH / 2 - 20) as f32;

pub const TRIANGLES: u32 = 6;
pub const PETALS: u32 = 12;
pub const MIN_RINGS: u8 = 3;
pub const MAX_RINGS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandalaParams {
    pub rotation_deg: u16,
    pub outer_color: Rgb565,
    pub petal_color: Rgb565,
    pub ring_count: u8,
    pub core_color: Rgb565,
    pub light_color: Rgb565,
}

impl MandalaParams {
    pub fn from_snapshot(snapshot: &SensorSnapshot, rotation_deg: u16) -> Self {
        Self {
            rotation_deg: rotation_deg % 360,
            outer_color: palette::temperature(TemperatureBand::classify(snapshot.temperature_c)),
            petal_color: palette::air(snapshot.co2_ppm),
            ring_count: ring_count(snapshot.humidity),
            core_color: palette::noise(snapshot.noise),
            light_color: palette::light(LightLevel::classify(snapshot.lux)),
        }
    }

    fn rotation_rad(&self) -> f32 {
        f32::from(self.rotation_deg).to_radians()
    }

    /// Vertices of triangle `i` (0-based).
    pub fn triangle(&self, i: u32) -> [Point; 3] {
        let angle = i as f32 / TRIANGLES as f32 * TAU + self.rotation_rad();
        let r1 = MAX_RADIUS * 0.75;
        let r2 = MAX_RADIUS * 0.85;
        [
            polar(angle, r1),
            polar(angle + 0.35, r2),
            polar(angle + 0.70, r1),
        ]
    }

    /// Inner and outer end of petal `i` (0-based).
    pub fn petal(&self, i: u32) -> (Point, Point) {
        let angle = i as f32 / PETALS as f32 * TAU + self.rotation_rad();
        let len = MAX_RADIUS * 0.70;
        (polar(angle, len * 0.3), polar(angle, len))
    }

    /// Radius of humidity ring `i` (1-based, up to `ring_count`).
    pub fn ring_radius(&self, i: u8) -> u32 {
        (MAX_RADIUS * (0.3 + f32::from(i) / f32::from(self.ring_count) * 0.25)) as u32
    }
}

/// `clamp(int(humidity / 15), 3, 8)`.  NaN lands on the minimum.
pub fn ring_count(humidity: f32) -> u8 {
    ((humidity / 15.0) as i32).clamp(i32::from(MIN_RINGS), i32::from(MAX_RINGS)) as u8
}

fn polar(angle: f32, radius: f32) -> Point {
    Point::new(
        (CENTER.x as f32 + angle.cos() * radius) as i32,
        (CENTER.y as f32 + angle.sin() * radius) as i32,
    )
}

fn ring<D>(target: &mut D, radius: u32, style: PrimitiveStyle<Rgb565>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(CENTER, 2 * radius + 1)
        .into_styled(style)
        .draw(target)
}

/// Draw the mandala on a black background.
pub fn draw<D>(target: &mut D, params: &MandalaParams) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(palette::BLACK)?;

    ring(
        target,
        (MAX_RADIUS * 0.90) as u32,
        PrimitiveStyle::with_stroke(params.outer_color, 3),
    )?;

    let purple = PrimitiveStyle::with_stroke(palette::PURPLE, 1);
    for i in 0..TRIANGLES {
        let [a, b, c] = params.triangle(i);
        Triangle::new(a, b, c).into_styled(purple).draw(target)?;
    }

    let petal_style = PrimitiveStyle::with_stroke(params.petal_color, 2);
    for i in 0..PETALS {
        let (inner, outer) = params.petal(i);
        Line::new(inner, outer).into_styled(petal_style).draw(target)?;
    }

    let ring_style = PrimitiveStyle::with_stroke(palette::RING_BLUE, 1);
    for i in 1..=params.ring_count {
        ring(target, params.ring_radius(i), ring_style)?;
    }

    ring(
        target,
        (MAX_RADIUS * 0.20) as u32,
        PrimitiveStyle::with_stroke(params.core_color, 3),
    )?;
    ring(target, 3, PrimitiveStyle::with_fill(palette::WHITE))?;
    ring(
        target,
        (MAX_RADIUS * 0.08) as u32,
        PrimitiveStyle::with_stroke(params.light_color, 2),
    )
}
