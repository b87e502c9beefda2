//! Transient mood overlay drawn over the mandala.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use super::palette;
use crate::mood::Mood;

pub const BOX_WIDTH: i32 = 120;
pub const BOX_HEIGHT: i32 = 50;
/// Box centre: top middle of the screen.
pub const ANCHOR: Point = Point::new(120, 50);

/// The mood currently shown and when it was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOverlay {
    pub mood: Mood,
    pub shown_at_ms: u64,
}

impl MoodOverlay {
    pub fn new(mood: Mood, shown_at_ms: u64) -> Self {
        Self { mood, shown_at_ms }
    }

    /// Inclusive: still visible at exactly `duration_ms`.
    pub fn is_visible(&self, now_ms: u64, duration_ms: u64) -> bool {
        now_ms.saturating_sub(self.shown_at_ms) <= duration_ms
    }
}

pub fn background(mood: Mood) -> Rgb565 {
    match mood {
        Mood::Good => palette::rgb(50, 200, 100),
        Mood::Neutral => palette::rgb(200, 150, 50),
        Mood::Bad => palette::rgb(200, 100, 100),
    }
}

pub fn draw<D>(target: &mut D, mood: Mood) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let half = Point::new(BOX_WIDTH / 2, BOX_HEIGHT / 2);
    Rectangle::with_corners(ANCHOR - half, ANCHOR + half)
        .into_styled(PrimitiveStyle::with_fill(background(mood)))
        .draw(target)?;

    let centred = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(
        mood.display_name(),
        ANCHOR,
        MonoTextStyle::new(&FONT_10X20, palette::WHITE),
        centred,
    )
    .draw(target)?;
    Ok(())
}
