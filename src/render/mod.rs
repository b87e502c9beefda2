//! Views and the per-tick render state.
//!
//! - [`framebuffer`]: the 240×240 RGB565 draw target
//! - [`palette`]: colours and the band → colour maps
//! - [`splash`]: startup status screen
//! - [`dashboard`]: three numeric pages
//! - [`mandala`]: the generative diagram
//! - [`overlay`]: the transient mood box
//!
//! [`RenderState`] decides once per tick which view is active; [`compose`]
//! draws it into the frame.

pub mod dashboard;
pub mod framebuffer;
pub mod mandala;
pub mod overlay;
pub mod palette;
pub mod splash;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::Variant;
use crate::mood::Mood;
use crate::sensors::{DeviceStatus, SensorSnapshot};
pub use dashboard::Page;
use overlay::MoodOverlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Splash,
    Dashboard(Page),
    Mandala,
}

#[derive(Debug, Clone)]
pub struct RenderState {
    variant: Variant,
    /// Set by the first call to [`view`](Self::view).
    started_ms: Option<u64>,
    splash_duration_ms: u64,
    overlay_duration_ms: u64,
    splash_done: bool,
    rotation_deg: u16,
    page: Page,
    overlay: Option<MoodOverlay>,
}

impl RenderState {
    pub fn new(variant: Variant, splash_duration_ms: u64, overlay_duration_ms: u64) -> Self {
        Self {
            variant,
            started_ms: None,
            splash_duration_ms,
            overlay_duration_ms,
            // The dashboard opens straight on its first page.
            splash_done: variant == Variant::Dashboard,
            rotation_deg: 0,
            page: Page::ClimateLight,
            overlay: None,
        }
    }

    /// Select this tick's view.  The mandala's splash runs from the first
    /// call and is dismissed for good the first time its duration has passed.
    pub fn view(&mut self, now_ms: u64) -> View {
        let started_ms = *self.started_ms.get_or_insert(now_ms);
        if !self.splash_done {
            if now_ms.saturating_sub(started_ms) < self.splash_duration_ms {
                return View::Splash;
            }
            self.splash_done = true;
        }
        match self.variant {
            Variant::Mandala => View::Mandala,
            Variant::Dashboard => View::Dashboard(self.page),
        }
    }

    pub fn splash_done(&self) -> bool {
        self.splash_done
    }

    pub fn rotation(&self) -> u16 {
        self.rotation_deg
    }

    /// One degree per tick, wrapping at 360.
    pub fn advance_rotation(&mut self) {
        self.rotation_deg = (self.rotation_deg + 1) % 360;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn next_page(&mut self) -> Page {
        self.page = self.page.next();
        self.page
    }

    pub fn previous_page(&mut self) -> Page {
        self.page = self.page.prev();
        self.page
    }

    pub fn show_overlay(&mut self, mood: Mood, now_ms: u64) {
        self.overlay = Some(MoodOverlay::new(mood, now_ms));
    }

    /// The overlay to draw this tick.  An expired overlay is dropped here
    /// and never comes back on its own.
    pub fn active_overlay(&mut self, now_ms: u64) -> Option<Mood> {
        match self.overlay {
            Some(o) if o.is_visible(now_ms, self.overlay_duration_ms) => Some(o.mood),
            Some(_) => {
                self.overlay = None;
                None
            }
            None => None,
        }
    }
}

/// Everything a view may read.
pub struct FrameInputs<'a> {
    pub snapshot: &'a SensorSnapshot,
    pub status: &'a DeviceStatus,
    pub ip: &'a str,
    pub variant: Variant,
    pub rotation_deg: u16,
    pub overlay: Option<Mood>,
}

/// Draw `view` into `target`, replacing the previous frame entirely.
pub fn compose<D>(target: &mut D, view: View, inputs: &FrameInputs<'_>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match view {
        View::Splash => splash::draw(
            target,
            &splash::SplashInfo {
                variant: inputs.variant,
                status: *inputs.status,
                ip: inputs.ip,
            },
        ),
        View::Dashboard(page) => dashboard::draw(target, page, inputs.snapshot, inputs.status),
        View::Mandala => {
            let params = mandala::MandalaParams::from_snapshot(inputs.snapshot, inputs.rotation_deg);
            mandala::draw(target, &params)?;
            match inputs.overlay {
                Some(mood) => overlay::draw(target, mood),
                None => Ok(()),
            }
        }
    }
}
