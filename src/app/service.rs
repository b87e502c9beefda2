//! Monitor service: the hexagonal core.
//!
//! [`Monitor`] owns the sensor hub, the button debouncers, the render
//! state and the frame.  One [`tick`](Monitor::tick) is one pass of the
//! main loop; it never blocks and never fails.  All I/O flows through
//! port traits passed in at the call site.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ DisplayPort
//!  ButtonPort ──▶ │         Monitor           │ ──▶ MoodSink
//!       Clock ──▶ │ hub · buttons · renderer  │ ──▶ EventSink
//!                 └──────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::MonitorConfig;
use crate::drivers::button::{ButtonBank, ButtonId};
use crate::mood::MoodEvent;
use crate::render::framebuffer::FrameBuffer;
use crate::render::{self, FrameInputs, RenderState, View};
use crate::sensors::motion::MotionEdge;
use crate::sensors::sound::NoiseStats;
use crate::sensors::{DeviceStatus, SensorHub, SensorSnapshot};

use super::commands::{AppCommand, command_for};
use super::events::AppEvent;
use super::ports::{ButtonPort, Clock, DisplayPort, EventSink, MoodSink, Now, SensorPort};

// ───────────────────────────────────────────────────────────────
// DeviceContext
// ───────────────────────────────────────────────────────────────

/// Hardware owned by the loop: sensors + buttons behind one adapter, the
/// display behind another, plus what was learned about them at startup.
pub struct DeviceContext<H, D> {
    pub hardware: H,
    pub display: D,
    pub status: DeviceStatus,
    /// Local address for the splash, or "Not connected".
    pub ip: String,
}

impl<H, D> DeviceContext<H, D>
where
    H: SensorPort + ButtonPort,
    D: DisplayPort,
{
    pub fn new(hardware: H, display: D, status: DeviceStatus, ip: impl Into<String>) -> Self {
        Self {
            hardware,
            display,
            status,
            ip: ip.into(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Monitor
// ───────────────────────────────────────────────────────────────

pub struct Monitor {
    config: MonitorConfig,
    hub: SensorHub,
    buttons: ButtonBank,
    render: RenderState,
    frame: FrameBuffer,
    last_view: Option<View>,
    tick_count: u64,
    frames_dropped: u64,
}

impl Monitor {
    pub fn new(config: MonitorConfig) -> Self {
        let render = RenderState::new(
            config.variant,
            config.splash_duration_ms,
            config.overlay_duration_ms,
        );
        Self {
            hub: SensorHub::new(&config),
            buttons: ButtonBank::new(config.debounce_ms),
            render,
            frame: FrameBuffer::new(),
            last_view: None,
            tick_count: 0,
            frames_dropped: 0,
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn calibrate_microphone(
        &mut self,
        port: &mut impl SensorPort,
        clock: &mut impl Clock,
    ) -> Option<f32> {
        self.hub.calibrate_microphone(port, clock)
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        info!("Monitor started ({:?})", self.config.variant);
        sink.emit(&AppEvent::Started {
            variant: self.config.variant,
            mic_baseline: self.hub.mic_baseline(),
        });
    }

    /// Blank the display and report the run.  Pins are released when the
    /// adapters are dropped.
    pub fn shutdown(&mut self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        if let Err(e) = display.power_off() {
            warn!("Display power-off failed: {}", e);
        }
        sink.emit(&AppEvent::Stopped {
            ticks: self.tick_count,
            noise: *self.hub.noise_stats(),
        });
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// One loop pass: poll → buttons → render → flush → rotate.
    pub fn tick<H, D>(
        &mut self,
        now: Now,
        ctx: &mut DeviceContext<H, D>,
        log: &mut impl MoodSink,
        sink: &mut impl EventSink,
    ) where
        H: SensorPort + ButtonPort,
        D: DisplayPort,
    {
        self.tick_count += 1;

        // 1. Sensors (rate-limited inside the hub)
        if let Some(outcome) = self.hub.poll(&mut ctx.hardware, now.mono_ms) {
            match outcome.motion {
                Some(MotionEdge::Started) => sink.emit(&AppEvent::MotionStarted),
                Some(MotionEdge::Ended) => sink.emit(&AppEvent::MotionEnded),
                None => {}
            }
            sink.emit(&AppEvent::Telemetry {
                snapshot: *self.hub.snapshot(),
                fallbacks: outcome.fallbacks,
            });
        }

        // 2. Buttons
        for id in ButtonId::ALL {
            let pressed = match ctx.hardware.is_pressed(id) {
                Ok(level) => level,
                Err(e) => {
                    debug!("BTN{}: {}, treating as released", id.number(), e);
                    false
                }
            };
            if !self.buttons.update(id, pressed, now.mono_ms) {
                continue;
            }
            debug!("BTN{} pressed", id.number());
            if let Some(cmd) = command_for(self.config.variant, id) {
                self.handle_command(cmd, now, log, sink);
            }
        }

        // 3. Render
        let view = self.render.view(now.mono_ms);
        if let Some(from) = self.last_view {
            if from != view {
                sink.emit(&AppEvent::ViewChanged { from, to: view });
            }
        }
        self.last_view = Some(view);

        let inputs = FrameInputs {
            snapshot: self.hub.snapshot(),
            status: &ctx.status,
            ip: &ctx.ip,
            variant: self.config.variant,
            rotation_deg: self.render.rotation(),
            overlay: self.render.active_overlay(now.mono_ms),
        };
        let Ok(()) = render::compose(&mut self.frame, view, &inputs);

        if let Err(e) = ctx.display.flush(&self.frame) {
            self.frames_dropped += 1;
            sink.emit(&AppEvent::FrameDropped(e));
        }

        // 4. Rotation
        self.render.advance_rotation();
    }

    // ── Command handling ──────────────────────────────────────

    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        now: Now,
        log: &mut impl MoodSink,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            AppCommand::RecordMood(mood) => {
                let snapshot = *self.hub.snapshot();
                let event = MoodEvent::new(now.wall, mood, snapshot);
                match log.record(&event) {
                    Ok(()) => sink.emit(&AppEvent::MoodRecorded { mood, snapshot }),
                    Err(e) => sink.emit(&AppEvent::MoodLogFailed {
                        mood,
                        reason: e.to_string(),
                    }),
                }
                self.render.show_overlay(mood, now.mono_ms);
            }
            AppCommand::NextPage => {
                let page = self.render.next_page();
                sink.emit(&AppEvent::PageChanged(page));
            }
            AppCommand::PreviousPage => {
                let page = self.render.previous_page();
                sink.emit(&AppEvent::PageChanged(page));
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &SensorSnapshot {
        self.hub.snapshot()
    }

    pub fn render_state(&self) -> &RenderState {
        &self.render
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn noise_stats(&self) -> &NoiseStats {
        self.hub.noise_stats()
    }

    pub fn mic_baseline(&self) -> f32 {
        self.hub.mic_baseline()
    }

    pub fn set_mic_baseline(&mut self, baseline: f32) {
        self.hub.set_mic_baseline(baseline);
    }

    /// Ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn frames_dropped(&self) -> u64 {
        self.frames_dropped
    }
}
