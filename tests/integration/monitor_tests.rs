//! Integration tests for the Monitor tick: sensors → buttons → render →
//! display, driven with synthetic time against the mock adapters.

use embedded_graphics::prelude::Point;

use zenalyze::app::events::AppEvent;
use zenalyze::app::service::{DeviceContext, Monitor};
use zenalyze::classify::{AirQuality, NoiseLevel};
use zenalyze::config::{MonitorConfig, Variant};
use zenalyze::drivers::button::ButtonId;
use zenalyze::error::DisplayError;
use zenalyze::mood::Mood;
use zenalyze::render::{Page, View, overlay};

use crate::mock_hw::{
    MemoryMoodLog, MockClock, MockDisplay, MockHardware, RecordingSink, at, context,
};

type Ctx = DeviceContext<MockHardware, MockDisplay>;

const AFTER_SPLASH: u64 = 5_000;

fn monitor(variant: Variant) -> Monitor {
    let mut m = Monitor::new(MonitorConfig::for_variant(variant));
    m.set_mic_baseline(1000.0);
    m
}

/// Run ticks every frame interval from `from` (inclusive) to `to` (exclusive).
fn run_ticks(
    m: &mut Monitor,
    ctx: &mut Ctx,
    log: &mut MemoryMoodLog,
    sink: &mut RecordingSink,
    from: u64,
    to: u64,
) {
    let step = m.config().frame_interval_ms;
    let mut t = from;
    while t < to {
        m.tick(at(t), ctx, log, sink);
        t += step;
    }
}

// ── Splash and view selection ─────────────────────────────────

#[test]
fn splash_is_shown_then_mandala() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    m.tick(at(1_000), &mut ctx, &mut log, &mut sink);
    m.tick(at(4_999), &mut ctx, &mut log, &mut sink);
    assert!(!m.render_state().splash_done());

    m.tick(at(5_000), &mut ctx, &mut log, &mut sink);
    assert!(m.render_state().splash_done());
    assert_eq!(
        sink.count(|e| matches!(
            e,
            AppEvent::ViewChanged {
                from: View::Splash,
                to: View::Mandala
            }
        )),
        1
    );
    assert_eq!(ctx.display.frames, 3);
}

#[test]
fn dashboard_starts_on_first_page() {
    let mut m = monitor(Variant::Dashboard);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    m.tick(at(0), &mut ctx, &mut log, &mut sink);
    assert!(m.render_state().splash_done());
    assert_eq!(m.render_state().page(), Page::ClimateLight);

    // A press in the first second turns a page that is already on screen.
    ctx.hardware.press(ButtonId::Three);
    m.tick(at(1_000), &mut ctx, &mut log, &mut sink);
    assert_eq!(m.render_state().page(), Page::MotionAir);
    assert!(sink.events.contains(&AppEvent::PageChanged(Page::MotionAir)));
    assert_eq!(sink.count(|e| matches!(e, AppEvent::ViewChanged { .. })), 1);
    assert!(sink.events.contains(&AppEvent::ViewChanged {
        from: View::Dashboard(Page::ClimateLight),
        to: View::Dashboard(Page::MotionAir),
    }));
}

// ── Sensor polling ────────────────────────────────────────────

#[test]
fn first_tick_polls_every_sensor() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    m.tick(at(0), &mut ctx, &mut log, &mut sink);

    let s = m.snapshot();
    assert_eq!((s.temperature_c, s.humidity), (24.0, 61.0));
    assert_eq!(s.lux, 500);
    assert_eq!(s.co2_ppm, 1450);
    assert_eq!(s.air_quality, AirQuality::Poor);
    assert_eq!(s.noise, NoiseLevel::Silence);
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::Telemetry { fallbacks: 0, .. })),
        1
    );
}

#[test]
fn polling_is_rate_limited_per_variant() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    run_ticks(&mut m, &mut ctx, &mut log, &mut sink, 0, 300);
    assert_eq!(ctx.hardware.polls, 1);
    run_ticks(&mut m, &mut ctx, &mut log, &mut sink, 300, 1_000);
    assert_eq!(ctx.hardware.polls, 4);

    let mut d = monitor(Variant::Dashboard);
    let mut ctx = context(MockHardware::healthy());
    run_ticks(&mut d, &mut ctx, &mut log, &mut sink, 0, 2_000);
    assert_eq!(ctx.hardware.polls, 2);
}

#[test]
fn failed_reads_keep_last_values() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    m.tick(at(0), &mut ctx, &mut log, &mut sink);
    let before = *m.snapshot();

    ctx.hardware = MockHardware::disconnected();
    m.tick(at(300), &mut ctx, &mut log, &mut sink);
    m.tick(at(600), &mut ctx, &mut log, &mut sink);
    assert_eq!(*m.snapshot(), before);
    assert_eq!(ctx.display.frames, 3);
    assert_eq!(
        sink.count(|e| matches!(
            e,
            AppEvent::Telemetry { snapshot, fallbacks: 5 } if *snapshot == before
        )),
        2
    );
}

#[test]
fn never_connected_sensors_show_initial_values() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::disconnected());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    run_ticks(&mut m, &mut ctx, &mut log, &mut sink, 0, 1_000);
    let s = m.snapshot();
    assert_eq!((s.temperature_c, s.humidity, s.co2_ppm, s.lux), (22.0, 50.0, 400, 300));
}

#[test]
fn motion_edges_are_reported_once() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    m.tick(at(0), &mut ctx, &mut log, &mut sink);
    ctx.hardware.motion = Ok(true);
    run_ticks(&mut m, &mut ctx, &mut log, &mut sink, 300, 1_200);
    ctx.hardware.motion = Ok(false);
    run_ticks(&mut m, &mut ctx, &mut log, &mut sink, 1_200, 1_600);

    assert_eq!(sink.count(|e| *e == AppEvent::MotionStarted), 1);
    assert_eq!(sink.count(|e| *e == AppEvent::MotionEnded), 1);
}

// ── Mood buttons ──────────────────────────────────────────────

#[test]
fn mood_press_logs_snapshot_and_shows_overlay() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    m.tick(at(0), &mut ctx, &mut log, &mut sink);
    ctx.hardware.press(ButtonId::One);
    m.tick(at(AFTER_SPLASH), &mut ctx, &mut log, &mut sink);

    assert_eq!(log.events.len(), 1);
    let event = log.events[0];
    assert_eq!(event.mood, Mood::Good);
    assert_eq!(event.snapshot, *m.snapshot());
    assert_eq!(event.timestamp, at(AFTER_SPLASH).wall);
    assert!(sink.events.contains(&AppEvent::MoodRecorded {
        mood: Mood::Good,
        snapshot: *m.snapshot(),
    }));

    let inside_box = Point::new(65, 30);
    assert_eq!(
        m.frame().pixel(inside_box),
        Some(overlay::background(Mood::Good))
    );
}

#[test]
fn overlay_disappears_after_its_duration() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    m.tick(at(0), &mut ctx, &mut log, &mut sink);
    ctx.hardware.press(ButtonId::Three);
    m.tick(at(AFTER_SPLASH), &mut ctx, &mut log, &mut sink);
    ctx.hardware.release(ButtonId::Three);

    let inside_box = Point::new(65, 30);
    m.tick(at(AFTER_SPLASH + 3_000), &mut ctx, &mut log, &mut sink);
    assert_eq!(m.frame().pixel(inside_box), Some(overlay::background(Mood::Bad)));

    m.tick(at(AFTER_SPLASH + 3_025), &mut ctx, &mut log, &mut sink);
    assert_ne!(m.frame().pixel(inside_box), Some(overlay::background(Mood::Bad)));
}

#[test]
fn held_button_records_once() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    ctx.hardware.press(ButtonId::Two);
    run_ticks(&mut m, &mut ctx, &mut log, &mut sink, AFTER_SPLASH, AFTER_SPLASH + 2_000);
    assert_eq!(log.events.len(), 1);
    assert_eq!(log.events[0].mood, Mood::Neutral);
}

#[test]
fn presses_inside_debounce_window_are_dropped() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    let t = AFTER_SPLASH;
    ctx.hardware.press(ButtonId::One);
    m.tick(at(t), &mut ctx, &mut log, &mut sink);
    ctx.hardware.release(ButtonId::One);
    m.tick(at(t + 25), &mut ctx, &mut log, &mut sink);
    ctx.hardware.press(ButtonId::One);
    m.tick(at(t + 100), &mut ctx, &mut log, &mut sink);
    ctx.hardware.release(ButtonId::One);
    m.tick(at(t + 125), &mut ctx, &mut log, &mut sink);
    ctx.hardware.press(ButtonId::One);
    m.tick(at(t + 400), &mut ctx, &mut log, &mut sink);

    assert_eq!(log.events.len(), 2);
}

#[test]
fn buttons_debounce_independently() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    ctx.hardware.press(ButtonId::One);
    m.tick(at(AFTER_SPLASH), &mut ctx, &mut log, &mut sink);
    ctx.hardware.press(ButtonId::Three);
    m.tick(at(AFTER_SPLASH + 25), &mut ctx, &mut log, &mut sink);

    let moods: Vec<Mood> = log.events.iter().map(|e| e.mood).collect();
    assert_eq!(moods, vec![Mood::Good, Mood::Bad]);
}

#[test]
fn log_failure_is_reported_and_loop_continues() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let mut log = MemoryMoodLog {
        fail: true,
        ..Default::default()
    };
    let mut sink = RecordingSink::default();

    ctx.hardware.press(ButtonId::One);
    m.tick(at(AFTER_SPLASH), &mut ctx, &mut log, &mut sink);
    m.tick(at(AFTER_SPLASH + 25), &mut ctx, &mut log, &mut sink);

    assert!(log.events.is_empty());
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::MoodLogFailed { mood: Mood::Good, .. })),
        1
    );
    assert_eq!(sink.count(|e| matches!(e, AppEvent::MoodRecorded { .. })), 0);
    assert_eq!(m.tick_count(), 2);
    assert_eq!(ctx.display.frames, 2);
}

// ── Dashboard paging ──────────────────────────────────────────

#[test]
fn dashboard_buttons_page_and_wrap() {
    let mut m = monitor(Variant::Dashboard);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());
    let mut t = AFTER_SPLASH;

    let mut click = |id: ButtonId,
                     m: &mut Monitor,
                     ctx: &mut Ctx,
                     log: &mut MemoryMoodLog,
                     sink: &mut RecordingSink| {
        ctx.hardware.press(id);
        m.tick(at(t), ctx, log, sink);
        ctx.hardware.release(id);
        m.tick(at(t + 25), ctx, log, sink);
        t += 500;
    };

    click(ButtonId::Three, &mut m, &mut ctx, &mut log, &mut sink);
    assert_eq!(m.render_state().page(), Page::MotionAir);
    click(ButtonId::Two, &mut m, &mut ctx, &mut log, &mut sink);
    assert_eq!(m.render_state().page(), Page::MotionAir);
    click(ButtonId::One, &mut m, &mut ctx, &mut log, &mut sink);
    click(ButtonId::One, &mut m, &mut ctx, &mut log, &mut sink);
    assert_eq!(m.render_state().page(), Page::Noise);
    click(ButtonId::Three, &mut m, &mut ctx, &mut log, &mut sink);
    assert_eq!(m.render_state().page(), Page::ClimateLight);

    assert!(log.events.is_empty());
    let pages: Vec<Page> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::PageChanged(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(
        pages,
        vec![Page::MotionAir, Page::ClimateLight, Page::Noise, Page::ClimateLight]
    );
}

// ── Display and lifecycle ─────────────────────────────────────

#[test]
fn display_failure_drops_frame_and_keeps_running() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    ctx.display.fail = true;
    m.tick(at(0), &mut ctx, &mut log, &mut sink);
    m.tick(at(25), &mut ctx, &mut log, &mut sink);
    ctx.display.fail = false;
    m.tick(at(50), &mut ctx, &mut log, &mut sink);

    assert_eq!(m.frames_dropped(), 2);
    assert_eq!(
        sink.count(|e| *e == AppEvent::FrameDropped(DisplayError::Bus)),
        2
    );
    assert_eq!(ctx.display.frames, 1);
    assert_eq!(m.render_state().rotation(), 3);
}

#[test]
fn calibration_averages_idle_microphone() {
    let mut m = Monitor::new(MonitorConfig::default());
    let mut hw = MockHardware::healthy();
    hw.mic_raw = Ok(1_234);
    let mut clock = MockClock::new();

    assert_eq!(m.calibrate_microphone(&mut hw, &mut clock), Some(1_234.0));
    assert_eq!(m.mic_baseline(), 1_234.0);
    assert_eq!(clock.sleeps, m.config().mic_calibration_samples);
}

#[test]
fn calibration_without_samples_keeps_baseline() {
    let mut m = monitor(Variant::Mandala);
    let mut hw = MockHardware::disconnected();
    let mut clock = MockClock::new();

    assert_eq!(m.calibrate_microphone(&mut hw, &mut clock), None);
    assert_eq!(m.mic_baseline(), 1000.0);
}

#[test]
fn shutdown_powers_off_and_reports() {
    let mut m = monitor(Variant::Mandala);
    let mut ctx = context(MockHardware::healthy());
    let (mut log, mut sink) = (MemoryMoodLog::default(), RecordingSink::default());

    m.start(&mut sink);
    run_ticks(&mut m, &mut ctx, &mut log, &mut sink, 0, 100);
    m.shutdown(&mut ctx.display, &mut sink);

    assert!(ctx.display.powered_off);
    assert!(matches!(sink.events.first(), Some(AppEvent::Started { .. })));
    match sink.events.last() {
        Some(AppEvent::Stopped { ticks, noise }) => {
            assert_eq!(*ticks, 4);
            assert_eq!(noise.total(), 1);
        }
        other => panic!("expected Stopped, got {other:?}"),
    }
}
