//! Zenalyze: main entry point (Raspberry Pi).
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter   LcdDisplay    CsvMoodLog    LogEventSink  │
//! │  (Sensor+Button)   (Display)     (MoodSink)    (EventSink)   │
//! │  SystemClock (Clock)                                         │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │             Monitor (pure logic, per tick)             │  │
//! │  │  SensorHub · ButtonBank · RenderState                  │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use log::{debug, info};
use rppal::gpio::Gpio;

use zenalyze::adapters::csv_log::CsvMoodLog;
use zenalyze::adapters::log_sink::LogEventSink;
use zenalyze::adapters::net;
use zenalyze::adapters::rpi;
use zenalyze::adapters::time::SystemClock;
use zenalyze::app::runner;
use zenalyze::app::service::{DeviceContext, Monitor};
use zenalyze::config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("╔══════════════════════════════════════╗");
    info!("║  Zenalyze v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 1. Configuration (.env is required) ───────────────────
    let (pins, config) =
        config::load(Path::new(config::ENV_FILE)).context("loading configuration")?;
    info!(
        "Variant {:?}, mood log {}",
        config.variant,
        config.mood_log_path.display()
    );
    debug!("Config: {}", serde_json::to_string(&config)?);

    // ── 2. Stop flag (Ctrl+C / SIGTERM) ───────────────────────
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed))
            .context("installing signal handler")?;
    }

    // ── 3. Hardware ───────────────────────────────────────────
    let gpio = Gpio::new().context("opening GPIO")?;
    let hardware = rpi::open_hardware(&gpio, &pins)?;
    let display = rpi::open_display(&gpio, &pins)?;

    let mut status = hardware.status();
    status.display = true;
    let ip = net::local_ip_label();
    info!("IP: {}", ip);

    let mut ctx = DeviceContext::new(hardware, display, status, ip);

    // ── 4. Monitor ────────────────────────────────────────────
    let mut clock = SystemClock::new();
    let mut log = CsvMoodLog::new(&config.mood_log_path);
    let mut sink = LogEventSink::new();
    let mut monitor = Monitor::new(config);

    monitor.calibrate_microphone(&mut ctx.hardware, &mut clock);

    info!("Press Ctrl+C to exit");
    runner::run(&mut monitor, &mut ctx, &mut clock, &mut log, &mut sink, &stop);

    info!("Finished");
    Ok(())
}
