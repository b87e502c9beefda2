//! Blocking main loop around [`Monitor::tick`].

use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use super::ports::{ButtonPort, Clock, DisplayPort, EventSink, MoodSink, SensorPort};
use super::service::{DeviceContext, Monitor};

/// Tick at the configured frame interval until `stop` is set, then shut
/// the display down.  The stop flag is checked once per tick.
pub fn run<H, D>(
    monitor: &mut Monitor,
    ctx: &mut DeviceContext<H, D>,
    clock: &mut impl Clock,
    log: &mut impl MoodSink,
    sink: &mut impl EventSink,
    stop: &AtomicBool,
) where
    H: SensorPort + ButtonPort,
    D: DisplayPort,
{
    let frame_interval_ms = monitor.config().frame_interval_ms;
    monitor.start(sink);

    while !stop.load(Ordering::Relaxed) {
        let now = clock.now();
        monitor.tick(now, ctx, log, sink);
        clock.sleep_ms(frame_interval_ms);
    }

    info!("Stop requested, cleaning up...");
    monitor.shutdown(&mut ctx.display, sink);
}
