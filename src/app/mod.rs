//! Application core: the monitor loop logic, free of direct I/O.
//!
//! Everything the loop touches (sensors, buttons, display, mood log,
//! clock, event output) is reached through the **port traits** in
//! [`ports`], so a whole run can be driven from tests with mock adapters
//! and synthetic time.

pub mod commands;
pub mod events;
pub mod ports;
pub mod runner;
pub mod service;
