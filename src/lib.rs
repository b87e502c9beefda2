//! Zenalyze monitor library.
//!
//! Everything except the rppal wiring is host-testable: the domain core
//! talks to hardware only through the port traits in [`app::ports`], and
//! the drivers are written against `embedded-hal` traits.  The
//! Raspberry Pi bindings live behind the `rpi` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod classify;
pub mod config;
pub mod drivers;
pub mod error;
pub mod mood;
pub mod pins;
pub mod render;
pub mod sensors;

pub use error::{Error, Result};
