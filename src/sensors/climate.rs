//! DHT11 temperature / humidity reading.
//!
//! The DHT11 regularly fails a read (checksum, timing).  A failed or
//! rejected reading never touches the snapshot; see
//! [`ClimateValidity`](crate::config::ClimateValidity) for what counts as
//! valid.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    pub celsius: f32,
    pub humidity: f32,
}

impl ClimateReading {
    pub fn new(celsius: f32, humidity: f32) -> Self {
        Self { celsius, humidity }
    }
}
