//! LDR light sensor on ADS1115 channel 0.
//!
//! The LDR sits in a divider between 3.3 V and ground; the voltage is
//! mapped linearly onto 0–1000 "lux".  It is a brightness index, not a
//! calibrated photometric value.

use crate::config::LightCalibration;

/// A zero or negative voltage means the divider is disconnected.
pub fn is_plausible(volts: f32) -> bool {
    volts > 0.0
}

pub fn volts_to_lux(volts: f32, cal: &LightCalibration) -> u32 {
    ((volts / cal.reference_volts) * cal.full_scale_lux).max(0.0) as u32
}
