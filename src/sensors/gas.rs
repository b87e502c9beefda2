//! MQ-135 gas sensor on ADS1115 channel 2.
//!
//! Reads the analog output and applies a two-point linear estimate of
//! CO2-equivalent ppm: clean air (≤ 0.5 V) is 400 ppm, and the span up to
//! 3.0 V covers another 2100 ppm.  The result is capped at 3000 ppm.

use crate::config::GasCalibration;

pub fn is_plausible(volts: f32) -> bool {
    volts > 0.0
}

pub fn volts_to_ppm(volts: f32, cal: &GasCalibration) -> u32 {
    if volts <= cal.clean_air_volts {
        return cal.baseline_ppm as u32;
    }
    let normalised = (volts - cal.clean_air_volts) / (cal.max_volts - cal.clean_air_volts);
    let ppm = cal.baseline_ppm + normalised * cal.span_ppm;
    ppm.min(cal.ceiling_ppm) as u32
}
