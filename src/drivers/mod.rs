//! Peripheral drivers written against `embedded-hal` 1.0 traits.

pub mod ads1115;
pub mod button;
pub mod dht11;
pub mod st7789;
