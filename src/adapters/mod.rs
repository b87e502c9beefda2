//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements            | Connects to                    |
//! |-------------|-----------------------|--------------------------------|
//! | `hardware`  | SensorPort            | ADS1115, DHT11 (IIO), PIR      |
//! |             | ButtonPort            | three GPIO buttons             |
//! | `display`   | DisplayPort           | ST7789 over SPI                |
//! | `csv_log`   | MoodSink              | append-only CSV file           |
//! | `log_sink`  | EventSink             | `log` facade                   |
//! | `time`      | Clock                 | `Instant` + `chrono::Local`    |
//! | `net`       | —                     | local IP for the splash        |
//! | `rpi`       | —                     | rppal wiring (feature `rpi`)   |

pub mod csv_log;
pub mod display;
pub mod hardware;
pub mod log_sink;
pub mod net;
#[cfg(feature = "rpi")]
pub mod rpi;
pub mod time;
