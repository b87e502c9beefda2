//! Mood events and their CSV record form.
//!
//! A [`MoodEvent`] is created when a mood button fires and carries a copy
//! of the snapshot at that moment.  The log stores it as one CSV line:
//!
//! ```text
//! timestamp,estado,temperatura,humedad,co2,luz,ruido
//! 2025-03-14 09:26:53,bien,23.0,45.0,612,480,bajo
//! ```
//!
//! Column names and the mood / noise labels are part of the file format
//! shared with the web front end and stay in Spanish.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::classify::NoiseLevel;
use crate::error::MoodLogError;
use crate::sensors::SensorSnapshot;

pub const CSV_HEADER: &str = "timestamp,estado,temperatura,humedad,co2,luz,ruido";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Good,
    Neutral,
    Bad,
}

impl Mood {
    pub const ALL: [Self; 3] = [Self::Good, Self::Neutral, Self::Bad];

    /// Label written to the log.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "bien",
            Self::Neutral => "neutral",
            Self::Bad => "mal",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    /// Word drawn in the overlay box.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::Neutral => "NEUTRAL",
            Self::Bad => "BAD",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodEvent {
    pub timestamp: NaiveDateTime,
    pub mood: Mood,
    pub snapshot: SensorSnapshot,
}

impl MoodEvent {
    pub fn new(timestamp: NaiveDateTime, mood: Mood, snapshot: SensorSnapshot) -> Self {
        Self {
            timestamp,
            mood,
            snapshot,
        }
    }

    pub fn to_record(&self) -> MoodRecord {
        MoodRecord {
            timestamp: self.timestamp,
            mood: self.mood,
            temperature_c: self.snapshot.temperature_c,
            humidity: self.snapshot.humidity,
            co2_ppm: self.snapshot.co2_ppm,
            lux: self.snapshot.lux,
            noise: self.snapshot.noise,
        }
    }
}

/// One row of the mood log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodRecord {
    pub timestamp: NaiveDateTime,
    pub mood: Mood,
    pub temperature_c: f32,
    pub humidity: f32,
    pub co2_ppm: u32,
    pub lux: u32,
    pub noise: NoiseLevel,
}

impl MoodRecord {
    /// The row without a trailing newline.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{:.1},{:.1},{},{},{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.mood.label(),
            self.temperature_c,
            self.humidity,
            self.co2_ppm,
            self.lux,
            self.noise.label(),
        )
    }
}

impl FromStr for MoodRecord {
    type Err = MoodLogError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| MoodLogError::Malformed {
            line: line.to_owned(),
            reason,
        };

        let fields: Vec<&str> = line.trim_end().split(',').collect();
        let [ts, mood, temp, hum, co2, lux, noise] = fields.as_slice() else {
            return Err(malformed("expected 7 fields"));
        };

        Ok(Self {
            timestamp: NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT)
                .map_err(|_| malformed("bad timestamp"))?,
            mood: Mood::from_label(mood).ok_or_else(|| malformed("unknown mood"))?,
            temperature_c: temp.parse().map_err(|_| malformed("bad temperature"))?,
            humidity: hum.parse().map_err(|_| malformed("bad humidity"))?,
            co2_ppm: co2.parse().map_err(|_| malformed("bad co2"))?,
            lux: lux.parse().map_err(|_| malformed("bad light"))?,
            noise: NoiseLevel::from_label(noise).ok_or_else(|| malformed("unknown noise level"))?,
        })
    }
}
