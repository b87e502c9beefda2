//! CSV mood log adapter.
//!
//! Implements [`MoodSink`] as an append-only CSV file.  The parent
//! directory and the header are created on the first write; existing
//! lines are never rewritten.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::app::ports::MoodSink;
use crate::error::MoodLogError;
use crate::mood::{CSV_HEADER, MoodEvent, MoodRecord};

pub struct CsvMoodLog {
    path: PathBuf,
}

impl CsvMoodLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse every record back, skipping the header.
    pub fn read_all(&self) -> Result<Vec<MoodRecord>, MoodLogError> {
        let text = fs::read_to_string(&self.path)?;
        text.lines()
            .filter(|l| !l.is_empty() && *l != CSV_HEADER)
            .map(str::parse)
            .collect()
    }
}

impl MoodSink for CsvMoodLog {
    fn record(&mut self, event: &MoodEvent) -> Result<(), MoodLogError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let is_new = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if is_new {
            writeln!(file, "{}", CSV_HEADER)?;
        }
        writeln!(file, "{}", event.to_record().to_csv_line())?;

        info!(
            "Mood '{}' saved to {}",
            event.mood.label(),
            self.path.display()
        );
        Ok(())
    }
}
