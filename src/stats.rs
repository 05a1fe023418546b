//! Run timing and counters, with an optional CSV export for comparing runs.

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::*;
use indicatif::{HumanCount, HumanDuration};
use std::fs;
use std::fs::OpenOptions;
use std::path::Path;
use std::time::{Duration, Instant, SystemTime};

#[derive(Debug, Clone, Default)]
pub struct StatsTimer {
    start_time: Option<Instant>,
    duration: Duration,
}

impl StatsTimer {
    pub fn start() -> Self {
        StatsTimer {
            start_time: Some(Instant::now()),
            duration: Duration::ZERO,
        }
    }

    /// Stop the timer. Calling finish on a timer that never started (or
    /// finishing twice) keeps the recorded duration.
    pub fn finish(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.duration = start.elapsed();
        }
    }

    pub fn get_duration(&self) -> Duration {
        self.duration
    }

    pub fn get_duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn get_duration_human(&self) -> String {
        HumanDuration(self.duration).to_string()
    }
}

/// Counters for one run of either flow. Fields that belong to the other
/// flow stay at zero.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub run_start_time: Option<SystemTime>,
    pub total_timer: StatsTimer,
    pub scan_timer: StatsTimer,
    pub plan_timer: StatsTimer,
    pub apply_timer: StatsTimer,
    pub rewrite_timer: StatsTimer,

    pub documents_scanned: usize,
    pub links_found: usize,
    pub links_needing_update: usize,
    pub referenced_files: usize,
    pub physical_files: usize,
    pub entries_planned: usize,
    pub conflicts_found: usize,
    pub renames_completed: usize,
    pub documents_updated: usize,
    pub backups_created: usize,
    pub errors_recorded: usize,
}

impl RunStats {
    pub fn start() -> Self {
        RunStats {
            run_start_time: Some(SystemTime::now()),
            total_timer: StatsTimer::start(),
            ..Default::default()
        }
    }

    pub fn print(&self) {
        println!();
        println!("{}", "RUN STATISTICS".green().bold());
        println!("{}", "=".repeat(44).green());
        for (label, value) in self.rows() {
            println!("{:<28}{}", label, value.cyan());
        }
        println!();
    }

    /// Append one row per run; the header is written only when the file is
    /// created.
    pub fn write_csv(&self, filename: &Path) -> Result<()> {
        let file_exists = fs::metadata(filename).is_ok();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(filename)?;
        let mut writer = csv::Writer::from_writer(file);

        let rows = self.rows();
        if !file_exists {
            writer.write_record(rows.iter().map(|(label, _)| *label))?;
        }
        writer.write_record(rows.iter().map(|(_, value)| value.as_str()))?;
        writer.flush()?;
        Ok(())
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let started = self
            .run_start_time
            .map(|t| DateTime::<Utc>::from(t).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        vec![
            ("run_start_time", started),
            ("total_duration", self.total_timer.get_duration_human()),
            ("scan_secs", format!("{:.3}", self.scan_timer.get_duration_secs())),
            ("plan_secs", format!("{:.3}", self.plan_timer.get_duration_secs())),
            ("apply_secs", format!("{:.3}", self.apply_timer.get_duration_secs())),
            (
                "rewrite_secs",
                format!("{:.3}", self.rewrite_timer.get_duration_secs()),
            ),
            (
                "documents_scanned",
                HumanCount(self.documents_scanned as u64).to_string(),
            ),
            ("links_found", HumanCount(self.links_found as u64).to_string()),
            (
                "links_needing_update",
                HumanCount(self.links_needing_update as u64).to_string(),
            ),
            (
                "referenced_files",
                HumanCount(self.referenced_files as u64).to_string(),
            ),
            (
                "physical_files",
                HumanCount(self.physical_files as u64).to_string(),
            ),
            (
                "entries_planned",
                HumanCount(self.entries_planned as u64).to_string(),
            ),
            (
                "conflicts_found",
                HumanCount(self.conflicts_found as u64).to_string(),
            ),
            (
                "renames_completed",
                HumanCount(self.renames_completed as u64).to_string(),
            ),
            (
                "documents_updated",
                HumanCount(self.documents_updated as u64).to_string(),
            ),
            (
                "backups_created",
                HumanCount(self.backups_created as u64).to_string(),
            ),
            (
                "errors_recorded",
                HumanCount(self.errors_recorded as u64).to_string(),
            ),
        ]
    }
}
