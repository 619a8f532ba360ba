//! Plain data row types written by output backends.

use seirs_core::Day;
use seirs_sim::{Census, Peak};

/// Compartment counts of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRow {
    pub t: u32,
    pub s: u64,
    pub e: u64,
    pub i: u64,
    pub r: u64,
}

impl DailyRow {
    pub fn new(day: Day, census: &Census) -> Self {
        Self {
            t: day.0,
            s: census.susceptible as u64,
            e: census.exposed as u64,
            i: census.infectious as u64,
            r: census.removed as u64,
        }
    }
}

/// First epidemic peak of one replicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakRow {
    /// Replicate label, usually the stem of its daily file (`run_rep01`).
    pub rep:      String,
    pub day_peak: u32,
    pub peak_i:   u64,
}

impl PeakRow {
    pub fn new(rep: impl Into<String>, peak: &Peak) -> Self {
        Self {
            rep: rep.into(),
            day_peak: peak.day.0,
            peak_i:   peak.infectious as u64,
        }
    }
}
