//! Turn raw event timestamps into a chart-ready series.
//!
//! Events are counted in five minute windows that start `mark` minutes ago.

use crate::chart::types::SLOTS;
use crate::models::{LabelSet, Series};
use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};

/// Width of one bucket, in minutes.
pub const BUCKET_MINUTES: i64 = 5;

/// Minutes-ago marks of the four chart slots.
pub const MARKS: [i64; SLOTS] = [30, 25, 20, 15];

/// Count events (unix seconds) strictly inside each window
/// `(now - mark, now - mark + 5min)`.
pub fn bucket_counts(timestamps: &[i64], now: DateTime<Utc>, marks: &[i64]) -> Vec<u64> {
    marks
        .iter()
        .map(|&mark| {
            let start = (now - TimeDelta::minutes(mark)).timestamp();
            let end = (now - TimeDelta::minutes(mark - BUCKET_MINUTES)).timestamp();
            timestamps.iter().filter(|&&t| t > start && t < end).count() as u64
        })
        .collect()
}

/// Label set (`"30m"`, `"25m"`, ..) and series for the recent activity chart.
pub fn recent_activity(timestamps: &[i64], now: DateTime<Utc>) -> Result<(LabelSet, Series)> {
    let labels: Vec<String> = MARKS.iter().map(|m| format!("{m}m")).collect();
    let counts: Vec<f64> = bucket_counts(timestamps, now, &MARKS)
        .into_iter()
        .map(|c| c as f64)
        .collect();
    Ok((LabelSet::new(&labels)?, Series::new(&counts)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn counts_land_in_their_window() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let ago = |min: i64, sec: i64| {
            (now - TimeDelta::minutes(min) + TimeDelta::seconds(sec)).timestamp()
        };
        let events = [
            ago(30, 10),  // 30m bucket
            ago(29, 0),   // 30m bucket
            ago(20, 60),  // 20m bucket
            ago(15, 1),   // 15m bucket
            ago(45, 0),   // too old
            ago(25, 0),   // exactly on a boundary: excluded
        ];
        let (labels, series) = recent_activity(&events, now).unwrap();
        assert_eq!(labels.labels()[0], "30m");
        assert_eq!(series.values(), &[2.0, 0.0, 1.0, 1.0]);
    }
}
