//! Dashboard aggregation helpers.
//!
//! # Design
//! - The activity heatmap is derived from per-day counts of activity dates.
//! - Robot specifications are static product data.

use std::collections::BTreeMap;

use agribot_api_models::{Activity, ModelVersion};
use chrono::{Duration, NaiveDate};

/// Days covered by the activity heatmap, ending today.
pub const HEATMAP_DAYS: i64 = 250;
/// Activities shown before "Show all".
pub const RECENT_ACTIVITY_LIMIT: usize = 4;
/// Robot release shown on the summary cards.
pub const ROBOT_VERSION: &str = "Version 1.0.2";

/// Everything the dashboard renders after its parallel fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    /// Detectable plants.
    pub plant_count: u64,
    /// Detectable diseases.
    pub disease_count: u64,
    /// Latest object detection models.
    pub object_detection: Vec<ModelVersion>,
    /// Stage classification models.
    pub stage_classification: Vec<ModelVersion>,
    /// Segmentation models.
    pub segmentation: Vec<ModelVersion>,
    /// Repository activity, newest first as served.
    pub activities: Vec<Activity>,
}

/// Number of activities recorded on one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCount {
    /// Calendar day.
    pub date: NaiveDate,
    /// Activities on that day.
    pub count: usize,
}

/// Count activities per calendar day, oldest day first. Entries whose
/// `createdAt` does not start with an ISO date are skipped.
#[must_use]
pub fn daily_counts(activities: &[Activity]) -> Vec<DayCount> {
    let mut counts = BTreeMap::<NaiveDate, usize>::new();
    for activity in activities {
        let day = activity.created_at.split('T').next().unwrap_or_default();
        if let Ok(date) = NaiveDate::parse_from_str(day, "%Y-%m-%d") {
            *counts.entry(date).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(date, count)| DayCount { date, count })
        .collect()
}

/// Colour bucket for a heatmap cell: `0` for none, `5` for five or more.
#[must_use]
pub fn intensity(count: usize) -> u8 {
    u8::try_from(count.min(5)).unwrap_or(5)
}

/// Dense heatmap grid covering [`HEATMAP_DAYS`] days up to `today`.
#[must_use]
pub fn heatmap_cells(today: NaiveDate, counts: &[DayCount]) -> Vec<DayCount> {
    let lookup: BTreeMap<_, _> = counts.iter().map(|day| (day.date, day.count)).collect();
    (0..=HEATMAP_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayCount {
                date,
                count: lookup.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Tooltip text for a heatmap cell.
#[must_use]
pub fn cell_tooltip(day: DayCount) -> String {
    format!("Commits on {}: {}", day.date.format("%b %d"), day.count)
}

/// Robot specification table: `(label, value)`.
pub const ROBOT_SPECS: [(&str, &str); 26] = [
    ("Processor", "Raspberry Pi 4 Model B (Quad-core Cortex-A72, 1.5GHz)"),
    ("RAM", "8GB LPDDR4"),
    ("Storage", "32GB microSD"),
    ("Camera", "Raspberry Pi Camera Module 3"),
    ("Still Resolution", "11.9 megapixels"),
    ("Video Modes", "2304 × 1296p56, 2304 × 1296p30 HDR, 1536 × 864p120"),
    ("Sensor Resolution", "4608 × 2592 pixels"),
    ("Sensor Image Area", "6.45 × 3.63mm (7.4mm diagonal)"),
    ("Horizontal FoV", "66 degrees"),
    ("Vertical FoV", "41 degrees"),
    ("Frame Rate", "30 FPS"),
    ("Object Detection Model", "YOLOv8 (for detecting objects like plants)"),
    ("Stage Classification Model", "YOLOv8 (for classifying plant health stages)"),
    ("Segmentation Model", "Mask R-CNN (for segmenting areas like leaves or disease regions)"),
    ("YOLO Object Detection", "90-95%"),
    ("YOLO Stage Classification", "85-92%"),
    ("Mask RCNN Segmentation", "87-94%"),
    ("Max Object Detection Range", "1 meter"),
    ("Number of Sprayers", "4"),
    ("Spray Precision", "Adaptive (based on AI detection)"),
    ("Spray Activation Method", "Relay-controlled via Raspberry Pi"),
    ("Wireless Connectivity", "Wi-Fi (2.4GHz & 5GHz)"),
    ("Edge Processing", "Runs AI models on-device (no cloud needed)"),
    ("Heat Resistance", "Up to 80°C (suitable for moderate outdoor and indoor conditions)"),
    ("Water Resistance", "IP65 (with proper enclosure)"),
    ("Material", "PETG"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(created_at: &str) -> Activity {
        Activity {
            kind: "robot-update".to_string(),
            repo: "agribot".to_string(),
            details: "push".to_string(),
            created_at: created_at.to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn daily_counts_group_by_calendar_day() {
        let counts = daily_counts(&[
            activity("2025-03-02T10:00:00Z"),
            activity("2025-03-01T08:00:00Z"),
            activity("2025-03-02T23:59:59Z"),
            activity("garbage"),
        ]);
        assert_eq!(
            counts,
            vec![
                DayCount {
                    date: day(2025, 3, 1),
                    count: 1
                },
                DayCount {
                    date: day(2025, 3, 2),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn heatmap_is_dense_and_ends_today() {
        let today = day(2025, 3, 2);
        let cells = heatmap_cells(
            today,
            &[DayCount {
                date: today,
                count: 7,
            }],
        );
        assert_eq!(cells.len(), 251);
        assert_eq!(cells.last().map(|c| c.count), Some(7));
        assert_eq!(cells[0].count, 0);
        assert_eq!(intensity(7), 5);
        assert_eq!(intensity(0), 0);
        assert_eq!(cell_tooltip(cells[250]), "Commits on Mar 02: 7");
    }
}
