//! Extraction metrics
//!
//! Counters and histograms recorded through the `metrics` facade. The core never
//! installs a recorder; a host that wants these numbers installs one (for example a
//! Prometheus exporter) before running extractions. Without a recorder every call
//! here is a no-op.

use crate::types::{RejectionReason, ShapeStatus};

pub const RUNS_TOTAL: &str = "injury_extraction_runs_total";
pub const RECORDS_TOTAL: &str = "injury_extraction_records_total";
pub const REJECTIONS_TOTAL: &str = "injury_extraction_rejections_total";
pub const SHAPE_CHANGES_TOTAL: &str = "injury_extraction_shape_changes_total";
pub const RECORDS_PER_RUN: &str = "injury_extraction_records_per_run";
pub const DURATION_SECONDS: &str = "injury_extraction_duration_seconds";

/// Metrics for the extraction pipeline
pub struct ExtractionMetrics;

impl ExtractionMetrics {
    /// Register descriptions with the installed recorder.
    pub fn describe() {
        ::metrics::describe_counter!(RUNS_TOTAL, "Extraction runs, by team");
        ::metrics::describe_counter!(RECORDS_TOTAL, "Injury records produced, by team");
        ::metrics::describe_counter!(
            REJECTIONS_TOTAL,
            "Sub-blocks dropped by validation, by team and reason"
        );
        ::metrics::describe_counter!(
            SHAPE_CHANGES_TOTAL,
            "Runs where the page no longer had the expected structure"
        );
        ::metrics::describe_histogram!(RECORDS_PER_RUN, "Records produced per run");
        ::metrics::describe_histogram!(DURATION_SECONDS, "Wall time of one extraction run");
    }

    pub fn record_run(team: &str, records: usize, duration_secs: f64) {
        ::metrics::counter!(RUNS_TOTAL, "team" => team.to_string()).increment(1);
        ::metrics::counter!(RECORDS_TOTAL, "team" => team.to_string())
            .increment(records as u64);
        ::metrics::histogram!(RECORDS_PER_RUN).record(records as f64);
        ::metrics::histogram!(DURATION_SECONDS).record(duration_secs);
    }

    pub fn record_rejection(team: &str, reason: RejectionReason) {
        ::metrics::counter!(
            REJECTIONS_TOTAL,
            "team" => team.to_string(),
            "reason" => reason.as_str()
        )
        .increment(1);
    }

    pub fn record_shape(team: &str, shape: ShapeStatus) {
        if shape.is_shape_changed() {
            ::metrics::counter!(SHAPE_CHANGES_TOTAL, "team" => team.to_string()).increment(1);
        }
    }
}
