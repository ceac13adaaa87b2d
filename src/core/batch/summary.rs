//! Batch summary and reporting
//!
//! This module defines structures for tracking and reporting batch results.

use crate::domain::SubmissionResult;
use std::time::Duration;

/// Summary of a batch submission run
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Total number of rows processed
    pub total: usize,

    /// Number of successful submissions (status 200 or 201)
    pub successful: usize,

    /// Number of failed rows (rejected, errored, or unreachable)
    pub failed: usize,

    /// Duration of the run
    pub duration: Duration,

    /// One result per input row, in input order
    pub results: Vec<SubmissionResult>,
}

impl BatchSummary {
    /// Create a new empty batch summary
    pub fn new() -> Self {
        Self {
            total: 0,
            successful: 0,
            failed: 0,
            duration: Duration::from_secs(0),
            results: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a per-row outcome, updating the counters
    pub fn record(&mut self, result: SubmissionResult) {
        self.total += 1;
        if result.success {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    /// Results for rows that did not succeed, in input order
    pub fn failed_results(&self) -> impl Iterator<Item = &SubmissionResult> {
        self.results.iter().filter(|r| !r.success)
    }

    /// Check if the run was fully successful (no failures)
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.successful as f64 / self.total as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total,
            successful = self.successful,
            failed = self.failed,
            duration_secs = self.duration.as_secs(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Batch completed"
        );

        for result in self.failed_results() {
            tracing::warn!(
                test_case_id = %result.test_case_id,
                status_code = ?result.status_code,
                response = %result.response,
                "Submission failed"
            );
        }
    }
}

impl Default for BatchSummary {
    fn default() -> Self {
        Self::new()
    }
}
