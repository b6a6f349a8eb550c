//! The `ReportWriter` trait implemented by all backend writers.

use crate::{ReportResult, SurvivalRow};

/// Trait implemented by the CSV and SQLite report writers.
pub trait ReportWriter {
    /// Write a batch of survival rows.
    fn write_survival(&mut self, rows: &[SurvivalRow]) -> ReportResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
