//! CSV report backend.
//!
//! Creates `survival.csv` in the configured output directory.  The survived
//! flag is encoded 0/1 — the encoding downstream statistics notebooks
//! expect.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{ReportResult, SurvivalRow};

/// Writes the survival report to `survival.csv`.
pub struct CsvReportWriter {
    survival: Writer<File>,
    finished: bool,
}

impl CsvReportWriter {
    /// Open (or create) `survival.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut survival = Writer::from_path(dir.join("survival.csv"))?;
        survival.write_record(["agent_id", "survived"])?;

        Ok(Self { survival, finished: false })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_survival(&mut self, rows: &[SurvivalRow]) -> ReportResult<()> {
        for row in rows {
            self.survival.write_record(&[
                row.agent_id.to_string(),
                (row.survived as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.survival.flush()?;
        Ok(())
    }
}
