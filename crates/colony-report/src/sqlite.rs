//! SQLite report backend (feature `sqlite`).
//!
//! Creates a single `survival.db` file in the configured output directory
//! with one table: `survival`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ReportWriter;
use crate::{ReportResult, SurvivalRow};

/// Writes the survival report to an SQLite database.
pub struct SqliteReportWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteReportWriter {
    /// Open (or create) `survival.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let conn = Connection::open(dir.join("survival.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS survival (
                 agent_id TEXT    NOT NULL,
                 survived INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteReportWriter {
    fn write_survival(&mut self, rows: &[SurvivalRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO survival (agent_id, survived) VALUES (?1, ?2)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id.as_str(),
                    row.survived as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
