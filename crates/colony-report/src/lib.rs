//! `colony-report` — survival report and tree-render plan assembly.
//!
//! The analysis core's only serialized artifact is the survival report: one
//! row per agent observed in the window, columns `agent_id` and `survived`
//! (0/1).  Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | File created         |
//! |----------|---------|----------------------|
//! | *(none)* | CSV     | `survival.csv`       |
//! | `sqlite` | SQLite  | `survival.db`        |
//!
//! Both implement [`ReportWriter`].  Tree *rendering* is delegated to an
//! external drawing tool; this crate only assembles the per-node
//! [`RenderInstruction`] list (survival class + color) that tool consumes,
//! with all styling carried in an explicit [`StyleConfig`] value.
//!
//! # Usage
//!
//! ```rust,ignore
//! use colony_report::{CsvReportWriter, ReportWriter, survival_rows};
//!
//! let rows = survival_rows(&labels);
//! let mut writer = CsvReportWriter::new(Path::new("./out"))?;
//! writer.write_survival(&rows)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod plan;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvReportWriter;
pub use error::{ReportError, ReportResult};
pub use plan::{NodeClass, RenderInstruction, StyleConfig, render_plan};
pub use row::{SurvivalRow, survival_rows};
pub use writer::ReportWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteReportWriter;
