//! `colony-data` — read-only access to simulation snapshot archives.
//!
//! The simulation's data-retrieval layer emits one JSON document per run:
//! a mapping from snapshot time (seconds, as a string key) to the hierarchy
//! of stores at that time.  This crate loads that document and exposes the
//! paths the analysis layer actually reads — the `agents` mapping and each
//! agent's `boundary.dead` flag — as typed accessors that return `Option`
//! for missing data instead of silently defaulting.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`snapshot`] | `SnapshotArchive`, `TimePoint`, `AgentState`, `VarPath` |
//! | [`loader`]   | `load_archive_json`, `load_archive_reader`            |
//! | [`series`]   | per-agent variable time series extraction             |
//! | [`error`]    | `DataError`, `DataResult<T>`                          |

pub mod error;
pub mod loader;
pub mod series;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DataError, DataResult};
pub use loader::{load_archive_json, load_archive_reader};
pub use series::variable_series;
pub use snapshot::{AgentState, SnapshotArchive, TimePoint, VarPath};
