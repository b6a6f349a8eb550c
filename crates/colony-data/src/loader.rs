//! JSON archive loader.
//!
//! # Archive format
//!
//! One JSON object per run.  Keys are snapshot times in seconds (JSON object
//! keys are strings, so `"0.0"`, `"2.0"`, …); values are the store
//! hierarchy at that time.  Only the `agents` sub-mapping is decoded.
//!
//! ```json
//! {
//!   "0.0": {
//!     "agents": {
//!       "agent0": { "boundary": { "dead": false, "location": [1.0, 2.0] } }
//!     }
//!   },
//!   "2.0": { "agents": { } }
//! }
//! ```
//!
//! Time keys that do not parse as a decimal number are a hard error naming
//! the offending key — a misencoded archive is a data/config mismatch worth
//! halting on.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use colony_core::SimTime;

use crate::DataError;
use crate::snapshot::{SnapshotArchive, TimePoint};

/// Load a snapshot archive from a JSON file.
pub fn load_archive_json(path: &Path) -> Result<SnapshotArchive, DataError> {
    let file = std::fs::File::open(path)?;
    load_archive_reader(std::io::BufReader::new(file))
}

/// Like [`load_archive_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from in-memory
/// documents.
pub fn load_archive_reader<R: Read>(reader: R) -> Result<SnapshotArchive, DataError> {
    let raw: BTreeMap<String, TimePoint> = serde_json::from_reader(reader)?;

    let mut timepoints: BTreeMap<SimTime, TimePoint> = BTreeMap::new();
    for (key, timepoint) in raw {
        let secs: f64 = key.trim().parse().map_err(|_| {
            DataError::Parse(format!(
                "invalid time key {key:?}: expected seconds as a decimal number"
            ))
        })?;
        timepoints.insert(SimTime(secs), timepoint);
    }

    let archive = SnapshotArchive::from_timepoints(timepoints);
    log::debug!(
        "loaded archive: {} timepoints, {} distinct agents",
        archive.len(),
        archive.agent_ids().len(),
    );
    Ok(archive)
}
