//! Per-agent variable time series.
//!
//! Agents exist for a slice of the run — born at division, gone at death or
//! run end — so a series covers only the timepoints where the agent is
//! present and the variable holds a number.  Absence is skipped, not an
//! error: a pruned or not-yet-born ancestor simply contributes nothing.

use colony_core::SimTime;

use crate::snapshot::{SnapshotArchive, VarPath};

/// The `(time, value)` series of one agent's variable over the whole run.
pub fn variable_series(
    archive: &SnapshotArchive,
    agent_id: &str,
    path: &VarPath,
) -> Vec<(SimTime, f64)> {
    archive
        .iter()
        .filter_map(|(t, timepoint)| {
            let value = timepoint.agent(agent_id)?.number(path)?;
            Some((t, value))
        })
        .collect()
}
