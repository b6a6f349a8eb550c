//! Variable traces along an ancestor lineage.
//!
//! A descendant's expression history starts generations before its birth:
//! the chain root's series, then each intermediate ancestor's, then its own.
//! This joins [`colony_phylo::ancestor_chain`] with the archive — ancestors
//! absent from the observed data (pruned or never emitted) are skipped, not
//! errors.

use colony_core::{AgentId, SimTime, TimeWindow};
use colony_data::{SnapshotArchive, VarPath};
use colony_phylo::{PhyloResult, ancestor_chain};

/// One ancestor's in-window series of a traced variable.
#[derive(Clone, Debug, PartialEq)]
pub struct LineageTrace {
    pub agent_id: AgentId,
    pub series:   Vec<(SimTime, f64)>,
}

/// The in-window series of `path` for every ancestor of `descendant`
/// (root first, the descendant itself last), skipping ancestors with no
/// in-window data.
///
/// # Errors
///
/// [`colony_phylo::PhyloError::MalformedIdentifier`] if `descendant` does
/// not extend `stem` with a numeric suffix.
pub fn lineage_series(
    archive: &SnapshotArchive,
    descendant: &str,
    stem: &str,
    path: &VarPath,
    window: TimeWindow,
) -> PhyloResult<Vec<LineageTrace>> {
    let mut traces = Vec::new();
    for ancestor in ancestor_chain(descendant, stem)? {
        let series: Vec<(SimTime, f64)> = archive
            .window_iter(window)
            .filter_map(|(t, timepoint)| {
                let value = timepoint.agent(ancestor.as_str())?.number(path)?;
                Some((t, value))
            })
            .collect();
        if !series.is_empty() {
            traces.push(LineageTrace { agent_id: ancestor, series });
        }
    }
    Ok(traces)
}
