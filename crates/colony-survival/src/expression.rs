//! Per-agent expression averages split by survival.
//!
//! Feeds the expression-vs-survival dot plots: one mean expression value per
//! agent over the window, partitioned into agents that died in-window and
//! agents that did not.  Only values at timepoints where the agent is not
//! flagged dead contribute to its mean — post-death concentrations are
//! artifacts of a cell that no longer grows.

use std::collections::BTreeMap;

use colony_core::{AgentId, TimeWindow};
use colony_data::{SnapshotArchive, VarPath};

/// Mean in-window expression per agent, keyed by survival outcome.
///
/// An agent observed only while dead accumulates no values and appears in
/// neither map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionAverages {
    pub live: BTreeMap<AgentId, f64>,
    pub dead: BTreeMap<AgentId, f64>,
}

/// Average `path` over `window` for every observed agent, split live/dead.
pub fn live_dead_averages(
    archive: &SnapshotArchive,
    path: &VarPath,
    window: TimeWindow,
) -> ExpressionAverages {
    struct Acc {
        sum:   f64,
        count: usize,
        died:  bool,
    }

    let mut acc: BTreeMap<AgentId, Acc> = BTreeMap::new();
    for (_, timepoint) in archive.window_iter(window) {
        for (id, state) in timepoint.agents() {
            let entry = acc
                .entry(id.clone())
                .or_insert(Acc { sum: 0.0, count: 0, died: false });
            let dead_now = state.dead() == Some(true);
            entry.died |= dead_now;
            if dead_now {
                continue;
            }
            if let Some(value) = state.number(path) {
                entry.sum += value;
                entry.count += 1;
            }
        }
    }

    let mut averages = ExpressionAverages::default();
    for (id, a) in acc {
        if a.count == 0 {
            continue;
        }
        let mean = a.sum / a.count as f64;
        if a.died {
            averages.dead.insert(id, mean);
        } else {
            averages.live.insert(id, mean);
        }
    }
    averages
}
