//! Survival classification over an observation window.

use std::collections::BTreeSet;

use colony_core::{AgentId, TimeWindow};
use colony_data::SnapshotArchive;

/// Derived survival labels for one window of one run.
///
/// Invariant: `dead ⊆ observed`.  An agent absent from every in-window
/// timepoint is in neither set and [`survived`][Self::survived] reports
/// `None` for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurvivalLabels {
    dead:     BTreeSet<AgentId>,
    observed: BTreeSet<AgentId>,
}

impl SurvivalLabels {
    /// Agents flagged dead at any in-window timepoint.
    pub fn dead(&self) -> &BTreeSet<AgentId> {
        &self.dead
    }

    /// Agents present at any in-window timepoint.
    pub fn observed(&self) -> &BTreeSet<AgentId> {
        &self.observed
    }

    /// Observed agents never flagged dead, in ID order.
    pub fn survivors(&self) -> impl Iterator<Item = &AgentId> {
        self.observed.iter().filter(|id| !self.dead.contains(id.as_str()))
    }

    /// `Some(true)` survived, `Some(false)` died, `None` never observed in
    /// the window.
    pub fn survived(&self, agent_id: &str) -> Option<bool> {
        if !self.observed.contains(agent_id) {
            return None;
        }
        Some(!self.dead.contains(agent_id))
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    pub fn dead_count(&self) -> usize {
        self.dead.len()
    }
}

/// Classify every agent observed within `window` as dead or surviving.
///
/// The dead flag is OR-accumulated across the window: once an agent reads
/// `Some(true)` at any in-window timepoint it stays in the dead set, so the
/// result is independent of iteration order even if a flag ever reverted.
/// A flag that is absent (`None`) counts as not-dead at that timepoint.
///
/// A window matching zero timepoints yields two empty sets — not an error.
pub fn classify_survival(archive: &SnapshotArchive, window: TimeWindow) -> SurvivalLabels {
    let mut labels = SurvivalLabels::default();
    for (_, timepoint) in archive.window_iter(window) {
        for (id, state) in timepoint.agents() {
            labels.observed.insert(id.clone());
            if state.dead() == Some(true) {
                labels.dead.insert(id.clone());
            }
        }
    }
    labels
}
