//! Plain data rows written by report backends.

use colony_core::AgentId;
use colony_survival::SurvivalLabels;

/// One agent's survival outcome over the observation window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurvivalRow {
    pub agent_id: AgentId,
    pub survived: bool,
}

/// Build the report rows for every observed agent, sorted by agent ID so
/// repeated runs produce byte-identical files.
pub fn survival_rows(labels: &SurvivalLabels) -> Vec<SurvivalRow> {
    labels
        .observed()
        .iter()
        .map(|id| SurvivalRow {
            agent_id: id.clone(),
            survived: labels.survived(id.as_str()).unwrap_or(false),
        })
        .collect()
}
