//! Per-node render instructions for an external tree renderer.
//!
//! Styling travels as an explicit [`StyleConfig`] value from the call site
//! into the plan — there is no shared default style table to mutate, so two
//! plans built with different configs never interfere.

use colony_core::AgentId;
use colony_phylo::PhyloForest;
use colony_survival::SurvivalLabels;

// ── NodeClass ─────────────────────────────────────────────────────────────────

/// Survival-derived display class for one tree node.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NodeClass {
    /// Observed in the window and never flagged dead.
    AliveInWindow,
    /// Flagged dead at some in-window timepoint.
    DeadInWindow,
    /// In the tree but absent from every in-window timepoint.
    OutsideWindow,
}

// ── StyleConfig ───────────────────────────────────────────────────────────────

/// Colors applied per [`NodeClass`].
///
/// The defaults match the survival figures elsewhere in the pipeline:
/// green for survivors, black for deaths.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StyleConfig {
    pub alive_color:   String,
    pub dead_color:    String,
    pub outside_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            alive_color:   "green".to_owned(),
            dead_color:    "black".to_owned(),
            outside_color: "gray".to_owned(),
        }
    }
}

impl StyleConfig {
    fn color_for(&self, class: NodeClass) -> &str {
        match class {
            NodeClass::AliveInWindow => &self.alive_color,
            NodeClass::DeadInWindow => &self.dead_color,
            NodeClass::OutsideWindow => &self.outside_color,
        }
    }
}

// ── RenderInstruction ─────────────────────────────────────────────────────────

/// One node's styling, handed to the external tree-drawing tool.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RenderInstruction {
    pub agent_id: AgentId,
    pub class:    NodeClass,
    pub color:    String,
}

/// Classify every node of the forest against the survival labels.
///
/// Instructions are emitted in preorder per root so the list order matches
/// the Newick serialization of the same forest.
pub fn render_plan(
    forest: &PhyloForest,
    labels: &SurvivalLabels,
    style: &StyleConfig,
) -> Vec<RenderInstruction> {
    let mut plan = Vec::with_capacity(forest.len());
    for root in forest.roots() {
        for node in forest.preorder(root) {
            let class = match labels.survived(node.name().as_str()) {
                Some(true) => NodeClass::AliveInWindow,
                Some(false) => NodeClass::DeadInWindow,
                None => NodeClass::OutsideWindow,
            };
            plan.push(RenderInstruction {
                agent_id: node.name().clone(),
                class,
                color: style.color_for(class).to_owned(),
            });
        }
    }
    plan
}
