//! `colony-survival` — who lived, who died, and what they expressed.
//!
//! Scans snapshot archives for each agent's `boundary.dead` flag over an
//! observation window and derives the label sets behind the survival report
//! and the survival-colored figures.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`classify`]   | `classify_survival`, `SurvivalLabels`               |
//! | [`expression`] | live/dead per-agent expression averages             |
//! | [`trace`]      | variable traces along an agent's ancestor lineage   |
//!
//! Lineage decoding failures propagate as
//! [`colony_phylo::PhyloError`] — this crate adds no failure modes of its
//! own (classification over an empty window is an empty result, not an
//! error).

pub mod classify;
pub mod expression;
pub mod trace;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use classify::{SurvivalLabels, classify_survival};
pub use expression::{ExpressionAverages, live_dead_averages};
pub use trace::{LineageTrace, lineage_series};
