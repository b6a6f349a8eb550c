//! `colony-phylo` — lineage tree reconstruction from agent ID strings.
//!
//! A dividing cell names its daughters by appending one decimal digit to its
//! own ID, so a run's agent IDs implicitly encode the whole division tree:
//! strip the common *stem* and each remaining digit is one branch choice.
//! This crate decodes that structure.
//!
//! # Crate layout
//!
//! | Module      | Contents                                           |
//! |-------------|----------------------------------------------------|
//! | [`codec`]   | `common_stem`, `phylogeny_suffix`, `parent_suffix` |
//! | [`tree`]    | `PhyloForest`, `LineageNode`, preorder traversal   |
//! | [`lineage`] | `AncestorChain` (root-to-agent ID iterator)        |
//! | [`newick`]  | Newick serialization of a built tree               |
//! | [`error`]   | `PhyloError`, `PhyloResult<T>`                     |
//!
//! # Example
//!
//! ```
//! use colony_phylo::PhyloForest;
//!
//! let forest = PhyloForest::build(
//!     ["agent", "agent0", "agent1", "agent00", "agent01"],
//! ).unwrap();
//! let root = forest.single_root().unwrap();
//! assert_eq!(root.name().as_str(), "agent");
//! let names: Vec<_> = forest
//!     .preorder(root)
//!     .map(|n| n.name().as_str().to_owned())
//!     .collect();
//! assert_eq!(names, ["agent", "agent0", "agent00", "agent01", "agent1"]);
//! ```

pub mod codec;
pub mod error;
pub mod lineage;
pub mod newick;
pub mod tree;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use codec::{common_stem, parent_suffix, phylogeny_suffix};
pub use error::{PhyloError, PhyloResult};
pub use lineage::{AncestorChain, ancestor_chain};
pub use newick::{forest_to_newick, tree_to_newick};
pub use tree::{LineageNode, PhyloForest, Preorder};
