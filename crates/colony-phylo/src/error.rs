//! Error types for colony-phylo.

use thiserror::Error;

/// Errors raised while decoding agent IDs or building lineage trees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhyloError {
    /// The ID does not extend the computed stem with a decimal-digit suffix.
    /// Surfaces the offending ID and the stem so an ID-convention mismatch
    /// between the simulation and this toolkit is diagnosable from the
    /// message alone.
    #[error("ID {id:?} does not extend stem {stem:?} with a numeric suffix")]
    MalformedIdentifier { id: String, stem: String },

    /// The same agent ID appeared twice in the tree-builder input.
    #[error("duplicate agent ID {id:?} in tree-builder input")]
    DuplicateIdentifier { id: String },

    /// Raised by [`PhyloForest::single_root`][crate::PhyloForest::single_root]
    /// when the caller assumes one colony lineage but the forest disagrees.
    #[error("expected a single phylogeny root, found {count}")]
    MultipleRoots { count: usize },
}

/// Alias for `Result<T, PhyloError>`.
pub type PhyloResult<T> = Result<T, PhyloError>;
