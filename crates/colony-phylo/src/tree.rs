//! Lineage forest construction and traversal.
//!
//! # Data layout
//!
//! Nodes live in a single **arena keyed by phylogeny suffix**.  Each
//! [`LineageNode`] owns only its child *suffix list*; the parent link is a
//! non-owning suffix back-reference used for lookup, never for traversal
//! ownership.  There are no `Rc` cycles to manage and the whole structure
//! serializes as plain maps and vectors.
//!
//! Child suffixes are stored in sorted order because construction processes
//! IDs lexicographically, so [`PhyloForest::preorder`] is deterministic
//! without re-sorting.
//!
//! Cycles are structurally impossible: a child's suffix is always exactly
//! one character longer than its parent's, so no insertion can make a node
//! its own ancestor.

use colony_core::AgentId;
use rustc_hash::FxHashMap;

use crate::codec::{common_stem, parent_suffix, phylogeny_suffix};
use crate::{PhyloError, PhyloResult};

// ── LineageNode ───────────────────────────────────────────────────────────────

/// One agent in a lineage tree.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineageNode {
    name:     AgentId,
    suffix:   String,
    parent:   Option<String>,
    children: Vec<String>,
}

impl LineageNode {
    /// The full agent ID (stem + suffix).
    #[inline]
    pub fn name(&self) -> &AgentId {
        &self.name
    }

    /// The phylogeny suffix — this node's key in the arena.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The parent's suffix, or `None` for a root.
    ///
    /// A root with a non-empty suffix (its textual parent was never observed
    /// in the input) also reports `None`.
    #[inline]
    pub fn parent_suffix(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Suffixes of this node's children, in sorted order.
    #[inline]
    pub fn child_suffixes(&self) -> &[String] {
        &self.children
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Division count from this tree's root: the suffix length.
    #[inline]
    pub fn generation(&self) -> usize {
        self.suffix.len()
    }
}

// ── PhyloForest ───────────────────────────────────────────────────────────────

/// One or more lineage trees reconstructed from an agent ID set.
///
/// A wcEcoli colony run normally yields exactly one tree; multiple disjoint
/// roots appear only when the input set omits common ancestors.  The builder
/// returns however many roots it finds — callers that require a single
/// colony lineage assert it with [`single_root`][Self::single_root].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhyloForest {
    stem:  String,
    nodes: FxHashMap<String, LineageNode>,
    roots: Vec<String>,
}

impl PhyloForest {
    /// Build lineage trees from a collection of unique agent IDs.
    ///
    /// The stem is computed once over the full set, IDs are processed in
    /// lexicographic order (parents always precede children because a parent
    /// ID is a strict prefix of its children's IDs), and an ID whose parent
    /// suffix has not been seen starts a new root.
    ///
    /// An empty input yields an empty forest, not an error.
    ///
    /// # Errors
    ///
    /// - [`PhyloError::MalformedIdentifier`] if any ID's suffix is not a
    ///   decimal-digit string.  The stem is global, so one bad ID invalidates
    ///   the whole batch.
    /// - [`PhyloError::DuplicateIdentifier`] if the same ID appears twice.
    pub fn build<I, S>(agent_ids: I) -> PhyloResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<AgentId>,
    {
        let mut ids: Vec<AgentId> = agent_ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Ok(PhyloForest {
                stem:  String::new(),
                nodes: FxHashMap::default(),
                roots: Vec::new(),
            });
        }

        let stem = common_stem(ids.iter().map(AgentId::as_str)).to_owned();
        ids.sort_unstable();

        let mut nodes: FxHashMap<String, LineageNode> =
            FxHashMap::with_capacity_and_hasher(ids.len(), Default::default());
        let mut roots: Vec<String> = Vec::new();

        for id in ids {
            let suffix = phylogeny_suffix(id.as_str(), &stem)?.to_owned();
            if nodes.contains_key(&suffix) {
                return Err(PhyloError::DuplicateIdentifier {
                    id: id.as_str().to_owned(),
                });
            }

            // The root's parent key is its own (empty) suffix, but it can
            // never match: the duplicate check above guarantees the arena
            // does not yet hold this suffix.
            let parent_key = parent_suffix(&suffix);
            let parent = match nodes.get_mut(parent_key) {
                Some(parent_node) => {
                    parent_node.children.push(suffix.clone());
                    Some(parent_key.to_owned())
                }
                None => {
                    roots.push(suffix.clone());
                    None
                }
            };

            nodes.insert(
                suffix.clone(),
                LineageNode {
                    name: id,
                    suffix,
                    parent,
                    children: Vec::new(),
                },
            );
        }

        Ok(PhyloForest { stem, nodes, roots })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// The common stem shared by every agent ID in this forest.
    #[inline]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Total node count across all trees.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    // ── Node access ───────────────────────────────────────────────────────

    /// Look up a node by phylogeny suffix.
    pub fn node(&self, suffix: &str) -> Option<&LineageNode> {
        self.nodes.get(suffix)
    }

    /// Look up a node by full agent ID.
    pub fn node_by_name(&self, name: &str) -> Option<&LineageNode> {
        self.nodes.get(name.strip_prefix(&self.stem)?)
    }

    /// The parent node of `node`, or `None` for roots.
    pub fn parent_of(&self, node: &LineageNode) -> Option<&LineageNode> {
        self.nodes.get(node.parent.as_deref()?)
    }

    /// This node's children, in sorted-suffix order.
    pub fn children_of<'a>(
        &'a self,
        node: &'a LineageNode,
    ) -> impl Iterator<Item = &'a LineageNode> {
        node.children.iter().filter_map(|s| self.nodes.get(s.as_str()))
    }

    /// Roots in discovery (sorted-suffix) order.
    pub fn roots(&self) -> impl Iterator<Item = &LineageNode> {
        self.roots.iter().filter_map(|s| self.nodes.get(s.as_str()))
    }

    /// The unique root of a single-colony run.
    ///
    /// # Errors
    ///
    /// [`PhyloError::MultipleRoots`] unless the forest holds exactly one
    /// tree.  The builder never raises this — it is the caller-level
    /// assertion for contexts that assume one colony lineage.
    pub fn single_root(&self) -> PhyloResult<&LineageNode> {
        match self.roots.as_slice() {
            [only] => self.node(only).ok_or(PhyloError::MultipleRoots { count: 0 }),
            other => Err(PhyloError::MultipleRoots { count: other.len() }),
        }
    }

    /// All nodes, in arena (arbitrary) order.
    pub fn iter(&self) -> impl Iterator<Item = &LineageNode> {
        self.nodes.values()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Depth-first preorder traversal of the tree rooted at `root`, children
    /// visited in sorted-suffix order.
    pub fn preorder<'a>(&'a self, root: &'a LineageNode) -> Preorder<'a> {
        Preorder {
            forest: self,
            stack:  vec![root.suffix.as_str()],
        }
    }
}

// ── Preorder ──────────────────────────────────────────────────────────────────

/// Iterator returned by [`PhyloForest::preorder`].
pub struct Preorder<'a> {
    forest: &'a PhyloForest,
    stack:  Vec<&'a str>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a LineageNode;

    fn next(&mut self) -> Option<Self::Item> {
        let suffix = self.stack.pop()?;
        let node = self.forest.nodes.get(suffix)?;
        // Reverse push so the sorted child list pops in order.
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
