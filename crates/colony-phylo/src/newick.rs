//! Newick serialization of a built lineage tree.
//!
//! This toolkit's trees carry names only — division events have no measured
//! branch lengths — so the output is the plain-name Newick subset:
//! `(child,child)parent;`.  Downstream tree renderers consume this directly.

use crate::tree::{LineageNode, PhyloForest};

/// Serialize the tree rooted at `root` as a single Newick statement.
pub fn tree_to_newick(forest: &PhyloForest, root: &LineageNode) -> String {
    let mut out = String::new();
    write_node(forest, root, &mut out);
    out.push(';');
    out
}

/// Serialize every tree in the forest, one Newick statement per line.
pub fn forest_to_newick(forest: &PhyloForest) -> String {
    let mut out = String::new();
    for root in forest.roots() {
        out.push_str(&tree_to_newick(forest, root));
        out.push('\n');
    }
    out
}

fn write_node(forest: &PhyloForest, node: &LineageNode, out: &mut String) {
    if !node.is_leaf() {
        out.push('(');
        let mut first = true;
        for child in forest.children_of(node) {
            if !first {
                out.push(',');
            }
            first = false;
            write_node(forest, child, out);
        }
        out.push(')');
    }
    out.push_str(node.name().as_str());
}
