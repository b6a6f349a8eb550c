//! Unit tests for the lineage codec, tree builder, and traversal.

#[cfg(test)]
mod codec {
    use crate::{PhyloError, common_stem, parent_suffix, phylogeny_suffix};

    #[test]
    fn stem_is_longest_common_prefix() {
        let ids = ["agent0", "agent1", "agent00"];
        assert_eq!(common_stem(ids), "agent");
    }

    #[test]
    fn stem_of_single_id_is_whole_id() {
        assert_eq!(common_stem(["agent"]), "agent");
    }

    #[test]
    fn stem_respects_char_boundaries() {
        // 'é' and 'è' share a UTF-8 lead byte; the stem must not split it.
        assert_eq!(common_stem(["colonyé0", "colonyè1"]), "colony");
    }

    #[test]
    fn suffix_strips_stem() {
        assert_eq!(phylogeny_suffix("agent01", "agent").unwrap(), "01");
        assert_eq!(phylogeny_suffix("agent", "agent").unwrap(), "");
    }

    #[test]
    fn suffix_rejects_non_numeric() {
        let err = phylogeny_suffix("agentX", "agent").unwrap_err();
        assert_eq!(
            err,
            PhyloError::MalformedIdentifier {
                id:   "agentX".into(),
                stem: "agent".into(),
            }
        );
    }

    #[test]
    fn suffix_rejects_foreign_stem() {
        assert!(phylogeny_suffix("colony0", "agent").is_err());
    }

    #[test]
    fn parent_truncates_one_digit() {
        assert_eq!(parent_suffix("010"), "01");
        assert_eq!(parent_suffix("0"), "");
        assert_eq!(parent_suffix(""), "");
    }
}

#[cfg(test)]
mod tree {
    use std::collections::BTreeSet;

    use crate::{PhyloError, PhyloForest};

    const COLONY: [&str; 5] = ["agent", "agent0", "agent1", "agent00", "agent01"];

    fn preorder_names(forest: &PhyloForest) -> Vec<String> {
        let root = forest.single_root().unwrap();
        forest
            .preorder(root)
            .map(|n| n.name().as_str().to_owned())
            .collect()
    }

    #[test]
    fn single_root_preorder() {
        // Tree:
        //                   /-agent00
        //         /-agent0-|
        // agent--|          \-agent01
        //        |
        //         \-agent1
        let forest = PhyloForest::build(COLONY).unwrap();
        assert_eq!(forest.root_count(), 1);
        assert_eq!(
            preorder_names(&forest),
            ["agent", "agent0", "agent00", "agent01", "agent1"]
        );
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        let forest = PhyloForest::build(Vec::<&str>::new()).unwrap();
        assert!(forest.is_empty());
        assert_eq!(forest.root_count(), 0);
    }

    #[test]
    fn singleton() {
        let forest = PhyloForest::build(["agent"]).unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(preorder_names(&forest), ["agent"]);
    }

    #[test]
    fn malformed_suffix_poisons_batch() {
        let err = PhyloForest::build(["agent", "agentX"]).unwrap_err();
        assert_eq!(
            err,
            PhyloError::MalformedIdentifier {
                id:   "agentX".into(),
                stem: "agent".into(),
            }
        );
    }

    #[test]
    fn completeness_no_ids_dropped_or_invented() {
        let forest = PhyloForest::build(COLONY).unwrap();
        let names: BTreeSet<&str> = forest.iter().map(|n| n.name().as_str()).collect();
        let expected: BTreeSet<&str> = COLONY.into_iter().collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn prefix_invariant() {
        let forest = PhyloForest::build(COLONY).unwrap();
        for node in forest.iter() {
            let Some(parent) = forest.parent_of(node) else {
                continue;
            };
            assert_eq!(
                crate::parent_suffix(node.suffix()),
                parent.suffix(),
                "prefix invariant violated at {}",
                node.name()
            );
        }
    }

    #[test]
    fn build_is_order_independent() {
        let shuffled = ["agent01", "agent", "agent1", "agent00", "agent0"];
        let a = PhyloForest::build(COLONY).unwrap();
        let b = PhyloForest::build(shuffled).unwrap();
        assert_eq!(preorder_names(&a), preorder_names(&b));
        for node in a.iter() {
            let twin = b.node(node.suffix()).unwrap();
            assert_eq!(node.parent_suffix(), twin.parent_suffix());
            assert_eq!(node.child_suffixes(), twin.child_suffixes());
        }
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = PhyloForest::build(["agent", "agent0", "agent0"]).unwrap_err();
        assert_eq!(err, PhyloError::DuplicateIdentifier { id: "agent0".into() });
    }

    #[test]
    fn orphan_siblings_form_two_roots() {
        // Stem "agent"; neither suffix's parent ("") was observed.
        let forest = PhyloForest::build(["agent0", "agent1"]).unwrap();
        assert_eq!(forest.root_count(), 2);
        let roots: Vec<&str> = forest.roots().map(|n| n.name().as_str()).collect();
        assert_eq!(roots, ["agent0", "agent1"]);
    }

    #[test]
    fn single_root_assertion_fails_on_two_roots() {
        let forest = PhyloForest::build(["agent0", "agent1"]).unwrap();
        assert_eq!(
            forest.single_root().unwrap_err(),
            PhyloError::MultipleRoots { count: 2 }
        );
    }

    #[test]
    fn node_lookup_by_name_and_suffix() {
        let forest = PhyloForest::build(COLONY).unwrap();
        let node = forest.node_by_name("agent01").unwrap();
        assert_eq!(node.suffix(), "01");
        assert_eq!(node.generation(), 2);
        assert!(node.is_leaf());
        assert!(forest.node("01").is_some());
        assert!(forest.node_by_name("other7").is_none());
    }
}

#[cfg(test)]
mod lineage {
    use crate::ancestor_chain;

    #[test]
    fn chain_runs_root_to_agent() {
        let chain: Vec<String> = ancestor_chain("agent01", "agent")
            .unwrap()
            .map(|id| id.as_str().to_owned())
            .collect();
        assert_eq!(chain, ["agent", "agent0", "agent01"]);
    }

    #[test]
    fn chain_of_root_is_just_the_root() {
        let chain: Vec<String> = ancestor_chain("agent", "agent")
            .unwrap()
            .map(|id| id.as_str().to_owned())
            .collect();
        assert_eq!(chain, ["agent"]);
    }

    #[test]
    fn chain_is_restartable() {
        let chain = ancestor_chain("agent010", "agent").unwrap();
        let first: Vec<_> = chain.clone().collect();
        let second: Vec<_> = chain.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn chain_is_exact_size() {
        let mut chain = ancestor_chain("agent010", "agent").unwrap();
        assert_eq!(chain.len(), 4);
        chain.next();
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn chain_rejects_malformed_id() {
        assert!(ancestor_chain("agentX", "agent").is_err());
    }
}

#[cfg(test)]
mod newick {
    use crate::{PhyloForest, forest_to_newick, tree_to_newick};

    #[test]
    fn five_agent_tree() {
        let forest =
            PhyloForest::build(["agent", "agent0", "agent1", "agent00", "agent01"]).unwrap();
        let root = forest.single_root().unwrap();
        assert_eq!(
            tree_to_newick(&forest, root),
            "((agent00,agent01)agent0,agent1)agent;"
        );
    }

    #[test]
    fn singleton_tree() {
        let forest = PhyloForest::build(["agent"]).unwrap();
        let root = forest.single_root().unwrap();
        assert_eq!(tree_to_newick(&forest, root), "agent;");
    }

    #[test]
    fn forest_one_statement_per_root() {
        let forest = PhyloForest::build(["agent0", "agent1"]).unwrap();
        assert_eq!(forest_to_newick(&forest), "agent0;\nagent1;\n");
    }
}
