use proptest::prelude::*;
use ukkonen::SuffixTree;
use test_helpers::{leaf_starts, occurrences};

fn small_alphabet_text() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c')], 0..48)
}

fn dna_text() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'N')],
        1..96,
    )
}

proptest! {
    #[test]
    fn leaves_biject_with_suffixes(input in small_alphabet_text()) {
        let tree = SuffixTree::from_bytes(&input).expect("construction succeeds");
        let text = tree.text();

        let mut starts = Vec::new();
        for leaf in tree.leaves(tree.root()) {
            let start = tree.node(leaf).identity().suffix_start();
            prop_assert!(start.is_some(), "leaf without a positive identity");
            let start = start.unwrap_or_default();
            prop_assert_eq!(tree.path_label(leaf), text.suffix(start).to_vec());
            starts.push(start);
        }
        starts.sort_unstable();
        prop_assert_eq!(starts, (1..=text.len()).collect::<Vec<_>>());
    }

    #[test]
    fn internal_nodes_branch(input in dna_text()) {
        let tree = SuffixTree::from_bytes(&input).expect("construction succeeds");
        for id in tree.preorder(tree.root()) {
            let node = tree.node(id);
            if node.identity().is_internal() {
                prop_assert!(node.num_children() >= 2, "unary internal node {}", node.identity());
            }
        }
    }

    #[test]
    fn path_labels_occur_exactly_at_leaf_starts(input in small_alphabet_text()) {
        let tree = SuffixTree::from_bytes(&input).expect("construction succeeds");
        let text = tree.text().as_bytes().to_vec();
        for id in tree.preorder(tree.root()) {
            let label = tree.path_label(id);
            prop_assert_eq!(occurrences(&text, &label), leaf_starts(&tree, id));
        }
    }

    #[test]
    fn identity_spaces_never_overlap(input in dna_text()) {
        let tree = SuffixTree::from_bytes(&input).expect("construction succeeds");
        let mut internal = Vec::new();
        for id in tree.preorder(tree.root()) {
            let node = tree.node(id);
            let identity = node.identity();
            if node.is_root() {
                prop_assert_eq!(identity.get(), 0);
            } else if node.is_leaf() {
                prop_assert!(identity.is_leaf());
            } else {
                prop_assert!(identity.is_internal());
                internal.push(identity.get());
            }
        }
        internal.sort_unstable();
        let expected: Vec<i64> = (1..=tree.internal_node_count() as i64).rev().map(|k| -k).collect();
        prop_assert_eq!(internal, expected);
    }

    #[test]
    fn built_trees_pass_verification(input in small_alphabet_text()) {
        let tree = SuffixTree::from_bytes(&input).expect("construction succeeds");
        prop_assert_eq!(tree.verify(), Ok(()));
    }
}
