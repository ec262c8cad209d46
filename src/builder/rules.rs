//! Extension rule selection
//!
//! Rule 1 never shows up here: it happens for all leaves at once when the
//! global end marker advances. What is left is deciding, for the end of
//! the current suffix, whether the next character must be added (Rule 2)
//! or is already there (Rule 3).

use crate::tree::SuffixTree;

use super::ActivePoint;

/// Outcome of a single extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Branch from an existing node.
    Branch,
    /// Split an edge, then branch from the new node.
    Split,
    /// Already present; the rest of the phase is implicit.
    Present,
}

impl Rule {
    /// True for both Rule 2 variants.
    pub fn creates_leaf(self) -> bool {
        matches!(self, Rule::Branch | Rule::Split)
    }

    /// Choose the rule for adding the byte at phase position `pos` at
    /// `point`.
    pub fn decide(tree: &SuffixTree, point: &ActivePoint, pos: usize) -> Rule {
        let text = tree.text();
        let x = text.at(pos);

        if point.at_node(tree) {
            let node = tree.node(point.node);
            // a leaf end is never branched from
            if node.is_leaf() || node.child(x).is_some() {
                Rule::Present
            } else {
                Rule::Branch
            }
        } else {
            let edge_pos = point.cursor + 1;
            Rule::mid_edge(text.at(edge_pos), edge_pos, x, pos, text.sentinel())
        }
    }

    /// Mid-edge decision on raw bytes.
    ///
    /// The byte following the cursor on the edge already continues the
    /// suffix unless it is the sentinel anywhere other than at `pos`
    /// itself.
    pub fn mid_edge(edge_byte: u8, edge_pos: usize, x: u8, pos: usize, sentinel: u8) -> Rule {
        if edge_byte == x && (x != sentinel || edge_pos == pos) {
            Rule::Present
        } else {
            Rule::Split
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b'a', 4, b'a', 7 => Rule::Present; "matching byte")]
    #[test_case(b'a', 4, b'b', 7 => Rule::Split; "diverging byte")]
    #[test_case(b'$', 7, b'$', 7 => Rule::Present; "sentinel at its own position")]
    #[test_case(b'$', 4, b'$', 7 => Rule::Split; "sentinel seen elsewhere")]
    #[test_case(b'$', 7, b'a', 7 => Rule::Split; "sentinel against plain byte")]
    #[test_case(b'a', 6, b'$', 7 => Rule::Split; "plain byte against sentinel")]
    fn mid_edge_rules(edge_byte: u8, edge_pos: usize, x: u8, pos: usize) -> Rule {
        Rule::mid_edge(edge_byte, edge_pos, x, pos, b'$')
    }

    #[test]
    fn node_rules_follow_child_map() {
        // "aab$": root -> {a: internal "a", b: leaf, $: leaf}
        let st = SuffixTree::from_bytes(b"aab").unwrap();
        let root = ActivePoint::new(st.root(), 0);
        assert_eq!(Rule::decide(&st, &root, 1), Rule::Present);

        let a = st.child(st.root(), b'a').unwrap();
        let at_a = ActivePoint::new(a, st.edge_end(a));
        assert_eq!(Rule::decide(&st, &at_a, 3), Rule::Present);
        assert_eq!(Rule::decide(&st, &at_a, 4), Rule::Branch);

        let leaf = st.child(st.root(), b'b').unwrap();
        let at_leaf_end = ActivePoint::new(leaf, st.edge_end(leaf));
        assert_eq!(Rule::decide(&st, &at_leaf_end, 1), Rule::Present);

        let mid_leaf = ActivePoint::new(leaf, 3);
        assert_eq!(Rule::decide(&st, &mid_leaf, 4), Rule::Present);
        assert_eq!(Rule::decide(&st, &mid_leaf, 1), Rule::Split);
    }

    #[test]
    fn rule_two_variants_create_leaves() {
        assert!(Rule::Branch.creates_leaf());
        assert!(Rule::Split.creates_leaf());
        assert!(!Rule::Present.creates_leaf());
    }
}
