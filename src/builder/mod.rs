//! Ukkonen construction driver
//!
//! Gusfield's phase/extension formulation:
//! - phase i adds text position i + 1 to every suffix seen so far
//! - Rule 1 (leaf extension) is one increment of the global end marker
//! - extensions j run from the first suffix that is not yet a leaf up to
//!   i + 1, each applying Rule 2 (new leaf, maybe after a split) or
//!   stopping the phase at the first Rule 3
//! - suffix links carry the active point between extensions, with
//!   skip/count walk-downs keeping the total work linear

mod active_point;
mod identity;
mod rules;

pub use active_point::{ActivePoint, WalkUp};
pub use identity::IdentityGenerator;
pub use rules::Rule;

use tracing::{debug, debug_span, trace};

use crate::stats::BuildReport;
use crate::text::Text;
use crate::tree::{NodeId, SuffixTree};
use crate::{BuildConfig, BuildError};

/// Builds suffix trees with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    config: BuildConfig,
}

impl Builder {
    /// Builder using `config`.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Append the configured sentinel to `input` and build.
    pub fn build_bytes(&self, input: &[u8]) -> Result<SuffixTree, BuildError> {
        let text = Text::new(input, self.config.sentinel)?;
        self.build(text)
    }

    /// Build the tree for an already terminated `text`.
    pub fn build(&self, text: Text) -> Result<SuffixTree, BuildError> {
        self.build_with_report(text).map(|(tree, _)| tree)
    }

    /// Build and also return construction counters.
    pub fn build_with_report(&self, text: Text) -> Result<(SuffixTree, BuildReport), BuildError> {
        let m = text.len();
        let _span = debug_span!("build", len = m).entered();

        let mut construction = Construction::new(text)?;
        for i in 1..m {
            construction.phase(i)?;
        }
        let (tree, report) = construction.finish();

        debug!(
            leaves = m,
            internal_nodes = tree.internal_node_count(),
            early_phases = report.phases_ended_early,
            "suffix tree built"
        );

        if self.config.verify {
            tree.verify()?;
        }
        Ok((tree, report))
    }
}

/// Mutable state of one construction run.
struct Construction {
    tree: SuffixTree,
    ids: IdentityGenerator,
    /// Most recently created leaf and the extension that made it.
    last_leaf: NodeId,
    last_extension: usize,
    report: BuildReport,
}

impl Construction {
    /// Implicit tree I(1): the root and a single leaf for position 1.
    fn new(text: Text) -> Result<Self, BuildError> {
        let mut tree = SuffixTree::with_root(text);
        tree.end_marker_mut().advance();
        let root = tree.root();
        let first = tree.add_leaf(root, 1, 1)?;

        Ok(Self {
            tree,
            ids: IdentityGenerator::new(),
            last_leaf: first,
            last_extension: 1,
            report: BuildReport::default(),
        })
    }

    fn phase(&mut self, i: usize) -> Result<(), BuildError> {
        let mut point = ActivePoint::new(self.last_leaf, self.tree.global_end().get());
        // Rule 1 for every leaf at once
        self.tree.end_marker_mut().advance();

        let mut pending_link: Option<NodeId> = None;
        let first = self.last_extension + 1;
        trace!(phase = i, first_extension = first, "phase start");

        for j in first..=i + 1 {
            let (next, rule) = self.extension(j, i, point)?;

            if next.at_node(&self.tree) {
                if let Some(from) = pending_link.take() {
                    self.tree.set_suffix_link(from, next.node);
                }
            }
            if rule == Rule::Split {
                pending_link = Some(next.node);
            }
            self.report.extensions += 1;

            if rule == Rule::Present {
                self.report.phases_ended_early += 1;
                trace!(phase = i, extension = j, "rule 3, phase ends");
                break;
            }
            point = next;
        }

        self.report.phases += 1;
        Ok(())
    }

    /// Make sure suffix `j..=i + 1` is in the tree, starting from `point`,
    /// the end of suffix `j - 1..=i`.
    fn extension(&mut self, j: usize, i: usize, point: ActivePoint) -> Result<(ActivePoint, Rule), BuildError> {
        let up = point.walk_up(&self.tree)?;
        let root = self.tree.root();

        let mut next = if up.from == root {
            self.walk_down(root, j, i)?
        } else {
            let node = self.tree.node(up.from);
            let link = node
                .suffix_link()
                .ok_or(BuildError::MissingSuffixLink(node.identity()))?;
            self.walk_down(link, up.begin, up.end)?
        };

        let rule = Rule::decide(&self.tree, &next, i + 1);
        if rule == Rule::Split {
            let identity = self.ids.next_internal();
            next.node = self.tree.split_edge(next.node, next.cursor, identity)?;
            trace!(extension = j, node = %identity, at = next.cursor, "split edge");
        }
        if rule.creates_leaf() {
            self.last_leaf = self.tree.add_leaf(next.node, j, i + 1)?;
            self.last_extension = j;
        }
        Ok((next, rule))
    }

    /// Skip/count descent from `from` over text positions `begin..=end`.
    ///
    /// Only the first byte of each edge is inspected; the rest of the range
    /// is known to be in the tree already.
    fn walk_down(&self, from: NodeId, mut begin: usize, end: usize) -> Result<ActivePoint, BuildError> {
        let tree = &self.tree;
        let text = tree.text();
        let mut node = from;
        let mut cursor = tree.edge_end(node);

        while begin <= end {
            let key = text.at(begin);
            let parent = node;
            node = tree.child(parent, key).ok_or_else(|| BuildError::CorruptTree {
                node: tree.node(parent).identity(),
                expected: key as char,
            })?;

            let start = tree.node(node).label().start;
            let edge_len = tree.edge_len(node);
            cursor = if edge_len < end - begin + 1 {
                tree.edge_end(node)
            } else {
                start + (end - begin)
            };
            begin += edge_len;
        }

        Ok(ActivePoint::new(node, cursor))
    }

    fn finish(self) -> (SuffixTree, BuildReport) {
        debug_assert_eq!(self.ids.minted(), self.tree.internal_node_count());
        (self.tree, self.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Identity;

    fn build(input: &[u8]) -> SuffixTree {
        Builder::default().build_bytes(input).unwrap()
    }

    #[test]
    fn single_character_needs_no_internal_nodes() {
        let st = build(b"a");
        assert_eq!(st.internal_node_count(), 0);
        assert_eq!(st.children(st.root()).count(), 2);
        assert_eq!(st.leaves(st.root()).count(), 2);
    }

    #[test]
    fn empty_input_is_a_single_leaf() {
        let st = build(b"");
        assert_eq!(st.len(), 2);
        assert_eq!(st.leaves(st.root()).count(), 1);
    }

    #[test]
    fn repeated_characters_form_a_chain() {
        let st = build(b"aaaa");
        assert_eq!(st.leaves(st.root()).count(), 5);
        assert_eq!(st.internal_node_count(), 3);

        // a -> aa -> aaa, each with a '$' leaf and one deeper child
        let mut node = st.child(st.root(), b'a').unwrap();
        for depth in 1..=3 {
            assert_eq!(st.path_label(node), vec![b'a'; depth]);
            assert_eq!(st.node(node).num_children(), 2);
            assert!(st.child(node, b'$').is_some());
            node = st.child(node, b'a').unwrap();
        }
        assert!(st.node(node).is_leaf());
        assert_eq!(st.node(node).identity(), Identity::leaf(1));
    }

    #[test]
    fn branch_on_shared_prefix() {
        let st = build(b"abcabxabcd");
        let ab = st
            .preorder(st.root())
            .find(|&id| st.path_label(id) == b"ab")
            .expect("branch node for \"ab\"");
        assert!(st.node(ab).identity().is_internal());
        assert!(st.child(ab, b'c').is_some());
        assert!(st.child(ab, b'x').is_some());

        let mut starts: Vec<usize> = st.suffix_starts(ab).collect();
        starts.sort_unstable();
        assert_eq!(starts, vec![1, 4, 7]);
    }

    #[test]
    fn suffix_links_point_one_character_shorter() {
        let st = build(b"mississippi");
        for id in st.preorder(st.root()) {
            let node = st.node(id);
            if node.identity().is_internal() {
                let link = node.suffix_link().expect("internal nodes are linked");
                assert_eq!(st.path_label(link), st.path_label(id)[1..].to_vec());
            }
        }
    }

    #[test]
    fn report_counts_early_phases() {
        let text = Text::new(b"abab", b'$').unwrap();
        let (st, report) = Builder::default().build_with_report(text).unwrap();
        assert_eq!(report.phases, st.text().len() - 1);
        assert_eq!(report.phases_ended_early, 2);
        assert!(report.extensions >= report.phases);
    }

    #[test]
    fn walk_down_miss_reports_the_node_and_byte() {
        let text = Text::new(b"ab", b'$').unwrap();
        let c = Construction::new(text).unwrap();
        assert_eq!(
            c.walk_down(c.tree.root(), 2, 2),
            Err(BuildError::CorruptTree {
                node: Identity::ROOT,
                expected: 'b'
            })
        );
    }

    #[test]
    fn unlinked_internal_ancestor_is_an_error() {
        let text = Text::new(b"abab", b'$').unwrap();
        let mut c = Construction::new(text).unwrap();
        c.tree.end_marker_mut().advance();
        c.tree.end_marker_mut().advance();

        // root -a-> (internal, no link) -ba-> leaf 1
        let identity = c.ids.next_internal();
        c.tree.split_edge(c.last_leaf, 1, identity).unwrap();

        let point = ActivePoint::new(c.last_leaf, 2);
        assert!(matches!(
            c.extension(2, 2, point),
            Err(BuildError::MissingSuffixLink(id)) if id == identity
        ));
    }

    #[test]
    fn sentinel_in_input_is_refused() {
        let err = Builder::default().build_bytes(b"a$b").unwrap_err();
        assert!(matches!(err, BuildError::Text(_)));
    }

    #[test]
    fn custom_sentinel_allows_dollar_in_text() {
        let config = BuildConfig::default().with_sentinel(0).with_verify(true);
        let st = Builder::new(config).build_bytes(b"a$b$a").unwrap();
        assert_eq!(st.leaves(st.root()).count(), 6);
        assert_eq!(st.text().sentinel(), 0);
    }
}
