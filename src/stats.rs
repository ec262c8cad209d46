//! Summary numbers for reporting a built tree

use std::fmt;

use crate::tree::SuffixTree;

/// Counters gathered while the builder runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BuildReport {
    /// Phases executed (`m - 1`).
    pub phases: usize,
    /// Phases cut short by Rule 3.
    pub phases_ended_early: usize,
    /// Explicit extensions performed across all phases.
    pub extensions: usize,
}

/// Shape of a built tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeStats {
    /// Text length including the sentinel.
    pub text_len: usize,
    /// Leaf count; equals `text_len` for a complete tree.
    pub leaves: usize,
    /// Internal (branching) nodes, root excluded.
    pub internal_nodes: usize,
    /// All nodes, root included.
    pub total_nodes: usize,
    /// Internal nodes carrying a suffix link.
    pub suffix_links: usize,
    /// Longest root-to-node path, in edges.
    pub max_depth: usize,
}

impl TreeStats {
    /// Collect statistics in one preorder pass.
    pub fn collect(tree: &SuffixTree) -> Self {
        let mut stats = TreeStats {
            text_len: tree.text().len(),
            total_nodes: tree.len(),
            ..TreeStats::default()
        };

        let mut stack = vec![(tree.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = tree.node(id);
            stats.max_depth = stats.max_depth.max(depth);
            match (node.is_root(), node.is_leaf()) {
                (true, _) => {}
                (false, true) => stats.leaves += 1,
                (false, false) => {
                    stats.internal_nodes += 1;
                    if node.suffix_link().is_some() {
                        stats.suffix_links += 1;
                    }
                }
            }
            stack.extend(tree.children(id).map(|child| (child, depth + 1)));
        }

        stats
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text length:          {}", self.text_len)?;
        writeln!(f, "Leaves:               {}", self.leaves)?;
        writeln!(f, "Total internal nodes: {}", self.internal_nodes)?;
        writeln!(f, "Total nodes:          {}", self.total_nodes)?;
        writeln!(f, "Suffix links:         {}", self.suffix_links)?;
        write!(f, "Max depth:            {}", self.max_depth)
    }
}
