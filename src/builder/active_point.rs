//! Active point: where the current extension sits in the tree
//!
//! (node, cursor) with the cursor a 1-indexed text position on the edge
//! into `node`. The point is "at the node" when the cursor equals the
//! resolved edge end; the root's empty edge ends at 0.

use crate::tree::{NodeId, SuffixTree};
use crate::BuildError;

/// Transient position of the extension loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePoint {
    /// Node whose incoming edge holds the cursor.
    pub node: NodeId,
    /// Text position on that edge.
    pub cursor: usize,
}

/// Starting place for the walk down of the next extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkUp {
    /// Ancestor to jump from (via its suffix link, or the root).
    pub from: NodeId,
    /// First text position left to match below it.
    pub begin: usize,
    /// Last text position left to match; `end < begin` means nothing.
    pub end: usize,
}

impl ActivePoint {
    /// Point at `cursor` on the edge into `node`.
    pub fn new(node: NodeId, cursor: usize) -> Self {
        Self { node, cursor }
    }

    /// True when the point sits exactly on `node` rather than mid-edge.
    #[inline]
    pub fn at_node(&self, tree: &SuffixTree) -> bool {
        self.cursor == tree.edge_end(self.node)
    }

    /// Nearest place to resume from after dropping the first character.
    ///
    /// A node that already has a suffix link is used directly with an
    /// empty remainder. Otherwise we back up to the parent and carry the
    /// part of the edge matched so far.
    pub fn walk_up(&self, tree: &SuffixTree) -> Result<WalkUp, BuildError> {
        let node = tree.node(self.node);
        let end = tree.edge_end(self.node);

        if self.cursor == end && node.suffix_link().is_some() {
            return Ok(WalkUp {
                from: self.node,
                begin: end,
                end: end - 1,
            });
        }

        let parent = node.parent().ok_or(BuildError::Orphan(node.identity()))?;
        Ok(WalkUp {
            from: parent,
            begin: node.label().start,
            end: self.cursor,
        })
    }
}
