//! Suffix tree arena
//!
//! Nodes live in a dense `Vec` addressed by [`NodeId`]; parent, child and
//! suffix-link fields are indices, so splitting an edge only rewrites a
//! handful of slots and never moves a node.
//!
//! The global end marker lives here too. Leaf edges store
//! [`EdgeEnd::Open`] and are resolved against it on every read.

mod node;
mod traversal;
mod verify;

pub use node::{EdgeEnd, EdgeLabel, Identity, Node, NodeId};
pub use traversal::{Ancestors, Children, Leaves, Preorder};
pub use verify::VerifyError;

use thiserror::Error;

use crate::text::Text;

/// Structural errors raised by arena edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A child keyed on the same first byte already exists.
    #[error("node {node} already has a child on '{key}'")]
    DuplicateEdge {
        /// Identity of the would-be parent.
        node: Identity,
        /// Leading byte of the rejected edge.
        key: char,
    },

    /// Split position is not strictly inside the edge.
    #[error("cannot split edge into node {node} at {at}: edge spans [{start}, {end}]")]
    InvalidSplit {
        /// Identity of the node below the edge.
        node: Identity,
        /// Requested split position.
        at: usize,
        /// Edge start.
        start: usize,
        /// Resolved edge end.
        end: usize,
    },

    /// The root has no edge to split.
    #[error("the root has no incoming edge")]
    RootEdge,
}

/// Shared end position of every leaf edge.
///
/// Incremented exactly once per phase; every open edge observes the new
/// value without being touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalEnd(usize);

impl GlobalEnd {
    /// Current value.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Extend every leaf by one position.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

/// A suffix tree over a sentinel-terminated [`Text`].
#[derive(Debug, Clone)]
pub struct SuffixTree {
    text: Text,
    nodes: Vec<Node>,
    end: GlobalEnd,
    internal_nodes: usize,
}

impl SuffixTree {
    /// Empty tree (root only) over `text`.
    pub(crate) fn with_root(text: Text) -> Self {
        let mut nodes = Vec::with_capacity(2 * text.len());
        nodes.push(Node::root());
        Self {
            text,
            nodes,
            end: GlobalEnd::default(),
            internal_nodes: 0,
        }
    }

    /// Text indexed by this tree.
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Root node id.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Node stored at `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Internal (branching) nodes created during construction.
    pub fn internal_node_count(&self) -> usize {
        self.internal_nodes
    }

    /// The global end marker shared by every leaf edge.
    pub fn global_end(&self) -> GlobalEnd {
        self.end
    }

    pub(crate) fn end_marker_mut(&mut self) -> &mut GlobalEnd {
        &mut self.end
    }

    /// Inclusive end of the edge into `id`, open ends resolved.
    #[inline]
    pub fn edge_end(&self, id: NodeId) -> usize {
        self.node(id).label.resolve(self.end.get())
    }

    /// Number of text positions on the edge into `id`.
    #[inline]
    pub fn edge_len(&self, id: NodeId) -> usize {
        self.node(id).label.len(self.end.get())
    }

    /// Child of `id` whose edge starts with `key`.
    #[inline]
    pub fn child(&self, id: NodeId, key: u8) -> Option<NodeId> {
        self.node(id).child(key)
    }

    /// Bytes on the edge into `id`.
    pub fn label(&self, id: NodeId) -> &[u8] {
        let node = self.node(id);
        self.text.slice(node.label.start, self.edge_end(id))
    }

    /// Concatenated edge labels from the root down to `id`.
    pub fn path_label(&self, id: NodeId) -> Vec<u8> {
        let mut parts: Vec<&[u8]> = self.ancestors(id).map(|n| self.label(n)).collect();
        parts.reverse();
        parts.concat()
    }

    /// Length of [`SuffixTree::path_label`] without materializing it.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).map(|n| self.edge_len(n)).sum()
    }

    /// Attach `child` to `parent` under `key`.
    pub(crate) fn add_child(&mut self, parent: NodeId, key: u8, child: NodeId) -> Result<(), TreeError> {
        let identity = self.node(parent).identity;
        self.node_mut(parent)
            .add_child(key, child)
            .map_err(|_| TreeError::DuplicateEdge {
                node: identity,
                key: key as char,
            })
    }

    /// Create leaf `j` below `parent` with edge `[start, open]`.
    pub(crate) fn add_leaf(&mut self, parent: NodeId, j: usize, start: usize) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len());
        let key = self.text.at(start);
        self.add_child(parent, key, id)?;
        self.nodes.push(Node::leaf(parent, j, start));
        Ok(id)
    }

    /// Split the edge into `id` after position `at`.
    ///
    /// The new internal node takes `[start, at]`, `id` keeps
    /// `[at + 1, end]` and hangs below it. Returns the new node.
    pub(crate) fn split_edge(&mut self, id: NodeId, at: usize, identity: Identity) -> Result<NodeId, TreeError> {
        let node = self.node(id);
        let parent = node.parent.ok_or(TreeError::RootEdge)?;
        let start = node.label.start;
        let end = self.edge_end(id);
        if at < start || at >= end {
            return Err(TreeError::InvalidSplit {
                node: node.identity,
                at,
                start,
                end,
            });
        }

        let x = self.text.at(start);
        let y = self.text.at(at + 1);
        let internal = NodeId(self.nodes.len());
        self.nodes.push(Node::internal(parent, identity, start, at));

        self.node_mut(parent).remove_child(x);
        self.add_child(parent, x, internal)?;

        let demoted = self.node_mut(id);
        demoted.parent = Some(internal);
        demoted.label.start = at + 1;
        self.add_child(internal, y, id)?;

        self.internal_nodes += 1;
        Ok(internal)
    }

    /// Point the suffix link of `from` at `to`.
    pub(crate) fn set_suffix_link(&mut self, from: NodeId, to: NodeId) {
        self.node_mut(from).link = Some(to);
    }
}
