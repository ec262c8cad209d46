//! Tree vertices and edge labels
//!
//! Node = edge label [start, end] into the parent + child map keyed by
//! the first byte of each child edge.
//! Leaves store `EdgeEnd::Open` and read the tree's global end marker,
//! so advancing that marker extends every leaf at once (Rule 1).

use std::collections::BTreeMap;
use std::fmt;

/// Stable index of a node inside the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena slot of the root.
    pub const ROOT: NodeId = NodeId(0);

    /// Raw arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identity of a node as seen by the construction.
///
/// Leaves carry the (1-indexed) start of the suffix they spell, internal
/// nodes a negative serial number, and the root zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Identity(i64);

impl Identity {
    /// Identity of the root.
    pub const ROOT: Identity = Identity(0);

    /// Leaf created during extension `j`.
    pub fn leaf(j: usize) -> Self {
        debug_assert!(j >= 1, "leaf identities are 1-indexed");
        Identity(j as i64)
    }

    pub(crate) fn internal(serial: i64) -> Self {
        debug_assert!(serial < 0, "internal identities are negative");
        Identity(serial)
    }

    /// Raw signed value.
    pub fn get(self) -> i64 {
        self.0
    }

    /// True for identities minted for leaves.
    pub fn is_leaf(self) -> bool {
        self.0 > 0
    }

    /// True for identities minted for internal nodes.
    pub fn is_internal(self) -> bool {
        self.0 < 0
    }

    /// Suffix start position for a leaf identity.
    pub fn suffix_start(self) -> Option<usize> {
        if self.is_leaf() {
            Some(self.0 as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// End of an edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum EdgeEnd {
    /// Leaf edge: ends wherever the global end marker currently is.
    Open,
    /// Internal edge: inclusive end fixed when the edge was split.
    Closed(usize),
}

/// Inclusive range of 1-indexed text positions labelling an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct EdgeLabel {
    /// First position on the edge.
    pub start: usize,
    /// Last position on the edge.
    pub end: EdgeEnd,
}

impl EdgeLabel {
    /// Leaf label starting at `start`.
    pub fn open(start: usize) -> Self {
        Self {
            start,
            end: EdgeEnd::Open,
        }
    }

    /// Fixed label `[start, end]`.
    pub fn closed(start: usize, end: usize) -> Self {
        Self {
            start,
            end: EdgeEnd::Closed(end),
        }
    }

    /// Inclusive end position once `global_end` is known.
    #[inline]
    pub fn resolve(&self, global_end: usize) -> usize {
        match self.end {
            EdgeEnd::Open => global_end,
            EdgeEnd::Closed(end) => end,
        }
    }

    /// Number of positions on the edge.
    #[inline]
    pub fn len(&self, global_end: usize) -> usize {
        (self.resolve(global_end) + 1).saturating_sub(self.start)
    }

    /// True for the root's empty label.
    pub fn is_empty(&self, global_end: usize) -> bool {
        self.len(global_end) == 0
    }
}

/// A vertex of the suffix tree.
///
/// Leaves and internal nodes share this layout; leaves simply have no
/// children, an open edge end and a positive identity.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) identity: Identity,
    pub(crate) parent: Option<NodeId>,
    pub(crate) label: EdgeLabel,
    pub(crate) children: BTreeMap<u8, NodeId>,
    pub(crate) link: Option<NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            identity: Identity::ROOT,
            parent: None,
            label: EdgeLabel::closed(1, 0),
            children: BTreeMap::new(),
            link: None,
        }
    }

    pub(crate) fn leaf(parent: NodeId, j: usize, start: usize) -> Self {
        Self {
            identity: Identity::leaf(j),
            parent: Some(parent),
            label: EdgeLabel::open(start),
            children: BTreeMap::new(),
            link: None,
        }
    }

    pub(crate) fn internal(parent: NodeId, identity: Identity, start: usize, end: usize) -> Self {
        Self {
            identity,
            parent: Some(parent),
            label: EdgeLabel::closed(start, end),
            children: BTreeMap::new(),
            link: None,
        }
    }

    /// Identity assigned at creation.
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Parent node; `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Label of the edge into this node.
    pub fn label(&self) -> EdgeLabel {
        self.label
    }

    /// Suffix link, if one has been assigned.
    pub fn suffix_link(&self) -> Option<NodeId> {
        self.link
    }

    /// Child whose edge starts with `key`.
    #[inline]
    pub fn child(&self, key: u8) -> Option<NodeId> {
        self.children.get(&key).copied()
    }

    /// Number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// True when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True for the root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Attach `child` under `key`; refuses to overwrite an existing edge.
    pub(crate) fn add_child(&mut self, key: u8, child: NodeId) -> Result<(), NodeId> {
        match self.children.get(&key) {
            Some(&existing) => Err(existing),
            None => {
                self.children.insert(key, child);
                Ok(())
            }
        }
    }

    /// Detach the child under `key`; no-op when absent.
    pub(crate) fn remove_child(&mut self, key: u8) -> Option<NodeId> {
        self.children.remove(&key)
    }
}
