//! Read-only walks over a built tree
//!
//! All iterators yield [`NodeId`]s and borrow the tree; children are
//! visited in byte order, so a preorder walk is lexicographic.

use std::collections::btree_map;

use super::{NodeId, SuffixTree};

impl SuffixTree {
    /// Children of `id` in order of their leading byte.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            it: self.node(id).children.values(),
        }
    }

    /// `id` followed by each of its ancestors up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            cur: Some(id),
        }
    }

    /// Every node below `id` (inclusive) in preorder.
    pub fn preorder(&self, id: NodeId) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![id],
        }
    }

    /// Every leaf below `id` (inclusive) in lexicographic order of suffix.
    pub fn leaves(&self, id: NodeId) -> Leaves<'_> {
        Leaves {
            it: self.preorder(id),
        }
    }

    /// Suffix start positions of the leaves below `id`.
    pub fn suffix_starts(&self, id: NodeId) -> impl Iterator<Item = usize> + '_ {
        self.leaves(id)
            .filter_map(move |leaf| self.node(leaf).identity().suffix_start())
    }
}

/// Iterator over the children of a node.
#[derive(Debug)]
pub struct Children<'t> {
    it: btree_map::Values<'t, u8, NodeId>,
}

impl<'t> Iterator for Children<'t> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.it.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'t> DoubleEndedIterator for Children<'t> {
    fn next_back(&mut self) -> Option<NodeId> {
        self.it.next_back().copied()
    }
}

impl<'t> ExactSizeIterator for Children<'t> {}

/// Iterator from a node up to the root.
#[derive(Debug)]
pub struct Ancestors<'t> {
    tree: &'t SuffixTree,
    cur: Option<NodeId>,
}

impl<'t> Iterator for Ancestors<'t> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cur?;
        self.cur = self.tree.node(id).parent();
        Some(id)
    }
}

/// Depth-first preorder iterator.
#[derive(Debug)]
pub struct Preorder<'t> {
    tree: &'t SuffixTree,
    stack: Vec<NodeId>,
}

impl<'t> Iterator for Preorder<'t> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).rev());
        Some(id)
    }
}

/// Leaves in preorder.
#[derive(Debug)]
pub struct Leaves<'t> {
    it: Preorder<'t>,
}

impl<'t> Iterator for Leaves<'t> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let tree = self.it.tree;
        self.it
            .by_ref()
            .find(|&id| tree.node(id).is_leaf() && !tree.node(id).is_root())
    }
}
