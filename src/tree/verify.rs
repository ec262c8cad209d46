//! Structural invariant checks for a built tree

use thiserror::Error;

use super::{Identity, NodeId, SuffixTree};

/// First invariant violation found by [`SuffixTree::verify`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// Child map key differs from the first byte of the child's edge.
    #[error("node {parent} keys child {child} on '{key}' but its edge starts with '{actual}'")]
    KeyMismatch {
        /// Parent identity.
        parent: Identity,
        /// Child identity.
        child: Identity,
        /// Key in the parent's map.
        key: char,
        /// First byte of the child's edge.
        actual: char,
    },

    /// Child's parent pointer does not point back.
    #[error("node {child} is listed under {parent} but points at another parent")]
    ParentMismatch {
        /// Parent identity.
        parent: Identity,
        /// Child identity.
        child: Identity,
    },

    /// Non-root internal node with fewer than two children.
    #[error("internal node {0} has a single child")]
    UnaryNode(Identity),

    /// Leaf count differs from the text length.
    #[error("expected {expected} leaves, found {found}")]
    LeafCount {
        /// Text length including the sentinel.
        expected: usize,
        /// Leaves in the tree.
        found: usize,
    },

    /// Leaf identity does not spell the suffix it stands for.
    #[error("leaf {0} does not spell its suffix")]
    LeafLabel(Identity),

    /// Internal node without a suffix link.
    #[error("internal node {0} has no suffix link")]
    MissingLink(Identity),

    /// Suffix link target does not spell the source label minus one byte.
    #[error("suffix link of {from} points at {to} with the wrong path label")]
    WrongLink {
        /// Link source.
        from: Identity,
        /// Link target.
        to: Identity,
    },
}

impl SuffixTree {
    /// Check the structural invariants of a completed tree.
    ///
    /// Walks the whole tree and materializes path labels, so this is
    /// quadratic in the worst case; it is meant for tests and `--verify`.
    pub fn verify(&self) -> Result<(), VerifyError> {
        let mut leaves = 0usize;

        for id in self.preorder(self.root()) {
            let node = self.node(id);

            for (&key, &child) in &node.children {
                let child_node = self.node(child);
                if child_node.parent != Some(id) {
                    return Err(VerifyError::ParentMismatch {
                        parent: node.identity,
                        child: child_node.identity,
                    });
                }
                let actual = self.text().at(child_node.label.start);
                if actual != key {
                    return Err(VerifyError::KeyMismatch {
                        parent: node.identity,
                        child: child_node.identity,
                        key: key as char,
                        actual: actual as char,
                    });
                }
            }

            if node.is_root() {
                continue;
            }

            if node.is_leaf() {
                leaves += 1;
                self.verify_leaf(id)?;
            } else {
                if node.num_children() < 2 {
                    return Err(VerifyError::UnaryNode(node.identity));
                }
                self.verify_link(id)?;
            }
        }

        if leaves != self.text().len() {
            return Err(VerifyError::LeafCount {
                expected: self.text().len(),
                found: leaves,
            });
        }
        Ok(())
    }

    fn verify_leaf(&self, id: NodeId) -> Result<(), VerifyError> {
        let identity = self.node(id).identity;
        match identity.suffix_start() {
            Some(start) if self.path_label(id) == self.text().suffix(start) => Ok(()),
            _ => Err(VerifyError::LeafLabel(identity)),
        }
    }

    fn verify_link(&self, id: NodeId) -> Result<(), VerifyError> {
        let node = self.node(id);
        let to = node.link.ok_or(VerifyError::MissingLink(node.identity))?;
        let label = self.path_label(id);
        if self.path_label(to) != label[1..] {
            return Err(VerifyError::WrongLink {
                from: node.identity,
                to: self.node(to).identity,
            });
        }
        Ok(())
    }
}
