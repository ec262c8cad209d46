//! # Linear-time suffix trees via Ukkonen's algorithm
//!
//! Builds the suffix tree of a byte string terminated by a unique
//! sentinel, following Gusfield's phase/extension presentation of
//! Ukkonen's online construction.
//!
//! ## Core Algorithm
//!
//! 1. **Rule 1**: every leaf edge ends at a shared global end marker, so
//!    one increment per phase extends all leaves
//! 2. **Rule 2**: a suffix that stops inside the tree gets a new leaf,
//!    splitting an edge first when it stops mid-edge
//! 3. **Rule 3**: once a suffix is already present, so are all shorter
//!    ones, and the phase ends early
//! 4. **Suffix links** with skip/count walk-downs make every extension
//!    amortized O(1)
//!
//! ## Usage Example
//!
//! ```
//! use ukkonen::{BuildConfig, Builder, SuffixTree};
//!
//! let tree = SuffixTree::from_bytes(b"abcabxabcd")?;
//! assert_eq!(tree.leaves(tree.root()).count(), 11);
//!
//! let config = BuildConfig::default().with_sentinel(b'#').with_verify(true);
//! let tree = Builder::new(config).build_bytes(b"mississippi")?;
//! println!("internal nodes: {}", tree.internal_node_count());
//! # Ok::<(), ukkonen::BuildError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod builder; // Phase/extension driver
pub mod stats; // Reporting counters
pub mod text; // Sentinel-terminated text
pub mod tree; // Node arena and traversal

pub use builder::{ActivePoint, Builder, IdentityGenerator, Rule};
pub use stats::{BuildReport, TreeStats};
pub use text::{Text, TextError, DEFAULT_SENTINEL};
pub use tree::{EdgeEnd, EdgeLabel, GlobalEnd, Identity, Node, NodeId, SuffixTree, TreeError, VerifyError};

use thiserror::Error;

/// Construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Byte appended to the input; must not occur in it.
    pub sentinel: u8,

    /// Run [`SuffixTree::verify`] once construction finishes.
    pub verify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
            verify: false,
        }
    }
}

impl BuildConfig {
    /// Use `sentinel` as the terminator.
    pub fn with_sentinel(mut self, sentinel: u8) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Enable or disable post-construction verification.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Errors that can occur during construction.
///
/// Apart from [`BuildError::Text`], every variant means an internal
/// invariant was broken; the partially built tree is discarded.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The input could not be terminated.
    #[error("invalid text: {0}")]
    Text(#[from] TextError),

    /// Walk-down found no edge for a character that must be present.
    #[error("corrupt tree: node {node} has no edge for '{expected}'")]
    CorruptTree {
        /// Node where the lookup failed.
        node: Identity,
        /// Character that should have led out of it.
        expected: char,
    },

    /// A non-root ancestor had no suffix link to follow.
    #[error("corrupt tree: internal node {0} has no suffix link")]
    MissingSuffixLink(Identity),

    /// The active point referred to a node without a parent.
    #[error("corrupt tree: cannot walk up from node {0}")]
    Orphan(Identity),

    /// Arena edit rejected.
    #[error("corrupt tree: {0}")]
    Tree(#[from] TreeError),

    /// Post-construction verification failed.
    #[error("verification failed: {0}")]
    Verification(#[from] VerifyError),
}

impl SuffixTree {
    /// Build the tree of `input` with the default `$` sentinel.
    pub fn from_bytes(input: &[u8]) -> Result<Self, BuildError> {
        Builder::default().build_bytes(input)
    }
}
