//! Identity minting for internal nodes

use crate::tree::Identity;

/// Monotonically decreasing serial for internal node identities.
///
/// Owned by a single builder, so trees built side by side never share
/// counters.
#[derive(Debug, Default)]
pub struct IdentityGenerator {
    counter: i64,
}

impl IdentityGenerator {
    /// Fresh generator; the first identity handed out is `-1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next internal identity.
    pub fn next_internal(&mut self) -> Identity {
        self.counter -= 1;
        Identity::internal(self.counter)
    }

    /// How many identities have been minted so far.
    pub fn minted(&self) -> usize {
        self.counter.unsigned_abs() as usize
    }
}
