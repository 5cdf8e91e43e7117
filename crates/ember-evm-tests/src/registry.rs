//! Blockhash registry used by fixtures

use ember_evm::BlockhashRegistry;
use ember_primitives::{BlockNumber, H256};
use sha3::{Digest, Keccak256};
use std::collections::HashMap;

/// Deterministic stand-in hash: keccak256 of the big-endian block number
pub fn keccak_blockhash(number: BlockNumber) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(number.to_be_bytes());
    let result = hasher.finalize();
    H256::from_bytes(result.into())
}

/// Registry with explicit entries over a keccak fallback
#[derive(Debug, Clone, Default)]
pub struct FixtureRegistry {
    overrides: HashMap<BlockNumber, H256>,
}

impl FixtureRegistry {
    /// Registry with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `number` to `hash`
    pub fn with_hash(mut self, number: BlockNumber, hash: H256) -> Self {
        self.overrides.insert(number, hash);
        self
    }
}

impl BlockhashRegistry for FixtureRegistry {
    fn get_blockhash(&self, number: BlockNumber) -> H256 {
        self.overrides
            .get(&number)
            .copied()
            .unwrap_or_else(|| keccak_blockhash(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_blockhash_distinct() {
        let a = keccak_blockhash(999);
        let b = keccak_blockhash(998);
        assert!(!a.is_zero());
        assert_ne!(a, b);
        assert_eq!(a, keccak_blockhash(999));
    }

    #[test]
    fn test_override_wins() {
        let pinned = H256::from_bytes([0x11; 32]);
        let registry = FixtureRegistry::new().with_hash(7, pinned);
        assert_eq!(registry.get_blockhash(7), pinned);
        assert_eq!(registry.get_blockhash(8), keccak_blockhash(8));
    }
}
