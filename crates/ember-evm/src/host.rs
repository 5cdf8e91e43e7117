//! Host-provided block metadata.
//!
//! Both collaborators are synchronous and must answer identically on
//! replay: the core never asks for wall-clock time or a live chain view.

use crate::config::protocol::BLOCKHASH_WINDOW;
use ember_primitives::{word_to_u64, BlockNumber, Word, H256};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Current block height and timestamp
pub trait HostOracle {
    /// Height of the block being executed
    fn current_block_height(&self) -> BlockNumber;
    /// Timestamp of the block being executed
    fn current_block_timestamp(&self) -> u64;
}

/// Resolves hashes of finalized blocks.
///
/// Only queried for block numbers inside the BLOCKHASH window.
pub trait BlockhashRegistry {
    /// Hash of block `number`
    fn get_blockhash(&self, number: BlockNumber) -> H256;
}

/// Oracle pinned to one block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedHost {
    /// Block height
    pub height: BlockNumber,
    /// Block timestamp
    pub timestamp: u64,
}

impl FixedHost {
    /// Create an oracle for `height` at `timestamp`
    pub fn new(height: BlockNumber, timestamp: u64) -> Self {
        Self { height, timestamp }
    }
}

impl HostOracle for FixedHost {
    fn current_block_height(&self) -> BlockNumber {
        self.height
    }

    fn current_block_timestamp(&self) -> u64 {
        self.timestamp
    }
}

/// Registry backed by a map the embedder fills in
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlockhashRegistry {
    hashes: HashMap<BlockNumber, H256>,
}

impl InMemoryBlockhashRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the hash of block `number`
    pub fn insert(&mut self, number: BlockNumber, hash: H256) {
        self.hashes.insert(number, hash);
    }

    /// Builder form of [`Self::insert`]
    pub fn with_hash(mut self, number: BlockNumber, hash: H256) -> Self {
        self.insert(number, hash);
        self
    }

    /// Number of recorded hashes
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Whether no hashes are recorded
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl BlockhashRegistry for InMemoryBlockhashRegistry {
    fn get_blockhash(&self, number: BlockNumber) -> H256 {
        // Unknown blocks are the registry's population problem, not the core's.
        self.hashes.get(&number).copied().unwrap_or(H256::ZERO)
    }
}

/// Memoizes another registry for the lifetime of one execution.
///
/// Finalized hashes never change, so repeated BLOCKHASH queries for the same
/// number hit the inner registry once. Drop the wrapper when the execution
/// ends; it must not outlive it.
#[derive(Debug)]
pub struct CachedBlockhashRegistry<R> {
    inner: R,
    cache: Mutex<HashMap<BlockNumber, H256>>,
}

impl<R: BlockhashRegistry> CachedBlockhashRegistry<R> {
    /// Wrap `inner`
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached entries
    pub fn cached(&self) -> usize {
        self.cache.lock().len()
    }

    /// Unwrap the inner registry
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BlockhashRegistry> BlockhashRegistry for CachedBlockhashRegistry<R> {
    fn get_blockhash(&self, number: BlockNumber) -> H256 {
        let mut cache = self.cache.lock();
        if let Some(hash) = cache.get(&number) {
            tracing::trace!(number, "blockhash cache hit");
            return *hash;
        }
        let hash = self.inner.get_blockhash(number);
        cache.insert(number, hash);
        hash
    }
}

/// Range test for BLOCKHASH.
///
/// Returns the block number if `current_height - 256 < requested < current_height`.
/// Both bounds are exclusive: the current block has no hash yet, and
/// `current_height - 256` is outside the window. Below height 256 every
/// earlier block qualifies.
pub fn blockhash_in_window(requested: &Word, current_height: BlockNumber) -> Option<BlockNumber> {
    let number = word_to_u64(requested)?;
    if number >= current_height {
        return None;
    }
    if current_height - number >= BLOCKHASH_WINDOW {
        return None;
    }
    Some(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(b: u8) -> H256 {
        H256::from_bytes([b; 32])
    }

    /// Counts lookups so cache behaviour is observable
    #[derive(Default)]
    struct CountingRegistry {
        calls: Mutex<u32>,
    }

    impl BlockhashRegistry for CountingRegistry {
        fn get_blockhash(&self, number: BlockNumber) -> H256 {
            *self.calls.lock() += 1;
            hash(number as u8)
        }
    }

    #[test]
    fn test_window_examples() {
        let h = 1000;
        assert_eq!(blockhash_in_window(&Word::from(999u64), h), Some(999));
        assert_eq!(blockhash_in_window(&Word::from(745u64), h), Some(745));
        assert_eq!(blockhash_in_window(&Word::from(744u64), h), None);
        assert_eq!(blockhash_in_window(&Word::from(700u64), h), None);
        assert_eq!(blockhash_in_window(&Word::from(1000u64), h), None);
        assert_eq!(blockhash_in_window(&Word::from(1001u64), h), None);
    }

    #[test]
    fn test_window_near_genesis() {
        assert_eq!(blockhash_in_window(&Word::zero(), 10), Some(0));
        assert_eq!(blockhash_in_window(&Word::zero(), 0), None);
        assert_eq!(blockhash_in_window(&Word::zero(), 255), Some(0));
        assert_eq!(blockhash_in_window(&Word::zero(), 256), None);
    }

    #[test]
    fn test_window_rejects_wide_words() {
        let huge = Word::from(u64::MAX) + Word::one();
        assert_eq!(blockhash_in_window(&huge, u64::MAX), None);
        assert_eq!(blockhash_in_window(&Word::MAX, 1000), None);
    }

    #[test]
    fn test_fixed_host() {
        let host = FixedHost::new(12, 1_700_000_000);
        assert_eq!(host.current_block_height(), 12);
        assert_eq!(host.current_block_timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_in_memory_registry() {
        let registry = InMemoryBlockhashRegistry::new().with_hash(5, hash(5));
        assert_eq!(registry.get_blockhash(5), hash(5));
        assert_eq!(registry.get_blockhash(6), H256::ZERO);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_cached_registry_hits_inner_once() {
        let cached = CachedBlockhashRegistry::new(CountingRegistry::default());
        assert_eq!(cached.get_blockhash(3), hash(3));
        assert_eq!(cached.get_blockhash(3), hash(3));
        assert_eq!(cached.get_blockhash(4), hash(4));
        assert_eq!(cached.cached(), 2);
        assert_eq!(*cached.into_inner().calls.lock(), 2);
    }
}
