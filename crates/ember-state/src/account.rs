//! Account data

use bytes::Bytes;
use ember_primitives::Word;
use std::collections::HashMap;

/// Account record
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Account {
    /// Balance in wei
    pub balance: Word,
    /// Account nonce
    pub nonce: u64,
    /// Deployed bytecode
    pub code: Bytes,
    /// Storage slots
    pub storage: HashMap<Word, Word>,
}

impl Account {
    /// Empty account holding `balance`
    pub fn with_balance(balance: Word) -> Self {
        Self {
            balance,
            ..Default::default()
        }
    }

    /// Check if account is empty (EIP-161)
    pub fn is_empty(&self) -> bool {
        self.nonce == 0 && self.balance.is_zero() && self.code.is_empty()
    }

    /// Check if account has code
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }
}
