//! Copy-on-write in-memory state

use crate::account::Account;
use crate::traits::State;
use ember_primitives::{Address, Word};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// In-memory account state with access tracking.
///
/// Accounts and the accessed-address set sit behind `Arc`, so cloning is
/// cheap and a clone taken before a read is left untouched by it.
#[derive(Clone, Debug, Default)]
pub struct InMemoryState {
    accounts: Arc<HashMap<Address, Account>>,
    accessed: Arc<HashSet<Address>>,
}

impl InMemoryState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an account
    pub fn with_account(mut self, address: Address, account: Account) -> Self {
        Arc::make_mut(&mut self.accounts).insert(address, account);
        self
    }

    /// Replace the balance of `address`, creating the account if needed
    pub fn with_balance(mut self, address: Address, balance: Word) -> Self {
        Arc::make_mut(&mut self.accounts)
            .entry(address)
            .or_default()
            .balance = balance;
        self
    }

    /// Look up an account without recording access
    pub fn account(&self, address: &Address) -> Option<&Account> {
        self.accounts.get(address)
    }

    /// Balance without recording access
    pub fn balance_of(&self, address: &Address) -> Word {
        self.accounts
            .get(address)
            .map(|a| a.balance)
            .unwrap_or_default()
    }

    /// Whether `address` has been read through [`State`]
    pub fn is_warm(&self, address: &Address) -> bool {
        self.accessed.contains(address)
    }

    /// Number of distinct addresses accessed
    pub fn accessed_count(&self) -> usize {
        self.accessed.len()
    }

    /// Number of accounts held
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn touch(&mut self, address: &Address) {
        if self.accessed.contains(address) {
            return;
        }
        tracing::trace!(%address, "marking address warm");
        Arc::make_mut(&mut self.accessed).insert(*address);
    }
}

impl State for InMemoryState {
    fn read_balance(mut self, address: &Address) -> (Self, Word) {
        self.touch(address);
        let balance = self.balance_of(address);
        (self, balance)
    }
}
