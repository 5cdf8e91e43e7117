//! State access contract used by the opcode handlers

use ember_primitives::{Address, Word};

/// Value-threaded account state.
///
/// Reads consume the handle and return the successor. A read may record
/// access bookkeeping, so callers must continue with the returned handle and
/// drop the one they passed in.
pub trait State: Clone {
    /// Balance of `address`, zero for unknown accounts.
    fn read_balance(self, address: &Address) -> (Self, Word);
}
