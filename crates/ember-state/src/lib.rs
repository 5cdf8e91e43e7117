//! # ember-state
//!
//! Account state as seen by the opcode handlers.
//!
//! State is threaded by value: every read that may record bookkeeping takes
//! the handle and hands back the one the caller must use from then on.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod account;
mod memory;
mod traits;

pub use account::Account;
pub use memory::InMemoryState;
pub use traits::State;
