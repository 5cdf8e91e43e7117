//! # ember-primitives
//!
//! Fixed-width value types shared by the ember crates.
//!
//! - [`Address`]: 20-byte account address
//! - [`H256`]: 32-byte hash
//! - [`Word`]: 256-bit stack word, wrapping modulo 2^256

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod hash;
mod word;

pub use address::{Address, AddressError};
pub use error::PrimitiveError;
pub use hash::{HashError, H256};
pub use word::{address_to_word, h256_to_word, word_to_address, word_to_h256, word_to_u64, Word};

/// Block number type
pub type BlockNumber = u64;

/// Gas type
pub type Gas = u64;
