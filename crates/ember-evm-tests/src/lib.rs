//! # ember-evm-tests
//!
//! JSON fixture harness for the ember EVM core.
//!
//! This crate provides:
//! - JSON parsing for the fixture format (hex-encoded fields)
//! - A keccak-backed blockhash registry for fixtures without explicit hashes
//! - A runner that drives each fixture through the interpreter
//! - Result aggregation
//!
//! ## Fixture Format
//!
//! A fixture file is a map of test name to case. Each case carries the
//! protocol config, the block environment, pre-state balances, the call
//! and the expected stack, gas and output.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod registry;
mod runner;
mod types;

pub use error::{FixtureError, FixtureResult};
pub use registry::{keccak_blockhash, FixtureRegistry};
pub use runner::{FixtureResults, FixtureRunner};
pub use types::*;
