//! # ember-evm
//!
//! Value-threaded EVM execution core.
//!
//! Each opcode handler takes a frame's [`ExecutionContext`] by value and
//! returns the next one inside a [`Step`]; halting is part of the returned
//! value rather than an error path. This crate provides:
//! - Operand stack and opcode-level errors
//! - Static gas table
//! - Host oracle and blockhash registry interfaces
//! - Block-information opcode handlers
//! - Dispatch loop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod error;
pub mod gas;
pub mod handlers;
pub mod host;
pub mod interpreter;
pub mod opcode;
pub mod stack;

pub use config::{protocol, ConfigError, ProtocolConfig};
pub use context::{CallContext, Environment, ExecutionContext, ExecutionResult, HaltReason, Step};
pub use error::{EvmError, EvmResult};
pub use host::{
    blockhash_in_window, BlockhashRegistry, CachedBlockhashRegistry, FixedHost, HostOracle,
    InMemoryBlockhashRegistry,
};
pub use interpreter::Interpreter;
pub use opcode::Opcode;
pub use stack::{Stack, STACK_MAX_DEPTH};
