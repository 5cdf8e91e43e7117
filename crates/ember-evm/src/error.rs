//! EVM error types

use bytes::Bytes;
use thiserror::Error;

/// Opcode-level failures.
///
/// These are outcomes of malformed bytecode, not faults of the interpreter.
/// They never propagate as `Err` out of a handler; the handler halts the
/// frame and stores [`EvmError::revert_payload`] as its output.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvmError {
    /// Pop from an empty stack
    #[error("stack underflow")]
    StackUnderflow,

    /// Push onto a full stack
    #[error("stack overflow (max 1024)")]
    StackOverflow,

    /// Byte with no handler
    #[error("invalid opcode: 0x{0:02x}")]
    InvalidOpcode(u8),
}

impl EvmError {
    /// Fixed revert payload for this error; its length is the payload length.
    pub fn revert_payload(&self) -> Bytes {
        Bytes::from(self.to_string().into_bytes())
    }
}

/// Result type for EVM operations
pub type EvmResult<T> = Result<T, EvmError>;
