//! Halting opcodes: STOP, INVALID

use crate::context::{Environment, ExecutionContext, Step};
use crate::error::EvmError;
use crate::opcode::Opcode;
use ember_state::State;

/// STOP: halt without revert
pub fn stop<S: State>(ctx: ExecutionContext<S>, _env: &Environment<'_>) -> Step<S> {
    ctx.stop()
}

/// INVALID (0xFE): designated invalid instruction
pub fn invalid<S: State>(ctx: ExecutionContext<S>, _env: &Environment<'_>) -> Step<S> {
    ctx.halt(EvmError::InvalidOpcode(Opcode::INVALID.byte()))
}
