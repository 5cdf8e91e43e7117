//! Opcode handlers.
//!
//! Every handler has the same shape: it takes the frame's context by value
//! and returns the next one wrapped in a [`Step`]. In order, a handler
//!
//! 1. checks its stack bounds and halts (without charging gas) on violation,
//! 2. computes its result from the call, the state or the host,
//! 3. pushes the result,
//! 4. threads any new stack/state back into the context,
//! 5. charges its static gas,
//! 6. returns the context.
//!
//! Handlers never move `pc`, except PUSHn which steps over its immediate;
//! advancing past the opcode itself is the dispatch loop's job.

pub mod block;
pub mod stack_ops;
pub mod system;

use crate::context::{Environment, ExecutionContext, Step};
use crate::opcode::Opcode;
use ember_state::State;

/// Uniform handler signature
pub type Handler<S> = fn(ExecutionContext<S>, &Environment<'_>) -> Step<S>;

/// Dispatch table
pub fn handler_for<S: State>(opcode: Opcode) -> Handler<S> {
    match opcode {
        Opcode::STOP => system::stop,
        Opcode::INVALID => system::invalid,
        Opcode::BLOCKHASH => block::blockhash,
        Opcode::COINBASE => block::coinbase,
        Opcode::TIMESTAMP => block::timestamp,
        Opcode::NUMBER => block::number,
        Opcode::DIFFICULTY => block::difficulty,
        Opcode::GASLIMIT => block::gaslimit,
        Opcode::CHAINID => block::chainid,
        Opcode::SELFBALANCE => block::selfbalance,
        Opcode::BASEFEE => block::basefee,
        Opcode::POP => stack_ops::pop,
        Opcode::PUSH0 => stack_ops::push0,
        Opcode::PUSH1 | Opcode::PUSH2 | Opcode::PUSH3 | Opcode::PUSH4 |
        Opcode::PUSH5 | Opcode::PUSH6 | Opcode::PUSH7 | Opcode::PUSH8 |
        Opcode::PUSH9 | Opcode::PUSH10 | Opcode::PUSH11 | Opcode::PUSH12 |
        Opcode::PUSH13 | Opcode::PUSH14 | Opcode::PUSH15 | Opcode::PUSH16 |
        Opcode::PUSH17 | Opcode::PUSH18 | Opcode::PUSH19 | Opcode::PUSH20 |
        Opcode::PUSH21 | Opcode::PUSH22 | Opcode::PUSH23 | Opcode::PUSH24 |
        Opcode::PUSH25 | Opcode::PUSH26 | Opcode::PUSH27 | Opcode::PUSH28 |
        Opcode::PUSH29 | Opcode::PUSH30 | Opcode::PUSH31 | Opcode::PUSH32 => stack_ops::push_n,
    }
}
