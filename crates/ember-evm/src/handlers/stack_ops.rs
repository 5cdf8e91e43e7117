//! Stack operations: POP, PUSH0, PUSH1..PUSH32

use crate::context::{Environment, ExecutionContext, Step};
use crate::error::EvmError;
use crate::gas::static_gas;
use crate::opcode::Opcode;
use ember_primitives::Word;
use ember_state::State;

/// POP
pub fn pop<S: State>(mut ctx: ExecutionContext<S>, _env: &Environment<'_>) -> Step<S> {
    if let Err(error) = ctx.stack.require(1) {
        return ctx.halt(error);
    }
    let _ = ctx.stack.pop();
    ctx.charge_gas(static_gas(Opcode::POP));
    Step::Continue(ctx)
}

/// PUSH0
pub fn push0<S: State>(mut ctx: ExecutionContext<S>, _env: &Environment<'_>) -> Step<S> {
    if let Err(error) = ctx.stack.ensure_room(1) {
        return ctx.halt(error);
    }
    ctx.stack.push(Word::zero());
    ctx.charge_gas(static_gas(Opcode::PUSH0));
    Step::Continue(ctx)
}

/// PUSH1..PUSH32, sized by the opcode byte at `pc`.
///
/// Immediate bytes past the end of the code read as zero. Leaves `pc` on the
/// last immediate byte.
pub fn push_n<S: State>(mut ctx: ExecutionContext<S>, _env: &Environment<'_>) -> Step<S> {
    let byte = ctx.call.code.get(ctx.pc).copied().unwrap_or_default();
    let opcode = match Opcode::from_byte(byte) {
        Some(op) if op.push_size() > 0 => op,
        _ => return ctx.halt(EvmError::InvalidOpcode(byte)),
    };
    if let Err(error) = ctx.stack.ensure_room(1) {
        return ctx.halt(error);
    }

    let size = opcode.push_size();
    let start = (ctx.pc + 1).min(ctx.call.code.len());
    let end = (ctx.pc + 1 + size).min(ctx.call.code.len());
    let mut immediate = [0u8; 32];
    let available = &ctx.call.code[start..end];
    immediate[..available.len()].copy_from_slice(available);

    ctx.stack.push(Word::from_big_endian(&immediate[..size]));
    ctx.pc += size;
    ctx.charge_gas(static_gas(opcode));
    Step::Continue(ctx)
}
