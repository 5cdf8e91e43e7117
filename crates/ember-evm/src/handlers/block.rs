//! Block information (0x40..=0x48)
//!
//! Opcodes: BLOCKHASH, COINBASE, TIMESTAMP, NUMBER, DIFFICULTY, GASLIMIT,
//! CHAINID, SELFBALANCE, BASEFEE

use crate::config::protocol;
use crate::context::{Environment, ExecutionContext, Step};
use crate::gas::static_gas;
use crate::host::blockhash_in_window;
use crate::opcode::Opcode;
use ember_primitives::{address_to_word, h256_to_word, Word};
use ember_state::State;

/// Push one computed word for an opcode that pops nothing
fn push_one<S: State>(
    mut ctx: ExecutionContext<S>,
    opcode: Opcode,
    value: impl FnOnce(&ExecutionContext<S>) -> Word,
) -> Step<S> {
    if let Err(error) = ctx.stack.ensure_room(1) {
        return ctx.halt(error);
    }
    let value = value(&ctx);
    ctx.stack.push(value);
    ctx.charge_gas(static_gas(opcode));
    Step::Continue(ctx)
}

/// BLOCKHASH: hash of one of the 255 blocks before the current one, else zero
pub fn blockhash<S: State>(mut ctx: ExecutionContext<S>, env: &Environment<'_>) -> Step<S> {
    if let Err(error) = ctx.stack.require(1) {
        return ctx.halt(error);
    }
    // Depth checked above.
    let requested = ctx.stack.pop().unwrap_or_default();

    let current = env.oracle.current_block_height();
    let hash = match blockhash_in_window(&requested, current) {
        Some(number) => h256_to_word(&env.registry.get_blockhash(number)),
        None => {
            tracing::trace!(%requested, current, "blockhash outside window");
            Word::zero()
        }
    };

    // Popped one, so there is room for one.
    ctx.stack.push(hash);
    ctx.charge_gas(static_gas(Opcode::BLOCKHASH));
    Step::Continue(ctx)
}

/// COINBASE: configured beneficiary
pub fn coinbase<S: State>(ctx: ExecutionContext<S>, env: &Environment<'_>) -> Step<S> {
    push_one(ctx, Opcode::COINBASE, |_| address_to_word(&env.config.coinbase))
}

/// TIMESTAMP
pub fn timestamp<S: State>(ctx: ExecutionContext<S>, env: &Environment<'_>) -> Step<S> {
    push_one(ctx, Opcode::TIMESTAMP, |_| {
        Word::from(env.oracle.current_block_timestamp())
    })
}

/// NUMBER
pub fn number<S: State>(ctx: ExecutionContext<S>, env: &Environment<'_>) -> Step<S> {
    push_one(ctx, Opcode::NUMBER, |_| {
        Word::from(env.oracle.current_block_height())
    })
}

/// DIFFICULTY: always zero after the merge
pub fn difficulty<S: State>(ctx: ExecutionContext<S>, _env: &Environment<'_>) -> Step<S> {
    push_one(ctx, Opcode::DIFFICULTY, |_| protocol::DIFFICULTY)
}

/// GASLIMIT: gas limit of the current call
pub fn gaslimit<S: State>(ctx: ExecutionContext<S>, _env: &Environment<'_>) -> Step<S> {
    push_one(ctx, Opcode::GASLIMIT, |ctx| Word::from(ctx.call.gas_limit))
}

/// CHAINID
pub fn chainid<S: State>(ctx: ExecutionContext<S>, env: &Environment<'_>) -> Step<S> {
    push_one(ctx, Opcode::CHAINID, |_| env.config.chain_id_word())
}

/// SELFBALANCE: balance of the executing account.
///
/// The read goes through [`State::read_balance`], so the returned handle
/// replaces the context's.
pub fn selfbalance<S: State>(mut ctx: ExecutionContext<S>, _env: &Environment<'_>) -> Step<S> {
    if let Err(error) = ctx.stack.ensure_room(1) {
        return ctx.halt(error);
    }

    let (state, balance) = ctx.state.read_balance(&ctx.call.address);
    ctx.state = state;

    ctx.stack.push(balance);
    ctx.charge_gas(static_gas(Opcode::SELFBALANCE));
    Step::Continue(ctx)
}

/// BASEFEE: always zero, base fee is not modeled
pub fn basefee<S: State>(ctx: ExecutionContext<S>, _env: &Environment<'_>) -> Step<S> {
    push_one(ctx, Opcode::BASEFEE, |_| protocol::BASE_FEE)
}
