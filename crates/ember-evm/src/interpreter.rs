//! Opcode dispatch loop

use crate::context::{Environment, ExecutionContext, ExecutionResult, HaltReason, Step};
use crate::error::EvmError;
use crate::handlers::handler_for;
use crate::opcode::Opcode;
use ember_state::State;

/// Drives a frame's context through the handlers until it halts.
///
/// Gas is only accumulated here; comparing it against the call's gas limit
/// is left to the embedder.
#[derive(Clone, Copy)]
pub struct Interpreter<'a> {
    env: Environment<'a>,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter over `env`
    pub fn new(env: Environment<'a>) -> Self {
        Self { env }
    }

    /// Execute the opcode at `pc`.
    ///
    /// Running off the end of the code is an implicit STOP. On `Continue`
    /// `pc` has moved to the next opcode. A halted context is returned as is.
    pub fn step<S: State>(&self, ctx: ExecutionContext<S>) -> Step<S> {
        if let Some(reason) = ctx.halt_reason() {
            return Step::Halt(ctx, reason);
        }

        let byte = match ctx.call.code.get(ctx.pc).copied() {
            Some(byte) => byte,
            None => return ctx.stop(),
        };
        let opcode = match Opcode::from_byte(byte) {
            Some(opcode) => opcode,
            None => return ctx.halt(EvmError::InvalidOpcode(byte)),
        };

        tracing::trace!(
            pc = ctx.pc,
            opcode = %opcode,
            gas_used = ctx.gas_used,
            depth = ctx.stack.len(),
            "step"
        );

        match handler_for::<S>(opcode)(ctx, &self.env) {
            Step::Continue(mut ctx) => {
                ctx.pc += 1;
                Step::Continue(ctx)
            }
            halted => halted,
        }
    }

    /// Run until the frame halts and return its final snapshot
    pub fn run<S: State>(&self, mut ctx: ExecutionContext<S>) -> ExecutionResult<S> {
        loop {
            match self.step(ctx) {
                Step::Continue(next) => ctx = next,
                Step::Halt(ctx, reason) => {
                    match reason {
                        HaltReason::Stop => {
                            tracing::debug!(pc = ctx.pc, gas_used = ctx.gas_used, "frame stopped");
                        }
                        HaltReason::Exception(error) => {
                            tracing::debug!(pc = ctx.pc, gas_used = ctx.gas_used, %error, "frame reverted");
                        }
                    }
                    return ctx.into_result();
                }
            }
        }
    }
}
