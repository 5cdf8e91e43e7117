//! Execution context for one call frame

use crate::config::ProtocolConfig;
use crate::error::EvmError;
use crate::host::{BlockhashRegistry, HostOracle};
use crate::stack::Stack;
use bytes::Bytes;
use ember_primitives::{Address, Gas, Word};
use ember_state::State;

/// Call parameters fixed at frame entry
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallContext {
    /// Contract address being executed
    pub address: Address,
    /// Caller address
    pub caller: Address,
    /// Call value in wei
    pub value: Word,
    /// Call data
    pub calldata: Bytes,
    /// Bytecode of `address`
    pub code: Bytes,
    /// Gas limit for this call
    pub gas_limit: Gas,
    /// Call depth
    pub depth: usize,
}

impl CallContext {
    /// Create a call into `address` running `code`
    pub fn new(address: Address, caller: Address, code: Bytes, gas_limit: Gas) -> Self {
        Self {
            address,
            caller,
            code,
            gas_limit,
            ..Default::default()
        }
    }

    /// Set the call value
    pub fn with_value(mut self, value: Word) -> Self {
        self.value = value;
        self
    }

    /// Set the call data
    pub fn with_calldata(mut self, calldata: Bytes) -> Self {
        self.calldata = calldata;
        self
    }

    /// Set the call depth
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

/// Read-only environment shared by every handler in an execution
#[derive(Clone, Copy)]
pub struct Environment<'a> {
    /// Chain constants
    pub config: ProtocolConfig,
    /// Block height and timestamp
    pub oracle: &'a dyn HostOracle,
    /// Historical block hashes
    pub registry: &'a dyn BlockhashRegistry,
}

impl<'a> Environment<'a> {
    /// Create new environment
    pub fn new(
        config: ProtocolConfig,
        oracle: &'a dyn HostOracle,
        registry: &'a dyn BlockhashRegistry,
    ) -> Self {
        Self {
            config,
            oracle,
            registry,
        }
    }
}

/// Why a frame stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// STOP or end of code
    Stop,
    /// Opcode-level failure; the frame is reverted
    Exception(EvmError),
}

/// Outcome of one handler
#[derive(Debug, Clone)]
pub enum Step<S> {
    /// Keep dispatching
    Continue(ExecutionContext<S>),
    /// Terminal; the dispatch loop must not call another handler
    Halt(ExecutionContext<S>, HaltReason),
}

impl<S> Step<S> {
    /// Borrow the context
    pub fn context(&self) -> &ExecutionContext<S> {
        match self {
            Step::Continue(ctx) | Step::Halt(ctx, _) => ctx,
        }
    }

    /// Take the context
    pub fn into_context(self) -> ExecutionContext<S> {
        match self {
            Step::Continue(ctx) | Step::Halt(ctx, _) => ctx,
        }
    }

    /// Halt reason, if halted
    pub fn halt_reason(&self) -> Option<HaltReason> {
        match self {
            Step::Continue(_) => None,
            Step::Halt(_, reason) => Some(*reason),
        }
    }

    /// Whether this step is terminal
    pub fn is_halt(&self) -> bool {
        matches!(self, Step::Halt(..))
    }
}

/// State of one call frame, threaded through every handler by value
#[derive(Debug, Clone)]
pub struct ExecutionContext<S> {
    /// Operand stack
    pub stack: Stack,
    /// Latest state handle
    pub state: S,
    /// Call parameters
    pub call: CallContext,
    /// Program counter
    pub pc: usize,
    /// Gas used so far; never decreases
    pub gas_used: Gas,
    /// Frame has halted
    pub stopped: bool,
    /// Frame halted abnormally
    pub reverted: bool,
    /// Return data, or revert payload when `reverted`
    pub output: Bytes,
    /// Error that reverted the frame
    pub exception: Option<EvmError>,
}

impl<S: State> ExecutionContext<S> {
    /// Fresh frame at pc 0 with an empty stack
    pub fn new(call: CallContext, state: S) -> Self {
        Self {
            stack: Stack::new(),
            state,
            call,
            pc: 0,
            gas_used: 0,
            stopped: false,
            reverted: false,
            output: Bytes::new(),
            exception: None,
        }
    }

    /// Charge `amount` gas. Saturates, so it never wraps.
    pub fn charge_gas(&mut self, amount: Gas) {
        self.gas_used = self.gas_used.saturating_add(amount);
    }

    /// Normal termination
    pub fn stop(mut self) -> Step<S> {
        self.stopped = true;
        Step::Halt(self, HaltReason::Stop)
    }

    /// Abnormal termination with `error`'s payload. Gas is not charged.
    pub fn halt(mut self, error: EvmError) -> Step<S> {
        self.stopped = true;
        self.reverted = true;
        self.output = error.revert_payload();
        self.exception = Some(error);
        Step::Halt(self, HaltReason::Exception(error))
    }

    /// Whether the frame has halted
    pub fn is_halted(&self) -> bool {
        self.stopped
    }

    /// Why the frame halted, `None` while running
    pub fn halt_reason(&self) -> Option<HaltReason> {
        if !self.stopped {
            return None;
        }
        Some(match self.exception {
            Some(error) => HaltReason::Exception(error),
            None => HaltReason::Stop,
        })
    }

    /// Final snapshot for the caller frame
    pub fn into_result(self) -> ExecutionResult<S> {
        ExecutionResult {
            success: !self.reverted,
            gas_used: self.gas_used,
            output: self.output,
            stack: self.stack,
            state: self.state,
        }
    }
}

/// Final snapshot of a frame
#[derive(Debug, Clone)]
pub struct ExecutionResult<S> {
    /// Halted without revert
    pub success: bool,
    /// Gas used
    pub gas_used: Gas,
    /// Return data (or revert data)
    pub output: Bytes,
    /// Stack at halt
    pub stack: Stack,
    /// State handle to continue with
    pub state: S,
}

impl<S> ExecutionResult<S> {
    /// Whether the frame reverted
    pub fn reverted(&self) -> bool {
        !self.success
    }
}
