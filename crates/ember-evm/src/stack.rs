//! EVM operand stack

use crate::error::{EvmError, EvmResult};
use crate::gas::cost::MAX_STACK_SIZE;
use ember_primitives::Word;

/// Maximum stack depth
pub const STACK_MAX_DEPTH: usize = MAX_STACK_SIZE;

/// Bounded LIFO of 256-bit words, owned by one call frame.
///
/// `push` and `pop` do not re-validate bounds for the handler: every handler
/// checks with [`Stack::require`] / [`Stack::ensure_room`] first and halts
/// the frame instead of calling into a violation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    data: Vec<Word>,
}

impl Stack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Push a word onto the top. Caller has checked room.
    pub fn push(&mut self, value: Word) {
        debug_assert!(self.data.len() < STACK_MAX_DEPTH, "push past max stack depth");
        self.data.push(value);
    }

    /// Pop the top word
    pub fn pop(&mut self) -> EvmResult<Word> {
        self.data.pop().ok_or(EvmError::StackUnderflow)
    }

    /// Peek at a specific depth (0 = top)
    pub fn peek(&self, depth: usize) -> EvmResult<Word> {
        self.data
            .iter()
            .rev()
            .nth(depth)
            .copied()
            .ok_or(EvmError::StackUnderflow)
    }

    /// Fail with `StackUnderflow` unless at least `n` words are present
    pub fn require(&self, n: usize) -> EvmResult<()> {
        if self.data.len() < n {
            return Err(EvmError::StackUnderflow);
        }
        Ok(())
    }

    /// Fail with `StackOverflow` unless `n` more words fit
    pub fn ensure_room(&self, n: usize) -> EvmResult<()> {
        if !self.has_room(n) {
            return Err(EvmError::StackOverflow);
        }
        Ok(())
    }

    /// Whether `n` more words fit
    pub fn has_room(&self, n: usize) -> bool {
        self.data.len() + n <= STACK_MAX_DEPTH
    }

    /// Get current stack size
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if stack is at max depth
    pub fn is_full(&self) -> bool {
        self.data.len() == STACK_MAX_DEPTH
    }

    /// Words from bottom to top
    pub fn as_slice(&self) -> &[Word] {
        &self.data
    }
}

impl FromIterator<Word> for Stack {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let data: Vec<Word> = iter.into_iter().collect();
        debug_assert!(data.len() <= STACK_MAX_DEPTH);
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = Stack::new();
        stack.push(Word::from(1u64));
        stack.push(Word::from(2u64));
        assert_eq!(stack.pop().unwrap(), Word::from(2u64));
        assert_eq!(stack.pop().unwrap(), Word::from(1u64));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), Err(EvmError::StackUnderflow));
    }

    #[test]
    fn test_peek() {
        let stack: Stack = (1u64..=3).map(Word::from).collect();
        assert_eq!(stack.peek(0).unwrap(), Word::from(3u64));
        assert_eq!(stack.peek(2).unwrap(), Word::from(1u64));
        assert_eq!(stack.peek(3), Err(EvmError::StackUnderflow));
    }

    #[test]
    fn test_require() {
        let stack: Stack = std::iter::once(Word::one()).collect();
        assert!(stack.require(1).is_ok());
        assert_eq!(stack.require(2), Err(EvmError::StackUnderflow));
    }

    #[test]
    fn test_full_stack() {
        let stack: Stack = std::iter::repeat(Word::zero()).take(STACK_MAX_DEPTH).collect();
        assert!(stack.is_full());
        assert!(!stack.has_room(1));
        assert!(stack.has_room(0));
        assert_eq!(stack.ensure_room(1), Err(EvmError::StackOverflow));
    }

    #[test]
    fn test_one_below_full_has_room() {
        let stack: Stack = std::iter::repeat(Word::zero()).take(STACK_MAX_DEPTH - 1).collect();
        assert!(!stack.is_full());
        assert!(stack.ensure_room(1).is_ok());
    }
}
