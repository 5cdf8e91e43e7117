//! Gas cost table

use crate::opcode::Opcode;
use ember_primitives::Gas;

/// Gas costs for EVM operations
pub mod cost {
    /// Zero gas
    pub const ZERO: u64 = 0;
    /// Base gas
    pub const BASE: u64 = 2;
    /// Very low gas
    pub const VERYLOW: u64 = 3;
    /// Low gas
    pub const LOW: u64 = 5;
    /// BLOCKHASH gas
    pub const BLOCKHASH: u64 = 20;

    /// Max stack size
    pub const MAX_STACK_SIZE: usize = 1024;
}

/// Get static gas cost for an opcode
pub fn static_gas(opcode: Opcode) -> Gas {
    match opcode {
        Opcode::STOP | Opcode::INVALID => cost::ZERO,

        // Base cost (2)
        Opcode::COINBASE | Opcode::TIMESTAMP | Opcode::NUMBER |
        Opcode::DIFFICULTY | Opcode::GASLIMIT | Opcode::CHAINID |
        Opcode::BASEFEE | Opcode::POP | Opcode::PUSH0 => cost::BASE,

        // Very low cost (3)
        Opcode::PUSH1 | Opcode::PUSH2 | Opcode::PUSH3 | Opcode::PUSH4 |
        Opcode::PUSH5 | Opcode::PUSH6 | Opcode::PUSH7 | Opcode::PUSH8 |
        Opcode::PUSH9 | Opcode::PUSH10 | Opcode::PUSH11 | Opcode::PUSH12 |
        Opcode::PUSH13 | Opcode::PUSH14 | Opcode::PUSH15 | Opcode::PUSH16 |
        Opcode::PUSH17 | Opcode::PUSH18 | Opcode::PUSH19 | Opcode::PUSH20 |
        Opcode::PUSH21 | Opcode::PUSH22 | Opcode::PUSH23 | Opcode::PUSH24 |
        Opcode::PUSH25 | Opcode::PUSH26 | Opcode::PUSH27 | Opcode::PUSH28 |
        Opcode::PUSH29 | Opcode::PUSH30 | Opcode::PUSH31 | Opcode::PUSH32 => cost::VERYLOW,

        // Low cost (5)
        Opcode::SELFBALANCE => cost::LOW,

        Opcode::BLOCKHASH => cost::BLOCKHASH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_family_costs() {
        assert_eq!(static_gas(Opcode::BLOCKHASH), 20);
        assert_eq!(static_gas(Opcode::SELFBALANCE), 5);
        for op in [
            Opcode::COINBASE,
            Opcode::TIMESTAMP,
            Opcode::NUMBER,
            Opcode::DIFFICULTY,
            Opcode::GASLIMIT,
            Opcode::CHAINID,
            Opcode::BASEFEE,
        ] {
            assert_eq!(static_gas(op), 2, "{}", op);
        }
    }

    #[test]
    fn test_push_costs() {
        assert_eq!(static_gas(Opcode::PUSH0), 2);
        assert_eq!(static_gas(Opcode::PUSH1), 3);
        assert_eq!(static_gas(Opcode::PUSH32), 3);
    }

    #[test]
    fn test_halting_ops_are_free() {
        assert_eq!(static_gas(Opcode::STOP), 0);
        assert_eq!(static_gas(Opcode::INVALID), 0);
    }
}
