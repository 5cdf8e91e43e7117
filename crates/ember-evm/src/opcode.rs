//! EVM opcode definitions

/// Opcodes with a handler in this crate (see Yellow Paper Appendix H)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    STOP = 0x00,

    // Block Information
    BLOCKHASH = 0x40,
    COINBASE = 0x41,
    TIMESTAMP = 0x42,
    NUMBER = 0x43,
    DIFFICULTY = 0x44,
    GASLIMIT = 0x45,
    CHAINID = 0x46,
    SELFBALANCE = 0x47,
    BASEFEE = 0x48,

    POP = 0x50,
    PUSH0 = 0x5F,

    // Push Operations
    PUSH1 = 0x60,
    PUSH2 = 0x61,
    PUSH3 = 0x62,
    PUSH4 = 0x63,
    PUSH5 = 0x64,
    PUSH6 = 0x65,
    PUSH7 = 0x66,
    PUSH8 = 0x67,
    PUSH9 = 0x68,
    PUSH10 = 0x69,
    PUSH11 = 0x6A,
    PUSH12 = 0x6B,
    PUSH13 = 0x6C,
    PUSH14 = 0x6D,
    PUSH15 = 0x6E,
    PUSH16 = 0x6F,
    PUSH17 = 0x70,
    PUSH18 = 0x71,
    PUSH19 = 0x72,
    PUSH20 = 0x73,
    PUSH21 = 0x74,
    PUSH22 = 0x75,
    PUSH23 = 0x76,
    PUSH24 = 0x77,
    PUSH25 = 0x78,
    PUSH26 = 0x79,
    PUSH27 = 0x7A,
    PUSH28 = 0x7B,
    PUSH29 = 0x7C,
    PUSH30 = 0x7D,
    PUSH31 = 0x7E,
    PUSH32 = 0x7F,

    INVALID = 0xFE,
}

impl Opcode {
    /// Decode a byte; `None` for bytes without a handler
    pub fn from_byte(byte: u8) -> Option<Self> {
        let op = match byte {
            0x00 => Opcode::STOP,
            0x40 => Opcode::BLOCKHASH,
            0x41 => Opcode::COINBASE,
            0x42 => Opcode::TIMESTAMP,
            0x43 => Opcode::NUMBER,
            0x44 => Opcode::DIFFICULTY,
            0x45 => Opcode::GASLIMIT,
            0x46 => Opcode::CHAINID,
            0x47 => Opcode::SELFBALANCE,
            0x48 => Opcode::BASEFEE,
            0x50 => Opcode::POP,
            0x5F => Opcode::PUSH0,
            0x60 => Opcode::PUSH1,
            0x61 => Opcode::PUSH2,
            0x62 => Opcode::PUSH3,
            0x63 => Opcode::PUSH4,
            0x64 => Opcode::PUSH5,
            0x65 => Opcode::PUSH6,
            0x66 => Opcode::PUSH7,
            0x67 => Opcode::PUSH8,
            0x68 => Opcode::PUSH9,
            0x69 => Opcode::PUSH10,
            0x6A => Opcode::PUSH11,
            0x6B => Opcode::PUSH12,
            0x6C => Opcode::PUSH13,
            0x6D => Opcode::PUSH14,
            0x6E => Opcode::PUSH15,
            0x6F => Opcode::PUSH16,
            0x70 => Opcode::PUSH17,
            0x71 => Opcode::PUSH18,
            0x72 => Opcode::PUSH19,
            0x73 => Opcode::PUSH20,
            0x74 => Opcode::PUSH21,
            0x75 => Opcode::PUSH22,
            0x76 => Opcode::PUSH23,
            0x77 => Opcode::PUSH24,
            0x78 => Opcode::PUSH25,
            0x79 => Opcode::PUSH26,
            0x7A => Opcode::PUSH27,
            0x7B => Opcode::PUSH28,
            0x7C => Opcode::PUSH29,
            0x7D => Opcode::PUSH30,
            0x7E => Opcode::PUSH31,
            0x7F => Opcode::PUSH32,
            0xFE => Opcode::INVALID,
            _ => return None,
        };
        Some(op)
    }

    /// Raw byte value
    pub fn byte(self) -> u8 {
        self as u8
    }

    /// Number of immediate bytes following the opcode
    pub fn push_size(self) -> usize {
        match self.byte() {
            b @ 0x60..=0x7F => usize::from(b - 0x5F),
            _ => 0,
        }
    }

    /// Mnemonic
    pub fn name(self) -> &'static str {
        match self {
            Opcode::STOP => "STOP",
            Opcode::BLOCKHASH => "BLOCKHASH",
            Opcode::COINBASE => "COINBASE",
            Opcode::TIMESTAMP => "TIMESTAMP",
            Opcode::NUMBER => "NUMBER",
            Opcode::DIFFICULTY => "DIFFICULTY",
            Opcode::GASLIMIT => "GASLIMIT",
            Opcode::CHAINID => "CHAINID",
            Opcode::SELFBALANCE => "SELFBALANCE",
            Opcode::BASEFEE => "BASEFEE",
            Opcode::POP => "POP",
            Opcode::PUSH0 => "PUSH0",
            Opcode::PUSH1 => "PUSH1",
            Opcode::PUSH2 => "PUSH2",
            Opcode::PUSH3 => "PUSH3",
            Opcode::PUSH4 => "PUSH4",
            Opcode::PUSH5 => "PUSH5",
            Opcode::PUSH6 => "PUSH6",
            Opcode::PUSH7 => "PUSH7",
            Opcode::PUSH8 => "PUSH8",
            Opcode::PUSH9 => "PUSH9",
            Opcode::PUSH10 => "PUSH10",
            Opcode::PUSH11 => "PUSH11",
            Opcode::PUSH12 => "PUSH12",
            Opcode::PUSH13 => "PUSH13",
            Opcode::PUSH14 => "PUSH14",
            Opcode::PUSH15 => "PUSH15",
            Opcode::PUSH16 => "PUSH16",
            Opcode::PUSH17 => "PUSH17",
            Opcode::PUSH18 => "PUSH18",
            Opcode::PUSH19 => "PUSH19",
            Opcode::PUSH20 => "PUSH20",
            Opcode::PUSH21 => "PUSH21",
            Opcode::PUSH22 => "PUSH22",
            Opcode::PUSH23 => "PUSH23",
            Opcode::PUSH24 => "PUSH24",
            Opcode::PUSH25 => "PUSH25",
            Opcode::PUSH26 => "PUSH26",
            Opcode::PUSH27 => "PUSH27",
            Opcode::PUSH28 => "PUSH28",
            Opcode::PUSH29 => "PUSH29",
            Opcode::PUSH30 => "PUSH30",
            Opcode::PUSH31 => "PUSH31",
            Opcode::PUSH32 => "PUSH32",
            Opcode::INVALID => "INVALID",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_block_family() {
        for byte in 0x40u8..=0x48 {
            let op = Opcode::from_byte(byte).unwrap();
            assert_eq!(op.byte(), byte);
        }
    }

    #[test]
    fn test_difficulty_shares_prevrandao_slot() {
        assert_eq!(Opcode::from_byte(0x44), Some(Opcode::DIFFICULTY));
    }

    #[test]
    fn test_push_sizes() {
        assert_eq!(Opcode::PUSH0.push_size(), 0);
        assert_eq!(Opcode::PUSH1.push_size(), 1);
        assert_eq!(Opcode::PUSH20.push_size(), 20);
        assert_eq!(Opcode::PUSH32.push_size(), 32);
        assert_eq!(Opcode::BLOCKHASH.push_size(), 0);
    }

    #[test]
    fn test_every_push_decodes() {
        for byte in 0x60u8..=0x7F {
            let op = Opcode::from_byte(byte).unwrap();
            assert_eq!(op.byte(), byte);
            assert_eq!(op.name(), format!("PUSH{}", byte - 0x5F));
        }
    }

    #[test]
    fn test_unhandled_bytes() {
        assert_eq!(Opcode::from_byte(0x01), None);
        assert_eq!(Opcode::from_byte(0x49), None);
        assert_eq!(Opcode::from_byte(0xFF), None);
        assert_eq!(Opcode::from_byte(0xFE), Some(Opcode::INVALID));
    }

    #[test]
    fn test_display() {
        assert_eq!(Opcode::SELFBALANCE.to_string(), "SELFBALANCE");
    }
}
