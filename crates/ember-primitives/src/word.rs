//! 256-bit stack word and conversions to the fixed-width byte types

use crate::address::Address;
use crate::hash::H256;

/// 256-bit unsigned word; arithmetic wraps modulo 2^256
pub use primitive_types::U256 as Word;

/// Left-pad an address to a word
pub fn address_to_word(address: &Address) -> Word {
    let mut bytes = [0u8; 32];
    bytes[12..].copy_from_slice(address.as_bytes());
    Word::from_big_endian(&bytes)
}

/// Take the low 20 bytes of a word as an address
pub fn word_to_address(word: &Word) -> Address {
    let mut bytes = [0u8; 32];
    word.to_big_endian(&mut bytes);
    let mut out = [0u8; 20];
    out.copy_from_slice(&bytes[12..]);
    Address::from_bytes(out)
}

/// Interpret a hash as a big-endian word
pub fn h256_to_word(hash: &H256) -> Word {
    Word::from_big_endian(hash.as_bytes())
}

/// Serialize a word as a big-endian hash
pub fn word_to_h256(word: &Word) -> H256 {
    let mut bytes = [0u8; 32];
    word.to_big_endian(&mut bytes);
    H256::from_bytes(bytes)
}

/// Narrow a word to `u64`, `None` if any of the high 192 bits are set
pub fn word_to_u64(word: &Word) -> Option<u64> {
    if word.bits() > 64 {
        return None;
    }
    Some(word.low_u64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_word_padding() {
        let addr = Address::from_bytes([0xAB; 20]);
        let word = address_to_word(&addr);
        let mut bytes = [0u8; 32];
        word.to_big_endian(&mut bytes);
        assert_eq!(&bytes[..12], &[0u8; 12]);
        assert_eq!(word_to_address(&word), addr);
    }

    #[test]
    fn test_word_to_address_truncates_high_bytes() {
        let word = Word::MAX;
        assert_eq!(word_to_address(&word), Address::from_bytes([0xFF; 20]));
    }

    #[test]
    fn test_hash_word() {
        let mut raw = [0u8; 32];
        raw[31] = 0x2A;
        let h = H256::from_bytes(raw);
        assert_eq!(h256_to_word(&h), Word::from(42u64));
        assert_eq!(word_to_h256(&Word::from(42u64)), h);
    }

    #[test]
    fn test_word_to_u64() {
        assert_eq!(word_to_u64(&Word::from(u64::MAX)), Some(u64::MAX));
        assert_eq!(word_to_u64(&(Word::from(u64::MAX) + 1)), None);
        assert_eq!(word_to_u64(&Word::zero()), Some(0));
    }
}
