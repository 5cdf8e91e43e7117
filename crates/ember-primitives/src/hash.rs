//! 32-byte hash type

use std::fmt;
use thiserror::Error;

/// Hash parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid hash length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// 256-bit hash
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct H256([u8; 32]);

impl H256 {
    /// Size in bytes
    pub const LEN: usize = 32;

    /// Zero hash
    pub const ZERO: H256 = H256([0u8; 32]);

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        H256(bytes)
    }

    /// Create from slice, checking the length
    pub fn from_slice(slice: &[u8]) -> Result<Self, HashError> {
        let bytes: [u8; 32] = slice
            .try_into()
            .map_err(|_| HashError::InvalidLength(slice.len()))?;
        Ok(H256(bytes))
    }

    /// Parse from hex, with or without `0x`
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| HashError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check for the zero hash
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Lowercase hex with `0x` prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H256({})", self.to_hex())
    }
}

impl fmt::Display for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 32]> for H256 {
    fn from(bytes: [u8; 32]) -> Self {
        H256(bytes)
    }
}

impl AsRef<[u8]> for H256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip_prefix_insensitive() {
        let hex = "0x00000000000000000000000000000000000000000000000000000000000003e7";
        let h = H256::from_hex(hex).unwrap();
        assert_eq!(h.to_hex(), hex);
        assert_eq!(H256::from_hex(&hex[2..]).unwrap(), h);
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(H256::from_slice(&[0u8; 31]), Err(HashError::InvalidLength(31)));
    }

    #[test]
    fn test_zero() {
        assert!(H256::ZERO.is_zero());
        assert!(!H256::from_bytes([1; 32]).is_zero());
    }
}
