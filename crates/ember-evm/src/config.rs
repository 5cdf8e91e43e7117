//! Protocol parameters read by the block-information opcodes

use ember_primitives::{Address, AddressError, Word};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Protocol-version placeholders.
///
/// Changing one of these changes observable opcode output, so they are
/// named here rather than inlined in the handlers.
pub mod protocol {
    use ember_primitives::{Address, Word};

    /// DIFFICULTY after the merge
    pub const DIFFICULTY: Word = Word([0; 4]);
    /// BASEFEE; base fee is not modeled
    pub const BASE_FEE: Word = Word([0; 4]);
    /// Chain id used when none is configured
    pub const DEFAULT_CHAIN_ID: u64 = 1337;
    /// Beneficiary reported by COINBASE when none is configured
    pub const DEFAULT_COINBASE: Address = Address::from_bytes([
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xde,
    ]);
    /// Number of trailing blocks BLOCKHASH looks back over
    pub const BLOCKHASH_WINDOW: u64 = 256;
}

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    /// Coinbase is not a 20-byte hex address
    #[error("invalid coinbase: {0}")]
    InvalidCoinbase(#[from] AddressError),
}

/// Per-chain constants for COINBASE and CHAINID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// Value pushed by CHAINID
    pub chain_id: u64,
    /// Value pushed by COINBASE
    pub coinbase: Address,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            chain_id: protocol::DEFAULT_CHAIN_ID,
            coinbase: protocol::DEFAULT_COINBASE,
        }
    }
}

/// On-disk form; addresses as hex strings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProtocolConfig {
    #[serde(default = "default_chain_id")]
    chain_id: u64,
    #[serde(default)]
    coinbase: Option<String>,
}

fn default_chain_id() -> u64 {
    protocol::DEFAULT_CHAIN_ID
}

impl ProtocolConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawProtocolConfig = serde_json::from_str(json)?;
        let coinbase = match raw.coinbase.as_deref().map(str::trim) {
            Some(hex) if !hex.is_empty() => Address::from_hex(hex)?,
            _ => protocol::DEFAULT_COINBASE,
        };
        Ok(Self {
            chain_id: raw.chain_id,
            coinbase,
        })
    }

    /// Read and parse a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), chain_id = config.chain_id, coinbase = %config.coinbase, "loaded protocol config");
        Ok(config)
    }

    /// CHAINID as a stack word
    pub fn chain_id_word(&self) -> Word {
        Word::from(self.chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default() {
        let config = ProtocolConfig::default();
        assert_eq!(config.chain_id, 1337);
        assert_eq!(config.coinbase, protocol::DEFAULT_COINBASE);
    }

    #[test]
    fn test_placeholders_are_zero() {
        assert!(protocol::DIFFICULTY.is_zero());
        assert!(protocol::BASE_FEE.is_zero());
    }

    #[test]
    fn test_from_json_full() {
        let config = ProtocolConfig::from_json(
            r#"{"chainId": 7, "coinbase": "0x1111111111111111111111111111111111111111"}"#,
        )
        .unwrap();
        assert_eq!(config.chain_id, 7);
        assert_eq!(config.coinbase, Address::from_bytes([0x11; 20]));
    }

    #[test]
    fn test_from_json_empty_uses_defaults() {
        let config = ProtocolConfig::from_json("{}").unwrap();
        assert_eq!(config, ProtocolConfig::default());
    }

    #[test]
    fn test_from_json_bad_coinbase() {
        let err = ProtocolConfig::from_json(r#"{"coinbase": "0x1234"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCoinbase(AddressError::InvalidLength(2))));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ProtocolConfig::from_json("{chainId").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chainId": 42}}"#).unwrap();
        let config = ProtocolConfig::from_file(file.path()).unwrap();
        assert_eq!(config.chain_id, 42);
        assert_eq!(config.chain_id_word(), Word::from(42u64));
    }

    #[test]
    fn test_from_missing_file() {
        let err = ProtocolConfig::from_file(Path::new("/nonexistent/ember.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
