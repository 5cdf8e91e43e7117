//! Type definitions for the JSON fixture format

use ember_primitives::{Address, Word, H256};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

fn hex_body(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

/// Hex-encoded bytes
#[derive(Debug, Clone, Default)]
pub struct HexBytes(pub Vec<u8>);

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        let s = hex_body(&s);
        if s.is_empty() {
            return Ok(HexBytes(Vec::new()));
        }
        hex::decode(s)
            .map(HexBytes)
            .map_err(serde::de::Error::custom)
    }
}

/// Hex-encoded 256-bit word, left-padded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexWord(pub Word);

impl<'de> Deserialize<'de> for HexWord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        let s = hex_body(&s);
        if s.is_empty() {
            return Ok(HexWord(Word::zero()));
        }

        // Pad with leading zero if odd length
        let padded = if s.len() % 2 == 1 {
            format!("0{}", s)
        } else {
            s.to_string()
        };

        let bytes = hex::decode(&padded).map_err(serde::de::Error::custom)?;
        if bytes.len() > 32 {
            return Err(serde::de::Error::custom(format!(
                "word too long: {} bytes",
                bytes.len()
            )));
        }
        Ok(HexWord(Word::from_big_endian(&bytes)))
    }
}

/// Hex-encoded u64
#[derive(Debug, Clone, Copy, Default)]
pub struct HexU64(pub u64);

impl<'de> Deserialize<'de> for HexU64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        let s = hex_body(&s);
        if s.is_empty() {
            return Ok(HexU64(0));
        }
        u64::from_str_radix(s, 16)
            .map(HexU64)
            .map_err(serde::de::Error::custom)
    }
}

/// Hex-encoded address (20 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexAddress(pub Address);

impl<'de> Deserialize<'de> for HexAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        Address::from_hex(&s)
            .map(HexAddress)
            .map_err(serde::de::Error::custom)
    }
}

/// Hex-encoded H256 (32 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexH256(pub H256);

impl<'de> Deserialize<'de> for HexH256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        H256::from_hex(&s)
            .map(HexH256)
            .map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Fixture Types
// =============================================================================

/// Fixture file structure (map of test name -> case), iterated in name order
pub type FixtureFile = BTreeMap<String, FixtureCase>;

/// Single fixture case
#[derive(Debug, Deserialize)]
pub struct FixtureCase {
    /// Protocol parameters; defaults apply when absent
    #[serde(default)]
    pub config: FixtureConfig,
    /// Block environment
    pub env: FixtureEnv,
    /// Explicit registry entries; other numbers hash to keccak256(number)
    #[serde(default)]
    pub blockhashes: Vec<BlockhashEntry>,
    /// Pre-execution balances keyed by hex address
    #[serde(default)]
    pub pre: BTreeMap<String, PreAccount>,
    /// Call parameters
    pub exec: FixtureExec,
    /// Expected outcome
    pub expect: FixtureExpect,
}

/// Protocol parameters for one case
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureConfig {
    /// CHAINID value
    pub chain_id: Option<HexU64>,
    /// COINBASE value
    pub coinbase: Option<HexAddress>,
}

/// Block environment served by the host oracle
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureEnv {
    /// Current block height
    pub current_number: HexU64,
    /// Current block timestamp
    pub current_timestamp: HexU64,
}

/// One registry entry
#[derive(Debug, Deserialize)]
pub struct BlockhashEntry {
    /// Block number
    pub number: HexU64,
    /// Its hash
    pub hash: HexH256,
}

/// Pre-state for one account
#[derive(Debug, Deserialize)]
pub struct PreAccount {
    /// Balance in wei
    pub balance: HexWord,
}

/// Call parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureExec {
    /// Address of the executing account
    pub address: HexAddress,
    /// Caller address
    pub caller: HexAddress,
    /// Code to execute
    pub code: HexBytes,
    /// Gas limit of the frame
    pub gas_limit: HexU64,
    /// Value transferred
    #[serde(default)]
    pub value: HexWord,
    /// Input data
    #[serde(default)]
    pub data: HexBytes,
}

/// Expected outcome
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureExpect {
    /// Halted without revert
    pub success: bool,
    /// Total gas charged
    pub gas_used: HexU64,
    /// Stack bottom to top
    #[serde(default)]
    pub stack: Vec<HexWord>,
    /// Expected output (revert payload when `success` is false)
    pub out: Option<HexBytes>,
    /// Addresses that must be warm after execution
    #[serde(default)]
    pub warm: Vec<HexAddress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_word_odd_length() {
        let w: HexWord = serde_json::from_str("\"0x3e7\"").unwrap();
        assert_eq!(w.0, Word::from(999u64));
    }

    #[test]
    fn test_hex_word_too_long() {
        let long = format!("\"0x{}\"", "ff".repeat(33));
        assert!(serde_json::from_str::<HexWord>(&long).is_err());
    }

    #[test]
    fn test_hex_u64_empty_is_zero() {
        let n: HexU64 = serde_json::from_str("\"0x\"").unwrap();
        assert_eq!(n.0, 0);
    }

    #[test]
    fn test_case_defaults() {
        let json = r#"{
            "env": { "currentNumber": "0x01", "currentTimestamp": "0x02" },
            "exec": {
                "address": "0x00000000000000000000000000000000000000aa",
                "caller": "0x00000000000000000000000000000000000000bb",
                "code": "0x4300",
                "gasLimit": "0x0f4240"
            },
            "expect": { "success": true, "gasUsed": "0x02" }
        }"#;
        let case: FixtureCase = serde_json::from_str(json).unwrap();
        assert!(case.config.chain_id.is_none());
        assert!(case.blockhashes.is_empty());
        assert!(case.pre.is_empty());
        assert_eq!(case.exec.code.0, vec![0x43, 0x00]);
        assert!(case.exec.value.0.is_zero());
        assert!(case.expect.stack.is_empty());
    }
}
