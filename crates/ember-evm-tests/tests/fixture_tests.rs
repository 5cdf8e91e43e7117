//! Runs the JSON fixtures through the interpreter

use ember_evm_tests::{keccak_blockhash, FixtureCase, FixtureError, FixtureRunner};
use ember_primitives::h256_to_word;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn parse(json: &str) -> FixtureCase {
    serde_json::from_str(json).unwrap()
}

const PREVIOUS_BLOCK: &str = r#"{
    "env": { "currentNumber": "0x3e8", "currentTimestamp": "0x01" },
    "exec": {
        "address": "0x00000000000000000000000000000000000000aa",
        "caller": "0x00000000000000000000000000000000000000bb",
        "code": "0x6103e74000",
        "gasLimit": "0x0f4240"
    },
    "expect": { "success": true, "gasUsed": "0x17" }
}"#;

#[test]
fn test_block_info_fixtures() {
    let runner = FixtureRunner::new(true);
    let results = runner
        .run_file(&fixtures_dir().join("block_info.json"))
        .unwrap();

    assert!(results.failed.is_empty(), "failures: {:?}", results.failed);
    assert_eq!(results.passed.len(), 19);
}

#[test]
fn test_run_dir_collects_every_file() {
    let results = FixtureRunner::new(false).run_dir(&fixtures_dir()).unwrap();
    assert!(results.total() >= 19);
    assert_eq!(results.pass_rate(), 100.0);
}

#[test]
fn test_unpinned_blockhash_defaults_to_keccak() {
    let case = parse(PREVIOUS_BLOCK);
    let result = FixtureRunner::new(false).execute(&case).unwrap();

    assert!(result.success);
    assert_eq!(result.stack.as_slice(), &[h256_to_word(&keccak_blockhash(999))]);
}

#[test]
fn test_wrong_stack_expectation_fails() {
    let json = PREVIOUS_BLOCK.replace(
        r#""gasUsed": "0x17" }"#,
        r#""gasUsed": "0x17", "stack": ["0x00"] }"#,
    );
    let err = FixtureRunner::new(false)
        .run_case("wrongStack", &parse(&json))
        .unwrap_err();
    assert!(matches!(err, FixtureError::Assertion(msg) if msg.contains("stack mismatch")));
}

#[test]
fn test_wrong_gas_expectation_fails() {
    let json = PREVIOUS_BLOCK.replace("\"0x17\"", "\"0x14\"");
    let err = FixtureRunner::new(false)
        .run_case("wrongGas", &parse(&json))
        .unwrap_err();
    assert!(matches!(err, FixtureError::Assertion(msg) if msg.contains("gas mismatch")));
}

#[test]
fn test_bad_pre_address_is_parse_error() {
    let json = PREVIOUS_BLOCK.replace(
        r#""exec""#,
        r#""pre": { "0x1234": { "balance": "0x01" } }, "exec""#,
    );
    let err = FixtureRunner::new(false).execute(&parse(&json)).unwrap_err();
    assert!(matches!(err, FixtureError::Parse(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = FixtureRunner::new(false)
        .run_file(&fixtures_dir().join("does_not_exist.json"))
        .unwrap_err();
    assert!(matches!(err, FixtureError::Io(_)));
}
