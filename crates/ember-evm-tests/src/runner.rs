//! Fixture runner

use crate::error::{FixtureError, FixtureResult};
use crate::registry::FixtureRegistry;
use crate::types::*;
use bytes::Bytes;
use ember_evm::{
    CallContext, Environment, ExecutionContext, ExecutionResult, FixedHost, Interpreter,
    ProtocolConfig,
};
use ember_primitives::Address;
use ember_state::InMemoryState;
use std::path::Path;

/// Fixture runner
pub struct FixtureRunner {
    /// Verbose output
    verbose: bool,
}

impl FixtureRunner {
    /// Create new fixture runner
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run all cases in a file
    pub fn run_file(&self, path: &Path) -> FixtureResult<FixtureResults> {
        let content = std::fs::read_to_string(path)?;
        let cases: FixtureFile = serde_json::from_str(&content)?;

        let mut results = FixtureResults::default();

        for (name, case) in cases {
            match self.run_case(&name, &case) {
                Ok(()) => {
                    if self.verbose {
                        tracing::info!("PASS: {}", name);
                    }
                    results.passed.push(name);
                }
                Err(e) => {
                    if self.verbose {
                        tracing::warn!("FAIL: {} - {}", name, e);
                    }
                    results.failed.push((name, e.to_string()));
                }
            }
        }

        Ok(results)
    }

    /// Run every `.json` file under `dir`, recursively
    pub fn run_dir(&self, dir: &Path) -> FixtureResult<FixtureResults> {
        let mut results = FixtureResults::default();

        let mut entries = std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort();

        for path in entries {
            if path.is_dir() {
                results.merge(self.run_dir(&path)?);
            } else if path.extension().is_some_and(|e| e == "json") {
                results.merge(self.run_file(&path)?);
            }
        }

        Ok(results)
    }

    /// Run a single case and check it against its expectation
    pub fn run_case(&self, name: &str, case: &FixtureCase) -> FixtureResult<()> {
        let result = self.execute(case)?;
        tracing::debug!(
            fixture = name,
            pinned_hashes = case.blockhashes.len(),
            gas_used = result.gas_used,
            "fixture executed"
        );
        check_result(name, case, &result)
    }

    /// Execute a case without checking it
    pub fn execute(&self, case: &FixtureCase) -> FixtureResult<ExecutionResult<InMemoryState>> {
        let config = build_config(case);
        let host = FixedHost::new(case.env.current_number.0, case.env.current_timestamp.0);
        let registry = case
            .blockhashes
            .iter()
            .fold(FixtureRegistry::new(), |r, entry| {
                r.with_hash(entry.number.0, entry.hash.0)
            });
        let state = build_state(case)?;

        let call = CallContext::new(
            case.exec.address.0,
            case.exec.caller.0,
            Bytes::from(case.exec.code.0.clone()),
            case.exec.gas_limit.0,
        )
        .with_value(case.exec.value.0)
        .with_calldata(Bytes::from(case.exec.data.0.clone()));

        let env = Environment::new(config, &host, &registry);
        Ok(Interpreter::new(env).run(ExecutionContext::new(call, state)))
    }
}

fn build_config(case: &FixtureCase) -> ProtocolConfig {
    let defaults = ProtocolConfig::default();
    ProtocolConfig {
        chain_id: case.config.chain_id.map_or(defaults.chain_id, |c| c.0),
        coinbase: case.config.coinbase.map_or(defaults.coinbase, |c| c.0),
    }
}

fn build_state(case: &FixtureCase) -> FixtureResult<InMemoryState> {
    let mut state = InMemoryState::new();
    for (address, account) in &case.pre {
        let address = Address::from_hex(address)
            .map_err(|e| FixtureError::Parse(format!("invalid pre address {}: {}", address, e)))?;
        state = state.with_balance(address, account.balance.0);
    }
    Ok(state)
}

/// Check execution result against expected values
fn check_result(
    name: &str,
    case: &FixtureCase,
    result: &ExecutionResult<InMemoryState>,
) -> FixtureResult<()> {
    let expect = &case.expect;

    if result.success != expect.success {
        return Err(FixtureError::Assertion(format!(
            "{}: expected success={} but got success={} (output {:?})",
            name,
            expect.success,
            result.success,
            String::from_utf8_lossy(&result.output)
        )));
    }

    if result.gas_used != expect.gas_used.0 {
        return Err(FixtureError::Assertion(format!(
            "{}: gas mismatch: expected {}, got {}",
            name, expect.gas_used.0, result.gas_used
        )));
    }

    let expected_stack: Vec<_> = expect.stack.iter().map(|w| w.0).collect();
    if result.stack.as_slice() != expected_stack.as_slice() {
        return Err(FixtureError::Assertion(format!(
            "{}: stack mismatch: expected {:?}, got {:?}",
            name,
            expected_stack,
            result.stack.as_slice()
        )));
    }

    if let Some(expected_out) = &expect.out {
        if result.output[..] != expected_out.0[..] {
            return Err(FixtureError::Assertion(format!(
                "{}: output mismatch: expected {:?}, got {:?}",
                name, expected_out.0, result.output
            )));
        }
    }

    for address in &expect.warm {
        if !result.state.is_warm(&address.0) {
            return Err(FixtureError::Assertion(format!(
                "{}: expected {} to be warm",
                name, address.0
            )));
        }
    }

    Ok(())
}

/// Fixture results
#[derive(Debug, Default)]
pub struct FixtureResults {
    /// Passed cases
    pub passed: Vec<String>,
    /// Failed cases (name, reason)
    pub failed: Vec<(String, String)>,
}

impl FixtureResults {
    /// Total number of cases
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    /// Pass rate as percentage
    pub fn pass_rate(&self) -> f64 {
        if self.total() == 0 {
            return 100.0;
        }
        (self.passed.len() as f64 / self.total() as f64) * 100.0
    }

    /// Fold another file's results into these
    pub fn merge(&mut self, other: FixtureResults) {
        self.passed.extend(other.passed);
        self.failed.extend(other.failed);
    }
}
