//! Utilities for reading and writing deployment addresses in a JSON file
//!
//! The file is a flat JSON object mapping a deployment key (e.g. `CashProxy`)
//! to a hex-encoded address.

use std::{fs, path::Path, str::FromStr};

use alloy_primitives::Address;
use serde_json::{Map, Value};

use crate::errors::ScriptError;

/// Parse the deployments file into a JSON object
fn read_deployments_file(deployments_path: &Path) -> Result<Map<String, Value>, ScriptError> {
    let content = fs::read_to_string(deployments_path).map_err(|e| {
        ScriptError::ReadDeployments(format!(
            "failed to read {}: {}",
            deployments_path.display(),
            e
        ))
    })?;

    match serde_json::from_str(&content).map_err(|e| ScriptError::ReadDeployments(e.to_string()))? {
        Value::Object(map) => Ok(map),
        _ => Err(ScriptError::ReadDeployments(format!(
            "{} does not contain a JSON object",
            deployments_path.display()
        ))),
    }
}

/// Read an address from the deployments file
///
/// Returns the address for the given key, or an error if not found
pub fn read_deployment(key: &str, deployments_path: &Path) -> Result<Address, ScriptError> {
    let deployments = read_deployments_file(deployments_path)?;

    let addr_str = deployments
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ScriptError::ReadDeployments(format!("key {} not found in deployments file", key))
        })?;

    Address::from_str(addr_str).map_err(|e| {
        ScriptError::ReadDeployments(format!("failed to parse address {}: {}", addr_str, e))
    })
}

/// Write an address to the deployments file under the given key, creating
/// the file if it does not exist yet
pub fn write_deployment(
    key: &str,
    address: Address,
    deployments_path: &Path,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !deployments_path.exists() {
        fs::write(deployments_path, "{}")
            .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    }
    let mut deployments = read_deployments_file(deployments_path)?;

    deployments.insert(key.to_string(), Value::String(format!("{address:#x}")));

    let contents = serde_json::to_string_pretty(&Value::Object(deployments))
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(deployments_path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

/// Resolve a CLI argument into an address
///
/// The argument is either a hex-encoded address or a key of the deployments file
pub fn resolve_address(value: &str, deployments_path: &Path) -> Result<Address, ScriptError> {
    if value.is_empty() {
        return Err(ScriptError::Config(
            "an address or deployments key is required".to_string(),
        ));
    }

    match Address::from_str(value) {
        Ok(address) => Ok(address),
        Err(_) => read_deployment(value, deployments_path),
    }
}
