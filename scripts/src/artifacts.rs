//! Lookup of compiled contract artifacts by contract name
//!
//! Both the Hardhat layout (`artifacts/contracts/Foo.sol/Foo.json`, with the
//! creation bytecode as a hex string) and the Foundry layout
//! (`out/Foo.sol/Foo.json`, with the bytecode under `bytecode.object`) are
//! understood.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::json_abi::JsonAbi;
use alloy_primitives::Bytes;
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError};

/// The subset of an artifact file the scripts need
#[derive(Deserialize)]
struct RawArtifact {
    /// The contract ABI
    abi: JsonAbi,
    /// The creation bytecode
    bytecode: RawBytecode,
}

/// The creation bytecode, as laid out by either toolchain
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    /// Hardhat
    Hex(String),
    /// Foundry
    Object {
        /// The hex-encoded creation bytecode
        object: String,
    },
}

impl RawBytecode {
    /// The hex string of the bytecode, regardless of the layout
    fn as_hex(&self) -> &str {
        match self {
            RawBytecode::Hex(hex) => hex,
            RawBytecode::Object { object } => object,
        }
    }
}

/// A compiled contract, the equivalent of a contract factory
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// The name of the contract
    pub name: String,
    /// The ABI of the contract
    pub abi: JsonAbi,
    /// The creation bytecode of the contract
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from the contents of its JSON file
    pub fn from_json(name: &str, contents: &str) -> Result<Self, ScriptError> {
        let raw: RawArtifact = serde_json::from_str(contents)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{name}: {e}")))?;

        let bytecode = Bytes::from_str(raw.bytecode.as_hex()).map_err(|e| {
            ScriptError::ArtifactParsing(format!(
                "{name}: invalid bytecode ({e}), are libraries left unlinked?"
            ))
        })?;
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{name} has no bytecode, it is abstract or an interface"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            abi: raw.abi,
            bytecode,
        })
    }

    /// The number of arguments the constructor takes
    pub fn constructor_arity(&self) -> usize {
        self.abi.constructor().map_or(0, |c| c.inputs.len())
    }

    /// The creation code for this contract, with the given ABI-encoded
    /// constructor arguments appended
    pub fn deploy_code(&self, constructor_args: &[u8]) -> Bytes {
        let mut code = Vec::with_capacity(self.bytecode.len() + constructor_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(constructor_args);
        code.into()
    }

    /// Check that the contract exposes a function with the given selector
    pub fn ensure_function(&self, selector: [u8; 4], signature: &str) -> Result<(), ScriptError> {
        if self.abi.functions().any(|f| f.selector().0 == selector) {
            Ok(())
        } else {
            Err(ScriptError::CalldataConstruction(format!(
                "{} has no function `{}`",
                self.name, signature
            )))
        }
    }

    /// Calldata invoking the argument-less function `name`, e.g. an initializer
    pub fn no_arg_calldata(&self, name: &str) -> Result<Bytes, ScriptError> {
        self.abi
            .function(name)
            .and_then(|overloads| overloads.iter().find(|f| f.inputs.is_empty()))
            .map(|f| Bytes::copy_from_slice(f.selector().as_slice()))
            .ok_or_else(|| {
                ScriptError::CalldataConstruction(format!(
                    "{} has no argument-less function `{}`",
                    self.name, name
                ))
            })
    }
}

/// Load the artifact of the contract `name` from the artifacts directory
pub fn load_artifact(artifacts_dir: &Path, name: &str) -> Result<ContractArtifact, ScriptError> {
    let file_name = format!("{name}.{ARTIFACT_EXTENSION}");
    let mut matches = Vec::new();
    find_files(artifacts_dir, &file_name, &mut matches)?;

    let path = match matches.as_slice() {
        [] => {
            return Err(ScriptError::ArtifactParsing(format!(
                "no artifact for {} under {}",
                name,
                artifacts_dir.display()
            )))
        }
        [path] => path,
        paths => {
            let paths = paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ScriptError::ArtifactParsing(format!(
                "multiple artifacts named {name}: {paths}"
            )));
        }
    };

    let contents =
        fs::read_to_string(path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
    ContractArtifact::from_json(name, &contents)
}

/// Recursively collect the files named `file_name` under `dir`
fn find_files(dir: &Path, file_name: &str, found: &mut Vec<PathBuf>) -> Result<(), ScriptError> {
    let entries = fs::read_dir(dir).map_err(|e| {
        ScriptError::ArtifactParsing(format!("cannot read {}: {}", dir.display(), e))
    })?;

    for entry in entries {
        let path = entry
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?
            .path();

        if path.is_dir() {
            find_files(&path, file_name, found)?;
        } else if path.file_name().is_some_and(|n| n == file_name) {
            found.push(path);
        }
    }

    Ok(())
}
