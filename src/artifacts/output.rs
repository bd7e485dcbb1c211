//! Solc standard json output.
//!
//! Only the parts needed to locate a single contract are modeled. Everything below
//! `contracts[file][name]` is kept as raw json and never validated.

use crate::error::{Result, SolcError};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::{fmt, path::Path};

/// Output type `solc` produces
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CompilerOutput {
    /// Raw diagnostics, whatever their shape. See [`CompilerOutput::diagnostics`]
    #[serde(default)]
    pub errors: Value,
    /// File name -> contract name -> contract artifacts
    #[serde(default)]
    pub contracts: Option<Map<String, Value>>,
}

impl CompilerOutput {
    /// Reads the compiler output from a json file.
    pub fn read(path: &Path) -> Result<Self> {
        crate::utils::read_json_file(path)
    }

    /// Returns the artifacts of the contract `name` declared in `file`.
    pub fn contract(&self, file: &str, name: &str) -> Result<&Value> {
        let contracts = self.contracts.as_ref().ok_or(SolcError::MissingContracts)?;
        let file_contracts = contracts
            .get(file)
            .and_then(Value::as_object)
            .ok_or_else(|| SolcError::SourceNotFound(file.to_string()))?;
        file_contracts.get(name).ok_or_else(|| SolcError::ContractNotFound {
            file: file.to_string(),
            name: name.to_string(),
        })
    }

    /// Removes and returns the artifacts of the contract `name` declared in `file`.
    pub fn take_contract(&mut self, file: &str, name: &str) -> Result<Value> {
        self.contract(file, name)?;
        self.contracts
            .as_mut()
            .and_then(|contracts| contracts.get_mut(file))
            .and_then(Value::as_object_mut)
            .and_then(|file_contracts| file_contracts.remove(name))
            .ok_or_else(|| SolcError::ContractNotFound {
                file: file.to_string(),
                name: name.to_string(),
            })
    }

    /// Returns the entries of `errors` that could be understood as diagnostics.
    ///
    /// Yields nothing if `errors` is missing or not a list.
    pub fn diagnostics(&self) -> impl Iterator<Item = Error> + '_ {
        self.errors
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|err| Error::deserialize(err).ok())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Severity {
    /// Returns `true` if the severity is `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns the string representation of the severity.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

/// A single entry of the output's `errors` list.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub component: String,
    pub severity: Severity,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub formatted_message: Option<String>,
}

impl Error {
    /// Returns `true` if the error is an error.
    pub const fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = &self.formatted_message {
            return f.write_str(msg.trim_end());
        }
        write!(f, "{}", self.severity)?;
        if !self.r#type.is_empty() {
            write!(f, " ({})", self.r#type)?;
        }
        write!(f, ": {}", self.message)
    }
}
