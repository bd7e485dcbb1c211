//! Bindings for standard json output selection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The outputs requested for every contract unless stated otherwise.
pub const DEFAULT_CONTRACT_OUTPUTS: &[&str] = &["abi", "devdoc", "userdoc"];

/// Output selections for individual contracts of a file: contract name -> requested outputs.
pub type FileOutputSelection = BTreeMap<String, Vec<String>>;

/// Represents the selected output of files and contracts.
///
/// The first level key is the file name and the second level key is the contract name. An empty
/// contract name is used for outputs that are not tied to a contract but to the whole source
/// file like the AST.
///
/// ```json
/// {
///   "contracts/Token.sol": {
///     "Token": ["abi", "devdoc", "userdoc"]
///   }
/// }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct OutputSelection(pub BTreeMap<String, FileOutputSelection>);

impl OutputSelection {
    /// Requests `outputs` for the contract `name` in `file`, replacing any previous selection for
    /// that contract.
    pub fn select<I, S>(&mut self, file: impl Into<String>, name: impl Into<String>, outputs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(file.into())
            .or_default()
            .insert(name.into(), outputs.into_iter().map(Into::into).collect());
    }

    /// Requests [`DEFAULT_CONTRACT_OUTPUTS`] for the contract `name` in `file`.
    pub fn select_default(&mut self, file: impl Into<String>, name: impl Into<String>) {
        self.select(file, name, DEFAULT_CONTRACT_OUTPUTS.iter().copied())
    }

    /// Returns the outputs requested for the given contract, if any.
    pub fn get(&self, file: &str, name: &str) -> Option<&[String]> {
        self.0.get(file)?.get(name).map(Vec::as_slice)
    }
}
