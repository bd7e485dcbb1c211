//! Solc standard json input and output bindings.

use crate::{error::SolcIoError, utils};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod output;
pub mod output_selection;

pub use output::{CompilerOutput, Error, Severity};
pub use output_selection::{OutputSelection, DEFAULT_CONTRACT_OUTPUTS};

/// The `language` of every input built by this crate.
pub const SOLIDITY: &str = "Solidity";

/// Token in a remapping template that stands for the project's base path.
pub const BASE_PATH_PLACEHOLDER: &str = "[BASE_PATH]";

/// Remappings every input is built with, before [`BASE_PATH_PLACEHOLDER`] is substituted.
pub const REMAPPING_TEMPLATES: &[&str] = &[
    "@openzeppelin/contracts/=[BASE_PATH]/node_modules/@openzeppelin/contracts/",
    "@openzeppelin/contracts-upgradeable/=[BASE_PATH]/node_modules/@openzeppelin/contracts-upgradeable/",
];

/// Input type `solc` expects.
///
/// Field order is the key order of the serialized document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolcInput {
    pub language: String,
    pub sources: Sources,
    pub settings: Settings,
}

impl Default for SolcInput {
    fn default() -> Self {
        Self::template()
    }
}

impl SolcInput {
    /// The input every build starts from: no sources, no output selection and the unresolved
    /// [`REMAPPING_TEMPLATES`].
    pub fn template() -> Self {
        Self {
            language: SOLIDITY.to_string(),
            sources: Sources::new(),
            settings: Settings {
                remappings: REMAPPING_TEMPLATES.iter().map(|r| r.to_string()).collect(),
                optimizer: Optimizer { enabled: true, runs: 200 },
                metadata: SettingsMetadata { use_literal_content: true },
                output_selection: OutputSelection::default(),
            },
        }
    }

    /// Adds the contract `contract_name` of the file `contract_path`, located under `base_path`,
    /// and requests [`DEFAULT_CONTRACT_OUTPUTS`] for it.
    ///
    /// `contract_path` is used verbatim as the source key. The source url is
    /// `base_path + "/" + contract_path` resolved to an absolute path; the file does not need to
    /// exist. Every [`BASE_PATH_PLACEHOLDER`] in the remappings is replaced by `base_path`.
    pub fn with_contract(
        mut self,
        base_path: &str,
        contract_path: &str,
        contract_name: &str,
    ) -> Result<Self, SolcIoError> {
        let url = utils::absolute_path(format!("{base_path}/{contract_path}"))?;
        trace!(url = %url.display(), "resolved source url");

        self.sources = Sources::from([(
            contract_path.to_string(),
            Source { urls: vec![utils::path_to_string(&url)] },
        )]);
        self.settings.substitute_base_path(base_path);
        self.settings.output_selection = OutputSelection::default();
        self.settings.output_selection.select_default(contract_path, contract_name);
        Ok(self)
    }
}

/// Source file name -> source.
pub type Sources = BTreeMap<String, Source>;

/// A source given to `solc` by location rather than by content.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    /// Locations `solc` may load the file from.
    pub urls: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub remappings: Vec<String>,
    pub optimizer: Optimizer,
    /// Metadata settings
    pub metadata: SettingsMetadata,
    /// This field can be used to select desired outputs based
    /// on file and contract names.
    pub output_selection: OutputSelection,
}

impl Settings {
    /// Replaces every occurrence of [`BASE_PATH_PLACEHOLDER`] in the remappings with `base_path`.
    ///
    /// This is a plain text substitution, `base_path` is inserted as is.
    pub fn substitute_base_path(&mut self, base_path: &str) {
        for remapping in &mut self.remappings {
            *remapping = remapping.replace(BASE_PATH_PLACEHOLDER, base_path);
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Optimizer {
    pub enabled: bool,
    pub runs: usize,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsMetadata {
    /// Use only literal content and not URLs (false by default)
    pub use_literal_content: bool,
}
