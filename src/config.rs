use crate::artifacts::SolcInput;
use std::path::PathBuf;

/// File the built input is written to, relative to the working directory.
pub const BUILT_INPUT_FILE: &str = "temp_input.json";

/// Configuration shared by the helper commands.
///
/// [`HelperConfig::default`] is what the `solc-helpers` binary runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelperConfig {
    /// The input every `make_solc_input` run starts from
    pub template: SolcInput,
    /// Where `make_solc_input` writes its document. Relative paths are resolved against the
    /// working directory at the time of the run.
    pub output_file: PathBuf,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self { template: SolcInput::template(), output_file: PathBuf::from(BUILT_INPUT_FILE) }
    }
}

impl HelperConfig {
    /// Sets the file `make_solc_input` writes to.
    #[must_use]
    pub fn with_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = output_file.into();
        self
    }
}
