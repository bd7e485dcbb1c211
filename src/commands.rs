//! The two helper operations behind the `solc-helpers` subcommands.

use crate::{
    artifacts::CompilerOutput,
    config::HelperConfig,
    error::Result,
    utils,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Initial capacity of the buffered writer used for the built input.
const WRITE_BUFFER_CAPACITY: usize = 8 * 1024;

/// Builds the standard json input for one contract and writes it to
/// [`HelperConfig::output_file`].
///
/// Any existing file is overwritten. Returns the absolute path of the written file.
#[instrument(level = "debug", skip(config))]
pub fn make_solc_input(
    config: &HelperConfig,
    base_path: &str,
    contract_path: &str,
    contract_name: &str,
) -> Result<PathBuf> {
    let output_file = utils::absolute_path(&config.output_file)?;
    let input = config.template.clone().with_contract(base_path, contract_path, contract_name)?;

    utils::write_json_file(&input, &output_file, WRITE_BUFFER_CAPACITY)?;
    debug!(path = %output_file.display(), "wrote solc input");
    Ok(output_file)
}

/// Reads the compiler output at `path` and returns the artifacts of `contract_name` in
/// `contract_path`.
///
/// Fails if the file can't be read or parsed, or if any of `contracts`, `contract_path` and
/// `contract_name` is missing from the document.
#[instrument(level = "debug")]
pub fn sol_output(path: &Path, contract_path: &str, contract_name: &str) -> Result<Value> {
    let mut output = CompilerOutput::read(path)?;
    match output.take_contract(contract_path, contract_name) {
        Ok(artifacts) => Ok(artifacts),
        Err(err) => {
            for diagnostic in output.diagnostics().filter(|d| d.is_error()) {
                warn!("{diagnostic}");
            }
            Err(err)
        }
    }
}
