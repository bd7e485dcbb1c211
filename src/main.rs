use clap::{Parser, Subcommand};
use solc_helpers::{json, HelperConfig};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Builds solc standard json input and reads solc standard json output.
#[derive(Debug, Parser)]
#[command(name = "solc-helpers", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the standard json input for a single contract to `temp_input.json` and print its
    /// path.
    #[command(name = "make_solc_input")]
    MakeSolcInput {
        /// Project root, substituted into the dependency remappings
        base_path: String,
        /// Path of the source file, relative to the project root
        contract_path: String,
        /// Name of the contract declared in the source file
        contract_name: String,
    },
    /// Print the output of a single contract from a standard json output file.
    #[command(name = "sol_output")]
    SolOutput {
        /// The compiler's standard json output
        path: PathBuf,
        /// Source file key in the output's `contracts` section
        contract_path: String,
        /// Name of the contract declared in the source file
        contract_name: String,
    },
}

fn main() -> anyhow::Result<()> {
    set_global_subscriber();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::MakeSolcInput { base_path, contract_path, contract_name } => {
            let path = solc_helpers::make_solc_input(
                &HelperConfig::default(),
                &base_path,
                &contract_path,
                &contract_name,
            )?;
            writeln!(stdout, "{}", path.display())?;
        }
        Command::SolOutput { path, contract_path, contract_name } => {
            let artifacts = solc_helpers::sol_output(&path, &contract_path, &contract_name)?;
            json::to_writer(&mut stdout, &artifacts)?;
            writeln!(stdout)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn set_global_subscriber() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
        .try_init();
}
