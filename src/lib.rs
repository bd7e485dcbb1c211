#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

pub mod artifacts;
pub use artifacts::{CompilerOutput, SolcInput};

pub mod commands;
pub use commands::{make_solc_input, sol_output};

mod config;
pub use config::{HelperConfig, BUILT_INPUT_FILE};

pub mod error;

pub mod json;

pub mod utils;
