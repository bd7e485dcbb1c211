use std::{
    io,
    path::{Path, PathBuf},
};

pub type Result<T, E = SolcError> = std::result::Result<T, E>;

/// Various error types
#[derive(Debug, thiserror::Error)]
pub enum SolcError {
    #[error(transparent)]
    Io(#[from] SolcIoError),
    /// The file exists but does not hold valid JSON.
    #[error("failed to parse json file \"{}\": {err}", path.display())]
    ParseJson { err: serde_json::Error, path: PathBuf },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("compiler output has no `contracts` section")]
    MissingContracts,
    #[error("no source file \"{0}\" in the `contracts` section of the compiler output")]
    SourceNotFound(String),
    #[error("no contract \"{name}\" in source file \"{file}\"")]
    ContractNotFound { file: String, name: String },
}

impl SolcError {
    pub(crate) fn io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        SolcIoError::new(err, path).into()
    }

    pub(crate) fn parse_json(err: serde_json::Error, path: impl Into<PathBuf>) -> Self {
        Self::ParseJson { err, path: path.into() }
    }
}

/// An I/O error tied to the path it happened on.
#[derive(Debug, thiserror::Error)]
#[error("\"{}\": {io}", self.path.display())]
pub struct SolcIoError {
    io: io::Error,
    path: PathBuf,
}

impl SolcIoError {
    pub fn new(io: io::Error, path: impl Into<PathBuf>) -> Self {
        Self { io, path: path.into() }
    }

    /// The path at which the error occurred
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying `io::Error`
    pub fn io(&self) -> &io::Error {
        &self.io
    }
}
