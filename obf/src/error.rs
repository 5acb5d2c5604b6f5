use std::path::PathBuf;

use thiserror::Error;

pub const EXIT_USAGE: u8 = 2;
pub const EXIT_INPUT: u8 = 3;
pub const EXIT_MALFORMED: u8 = 4;
pub const EXIT_OUTPUT: u8 = 5;
pub const EXIT_INTERNAL: u8 = 70;

/// Everything that can abort a run of the optimizer
#[derive(Error, Debug)]
pub enum OBFError {
    #[error("no files to process, an input file is required")]
    MissingInput,

    #[error("bin capacity should be strictly positive, got {0}")]
    InvalidCapacity(f64),

    #[error("invalid config file {path:?}: {source:#}")]
    InvalidConfig {
        path: PathBuf,
        source: anyhow::Error,
    },

    #[error("input file {0:?} does not exist")]
    InputNotFound(PathBuf),

    #[error("could not open input file {path:?} for reading: {source}")]
    InputUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("invalid instance: {0:#}")]
    InvalidInstance(anyhow::Error),

    #[error(
        "no bin can hold item {tag} ({size}) within the {n_bins} provisioned bins, the bin estimate is incorrect"
    )]
    CapacityInvariantViolation {
        tag: String,
        size: f64,
        n_bins: usize,
    },

    #[error("could not write to {path:?}: {source}")]
    OutputWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl OBFError {
    /// Process exit status corresponding to the error
    pub fn exit_code(&self) -> u8 {
        match self {
            OBFError::MissingInput
            | OBFError::InvalidCapacity(_)
            | OBFError::InvalidConfig { .. } => EXIT_USAGE,
            OBFError::InputNotFound(_) | OBFError::InputUnreadable { .. } => EXIT_INPUT,
            OBFError::MalformedRecord { .. } | OBFError::InvalidInstance(_) => EXIT_MALFORMED,
            OBFError::OutputWriteFailure { .. } => EXIT_OUTPUT,
            OBFError::CapacityInvariantViolation { .. } => EXIT_INTERNAL,
        }
    }
}
