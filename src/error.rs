//! Error taxonomy for spec compilation.

use std::path::PathBuf;
use thiserror::Error;

/// Every way a spec document can fail to compile.
///
/// All variants are fatal to the run; the driver logs the message and
/// exits non-zero without writing any output.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("spec file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to parse spec file: {0}")]
    Malformed(#[from] serde_yaml::Error),

    #[error("missing required section {0}")]
    MissingSection(&'static str),

    #[error("invalid value for {field}, expected {expected}, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("option {0}: default value is required when required=true")]
    RequiredWithoutDefault(String),

    #[error("option {option}: invalid value for bool default, got {found}")]
    InvalidBoolDefault { option: String, found: String },
}

pub type CompileResult<T> = Result<T, CompileError>;
