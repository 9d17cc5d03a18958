//! CLI-level errors (wraps domain and application errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Unknown command \"{command} {subcommand}\". Use \"help\" for usage.")]
    UnknownCommand { command: String, subcommand: String },

    #[error("cannot read content file {path}: {source}")]
    ContentFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(_) | CliError::UnknownCommand { .. } | CliError::ContentFile { .. } => {
                exitcode::USAGE
            }
            CliError::Application(e) if e.is_operational() => exitcode::FAILURE,
            CliError::Application(_) => exitcode::USAGE,
            CliError::Output(_) => exitcode::FAILURE,
        }
    }
}
