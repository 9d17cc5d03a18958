//! Application-level errors (wraps client errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::infrastructure::InfraError;

/// Application errors: configuration problems found while preparing a
/// client, and client failures raised while running an operation.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(PathBuf),

    #[error("Cannot read profile {path}: {source}")]
    ProfileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile {path}: {reason}")]
    MalformedProfile { path: PathBuf, reason: String },

    #[error("WordPress CLI path not set. Use WP_CLI_PATH or profile cli_path.")]
    ClientPathUnset,

    #[error("WordPress CLI path not found: {0}")]
    ClientNotFound(PathBuf),

    #[error("CLI dependencies are not installed ({0} missing). Run setup.sh or setup.ps1 first.")]
    DependenciesMissing(PathBuf),

    #[error("Cannot read client env file {path}: {source}")]
    ClientEnvUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Site URL not set. Use WP_SITE_URL, WP_API_URL or profile site_url/api_url.")]
    SiteUrlUnset,

    #[error("Missing WP_USERNAME or WP_APP_PASSWORD.")]
    CredentialsMissing,

    #[error("config error: {message}")]
    Config { message: String },

    #[error("{0}")]
    Client(#[from] InfraError),
}

impl ApplicationError {
    /// True for failures of a remote call, false for setup/configuration faults.
    pub fn is_operational(&self) -> bool {
        matches!(self, ApplicationError::Client(_))
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
