//! Configuration from `WP_*` environment variables
//!
//! Variables (empty values count as unset):
//! - `WP_PROFILE`: profile name when `--profile` is not given
//! - `WP_CLI_PATH`: client home, overrides the profile's `cli_path`
//! - `WP_SITE_URL`, `WP_API_URL`: override the profile's URLs
//! - `WP_USERNAME`, `WP_APP_PASSWORD`: credentials
//! - `WP_PROFILES_DIR`: directory holding `<name>.json` profiles

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use tracing::debug;

use crate::application::ApplicationError;

/// Settings read once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub profile: Option<String>,
    pub cli_path: Option<String>,
    pub site_url: Option<String>,
    pub api_url: Option<String>,
    pub username: Option<String>,
    pub app_password: Option<String>,
    /// Directory searched for `<name>.json` profiles
    pub profiles_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: None,
            cli_path: None,
            site_url: None,
            api_url: None,
            username: None,
            app_password: None,
            profiles_dir: default_profiles_dir(),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("profile", &self.profile)
            .field("cli_path", &self.cli_path)
            .field("site_url", &self.site_url)
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field("app_password", &self.app_password.as_ref().map(|_| "<redacted>"))
            .field("profiles_dir", &self.profiles_dir)
            .finish()
    }
}

/// Program installation directory: parent of the directory holding the executable.
pub fn install_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent()?.parent().map(Path::to_path_buf)
}

/// Per-user config directory for wp-content.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wp-content").map(|dirs| dirs.config_dir().to_path_buf())
}

/// `<install_dir>/profiles` when it exists, else `<config_dir>/profiles`.
fn default_profiles_dir() -> PathBuf {
    let installed = install_dir().map(|dir| dir.join("profiles"));
    if let Some(dir) = installed.as_ref().filter(|d| d.is_dir()) {
        return dir.clone();
    }
    global_config_dir()
        .map(|dir| dir.join("profiles"))
        .or(installed)
        .unwrap_or_else(|| PathBuf::from("profiles"))
}

/// Expand `~` and `$VAR` in a path-like value.
pub fn expand_path(value: &str) -> PathBuf {
    let expanded = shellexpand::full(value)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| value.to_string());
    PathBuf::from(expanded)
}

impl Settings {
    /// Load settings from the process environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::from_source(None)
    }

    /// Load settings from `source` instead of the process environment when given.
    ///
    /// Keys are full variable names, e.g. `WP_PROFILE`.
    pub fn from_source(source: Option<Map<String, String>>) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("WP")
                    .prefix_separator("_")
                    .ignore_empty(true)
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        let get = |key: &str| config.get_string(key).ok().filter(|v| !v.is_empty());

        let mut settings = Self {
            profile: get("profile"),
            cli_path: get("cli_path"),
            site_url: get("site_url"),
            api_url: get("api_url"),
            username: get("username"),
            app_password: get("app_password"),
            ..Self::default()
        };
        if let Some(dir) = get("profiles_dir") {
            settings.profiles_dir = expand_path(&dir);
        }

        debug!("settings: {:?}", settings);
        Ok(settings)
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
