//! Client construction from a profile
//!
//! Resolves the client home, checks it is set up, and turns settings,
//! profile and the client's `.env` file into an explicit [`ClientConfig`].

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::{expand_path, Settings};
use crate::domain::{non_empty, ClientEnvFile, Profile};
use crate::infrastructure::traits::{ClientConfig, ClientConnector, ContentClient, FileSystem};

/// Environment file written into the client home by the setup scripts.
pub const CLIENT_ENV_FILE: &str = ".env";

pub struct ClientFactory {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
    connector: Arc<dyn ClientConnector>,
}

impl ClientFactory {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        settings: Arc<Settings>,
        connector: Arc<dyn ClientConnector>,
    ) -> Self {
        Self {
            fs,
            settings,
            connector,
        }
    }

    /// Client home: `WP_CLI_PATH` > profile `cli_path`.
    pub fn resolve_cli_path(&self, profile: &Profile) -> ApplicationResult<PathBuf> {
        non_empty(self.settings.cli_path.as_deref())
            .or(profile.cli_path())
            .map(expand_path)
            .ok_or(ApplicationError::ClientPathUnset)
    }

    /// Verify the client home and read its environment file.
    pub fn load_client_env(&self, cli_path: PathBuf) -> ApplicationResult<ClientEnvFile> {
        if !self.fs.is_dir(&cli_path) {
            return Err(ApplicationError::ClientNotFound(cli_path));
        }
        let env_path = cli_path.join(CLIENT_ENV_FILE);
        if !self.fs.is_file(&env_path) {
            return Err(ApplicationError::DependenciesMissing(env_path));
        }
        let content = self
            .fs
            .read_to_string(&env_path)
            .map_err(|source| ApplicationError::ClientEnvUnreadable {
                path: env_path.clone(),
                source,
            })?;
        Ok(ClientEnvFile::parse(&content, env_path))
    }

    /// Build the connection settings for `profile`.
    ///
    /// URLs: environment > profile > client `.env`. Credentials:
    /// environment > client `.env`.
    pub fn client_config(&self, profile: &Profile) -> ApplicationResult<ClientConfig> {
        let cli_path = self.resolve_cli_path(profile)?;
        debug!("client home: {}", cli_path.display());
        let env_file = self.load_client_env(cli_path)?;

        let settings = &self.settings;
        let site_url = non_empty(settings.site_url.as_deref())
            .or(profile.site_url())
            .or(env_file.get("WP_SITE_URL"))
            .map(String::from);
        let api_url = non_empty(settings.api_url.as_deref())
            .or(profile.api_url())
            .or(env_file.get("WP_API_URL"))
            .map(String::from)
            .or_else(|| site_url.as_deref().map(ClientConfig::api_url_for_site))
            .ok_or(ApplicationError::SiteUrlUnset)?;

        let username = non_empty(settings.username.as_deref()).or(env_file.get("WP_USERNAME"));
        let app_password =
            non_empty(settings.app_password.as_deref()).or(env_file.get("WP_APP_PASSWORD"));
        let (username, app_password) = match (username, app_password) {
            (Some(u), Some(p)) => (u.to_string(), p.to_string()),
            _ => return Err(ApplicationError::CredentialsMissing),
        };

        Ok(ClientConfig {
            site_url,
            api_url,
            username,
            app_password,
            timeout: ClientConfig::DEFAULT_TIMEOUT,
        })
    }

    /// Build a client handle for `profile`.
    pub fn connect(&self, profile: &Profile) -> ApplicationResult<Arc<dyn ContentClient>> {
        let config = self.client_config(profile)?;
        info!("connecting to {} as {}", config.api_url, config.username);
        Ok(self.connector.connect(config)?)
    }
}
