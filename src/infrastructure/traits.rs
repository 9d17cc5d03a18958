//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{DeleteResponse, ListParams, Post, PostData, SiteInfo};
use crate::infrastructure::InfraResult;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Remote content platform API.
///
/// Calls are awaited one at a time by the dispatcher; implementations need
/// no internal coordination.
#[async_trait]
pub trait ContentClient: Send + Sync {
    async fn get_site_info(&self) -> InfraResult<SiteInfo>;

    async fn list_posts(&self, params: &ListParams) -> InfraResult<Vec<Post>>;

    async fn get_post(&self, id: &str) -> InfraResult<Post>;

    async fn create_post(&self, data: &PostData) -> InfraResult<Post>;

    async fn update_post(&self, id: &str, data: &PostData) -> InfraResult<Post>;

    /// Trash a post, or delete it permanently when `force` is set.
    async fn delete_post(&self, id: &str, force: bool) -> InfraResult<DeleteResponse>;
}

/// Builds a client handle from resolved connection settings.
pub trait ClientConnector: Send + Sync {
    fn connect(&self, config: ClientConfig) -> InfraResult<Arc<dyn ContentClient>>;
}

/// Resolved connection settings for one site.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Public site URL, if known
    pub site_url: Option<String>,
    /// REST base, e.g. `https://example.com/wp-json/wp/v2`
    pub api_url: String,
    pub username: String,
    /// Application password (never logged)
    pub app_password: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    const API_SUFFIX: &'static str = "/wp/v2";

    /// Derive the REST base from a site URL.
    pub fn api_url_for_site(site_url: &str) -> String {
        format!("{}/wp-json/wp/v2", site_url.trim_end_matches('/'))
    }

    /// `<api>/posts`
    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.api_url.trim_end_matches('/'))
    }

    /// `<api>/posts/<id>`
    pub fn post_url(&self, id: &str) -> String {
        format!("{}/{}", self.posts_url(), id)
    }

    /// REST index holding site metadata.
    ///
    /// `<site>/wp-json/` when the site URL is known, else the API base with
    /// its `/wp/v2` namespace stripped.
    pub fn index_url(&self) -> String {
        if let Some(site) = self.site_url.as_deref().filter(|s| !s.is_empty()) {
            return format!("{}/wp-json/", site.trim_end_matches('/'));
        }
        let api = self.api_url.trim_end_matches('/');
        match api.strip_suffix(Self::API_SUFFIX) {
            Some(root) => format!("{}/", root),
            None => format!("{}/", api),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("site_url", &self.site_url)
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field("app_password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
