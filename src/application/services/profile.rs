//! Profile resolution
//!
//! Profiles live in `<profiles_dir>/<name>.json`.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::Profile;
use crate::infrastructure::traits::FileSystem;

/// Profile used when neither `--profile` nor `WP_PROFILE` is given.
pub const DEFAULT_PROFILE: &str = "example-blog";

/// Loads named profiles from disk.
pub struct ProfileService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl ProfileService {
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Pick the profile name: explicit flag > `WP_PROFILE` > default.
    pub fn resolve_name<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.filter(|n| !n.is_empty())
            .or(self.settings.profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
    }

    /// Path of the profile file for `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.settings.profiles_dir.join(format!("{}.json", name))
    }

    /// Load and parse the named profile.
    pub fn load(&self, name: &str) -> ApplicationResult<Profile> {
        let path = self.path_for(name);
        debug!("load profile: {}", path.display());

        if !self.fs.is_file(&path) {
            return Err(ApplicationError::ProfileNotFound(path));
        }
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|source| ApplicationError::ProfileUnreadable {
                path: path.clone(),
                source,
            })?;

        let mut profile: Profile =
            serde_json::from_str(&content).map_err(|e| ApplicationError::MalformedProfile {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        profile.name = name.to_string();
        Ok(profile)
    }
}
