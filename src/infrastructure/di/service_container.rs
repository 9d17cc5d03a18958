//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{ClientFactory, ProfileService};
use crate::config::Settings;
use crate::infrastructure::traits::{ClientConnector, FileSystem, RealFileSystem};
use crate::infrastructure::wordpress::WordPressConnector;

/// Container holding the process-wide collaborators.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Builds content clients
    pub connector: Arc<dyn ClientConnector>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(WordPressConnector),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        connector: Arc<dyn ClientConnector>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            connector,
        }
    }

    pub fn profile_service(&self) -> ProfileService {
        ProfileService::new(self.fs.clone(), self.settings.clone())
    }

    pub fn client_factory(&self) -> ClientFactory {
        ClientFactory::new(
            self.fs.clone(),
            self.settings.clone(),
            self.connector.clone(),
        )
    }
}
