//! Shared test doubles: a recording content client and a profile/client-home fixture.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;

use wp_content::config::Settings;
use wp_content::domain::{DeleteResponse, ListParams, Post, PostData, SiteInfo};
use wp_content::infrastructure::di::ServiceContainer;
use wp_content::infrastructure::traits::{
    ClientConfig, ClientConnector, ContentClient, RealFileSystem,
};
use wp_content::infrastructure::{InfraError, InfraResult};

/// One call made against the mock client.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SiteInfo,
    List(ListParams),
    Get(String),
    Create(PostData),
    Update(String, PostData),
    Delete(String, bool),
}

/// Content client that records calls and serves canned posts.
#[derive(Default)]
pub struct MockClient {
    pub posts: Vec<Post>,
    pub site: SiteInfo,
    /// Post id whose delete fails
    pub fail_delete_on: Option<u64>,
    /// Fail every read call
    pub fail_reads: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockClient {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            site: site(),
            ..Self::default()
        }
    }

    /// Every read call answers with a server error.
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Deleting post `id` is rejected by the server.
    pub fn failing_delete_on(mut self, id: u64) -> Self {
        self.fail_delete_on = Some(id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Delete(id, _) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn read_failure(&self) -> InfraResult<()> {
        if self.fail_reads {
            return Err(InfraError::api(
                500,
                r#"{"code":"internal","message":"Server exploded."}"#,
            ));
        }
        Ok(())
    }

    fn find(&self, id: &str) -> InfraResult<Post> {
        self.posts
            .iter()
            .find(|p| p.id.to_string() == id)
            .cloned()
            .ok_or_else(|| {
                InfraError::api(
                    404,
                    r#"{"code":"rest_post_invalid_id","message":"Invalid post ID."}"#,
                )
            })
    }
}

#[async_trait]
impl ContentClient for MockClient {
    async fn get_site_info(&self) -> InfraResult<SiteInfo> {
        self.record(Call::SiteInfo);
        self.read_failure()?;
        Ok(self.site.clone())
    }

    async fn list_posts(&self, params: &ListParams) -> InfraResult<Vec<Post>> {
        self.record(Call::List(params.clone()));
        self.read_failure()?;
        Ok(self.posts.clone())
    }

    async fn get_post(&self, id: &str) -> InfraResult<Post> {
        self.record(Call::Get(id.to_string()));
        self.read_failure()?;
        self.find(id)
    }

    async fn create_post(&self, data: &PostData) -> InfraResult<Post> {
        self.record(Call::Create(data.clone()));
        Ok(post(100, data.title.as_deref().unwrap_or(""), data.status.as_deref().unwrap_or("")))
    }

    async fn update_post(&self, id: &str, data: &PostData) -> InfraResult<Post> {
        self.record(Call::Update(id.to_string(), data.clone()));
        self.find(id)
    }

    async fn delete_post(&self, id: &str, force: bool) -> InfraResult<DeleteResponse> {
        self.record(Call::Delete(id.to_string(), force));
        if self.fail_delete_on.map(|f| f.to_string()) == Some(id.to_string()) {
            return Err(InfraError::api(
                403,
                r#"{"code":"rest_cannot_delete","message":"Sorry, you are not allowed to delete this post."}"#,
            ));
        }
        let body = if force {
            json!({"deleted": true, "previous": {"id": id}})
        } else {
            json!({"id": id, "status": "trash"})
        };
        Ok(serde_json::from_value(body)?)
    }
}

/// Connector handing out one shared mock client and recording configs.
pub struct MockConnector {
    pub client: Arc<MockClient>,
    pub connected: Mutex<Vec<ClientConfig>>,
}

impl MockConnector {
    pub fn new(client: MockClient) -> Self {
        Self {
            client: Arc::new(client),
            connected: Mutex::new(Vec::new()),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connected.lock().unwrap().len()
    }
}

impl ClientConnector for MockConnector {
    fn connect(&self, config: ClientConfig) -> InfraResult<Arc<dyn ContentClient>> {
        self.connected.lock().unwrap().push(config);
        Ok(self.client.clone())
    }
}

pub fn post(id: u64, title: &str, status: &str) -> Post {
    serde_json::from_value(json!({
        "id": id,
        "date": "2024-05-01T10:00:00",
        "status": status,
        "link": format!("https://blog.test/?p={id}"),
        "title": {"rendered": title},
        "categories": [1],
        "tags": []
    }))
    .unwrap()
}

pub fn site() -> SiteInfo {
    serde_json::from_value(json!({
        "name": "Test Blog",
        "description": "Just another site",
        "url": "https://blog.test",
        "home": "https://blog.test",
        "gmt_offset": 0,
        "timezone_string": "UTC",
        "namespaces": ["wp/v2"]
    }))
    .unwrap()
}

/// Temp dir with `profiles/` and a set-up client home.
pub struct Fixture {
    pub temp: TempDir,
}

impl Fixture {
    /// Profiles dir plus a `blog-a` profile whose client home has credentials.
    pub fn new() -> Self {
        let fixture = Self::empty();
        std::fs::create_dir_all(fixture.cli_home()).unwrap();
        std::fs::write(
            fixture.cli_home().join(".env"),
            "WP_USERNAME=editor\nWP_APP_PASSWORD=\"abcd efgh ijkl\"\n",
        )
        .unwrap();
        fixture.write_profile(
            "blog-a",
            &json!({
                "cli_path": fixture.cli_home(),
                "site_url": "https://blog.test"
            })
            .to_string(),
        );
        fixture
    }

    /// Only an empty profiles dir.
    pub fn empty() -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("profiles")).unwrap();
        Self { temp }
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.temp.path().join("profiles")
    }

    pub fn cli_home(&self) -> PathBuf {
        self.temp.path().join("wp-cli")
    }

    pub fn write_profile(&self, name: &str, content: &str) {
        std::fs::write(self.profiles_dir().join(format!("{name}.json")), content).unwrap();
    }

    pub fn settings(&self) -> Settings {
        Settings {
            profile: Some("blog-a".into()),
            profiles_dir: self.profiles_dir(),
            ..Settings::default()
        }
    }

    pub fn container(&self, connector: Arc<MockConnector>) -> ServiceContainer {
        self.container_with(self.settings(), connector)
    }

    pub fn container_with(
        &self,
        settings: Settings,
        connector: Arc<MockConnector>,
    ) -> ServiceContainer {
        ServiceContainer::with_deps(settings, Arc::new(RealFileSystem), connector)
    }
}

pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}
