//! WordPress REST API client over `reqwest`

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::domain::{DeleteResponse, ListParams, Post, PostData, SiteInfo};
use crate::infrastructure::traits::{ClientConfig, ClientConnector, ContentClient};
use crate::infrastructure::{InfraError, InfraResult};

/// Content client for the WordPress REST API (v2), authenticated with an
/// application password over HTTP basic auth.
pub struct WordPressClient {
    http: Client,
    config: ClientConfig,
}

impl WordPressClient {
    pub fn new(config: ClientConfig) -> InfraResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("wp-content/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> InfraResult<T> {
        let response = request
            .basic_auth(&self.config.username, Some(&self.config.app_password))
            .send()
            .await?;

        let status = response.status();
        debug!("response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InfraError::api(status.as_u16(), &body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ContentClient for WordPressClient {
    #[instrument(skip(self))]
    async fn get_site_info(&self) -> InfraResult<SiteInfo> {
        self.send(self.http.get(self.config.index_url())).await
    }

    #[instrument(skip(self))]
    async fn list_posts(&self, params: &ListParams) -> InfraResult<Vec<Post>> {
        self.send(self.http.get(self.config.posts_url()).query(params))
            .await
    }

    #[instrument(skip(self))]
    async fn get_post(&self, id: &str) -> InfraResult<Post> {
        self.send(self.http.get(self.config.post_url(id))).await
    }

    #[instrument(skip(self, data))]
    async fn create_post(&self, data: &PostData) -> InfraResult<Post> {
        self.send(self.http.post(self.config.posts_url()).json(data))
            .await
    }

    #[instrument(skip(self, data))]
    async fn update_post(&self, id: &str, data: &PostData) -> InfraResult<Post> {
        self.send(self.http.post(self.config.post_url(id)).json(data))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, id: &str, force: bool) -> InfraResult<DeleteResponse> {
        let mut request = self.http.delete(self.config.post_url(id));
        if force {
            request = request.query(&[("force", "true")]);
        }
        self.send(request).await
    }
}

/// Connector producing [`WordPressClient`] handles.
#[derive(Debug, Default)]
pub struct WordPressConnector;

impl ClientConnector for WordPressConnector {
    fn connect(&self, config: ClientConfig) -> InfraResult<Arc<dyn ContentClient>> {
        debug!("connect: {:?}", config);
        Ok(Arc::new(WordPressClient::new(config)?))
    }
}
