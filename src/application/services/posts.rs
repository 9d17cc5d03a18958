//! Post operations against a content client

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::ApplicationResult;
use crate::domain::{
    DeleteResponse, DeletionReport, DeletionResult, DryRunReport, ListParams, Post, PostData,
    SiteInfo,
};
use crate::infrastructure::traits::ContentClient;

/// Outcome of a bulk delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkDeleteOutcome {
    /// Matching posts were only listed
    DryRun(DryRunReport),
    /// Matching posts were deleted
    Deleted(DeletionReport),
}

/// Service for site and post operations.
pub struct PostService {
    client: Arc<dyn ContentClient>,
}

impl PostService {
    pub fn new(client: Arc<dyn ContentClient>) -> Self {
        Self { client }
    }

    pub async fn site_info(&self) -> ApplicationResult<SiteInfo> {
        Ok(self.client.get_site_info().await?)
    }

    pub async fn list(&self, params: &ListParams) -> ApplicationResult<Vec<Post>> {
        debug!("list: {:?}", params);
        Ok(self.client.list_posts(params).await?)
    }

    pub async fn get(&self, id: &str) -> ApplicationResult<Post> {
        Ok(self.client.get_post(id).await?)
    }

    pub async fn create(&self, data: &PostData) -> ApplicationResult<Post> {
        Ok(self.client.create_post(data).await?)
    }

    pub async fn update(&self, id: &str, data: &PostData) -> ApplicationResult<Post> {
        Ok(self.client.update_post(id, data).await?)
    }

    pub async fn delete(&self, id: &str, force: bool) -> ApplicationResult<DeleteResponse> {
        Ok(self.client.delete_post(id, force).await?)
    }

    /// Delete every post matching `params`, or only list them when `dry_run`.
    ///
    /// Deletes run one at a time in listing order. The first failure aborts
    /// the remaining batch; earlier deletions stay applied.
    pub async fn delete_many(
        &self,
        params: &ListParams,
        dry_run: bool,
        force: bool,
    ) -> ApplicationResult<BulkDeleteOutcome> {
        let posts = self.list(params).await?;
        let summary = posts.iter().map(Post::summary).collect::<Vec<_>>();

        if dry_run {
            info!("dry run: {} posts match", summary.len());
            return Ok(BulkDeleteOutcome::DryRun(DryRunReport::new(summary)));
        }

        let mut results = Vec::with_capacity(posts.len());
        for post in &posts {
            let id = post.id.to_string();
            let response = self.client.delete_post(&id, force).await.map_err(|e| {
                warn!(
                    "delete of post {} failed after {} deletions: {}",
                    id,
                    results.len(),
                    e
                );
                e
            })?;
            debug!("deleted post {}", id);
            results.push(DeletionResult {
                id: post.id,
                status: response.status_or_deleted().to_string(),
            });
        }

        Ok(BulkDeleteOutcome::Deleted(DeletionReport::new(results)))
    }
}
