//! Domain entities: core data structures

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Named bundle of connection settings for one target site.
///
/// Loaded from `profiles/<name>.json`; immutable for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Profile name (file stem), not part of the JSON document
    #[serde(skip)]
    pub name: String,
    /// Client home directory
    pub cli_path: Option<String>,
    /// Public site URL, e.g. `https://example.com`
    pub site_url: Option<String>,
    /// REST base URL, e.g. `https://example.com/wp-json/wp/v2`
    pub api_url: Option<String>,
}

impl Profile {
    pub fn cli_path(&self) -> Option<&str> {
        non_empty(self.cli_path.as_deref())
    }

    pub fn site_url(&self) -> Option<&str> {
        non_empty(self.site_url.as_deref())
    }

    pub fn api_url(&self) -> Option<&str> {
        non_empty(self.api_url.as_deref())
    }
}

/// Treat empty strings as unset.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// WordPress `{ "rendered": ... }` text field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Remote post resource.
///
/// Fields not modelled here are kept in `extra` so JSON output matches
/// what the server returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Rendered>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Rendered>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// Rendered title, empty when the server sent none.
    pub fn title_text(&self) -> &str {
        self.title.as_ref().map(|t| t.rendered.as_str()).unwrap_or("")
    }

    pub fn status_text(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title_text().to_string(),
            status: self.status.clone(),
        }
    }
}

/// Site metadata from the REST index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gmt_offset: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_string: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query parameters for listing posts. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// Category or tag reference: numeric id, or the raw token when not numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermRef {
    Id(Number),
    Name(String),
}

/// Body for creating or updating a post. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<TermRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TermRef>>,
}

/// Response of a single delete.
///
/// Trashing returns the post itself (`status: "trash"`); forced deletes
/// return `{ "deleted": true, "previous": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeleteResponse {
    /// Status reported by the server, `"deleted"` when it reported none.
    pub fn status_or_deleted(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("deleted")
    }
}

/// Compact view of a post used by bulk delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Result of a bulk delete that only previewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DryRunReport {
    pub dry_run: bool,
    pub count: usize,
    pub posts: Vec<PostSummary>,
}

impl DryRunReport {
    pub fn new(posts: Vec<PostSummary>) -> Self {
        Self {
            dry_run: true,
            count: posts.len(),
            posts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionResult {
    pub id: u64,
    pub status: String,
}

/// Result of a bulk delete that ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    pub deleted: usize,
    pub results: Vec<DeletionResult>,
}

impl DeletionReport {
    pub fn new(results: Vec<DeletionResult>) -> Self {
        Self {
            deleted: results.len(),
            results,
        }
    }
}
