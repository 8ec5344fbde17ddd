use serde::{Deserialize, Serialize};

/// Primary programming language of a repository, as reported by GitHub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub color: String,
}

/// A single repository node from the GraphQL repository connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoNode {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    /// Last update time, ISO 8601. Kept as an opaque string.
    pub updated_at: String,
    pub stargazer_count: u64,
    pub primary_language: Option<Language>,
}

impl RepoNode {
    /// Name of the primary language, if any.
    pub fn language_name(&self) -> Option<&str> {
        self.primary_language.as_ref().map(|l| l.name.as_str())
    }
}

/// Cursor-based pagination info for a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// The user's repository connection: total count plus one page of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    pub total_count: u64,
    pub page_info: PageInfo,
    pub nodes: Vec<RepoNode>,
}
