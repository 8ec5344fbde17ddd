use serde::{Deserialize, Serialize};

use super::RepositoryConnection;

/// A GitHub user together with one page of their public repositories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub url: String,
    pub repositories: RepositoryConnection,
}

impl GitHubUser {
    /// Public display name, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// Full GraphQL response envelope for the user-repos query.
#[derive(Debug, Deserialize)]
pub struct UserReposResponse {
    pub data: Option<UserReposData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct UserReposData {
    pub user: Option<GitHubUser>,
}

/// One error object from the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}
