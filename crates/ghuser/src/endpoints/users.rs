use anyhow::{Result, anyhow, bail};
use reqwest::header;
use tracing::debug;

use super::setup::{github_graphql_url, github_token, httpclient};
use crate::models::{GitHubUser, GraphqlError, UserReposResponse};
use crate::session::FetchUserRepos;

/// Fetch a user's public, owner-affiliated repos, newest-updated first.
const USER_REPOS_QUERY: &str = r#"
query GetUserRepos($login: String!, $first: Int!, $after: String) {
  user(login: $login) {
    login
    name
    avatarUrl
    url
    repositories(
      first: $first
      after: $after
      orderBy: { field: UPDATED_AT, direction: DESC }
      ownerAffiliations: OWNER
      privacy: PUBLIC
    ) {
      totalCount
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        id
        name
        url
        description
        updatedAt
        stargazerCount
        primaryLanguage {
          name
          color
        }
      }
    }
  }
}
"#;

/// One user-facing message for a non-empty GraphQL error list.
fn graphql_error_message(errors: &[GraphqlError]) -> String {
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .filter(|m| !m.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    if message.is_empty() {
        "GraphQL error".to_string()
    } else {
        message
    }
}

/// Fetch one page of a user's public repositories from the GitHub GraphQL API.
///
/// `after` is the opaque continuation cursor from the previous page, or
/// `None` for the first page. A missing token fails before any network I/O.
pub async fn fetch_user_repos(
    login: &str,
    first: u32,
    after: Option<&str>,
) -> Result<GitHubUser> {
    let token = github_token()
        .ok_or_else(|| anyhow!("GitHub token missing. Set GITHUB_TOKEN in your environment."))?;

    let body = serde_json::json!({
        "query": USER_REPOS_QUERY,
        "variables": { "login": login, "first": first, "after": after },
    });

    let response = httpclient()
        .post(github_graphql_url())
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    debug!(%login, ?after, %status, "user repos page fetched");
    if !status.is_success() {
        bail!(
            "Network error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        );
    }

    let parsed: UserReposResponse = response.json().await?;

    if !parsed.errors.is_empty() {
        bail!("{}", graphql_error_message(&parsed.errors));
    }

    parsed
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| anyhow!("User not found"))
}

/// The real collaborator behind the session's fetch seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct GithubFetcher;

impl FetchUserRepos for GithubFetcher {
    async fn fetch(&self, login: &str, first: u32, after: Option<&str>) -> Result<GitHubUser> {
        fetch_user_repos(login, first, after).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(message: &str) -> GraphqlError {
        GraphqlError {
            message: message.to_string(),
        }
    }

    #[test]
    fn joins_error_messages_with_semicolons() {
        let errors = vec![err("first"), err("second")];
        assert_eq!(graphql_error_message(&errors), "first; second");
    }

    #[test]
    fn empty_messages_fall_back_to_generic() {
        assert_eq!(graphql_error_message(&[err(""), err("")]), "GraphQL error");
    }

    #[test]
    fn single_message_passes_through() {
        assert_eq!(
            graphql_error_message(&[err("User not found")]),
            "User not found"
        );
    }
}
