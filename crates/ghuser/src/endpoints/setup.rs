use std::sync::OnceLock;

use reqwest::Client as ReqwestClient;

const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

static GITHUB_TOKEN: OnceLock<Option<String>> = OnceLock::new();

/// The bearer token from `GITHUB_TOKEN`, read once. `None` if unset or empty;
/// callers must treat that as a fetch precondition failure.
pub fn github_token() -> Option<&'static str> {
    GITHUB_TOKEN
        .get_or_init(|| std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()))
        .as_deref()
}

static GITHUB_GRAPHQL_URL: OnceLock<String> = OnceLock::new();

/// GraphQL endpoint, overridable via `GITHUB_GRAPHQL_URL`.
pub fn github_graphql_url() -> &'static str {
    GITHUB_GRAPHQL_URL.get_or_init(|| {
        std::env::var("GITHUB_GRAPHQL_URL").unwrap_or_else(|_| DEFAULT_GRAPHQL_URL.to_string())
    })
}

static HTTPCLIENT: OnceLock<ReqwestClient> = OnceLock::new();

/// Shared HTTP client. GitHub rejects requests without a User-Agent.
pub fn httpclient() -> &'static ReqwestClient {
    HTTPCLIENT.get_or_init(|| {
        ReqwestClient::builder()
            .user_agent(concat!("ghuser/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default()
    })
}
