use anyhow::Result;
use tracing::debug;

use crate::models::{GitHubUser, PageInfo, RepoNode};

/// Default page size requested from the collaborator.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// The collaborator seam: anything that can fetch one page of a user's
/// repositories. Implemented by the GraphQL endpoint and by test doubles.
pub trait FetchUserRepos {
    fn fetch(
        &self,
        login: &str,
        first: u32,
        after: Option<&str>,
    ) -> impl Future<Output = Result<GitHubUser>>;
}

/// Proof that a search request was admitted; pairs the request with the
/// sequence number current at issuance so late responses can be told apart
/// from the newest one.
#[derive(Debug)]
pub struct SearchTicket {
    login: String,
    seq: u64,
}

#[derive(Debug)]
pub struct LoadMoreTicket {
    login: String,
    cursor: String,
    seq: u64,
}

impl LoadMoreTicket {
    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn cursor(&self) -> &str {
        &self.cursor
    }
}

/// Accumulated fetch state for one search session.
///
/// The transition methods are pure (no I/O), so request interleavings can be
/// driven explicitly: `begin_*` admits or rejects a request, `apply_*`
/// resolves it. Responses from requests that were superseded by a newer
/// search are discarded wholesale; the newest request wins.
///
/// `loading` and `loading_more` track independent request lifecycles. No
/// single request path sets both, but a search admitted while a pagination
/// request is still outstanding leaves `loading_more` set until that request
/// resolves (and its payload is discarded as stale), so both flags can be
/// observed set across overlapping requests.
#[derive(Debug, Default)]
pub struct SessionState {
    pub user: Option<GitHubUser>,
    /// Repositories accumulated across pages. Pages are appended as
    /// returned, without de-duplication by id.
    pub repos: Vec<RepoNode>,
    pub page_info: Option<PageInfo>,
    /// Login the accumulated repos belong to. `None` before the first
    /// successful search and after a failed one.
    pub login: Option<String>,
    pub loading: bool,
    pub loading_more: bool,
    pub error: Option<String>,
    seq: u64,
}

impl SessionState {
    /// True while any more pages remain to be fetched.
    pub fn has_more(&self) -> bool {
        self.page_info
            .as_ref()
            .is_some_and(|info| info.has_next_page)
    }

    /// Admit a search for `login`. Blank input is silently rejected.
    pub fn begin_search(&mut self, login: &str) -> Option<SearchTicket> {
        let login = login.trim();
        if login.is_empty() {
            return None;
        }
        self.seq += 1;
        self.loading = true;
        self.error = None;
        Some(SearchTicket {
            login: login.to_string(),
            seq: self.seq,
        })
    }

    /// Resolve a search. A success replaces the whole session; a failure
    /// resets it to empty with the error message recorded.
    pub fn apply_search(&mut self, ticket: SearchTicket, result: Result<GitHubUser>) {
        if ticket.seq != self.seq {
            debug!(login = %ticket.login, "discarding stale search response");
            return;
        }
        self.loading = false;
        match result {
            Ok(user) => {
                self.repos = user.repositories.nodes.clone();
                self.page_info = Some(user.repositories.page_info.clone());
                self.login = Some(ticket.login);
                self.user = Some(user);
                self.error = None;
            }
            Err(err) => {
                self.user = None;
                self.repos = Vec::new();
                self.page_info = None;
                self.login = None;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Admit a continuation fetch. Rejected (no-op) while another request is
    /// in flight, before any successful search, or once pages are exhausted.
    pub fn begin_load_more(&mut self) -> Option<LoadMoreTicket> {
        if self.loading || self.loading_more {
            return None;
        }
        let login = self.login.as_ref()?;
        let info = self.page_info.as_ref()?;
        if !info.has_next_page {
            return None;
        }
        let cursor = info.end_cursor.as_ref()?;
        self.loading_more = true;
        Some(LoadMoreTicket {
            login: login.clone(),
            cursor: cursor.clone(),
            seq: self.seq,
        })
    }

    /// Resolve a continuation fetch. A success appends the page and advances
    /// the cursor; a failure keeps all prior data. Either way the in-flight
    /// flag clears, though a response superseded by a newer search keeps
    /// nothing of its payload.
    pub fn apply_load_more(&mut self, ticket: LoadMoreTicket, result: Result<GitHubUser>) {
        self.loading_more = false;
        if ticket.seq != self.seq {
            debug!(login = %ticket.login, "discarding stale pagination response");
            return;
        }
        match result {
            Ok(user) => {
                self.repos.extend(user.repositories.nodes);
                self.page_info = Some(user.repositories.page_info);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }
}

/// Owns the session state and drives it against a fetch collaborator, one
/// request at a time.
pub struct RepoSession<F> {
    fetcher: F,
    page_size: u32,
    state: SessionState,
}

impl<F: FetchUserRepos> RepoSession<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_page_size(fetcher, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(fetcher: F, page_size: u32) -> Self {
        Self {
            fetcher,
            page_size,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Start a fresh session for `login`, fetching the first page. Blank
    /// input does nothing.
    pub async fn search_user(&mut self, login: &str) {
        let Some(ticket) = self.state.begin_search(login) else {
            return;
        };
        debug!(login = %ticket.login, first = self.page_size, "searching user");
        let result = self.fetcher.fetch(&ticket.login, self.page_size, None).await;
        self.state.apply_search(ticket, result);
    }

    /// Fetch the next page for the current session, appending to the
    /// accumulated repositories. Returns whether a request was issued.
    pub async fn load_more(&mut self) -> bool {
        let Some(ticket) = self.state.begin_load_more() else {
            return false;
        };
        debug!(login = %ticket.login(), cursor = %ticket.cursor(), "loading next page");
        let result = self
            .fetcher
            .fetch(ticket.login(), self.page_size, Some(ticket.cursor()))
            .await;
        self.state.apply_load_more(ticket, result);
        true
    }
}
