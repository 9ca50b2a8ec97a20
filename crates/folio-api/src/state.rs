use folio_core::FixedWindowLimiter;
use folio_github::GithubClient;
use folio_groupware::GroupwareClient;
use sqlx::{Any, Pool};
use std::sync::Arc;

/// How much of the commit feed is fetched from GitHub
#[derive(Debug, Clone, Copy)]
pub struct GithubFeedSettings {
    /// Most recently pushed repositories to inspect
    pub max_repos: u32,
    /// Commits fetched per repository
    pub commits_per_repo: u32,
}

impl Default for GithubFeedSettings {
    fn default() -> Self {
        Self {
            max_repos: 5,
            commits_per_repo: 5,
        }
    }
}

/// Application state for Axum dependency injection
///
/// This is the DI root that contains all shared resources needed by handlers:
/// - Database connection pool
/// - GitHub API client for the commit feed
/// - Groupware client for outbound mail and invites
/// - Contact-endpoint rate limiter
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: Pool<Any>,

    /// GitHub API client
    pub github_client: Arc<GithubClient>,

    /// Groupware dispatch (Graph in production, noop/mock otherwise)
    pub groupware: Arc<dyn GroupwareClient>,

    /// Contact-endpoint rate limiter
    pub rate_limiter: Arc<FixedWindowLimiter>,

    /// Commit feed fetch settings
    pub github_feed: GithubFeedSettings,
}

impl AppState {
    /// Create new application state
    ///
    /// The limiter is shared with the background sweep task, so it arrives
    /// already wrapped.
    pub fn new(
        db_pool: Pool<Any>,
        github_client: GithubClient,
        groupware: Arc<dyn GroupwareClient>,
        rate_limiter: Arc<FixedWindowLimiter>,
        github_feed: GithubFeedSettings,
    ) -> Self {
        Self {
            db_pool,
            github_client: Arc::new(github_client),
            groupware,
            rate_limiter,
            github_feed,
        }
    }
}
