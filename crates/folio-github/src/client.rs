use crate::error::{GithubError, GithubResult};
use crate::types::{CommitEntry, CommitSummary, RepoSummary};
use octocrab::Octocrab;
use serde::Serialize;
use tracing::warn;

/// GitHub API client for the portfolio commit feed
///
/// Uses raw REST routes with our own payload types rather than octocrab's
/// models; the feed needs only a handful of fields.
pub struct GithubClient {
    client: Octocrab,
}

#[derive(Debug, Serialize)]
struct ListReposParams {
    sort: &'static str,
    per_page: u32,
}

#[derive(Debug, Serialize)]
struct ListCommitsParams {
    per_page: u32,
}

impl GithubClient {
    /// Create a new client with a personal access token
    pub fn new(token: String) -> GithubResult<Self> {
        let client = Octocrab::builder()
            .personal_token(token)
            .build()
            .map_err(|e| {
                GithubError::ApiError(format!("Failed to create octocrab client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Create a client against a custom API base (for testing)
    pub fn with_base_uri(token: String, base_uri: &str) -> GithubResult<Self> {
        let client = Octocrab::builder()
            .base_uri(base_uri)
            .map_err(|e| GithubError::ApiError(format!("Invalid GitHub base uri: {}", e)))?
            .personal_token(token)
            .build()
            .map_err(|e| {
                GithubError::ApiError(format!("Failed to create octocrab client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// The authenticated user's most recently pushed repositories
    async fn list_recent_repos(&self, limit: u32) -> GithubResult<Vec<RepoSummary>> {
        self.client
            .get(
                "/user/repos",
                Some(&ListReposParams {
                    sort: "pushed",
                    per_page: limit,
                }),
            )
            .await
            .map_err(|e| GithubError::ApiError(format!("Failed to list repositories: {}", e)))
    }

    /// Latest commits of one repository
    async fn list_commits(&self, full_name: &str, limit: u32) -> GithubResult<Vec<CommitEntry>> {
        self.client
            .get(
                format!("/repos/{}/commits", full_name),
                Some(&ListCommitsParams { per_page: limit }),
            )
            .await
            .map_err(|e| {
                GithubError::ApiError(format!("Failed to list commits for {}: {}", full_name, e))
            })
    }

    /// Recent commits across the most recently pushed repositories,
    /// flattened and sorted newest first
    ///
    /// A repository whose commit listing fails (empty repo, transient API
    /// error) is skipped rather than failing the whole feed.
    pub async fn recent_commits(
        &self,
        max_repos: u32,
        commits_per_repo: u32,
    ) -> GithubResult<Vec<CommitSummary>> {
        let repos = self.list_recent_repos(max_repos).await?;

        let mut commits = Vec::new();
        for repo in repos {
            let entries = match self.list_commits(&repo.full_name, commits_per_repo).await {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Skipping commit feed for {}: {}", repo.full_name, e);
                    continue;
                }
            };

            for entry in entries {
                // Commits without a git author carry no usable timestamp
                let Some(author) = entry.commit.author else {
                    continue;
                };

                commits.push(CommitSummary {
                    repo: repo.name.clone(),
                    message: entry.commit.message,
                    author: author.name,
                    date: author.date,
                    url: entry.html_url,
                    sha: entry.sha.chars().take(7).collect(),
                });
            }
        }

        commits.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(commits)
    }
}
