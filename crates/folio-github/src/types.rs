use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository as returned by `GET /user/repos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub full_name: String,
}

/// Commit list item as returned by `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitEntry {
    pub sha: String,
    pub commit: CommitDetail,
    pub html_url: String,
}

/// Nested commit object on a commit list item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: Option<CommitAuthor>,
}

/// Git author of a commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub date: DateTime<Utc>,
}

/// Flattened commit for the portfolio feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSummary {
    pub repo: String,
    pub message: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub url: String,
    /// Short (7 character) commit sha
    pub sha: String,
}
