use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("GitHub API error: {0}")]
    ApiError(String),
}

pub type GithubResult<T> = Result<T, GithubError>;
