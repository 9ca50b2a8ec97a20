pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::GithubClient;
pub use error::{GithubError, GithubResult};
pub use types::CommitSummary;
