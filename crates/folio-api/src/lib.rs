pub mod contact_handlers;
pub mod content_handlers;
pub mod error;
pub mod github_handlers;
pub mod health;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use health::{health, init_server_start_time};
pub use routes::api_router;
pub use state::{AppState, GithubFeedSettings};
