use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;
use crate::{contact_handlers, content_handlers, github_handlers, health};

/// Build the API router
///
/// The server binary layers static file serving and tracing on top.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/github/commits", get(github_handlers::list_commits))
        .route("/api/github/activity", get(github_handlers::activity))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .route(
            "/api/meetings",
            get(contact_handlers::list_meetings).post(contact_handlers::schedule_meeting),
        )
        .route("/api/blog", get(content_handlers::list_blog_posts))
        .route("/api/blog/{slug}", get(content_handlers::get_blog_post))
        .route("/api/knowledge", get(content_handlers::list_knowledge))
        .route(
            "/api/knowledge/{id}",
            get(content_handlers::get_knowledge_entry),
        )
        .route("/api/social", get(content_handlers::list_social_profiles))
}
