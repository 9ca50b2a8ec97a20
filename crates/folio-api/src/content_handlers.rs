use axum::{
    Json,
    extract::{Path, State},
};
use folio_db::models::{BlogPost, KbEntry, SocialProfile};
use folio_db::{blog, knowledge, social};
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/blog
/// Published posts, newest first
pub async fn list_blog_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<BlogPost>>> {
    let posts = blog::list_posts(&state.db_pool).await.map_err(|e| {
        error!("Failed to list blog posts: {}", e);
        ApiError::Database(e)
    })?;

    Ok(Json(posts))
}

/// GET /api/blog/{slug}
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<BlogPost>> {
    let post = blog::get_post_by_slug(&state.db_pool, &slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("blog post '{}' not found", slug)))?;

    Ok(Json(post))
}

/// GET /api/knowledge
/// All knowledge base entries; the client rebuilds the folder tree
pub async fn list_knowledge(State(state): State<AppState>) -> ApiResult<Json<Vec<KbEntry>>> {
    let entries = knowledge::list_entries(&state.db_pool).await.map_err(|e| {
        error!("Failed to list knowledge base entries: {}", e);
        ApiError::Database(e)
    })?;

    Ok(Json(entries))
}

/// GET /api/knowledge/{id}
pub async fn get_knowledge_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<KbEntry>> {
    let entry = knowledge::get_entry(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("knowledge base entry {} not found", id)))?;

    Ok(Json(entry))
}

/// GET /api/social
/// Active social profiles
pub async fn list_social_profiles(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SocialProfile>>> {
    let profiles = social::list_active_profiles(&state.db_pool)
        .await
        .map_err(|e| {
            error!("Failed to list social profiles: {}", e);
            ApiError::Database(e)
        })?;

    Ok(Json(profiles))
}
