use axum::{Json, extract::State};
use chrono::{DateTime, NaiveDate, Utc};
use folio_core::activity::{daily_activity, intensity};
use folio_github::CommitSummary;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// One day of the activity heat-map
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityDayResponse {
    pub date: NaiveDate,
    pub count: u32,
    pub intensity: u8,
}

/// Activity histogram response
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub days: Vec<ActivityDayResponse>,
    pub max_count: u32,
}

/// GET /api/github/commits
/// Recent commits across the most recently pushed repositories
pub async fn list_commits(State(state): State<AppState>) -> ApiResult<Json<Vec<CommitSummary>>> {
    let commits = fetch_feed(&state).await?;
    Ok(Json(commits))
}

/// GET /api/github/activity
/// Daily commit histogram over the trailing year, with heat-map intensities
pub async fn activity(State(state): State<AppState>) -> ApiResult<Json<ActivityResponse>> {
    let commits = fetch_feed(&state).await?;

    let timestamps: Vec<DateTime<Utc>> = commits.iter().map(|commit| commit.date).collect();
    let days = daily_activity(&timestamps, Utc::now().date_naive());
    let max_count = days.iter().map(|day| day.count).max().unwrap_or(0);

    let days = days
        .into_iter()
        .map(|day| ActivityDayResponse {
            date: day.date,
            count: day.count,
            intensity: intensity(day.count, max_count),
        })
        .collect();

    Ok(Json(ActivityResponse { days, max_count }))
}

async fn fetch_feed(state: &AppState) -> ApiResult<Vec<CommitSummary>> {
    state
        .github_client
        .recent_commits(
            state.github_feed.max_repos,
            state.github_feed.commits_per_repo,
        )
        .await
        .map_err(|e| {
            error!("Failed to fetch GitHub commit feed: {}", e);
            ApiError::Github(e)
        })
}
