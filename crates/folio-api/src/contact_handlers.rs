use axum::{
    Json,
    extract::{ConnectInfo, Query, State},
};
use chrono::{DateTime, Duration, Utc};
use folio_core::{RateDecision, is_valid_email};
use folio_db::models::{ContactSubmission, Meeting};
use folio_db::{contact, meetings};
use folio_groupware::{ContactNotification, MeetingInvite};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tracing::{error, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Contact form payload
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_preferred_contact")]
    pub preferred_contact: String,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_preferred_contact() -> String {
    "email".to_string()
}

/// Meeting scheduling payload
#[derive(Debug, Deserialize)]
pub struct ScheduleMeetingRequest {
    pub contact_submission_id: i64,
    pub scheduled_for: DateTime<Utc>,
    #[serde(default = "default_meeting_type")]
    pub meeting_type: String,
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
}

fn default_meeting_type() -> String {
    "intro_call".to_string()
}

fn default_duration_minutes() -> u32 {
    30
}

/// Meetings list filter
#[derive(Debug, Deserialize)]
pub struct MeetingsQuery {
    pub submission: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: i64,
    pub status: String,
}

/// POST /api/contact
/// Rate-limited by client address; the stored row is the durable record and
/// the notification mail is best-effort.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<ContactRequest>,
) -> ApiResult<Json<ContactResponse>> {
    if let RateDecision::Limited { retry_after } = state.rate_limiter.check(addr.ip()) {
        info!("Rate limited contact submission from {}", addr.ip());
        return Err(ApiError::RateLimited {
            retry_after_seconds: retry_after.as_secs(),
        });
    }

    if request.name.trim().is_empty() {
        return Err(ApiError::InvalidPayload("name must not be empty".to_string()));
    }
    if !is_valid_email(&request.email) {
        return Err(ApiError::InvalidPayload(
            "email address is invalid".to_string(),
        ));
    }

    let submission = contact::create_submission(
        &state.db_pool,
        request.name.trim(),
        &request.email,
        request.phone.as_deref(),
        &request.preferred_contact,
        request.message.as_deref(),
    )
    .await
    .map_err(|e| {
        error!("Failed to store contact submission: {}", e);
        ApiError::Database(e)
    })?;

    dispatch_notification(&state, &submission).await;

    info!("Stored contact submission {}", submission.id);

    Ok(Json(ContactResponse {
        id: submission.id,
        status: submission.status,
    }))
}

/// POST /api/meetings
/// Schedule a meeting for an existing contact submission
pub async fn schedule_meeting(
    State(state): State<AppState>,
    Json(request): Json<ScheduleMeetingRequest>,
) -> ApiResult<Json<Meeting>> {
    let submission = contact::get_submission(&state.db_pool, request.contact_submission_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "contact submission {} not found",
                request.contact_submission_id
            ))
        })?;

    let meeting = meetings::create_meeting(
        &state.db_pool,
        submission.id,
        request.scheduled_for,
        &request.meeting_type,
    )
    .await
    .map_err(|e| {
        error!("Failed to store meeting: {}", e);
        ApiError::Database(e)
    })?;

    contact::update_submission_status(&state.db_pool, submission.id, "scheduled").await?;

    let invite = MeetingInvite {
        subject: format!("Meeting with {}", submission.name),
        starts_at: meeting.scheduled_for,
        ends_at: meeting.scheduled_for + Duration::minutes(i64::from(request.duration_minutes)),
        attendee_name: submission.name.clone(),
        attendee_email: submission.email.clone(),
    };
    if let Err(e) = state.groupware.create_meeting_invite(&invite).await {
        warn!("Calendar invite dispatch failed for meeting {}: {}", meeting.id, e);
    }

    info!(
        "Scheduled meeting {} for submission {}",
        meeting.id, submission.id
    );

    Ok(Json(meeting))
}

/// GET /api/meetings?submission={id}
/// List meetings scheduled for one contact submission
pub async fn list_meetings(
    State(state): State<AppState>,
    Query(query): Query<MeetingsQuery>,
) -> ApiResult<Json<Vec<Meeting>>> {
    let meetings = meetings::list_meetings_for_submission(&state.db_pool, query.submission)
        .await
        .map_err(|e| {
            error!("Failed to list meetings: {}", e);
            ApiError::Database(e)
        })?;

    Ok(Json(meetings))
}

async fn dispatch_notification(state: &AppState, submission: &ContactSubmission) {
    let notification = ContactNotification {
        name: submission.name.clone(),
        email: submission.email.clone(),
        phone: submission.phone.clone(),
        preferred_contact: submission.preferred_contact.clone(),
        message: submission.message.clone(),
    };

    if let Err(e) = state.groupware.send_contact_notification(&notification).await {
        warn!(
            "Contact notification dispatch failed for submission {}: {}",
            submission.id, e
        );
    }
}
