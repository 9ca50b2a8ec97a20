use crate::contact::get_submission;
use crate::error::{DbError, DbResult};
use crate::models::{Meeting, MeetingRaw};
use chrono::{DateTime, Utc};
use sqlx::{Any, Pool};

/// Insert a meeting for an existing contact submission
///
/// Fails with [`DbError::SubmissionNotFound`] if the submission does not
/// exist, so callers never create dangling meetings.
pub async fn create_meeting(
    pool: &Pool<Any>,
    contact_submission_id: i64,
    scheduled_for: DateTime<Utc>,
    meeting_type: &str,
) -> DbResult<Meeting> {
    if get_submission(pool, contact_submission_id).await?.is_none() {
        return Err(DbError::SubmissionNotFound(contact_submission_id));
    }

    let now_str = Utc::now().to_rfc3339();

    let result = sqlx::query(
        "INSERT INTO meetings (contact_submission_id, scheduled_for, meeting_type, status, created_at, updated_at)
         VALUES (?, ?, ?, 'scheduled', ?, ?)",
    )
    .bind(contact_submission_id)
    .bind(scheduled_for.to_rfc3339())
    .bind(meeting_type)
    .bind(&now_str)
    .bind(&now_str)
    .execute(pool)
    .await?;

    let id = result
        .last_insert_id()
        .ok_or(DbError::SqlxError(sqlx::Error::RowNotFound))?;

    get_meeting(pool, id)
        .await?
        .ok_or(DbError::SqlxError(sqlx::Error::RowNotFound))
}

/// Get a meeting by ID
pub async fn get_meeting(pool: &Pool<Any>, id: i64) -> DbResult<Option<Meeting>> {
    let meeting = sqlx::query_as::<_, MeetingRaw>(
        "SELECT id, contact_submission_id, scheduled_for, meeting_type, status, created_at, updated_at
         FROM meetings
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .map(|raw| raw.into());

    Ok(meeting)
}

/// List meetings for a contact submission, soonest first
pub async fn list_meetings_for_submission(
    pool: &Pool<Any>,
    contact_submission_id: i64,
) -> DbResult<Vec<Meeting>> {
    let meetings = sqlx::query_as::<_, MeetingRaw>(
        "SELECT id, contact_submission_id, scheduled_for, meeting_type, status, created_at, updated_at
         FROM meetings
         WHERE contact_submission_id = ?
         ORDER BY scheduled_for ASC",
    )
    .bind(contact_submission_id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|raw| raw.into())
    .collect();

    Ok(meetings)
}
