use crate::error::{DbError, DbResult};
use crate::models::{ContactSubmission, ContactSubmissionRaw};
use chrono::Utc;
use sqlx::{Any, Pool};

/// Insert a contact submission with status "pending"
pub async fn create_submission(
    pool: &Pool<Any>,
    name: &str,
    email: &str,
    phone: Option<&str>,
    preferred_contact: &str,
    message: Option<&str>,
) -> DbResult<ContactSubmission> {
    let now_str = Utc::now().to_rfc3339();

    let result = sqlx::query(
        "INSERT INTO contact_submissions (name, email, phone, preferred_contact, message, status, created_at)
         VALUES (?, ?, ?, ?, ?, 'pending', ?)",
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(preferred_contact)
    .bind(message)
    .bind(&now_str)
    .execute(pool)
    .await?;

    let id = result
        .last_insert_id()
        .ok_or(DbError::SqlxError(sqlx::Error::RowNotFound))?;

    get_submission(pool, id)
        .await?
        .ok_or(DbError::SubmissionNotFound(id))
}

/// Get a submission by ID
pub async fn get_submission(pool: &Pool<Any>, id: i64) -> DbResult<Option<ContactSubmission>> {
    let submission = sqlx::query_as::<_, ContactSubmissionRaw>(
        "SELECT id, name, email, phone, preferred_contact, message, status, created_at
         FROM contact_submissions
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .map(|raw| raw.into());

    Ok(submission)
}

/// Update a submission's status
pub async fn update_submission_status(pool: &Pool<Any>, id: i64, status: &str) -> DbResult<()> {
    let result = sqlx::query("UPDATE contact_submissions SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::SubmissionNotFound(id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::any::AnyPoolOptions;

    async fn setup_test_db() -> Pool<Any> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");

        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .expect("Failed to enable foreign keys");

        sqlx::query(include_str!("../migrations/001_initial.sql"))
            .execute(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    #[tokio::test]
    async fn test_create_submission() {
        let pool = setup_test_db().await;

        let submission = create_submission(
            &pool,
            "Test Visitor",
            "visitor@example.com",
            Some("+385 91 000 0000"),
            "email",
            Some("Interested in a consultation"),
        )
        .await
        .expect("Failed to create submission");

        assert_eq!(submission.name, "Test Visitor");
        assert_eq!(submission.email, "visitor@example.com");
        assert_eq!(submission.status, "pending");
        assert_eq!(submission.phone.as_deref(), Some("+385 91 000 0000"));
    }

    #[tokio::test]
    async fn test_get_missing_submission() {
        let pool = setup_test_db().await;

        let result = get_submission(&pool, 999)
            .await
            .expect("Failed to query submission");

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_submission_status() {
        let pool = setup_test_db().await;

        let submission = create_submission(&pool, "Test", "t@example.com", None, "email", None)
            .await
            .expect("Failed to create submission");

        update_submission_status(&pool, submission.id, "scheduled")
            .await
            .expect("Failed to update status");

        let updated = get_submission(&pool, submission.id)
            .await
            .expect("Failed to get submission")
            .expect("Submission not found");

        assert_eq!(updated.status, "scheduled");
    }

    #[tokio::test]
    async fn test_update_status_missing_submission() {
        let pool = setup_test_db().await;

        let result = update_submission_status(&pool, 42, "scheduled").await;

        assert!(matches!(result, Err(DbError::SubmissionNotFound(42))));
    }
}
