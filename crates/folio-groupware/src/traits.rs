use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content of a contact-form notification mail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactNotification {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_contact: String,
    pub message: Option<String>,
}

/// Content of a meeting calendar invite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingInvite {
    pub subject: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub attendee_name: String,
    pub attendee_email: String,
}

/// Groupware dispatch trait for outbound email and calendar invites
#[async_trait]
pub trait GroupwareClient: Send + Sync {
    /// Send the contact-form notification to the site owner
    async fn send_contact_notification(
        &self,
        notification: &ContactNotification,
    ) -> Result<(), GroupwareError>;

    /// Create a calendar event with the visitor as attendee
    async fn create_meeting_invite(&self, invite: &MeetingInvite) -> Result<(), GroupwareError>;

    /// Get the provider name (e.g., "graph", "noop", "mock")
    fn provider_name(&self) -> String;
}

/// Errors that can occur during groupware dispatch
#[derive(Debug, thiserror::Error)]
pub enum GroupwareError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Invalid credentials or authentication failed")]
    AuthError,

    #[error("Network error: {0}")]
    NetworkError(String),
}
