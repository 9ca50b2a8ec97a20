use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

use crate::traits::{ContactNotification, GroupwareClient, GroupwareError, MeetingInvite};

/// Groupware client that drops everything, for deployments without
/// Graph credentials. Handlers still persist their rows; only the
/// outbound side effect disappears.
#[derive(Debug, Clone, Default)]
pub struct NoopGroupware;

impl NoopGroupware {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GroupwareClient for NoopGroupware {
    async fn send_contact_notification(
        &self,
        notification: &ContactNotification,
    ) -> Result<(), GroupwareError> {
        debug!(
            "Groupware disabled, dropping contact notification from {}",
            notification.email
        );
        Ok(())
    }

    async fn create_meeting_invite(&self, invite: &MeetingInvite) -> Result<(), GroupwareError> {
        debug!("Groupware disabled, dropping invite '{}'", invite.subject);
        Ok(())
    }

    fn provider_name(&self) -> String {
        "noop".to_string()
    }
}

/// Recording mock for tests
///
/// Stores every dispatched notification and invite; optionally fails all
/// calls to exercise error paths.
#[derive(Debug, Default)]
pub struct MockGroupware {
    fail: bool,
    notifications: Mutex<Vec<ContactNotification>>,
    invites: Mutex<Vec<MeetingInvite>>,
}

impl MockGroupware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose dispatch calls always fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent_notifications(&self) -> Vec<ContactNotification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn sent_invites(&self) -> Vec<MeetingInvite> {
        self.invites
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl GroupwareClient for MockGroupware {
    async fn send_contact_notification(
        &self,
        notification: &ContactNotification,
    ) -> Result<(), GroupwareError> {
        if self.fail {
            return Err(GroupwareError::ApiError("mock failure".to_string()));
        }

        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
        Ok(())
    }

    async fn create_meeting_invite(&self, invite: &MeetingInvite) -> Result<(), GroupwareError> {
        if self.fail {
            return Err(GroupwareError::ApiError("mock failure".to_string()));
        }

        self.invites
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(invite.clone());
        Ok(())
    }

    fn provider_name(&self) -> String {
        "mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_notification() -> ContactNotification {
        ContactNotification {
            name: "Test Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            phone: None,
            preferred_contact: "email".to_string(),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_mock_records_notifications() {
        let mock = MockGroupware::new();

        mock.send_contact_notification(&sample_notification())
            .await
            .expect("Mock should accept notifications");

        let sent = mock.sent_notifications();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "visitor@example.com");
    }

    #[tokio::test]
    async fn test_mock_records_invites() {
        let mock = MockGroupware::new();
        let invite = MeetingInvite {
            subject: "Intro call".to_string(),
            starts_at: Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2024, 6, 1, 14, 30, 0).unwrap(),
            attendee_name: "Test Visitor".to_string(),
            attendee_email: "visitor@example.com".to_string(),
        };

        mock.create_meeting_invite(&invite)
            .await
            .expect("Mock should accept invites");

        assert_eq!(mock.sent_invites().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let mock = MockGroupware::failing();

        let result = mock.send_contact_notification(&sample_notification()).await;

        assert!(matches!(result, Err(GroupwareError::ApiError(_))));
        assert!(mock.sent_notifications().is_empty());
    }

    #[tokio::test]
    async fn test_noop_accepts_everything() {
        let noop = NoopGroupware::new();

        noop.send_contact_notification(&sample_notification())
            .await
            .expect("Noop never fails");

        assert_eq!(noop.provider_name(), "noop");
    }
}
