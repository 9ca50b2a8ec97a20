use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::traits::{ContactNotification, GroupwareClient, GroupwareError, MeetingInvite};

const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

/// Microsoft Graph groupware client
///
/// Authenticates with the OAuth2 client-credentials grant and sends mail
/// and calendar events as the configured sender mailbox.
#[derive(Debug)]
pub struct GraphClient {
    client: Client,
    tenant_id: String,
    client_id: String,
    client_secret: SecretString,
    /// Mailbox mail and events are sent as
    sender: String,
    /// Address contact notifications are delivered to
    notify_address: String,
    login_base_url: String,
    graph_base_url: String,
}

impl GraphClient {
    /// Create a new Graph client
    pub fn new(
        tenant_id: String,
        client_id: String,
        client_secret: SecretString,
        sender: String,
        notify_address: String,
    ) -> Self {
        Self {
            client: Client::new(),
            tenant_id,
            client_id,
            client_secret,
            sender,
            notify_address,
            login_base_url: "https://login.microsoftonline.com".to_string(),
            graph_base_url: "https://graph.microsoft.com".to_string(),
        }
    }

    /// Create a Graph client with custom endpoints (for testing)
    #[allow(clippy::too_many_arguments)]
    pub fn with_base_urls(
        tenant_id: String,
        client_id: String,
        client_secret: SecretString,
        sender: String,
        notify_address: String,
        login_base_url: String,
        graph_base_url: String,
    ) -> Self {
        Self {
            client: Client::new(),
            tenant_id,
            client_id,
            client_secret,
            sender,
            notify_address,
            login_base_url,
            graph_base_url,
        }
    }

    /// Acquire an app-only access token via the client-credentials grant
    async fn acquire_token(&self) -> Result<String, GroupwareError> {
        let url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.login_base_url, self.tenant_id
        );

        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret()),
            ("scope", GRAPH_SCOPE),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| GroupwareError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(match response.status().as_u16() {
                400 | 401 => GroupwareError::AuthError,
                status => GroupwareError::ApiError(format!("token endpoint returned {}", status)),
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| GroupwareError::ParseError(format!("Failed to parse token: {}", e)))?;

        Ok(token.access_token)
    }

    async fn post_graph<T: Serialize>(
        &self,
        route: &str,
        body: &T,
    ) -> Result<(), GroupwareError> {
        let token = self.acquire_token().await?;
        let url = format!("{}/v1.0{}", self.graph_base_url, route);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| GroupwareError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 | 403 => GroupwareError::AuthError,
                _ => GroupwareError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        Ok(())
    }
}

/// Render the plain-text notification body
///
/// Mirrors what the site owner expects in their inbox: who wrote, how to
/// reach them, and the message if one was left.
pub fn render_notification_body(notification: &ContactNotification) -> String {
    let mut body = format!(
        "New contact request\n\nName: {}\nEmail: {}\n",
        notification.name, notification.email
    );

    if let Some(phone) = &notification.phone {
        body.push_str(&format!("Phone: {}\n", phone));
    }

    body.push_str(&format!(
        "Preferred contact: {}\n",
        notification.preferred_contact
    ));

    if let Some(message) = &notification.message {
        body.push_str(&format!("\nMessage:\n{}\n", message));
    }

    body
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct SendMailRequest {
    message: GraphMessage,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphMessage {
    subject: String,
    body: GraphItemBody,
    to_recipients: Vec<GraphRecipient>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphItemBody {
    content_type: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphRecipient {
    email_address: GraphEmailAddress,
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    attendee_type: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphEmailAddress {
    address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateEventRequest {
    subject: String,
    start: GraphDateTime,
    end: GraphDateTime,
    attendees: Vec<GraphRecipient>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphDateTime {
    date_time: String,
    time_zone: &'static str,
}

#[async_trait]
impl GroupwareClient for GraphClient {
    async fn send_contact_notification(
        &self,
        notification: &ContactNotification,
    ) -> Result<(), GroupwareError> {
        let request = SendMailRequest {
            message: GraphMessage {
                subject: format!("Contact request from {}", notification.name),
                body: GraphItemBody {
                    content_type: "text",
                    content: render_notification_body(notification),
                },
                to_recipients: vec![GraphRecipient {
                    email_address: GraphEmailAddress {
                        address: self.notify_address.clone(),
                        name: None,
                    },
                    attendee_type: None,
                }],
            },
        };

        self.post_graph(&format!("/users/{}/sendMail", self.sender), &request)
            .await
    }

    async fn create_meeting_invite(&self, invite: &MeetingInvite) -> Result<(), GroupwareError> {
        let request = CreateEventRequest {
            subject: invite.subject.clone(),
            start: GraphDateTime {
                date_time: invite.starts_at.to_rfc3339(),
                time_zone: "UTC",
            },
            end: GraphDateTime {
                date_time: invite.ends_at.to_rfc3339(),
                time_zone: "UTC",
            },
            attendees: vec![GraphRecipient {
                email_address: GraphEmailAddress {
                    address: invite.attendee_email.clone(),
                    name: Some(invite.attendee_name.clone()),
                },
                attendee_type: Some("required"),
            }],
        };

        self.post_graph(&format!("/users/{}/events", self.sender), &request)
            .await
    }

    fn provider_name(&self) -> String {
        "graph".to_string()
    }
}
