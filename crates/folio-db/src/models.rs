use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Blog post database model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub preview: String,
    pub thumbnail_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub author: Option<String>,
}

/// Raw blog post model from database (string timestamps, tags as JSON text)
#[derive(Debug, Clone, FromRow)]
pub(crate) struct BlogPostRaw {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub preview: String,
    pub thumbnail_url: Option<String>,
    pub published_at: String,
    pub tags: Option<String>,
    pub author: Option<String>,
}

impl From<BlogPostRaw> for BlogPost {
    fn from(raw: BlogPostRaw) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            slug: raw.slug,
            content: raw.content,
            preview: raw.preview,
            thumbnail_url: raw.thumbnail_url,
            published_at: DateTime::parse_from_rfc3339(&raw.published_at)
                .unwrap()
                .with_timezone(&Utc),
            tags: raw
                .tags
                .as_deref()
                .map(|json| serde_json::from_str(json).unwrap_or_default())
                .unwrap_or_default(),
            author: raw.author,
        }
    }
}

/// Fields required to insert a blog post
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub preview: String,
    pub thumbnail_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub author: Option<String>,
}

/// Contact submission database model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_contact: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Raw contact submission model from database (with string timestamp)
#[derive(Debug, Clone, FromRow)]
pub(crate) struct ContactSubmissionRaw {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_contact: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: String,
}

impl From<ContactSubmissionRaw> for ContactSubmission {
    fn from(raw: ContactSubmissionRaw) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            email: raw.email,
            phone: raw.phone,
            preferred_contact: raw.preferred_contact,
            message: raw.message,
            status: raw.status,
            created_at: DateTime::parse_from_rfc3339(&raw.created_at)
                .unwrap()
                .with_timezone(&Utc),
        }
    }
}

/// Meeting database model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,
    pub contact_submission_id: i64,
    pub scheduled_for: DateTime<Utc>,
    pub meeting_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw meeting model from database (with string timestamps)
#[derive(Debug, Clone, FromRow)]
pub(crate) struct MeetingRaw {
    pub id: i64,
    pub contact_submission_id: i64,
    pub scheduled_for: String,
    pub meeting_type: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<MeetingRaw> for Meeting {
    fn from(raw: MeetingRaw) -> Self {
        Self {
            id: raw.id,
            contact_submission_id: raw.contact_submission_id,
            scheduled_for: DateTime::parse_from_rfc3339(&raw.scheduled_for)
                .unwrap()
                .with_timezone(&Utc),
            meeting_type: raw.meeting_type,
            status: raw.status,
            created_at: DateTime::parse_from_rfc3339(&raw.created_at)
                .unwrap()
                .with_timezone(&Utc),
            updated_at: DateTime::parse_from_rfc3339(&raw.updated_at)
                .unwrap()
                .with_timezone(&Utc),
        }
    }
}

/// Social profile database model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialProfile {
    pub id: i64,
    pub platform: String,
    pub username: String,
    pub profile_url: String,
    pub display_name: String,
    pub active: bool,
}

/// Raw social profile model from database
#[derive(Debug, Clone, FromRow)]
pub(crate) struct SocialProfileRaw {
    pub id: i64,
    pub platform: String,
    pub username: String,
    pub profile_url: String,
    pub display_name: String,
    pub active: i32, // SQLite BOOLEAN as INTEGER
}

impl From<SocialProfileRaw> for SocialProfile {
    fn from(raw: SocialProfileRaw) -> Self {
        Self {
            id: raw.id,
            platform: raw.platform,
            username: raw.username,
            profile_url: raw.profile_url,
            display_name: raw.display_name,
            active: raw.active != 0,
        }
    }
}

/// Knowledge base entry database model
///
/// `kind` is either "folder" or "file"; folders have no content and files
/// reference their folder through `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KbEntry {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub kind: String,
    pub content: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Raw knowledge base entry model from database (with string timestamp)
#[derive(Debug, Clone, FromRow)]
pub(crate) struct KbEntryRaw {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub kind: String,
    pub content: Option<String>,
    pub updated_at: String,
}

impl From<KbEntryRaw> for KbEntry {
    fn from(raw: KbEntryRaw) -> Self {
        Self {
            id: raw.id,
            parent_id: raw.parent_id,
            name: raw.name,
            kind: raw.kind,
            content: raw.content,
            updated_at: DateTime::parse_from_rfc3339(&raw.updated_at)
                .unwrap()
                .with_timezone(&Utc),
        }
    }
}
