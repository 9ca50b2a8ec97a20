pub mod blog;
pub mod contact;
pub mod error;
pub mod knowledge;
pub mod meetings;
pub mod models;
pub mod pool;
pub mod social;

// Re-export commonly used types
pub use error::{DbError, DbResult};
pub use models::{BlogPost, ContactSubmission, KbEntry, Meeting, NewBlogPost, SocialProfile};
pub use pool::{create_pool, run_migrations};
