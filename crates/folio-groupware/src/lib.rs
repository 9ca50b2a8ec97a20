pub mod graph;
pub mod mock;
pub mod traits;

// Re-export commonly used types
pub use graph::GraphClient;
pub use mock::{MockGroupware, NoopGroupware};
pub use traits::{
    ContactNotification, GroupwareClient, GroupwareError, MeetingInvite,
};
