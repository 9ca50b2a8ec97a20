pub mod activity;
pub mod config;
pub mod rate_limit;
pub mod validate;

// Re-export commonly used types
pub use activity::{ActivityDay, daily_activity, intensity};
pub use config::{RateLimitConfig, ServerConfig};
pub use rate_limit::{FixedWindowLimiter, RateDecision};
pub use validate::is_valid_email;
