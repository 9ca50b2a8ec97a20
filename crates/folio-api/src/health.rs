use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Instant;

use crate::state::AppState;

/// Server start time (shared across all health checks)
static SERVER_START_TIME: OnceLock<Instant> = OnceLock::new();

/// Initialize server start time
pub fn init_server_start_time() {
    let _ = SERVER_START_TIME.set(Instant::now());
}

/// Get server uptime in seconds
fn get_uptime_seconds() -> u64 {
    SERVER_START_TIME
        .get()
        .map(|start| start.elapsed().as_secs())
        .unwrap_or(0)
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: DatabaseStatus,
    pub groupware: GroupwareStatus,
}

/// Database connectivity status
#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseStatus {
    pub connected: bool,
    pub driver: String,
}

/// Groupware provider status
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupwareStatus {
    pub provider: String,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db_status = check_database_status(&state).await;

    let response = HealthResponse {
        status: if db_status.connected {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: get_uptime_seconds(),
        database: db_status,
        groupware: GroupwareStatus {
            provider: state.groupware.provider_name(),
        },
    };

    (StatusCode::OK, Json(response))
}

/// Check database connectivity
async fn check_database_status(state: &AppState) -> DatabaseStatus {
    let connected = sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .is_ok();

    DatabaseStatus {
        connected,
        driver: "any".to_string(), // sqlx::Any abstracts the actual driver
    }
}
