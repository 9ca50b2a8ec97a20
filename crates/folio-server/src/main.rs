mod config;

use config::AppConfig;
use folio_api::{AppState, GithubFeedSettings, api_router, init_server_start_time};
use folio_core::FixedWindowLimiter;
use folio_db::{create_pool, run_migrations};
use folio_github::GithubClient;
use folio_groupware::{GraphClient, GroupwareClient, NoopGroupware};
use secrecy::SecretString;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize server start time for health endpoint
    init_server_start_time();

    // Install SQLite driver for sqlx::Any
    sqlx::any::install_default_drivers();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Configuration loaded successfully");

    if config.github.token.is_empty() {
        error!("GitHub token is not configured (set FOLIO_GITHUB__TOKEN)");
        std::process::exit(1);
    }

    // Create database connection pool
    let db_pool = match create_pool(&config.database.url, config.database.max_connections).await {
        Ok(pool) => {
            info!("Database connection pool created: {}", config.database.url);
            pool
        }
        Err(e) => {
            error!("Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    // Run database migrations
    if let Err(e) = run_migrations(&db_pool).await {
        error!("Failed to run database migrations: {}", e);
        std::process::exit(1);
    }
    info!("Database migrations completed successfully");

    // Create GitHub API client
    let github_client = match GithubClient::new(config.github.token.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create GitHub API client: {}", e);
            std::process::exit(1);
        }
    };

    // Create groupware client (noop when credentials are absent)
    let groupware: Arc<dyn GroupwareClient> = match &config.groupware {
        Some(gw) => {
            info!("Groupware dispatch enabled, sending as {}", gw.sender);
            Arc::new(GraphClient::new(
                gw.tenant_id.clone(),
                gw.client_id.clone(),
                SecretString::from(gw.client_secret.clone()),
                gw.sender.clone(),
                gw.notify_address.clone(),
            ))
        }
        None => {
            warn!("Groupware credentials not configured, outbound mail disabled");
            Arc::new(NoopGroupware::new())
        }
    };

    // Create the contact-endpoint rate limiter and its background sweep
    let rate_limiter = Arc::new(FixedWindowLimiter::new(config.rate_limit));
    spawn_rate_limit_sweep(rate_limiter.clone());

    // Create application state
    let app_state = AppState::new(
        db_pool,
        github_client,
        groupware,
        rate_limiter,
        GithubFeedSettings {
            max_repos: config.github.max_repos,
            commits_per_repo: config.github.commits_per_repo,
        },
    );

    // Build Axum router: API routes, then the built client bundle
    let app = api_router()
        .with_state(app_state)
        .fallback_service(
            ServeDir::new(&config.static_dir).append_index_html_on_directories(true),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server listening on http://{}", addr);

    // Run server with graceful shutdown; connect info feeds the rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");

    info!("Server shutdown complete");
}

/// Sweep expired rate-limit entries on a fixed interval, independent of
/// request traffic
fn spawn_rate_limit_sweep(limiter: Arc<FixedWindowLimiter>) {
    let interval = limiter.config().sweep_interval();

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; skip it
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = limiter.sweep_expired();
            if removed > 0 {
                debug!("Rate limit sweep removed {} expired entries", removed);
            }
        }
    });
}

/// Wait for SIGTERM signal for graceful shutdown
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}
