use anyhow::Context;
use storage::Database;
use tokio::{net::TcpListener, signal};
use utoipa::OpenApi;

mod config;
mod error;
mod extract;
mod features;
mod routes;

use config::Config;
use features::resources::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::event_types::list,
        handlers::event_types::create,
        handlers::event_types::update,
        handlers::event_types::delete,
        handlers::competitions::list,
        handlers::competitions::create,
        handlers::competitions::update,
        handlers::competitions::delete,
        handlers::judges::list,
        handlers::judges::create,
        handlers::judges::update,
        handlers::judges::delete,
        handlers::participants::list,
        handlers::participants::create,
        handlers::participants::update,
        handlers::participants::delete,
        handlers::criteria::list,
        handlers::criteria::create,
        handlers::criteria::update,
        handlers::criteria::delete,
    ),
    components(
        schemas(
            storage::dto::common::MessageResponse,
            storage::dto::common::CreatedResponse,
            storage::dto::event_type::EventTypeRequest,
            storage::dto::competition::CompetitionRequest,
            storage::dto::judge::JudgeRequest,
            storage::dto::participant::ParticipantRequest,
            storage::dto::criteria::CriteriaRequest,
            storage::models::EventType,
            storage::models::Competition,
            storage::models::Judge,
            storage::models::Participant,
            storage::models::Criteria,
        )
    ),
    tags(
        (name = "event-types", description = "Kinds of judged events"),
        (name = "competitions", description = "Scheduled competitions"),
        (name = "judges", description = "Judging panel"),
        (name = "participants", description = "Competition entrants"),
        (name = "criteria", description = "Scoring criteria per competition"),
    )
)]
pub struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting automated judging API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::with_max_connections(&config.database_url, config.max_connections)
        .await
        .inspect_err(|e| tracing::error!("Database connection failed: {}", e))
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("Failed to apply database schema")?;
    tracing::info!("Database schema is up to date");

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Server running at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, routes::router(db.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    tracing::info!("Database connections closed");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
