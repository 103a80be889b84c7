//! `LookOutline` server entry point.
//!
//! Loads `.env`, builds the SMTP mailer and lead intake, optionally checks
//! the relay, then starts the Axum HTTP server with graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use lookout_core::intake::LeadIntake;
use lookout_core::mailer::{Mailer, SmtpMailer};

use lookout_server::config::ServerConfig;
use lookout_server::routes::build_router;
use lookout_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real deployments set the environment.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env().context("failed to load configuration")?;

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(
        smtp_host = %config.smtp.host,
        smtp_port = config.smtp.port,
        "LookOutline starting"
    );

    let state = build_app_state(&config).await?;
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "LookOutline server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("LookOutline server stopped");
    Ok(())
}

/// Build the mailer, intake, and shared state.
async fn build_app_state(config: &ServerConfig) -> anyhow::Result<Arc<AppState>> {
    let mailer = SmtpMailer::from_config(&config.smtp).context("failed to build SMTP mailer")?;

    if config.verify_smtp_on_startup {
        // The relay may come up after us; keep serving either way.
        match mailer.verify().await {
            Ok(()) => info!("SMTP transport verified"),
            Err(e) => error!(error = %e, "SMTP transport verification failed"),
        }
    }

    let intake = LeadIntake::new(Arc::new(mailer), &config.leads_email)
        .context("invalid LEADS_EMAIL")?;

    Ok(Arc::new(AppState::new(
        intake,
        config.allowed_origins.clone(),
        config.site.clone(),
    )))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
