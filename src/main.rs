use clap::Parser;
use std::path::Path;
use tokio::net::TcpListener;

use user_data_server::config::AppConfig;
use user_data_server::logging::init_tracing;
use user_data_server::startup::{build_router, connect_backend, initialize_schema};

#[derive(Parser, Debug)]
#[command(name = "user-data-server")]
#[command(about = "HTTP CRUD service for users and their todos")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,

    /// Database connection string (overrides config file and CONNECTION_STRING)
    #[arg(long)]
    database_url: Option<String>,
}

fn load_config(args: &Args) -> Result<AppConfig, String> {
    let mut app_config = if Path::new(&args.config).exists() {
        tracing::info!("Loading configuration from {}", args.config);
        AppConfig::load_from_file(&args.config)?
    } else if let Some(url) = &args.database_url {
        AppConfig::with_database_url(url.clone())
    } else {
        tracing::info!(
            "No {} found, reading configuration from the environment",
            args.config
        );
        AppConfig::from_env()?
    };

    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = &args.host {
        app_config.server.host = host.clone();
    }
    if let Some(url) = &args.database_url {
        app_config.database.url = url.clone();
    }

    app_config.validate()?;
    Ok(app_config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // .env never overrides variables already set in the environment
    let dotenv_result = dotenvy::dotenv();

    init_tracing();

    if let Ok(path) = dotenv_result {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let app_config = load_config(&args).map_err(|e| format!("Failed to load configuration: {}", e))?;

    let backend = connect_backend(&app_config).await?;
    initialize_schema(backend.as_ref()).await?;

    let app = build_router(backend.clone());

    let addr = app_config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    backend.cleanup().await?;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
