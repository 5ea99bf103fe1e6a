/// Deckhand Server - users, decks and guides over HTTP
use clap::{Parser, Subcommand};
use deckhand_core::StorageContext;
use deckhand_server::{config::ServerConfig, create_router, state::AppState};
use deckhand_storage::Database;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "deckhand-server")]
#[command(about = "Deckhand users, decks and guides backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "DECKHAND_CONFIG")]
        config: Option<PathBuf>,
    },
    /// List all users and their deck counts
    ListUsers {
        /// Configuration file path
        #[arg(short, long, env = "DECKHAND_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "deckhand_server=info,deckhand_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::ListUsers { config } => {
            list_users(config.as_deref()).await?;
        }
    }

    Ok(())
}

async fn open_database(config: &ServerConfig) -> anyhow::Result<Database> {
    let db = Database::connect(&config.storage.database_url).await?;
    tracing::info!("Database connected");
    Ok(db)
}

async fn serve(config_path: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Deckhand Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let db = Arc::new(open_database(&config).await?);
    let app = create_router(AppState::new(db));

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn list_users(config_path: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    let db = open_database(&config).await?;
    let users = db.get_all_users().await?;

    println!("Users:");
    for entry in users {
        println!(
            "  {} - {} ({} decks)",
            entry.user.id,
            entry.user.username,
            entry.decks.len()
        );
    }

    Ok(())
}
