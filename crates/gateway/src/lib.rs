//! API Gateway Library
//!
//! HTTP transport for the identity use cases: JSON in, JSON out, bearer
//! tokens minted on login and verified on every self-service route.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod token;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::ValueEnum;
use tracing::info;

use domain::IdentityFactory;
use identity_service_lib::infra::Database;
use identity_service_lib::repository::{IdentityRepository, IdentityStore, InMemoryIdentityStore};
use identity_service_lib::usecase::IdentityUseCases;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;
use crate::token::TokenIssuer;

/// Which identity store backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// SeaORM over the configured database, migrations applied on start
    Postgres,
    /// Process-local store, contents lost on exit
    Memory,
}

/// Build the application state for the selected store.
pub async fn build_state(
    config: &GatewayConfig,
    backend: StoreBackend,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let (store, database): (Arc<dyn IdentityRepository>, Option<Database>) = match backend {
        StoreBackend::Postgres => {
            let db = Database::connect(&config.database).await?;
            (Arc::new(IdentityStore::new(db.get_connection())), Some(db))
        }
        StoreBackend::Memory => {
            info!("Using in-memory identity store");
            (Arc::new(InMemoryIdentityStore::new()), None)
        }
    };

    let identities = IdentityUseCases::new(store, Arc::new(IdentityFactory::new()));
    let tokens = TokenIssuer::new(&config.jwt);

    Ok(AppState::new(identities, tokens, database))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(
    host: &str,
    port: u16,
    config: GatewayConfig,
    backend: StoreBackend,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config, backend).await?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
