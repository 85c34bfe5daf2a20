//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: ServiceStatus,
}

/// Individual service status.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub store: ServiceHealth,
}

/// Service health with optional error message.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health of a pinged store. The cause is logged; the public body only
/// says the store is unreachable.
fn store_health<E: std::fmt::Display>(ping: Result<(), E>) -> ServiceHealth {
    match ping {
        Ok(()) => ServiceHealth {
            status: "healthy".to_string(),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "store health check failed");
            ServiceHealth {
                status: "unhealthy".to_string(),
                error: Some("store unreachable".to_string()),
            }
        }
    }
}

/// Health check endpoint - verifies store connectivity.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store = match &state.database {
        Some(db) => store_health(db.ping().await),
        // in-memory store is always reachable
        None => store_health::<std::convert::Infallible>(Ok(())),
    };

    let all_healthy = store.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        services: ServiceStatus { store },
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
