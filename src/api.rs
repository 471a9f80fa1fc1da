//! HTTP API for the Salary Engine.
//!
//! This module exposes a minimal REST API around the calculation engine
//! using the [`axum`](https://crates.io/crates/axum) framework.  The API
//! allows clients to submit a gross salary and receive the computed
//! paycheck in JSON, with the same deduction rules used by the core
//! engine.

use crate::engine::compute_paycheck;
use crate::models::GrossInput;
use anyhow::Result;
use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::Deserialize;

/// Request body for `POST /api/calculate`.
///
/// The gross salary may be a JSON number or a decimal string; see
/// [`GrossInput`].
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub gross: GrossInput,
}

/// Build the API router.
pub fn build_router() -> Router {
    Router::new().route("/api/calculate", post(calculate_handler))
}

/// Handler for POST /api/calculate
async fn calculate_handler(Json(request): Json<CalculateRequest>) -> impl IntoResponse {
    match compute_paycheck(request.gross) {
        Ok(paycheck) => (StatusCode::OK, Json(paycheck)).into_response(),
        Err(err) => {
            tracing::warn!("rejected gross salary: {err}");
            let body = Json(serde_json::json!({"error": err.to_string()}));
            (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
        }
    }
}

/// Launch the API server.  This function builds the router and binds to
/// the supplied address.  It blocks until the server terminates (e.g.
/// when interrupted).
pub async fn serve(addr: &str) -> Result<()> {
    let router = build_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("salary engine listening on {addr}");
    axum::serve(listener, router).await?;
    Ok(())
}
