//! Route table
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | POST | /orders | [`place_order_handler`] |
//! | GET | /health | [`health_check`] |

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::infrastructure::AppDependencies;

use super::handler::place_order_handler;

#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[allow(clippy::unused_async)]
pub async fn health_check(
    State(_dependencies): State<AppDependencies>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        .route("/orders", post(place_order_handler))
        .route("/health", get(health_check))
        .with_state(dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn health_reports_crate_version() {
        let (status, Json(body)) = health_check(State(AppDependencies::default())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
