// ============================================================================
// Web Boundary
// ============================================================================
//
// Endpoints:
// - POST /simulate - Run both pipelines for a username/password sent as
//                    urlencoded or multipart form data
// - GET /health    - Liveness check
//
// ============================================================================

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::demo::{Demo, DemoResult};
use crate::error::DemoError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Demo(#[from] DemoError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Demo(DemoError::Validation) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the caller
    pub fn user_message(&self) -> String {
        match self {
            AppError::Demo(DemoError::Validation) => DemoError::Validation.to_string(),
            _ => "Internal server error".to_string(),
        }
    }

    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            let source = match self {
                AppError::Demo(DemoError::Crypto(inner)) => inner.to_string(),
                other => other.to_string(),
            };
            tracing::error!(
                error = %source,
                status = %status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(error = %self, status = %status.as_u16(), "Client error occurred");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(json!({ "error": self.user_message() }));
        (self.status_code(), body).into_response()
    }
}

/// Form fields of `POST /simulate`; either may be absent
///
/// Accepts `application/x-www-form-urlencoded` and `multipart/form-data`
/// bodies. Any other body, or one that cannot be read, yields no fields.
/// A repeated field keeps its first value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SimulateForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SimulateForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };
        Self {
            username: first("username"),
            password: first("password"),
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for SimulateForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let pairs = if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(unreadable_form)?;
            multipart_pairs(multipart).await?
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(unreadable_form)?;
            pairs
        } else {
            Vec::new()
        };

        Ok(Self::from_pairs(&pairs))
    }
}

async fn multipart_pairs(mut multipart: Multipart) -> Result<Vec<(String, String)>, AppError> {
    let mut pairs = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(unreadable_form)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await.map_err(unreadable_form)?;
        pairs.push((name, value));
    }
    Ok(pairs)
}

/// A body we cannot parse carries no credentials
fn unreadable_form(err: impl std::fmt::Display) -> AppError {
    tracing::debug!(error = %err, "unreadable form body");
    DemoError::Validation.into()
}

/// Build the application router around a shared engine
pub fn router(demo: Arc<Demo>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/simulate", post(simulate))
        .with_state(demo)
        .layer(TraceLayer::new_for_http())
}

/// GET /health
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// POST /simulate
async fn simulate(
    State(demo): State<Arc<Demo>>,
    form: SimulateForm,
) -> Result<Json<DemoResult>, AppError> {
    let username = form.username.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    // Key generation is CPU-bound; keep it off the async workers
    let result = tokio::task::spawn_blocking(move || demo.simulate(&username, &password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    tracing::info!("simulation completed");
    Ok(Json(result))
}
