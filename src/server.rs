use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, ClassifierError};

/// Default TCP port of the inference service.
pub const DEFAULT_PORT: u16 = 6000;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// The free-text expense description. A missing field defaults to the
    /// empty string, which still gets a prior-driven prediction.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Prediction(#[from] ClassifierError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

async fn predict(
    Extension(classifier): Extension<Arc<Classifier>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ServerError> {
    let category = classifier.predict(&request.message)?;
    Ok(Json(PredictResponse { category }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Builds the router with the classifier injected as read-only shared state.
pub fn app(classifier: Arc<Classifier>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .layer(Extension(classifier))
}

/// Serves the classifier until the process is stopped.
///
/// The classifier is fully loaded before this is called, so the service is
/// never reachable in a half-ready state.
pub async fn run(classifier: Arc<Classifier>, port: u16) -> anyhow::Result<()> {
    let application = app(classifier);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(application.into_make_service())
        .await?;
    Ok(())
}
