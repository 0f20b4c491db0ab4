//! HTTP interface for Propcast.
//!
//! Thin axum layer over the prediction aggregator and the parlay service.
//! Handlers never touch models directly.

use crate::application::parlay::ParlayService;
use crate::application::prediction::{PredictionAggregator, PredictionRequest};
use crate::application::system::Application;
use crate::domain::ml::feature_schema::SchemaVariant;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

pub const BANNER: &str = "MLB Betting API with real models is running";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<PredictionAggregator>,
    pub parlay: Arc<ParlayService>,
    pub variant: SchemaVariant,
}

impl From<&Application> for AppState {
    fn from(app: &Application) -> Self {
        Self {
            aggregator: app.aggregator.clone(),
            parlay: app.parlay.clone(),
            variant: app.config.model.schema_variant,
        }
    }
}

/// Error body returned when a request cannot be served.
struct ServiceUnavailable(String);

impl IntoResponse for ServiceUnavailable {
    fn into_response(self) -> Response {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": self.0 })),
        )
            .into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(liveness))
        .route("/predict/player-props", post(predict_player_props))
        .route("/predict/parlay", post(parlay))
        .route("/parlay", post(parlay))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn index() -> &'static str {
    BANNER
}

/// Liveness probe
async fn liveness(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
        "schema": state.variant.as_str(),
    }))
}

async fn predict_player_props(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ServiceUnavailable> {
    let request = PredictionRequest::from_body(&body);
    let pitcher = request.pitcher_record();
    let hitter = request.hitter_record();
    debug!(
        "Prediction request: {} pitcher fields, {} hitter fields",
        pitcher.len(),
        hitter.len()
    );

    let result = state
        .aggregator
        .aggregate(Some(&pitcher), Some(&hitter))
        .map_err(|e| ServiceUnavailable(e.to_string()))?;
    Ok(Json(result).into_response())
}

async fn parlay(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ServiceUnavailable> {
    let requested = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(mut map)) => map.remove("confidence"),
        _ => None,
    };

    let selection = state
        .parlay
        .build(requested.as_ref())
        .map_err(|e| ServiceUnavailable(e.to_string()))?;
    Ok(Json(selection).into_response())
}
