//! HTTP front for the birth chart engine.
//!
//! `POST /birth-chart` validates the body, resolves the chart through the
//! fallback chain and always answers 200 with a chart unless the input
//! itself is malformed.

use aphrodite::{
    BirthChartRequest, BirthChartResult, BirthInput, EphemerisProvider, FallbackChain,
    UnavailableEphemeris,
};
use aphrodite_config::{EphemerisConfig, ProviderKind, ServerSettings};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub type Engine = FallbackChain<Box<dyn EphemerisProvider>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    engine: Arc<Engine>,
}

impl AppState {
    pub fn new(provider: Box<dyn EphemerisProvider>) -> Self {
        Self {
            engine: Arc::new(FallbackChain::new(provider)),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

/// Pick the ephemeris backend named in the config. Anything that cannot be
/// brought up is replaced by [`UnavailableEphemeris`], so the service still
/// starts and serves sun-sign charts.
pub fn build_provider(config: &EphemerisConfig) -> Box<dyn EphemerisProvider> {
    match config.provider {
        ProviderKind::None => {
            log::warn!("ephemeris disabled by config, serving sun-sign charts only");
            Box::new(UnavailableEphemeris::new("ephemeris.provider = \"none\""))
        }
        ProviderKind::Swiss => swiss_provider(config),
    }
}

#[cfg(feature = "swiss-ephemeris")]
fn swiss_provider(config: &EphemerisConfig) -> Box<dyn EphemerisProvider> {
    match aphrodite::ephemeris::SwissEphemerisAdapter::new(config.path.clone()) {
        Ok(adapter) => Box::new(adapter),
        Err(e) => {
            log::warn!("Swiss Ephemeris unavailable, serving sun-sign charts only: {}", e);
            Box::new(UnavailableEphemeris::new(e.to_string()))
        }
    }
}

#[cfg(not(feature = "swiss-ephemeris"))]
fn swiss_provider(_config: &EphemerisConfig) -> Box<dyn EphemerisProvider> {
    log::warn!("chartd built without the swiss-ephemeris feature, serving sun-sign charts only");
    Box::new(UnavailableEphemeris::new("built without swiss-ephemeris"))
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub field: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    details: Vec<ErrorDetail>,
}

#[derive(Debug)]
pub enum ApiError {
    /// Malformed input, answered with 400
    Validation(Vec<ErrorDetail>),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "validation",
                    details,
                },
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "internal",
                    details: vec![ErrorDetail {
                        field: None,
                        message,
                    }],
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![ErrorDetail {
            field: None,
            message: rejection.body_text(),
        }])
    }
}

impl From<aphrodite::ValidationError> for ApiError {
    fn from(err: aphrodite::ValidationError) -> Self {
        ApiError::Validation(vec![ErrorDetail {
            field: Some(err.field().to_string()),
            message: err.to_string(),
        }])
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/birth-chart", post(birth_chart))
        .route("/health", get(health))
        .with_state(state)
}

async fn birth_chart(
    State(state): State<AppState>,
    payload: Result<Json<BirthChartRequest>, JsonRejection>,
) -> Result<Json<BirthChartResult>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        log::info!("rejected birth-chart body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;
    let input = BirthInput::try_from(req).map_err(|e| {
        log::info!("rejected birth-chart input: {}", e);
        ApiError::from(e)
    })?;

    log::debug!(
        "birth chart for {} {:?} {:?}",
        input.date_of_birth,
        input.time_of_birth,
        input.city_of_birth
    );

    // Ephemeris work is CPU-bound; keep it off the async workers
    let engine = state.engine.clone();
    let chart = tokio::task::spawn_blocking(move || engine.safe_compute(&input))
        .await
        .map_err(|e| {
            log::error!("chart task failed: {}", e);
            ApiError::Internal("chart computation did not complete".to_string())
        })?;

    Ok(Json(chart))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    provider: String,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        provider: state.engine.provider_name().to_string(),
    })
}

/// Run the HTTP server until ctrl-c
pub async fn serve(settings: &ServerSettings, state: AppState) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    log::info!("Listening on http://{}", settings.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("shutting down");
        })
        .await?;
    Ok(())
}
