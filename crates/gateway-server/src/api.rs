use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain::{DeviceInformation, DomainError, FlagSummary, Readings, Settings};

use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/summary", get(get_summary))
        .route("/mode/{flag}", get(get_flag).post(set_flag))
        .route("/setting/{setting}/{value}", post(set_setting))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Domain errors mapped to HTTP statuses: validation failures are the
/// client's fault, transport failures are the device's.
struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::UnknownIdentifier(_) | DomainError::InvalidValue(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::TransportError(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

async fn root() -> &'static str {
    "eda-modbus-gateway"
}

// Serialized as a struct, not a serde_json map, so the section and field
// ordering of the domain values survives encoding.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    flags: FlagSummary,
    readings: Readings,
    settings: Settings,
    device_information: DeviceInformation,
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let flags = state.gateway.flag_summary().await?;
    let readings = state.gateway.readings().await?;
    let settings = state.gateway.settings().await?;
    let device_information = state.gateway.device_information().await?;

    Ok(Json(SummaryResponse {
        flags,
        readings,
        settings,
        device_information,
    }))
}

async fn get_flag(
    Path(flag): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let active = state.gateway.get_flag(&flag).await?;

    Ok(Json(json!({ "active": active })))
}

#[derive(Deserialize)]
struct SetFlagRequest {
    active: bool,
}

async fn set_flag(
    Path(flag): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetFlagRequest>,
) -> Result<Json<FlagSummary>, ApiError> {
    state.gateway.set_flag(&flag, request.active).await?;

    Ok(Json(state.gateway.flag_summary().await?))
}

async fn set_setting(
    Path((setting, value)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Settings>, ApiError> {
    state.gateway.set_setting(&setting, &value).await?;

    Ok(Json(state.gateway.settings().await?))
}
