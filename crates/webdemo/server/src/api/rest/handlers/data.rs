//! Data service handlers

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use crate::reflect::reflect;
use crate::traffic::log_http_traffic;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::time::Instant;
use webdemo_types::{
    BuildInfo, DataMessage, GenericRequest, GenericResponse, NumberWrapper, Payload, SystemInfo,
};

/// Value served by the very-long-number endpoint; exceeds 2^53.
pub const VERY_LONG_NUMBER: i64 = 4_855_910_445_484_272_258;

/// Build metadata of the running binary
pub async fn build_info(State(state): State<AppState>) -> Json<BuildInfo> {
    tracing::info!("Build info requested");

    match &state.build {
        Some(props) => {
            tracing::info!(
                git_full_hash = props.git_full_hash.as_deref().unwrap_or(""),
                git_branch_name = props.git_branch_name.as_deref().unwrap_or(""),
                "Serving build info"
            );
            Json(props.to_info())
        }
        None => Json(BuildInfo::default()),
    }
}

/// Identity and uptime of this instance
pub async fn system_info(State(state): State<AppState>) -> Json<SystemInfo> {
    let started = Instant::now();
    let uptime = state.uptime_millis();
    tracing::info!(app_id = %state.identity.id, uptime, "System info requested");

    let info = SystemInfo {
        id: state.identity.id.clone(),
        name: state.identity.name.clone(),
        version: state.identity.version.clone(),
        timestamp: chrono::Utc::now().timestamp_millis(),
        uptime,
    };

    log_http_traffic(started, "System info executed");
    Json(info)
}

/// Echo a posted message
pub async fn data_message(Json(message): Json<DataMessage>) -> Json<DataMessage> {
    let started = Instant::now();
    tracing::info!(data = %message.data, "Data message received");

    let response = DataMessage::new(message.data);

    log_http_traffic(started, "Data message executed");
    Json(response)
}

/// Echo a path segment
pub async fn echo(Path(message): Path<String>) -> Json<DataMessage> {
    let started = Instant::now();
    tracing::info!(message = %message, "Echo requested");

    let response = DataMessage::new(message);

    log_http_traffic(started, "Echo executed");
    Json(response)
}

/// Reflect a generic envelope back to the caller
pub async fn generics(
    Json(request): Json<GenericRequest<Value>>,
) -> ApiResult<Json<GenericResponse<Payload>>> {
    tracing::info!(name = %request.name, "Generic payload received");
    Ok(Json(reflect(request)?))
}

/// A number that loses precision when parsed as a double
pub async fn very_long_number() -> Json<NumberWrapper> {
    Json(NumberWrapper {
        number: VERY_LONG_NUMBER,
    })
}
