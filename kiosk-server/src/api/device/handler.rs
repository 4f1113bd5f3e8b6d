//! Device API Handlers

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use http::header;
use serde::Serialize;
use shared::ApiResponse;
use shared::intent::DeviceRequest;
use shared::models::DeviceSummary;
use shared::util::now_millis;

use crate::auth::cookie::{DEVICE_COOKIE_MAX_AGE_SECS, build_cookie};
use crate::auth::{DEVICE_COOKIE, Identity, PairOutcome};
use crate::core::ServerState;
use crate::utils::AppResult;

/// Body of a successful pair request
#[derive(Debug, Serialize)]
struct PairResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeviceList {
    devices: Vec<DeviceSummary>,
}

/// POST /api/device
pub async fn dispatch(
    State(state): State<ServerState>,
    identity: Identity,
    Json(request): Json<DeviceRequest>,
) -> AppResult<Response> {
    let pairing = state.pairing_service();

    match request {
        DeviceRequest::Pair { device_type } => {
            let outcome = pairing.pair(&identity, device_type, now_millis()).await?;
            match outcome {
                PairOutcome::Admin => Ok(Json(PairResponse {
                    message: None,
                    id: 0,
                    name: None,
                })
                .into_response()),
                PairOutcome::Existing(device) => Ok(Json(PairResponse {
                    message: None,
                    id: device.id,
                    name: Some(device.name),
                })
                .into_response()),
                PairOutcome::Paired { device, token } => {
                    let cookie = build_cookie(
                        DEVICE_COOKIE,
                        &token,
                        DEVICE_COOKIE_MAX_AGE_SECS,
                        state.config.secure_cookies(),
                    )?;
                    let body = PairResponse {
                        message: Some("Paired"),
                        id: device.id,
                        name: Some(device.name),
                    };
                    Ok(([(header::SET_COOKIE, cookie)], Json(body)).into_response())
                }
            }
        }
        DeviceRequest::Open => {
            identity.require_admin()?;
            pairing.open(now_millis()).await?;
            Ok(ApiResponse::message("Refreshed pair timer").into_response())
        }
        DeviceRequest::Query => {
            identity.require_admin()?;
            let devices = pairing.list().await?;
            Ok(Json(DeviceList { devices }).into_response())
        }
        DeviceRequest::Delete { device_id } => {
            identity.require_admin()?;
            pairing.delete(device_id).await?;
            Ok(ApiResponse::message("Deleted").into_response())
        }
        DeviceRequest::Rename { device_id, new_name } => {
            identity.require_admin()?;
            pairing.rename(device_id, &new_name).await?;
            Ok(ApiResponse::message("Renamed").into_response())
        }
    }
}
