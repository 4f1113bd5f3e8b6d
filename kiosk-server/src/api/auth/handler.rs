//! Auth API Handlers

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use http::{StatusCode, header};
use shared::ApiResponse;
use shared::intent::AuthRequest;
use shared::util::now_millis;

use crate::auth::Identity;
use crate::auth::SESSION_COOKIE;
use crate::auth::cookie::{build_cookie, expire_cookie};
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/auth
pub async fn dispatch(
    State(state): State<ServerState>,
    identity: Identity,
    Json(request): Json<AuthRequest>,
) -> AppResult<Response> {
    let secure = state.config.secure_cookies();

    match request {
        AuthRequest::Signup { credentials } => {
            state
                .session_service()
                .signup(&credentials, now_millis())
                .await?;
            Ok(ApiResponse::message(format!(
                "Admin account created successfully: {}",
                credentials.username
            ))
            .into_response())
        }
        AuthRequest::Query => {
            let status = if identity.is_admin() {
                StatusCode::OK
            } else {
                StatusCode::UNAUTHORIZED
            };
            Ok((status, Json(identity.session)).into_response())
        }
        AuthRequest::Login { credentials } => {
            let token = state
                .session_service()
                .login(&credentials, now_millis())
                .await?;
            let cookie = build_cookie(
                SESSION_COOKIE,
                &token,
                state.config.session_timeout_secs,
                secure,
            )?;
            Ok((
                [(header::SET_COOKIE, cookie)],
                ApiResponse::message(format!("Logged in user {}", credentials.username)),
            )
                .into_response())
        }
        AuthRequest::Logout => {
            state.session_service().logout(&identity).await?;
            let cookie = expire_cookie(SESSION_COOKIE, secure)?;
            Ok(([(header::SET_COOKIE, cookie)], ApiResponse::message("Logged out")).into_response())
        }
    }
}
