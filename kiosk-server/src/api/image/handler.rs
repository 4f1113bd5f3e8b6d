//! Image API Handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use http::header;

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/image/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let jpeg = state.menu_service().image(&id).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg"),
            // Images are never rewritten in place, a new upload gets a new id
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        jpeg,
    )
        .into_response())
}
