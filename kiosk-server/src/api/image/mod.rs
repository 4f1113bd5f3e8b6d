//! Item image API
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | /api/image/{id} | GET | Stored JPEG | none |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/image/{id}", get(handler::get_by_id))
}
