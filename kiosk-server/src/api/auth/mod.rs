//! Admin session API
//!
//! | Path | Method | Intents | Auth |
//! |------|--------|---------|------|
//! | /api/auth | POST | signup, login, query, logout | none |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/auth", post(handler::dispatch))
}
