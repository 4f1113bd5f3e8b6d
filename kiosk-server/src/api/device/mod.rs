//! Device pairing API
//!
//! | Path | Method | Intents | Auth |
//! |------|--------|---------|------|
//! | /api/device | POST | pair | device token or open window |
//! | /api/device | POST | open, query, delete, rename | admin |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/device", post(handler::dispatch))
}
