//! Sales report API
//!
//! | Path | Method | Intents | Auth |
//! |------|--------|---------|------|
//! | /api/report | POST | items, itemscsv, hourly, weekly | admin |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/report", post(handler::dispatch))
}
