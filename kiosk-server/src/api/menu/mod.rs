//! Menu API
//!
//! | Path | Method | Intents | Auth |
//! |------|--------|---------|------|
//! | /api/menu | POST | get, getsettings | none |
//! | /api/menu | POST | add, remove, modify, modifysettings | admin |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", post(handler::dispatch))
}
