//! Order API
//!
//! | Path | Method | Intents | Caller |
//! |------|--------|---------|--------|
//! | /api/order | POST | add | kiosk, manage |
//! | /api/order | POST | get, closeout | orders, manage |
//! | /api/order | POST | remove | manage |
//! | /api/order | POST | getall | admin |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/order", post(handler::dispatch))
}
