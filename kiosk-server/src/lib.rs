//! Kiosk Server - restaurant self-service kiosk backend
//!
//! # Overview
//!
//! JSON-over-HTTP service for three kinds of paired devices:
//!
//! - **kiosk**: customers browse the menu and submit orders
//! - **orders**: staff see open orders and close them out
//! - **manage**: the admin edits the menu, settings, devices and reads reports
//!
//! # Module layout
//!
//! ```text
//! kiosk-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── auth/          # admin session, device pairing, cookies
//! ├── services/      # menu service, image pipeline
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # logging, validation
//! └── db/            # embedded SurrealDB and repositories
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use auth::Identity;
pub use crate::core::{Config, Server, ServerError, ServerState, build_router};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, create the work directory and start logging
pub fn setup_environment() -> Result<Config, ServerError> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    init_logger_with_file(&config.log_level, config.log_json, Some(log_dir.as_path()))?;

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    __ __ _           __
   / //_/(_)___  ____/ /__
  / ,<  / / __ \/ ___/ //_/
 / /| |/ / /_/ (__  ) ,<
/_/ |_/_/\____/____/_/|_|
"#
    );
}
