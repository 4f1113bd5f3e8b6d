//! Authentication Module
//!
//! Admin session and device pairing:
//! - [`Identity`] - who is calling (admin session and/or paired device)
//! - [`SessionService`] - admin signup, login and logout
//! - [`PairingService`] - pairing window and paired device records
//! - [`cookie`] - session and device cookies
//! - [`hashing`] - SHA-512 token and password digests

pub mod cookie;
pub mod hashing;
pub mod identity;
pub mod pairing;
pub mod session;

pub use cookie::{DEVICE_COOKIE, SESSION_COOKIE};
pub use identity::Identity;
pub use pairing::{PairOutcome, PairingService};
pub use session::SessionService;
