//! Order math
//!
//! - [`math`]: gap-filling id allocation and saturating sums
//! - [`money`]: Decimal conversions and dollar formatting
//! - [`parts`]: immutable part edits, price aggregation, tax
//! - [`format`]: order view with menu references resolved
//! - [`draft`]: kiosk-side in-progress order

pub mod draft;
pub mod format;
pub mod math;
pub mod money;
pub mod parts;

// Re-exports
pub use draft::{DRAFT_STORAGE_KEY, OrderDraft};
pub use format::{AddonCount, FormattedOrder, FormattedPart, format_order};
pub use math::{lowest_missing_value, sum};
pub use money::{format_money, line_total, to_decimal, to_f64};
pub use parts::*;
