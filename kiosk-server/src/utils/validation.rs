//! Input validation helpers
//!
//! Centralized text length constants and payload checks. Everything here
//! returns `AppError` so handlers can `?` straight through.

use std::collections::HashSet;

use shared::models::{AuthCredentials, MenuObject, Order, Settings};
use shared::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: category, item, addon, device, customer
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

pub const MIN_USERNAME_LEN: usize = 4;
pub const MIN_PASSWORD_LEN: usize = 8;

// ── Numeric limits ──────────────────────────────────────────────────

/// Highest accepted price for an item or addon
pub const MAX_PRICE: f64 = 100_000.0;

/// Highest accepted quantity for one order part
pub const MAX_QUANTITY: u32 = 1_000;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(
            AppError::validation(format!("{field} must not be empty")).with_detail("field", field)
        );
    }
    validate_text(value, field, max_len)
}

/// Validate that a string is within the length limit. Empty is allowed.
pub fn validate_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_text(v, field, max_len),
        None => Ok(()),
    }
}

/// Prices must be finite and within `0..=MAX_PRICE`
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::new(ErrorCode::InvalidPrice).with_detail("field", field));
    }
    if value > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            format!("Price must not exceed {MAX_PRICE}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Tax rate is a percentage in 0..=100
pub fn validate_settings(settings: &Settings) -> Result<(), AppError> {
    let rate = settings.tax_rate;
    if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
        return Err(
            AppError::validation(format!("taxRate must be between 0 and 100, got {rate}"))
                .with_detail("field", "taxRate"),
        );
    }
    Ok(())
}

// ── Auth ────────────────────────────────────────────────────────────

/// Username: at least 4 ASCII letters or digits.
/// Password: at least 8 chars with a digit, a lowercase and an uppercase letter.
pub fn validate_credentials(credentials: &AuthCredentials) -> Result<(), AppError> {
    let username = &credentials.username;
    if username.len() < MIN_USERNAME_LEN
        || !username.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(AppError::validation(format!(
            "Username must be at least {MIN_USERNAME_LEN} letters or digits"
        ))
        .with_detail("field", "username"));
    }
    validate_text(username, "username", MAX_NAME_LEN)?;

    let password = &credentials.password;
    let strong = password.len() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase());
    if !strong {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters \
             and contain a digit, a lowercase and an uppercase letter"
        ))
        .with_detail("field", "password"));
    }
    validate_text(password, "password", MAX_PASSWORD_LEN)
}

// ── Menu ────────────────────────────────────────────────────────────

pub fn validate_menu_object(object: &MenuObject) -> Result<(), AppError> {
    match object {
        MenuObject::Category(category) => {
            validate_required_text(&category.name, "name", MAX_NAME_LEN)?;
            validate_text(&category.description, "description", MAX_NOTE_LEN)
        }
        MenuObject::Item(payload) => {
            let item = &payload.item;
            validate_required_text(&item.name, "name", MAX_NAME_LEN)?;
            validate_text(&item.description, "description", MAX_NOTE_LEN)?;
            validate_price(item.price, "price")
        }
        MenuObject::Addon(addon) => {
            validate_required_text(&addon.name, "name", MAX_NAME_LEN)?;
            validate_price(addon.price, "price")
        }
    }
}

// ── Orders ──────────────────────────────────────────────────────────

/// A submitted order needs parts, bounded quantities and unique part ids
pub fn validate_order(order: &Order) -> Result<(), AppError> {
    if order.parts.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }

    validate_text(&order.name, "name", MAX_NAME_LEN)?;
    validate_text(&order.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_text(&order.notes, "notes", MAX_NOTE_LEN)?;

    let mut seen = HashSet::with_capacity(order.parts.len());
    for part in &order.parts {
        if part.part_id == 0 {
            return Err(
                AppError::validation("partID must be at least 1").with_detail("field", "partID")
            );
        }
        if !seen.insert(part.part_id) {
            return Err(
                AppError::new(ErrorCode::DuplicatePartId).with_detail("partID", part.part_id)
            );
        }
        if part.quantity == 0 {
            return Err(
                AppError::new(ErrorCode::InvalidQuantity).with_detail("partID", part.part_id)
            );
        }
        if part.quantity > MAX_QUANTITY {
            return Err(AppError::with_message(
                ErrorCode::InvalidQuantity,
                format!("Quantity must be between 1 and {MAX_QUANTITY}"),
            )
            .with_detail("partID", part.part_id));
        }
        validate_required_text(&part.item_id, "itemID", MAX_NAME_LEN)?;
        validate_text(&part.notes, "notes", MAX_NOTE_LEN)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Addon, Category, OrderPart};

    fn creds(username: &str, password: &str) -> AuthCredentials {
        AuthCredentials {
            username: username.into(),
            password: password.into(),
        }
    }

    fn part(part_id: u32, quantity: u32) -> OrderPart {
        OrderPart {
            part_id,
            ..OrderPart::new("burger", quantity, vec![])
        }
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Burger", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        let err = validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).unwrap_err();
        assert!(err.message.contains("too long"));
        assert!(validate_optional_text(&None, "notes", 1).is_ok());
        assert!(validate_optional_text(&Some("ab".into()), "notes", 1).is_err());
    }

    #[test]
    fn test_credentials() {
        assert!(validate_credentials(&creds("admin", "Passw0rd")).is_ok());
        assert!(validate_credentials(&creds("adm", "Passw0rd")).is_err());
        assert!(validate_credentials(&creds("ad min", "Passw0rd")).is_err());
        assert!(validate_credentials(&creds("admin", "Pass0rd")).is_err());
        assert!(validate_credentials(&creds("admin", "password1")).is_err());
        assert!(validate_credentials(&creds("admin", "PASSWORD1")).is_err());
        assert!(validate_credentials(&creds("admin", "Password")).is_err());
    }

    #[test]
    fn test_prices_and_tax() {
        assert!(validate_price(0.0, "price").is_ok());
        assert_eq!(validate_price(-0.01, "price").unwrap_err().code, ErrorCode::InvalidPrice);
        assert!(validate_price(f64::NAN, "price").is_err());
        assert!(validate_price(MAX_PRICE, "price").is_ok());
        let err = validate_price(1e20, "price").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
        assert!(err.message.contains("exceed"));
        assert!(validate_settings(&Settings { tax_rate: 8.25 }).is_ok());
        assert!(validate_settings(&Settings { tax_rate: 100.5 }).is_err());
        assert!(validate_settings(&Settings { tax_rate: f64::INFINITY }).is_err());
    }

    #[test]
    fn test_menu_objects() {
        let addon = MenuObject::Addon(Addon {
            id: String::new(),
            name: "Cheese".into(),
            price: 0.49,
        });
        assert!(validate_menu_object(&addon).is_ok());

        let unnamed = MenuObject::Category(Category {
            id: String::new(),
            name: String::new(),
            description: String::new(),
        });
        assert_eq!(
            validate_menu_object(&unnamed).unwrap_err().code,
            ErrorCode::ValidationFailed
        );
    }

    #[test]
    fn test_orders() {
        let mut order = Order::default();
        assert_eq!(validate_order(&order).unwrap_err().code, ErrorCode::OrderEmpty);

        order.parts = vec![part(1, 2), part(2, 1)];
        assert!(validate_order(&order).is_ok());

        order.parts = vec![part(1, 2), part(1, 1)];
        assert_eq!(validate_order(&order).unwrap_err().code, ErrorCode::DuplicatePartId);

        order.parts = vec![part(1, 0)];
        assert_eq!(validate_order(&order).unwrap_err().code, ErrorCode::InvalidQuantity);

        order.parts = vec![part(1, MAX_QUANTITY)];
        assert!(validate_order(&order).is_ok());

        order.parts = vec![part(1, MAX_QUANTITY + 1)];
        let err = validate_order(&order).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert!(err.message.contains("between 1 and"));

        order.parts = vec![part(0, 1)];
        assert_eq!(validate_order(&order).unwrap_err().code, ErrorCode::ValidationFailed);
    }
}
