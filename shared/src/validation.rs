//! Validation utilities for the Tea Factory Management Platform
//!
//! Form-level rules shared between the staff, supplier, and admin flows.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

/// How long a supply or inventory record stays editable after creation
pub const EDIT_WINDOW_MINUTES: i64 = 15;

/// Check whether a record created at `created_at` is still inside its
/// edit window at time `now`
pub fn is_within_edit_window(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - created_at <= Duration::minutes(EDIT_WINDOW_MINUTES) && now >= created_at
}

/// Strip everything but ASCII digits from a phone-like value
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate phone number format
/// Accepts: 0712345678, 071-234-5678, +94712345678
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let digits = digits_only(phone);

    // Local mobile: 10 digits starting with 0 (e.g., 0712345678)
    if digits.len() == 10 && digits.starts_with('0') {
        return Ok(());
    }
    // Without the leading zero: 9 digits
    if digits.len() == 9 && !digits.starts_with('0') {
        return Ok(());
    }
    // International format with country code: 11 digits starting with 94
    if digits.len() == 11 && digits.starts_with("94") {
        return Ok(());
    }

    Err("Invalid phone number format")
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate a supply code
/// Format: SUP-YYYY-NNNNN (e.g., SUP-2025-00042)
pub fn validate_supply_code(code: &str) -> Result<(), &'static str> {
    validate_record_code(code, "SUP", "Supply code must be in format SUP-YYYY-NNNNN")
}

/// Validate an inventory code
/// Format: INV-YYYY-NNNNN (e.g., INV-2025-00017)
pub fn validate_inventory_code(code: &str) -> Result<(), &'static str> {
    validate_record_code(code, "INV", "Inventory code must be in format INV-YYYY-NNNNN")
}

fn validate_record_code(
    code: &str,
    prefix: &str,
    format_error: &'static str,
) -> Result<(), &'static str> {
    let parts: Vec<&str> = code.split('-').collect();

    if parts.len() != 3 || parts[0] != prefix {
        return Err(format_error);
    }
    if parts[1].len() != 4 || !parts[1].chars().all(|c| c.is_ascii_digit()) {
        return Err("Invalid year in record code");
    }
    if parts[2].len() != 5 || !parts[2].chars().all(|c| c.is_ascii_digit()) {
        return Err("Invalid sequence number in record code");
    }

    Ok(())
}

/// Validate a delivered quantity in kilograms
pub fn validate_quantity_kg(quantity: Decimal) -> Result<(), &'static str> {
    if quantity < Decimal::ZERO {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a unit price
pub fn validate_unit_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Unit price cannot be negative");
    }
    Ok(())
}
