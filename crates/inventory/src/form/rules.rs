use chrono::NaiveDate;
use shared::{
    model::{ProductType, ProductTypeId},
    utils::parse_import_date,
};
use std::borrow::Cow;
use validator::ValidationError;

pub const NAME_MAX_CHARS: usize = 100;

fn fail(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(fail("required", "Product name is required"));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(fail(
            "max_length",
            "Product name must be at most 100 characters",
        ));
    }

    Ok(name.to_string())
}

/// `today` is the caller's current date; only dates strictly after it fail.
pub fn validate_import_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if raw.trim().is_empty() {
        return Err(fail("required", "Import date is required"));
    }

    let date = parse_import_date(raw)
        .ok_or_else(|| fail("invalid_date", "Import date is not a valid date"))?;

    if date > today {
        return Err(fail("max_date", "Import date cannot be later than today"));
    }

    Ok(date)
}

pub fn validate_sale_price(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(fail("required", "Sale price is required"));
    }

    let price = raw
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| fail("invalid_number", "Sale price must be a number"))?;

    if price <= 0.0 {
        return Err(fail("positive", "Sale price must be a positive number"));
    }

    Ok(price)
}

pub fn validate_quantity(raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(fail("required", "Quantity is required"));
    }

    let quantity = match raw.parse::<i64>() {
        Ok(quantity) => quantity,
        Err(_) => {
            let value = raw
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| fail("invalid_number", "Quantity must be a number"))?;

            if value.fract() != 0.0 {
                return Err(fail("integer", "Quantity must be an integer"));
            }
            if value.abs() > i64::MAX as f64 {
                return Err(fail("invalid_number", "Quantity must be a number"));
            }
            value as i64
        }
    };

    if quantity < 1 {
        return Err(fail("min", "Quantity must be greater than 0"));
    }

    Ok(quantity)
}

/// The selection arrives as the string value of a select control.
pub fn validate_product_type(
    raw: &str,
    available: &[ProductType],
) -> Result<ProductTypeId, ValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(fail("required_selection", "Please select a product type"));
    }

    raw.parse::<ProductTypeId>()
        .ok()
        .filter(|id| available.iter().any(|product_type| product_type.id == *id))
        .ok_or_else(|| {
            fail(
                "unknown_selection",
                "Selected product type is not available",
            )
        })
}
