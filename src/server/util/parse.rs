use chrono::NaiveDate;

use crate::{model::order::CarIdInput, server::error::validation::ValidationError};

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a path identifier into the entity's integer key.
///
/// # Arguments
/// - `value` - Raw path segment
/// - `field` - Wire name used in the error code, e.g. `cars-id`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed identifier
/// - `Err(ValidationError::Missing)` - Value was blank
/// - `Err(ValidationError::WrongType)` - Value is not an integer
pub fn parse_id(value: &str, field: &'static str) -> Result<i32, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Missing(field));
    }

    value
        .parse::<i32>()
        .map_err(|_| ValidationError::WrongType(field))
}

/// Parses a car reference sent as a JSON number or numeric string.
///
/// Zero and empty strings count as missing.
pub fn parse_car_id(value: &CarIdInput) -> Result<i32, ValidationError> {
    const FIELD: &str = "car-id";

    match value {
        CarIdInput::Number(0) => Err(ValidationError::Missing(FIELD)),
        CarIdInput::Number(n) => i32::try_from(*n).map_err(|_| ValidationError::WrongType(FIELD)),
        CarIdInput::Text(s) => match parse_id(s, FIELD)? {
            0 => Err(ValidationError::Missing(FIELD)),
            id => Ok(id),
        },
        CarIdInput::Other(_) => Err(ValidationError::WrongType(FIELD)),
    }
}

/// Parses a required `YYYY-MM-DD` date.
///
/// Month and day must be zero-padded; `2024-3-1` is rejected.
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(ValidationError::Missing)` - Value was blank
/// - `Err(ValidationError::FailedParsing)` - Value is not a valid calendar date
pub fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Missing(field));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == value)
        .ok_or(ValidationError::FailedParsing(field))
}

/// Parses an optional `YYYY-MM-DD` date where blank means "not supplied".
pub fn parse_optional_date(
    value: &str,
    field: &'static str,
) -> Result<Option<NaiveDate>, ValidationError> {
    if value.trim().is_empty() {
        return Ok(None);
    }

    parse_date(value, field).map(Some)
}

/// Trims a required text field.
pub fn require_text(value: &str, field: &'static str) -> Result<String, ValidationError> {
    optional_text(value).ok_or(ValidationError::Missing(field))
}

/// Trims a text field, treating blank as "not supplied".
pub fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
