use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::{
    model::member::NumericInput,
    server::error::{internal::InternalError, AppError},
};

/// Parses an enum stored as a string column.
///
/// # Arguments
/// - `column` - Column name, used in the error message
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(ParseStoredValue))` - Stored value is outside the domain
pub fn parse_stored<T>(column: &'static str, value: String) -> Result<T, AppError>
where
    T: FromStr<Err = String>,
{
    value.parse::<T>().map_err(|reason| {
        InternalError::ParseStoredValue {
            column,
            value,
            reason,
        }
        .into()
    })
}

/// Decodes a JSON sub-document column into its typed form.
///
/// # Returns
/// - `Ok(T)` - Decoded document
/// - `Err(AppError::InternalErr(CorruptDocument))` - Stored JSON has an unexpected shape
pub fn parse_document<T: DeserializeOwned>(
    column: &'static str,
    value: serde_json::Value,
) -> Result<T, AppError> {
    serde_json::from_value(value)
        .map_err(|source| InternalError::CorruptDocument { column, source }.into())
}

/// Normalizes an email for storage and lookup: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Coerces a number supplied either as a JSON number or a numeric string.
///
/// # Returns
/// - `Ok(None)` - No value supplied (absent or blank string)
/// - `Ok(Some(f64))` - Finite number
/// - `Err(String)` - Value is not a finite number
pub fn coerce_number(input: Option<&NumericInput>) -> Result<Option<f64>, String> {
    let value = match input {
        None => return Ok(None),
        Some(NumericInput::Number(n)) => *n,
        Some(NumericInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", text))?
        }
    };

    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err("value must be a finite number".to_string())
    }
}
