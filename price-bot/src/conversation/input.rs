//! Fields the user fills in and the validation rules for each.

use thiserror::Error;

/// A value the conversation asks for. Only the first three are stored in the session;
/// the margin is used once and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Price,
    Weight,
    DeliveryPerKg,
    Margin,
}

impl Field {
    /// Field asked for after this one is accepted.
    pub fn next(self) -> Field {
        match self {
            Field::Price => Field::Weight,
            Field::Weight => Field::DeliveryPerKg,
            Field::DeliveryPerKg | Field::Margin => Field::Margin,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Price => "price",
            Field::Weight => "weight",
            Field::DeliveryPerKg => "delivery_per_kg",
            Field::Margin => "margin",
        }
    }

    /// Validates `text` as this field's value.
    pub fn parse(self, text: &str) -> Result<f64, InputError> {
        match self {
            Field::Price => parse_price(text),
            Field::Weight => parse_positive(text),
            Field::DeliveryPerKg | Field::Margin => parse_non_negative(text),
        }
    }
}

/// Why an input was rejected. Always recovered by re-prompting the same field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("input is not a number")]
    NotANumber,
    #[error("input must contain only digits")]
    NotDigits,
    #[error("number is too large")]
    TooLarge,
    #[error("value must be greater than 0")]
    NotPositive,
    #[error("value must be greater than or equal to 0")]
    Negative,
}

/// Price: ASCII decimal digits only. No sign, decimal point, exponent or whitespace.
/// Digit strings past the `f64` range (over ~309 digits) are `TooLarge`.
pub fn parse_price(text: &str) -> Result<f64, InputError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotDigits);
    }
    let value: f64 = text.parse().map_err(|_| InputError::NotDigits)?;
    if !value.is_finite() {
        return Err(InputError::TooLarge);
    }
    Ok(value)
}

/// Any finite float, surrounding whitespace ignored ("0.8", "1e3", "+2").
pub fn parse_number(text: &str) -> Result<f64, InputError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber),
    }
}

pub fn parse_positive(text: &str) -> Result<f64, InputError> {
    let value = parse_number(text)?;
    if value <= 0.0 {
        return Err(InputError::NotPositive);
    }
    Ok(value)
}

pub fn parse_non_negative(text: &str) -> Result<f64, InputError> {
    let value = parse_number(text)?;
    if value < 0.0 {
        return Err(InputError::Negative);
    }
    Ok(value)
}
