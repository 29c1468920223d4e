//! Products

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to unit price validation.
#[derive(Debug, Error)]
pub enum PriceError {
    /// The price string could not be parsed as a decimal number.
    #[error("Unparsable price: {0:?}")]
    Unparsable(String),

    /// The price parsed to a negative amount.
    #[error("Negative price: {0}")]
    Negative(Decimal),
}

/// Opaque product identifier.
///
/// Ids are compared verbatim; the engine attaches no meaning to their
/// contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a unit price from its decimal string form.
///
/// Surrounding whitespace is ignored. Validation happens here, at the
/// boundary, so no malformed amount can ever reach a cart total.
///
/// # Errors
///
/// Returns a [`PriceError::Unparsable`] if the string is not a decimal
/// number, or a [`PriceError::Negative`] if it parses below zero.
pub fn parse_unit_price(price: &str) -> Result<Decimal, PriceError> {
    let amount = price
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| PriceError::Unparsable(price.to_string()))?;

    if amount < Decimal::ZERO {
        return Err(PriceError::Negative(amount));
    }

    Ok(amount)
}
