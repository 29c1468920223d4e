//! Triggers

use rust_decimal::Decimal;
use thiserror::Error;

use crate::products::{PriceError, ProductId, parse_unit_price};

/// Errors raised while interpreting a trigger activation.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// The payload carried a price that failed validation (product id, cause).
    #[error("Invalid price for product {0}: {1}")]
    InvalidPrice(ProductId, #[source] PriceError),
}

/// Activation payload carried by an add-to-cart trigger.
///
/// Fields arrive as strings, mirroring the attribute data a page embeds on
/// its product cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerPayload {
    /// Product identifier.
    pub id: String,

    /// Product display name.
    pub name: String,

    /// Unit price in decimal string form.
    pub price: String,
}

impl TriggerPayload {
    /// Build a payload from its parts.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
        }
    }

    /// Interpret the payload as a typed request.
    ///
    /// # Errors
    ///
    /// Returns a [`TriggerError::InvalidPrice`] if the price string is not a
    /// non-negative decimal.
    pub fn parse(&self) -> Result<AddToCartRequest, TriggerError> {
        let product = ProductId::new(self.id.clone());

        let unit_price = parse_unit_price(&self.price)
            .map_err(|err| TriggerError::InvalidPrice(product.clone(), err))?;

        Ok(AddToCartRequest {
            product,
            name: self.name.clone(),
            unit_price,
        })
    }
}

/// A validated add-to-cart request.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCartRequest {
    /// Product to add.
    pub product: ProductId,

    /// Display name for the cart line.
    pub name: String,

    /// Validated unit price.
    pub unit_price: Decimal,
}
