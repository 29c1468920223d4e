//! Storefront session.

use std::{fmt, sync::Arc};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::{
    cart::{LineItem, SharedCart},
    clock::{Clock, TokioClock},
    notices::Notices,
    products::ProductId,
    sequence::{AddToCartSequence, Collaborators, SequenceConfig, SequenceOutcome},
    triggers::{TriggerError, TriggerPayload},
    ui::{CartCountDisplay, NotificationPanel, TriggerControl},
};

/// Errors raised while assembling or driving a storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A collaborator was not supplied to the builder (collaborator name).
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// The activation payload was rejected.
    #[error(transparent)]
    Trigger(#[from] TriggerError),
}

/// Builder for [`Storefront`].
///
/// The three UI collaborators are required; `build` rejects a missing one up
/// front instead of leaving a half wired session around.
#[derive(Default)]
pub struct StorefrontBuilder {
    trigger: Option<Arc<dyn TriggerControl>>,
    count_display: Option<Arc<dyn CartCountDisplay>>,
    notification_panel: Option<Arc<dyn NotificationPanel>>,
    clock: Option<Arc<dyn Clock>>,
    config: SequenceConfig,
}

impl StorefrontBuilder {
    /// Create a builder with default timings and no collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trigger control.
    #[must_use]
    pub fn trigger(mut self, trigger: Arc<dyn TriggerControl>) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Set the cart count display.
    #[must_use]
    pub fn count_display(mut self, count_display: Arc<dyn CartCountDisplay>) -> Self {
        self.count_display = Some(count_display);
        self
    }

    /// Set the notification panel.
    #[must_use]
    pub fn notification_panel(mut self, notification_panel: Arc<dyn NotificationPanel>) -> Self {
        self.notification_panel = Some(notification_panel);
        self
    }

    /// Override the clock. Defaults to the tokio timer.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Override the sequence timings and labels.
    #[must_use]
    pub fn config(mut self, config: SequenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Assemble the storefront.
    ///
    /// # Errors
    ///
    /// Returns a [`StorefrontError::MissingCollaborator`] if the trigger
    /// control, cart count display or notification panel was not supplied.
    pub fn build(self) -> Result<Storefront, StorefrontError> {
        let trigger = self
            .trigger
            .ok_or(StorefrontError::MissingCollaborator("trigger control"))?;

        let count_display = self
            .count_display
            .ok_or(StorefrontError::MissingCollaborator("cart count display"))?;

        let panel = self
            .notification_panel
            .ok_or(StorefrontError::MissingCollaborator("notification panel"))?;

        let clock = self.clock.unwrap_or_else(|| Arc::new(TokioClock));
        let notices = Notices::new(panel, Arc::clone(&clock), self.config.notice_linger);

        Ok(Storefront {
            cart: SharedCart::new(),
            collaborators: Collaborators {
                trigger,
                count_display,
                notices,
            },
            clock,
            config: self.config,
        })
    }
}

impl fmt::Debug for StorefrontBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorefrontBuilder")
            .field("trigger", &self.trigger.is_some())
            .field("count_display", &self.count_display.is_some())
            .field("notification_panel", &self.notification_panel.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A storefront session: one cart plus the page chrome around it.
pub struct Storefront {
    cart: SharedCart,
    collaborators: Collaborators,
    clock: Arc<dyn Clock>,
    config: SequenceConfig,
}

impl Storefront {
    /// Start building a storefront.
    #[must_use]
    pub fn builder() -> StorefrontBuilder {
        StorefrontBuilder::new()
    }

    /// Run a full add-to-cart sequence for the given activation.
    ///
    /// The payload is validated before anything else happens; a rejected
    /// payload leaves the cart and every collaborator untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`StorefrontError::Trigger`] if the payload's price is not
    /// a non-negative decimal.
    pub async fn add_to_cart(
        &self,
        payload: &TriggerPayload,
    ) -> Result<SequenceOutcome, StorefrontError> {
        let request = payload.parse()?;

        info!(product = %request.product, "add-to-cart activation");

        let sequence = AddToCartSequence::new(
            request,
            self.cart.clone(),
            self.collaborators.clone(),
            Arc::clone(&self.clock),
            self.config.clone(),
        );

        Ok(sequence.run().await)
    }

    /// Remove a product's line from the cart.
    ///
    /// The count display is refreshed when a line was actually removed;
    /// removing an absent product is a no-op. Returns the removed line, if
    /// any.
    pub fn remove_from_cart(&self, product: &ProductId) -> Option<LineItem> {
        let removed = self.cart.remove_item(product)?;

        self.collaborators
            .count_display
            .set_count(self.cart.total_count());

        info!(product = %product, "removed from cart");

        Some(removed)
    }

    /// Empty the cart and refresh the count display.
    pub fn clear_cart(&self) {
        self.cart.clear();
        self.collaborators.count_display.set_count(0);

        info!("cart cleared");
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    /// Running count of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.total_count()
    }

    /// Snapshot of the cart lines in display order.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        self.cart.items()
    }

    /// Handle to the shared cart.
    #[must_use]
    pub fn cart(&self) -> &SharedCart {
        &self.cart
    }

    /// The sequence timings and labels in effect.
    #[must_use]
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }
}

impl fmt::Debug for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("cart", &self.cart)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
