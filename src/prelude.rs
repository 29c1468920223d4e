//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, LineItem, SharedCart},
    catalog::{Catalog, CatalogError, CatalogProduct},
    clock::{Clock, TokioClock},
    console::{ConsoleCartCount, ConsoleNotificationPanel, ConsoleTrigger},
    notices::Notices,
    products::{PriceError, ProductId, parse_unit_price},
    sequence::{
        AddToCartSequence, Collaborators, SequenceConfig, SequenceOutcome, SequencePhase,
    },
    session::{Storefront, StorefrontBuilder, StorefrontError},
    summary::{SummaryError, render_summary, write_summary},
    triggers::{AddToCartRequest, TriggerError, TriggerPayload},
    ui::{CartCountDisplay, NotificationPanel, TriggerControl},
};
