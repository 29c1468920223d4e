//! End-to-end storefront session flows.
//!
//! Scenario: a shopper on the shoe storefront adds the same sneaker twice,
//! picks up a boot alongside, and later prunes the cart.
//!
//! Expected cart accounting after the double add:
//!
//! - One line for `p1` (Sneaker), quantity 2
//! - Running count: 2
//! - Total: 49.90 * 2 = 99.80
//!
//! Every activation walks the same feedback cycle: busy label at once, commit
//! only after the processing delay, then count refresh, acknowledgment and a
//! named notice, and trigger restoration last.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use rust_decimal::Decimal;
use testresult::TestResult;

use vitrine::{
    catalog::Catalog,
    products::ProductId,
    sequence::SequencePhase,
    session::{Storefront, StorefrontError},
    summary,
    triggers::TriggerPayload,
    ui::{CartCountDisplay, NotificationPanel, TriggerControl},
};

#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    fn push(&self, event: impl Into<String>) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.into());
    }

    fn events(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

struct LoggingTrigger(EventLog);

impl TriggerControl for LoggingTrigger {
    fn set_busy(&self, label: &str) {
        self.0.push(format!("busy:{label}"));
    }

    fn restore(&self) {
        self.0.push("restore");
    }
}

struct LoggingCount(EventLog);

impl CartCountDisplay for LoggingCount {
    fn set_count(&self, count: u64) {
        self.0.push(format!("count:{count}"));
    }

    fn acknowledge(&self) {
        self.0.push("ack");
    }
}

struct LoggingPanel(EventLog);

impl NotificationPanel for LoggingPanel {
    fn show(&self, message: &str) {
        self.0.push(format!("show:{message}"));
    }

    fn hide(&self) {
        self.0.push("hide");
    }
}

fn storefront(log: &EventLog) -> Result<Storefront, StorefrontError> {
    Storefront::builder()
        .trigger(Arc::new(LoggingTrigger(log.clone())))
        .count_display(Arc::new(LoggingCount(log.clone())))
        .notification_panel(Arc::new(LoggingPanel(log.clone())))
        .build()
}

fn sneaker_payload() -> TriggerPayload {
    TriggerPayload::new("p1", "Sneaker", "49.90")
}

#[tokio::test(start_paused = true)]
async fn adding_the_same_product_twice_merges_into_one_line() -> TestResult {
    let log = EventLog::default();
    let storefront = storefront(&log)?;

    let first = storefront.add_to_cart(&sneaker_payload()).await?;
    let second = storefront.add_to_cart(&sneaker_payload()).await?;

    assert_eq!(first.phases(), second.phases());

    let items = storefront.items();

    assert_eq!(items.len(), 1);

    let line = items.first().ok_or("expected one cart line")?;

    assert_eq!(line.product(), &ProductId::new("p1"));
    assert_eq!(line.name(), "Sneaker");
    assert_eq!(line.quantity(), 2);

    assert_eq!(storefront.item_count(), 2);
    assert_eq!(storefront.cart_total(), Decimal::new(9980, 2));

    // Both activations notified with the product's name.
    let notices: Vec<String> = log
        .events()
        .into_iter()
        .filter(|event| event.starts_with("show:"))
        .collect();

    assert_eq!(notices, vec!["show:Sneaker added to cart!".to_string(); 2]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn interleaved_activations_both_commit() -> TestResult {
    let log = EventLog::default();
    let storefront = Arc::new(storefront(&log)?);

    let sneaker = TriggerPayload::new("p1", "Sneaker", "49.90");
    let boot = TriggerPayload::new("p2", "Leather Boot", "129.90");

    let first = {
        let storefront = Arc::clone(&storefront);

        tokio::spawn(async move { storefront.add_to_cart(&sneaker).await })
    };

    let second = {
        let storefront = Arc::clone(&storefront);

        tokio::spawn(async move { storefront.add_to_cart(&boot).await })
    };

    tokio::task::yield_now().await;

    // Both triggers are busy; neither activation has committed yet.
    let busy_count = log
        .events()
        .iter()
        .filter(|event| event.as_str() == "busy:Adding...")
        .count();

    assert_eq!(busy_count, 2);
    assert_eq!(storefront.item_count(), 0);

    tokio::time::advance(Duration::from_millis(800)).await;

    let first = first.await??;
    let second = second.await??;

    assert_eq!(first.phases().last(), Some(&SequencePhase::Idle));
    assert_eq!(second.phases().last(), Some(&SequencePhase::Idle));

    assert_eq!(storefront.item_count(), 2);
    assert_eq!(storefront.items().len(), 2);
    assert_eq!(storefront.cart_total(), Decimal::new(17980, 2));

    // Commits are serialised: the running count went 1, then 2.
    let counts: Vec<String> = log
        .events()
        .into_iter()
        .filter(|event| event.starts_with("count:"))
        .collect();

    assert_eq!(counts, ["count:1", "count:2"].map(String::from));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn remove_and_clear_refresh_the_count_display() -> TestResult {
    let log = EventLog::default();
    let storefront = storefront(&log)?;

    storefront.add_to_cart(&sneaker_payload()).await?;

    storefront
        .add_to_cart(&TriggerPayload::new("p2", "Leather Boot", "129.90"))
        .await?;

    let removed = storefront
        .remove_from_cart(&ProductId::new("p1"))
        .ok_or("expected the sneaker line to be removed")?;

    assert_eq!(removed.name(), "Sneaker");
    assert_eq!(removed.quantity(), 1);
    assert_eq!(storefront.item_count(), 1);

    storefront.clear_cart();

    assert_eq!(storefront.item_count(), 0);
    assert_eq!(storefront.cart_total(), Decimal::ZERO);
    assert!(storefront.items().is_empty());

    let counts: Vec<String> = log
        .events()
        .into_iter()
        .filter(|event| event.starts_with("count:"))
        .collect();

    assert_eq!(
        counts,
        ["count:1", "count:2", "count:1", "count:0"].map(String::from)
    );

    Ok(())
}

#[tokio::test]
async fn invalid_price_payload_is_rejected_up_front() -> TestResult {
    let log = EventLog::default();
    let storefront = storefront(&log)?;

    let result = storefront
        .add_to_cart(&TriggerPayload::new("p9", "Mystery Shoe", "NaN"))
        .await;

    assert!(
        matches!(result, Err(StorefrontError::Trigger(_))),
        "expected Trigger error, got {result:?}"
    );
    assert!(storefront.items().is_empty());
    assert!(
        log.events().is_empty(),
        "a rejected payload must not touch any collaborator"
    );

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn catalog_payloads_flow_through_the_session() -> TestResult {
    let log = EventLog::default();
    let storefront = storefront(&log)?;

    let catalog = Catalog::from_path("fixtures/catalog/shoes.yml")?;
    let payload = catalog.trigger_payload(&ProductId::new("canvas-slip-on"))?;

    storefront.add_to_cart(&payload).await?;

    assert_eq!(storefront.cart_total(), Decimal::new(3990, 2));
    assert!(
        log.events()
            .contains(&"show:Canvas Slip-On added to cart!".to_string())
    );

    let rendered = storefront
        .cart()
        .with(|cart| summary::render_summary(cart))?;

    assert!(rendered.contains("Canvas Slip-On"));
    assert!(rendered.contains("Total: 39.90"));

    Ok(())
}
