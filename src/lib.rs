//! Vitrine
//!
//! Vitrine is a headless storefront engine: an in-memory shopping cart plus the add-to-cart feedback sequencing a storefront page drives around it.

pub mod cart;
pub mod catalog;
pub mod clock;
pub mod console;
pub mod notices;
pub mod prelude;
pub mod products;
pub mod sequence;
pub mod session;
pub mod summary;
pub mod triggers;
pub mod ui;
pub mod utils;
