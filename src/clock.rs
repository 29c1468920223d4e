//! Clock

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;

/// A suspendable time source.
///
/// Sequences never touch the runtime timer directly; they sleep through this
/// trait, so tests can drive them on virtual time.
#[automock]
#[async_trait]
pub trait Clock: Send + Sync {
    /// Suspend the calling task for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
