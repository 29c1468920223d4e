//! Notices

use std::{fmt, sync::Arc, time::Duration};

use tokio::task::JoinHandle;
use tracing::debug;

use crate::{clock::Clock, ui::NotificationPanel};

/// Transient notification lifecycle over a [`NotificationPanel`].
///
/// Posting a notice shows the panel immediately and schedules its dismissal
/// after a fixed linger period on its own task. The poster never waits for
/// the notice to disappear.
#[derive(Clone)]
pub struct Notices {
    panel: Arc<dyn NotificationPanel>,
    clock: Arc<dyn Clock>,
    linger: Duration,
}

impl Notices {
    /// Create a notice lifecycle with the given linger period.
    #[must_use]
    pub fn new(panel: Arc<dyn NotificationPanel>, clock: Arc<dyn Clock>, linger: Duration) -> Self {
        Self {
            panel,
            clock,
            linger,
        }
    }

    /// How long a posted notice stays visible.
    #[must_use]
    pub fn linger(&self) -> Duration {
        self.linger
    }

    /// Show a message and schedule its dismissal.
    ///
    /// The dismissal runs on a task spawned onto the current tokio runtime;
    /// the returned handle lets callers observe the notice disappearing.
    pub fn post(&self, message: &str) -> JoinHandle<()> {
        self.panel.show(message);

        debug!(message, linger = ?self.linger, "notice posted");

        let panel = Arc::clone(&self.panel);
        let clock = Arc::clone(&self.clock);
        let linger = self.linger;

        tokio::spawn(async move {
            clock.sleep(linger).await;
            panel.hide();

            debug!("notice dismissed");
        })
    }
}

impl fmt::Debug for Notices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notices")
            .field("linger", &self.linger)
            .finish_non_exhaustive()
    }
}
