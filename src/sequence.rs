//! Add-to-cart sequencing.
//!
//! One activation runs a fixed cycle of phases: the trigger goes busy at
//! once, the commit lands only after a processing delay, feedback follows
//! the commit, and the trigger is restored last. The posted notice dismisses
//! itself on its own task, independent of the restoration.

use std::{fmt, sync::Arc, time::Duration};

use smallvec::SmallVec;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::{
    cart::SharedCart,
    clock::Clock,
    notices::Notices,
    triggers::AddToCartRequest,
    ui::{CartCountDisplay, TriggerControl},
};

/// Phases of one add-to-cart activation, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePhase {
    /// No activation in flight.
    Idle,

    /// Trigger shows busy; the processing delay is running.
    Pending,

    /// The cart mutation has landed.
    Committing,

    /// Count update, acknowledgment and notice have been emitted.
    Notifying,
}

/// Timings and labels for add-to-cart sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Wait between activation and commit.
    pub processing_delay: Duration,

    /// How long a posted notice stays visible.
    pub notice_linger: Duration,

    /// Label shown on the trigger while busy.
    pub busy_label: String,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(800),
            notice_linger: Duration::from_secs(3),
            busy_label: "Adding...".to_string(),
        }
    }
}

/// The UI surfaces one sequence writes to.
#[derive(Clone)]
pub struct Collaborators {
    /// Control of the initiating trigger.
    pub trigger: Arc<dyn TriggerControl>,

    /// Cart count indicator.
    pub count_display: Arc<dyn CartCountDisplay>,

    /// Notice lifecycle over the notification panel.
    pub notices: Notices,
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators")
            .field("notices", &self.notices)
            .finish_non_exhaustive()
    }
}

/// One add-to-cart activation, driven phase by phase.
///
/// The cycle is strict: `Idle` to `Pending` to `Committing` to `Notifying`
/// and back to `Idle`, with no skips or reordering. The only suspension
/// point is the processing delay, and the cart mutation itself never
/// suspends, so interleaved sequences stay consistent.
pub struct AddToCartSequence {
    request: AddToCartRequest,
    cart: SharedCart,
    collaborators: Collaborators,
    clock: Arc<dyn Clock>,
    config: SequenceConfig,
    phase: SequencePhase,
    finished: bool,
    notice_dismissal: Option<JoinHandle<()>>,
}

impl AddToCartSequence {
    /// Create a sequence for one activation.
    #[must_use]
    pub fn new(
        request: AddToCartRequest,
        cart: SharedCart,
        collaborators: Collaborators,
        clock: Arc<dyn Clock>,
        config: SequenceConfig,
    ) -> Self {
        Self {
            request,
            cart,
            collaborators,
            clock,
            config,
            phase: SequencePhase::Idle,
            finished: false,
            notice_dismissal: None,
        }
    }

    /// The phase the sequence is currently in.
    #[must_use]
    pub fn phase(&self) -> SequencePhase {
        self.phase
    }

    /// The request this sequence was activated with.
    #[must_use]
    pub fn request(&self) -> &AddToCartRequest {
        &self.request
    }

    /// Advance the sequence by one transition and return the phase entered.
    ///
    /// A sequence runs one cycle; once it has come back to `Idle`, further
    /// steps do nothing.
    pub async fn step(&mut self) -> SequencePhase {
        if self.finished {
            return SequencePhase::Idle;
        }

        self.phase = match self.phase {
            SequencePhase::Idle => {
                self.collaborators.trigger.set_busy(&self.config.busy_label);

                SequencePhase::Pending
            }
            SequencePhase::Pending => {
                self.clock.sleep(self.config.processing_delay).await;

                let quantity = self.cart.add_item(
                    &self.request.product,
                    self.request.name.clone(),
                    self.request.unit_price,
                );

                debug!(product = %self.request.product, quantity, "commit");

                SequencePhase::Committing
            }
            SequencePhase::Committing => {
                self.collaborators
                    .count_display
                    .set_count(self.cart.total_count());
                self.collaborators.count_display.acknowledge();

                let message = format!("{} added to cart!", self.request.name);
                self.notice_dismissal = Some(self.collaborators.notices.post(&message));

                SequencePhase::Notifying
            }
            SequencePhase::Notifying => {
                self.collaborators.trigger.restore();
                self.finished = true;

                SequencePhase::Idle
            }
        };

        debug!(product = %self.request.product, phase = ?self.phase, "sequence advanced");

        self.phase
    }

    /// Drive the sequence through its whole cycle.
    pub async fn run(mut self) -> SequenceOutcome {
        let mut phases: SmallVec<[SequencePhase; 4]> = SmallVec::new();

        while !self.finished {
            phases.push(self.step().await);
        }

        SequenceOutcome {
            phases,
            notice_dismissal: self.notice_dismissal,
        }
    }
}

impl fmt::Debug for AddToCartSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddToCartSequence")
            .field("request", &self.request)
            .field("phase", &self.phase)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

/// What a completed sequence did.
#[derive(Debug)]
pub struct SequenceOutcome {
    phases: SmallVec<[SequencePhase; 4]>,
    notice_dismissal: Option<JoinHandle<()>>,
}

impl SequenceOutcome {
    /// Phases entered, in order.
    #[must_use]
    pub fn phases(&self) -> &[SequencePhase] {
        &self.phases
    }

    /// Take the handle of the notice dismissal task.
    ///
    /// Dropping the handle detaches the dismissal; it still runs.
    pub fn take_notice_dismissal(&mut self) -> Option<JoinHandle<()>> {
        self.notice_dismissal.take()
    }
}
