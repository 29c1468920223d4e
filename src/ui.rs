//! UI collaborator contracts.
//!
//! The engine drives page chrome through these traits and never reads state
//! back from them. Implementations decide how busy states, counts and
//! notices actually look.

use mockall::automock;

/// Control handle for the element that initiated an add-to-cart sequence.
#[automock]
pub trait TriggerControl: Send + Sync {
    /// Put the trigger into its busy state, showing the given label.
    fn set_busy(&self, label: &str);

    /// Return the trigger to its ready state.
    fn restore(&self);
}

/// Write-only view of the cart count indicator.
#[automock]
pub trait CartCountDisplay: Send + Sync {
    /// Show the given running unit count.
    fn set_count(&self, count: u64);

    /// Play the indicator's acknowledgment affordance.
    fn acknowledge(&self);
}

/// Write-only view of the transient notification surface.
#[automock]
pub trait NotificationPanel: Send + Sync {
    /// Make the panel visible with the given message.
    fn show(&self, message: &str);

    /// Hide the panel.
    fn hide(&self);
}
