//! Console collaborators.
//!
//! Terminal implementations of the UI contracts. They back the demo
//! programs and double as readable fakes: every state change becomes one
//! prefixed line on the writer.

use std::{
    io::Write,
    sync::{Mutex, PoisonError},
};

use crate::ui::{CartCountDisplay, NotificationPanel, TriggerControl};

/// Trigger control that narrates its state changes to a writer.
#[derive(Debug)]
pub struct ConsoleTrigger<W> {
    ready_label: String,
    out: Mutex<W>,
}

impl<W> ConsoleTrigger<W> {
    /// Create a console trigger with the label it shows when ready.
    pub fn new(ready_label: impl Into<String>, out: W) -> Self {
        Self {
            ready_label: ready_label.into(),
            out: Mutex::new(out),
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> TriggerControl for ConsoleTrigger<W> {
    fn set_busy(&self, label: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);

        _ = writeln!(out, "[trigger] {label}");
    }

    fn restore(&self) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);

        _ = writeln!(out, "[trigger] {}", self.ready_label);
    }
}

/// Cart count indicator that prints count changes.
#[derive(Debug)]
pub struct ConsoleCartCount<W> {
    out: Mutex<W>,
}

impl<W> ConsoleCartCount<W> {
    /// Create a console count indicator over the given writer.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> CartCountDisplay for ConsoleCartCount<W> {
    fn set_count(&self, count: u64) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);

        _ = writeln!(out, "[cart] {count} in cart");
    }

    fn acknowledge(&self) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);

        _ = writeln!(out, "[cart] updated");
    }
}

/// Notification panel that prints notices as they come and go.
#[derive(Debug)]
pub struct ConsoleNotificationPanel<W> {
    out: Mutex<W>,
}

impl<W> ConsoleNotificationPanel<W> {
    /// Create a console notification panel over the given writer.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> NotificationPanel for ConsoleNotificationPanel<W> {
    fn show(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);

        _ = writeln!(out, "[notice] {message}");
    }

    fn hide(&self) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);

        _ = writeln!(out, "[notice] (dismissed)");
    }
}
