//! The publisher fans notifications out to every registered receiver.
//!
//! Receivers are held as shared borrows, never owned. The borrow checker
//! guarantees a receiver outlives its registration, and dropping the
//! publisher leaves the receivers untouched.

use crate::core::{NotificationReceiver, Severity};
use std::fmt;
use tracing::{debug, instrument, trace};

/// The observable subject.
///
/// Holds an ordered sequence of receiver references. The same receiver may be
/// registered more than once; it is then notified once per registration.
#[derive(Default)]
pub struct Publisher<'a> {
    receivers: Vec<&'a dyn NotificationReceiver>,
}

impl<'a> Publisher<'a> {
    /// Creates a publisher with no receivers.
    pub fn new() -> Self {
        Self {
            receivers: Vec::new(),
        }
    }

    /// Appends `receiver` to the end of the notification sequence.
    pub fn subscribe(&mut self, receiver: &'a dyn NotificationReceiver) {
        self.receivers.push(receiver);
        debug!(
            receiver = receiver.name(),
            count = self.receivers.len(),
            "Receiver subscribed"
        );
    }

    /// Removes every registration of `receiver`, compared by identity.
    ///
    /// Returns how many registrations were removed; zero if the receiver was
    /// never subscribed.
    pub fn unsubscribe(&mut self, receiver: &dyn NotificationReceiver) -> usize {
        let before = self.receivers.len();
        self.receivers.retain(|r| !same_receiver(*r, receiver));
        let removed = before - self.receivers.len();
        debug!(receiver = receiver.name(), removed, "Receiver unsubscribed");
        removed
    }

    /// Returns `true` if `receiver` is registered at least once.
    pub fn is_subscribed(&self, receiver: &dyn NotificationReceiver) -> bool {
        self.receivers.iter().any(|r| same_receiver(*r, receiver))
    }

    /// Number of registrations, counting duplicates.
    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }

    /// Delivers `message` to every receiver, in registration order, on the
    /// calling thread. A panicking handler is not caught.
    #[instrument(skip(self, message), fields(receivers = self.receivers.len()))]
    pub fn notify(&self, severity: Severity, message: &str) {
        for receiver in &self.receivers {
            trace!(receiver = receiver.name(), "Dispatching notification");
            receiver.on_notification(severity, message);
        }
    }

    pub fn notify_warning(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    pub fn notify_error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }

    pub fn notify_fatal(&self, message: &str) {
        self.notify(Severity::Fatal, message);
    }
}

impl fmt::Debug for Publisher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.receivers.iter().map(|r| r.name()).collect();
        f.debug_struct("Publisher")
            .field("receivers", &names)
            .finish()
    }
}

/// Identity comparison on the data pointer only; vtable pointers for the same
/// type are not guaranteed to be unique. Distinct zero-sized receivers may
/// share an address and so compare equal.
fn same_receiver(a: &dyn NotificationReceiver, b: &dyn NotificationReceiver) -> bool {
    std::ptr::addr_eq(a, b)
}
