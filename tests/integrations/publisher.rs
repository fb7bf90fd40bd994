//! Integration tests for registration and dispatch.

#[path = "../helpers/mod.rs"]
mod helpers;

use alertcast::{NotificationReceiver, Publisher, Severity};
use helpers::mock_receiver::{
    delivery_order, journal, CountingReceiver, PanickingReceiver, RecordingReceiver,
};
use std::panic::{self, AssertUnwindSafe};

#[test]
fn test_every_subscription_is_notified_once_in_order() {
    let journal = journal();
    let a = RecordingReceiver::new("a", &journal);
    let b = RecordingReceiver::new("b", &journal);
    let c = RecordingReceiver::new("c", &journal);

    let mut publisher = Publisher::new();
    for receiver in [&c, &a, &b, &a] {
        publisher.subscribe(receiver);
    }

    publisher.notify_error("disk failure");

    assert_eq!(delivery_order(&journal), vec!["c", "a", "b", "a"]);
    assert!(journal
        .borrow()
        .iter()
        .all(|(_, severity, message)| *severity == Severity::Error && message == "disk failure"));
}

#[test]
fn test_each_emitter_calls_matching_handler_only() {
    let counter = CountingReceiver::new();
    let mut publisher = Publisher::new();
    publisher.subscribe(&counter);

    publisher.notify_warning("w");
    assert_eq!(
        (counter.warnings.get(), counter.errors.get(), counter.fatals.get()),
        (1, 0, 0)
    );

    publisher.notify_error("e");
    assert_eq!(
        (counter.warnings.get(), counter.errors.get(), counter.fatals.get()),
        (1, 1, 0)
    );

    publisher.notify_fatal("f");
    assert_eq!(
        (counter.warnings.get(), counter.errors.get(), counter.fatals.get()),
        (1, 1, 1)
    );
}

#[test]
fn test_unsubscribed_receiver_is_never_notified() {
    let kept = CountingReceiver::new();
    let removed = CountingReceiver::new();

    let mut publisher = Publisher::new();
    publisher.subscribe(&removed);
    publisher.subscribe(&kept);
    publisher.subscribe(&removed);

    assert_eq!(publisher.unsubscribe(&removed), 2);
    for severity in Severity::ALL {
        publisher.notify(severity, "after removal");
    }

    assert_eq!(removed.total(), 0);
    assert_eq!(kept.total(), 3);
}

#[test]
fn test_unsubscribe_never_subscribed_is_noop() {
    let subscribed = CountingReceiver::new();
    let stranger = CountingReceiver::new();

    let mut publisher = Publisher::new();
    publisher.subscribe(&subscribed);

    assert_eq!(publisher.unsubscribe(&stranger), 0);
    assert_eq!(publisher.len(), 1);
    assert!(publisher.is_subscribed(&subscribed));

    publisher.notify_warning("still delivered");
    assert_eq!(subscribed.warnings.get(), 1);
}

#[test]
fn test_resubscribe_after_unsubscribe() {
    let counter = CountingReceiver::new();
    let mut publisher = Publisher::new();

    publisher.subscribe(&counter);
    publisher.unsubscribe(&counter);
    publisher.subscribe(&counter);
    publisher.notify_fatal("back again");

    assert_eq!(counter.fatals.get(), 1);
}

#[test]
fn test_receiver_shared_between_publishers() {
    let counter = CountingReceiver::new();

    let mut first = Publisher::new();
    let mut second = Publisher::new();
    first.subscribe(&counter);
    second.subscribe(&counter);

    first.notify_error("one");
    second.notify_error("two");
    drop(first);
    second.notify_error("three");

    assert_eq!(counter.errors.get(), 3);
}

#[test]
fn test_panicking_handler_propagates() {
    let journal = journal();
    let before = RecordingReceiver::new("before", &journal);
    let failing = PanickingReceiver;
    let after = RecordingReceiver::new("after", &journal);

    let mut publisher = Publisher::new();
    publisher.subscribe(&before);
    publisher.subscribe(&failing);
    publisher.subscribe(&after);

    let result = panic::catch_unwind(AssertUnwindSafe(|| publisher.notify_fatal("boom")));

    assert!(result.is_err());
    // Dispatch stops at the failing receiver.
    assert_eq!(delivery_order(&journal), vec!["before"]);
}

#[test]
fn test_receivers_can_be_trait_objects_of_mixed_types() {
    let journal = journal();
    let recorder = RecordingReceiver::new("recorder", &journal);
    let counter = CountingReceiver::new();
    let receivers: Vec<&dyn NotificationReceiver> = vec![&recorder, &counter];

    let mut publisher = Publisher::new();
    for receiver in receivers {
        publisher.subscribe(receiver);
    }
    publisher.notify_warning("mixed");

    assert_eq!(delivery_order(&journal), vec!["recorder"]);
    assert_eq!(counter.warnings.get(), 1);
}
