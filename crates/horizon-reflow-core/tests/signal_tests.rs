//! Tests for signals and the deferred task queue.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use horizon_reflow_core::{ContainerId, CoreError, DeferredQueue, Signal};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_signal_delivers_to_every_slot() {
    init_tracing();
    let signal: Signal<String> = Signal::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for tag in ["a", "b"] {
        let seen = Arc::clone(&seen);
        signal.connect(move |screen: &String| seen.lock().push(format!("{tag}:{screen}")));
    }

    assert_eq!(signal.emit("mobile".to_owned()), 2);
    assert_eq!(*seen.lock(), ["a:mobile", "b:mobile"]);
}

#[test]
fn test_signal_disconnect() {
    let signal: Signal<ContainerId> = Signal::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let id = signal.connect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    signal.emit(ContainerId::next());
    assert!(signal.disconnect(id));
    assert!(!signal.disconnect(id));
    assert!(matches!(signal.try_disconnect(id), Err(CoreError::InvalidConnection)));
    assert_eq!(signal.emit(ContainerId::next()), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_slot_may_disconnect_during_emit() {
    let signal = Arc::new(Signal::<()>::new());
    let own_id = Arc::new(Mutex::new(None));

    let weak = Arc::downgrade(&signal);
    let slot_id = Arc::clone(&own_id);
    let id = signal.connect(move |_| {
        if let (Some(signal), Some(id)) = (weak.upgrade(), *slot_id.lock()) {
            signal.disconnect(id);
        }
    });
    *own_id.lock() = Some(id);

    assert_eq!(signal.emit(()), 1);
    assert_eq!(signal.connection_count(), 0);
}

#[test]
fn test_blocked_signal_skips_slots() {
    let signal: Signal<()> = Signal::new();
    signal.connect(|_| {});
    signal.set_blocked(true);
    assert_eq!(signal.emit(()), 0);
    signal.set_blocked(false);
    assert_eq!(signal.emit(()), 1);
}

#[test]
fn test_deferred_runs_in_order() {
    init_tracing();
    let mut queue = DeferredQueue::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    for i in 0..3 {
        let log = Arc::clone(&log);
        queue.post(move || log.lock().push(i));
    }

    assert_eq!(queue.pending_count(), 3);
    assert_eq!(queue.process_all(), 3);
    assert!(!queue.has_pending());
    assert_eq!(*log.lock(), [0, 1, 2]);
}

#[test]
fn test_deferred_cancel() {
    let mut queue = DeferredQueue::new();
    let ran = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ran);
    let id = queue.post(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(queue.cancel(id));
    assert!(matches!(queue.try_cancel(id), Err(CoreError::TaskNotFound(_))));
    assert_eq!(queue.process_all(), 0);
    assert_eq!(ran.load(Ordering::SeqCst), 0);
}

#[test]
fn test_container_ids_unique() {
    let a = ContainerId::next();
    let b = ContainerId::next();
    assert_ne!(a, b);
    assert!(a.to_string().starts_with("container#"));
}
