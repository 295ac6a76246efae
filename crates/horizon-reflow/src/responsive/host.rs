//! The seam between controllers and the host runtime.
//!
//! Controllers never reach into a process-wide bus. They receive an
//! [`HostEvents`] implementation and use it to read the active screen,
//! subscribe to notifications and schedule work after the current redraw.
//! [`HostBus`] is the in-process implementation built on the core
//! [`Signal`] and [`DeferredQueue`].

use parking_lot::Mutex;

use horizon_reflow_core::logging::targets;
use horizon_reflow_core::{ConnectionId, ContainerId, DeferredQueue, DeferredTask, Signal};

/// Slot receiving the new active screen name.
pub type ScreenSlot = Box<dyn Fn(&str) + Send + Sync>;

/// Slot receiving the container whose children were redrawn.
pub type RedrawSlot = Box<dyn Fn(ContainerId) + Send + Sync>;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscription {
    /// A screen-changed subscription.
    ScreenChanged(ConnectionId),
    /// A children-redrawn subscription.
    ChildrenRedrawn(ConnectionId),
}

/// Notifications and services a host provides to layout controllers.
pub trait HostEvents: Send + Sync {
    /// Name of the currently active screen, if known.
    fn active_screen(&self) -> Option<String>;

    /// Subscribe to active screen changes.
    fn subscribe_screen_changed(&self, slot: ScreenSlot) -> Subscription;

    /// Subscribe to "children redrawn" notifications.
    fn subscribe_children_redrawn(&self, slot: RedrawSlot) -> Subscription;

    /// Drop a subscription. Returns `false` if it was already gone.
    fn unsubscribe(&self, subscription: Subscription) -> bool;

    /// Run a task after the current redraw cycle.
    fn defer(&self, task: DeferredTask);
}

/// An in-process host event bus.
///
/// # Example
///
/// ```
/// use horizon_reflow::responsive::{HostBus, HostEvents};
///
/// let bus = HostBus::new();
/// bus.subscribe_screen_changed(Box::new(|name| println!("now on {name}")));
/// bus.set_active_screen("mobile");
/// assert_eq!(bus.active_screen().as_deref(), Some("mobile"));
/// ```
pub struct HostBus {
    screen: Mutex<Option<String>>,
    screen_changed: Signal<String>,
    children_redrawn: Signal<ContainerId>,
    deferred: Mutex<DeferredQueue>,
}

impl HostBus {
    /// Create a bus with no active screen.
    pub fn new() -> Self {
        Self {
            screen: Mutex::new(None),
            screen_changed: Signal::new(),
            children_redrawn: Signal::new(),
            deferred: Mutex::new(DeferredQueue::new()),
        }
    }

    /// Create a bus with an initial active screen, without notifying.
    pub fn with_screen(screen: impl Into<String>) -> Self {
        let bus = Self::new();
        *bus.screen.lock() = Some(screen.into());
        bus
    }

    /// Change the active screen and notify subscribers.
    ///
    /// Returns the number of subscribers notified.
    pub fn set_active_screen(&self, screen: impl Into<String>) -> usize {
        let screen = screen.into();
        *self.screen.lock() = Some(screen.clone());
        tracing::debug!(target: targets::HOST, %screen, "active screen changed");
        self.screen_changed.emit(screen)
    }

    /// Tell subscribers that a container's children were redrawn.
    pub fn notify_children_redrawn(&self, container: ContainerId) -> usize {
        tracing::trace!(target: targets::HOST, %container, "children redrawn");
        self.children_redrawn.emit(container)
    }

    /// Run every deferred task, as the host does after a redraw cycle.
    ///
    /// Tasks run without the queue lock held, so they may defer more work;
    /// that work runs on the next call.
    pub fn run_deferred(&self) -> usize {
        let batch = self.deferred.lock().take_all();
        let count = batch.len();
        for task in batch {
            task();
        }
        count
    }

    /// Number of tasks waiting for the next redraw cycle.
    pub fn pending_deferred(&self) -> usize {
        self.deferred.lock().pending_count()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.screen_changed.connection_count() + self.children_redrawn.connection_count()
    }
}

impl Default for HostBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HostBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostBus")
            .field("screen", &*self.screen.lock())
            .field("subscribers", &self.subscriber_count())
            .field("pending", &self.pending_deferred())
            .finish()
    }
}

impl HostEvents for HostBus {
    fn active_screen(&self) -> Option<String> {
        self.screen.lock().clone()
    }

    fn subscribe_screen_changed(&self, slot: ScreenSlot) -> Subscription {
        Subscription::ScreenChanged(self.screen_changed.connect(move |name: &String| slot(name.as_str())))
    }

    fn subscribe_children_redrawn(&self, slot: RedrawSlot) -> Subscription {
        Subscription::ChildrenRedrawn(self.children_redrawn.connect(move |id: &ContainerId| slot(*id)))
    }

    fn unsubscribe(&self, subscription: Subscription) -> bool {
        match subscription {
            Subscription::ScreenChanged(id) => self.screen_changed.disconnect(id),
            Subscription::ChildrenRedrawn(id) => self.children_redrawn.disconnect(id),
        }
    }

    fn defer(&self, task: DeferredTask) {
        self.deferred.lock().post_boxed(task);
    }
}

static_assertions::assert_impl_all!(HostBus: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_screen_subscription() {
        let bus = HostBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let sub = bus.subscribe_screen_changed(Box::new(move |name| {
            seen_clone.lock().push(name.to_owned());
        }));

        assert_eq!(bus.set_active_screen("tablet"), 1);
        assert!(bus.unsubscribe(sub));
        assert!(!bus.unsubscribe(sub));
        assert_eq!(bus.set_active_screen("mobile"), 0);

        assert_eq!(*seen.lock(), ["tablet"]);
        assert_eq!(bus.active_screen().as_deref(), Some("mobile"));
    }

    #[test]
    fn test_redraw_subscription() {
        let bus = HostBus::new();
        let target = ContainerId::next();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        bus.subscribe_children_redrawn(Box::new(move |id| {
            if id == target {
                hits_clone.fetch_add(1, Ordering::SeqCst);
            }
        }));

        bus.notify_children_redrawn(target);
        bus.notify_children_redrawn(ContainerId::next());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_deferred_tasks_run_after_cycle() {
        let bus = Arc::new(HostBus::new());
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = Arc::clone(&hits);
        let bus_clone = Arc::clone(&bus);
        bus.defer(Box::new(move || {
            hits_clone.fetch_add(1, Ordering::SeqCst);
            let hits_inner = Arc::clone(&hits_clone);
            bus_clone.defer(Box::new(move || {
                hits_inner.fetch_add(10, Ordering::SeqCst);
            }));
        }));

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(bus.run_deferred(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(bus.pending_deferred(), 1);
        assert_eq!(bus.run_deferred(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 11);
    }

    #[test]
    fn test_with_screen_does_not_notify() {
        let bus = HostBus::with_screen("default");
        assert_eq!(bus.active_screen().as_deref(), Some("default"));
    }
}
