//! The controller state machine.
//!
//! A [`LayoutController`] binds one container's [`ResponsiveLayout`] to the
//! host: on [`start`](LayoutController::start) it backs the container up and
//! subscribes to screen changes and redraw notifications, on
//! [`stop`](LayoutController::stop) it unsubscribes. Both are idempotent.
//!
//! Screen changes are handled synchronously. Redraw notifications are
//! deferred to the host's "after redraw" queue; when the task runs, the
//! controller re-backs-up the container if its children changed and replays
//! the last screen change so new children are placed.
//!
//! # Locking
//!
//! The controller state is always locked before the container. Hosts must
//! not hold the container lock while emitting notifications.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use horizon_reflow_core::ContainerId;
use horizon_reflow_core::logging::targets;

use crate::config::EngineConfig;
use crate::container::{Container, SharedContainer};
use crate::profile::{Profile, ScreenProfileResolver};

use super::ResponsiveLayout;
use super::form::FormReflow;
use super::host::{HostEvents, Subscription};

struct State<L> {
    layout: L,
    started: bool,
    screen: Option<String>,
}

struct Shared<L> {
    container: SharedContainer,
    container_id: ContainerId,
    resolver: ScreenProfileResolver,
    state: Mutex<State<L>>,
}

impl<L: ResponsiveLayout> Shared<L> {
    fn handle_screen(&self, screen: &str) {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        if !state.started {
            return;
        }
        state.screen = Some(screen.to_owned());
        let profile = self.resolver.resolve(screen);

        let mut container = self.container.lock();
        if container.is_disposed() {
            return;
        }
        tracing::debug!(
            target: targets::CONTROLLER,
            container = %self.container_id,
            screen,
            profile = ?profile,
            "handling screen change"
        );
        state.layout.apply_profile(&mut container, profile);
    }

    fn sync_children(&self) {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        if !state.started {
            return;
        }
        let mut container = self.container.lock();
        if container.is_disposed() || !state.layout.needs_backup(&container) {
            return;
        }

        tracing::debug!(
            target: targets::CONTROLLER,
            container = %self.container_id,
            "children changed, refreshing backup"
        );
        state.layout.backup(&container, true);
        if let Some(screen) = state.screen.as_deref() {
            let profile = self.resolver.resolve(screen);
            state.layout.apply_profile(&mut container, profile);
        }
    }
}

/// Drives a [`ResponsiveLayout`] from host notifications.
pub struct LayoutController<L: ResponsiveLayout> {
    shared: Arc<Shared<L>>,
    host: Arc<dyn HostEvents>,
    subscriptions: Mutex<Vec<Subscription>>,
}

impl<L: ResponsiveLayout> LayoutController<L> {
    /// Create a stopped controller.
    pub fn new(
        container: SharedContainer,
        layout: L,
        host: Arc<dyn HostEvents>,
        config: Arc<EngineConfig>,
    ) -> Self {
        let container_id = container.lock().id();
        Self {
            shared: Arc::new(Shared {
                container,
                container_id,
                resolver: ScreenProfileResolver::new(config),
                state: Mutex::new(State {
                    layout,
                    started: false,
                    screen: None,
                }),
            }),
            host,
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Back up the container and subscribe to the host.
    ///
    /// The active screen is recorded but not applied; the next screen change
    /// notification applies it. No-op if already started or if the
    /// container is disposed.
    pub fn start(&self) {
        let mut subscriptions = self.subscriptions.lock();
        {
            let mut state = self.shared.state.lock();
            if state.started {
                return;
            }
            let container = self.shared.container.lock();
            if container.is_disposed() {
                return;
            }
            state.layout.backup(&container, false);
            state.screen = self.host.active_screen();
            state.started = true;
        }

        let shared = Arc::clone(&self.shared);
        subscriptions.push(
            self.host
                .subscribe_screen_changed(Box::new(move |screen| shared.handle_screen(screen))),
        );

        let shared = Arc::clone(&self.shared);
        let host: Weak<dyn HostEvents> = Arc::downgrade(&self.host);
        subscriptions.push(self.host.subscribe_children_redrawn(Box::new(move |id| {
            if id != shared.container_id {
                return;
            }
            let Some(host) = host.upgrade() else {
                return;
            };
            let shared = Arc::clone(&shared);
            host.defer(Box::new(move || shared.sync_children()));
        })));

        tracing::debug!(
            target: targets::CONTROLLER,
            container = %self.shared.container_id,
            "controller started"
        );
    }

    /// Unsubscribe from the host. No-op if already stopped.
    ///
    /// The container keeps whatever layout is installed.
    pub fn stop(&self) {
        let mut subscriptions = self.subscriptions.lock();
        {
            let mut state = self.shared.state.lock();
            if !state.started {
                return;
            }
            state.started = false;
        }
        for subscription in subscriptions.drain(..) {
            self.host.unsubscribe(subscription);
        }

        tracing::debug!(
            target: targets::CONTROLLER,
            container = %self.shared.container_id,
            "controller stopped"
        );
    }

    /// Whether the controller is started.
    pub fn is_started(&self) -> bool {
        self.shared.state.lock().started
    }

    /// The last screen name seen.
    pub fn active_screen(&self) -> Option<String> {
        self.shared.state.lock().screen.clone()
    }

    /// The controlled container.
    pub fn container(&self) -> &SharedContainer {
        &self.shared.container
    }

    /// The controlled container's id.
    pub fn container_id(&self) -> ContainerId {
        self.shared.container_id
    }

    /// The resolver mapping screen names to profiles.
    pub fn resolver(&self) -> &ScreenProfileResolver {
        &self.shared.resolver
    }

    /// Inspect the layout state together with the container.
    pub fn with_layout<R>(&self, f: impl FnOnce(&L, &Container) -> R) -> R {
        let state = self.shared.state.lock();
        let container = self.shared.container.lock();
        f(&state.layout, &container)
    }
}

impl LayoutController<FormReflow> {
    /// Set the column count used on a profile. Zero means "no transform".
    ///
    /// Takes effect on the next screen change.
    pub fn set_column_settings(&self, profile: Profile, column_count: usize) {
        self.shared
            .state
            .lock()
            .layout
            .set_column_settings(profile, column_count);
    }

    /// Set the column count for the profile a screen name resolves to.
    ///
    /// Returns `false` if the screen name is unknown.
    pub fn set_screen_column_settings(&self, screen: &str, column_count: usize) -> bool {
        match self.shared.resolver.resolve(screen) {
            Some(profile) => {
                self.set_column_settings(profile, column_count);
                true
            }
            None => false,
        }
    }

    /// Show or hide rows of the original layout, then reflow with `profile`'s
    /// column count, or restore if it has none.
    pub fn set_row_visible(
        &self,
        profile: Profile,
        rows: impl IntoIterator<Item = usize>,
        visible: bool,
    ) {
        let rows: Vec<usize> = rows.into_iter().collect();
        let mut state = self.shared.state.lock();
        let mut container = self.shared.container.lock();
        state
            .layout
            .set_rows_visible(&mut container, &rows, visible, profile);
    }

    /// Show or hide columns of the original layout, then reflow with
    /// `profile`'s column count, or restore if it has none.
    pub fn set_column_visible(
        &self,
        profile: Profile,
        columns: impl IntoIterator<Item = usize>,
        visible: bool,
    ) {
        let columns: Vec<usize> = columns.into_iter().collect();
        let mut state = self.shared.state.lock();
        let mut container = self.shared.container.lock();
        state
            .layout
            .set_columns_visible(&mut container, &columns, visible, profile);
    }
}

impl<L: ResponsiveLayout> Drop for LayoutController<L> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<L: ResponsiveLayout> std::fmt::Debug for LayoutController<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutController")
            .field("container", &self.shared.container_id)
            .field("started", &self.is_started())
            .field("subscriptions", &self.subscriptions.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{Child, Container};
    use crate::layout::{Constraint, Division, FormLayout};
    use crate::responsive::host::HostBus;

    fn setup() -> (Arc<HostBus>, LayoutController<FormReflow>) {
        let mut container = Container::new(FormLayout::with_tracks(
            vec![Division::fixed(80.0); 4],
            vec![Division::fixed(30.0)],
        ));
        for col in 0..4 {
            container.add_child(Child::new(format!("c{col}")), Constraint::at(0, col));
        }
        let config = Arc::new(EngineConfig::default());
        let bus = Arc::new(HostBus::with_screen("default"));
        let host: Arc<dyn HostEvents> = bus.clone();
        let controller = LayoutController::new(
            container.into_shared(),
            FormReflow::new(Arc::clone(&config)),
            host,
            config,
        );
        controller.set_column_settings(Profile::Mobile, 1);
        (bus, controller)
    }

    fn column_count(controller: &LayoutController<FormReflow>) -> usize {
        controller.container().lock().form_layout().unwrap().column_count()
    }

    #[test]
    fn test_start_stop_idempotent() {
        let (bus, controller) = setup();
        assert!(!controller.is_started());

        controller.start();
        controller.start();
        assert!(controller.is_started());
        assert_eq!(bus.subscriber_count(), 2);
        assert_eq!(controller.active_screen().as_deref(), Some("default"));

        controller.stop();
        controller.stop();
        assert!(!controller.is_started());
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_screen_changes_drive_layout() {
        let (bus, controller) = setup();
        controller.start();
        assert_eq!(column_count(&controller), 4);

        bus.set_active_screen("mobile");
        assert_eq!(column_count(&controller), 1);

        bus.set_active_screen("tablet");
        assert_eq!(column_count(&controller), 4);

        bus.set_active_screen("unknown");
        assert_eq!(column_count(&controller), 4);
    }

    #[test]
    fn test_stopped_controller_ignores_screens() {
        let (bus, controller) = setup();
        controller.start();
        controller.stop();
        bus.set_active_screen("mobile");
        assert_eq!(column_count(&controller), 4);
    }

    #[test]
    fn test_screen_column_settings() {
        let (bus, controller) = setup();
        assert!(controller.set_screen_column_settings("tablet", 2));
        assert!(!controller.set_screen_column_settings("watch", 2));
        controller.start();
        bus.set_active_screen("tablet");
        assert_eq!(column_count(&controller), 2);
    }

    #[test]
    fn test_column_visibility_uses_named_profile() {
        let (bus, controller) = setup();
        controller.set_column_settings(Profile::Tablet, 3);
        controller.start();
        bus.set_active_screen("mobile");
        assert_eq!(column_count(&controller), 1);

        controller.set_column_visible(Profile::Tablet, [3], false);
        assert_eq!(column_count(&controller), 3);

        controller.set_column_visible(Profile::Default, [3], true);
        assert_eq!(column_count(&controller), 4);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let (bus, controller) = setup();
        controller.start();
        drop(controller);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_disposed_container_not_started() {
        let (_bus, controller) = setup();
        controller.container().lock().dispose();
        controller.start();
        assert!(!controller.is_started());
    }
}
