//! Attribute-driven bootstrap.
//!
//! Hosts call [`attach`] for every container when a screen is loaded. The
//! container's own attributes decide whether it is responsive and which
//! behavior applies.

use std::sync::Arc;

use horizon_reflow_core::logging::targets;

use crate::attributes::{FormSettings, VerticalSettings};
use crate::config::EngineConfig;
use crate::container::SharedContainer;
use crate::layout::LayoutKind;
use crate::profile::Profile;

use super::controller::LayoutController;
use super::form::FormReflow;
use super::host::HostEvents;
use super::vertical::VerticalReflow;

/// A started controller of either kind.
#[derive(Debug)]
pub enum ResponsiveController {
    /// A form container with per-profile column counts.
    Form(LayoutController<FormReflow>),
    /// A vertical container with per-profile fit settings.
    Vertical(LayoutController<VerticalReflow>),
}

impl ResponsiveController {
    /// The form controller, if this is one.
    pub fn as_form(&self) -> Option<&LayoutController<FormReflow>> {
        match self {
            Self::Form(controller) => Some(controller),
            Self::Vertical(_) => None,
        }
    }

    /// The vertical controller, if this is one.
    pub fn as_vertical(&self) -> Option<&LayoutController<VerticalReflow>> {
        match self {
            Self::Vertical(controller) => Some(controller),
            Self::Form(_) => None,
        }
    }

    /// Whether the controller is started.
    pub fn is_started(&self) -> bool {
        match self {
            Self::Form(controller) => controller.is_started(),
            Self::Vertical(controller) => controller.is_started(),
        }
    }

    /// Unsubscribe from the host.
    pub fn stop(&self) {
        match self {
            Self::Form(controller) => controller.stop(),
            Self::Vertical(controller) => controller.stop(),
        }
    }
}

/// Attach and start the controller a container's attributes call for.
///
/// - A form layout declaring a mobile or tablet column count gets a form
///   controller seeded with those counts.
/// - A vertical layout declaring a mobile or tablet `fit` flag gets a
///   vertical controller.
///
/// Returns `None` for containers without responsive attributes or that are
/// already disposed.
pub fn attach(
    container: &SharedContainer,
    host: Arc<dyn HostEvents>,
    config: Arc<EngineConfig>,
) -> Option<ResponsiveController> {
    enum Kind {
        Form(FormSettings),
        Vertical,
    }

    let kind = {
        let guard = container.lock();
        if guard.is_disposed() {
            return None;
        }
        match guard.layout() {
            LayoutKind::Form(_) => {
                let settings = FormSettings::parse(guard.attributes());
                let declared = [Profile::Mobile, Profile::Tablet]
                    .into_iter()
                    .any(|p| settings.column_count(p).is_some());
                declared.then_some(Kind::Form(settings))
            }
            LayoutKind::Vertical(_) => VerticalSettings::parse(guard.attributes())
                .is_responsive()
                .then_some(Kind::Vertical),
        }
    }?;

    let controller = match kind {
        Kind::Form(settings) => {
            let mut reflow = FormReflow::new(Arc::clone(&config));
            for profile in [Profile::Mobile, Profile::Tablet] {
                if let Some(count) = settings.column_count(profile) {
                    reflow.set_column_settings(profile, count);
                }
            }
            let controller = LayoutController::new(Arc::clone(container), reflow, host, config);
            controller.start();
            ResponsiveController::Form(controller)
        }
        Kind::Vertical => {
            let controller =
                LayoutController::new(Arc::clone(container), VerticalReflow::new(), host, config);
            controller.start();
            ResponsiveController::Vertical(controller)
        }
    };

    tracing::debug!(
        target: targets::CONTROLLER,
        kind = if controller.as_form().is_some() { "form" } else { "vertical" },
        "attached responsive controller"
    );
    Some(controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::names;
    use crate::container::{Child, Container};
    use crate::layout::{Constraint, Division, FormLayout, VerticalLayout};
    use crate::responsive::host::HostBus;

    fn host() -> (Arc<HostBus>, Arc<dyn HostEvents>) {
        let bus = Arc::new(HostBus::new());
        let host: Arc<dyn HostEvents> = bus.clone();
        (bus, host)
    }

    #[test]
    fn test_attach_form() {
        let (bus, host) = host();
        let mut container = Container::new(FormLayout::with_tracks(
            vec![Division::fixed(80.0); 3],
            vec![Division::fixed(30.0)],
        ))
        .with_attr(names::MOBILE_COLUMN_COUNT, "1")
        .with_attr(names::TABLET_COLUMN_COUNT, "2");
        for col in 0..3 {
            container.add_child(Child::new(format!("c{col}")), Constraint::at(0, col));
        }
        let container = container.into_shared();

        let controller = attach(&container, host, Arc::new(EngineConfig::default())).unwrap();
        assert!(controller.is_started());
        let form = controller.as_form().unwrap();
        assert_eq!(form.with_layout(|r, _| r.column_settings(Profile::Tablet)), Some(2));

        bus.set_active_screen("tablet");
        assert_eq!(container.lock().form_layout().unwrap().row_count(), 2);
        bus.set_active_screen("mobile");
        assert_eq!(container.lock().form_layout().unwrap().row_count(), 3);
    }

    #[test]
    fn test_attach_vertical() {
        let (_bus, host) = host();
        let container = Container::new(VerticalLayout::new())
            .with_attr(names::TABLET_FIT, "true")
            .into_shared();
        let controller = attach(&container, host, Arc::new(EngineConfig::default())).unwrap();
        assert!(controller.as_vertical().is_some());
        assert!(controller.is_started());
    }

    #[test]
    fn test_attach_plain_container() {
        let (bus, host) = host();
        let form = Container::new(FormLayout::new()).into_shared();
        assert!(attach(&form, Arc::clone(&host), Arc::new(EngineConfig::default())).is_none());

        let vertical = Container::new(VerticalLayout::new())
            .with_attr(names::MOBILE_COLUMN_COUNT, "2")
            .into_shared();
        assert!(attach(&vertical, host, Arc::new(EngineConfig::default())).is_none());
        assert_eq!(bus.subscriber_count(), 0);
    }
}
