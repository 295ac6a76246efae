//! Responsive layout engine.
//!
//! This module holds everything that switches a container between its
//! authored layout and per-profile variants:
//!
//! - [`LayoutSnapshot`]: the recorded original layout and constraints.
//! - [`ChildOrderingResolver`]: the fill order of children for a profile.
//! - [`VisibilityRules`]: which children are left out, and why.
//! - [`ReflowEngine`]: the greedy row-fill packer.
//! - [`FormReflow`] / [`VerticalReflow`]: per-container state machines.
//! - [`LayoutController`]: host wiring through [`HostEvents`].
//! - [`attach`]: attribute-driven bootstrap.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_reflow::{Child, Container, EngineConfig, Profile};
//! use horizon_reflow::layout::{Constraint, Division, FormLayout};
//! use horizon_reflow::responsive::{FormReflow, HostBus, HostEvents, LayoutController};
//!
//! let mut container = Container::new(FormLayout::with_tracks(
//!     vec![Division::fixed(100.0); 4],
//!     vec![Division::fixed(30.0)],
//! ));
//! for col in 0..4 {
//!     container.add_child(Child::new(format!("field{col}")), Constraint::at(0, col));
//! }
//!
//! let config = Arc::new(EngineConfig::default());
//! let bus = Arc::new(HostBus::new());
//! let host: Arc<dyn HostEvents> = bus.clone();
//! let controller = LayoutController::new(
//!     container.into_shared(),
//!     FormReflow::new(config.clone()),
//!     host,
//!     config,
//! );
//! controller.set_column_settings(Profile::Mobile, 2);
//! controller.start();
//!
//! bus.set_active_screen("mobile");
//! let rows = controller.container().lock().form_layout().unwrap().row_count();
//! assert_eq!(rows, 2);
//! ```

mod attach;
mod controller;
mod dump;
mod form;
mod host;
pub mod markers;
mod ordering;
mod reflow;
mod snapshot;
mod vertical;
mod visibility;

pub use attach::{ResponsiveController, attach};
pub use controller::LayoutController;
pub use dump::GridDump;
pub use form::FormReflow;
pub use host::{HostBus, HostEvents, RedrawSlot, ScreenSlot, Subscription};
pub use ordering::{ChildOrderingResolver, OrderKey, UNORDERED_INDEX};
pub use reflow::{Placement, ReflowEngine, ReflowPlan};
pub use snapshot::LayoutSnapshot;
pub use vertical::VerticalReflow;
pub use visibility::{HiddenReason, Partition, VisibilityRules};

use crate::container::Container;
use crate::profile::Profile;

/// A container behavior a [`LayoutController`] can drive.
pub trait ResponsiveLayout: Send + 'static {
    /// Record the container's state; `redraw` backups keep the recorded layout.
    fn backup(&mut self, container: &Container, redraw: bool);

    /// Transform or restore the container for a profile.
    ///
    /// `None` means the active screen maps to no profile.
    fn apply_profile(&mut self, container: &mut Container, profile: Option<Profile>);

    /// Whether the container's children drifted from the last backup.
    fn needs_backup(&self, _container: &Container) -> bool {
        false
    }
}
