//! Horizon Reflow - responsive grid-layout reflow for host UI containers.
//!
//! A container authored as a multi-column form (rows and columns, each child
//! placed by row/column index and span) is recomputed into a different
//! column count per screen profile, for example an 8-column desktop form
//! collapsed to 2 columns on mobile, and restored exactly when the profile
//! changes back. A simpler variant adjusts margins, spacing and visibility of
//! vertical (single-column) containers.
//!
//! This crate re-exports the core plumbing from `horizon-reflow-core`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_reflow::{Child, Container, EngineConfig, attributes::names};
//! use horizon_reflow::layout::{Constraint, Division, FormLayout};
//! use horizon_reflow::responsive::{HostBus, HostEvents, attach};
//!
//! let mut container = Container::new(FormLayout::with_tracks(
//!     vec![Division::fixed(100.0); 8],
//!     vec![Division::fixed(30.0); 2],
//! ))
//! .with_attr(names::MOBILE_COLUMN_COUNT, "2");
//! for row in 0..2 {
//!     for col in 0..4 {
//!         container.add_child(Child::new(format!("f{row}{col}")), Constraint::at(row, col));
//!     }
//! }
//! let container = container.into_shared();
//!
//! let bus = Arc::new(HostBus::new());
//! let host: Arc<dyn HostEvents> = bus.clone();
//! let _controller = attach(&container, host, Arc::new(EngineConfig::default()));
//!
//! bus.set_active_screen("mobile");
//! assert_eq!(container.lock().form_layout().unwrap().row_count(), 4);
//!
//! bus.set_active_screen("default");
//! assert_eq!(container.lock().form_layout().unwrap().column_count(), 8);
//! ```

pub mod attributes;
pub mod config;
pub mod container;
pub mod error;
pub mod layout;
pub mod profile;
pub mod responsive;

pub use horizon_reflow_core::{
    ChildId, ConnectionId, ContainerId, CoreError, DeferredQueue, DeferredTask, PerfSpan, Signal,
    TaskId, logging,
};

pub use attributes::{Attributes, ChildSettings, CollapseDirection, FormSettings, VerticalSettings};
pub use config::EngineConfig;
pub use container::{Child, Container, SharedContainer};
pub use error::{Error, Result};
pub use profile::{Profile, ScreenProfileResolver};
