//! Core plumbing for Horizon Reflow.
//!
//! This crate provides the host-facing building blocks the reflow engine is
//! wired through. It has no knowledge of layouts:
//!
//! - **Signal/Slot System**: Notifications delivered from the host UI runtime
//! - **Deferred Queue**: Tasks that run after the current redraw cycle
//! - **Identities**: Stable handles for containers and their children
//! - **Logging**: Tracing targets and span helpers shared by all subsystems
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_reflow_core::Signal;
//!
//! let screen_changed = Signal::<String>::new();
//!
//! let conn_id = screen_changed.connect(|name| {
//!     println!("Active screen is now {name}");
//! });
//!
//! screen_changed.emit("mobile".to_string());
//! screen_changed.disconnect(conn_id);
//! ```
//!
//! # Deferred Example
//!
//! ```
//! use horizon_reflow_core::DeferredQueue;
//!
//! let mut queue = DeferredQueue::new();
//! queue.post(|| println!("runs after the redraw"));
//! assert_eq!(queue.process_all(), 1);
//! ```

mod deferred;
mod error;
mod ids;
pub mod logging;
pub mod signal;

pub use deferred::{DeferredQueue, DeferredTask, TaskId};
pub use error::{CoreError, Result};
pub use ids::{ChildId, ContainerId};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
