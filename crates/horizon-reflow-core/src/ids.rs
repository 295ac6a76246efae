//! Stable identities for containers and children.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::new_key_type;

new_key_type! {
    /// A unique identifier for a child element inside a container.
    ///
    /// `ChildId`s are stable across reflows: the engine repositions and hides
    /// children but never recreates them, so snapshots can key on the ID.
    /// An ID becomes invalid only when the host removes the child.
    pub struct ChildId;
}

/// A unique identifier for a container.
///
/// Used to route "children redrawn" notifications to the controller that
/// owns the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

/// Global counter for generating unique container IDs.
static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

impl ContainerId {
    /// Allocate a fresh, process-unique container ID.
    pub fn next() -> Self {
        Self(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw u64 value of this container ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}
