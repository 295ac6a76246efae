//! Deterministic fill order of children for a profile.
//!
//! Children are sorted by their explicit per-profile order index, ties broken
//! by their original placement: row then column, or column then row when the
//! container collapses vertically. Children without an index share the
//! lowest priority and keep their original reading order among themselves.

use horizon_reflow_core::ChildId;

use crate::attributes::CollapseDirection;
use crate::profile::Profile;

use super::snapshot::LayoutSnapshot;

/// Sort key of children without a usable explicit index.
pub const UNORDERED_INDEX: i32 = 9999;

/// Sort key of one child.
pub type OrderKey = (i32, usize, usize);

/// Produces the packing order of a container's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildOrderingResolver {
    direction: CollapseDirection,
}

impl ChildOrderingResolver {
    /// Create a resolver for a collapse direction.
    pub fn new(direction: CollapseDirection) -> Self {
        Self { direction }
    }

    /// Create a resolver using the snapshot's collapse direction.
    pub fn for_snapshot(snapshot: &LayoutSnapshot) -> Self {
        Self::new(snapshot.settings().collapse_direction)
    }

    /// The collapse direction used for tie-breaks.
    pub fn direction(&self) -> CollapseDirection {
        self.direction
    }

    /// Sort children into packing order. The sort is stable.
    pub fn order(
        &self,
        children: &[ChildId],
        snapshot: &LayoutSnapshot,
        profile: Profile,
    ) -> Vec<ChildId> {
        let mut ordered = children.to_vec();
        ordered.sort_by_key(|&id| self.sort_key(id, snapshot, profile));
        ordered
    }

    /// Sort key of one child: explicit index, then the original placement.
    pub fn sort_key(&self, id: ChildId, snapshot: &LayoutSnapshot, profile: Profile) -> OrderKey {
        let explicit = snapshot
            .child_settings(id)
            .and_then(|settings| settings.order_index(profile))
            .unwrap_or(UNORDERED_INDEX);

        let Some(constraint) = snapshot.constraint(id) else {
            return (explicit, usize::MAX, usize::MAX);
        };
        match self.direction {
            CollapseDirection::Horizontal => (explicit, constraint.row, constraint.col),
            CollapseDirection::Vertical => (explicit, constraint.col, constraint.row),
        }
    }
}
