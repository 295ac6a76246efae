//! Which children a reflow hides, and why.
//!
//! A child is left out of the reflowed grid when it is already hidden, when
//! its original row or column is hidden, or when it asks to be hidden on the
//! active profile. The last two causes are remembered separately so
//! [`VisibilityRules::restore`] can show those children again. Children that
//! were already hidden are never touched.

use std::collections::HashSet;

use horizon_reflow_core::ChildId;
use horizon_reflow_core::logging::targets;

use crate::container::Container;
use crate::profile::Profile;

use super::snapshot::LayoutSnapshot;

/// Why a child is left out of the reflowed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HiddenReason {
    /// The child was hidden before the reflow.
    Preexisting,
    /// The child's original row or column is hidden.
    Layout,
    /// The child carries a hide flag for the active profile.
    Profile,
}

/// Result of splitting ordered children into shown and hidden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Children to pack, in order.
    pub visible: Vec<ChildId>,
    /// Children left out, with the reason.
    pub hidden: Vec<(ChildId, HiddenReason)>,
}

/// Tracks children hidden by reflow so they can be shown again.
#[derive(Debug, Clone, Default)]
pub struct VisibilityRules {
    profile_hidden: HashSet<ChildId>,
    layout_hidden: HashSet<ChildId>,
}

impl VisibilityRules {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one child without mutating anything.
    pub fn classify(
        container: &Container,
        id: ChildId,
        snapshot: &LayoutSnapshot,
        profile: Profile,
    ) -> Option<HiddenReason> {
        let child = container.child(id)?;
        if !child.is_visible() {
            return Some(HiddenReason::Preexisting);
        }
        if let Some(constraint) = snapshot.constraint(id) {
            let layout = snapshot.layout();
            if !layout.is_column_visible(constraint.col) || !layout.is_row_visible(constraint.row) {
                return Some(HiddenReason::Layout);
            }
        }
        if snapshot
            .child_settings(id)
            .is_some_and(|settings| settings.hidden_on(profile))
        {
            return Some(HiddenReason::Profile);
        }
        None
    }

    /// Split ordered children, hiding and remembering the ones left out.
    ///
    /// Call [`restore`](Self::restore) first so children hidden by a previous
    /// reflow are judged on their own visibility.
    pub fn partition(
        &mut self,
        container: &mut Container,
        ordered: &[ChildId],
        snapshot: &LayoutSnapshot,
        profile: Profile,
    ) -> Partition {
        let mut partition = Partition::default();
        for &id in ordered {
            if container.child(id).is_none() {
                continue;
            }
            match Self::classify(container, id, snapshot, profile) {
                None => partition.visible.push(id),
                Some(reason) => {
                    match reason {
                        HiddenReason::Layout => {
                            self.layout_hidden.insert(id);
                        }
                        HiddenReason::Profile => {
                            self.profile_hidden.insert(id);
                        }
                        HiddenReason::Preexisting => {}
                    }
                    if let Some(child) = container.child_mut(id) {
                        child.set_visible(false);
                    }
                    partition.hidden.push((id, reason));
                }
            }
        }

        tracing::debug!(
            target: targets::VISIBILITY,
            %profile,
            visible = partition.visible.len(),
            hidden = partition.hidden.len(),
            "partitioned children"
        );
        partition
    }

    /// Show every child this tracker hid and forget them.
    ///
    /// Returns the number of children shown.
    pub fn restore(&mut self, container: &mut Container) -> usize {
        let mut shown = 0;
        for id in self.profile_hidden.drain().chain(self.layout_hidden.drain()) {
            if let Some(child) = container.child_mut(id) {
                child.set_visible(true);
                shown += 1;
            }
        }
        shown
    }

    /// Whether a child is hidden by a profile hide flag.
    pub fn is_profile_hidden(&self, id: ChildId) -> bool {
        self.profile_hidden.contains(&id)
    }

    /// Whether a child is hidden because its original track is hidden.
    pub fn is_layout_hidden(&self, id: ChildId) -> bool {
        self.layout_hidden.contains(&id)
    }

    /// Whether nothing is currently tracked.
    pub fn is_empty(&self) -> bool {
        self.profile_hidden.is_empty() && self.layout_hidden.is_empty()
    }
}
