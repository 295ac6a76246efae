//! The recorded original layout of a responsive form.
//!
//! A [`LayoutSnapshot`] is captured once, when a controller starts, and is
//! the only input the packer reads: every reflow starts from the snapshot,
//! never from the container's current (possibly already reflowed) state, so
//! reflows do not compound.
//!
//! After the host adds or removes children the snapshot is refreshed in
//! redraw mode. Refreshing never replaces the recorded layout and keeps the
//! recorded constraint of every child it already knows, only picking up
//! constraints for newly added children and dropping removed ones.

use std::collections::HashMap;

use horizon_reflow_core::logging::{span_names, targets};
use horizon_reflow_core::{ChildId, PerfSpan};

use crate::attributes::{ChildSettings, FormSettings};
use crate::config::EngineConfig;
use crate::container::Container;
use crate::layout::{Constraint, FormLayout};

use super::markers;
use super::visibility::VisibilityRules;

/// Original tracks, constraints and parsed settings of a form container.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    layout: FormLayout,
    settings: FormSettings,
    constraints: HashMap<ChildId, Constraint>,
    children: HashMap<ChildId, ChildSettings>,
    /// Sibling order of every child, excluded ones included.
    order: Vec<ChildId>,
}

impl LayoutSnapshot {
    /// Record the container's current form layout and child constraints.
    ///
    /// Returns `None` if the container is disposed or does not hold a form
    /// layout.
    pub fn capture(container: &Container, config: &EngineConfig) -> Option<Self> {
        if container.is_disposed() {
            return None;
        }
        let Some(layout) = container.form_layout() else {
            tracing::warn!(
                target: targets::SNAPSHOT,
                container = %container.id(),
                "container has no form layout, nothing to back up"
            );
            return None;
        };

        let mut snapshot = Self {
            layout: layout.clone(),
            settings: FormSettings::parse(container.attributes()),
            constraints: HashMap::new(),
            children: HashMap::new(),
            order: container.children().to_vec(),
        };
        for id in container.reflow_children() {
            snapshot.record_child(container, id, config);
        }

        tracing::debug!(
            target: targets::SNAPSHOT,
            container = %container.id(),
            columns = snapshot.layout.column_count(),
            rows = snapshot.layout.row_count(),
            children = snapshot.constraints.len(),
            "captured layout snapshot"
        );
        Some(snapshot)
    }

    /// Bring the child map in line with the container's live children.
    ///
    /// The recorded layout is left untouched.
    pub fn refresh(&mut self, container: &Container, config: &EngineConfig) {
        if container.is_disposed() {
            return;
        }
        let live: Vec<ChildId> = container.reflow_children().collect();
        let before = self.constraints.len();

        self.constraints.retain(|id, _| live.contains(id));
        self.children.retain(|id, _| live.contains(id));
        for &id in &live {
            if self.constraints.contains_key(&id) {
                // Attributes may have changed since capture.
                if let Some(child) = container.child(id) {
                    self.children.insert(id, ChildSettings::from_child(child, config));
                }
            } else {
                self.record_child(container, id, config);
            }
        }
        self.settings = FormSettings::parse(container.attributes());

        let present = container.children();
        self.order.retain(|id| present.contains(id));
        for &id in present {
            if !self.order.contains(&id) {
                self.order.push(id);
            }
        }

        tracing::debug!(
            target: targets::SNAPSHOT,
            container = %container.id(),
            before,
            after = self.constraints.len(),
            "refreshed layout snapshot"
        );
    }

    fn record_child(&mut self, container: &Container, id: ChildId, config: &EngineConfig) {
        let (Some(child), Some(constraint)) = (container.child(id), container.constraint(id)) else {
            return;
        };
        self.constraints.insert(id, constraint.clone());
        self.children.insert(id, ChildSettings::from_child(child, config));
    }

    /// Re-install the original layout, constraints and sibling order.
    ///
    /// Children hidden by a profile or layout rule are shown again and the
    /// collapse style classes are cleared. Repeated calls are idempotent.
    pub fn restore(&self, container: &mut Container, visibility: &mut VisibilityRules) {
        if container.is_disposed() {
            return;
        }
        let _span = PerfSpan::new(span_names::RESTORE);

        container.set_layout(self.layout.clone());
        let reshown = visibility.restore(container);
        for (&id, constraint) in &self.constraints {
            container.replace_constraint(id, constraint.clone());
        }
        for (position, &id) in self.order.iter().enumerate() {
            container.reorder_child(id, position);
        }
        markers::clear(container, self.settings.custom_class.as_deref());

        tracing::debug!(
            target: targets::SNAPSHOT,
            container = %container.id(),
            reshown,
            "restored original layout"
        );
    }

    /// Whether the live reflow children differ from the recorded ones.
    pub fn is_stale(&self, container: &Container) -> bool {
        let mut live = 0;
        for id in container.reflow_children() {
            if !self.constraints.contains_key(&id) {
                return true;
            }
            live += 1;
        }
        live != self.constraints.len()
    }

    /// Recorded sibling order.
    pub fn order(&self) -> &[ChildId] {
        &self.order
    }

    /// The original form layout.
    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    /// Mutable access to the original form layout.
    pub fn layout_mut(&mut self) -> &mut FormLayout {
        &mut self.layout
    }

    /// Container settings parsed at backup.
    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Original constraints by child.
    pub fn constraints(&self) -> &HashMap<ChildId, Constraint> {
        &self.constraints
    }

    /// Original constraint of a child.
    pub fn constraint(&self, id: ChildId) -> Option<&Constraint> {
        self.constraints.get(&id)
    }

    /// Parsed settings of a child.
    pub fn child_settings(&self, id: ChildId) -> Option<&ChildSettings> {
        self.children.get(&id)
    }

    /// Whether a child is recorded.
    pub fn contains(&self, id: ChildId) -> bool {
        self.constraints.contains_key(&id)
    }

    /// Number of recorded children.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether no children are recorded.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
