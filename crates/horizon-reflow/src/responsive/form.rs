//! Responsive behavior of a form container.
//!
//! [`FormReflow`] owns the snapshot and visibility state of one container and
//! switches it between its original layout and a reflowed layout per
//! profile. It does no host wiring; [`LayoutController`](super::LayoutController)
//! drives it from host notifications.

use std::collections::HashMap;
use std::sync::Arc;

use horizon_reflow_core::PerfSpan;
use horizon_reflow_core::logging::{span_names, targets};

use crate::config::EngineConfig;
use crate::container::Container;
use crate::profile::Profile;

use super::ResponsiveLayout;
use super::dump::GridDump;
use super::ordering::ChildOrderingResolver;
use super::reflow::ReflowEngine;
use super::snapshot::LayoutSnapshot;
use super::visibility::VisibilityRules;

/// Backup, reflow and restore of one form container.
#[derive(Debug)]
pub struct FormReflow {
    config: Arc<EngineConfig>,
    column_settings: HashMap<Profile, usize>,
    snapshot: Option<LayoutSnapshot>,
    visibility: VisibilityRules,
    active: Option<(Profile, usize)>,
}

impl FormReflow {
    /// Create a reflow with no column settings.
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            config,
            column_settings: HashMap::new(),
            snapshot: None,
            visibility: VisibilityRules::new(),
            active: None,
        }
    }

    /// Builder: set the column count of a profile.
    pub fn with_column_settings(mut self, profile: Profile, column_count: usize) -> Self {
        self.set_column_settings(profile, column_count);
        self
    }

    /// Set the column count of a profile. Zero means "no transform".
    pub fn set_column_settings(&mut self, profile: Profile, column_count: usize) {
        self.column_settings.insert(profile, column_count);
    }

    /// Configured column count of a profile.
    pub fn column_settings(&self, profile: Profile) -> Option<usize> {
        self.column_settings.get(&profile).copied()
    }

    /// The recorded original layout, once backed up.
    pub fn snapshot(&self) -> Option<&LayoutSnapshot> {
        self.snapshot.as_ref()
    }

    /// Children currently hidden by reflow.
    pub fn visibility(&self) -> &VisibilityRules {
        &self.visibility
    }

    /// The profile and column count of the installed reflow, if any.
    pub fn active(&self) -> Option<(Profile, usize)> {
        self.active
    }

    /// Record the container's state.
    ///
    /// The first backup records the layout and every child constraint. A
    /// redraw backup only updates the recorded child set.
    pub fn backup(&mut self, container: &Container, redraw: bool) {
        if container.is_disposed() {
            return;
        }
        match (&mut self.snapshot, redraw) {
            (Some(snapshot), true) => snapshot.refresh(container, &self.config),
            _ => self.snapshot = LayoutSnapshot::capture(container, &self.config),
        }
    }

    /// Reflow the container into `column_count` columns for `profile`.
    ///
    /// Returns `false` when there is nothing to reflow from.
    pub fn transform(&mut self, container: &mut Container, profile: Profile, column_count: usize) -> bool {
        if container.is_disposed() || column_count == 0 {
            return false;
        }
        let Some(snapshot) = &self.snapshot else {
            return false;
        };
        let _span = PerfSpan::new(span_names::REFLOW);

        self.visibility.restore(container);
        let children: Vec<_> = container.reflow_children().collect();
        let ordered = ChildOrderingResolver::for_snapshot(snapshot).order(&children, snapshot, profile);
        let partition = self.visibility.partition(container, &ordered, snapshot, profile);

        let engine = ReflowEngine::new(&self.config);
        let plan = engine.pack(&partition.visible, snapshot, profile, column_count);
        let layout = ReflowEngine::profile_layout(
            snapshot.layout(),
            snapshot.settings().profile(profile),
        );
        let rows = plan.row_count();
        ReflowEngine::install(
            container,
            plan,
            layout,
            snapshot.settings().custom_class.as_deref(),
        );
        self.active = Some((profile, column_count));

        tracing::debug!(
            target: targets::REFLOW,
            container = %container.id(),
            %profile,
            columns = column_count,
            rows,
            hidden = partition.hidden.len(),
            "reflowed form"
        );
        tracing::trace!(target: targets::REFLOW, grid = %GridDump::new(container), "reflowed grid");
        true
    }

    /// Re-install the original layout.
    pub fn restore(&mut self, container: &mut Container) {
        if let Some(snapshot) = &self.snapshot {
            snapshot.restore(container, &mut self.visibility);
            self.active = None;
        }
    }

    /// Reflow for `profile` if it has a positive column count, restore otherwise.
    pub fn apply_profile(&mut self, container: &mut Container, profile: Option<Profile>) {
        if container.is_disposed() {
            return;
        }
        let target = profile.and_then(|p| {
            self.column_settings(p)
                .filter(|&count| count > 0)
                .map(|count| (p, count))
        });
        match target {
            Some((profile, count)) => {
                self.transform(container, profile, count);
            }
            None => self.restore(container),
        }
    }

    /// Show or hide original rows, then re-apply `profile`.
    pub fn set_rows_visible(
        &mut self,
        container: &mut Container,
        rows: &[usize],
        visible: bool,
        profile: Profile,
    ) {
        self.update_original(container, profile, |layout| {
            for &row in rows {
                layout.set_row_visible(row, visible);
            }
        });
    }

    /// Show or hide original columns, then re-apply `profile`.
    pub fn set_columns_visible(
        &mut self,
        container: &mut Container,
        columns: &[usize],
        visible: bool,
        profile: Profile,
    ) {
        self.update_original(container, profile, |layout| {
            for &col in columns {
                layout.set_column_visible(col, visible);
            }
        });
    }

    fn update_original(
        &mut self,
        container: &mut Container,
        profile: Profile,
        update: impl FnOnce(&mut crate::layout::FormLayout),
    ) {
        if container.is_disposed() {
            return;
        }
        let Some(snapshot) = &mut self.snapshot else {
            return;
        };
        update(snapshot.layout_mut());
        self.apply_profile(container, Some(profile));
    }
}

impl ResponsiveLayout for FormReflow {
    fn backup(&mut self, container: &Container, redraw: bool) {
        FormReflow::backup(self, container, redraw);
    }

    fn apply_profile(&mut self, container: &mut Container, profile: Option<Profile>) {
        FormReflow::apply_profile(self, container, profile);
    }

    fn needs_backup(&self, container: &Container) -> bool {
        self.snapshot
            .as_ref()
            .is_none_or(|snapshot| snapshot.is_stale(container))
    }
}
