//! Responsive behavior of a vertical (single-column) container.
//!
//! On a compact profile with its `fit` flag set, the original vertical
//! layout is re-installed with that profile's margins and spacing and `fill`
//! distribution, and the container follows the profile's hide flag. On the
//! default profile, a container meant only for compact screens is hidden.
//! Every other case restores the original layout.

use horizon_reflow_core::PerfSpan;
use horizon_reflow_core::logging::{span_names, targets};

use crate::attributes::{ProfileVerticalSettings, VerticalSettings};
use crate::container::Container;
use crate::layout::{ContentMargins, Distribution, VerticalLayout};
use crate::profile::Profile;

use super::ResponsiveLayout;

/// Backup, transform and restore of one vertical container.
#[derive(Debug, Default)]
pub struct VerticalReflow {
    original: Option<VerticalLayout>,
    original_visible: bool,
    settings: VerticalSettings,
}

impl VerticalReflow {
    /// Create an empty reflow; call [`backup`](Self::backup) before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded original layout.
    pub fn original(&self) -> Option<&VerticalLayout> {
        self.original.as_ref()
    }

    /// Settings parsed at the last backup.
    pub fn settings(&self) -> &VerticalSettings {
        &self.settings
    }

    /// Record the container's layout and settings.
    ///
    /// A redraw backup keeps the already recorded layout.
    pub fn backup(&mut self, container: &Container, redraw: bool) {
        if container.is_disposed() {
            return;
        }
        if !redraw || self.original.is_none() {
            match container.layout().as_vertical() {
                Some(layout) => {
                    self.original = Some(layout.clone());
                    self.original_visible = container.is_visible();
                }
                None => tracing::warn!(
                    target: targets::SNAPSHOT,
                    container = %container.id(),
                    "container has no vertical layout, nothing to back up"
                ),
            }
        }
        self.settings = VerticalSettings::parse(container.attributes());
    }

    /// Install the profile's variant of the original layout.
    pub fn transform(&mut self, container: &mut Container, profile: Profile) -> bool {
        if container.is_disposed() {
            return false;
        }
        let (Some(original), Some(settings)) = (&self.original, self.settings.profile(profile)) else {
            return false;
        };
        let _span = PerfSpan::new(span_names::VERTICAL);

        let layout = fitted_layout(original, settings);
        container.set_layout(layout);
        container.set_visible(settings.hide != Some(true));

        tracing::debug!(
            target: targets::REFLOW,
            container = %container.id(),
            %profile,
            visible = container.is_visible(),
            "fitted vertical layout"
        );
        true
    }

    /// Re-install the original layout and visibility.
    pub fn restore(&mut self, container: &mut Container) {
        if container.is_disposed() {
            return;
        }
        let Some(original) = &self.original else {
            return;
        };
        container.set_layout(original.clone());
        container.set_visible(self.original_visible);
        tracing::debug!(target: targets::SNAPSHOT, container = %container.id(), "restored vertical layout");
    }

    /// Fit, hide or restore the container for `profile`.
    pub fn apply_profile(&mut self, container: &mut Container, profile: Option<Profile>) {
        if container.is_disposed() {
            return;
        }
        match profile {
            Some(p) if p.is_compact() && self.settings.profile(p).is_some_and(|s| s.fit) => {
                self.transform(container, p);
            }
            Some(Profile::Default) if self.settings.compact_only() => {
                self.restore(container);
                container.set_visible(false);
            }
            _ => self.restore(container),
        }
    }
}

fn fitted_layout(original: &VerticalLayout, settings: &ProfileVerticalSettings) -> VerticalLayout {
    let mut layout = original.clone();
    let margins = original.content_margins();
    layout.set_content_margins(ContentMargins::new(
        settings.left_margin.unwrap_or(margins.left),
        settings.top_margin.unwrap_or(margins.top),
        settings.right_margin.unwrap_or(margins.right),
        settings.bottom_margin.unwrap_or(margins.bottom),
    ));
    layout.set_spacing(settings.spacing.unwrap_or(original.spacing()));
    layout.set_distribution(Distribution::Fill);
    layout
}

impl ResponsiveLayout for VerticalReflow {
    fn backup(&mut self, container: &Container, redraw: bool) {
        VerticalReflow::backup(self, container, redraw);
    }

    fn apply_profile(&mut self, container: &mut Container, profile: Option<Profile>) {
        VerticalReflow::apply_profile(self, container, profile);
    }
}
