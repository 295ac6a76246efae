//! Single-column vertical layout.

use super::{ContentMargins, DEFAULT_MARGINS, DEFAULT_SPACING};

/// How children are distributed along the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Pack children at the top (default).
    #[default]
    Start,
    /// Center children.
    Center,
    /// Pack children at the bottom.
    End,
    /// Stretch children to fill the available space.
    Fill,
}

/// A vertical layout stacking children top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalLayout {
    margins: ContentMargins,
    spacing: f32,
    scrollable: bool,
    distribution: Distribution,
}

impl VerticalLayout {
    /// Create a vertical layout with default margins and spacing.
    pub fn new() -> Self {
        Self {
            margins: DEFAULT_MARGINS,
            spacing: DEFAULT_SPACING,
            scrollable: false,
            distribution: Distribution::default(),
        }
    }

    /// Get the content margins.
    #[inline]
    pub fn content_margins(&self) -> ContentMargins {
        self.margins
    }

    /// Set the content margins.
    pub fn set_content_margins(&mut self, margins: ContentMargins) {
        self.margins = margins;
    }

    /// Get spacing between children.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Set spacing between children.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
    }

    /// Whether the layout scrolls when its content overflows.
    #[inline]
    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    /// Enable or disable scrolling.
    pub fn set_scrollable(&mut self, scrollable: bool) {
        self.scrollable = scrollable;
    }

    /// Get the distribution.
    #[inline]
    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    /// Set the distribution.
    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.distribution = distribution;
    }
}

impl Default for VerticalLayout {
    fn default() -> Self {
        Self::new()
    }
}
