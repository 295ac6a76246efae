//! Layout descriptors managed by the reflow engine.
//!
//! This module provides the value types a container's layout is made of:
//!
//! - [`Division`]: A single row or column track definition
//! - [`Constraint`]: A child's placement within a form layout
//! - [`FormLayout`]: Row/column grid with per-child constraints
//! - [`VerticalLayout`]: Single-column stack with margins and spacing
//! - [`ContentMargins`]: Spacing around layout content
//!
//! All of them are plain values. The engine copies them freely and replaces
//! them wholesale on every reflow, so no two containers ever alias the same
//! track or constraint.

mod constraint;
mod division;
mod form_layout;
mod vertical_layout;

pub use constraint::Constraint;
pub use division::{Division, Length};
pub use form_layout::FormLayout;
pub use vertical_layout::{Distribution, VerticalLayout};

/// Content margins around a layout.
///
/// Margins define the spacing between the layout's content and its edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentMargins {
    /// Left margin.
    pub left: f32,
    /// Top margin.
    pub top: f32,
    /// Right margin.
    pub right: f32,
    /// Bottom margin.
    pub bottom: f32,
}

impl ContentMargins {
    /// Create new content margins.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create uniform margins (same value on all sides).
    pub fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Create symmetric margins (same horizontal and vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal margin (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Alignment of a child within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align at the start (left/top).
    Start,
    /// Center.
    Center,
    /// Align at the end (right/bottom).
    End,
    /// Stretch to fill the cell (default).
    #[default]
    Stretch,
}

/// Default spacing between tracks in a layout.
pub const DEFAULT_SPACING: f32 = 6.0;

/// Default content margins for layouts.
pub const DEFAULT_MARGINS: ContentMargins = ContentMargins {
    left: 9.0,
    top: 9.0,
    right: 9.0,
    bottom: 9.0,
};

/// An enum wrapping the layout types a container can own.
///
/// A container owns exactly one active layout descriptor at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutKind {
    /// Row/column form layout.
    Form(FormLayout),
    /// Single-column vertical layout.
    Vertical(VerticalLayout),
}

impl LayoutKind {
    /// Create an empty form layout.
    pub fn form() -> Self {
        Self::Form(FormLayout::new())
    }

    /// Create an empty vertical layout.
    pub fn vertical() -> Self {
        Self::Vertical(VerticalLayout::new())
    }

    /// Get the form layout, if this is one.
    pub fn as_form(&self) -> Option<&FormLayout> {
        match self {
            Self::Form(layout) => Some(layout),
            Self::Vertical(_) => None,
        }
    }

    /// Get the vertical layout, if this is one.
    pub fn as_vertical(&self) -> Option<&VerticalLayout> {
        match self {
            Self::Vertical(layout) => Some(layout),
            Self::Form(_) => None,
        }
    }

    /// Content margins of the wrapped layout.
    pub fn content_margins(&self) -> ContentMargins {
        match self {
            Self::Form(layout) => layout.content_margins(),
            Self::Vertical(layout) => layout.content_margins(),
        }
    }
}

impl From<FormLayout> for LayoutKind {
    fn from(layout: FormLayout) -> Self {
        Self::Form(layout)
    }
}

impl From<VerticalLayout> for LayoutKind {
    fn from(layout: VerticalLayout) -> Self {
        Self::Vertical(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_margins() {
        let margins = ContentMargins::symmetric(4.0, 2.0);
        assert_eq!(margins.horizontal(), 8.0);
        assert_eq!(margins.vertical(), 4.0);
        assert_eq!(ContentMargins::uniform(3.0), ContentMargins::new(3.0, 3.0, 3.0, 3.0));
    }

    #[test]
    fn test_layout_kind_accessors() {
        let form = LayoutKind::form();
        assert!(form.as_form().is_some());
        assert!(form.as_vertical().is_none());

        let vertical = LayoutKind::from(VerticalLayout::new());
        assert!(vertical.as_vertical().is_some());
        assert_eq!(vertical.content_margins(), DEFAULT_MARGINS);
    }
}
