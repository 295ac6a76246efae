//! Form layout: a row/column grid of divisions.
//!
//! `FormLayout` describes column and row tracks plus margins, spacing and
//! separators. Child placement lives on the container as per-child
//! [`Constraint`](super::Constraint)s, the layout only owns the tracks.
//!
//! # Example
//!
//! ```
//! use horizon_reflow::layout::{Division, FormLayout};
//!
//! let mut layout = FormLayout::new();
//! layout.set_columns(vec![Division::fixed(120.0), Division::flex(1.0)]);
//! layout.set_rows(vec![Division::fixed(30.0); 3]);
//!
//! layout.set_row_visible(1, false);
//! assert!(!layout.is_row_visible(1));
//! ```

use super::{ContentMargins, Division, DEFAULT_MARGINS, DEFAULT_SPACING};

/// A form layout made of column and row divisions.
#[derive(Debug, Clone, PartialEq)]
pub struct FormLayout {
    /// Column tracks.
    columns: Vec<Division>,
    /// Row tracks.
    rows: Vec<Division>,
    /// Margins around the grid.
    margins: ContentMargins,
    /// Horizontal spacing between columns.
    horizontal_spacing: f32,
    /// Vertical spacing between rows.
    vertical_spacing: f32,
    /// Width of the separator drawn between columns.
    horizontal_separator_width: f32,
    /// Style class of the separator drawn between columns.
    horizontal_separator_class: Option<String>,
    /// Width of the separator drawn between rows.
    vertical_separator_width: f32,
    /// Style class of the separator drawn between rows.
    vertical_separator_class: Option<String>,
    /// Whether the layout scrolls when content overflows.
    scrollable: bool,
}

impl FormLayout {
    /// Create a new form layout with no tracks.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            margins: DEFAULT_MARGINS,
            horizontal_spacing: DEFAULT_SPACING,
            vertical_spacing: DEFAULT_SPACING,
            horizontal_separator_width: 0.0,
            horizontal_separator_class: None,
            vertical_separator_width: 0.0,
            vertical_separator_class: None,
            scrollable: false,
        }
    }

    /// Create a layout with the given tracks.
    pub fn with_tracks(columns: Vec<Division>, rows: Vec<Division>) -> Self {
        Self {
            columns,
            rows,
            ..Self::new()
        }
    }

    /// Create a copy with the same margins, spacing and separators but no tracks.
    pub fn empty_like(&self) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            scrollable: false,
            ..self.clone()
        }
    }

    // =========================================================================
    // Tracks
    // =========================================================================

    /// Column divisions.
    #[inline]
    pub fn columns(&self) -> &[Division] {
        &self.columns
    }

    /// Row divisions.
    #[inline]
    pub fn rows(&self) -> &[Division] {
        &self.rows
    }

    /// Replace all column divisions.
    pub fn set_columns(&mut self, columns: Vec<Division>) {
        self.columns = columns;
    }

    /// Replace all row divisions.
    pub fn set_rows(&mut self, rows: Vec<Division>) {
        self.rows = rows;
    }

    /// Number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether a column is visible. Columns outside the grid count as visible.
    pub fn is_column_visible(&self, col: usize) -> bool {
        self.columns.get(col).is_none_or(Division::is_visible)
    }

    /// Whether a row is visible. Rows outside the grid count as visible.
    pub fn is_row_visible(&self, row: usize) -> bool {
        self.rows.get(row).is_none_or(Division::is_visible)
    }

    /// Show or hide a column.
    ///
    /// Returns `true` if the column exists and its visibility changed.
    pub fn set_column_visible(&mut self, col: usize, visible: bool) -> bool {
        Self::set_track_visible(&mut self.columns, col, visible)
    }

    /// Show or hide a row.
    ///
    /// Returns `true` if the row exists and its visibility changed.
    pub fn set_row_visible(&mut self, row: usize, visible: bool) -> bool {
        Self::set_track_visible(&mut self.rows, row, visible)
    }

    fn set_track_visible(tracks: &mut [Division], index: usize, visible: bool) -> bool {
        match tracks.get_mut(index) {
            Some(track) if track.hidden == visible => {
                track.hidden = !visible;
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Margins & Spacing
    // =========================================================================

    /// Get the content margins.
    #[inline]
    pub fn content_margins(&self) -> ContentMargins {
        self.margins
    }

    /// Set the content margins.
    pub fn set_content_margins(&mut self, margins: ContentMargins) {
        self.margins = margins;
    }

    /// Get horizontal spacing between columns.
    #[inline]
    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Set horizontal spacing between columns.
    pub fn set_horizontal_spacing(&mut self, spacing: f32) {
        self.horizontal_spacing = spacing;
    }

    /// Get vertical spacing between rows.
    #[inline]
    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    /// Set vertical spacing between rows.
    pub fn set_vertical_spacing(&mut self, spacing: f32) {
        self.vertical_spacing = spacing;
    }

    /// Set both horizontal and vertical spacing.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.horizontal_spacing = spacing;
        self.vertical_spacing = spacing;
    }

    // =========================================================================
    // Separators & Scrolling
    // =========================================================================

    /// Width and class of the separator between columns.
    pub fn horizontal_separator(&self) -> (f32, Option<&str>) {
        (
            self.horizontal_separator_width,
            self.horizontal_separator_class.as_deref(),
        )
    }

    /// Set the separator between columns.
    pub fn set_horizontal_separator(&mut self, width: f32, class: Option<String>) {
        self.horizontal_separator_width = width;
        self.horizontal_separator_class = class;
    }

    /// Width and class of the separator between rows.
    pub fn vertical_separator(&self) -> (f32, Option<&str>) {
        (
            self.vertical_separator_width,
            self.vertical_separator_class.as_deref(),
        )
    }

    /// Set the separator between rows.
    pub fn set_vertical_separator(&mut self, width: f32, class: Option<String>) {
        self.vertical_separator_width = width;
        self.vertical_separator_class = class;
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
}

impl Default for FormLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_layout_creation() {
        let layout = FormLayout::new();
        assert_eq!(layout.column_count(), 0);
        assert_eq!(layout.row_count(), 0);
        assert_eq!(layout.horizontal_spacing(), DEFAULT_SPACING);
        assert!(!layout.is_scrollable());
    }

    #[test]
    fn test_track_visibility() {
        let mut layout =
            FormLayout::with_tracks(vec![Division::flex(1.0); 3], vec![Division::fixed(30.0); 2]);

        assert!(layout.set_column_visible(1, false));
        assert!(!layout.set_column_visible(1, false));
        assert!(!layout.is_column_visible(1));
        assert!(layout.is_column_visible(0));

        assert!(!layout.set_row_visible(7, false));
        assert!(layout.is_row_visible(7));
    }

    #[test]
    fn test_empty_like_keeps_styling() {
        let mut layout = FormLayout::with_tracks(vec![Division::flex(1.0)], vec![]);
        layout.set_content_margins(ContentMargins::uniform(2.0));
        layout.set_horizontal_separator(1.0, Some("sep".into()));

        let empty = layout.empty_like();
        assert_eq!(empty.column_count(), 0);
        assert_eq!(empty.content_margins(), ContentMargins::uniform(2.0));
        assert_eq!(empty.horizontal_separator(), (1.0, Some("sep")));
    }
}
