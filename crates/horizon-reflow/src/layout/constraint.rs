//! Per-child placement in a form layout.

use super::Alignment;

/// A child's placement within a form layout.
///
/// Exactly one constraint exists per (container, child) pair. The engine
/// replaces constraints wholesale on every reflow and never patches them.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// The starting row.
    pub row: usize,
    /// The starting column.
    pub col: usize,
    /// Number of rows this child spans.
    pub row_span: usize,
    /// Number of columns this child spans.
    pub col_span: usize,
    /// Horizontal alignment within the cell, if not the layout default.
    pub horizontal_align: Option<Alignment>,
    /// Vertical alignment within the cell, if not the layout default.
    pub vertical_align: Option<Alignment>,
    /// Fixed width in pixels, if any.
    pub width: Option<f32>,
    /// Whether the child ignores the layout's spacing.
    pub ignore_spacing: bool,
}

impl Constraint {
    /// Place a child in a single cell.
    pub fn at(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
            horizontal_align: None,
            vertical_align: None,
            width: None,
            ignore_spacing: false,
        }
    }

    /// Place a child spanning multiple rows and/or columns.
    ///
    /// Spans are clamped to at least one.
    pub fn spanning(row: usize, col: usize, row_span: usize, col_span: usize) -> Self {
        Self {
            row_span: row_span.max(1),
            col_span: col_span.max(1),
            ..Self::at(row, col)
        }
    }

    /// Set the horizontal alignment.
    pub fn with_horizontal_align(mut self, alignment: Alignment) -> Self {
        self.horizontal_align = Some(alignment);
        self
    }

    /// Set the vertical alignment.
    pub fn with_vertical_align(mut self, alignment: Alignment) -> Self {
        self.vertical_align = Some(alignment);
        self
    }

    /// Set a fixed width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Make the child ignore layout spacing.
    pub fn with_ignore_spacing(mut self, ignore: bool) -> Self {
        self.ignore_spacing = ignore;
        self
    }

    /// The column span, treating a zero span as one.
    #[inline]
    pub fn effective_col_span(&self) -> usize {
        self.col_span.max(1)
    }

    /// One past the last column this child covers.
    #[inline]
    pub fn col_end(&self) -> usize {
        self.col + self.effective_col_span()
    }

    /// Check if this constraint occupies the given cell.
    pub fn occupies(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.row_span.max(1)
            && col >= self.col
            && col < self.col_end()
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::at(0, 0)
    }
}
