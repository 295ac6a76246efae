//! Text rendering of a form container's placement, for logs and tests.

use std::fmt;

use crate::container::Container;

const CELL_WIDTH: usize = 10;

/// Renders the visible children of a form container as a text grid.
///
/// Each cell shows the name of the child occupying it (truncated), spans
/// repeat the name, empty cells show `.`.
///
/// ```text
/// 2x3
/// | name     | field    |
/// | note     | note     |
/// | btnSave  | .        |
/// ```
pub struct GridDump<'a> {
    container: &'a Container,
}

impl<'a> GridDump<'a> {
    /// Wrap a container for display.
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    fn cells(&self) -> Vec<Vec<Option<&'a str>>> {
        let container = self.container;
        let Some(layout) = container.form_layout() else {
            return Vec::new();
        };
        let columns = layout.column_count();
        let mut rows = layout.row_count();
        let visible: Vec<_> = container
            .children()
            .iter()
            .filter_map(|&id| {
                let child = container.child(id).filter(|c| c.is_visible())?;
                Some((child.name(), container.constraint(id)?))
            })
            .collect();
        for (_, constraint) in &visible {
            rows = rows.max(constraint.row + constraint.row_span.max(1));
        }

        let mut grid = vec![vec![None; columns]; rows];
        for (name, constraint) in visible {
            for (r, line) in grid.iter_mut().enumerate() {
                for (c, cell) in line.iter_mut().enumerate() {
                    if constraint.occupies(r, c) {
                        *cell = Some(name);
                    }
                }
            }
        }
        grid
    }
}

impl fmt::Display for GridDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.cells();
        let columns = grid.first().map_or(0, Vec::len);
        writeln!(f, "{columns}x{}", grid.len())?;
        for line in &grid {
            f.write_str("|")?;
            for cell in line {
                let name = cell.unwrap_or(".");
                let name: String = name.chars().take(CELL_WIDTH - 2).collect();
                write!(f, " {name:<width$} |", width = CELL_WIDTH - 2)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Child;
    use crate::layout::{Constraint, Division, FormLayout, VerticalLayout};

    #[test]
    fn test_dump() {
        let mut container = Container::new(FormLayout::with_tracks(
            vec![Division::flex(1.0); 2],
            vec![Division::fixed(30.0); 2],
        ));
        container.add_child(Child::new("name"), Constraint::at(0, 0));
        container.add_child(Child::new("note"), Constraint::spanning(1, 0, 1, 2));
        container.add_child(Child::new("ghost").hidden(), Constraint::at(0, 1));

        let text = GridDump::new(&container).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2x2");
        assert_eq!(lines[1], "| name     | .        |");
        assert_eq!(lines[2], "| note     | note     |");
    }

    #[test]
    fn test_dump_non_form() {
        let container = Container::new(VerticalLayout::new());
        assert_eq!(GridDump::new(&container).to_string(), "0x0\n");
    }
}
