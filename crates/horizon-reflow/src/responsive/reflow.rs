//! The form packer.
//!
//! [`ReflowEngine::pack`] turns an ordered list of visible children into new
//! column tracks, row tracks and one constraint per child for a target column
//! count. It is a pure function of the [`LayoutSnapshot`]; installing the
//! result on a container is a separate step ([`ReflowEngine::install`]).
//!
//! # Algorithm
//!
//! 1. Column tracks are the first `N` original columns, padded with copies of
//!    the last one. The final column is always flexible and unshaded.
//! 2. A single flexible row template is derived, its minimum length the
//!    largest original row length among the first `N` rows, floored at
//!    [`EngineConfig::row_min_length`].
//! 3. Children are placed greedily left to right. Spans are clipped to the
//!    columns left in the row, never split. The action control is pinned to
//!    the last column and closes its row.
//! 4. Row heights only ever grow: auto-height children fix their row to
//!    [`EngineConfig::auto_height_row_length`] and per-profile minimum
//!    heights raise the row's floor.
//! 5. In single-column mode, rows holding label children are shaded.

use horizon_reflow_core::ChildId;
use horizon_reflow_core::logging::targets;

use crate::attributes::{ChildSettings, CollapseDirection, ProfileFormSettings};
use crate::config::EngineConfig;
use crate::container::Container;
use crate::layout::{Alignment, Constraint, Division, FormLayout, Length};
use crate::profile::Profile;

use super::markers;
use super::snapshot::LayoutSnapshot;

/// A child's reflowed placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub child: ChildId,
    pub constraint: Constraint,
}

/// Output of one packing pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReflowPlan {
    /// New column tracks.
    pub columns: Vec<Division>,
    /// New row tracks, one per packed row.
    pub rows: Vec<Division>,
    /// Placements in packing order.
    pub placements: Vec<Placement>,
}

impl ReflowPlan {
    /// Number of column tracks.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of row tracks.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Placement of a child.
    pub fn placement(&self, id: ChildId) -> Option<&Constraint> {
        self.placements
            .iter()
            .find(|p| p.child == id)
            .map(|p| &p.constraint)
    }

    /// Children of each row, left to right.
    pub fn rows_of_children(&self) -> Vec<Vec<ChildId>> {
        let mut rows = vec![Vec::new(); self.rows.len()];
        let mut sorted: Vec<&Placement> = self.placements.iter().collect();
        sorted.sort_by_key(|p| (p.constraint.row, p.constraint.col));
        for placement in sorted {
            if let Some(row) = rows.get_mut(placement.constraint.row) {
                row.push(placement.child);
            }
        }
        rows
    }
}

/// Computes reflowed tracks and placements.
#[derive(Debug, Clone, Copy)]
pub struct ReflowEngine<'a> {
    config: &'a EngineConfig,
}

impl<'a> ReflowEngine<'a> {
    /// Create an engine reading constants from `config`.
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Column tracks for `count` columns.
    pub fn column_tracks(
        original: &FormLayout,
        count: usize,
        direction: CollapseDirection,
    ) -> Vec<Division> {
        if count == 0 {
            return Vec::new();
        }
        let mut columns: Vec<Division> = original.columns().iter().take(count).cloned().collect();
        let filler = columns.last().cloned().unwrap_or_else(|| Division::flex(1.0));
        columns.resize(count, filler);

        if direction == CollapseDirection::Vertical {
            for (idx, column) in columns.iter_mut().enumerate() {
                let row = original.rows().get(idx);
                column.shades = row.is_some_and(|r| r.shades);
                column.shade_color = row.and_then(|r| r.shade_color.clone());
            }
        }

        for column in &mut columns {
            column.hidden = false;
        }
        if let Some(last) = columns.last_mut() {
            last.length = Length::Fr(1.0);
            last.shades = false;
        }
        columns
    }

    /// The row template for `count` columns.
    pub fn row_template(&self, original: &FormLayout, count: usize) -> Division {
        let floor = original
            .rows()
            .iter()
            .take(count)
            .map(|row| row.length.value())
            .fold(self.config.row_min_length, f32::max);
        Division::flex(1.0).with_min_length(floor)
    }

    /// Pack `visible` children, already in fill order, into `count` columns.
    pub fn pack(
        &self,
        visible: &[ChildId],
        snapshot: &LayoutSnapshot,
        profile: Profile,
        count: usize,
    ) -> ReflowPlan {
        if count == 0 {
            return ReflowPlan::default();
        }
        let original = snapshot.layout();
        let columns = Self::column_tracks(original, count, snapshot.settings().collapse_direction);
        let template = self.row_template(original, count);
        let fallback = ChildSettings::default();

        let mut rows: Vec<Division> = Vec::new();
        let mut placements = Vec::with_capacity(visible.len());
        let mut row = 0;
        let mut col = 0;

        for &id in visible {
            if rows.len() <= row {
                rows.push(template.clone());
            }
            let original_constraint = snapshot.constraint(id).cloned().unwrap_or_else(|| {
                tracing::warn!(target: targets::REFLOW, ?id, "child missing from snapshot");
                Constraint::default()
            });
            let settings = snapshot.child_settings(id).unwrap_or(&fallback);

            let span = original_constraint.effective_col_span().min(count - col);
            let constraint = if settings.is_action_control {
                Constraint {
                    horizontal_align: Some(Alignment::End),
                    width: original_constraint.width,
                    ..Constraint::at(row, count - 1)
                }
            } else {
                Constraint::spanning(row, col, 1, span)
            }
            .with_ignore_spacing(original_constraint.ignore_spacing);

            tracing::trace!(
                target: targets::REFLOW,
                ?id,
                row = constraint.row,
                col = constraint.col,
                span = constraint.col_span,
                "placed child"
            );

            if let Some(track) = rows.get_mut(row) {
                if settings.needs_auto_height && !track.auto_sizing {
                    track.length = Length::Px(self.config.auto_height_row_length);
                    track.auto_sizing = true;
                }
                if let Some(height) = settings.min_height(profile) {
                    track.raise_floor(height);
                }
                if count == 1 && settings.is_label {
                    track.shades = true;
                }
            }

            col = if settings.is_action_control {
                count
            } else {
                col + span
            };
            placements.push(Placement { child: id, constraint });

            if col >= count {
                row += 1;
                col = 0;
            }
        }

        ReflowPlan {
            columns,
            rows,
            placements,
        }
    }

    /// A track-less copy of the original layout with profile margins and spacing.
    ///
    /// A horizontal margin `m` also sets horizontal spacing to `2m`, likewise
    /// vertically. Explicit spacing settings win over the derived spacing.
    pub fn profile_layout(
        original: &FormLayout,
        settings: Option<&ProfileFormSettings>,
    ) -> FormLayout {
        let mut layout = original.empty_like();
        let Some(settings) = settings else {
            return layout;
        };

        let mut margins = layout.content_margins();
        if let Some(m) = settings.horizontal_margin {
            margins.left = m;
            margins.right = m;
            layout.set_horizontal_spacing(m * 2.0);
        }
        if let Some(m) = settings.vertical_margin {
            margins.top = m;
            margins.bottom = m;
            layout.set_vertical_spacing(m * 2.0);
        }
        layout.set_content_margins(margins);

        if let Some(spacing) = settings.horizontal_spacing {
            layout.set_horizontal_spacing(spacing);
        }
        if let Some(spacing) = settings.vertical_spacing {
            layout.set_vertical_spacing(spacing);
        }
        layout
    }

    /// Install a plan on a container.
    ///
    /// Sets the tracks on `layout`, installs it, replaces every packed
    /// child's constraint, reorders siblings to packing order and tags the
    /// container with the collapse classes.
    pub fn install(
        container: &mut Container,
        plan: ReflowPlan,
        mut layout: FormLayout,
        custom_class: Option<&str>,
    ) {
        let column_count = plan.column_count();
        layout.set_columns(plan.columns);
        layout.set_rows(plan.rows);
        layout.set_scrollable(true);
        container.set_layout(layout);

        for (position, placement) in plan.placements.into_iter().enumerate() {
            container.reorder_child(placement.child, position);
            container.replace_constraint(placement.child, placement.constraint);
        }

        markers::clear(container, custom_class);
        markers::apply(container, column_count, custom_class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::names;
    use crate::container::Child;

    fn form(columns: usize, rows: usize) -> Container {
        Container::new(FormLayout::with_tracks(
            vec![Division::fixed(80.0); columns],
            vec![Division::fixed(30.0); rows],
        ))
    }

    fn pack(container: &Container, config: &EngineConfig, profile: Profile, count: usize) -> ReflowPlan {
        let snapshot = LayoutSnapshot::capture(container, config).unwrap();
        let visible: Vec<ChildId> = container.children().to_vec();
        ReflowEngine::new(config).pack(&visible, &snapshot, profile, count)
    }

    #[test]
    fn test_column_tracks_truncate_and_flex_last() {
        let mut original = FormLayout::with_tracks(
            vec![
                Division::fixed(100.0).shaded(Some("#eee")),
                Division::fixed(200.0).hidden(),
                Division::fixed(300.0),
            ],
            Vec::new(),
        );
        original.set_scrollable(false);

        let columns = ReflowEngine::column_tracks(&original, 2, CollapseDirection::Horizontal);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].length, Length::Px(100.0));
        assert!(columns[0].shades);
        assert_eq!(columns[1].length, Length::Fr(1.0));
        assert!(!columns[1].shades);
        assert!(columns.iter().all(Division::is_visible));
    }

    #[test]
    fn test_column_tracks_pad_with_copies() {
        let original = FormLayout::with_tracks(
            vec![Division::fixed(60.0).with_min_length(20.0)],
            Vec::new(),
        );
        let columns = ReflowEngine::column_tracks(&original, 3, CollapseDirection::Horizontal);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[1], Division::fixed(60.0).with_min_length(20.0));
        assert_eq!(columns[2].length, Length::Fr(1.0));
        assert_eq!(columns[2].min_length, 20.0);

        let empty = ReflowEngine::column_tracks(&FormLayout::new(), 2, CollapseDirection::Horizontal);
        assert_eq!(empty, vec![Division::flex(1.0); 2]);
    }

    #[test]
    fn test_column_tracks_vertical_take_row_shading() {
        let original = FormLayout::with_tracks(
            vec![Division::fixed(80.0); 3],
            vec![Division::fixed(30.0).shaded(None), Division::fixed(30.0)],
        );
        let columns = ReflowEngine::column_tracks(&original, 3, CollapseDirection::Vertical);
        assert!(columns[0].shades);
        assert!(!columns[1].shades);
        assert!(!columns[2].shades);
    }

    #[test]
    fn test_row_template_floor() {
        let config = EngineConfig::default();
        let engine = ReflowEngine::new(&config);
        let original = FormLayout::with_tracks(
            Vec::new(),
            vec![Division::fixed(8.0), Division::fixed(42.0), Division::fixed(99.0)],
        );
        assert_eq!(engine.row_template(&original, 1).min_length, 10.0);
        assert_eq!(engine.row_template(&original, 2).min_length, 42.0);
        assert_eq!(engine.row_template(&original, 2).length, Length::Fr(1.0));
    }

    #[test]
    fn test_span_clipped_and_row_advanced() {
        let config = EngineConfig::default();
        let mut container = form(4, 2);
        let a = container.add_child(Child::new("a"), Constraint::at(0, 0));
        let wide = container.add_child(Child::new("wide"), Constraint::spanning(0, 1, 1, 4));
        let b = container.add_child(Child::new("b"), Constraint::at(1, 0));

        let plan = pack(&container, &config, Profile::Mobile, 2);
        assert_eq!(plan.placement(a), Some(&Constraint::at(0, 0)));
        assert_eq!(plan.placement(wide), Some(&Constraint::at(0, 1)));
        assert_eq!(plan.placement(b), Some(&Constraint::at(1, 0)));
        assert_eq!(plan.row_count(), 2);
    }

    #[test]
    fn test_action_control_pinned() {
        let config = EngineConfig::default().with_action_control_prefix("btnSearch");
        let mut container = form(4, 1);
        let a = container.add_child(Child::new("a"), Constraint::at(0, 0));
        let search = container.add_child(
            Child::new("btnSearch"),
            Constraint::spanning(0, 1, 1, 2).with_width(90.0),
        );
        let b = container.add_child(Child::new("b"), Constraint::at(0, 3));

        let plan = pack(&container, &config, Profile::Tablet, 3);
        let pinned = plan.placement(search).unwrap();
        assert_eq!((pinned.row, pinned.col, pinned.col_span), (0, 2, 1));
        assert_eq!(pinned.horizontal_align, Some(Alignment::End));
        assert_eq!(pinned.width, Some(90.0));
        assert_eq!(plan.placement(a).map(|c| (c.row, c.col)), Some((0, 0)));
        assert_eq!(plan.placement(b).map(|c| (c.row, c.col)), Some((1, 0)));
    }

    #[test]
    fn test_height_accretion() {
        let config = EngineConfig::default();
        let mut container = form(2, 1);
        container.add_child(
            Child::new("a").with_attr(names::MOBILE_MIN_HEIGHT, "60"),
            Constraint::at(0, 0),
        );
        container.add_child(
            Child::new("b").with_attr(names::MOBILE_MIN_HEIGHT, "45px"),
            Constraint::at(0, 1),
        );
        container.add_child(
            Child::new("grid").with_attr(names::NEEDS_AUTO_HEIGHT, "true"),
            Constraint::at(1, 0),
        );
        container.add_child(
            Child::new("tall").with_attr(names::MOBILE_MIN_HEIGHT, "200"),
            Constraint::at(1, 1),
        );

        let plan = pack(&container, &config, Profile::Mobile, 1);
        assert_eq!(plan.row_count(), 4);
        assert_eq!(plan.rows[0].min_length, 60.0);
        assert_eq!(plan.rows[1].min_length, 45.0);
        assert_eq!(plan.rows[2].length, Length::Px(25.0));
        assert!(plan.rows[2].auto_sizing);
        assert_eq!(plan.rows[3].min_length, 200.0);

        // Tablet ignores mobile heights.
        let plan = pack(&container, &config, Profile::Tablet, 1);
        assert_eq!(plan.rows[0].min_length, 30.0);
    }

    #[test]
    fn test_label_rows_shaded_in_single_column() {
        let config = EngineConfig::default();
        let mut container = form(2, 1);
        container.add_child(Child::new("caption").with_class("label"), Constraint::at(0, 0));
        container.add_child(Child::new("value"), Constraint::at(0, 1));

        let single = pack(&container, &config, Profile::Mobile, 1);
        assert!(single.rows[0].shades);
        assert!(!single.rows[1].shades);

        let double = pack(&container, &config, Profile::Mobile, 2);
        assert!(!double.rows[0].shades);
    }

    #[test]
    fn test_profile_layout_margins() {
        let mut original = FormLayout::new();
        original.set_spacing(4.0);
        let settings = ProfileFormSettings {
            horizontal_margin: Some(5.0),
            vertical_spacing: Some(3.0),
            vertical_margin: Some(8.0),
            ..Default::default()
        };

        let layout = ReflowEngine::profile_layout(&original, Some(&settings));
        let margins = layout.content_margins();
        assert_eq!((margins.left, margins.right), (5.0, 5.0));
        assert_eq!((margins.top, margins.bottom), (8.0, 8.0));
        assert_eq!(layout.horizontal_spacing(), 10.0);
        assert_eq!(layout.vertical_spacing(), 3.0);
        assert!(layout.columns().is_empty());

        let untouched = ReflowEngine::profile_layout(&original, None);
        assert_eq!(untouched.horizontal_spacing(), 4.0);
    }

    #[test]
    fn test_install_tags_and_reorders() {
        let config = EngineConfig::default();
        let mut container = form(2, 1);
        let a = container.add_child(Child::new("a"), Constraint::at(0, 1));
        let b = container.add_child(Child::new("b"), Constraint::at(0, 0));
        let snapshot = LayoutSnapshot::capture(&container, &config).unwrap();

        let plan = ReflowEngine::new(&config).pack(&[b, a], &snapshot, Profile::Mobile, 1);
        let layout = ReflowEngine::profile_layout(snapshot.layout(), None);
        ReflowEngine::install(&mut container, plan, layout, Some("compact"));

        assert_eq!(container.children(), [b, a]);
        assert_eq!(container.constraint(a), Some(&Constraint::at(1, 0)));
        assert!(container.form_layout().unwrap().is_scrollable());
        assert!(container.has_class("collapsed"));
        assert!(container.has_class("collapsed-1"));
        assert!(container.has_class("compact"));
    }

    #[test]
    fn test_zero_columns_is_empty() {
        let config = EngineConfig::default();
        let mut container = form(2, 1);
        container.add_child(Child::new("a"), Constraint::at(0, 0));
        assert_eq!(pack(&container, &config, Profile::Mobile, 0), ReflowPlan::default());
    }
}
