//! Style classes tagging a reflowed container.

use crate::container::Container;

/// Class added to every reflowed container.
pub const COLLAPSED_CLASS: &str = "collapsed";

/// Tag a container as collapsed to `column_count` columns.
pub fn apply(container: &mut Container, column_count: usize, custom_class: Option<&str>) {
    container.add_class(COLLAPSED_CLASS);
    container.add_class(format!("{COLLAPSED_CLASS}-{column_count}"));
    if let Some(custom) = custom_class {
        container.add_class(custom);
    }
}

/// Remove every `collapsed*` class and the custom class.
pub fn clear(container: &mut Container, custom_class: Option<&str>) {
    container.remove_classes(|class| {
        class.starts_with(COLLAPSED_CLASS) || Some(class) == custom_class
    });
}
