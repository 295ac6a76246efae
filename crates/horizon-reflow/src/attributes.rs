//! Host attributes and the typed settings parsed from them.
//!
//! Hosts configure responsive behavior through string-valued attributes on
//! containers and children. The engine parses those strings exactly once per
//! backup into [`FormSettings`], [`ChildSettings`] and [`VerticalSettings`]
//! so the packer never coerces strings.
//!
//! Parsing is lenient: booleans are the literal string `"true"`, numbers may
//! carry a `px` suffix, and anything unparsable is treated as absent.

use std::collections::BTreeMap;

use crate::config::EngineConfig;
use crate::container::Child;
use crate::profile::Profile;

/// Recognized attribute names.
pub mod names {
    pub const MOBILE_COLUMN_COUNT: &str = "mobile-column-count";
    pub const TABLET_COLUMN_COUNT: &str = "tablet-column-count";
    pub const MOBILE_H_MARGIN: &str = "mobile-horizontal-margin";
    pub const TABLET_H_MARGIN: &str = "tablet-horizontal-margin";
    pub const MOBILE_V_MARGIN: &str = "mobile-vertical-margin";
    pub const TABLET_V_MARGIN: &str = "tablet-vertical-margin";
    pub const MOBILE_H_SPACING: &str = "mobile-h-spacing";
    pub const TABLET_H_SPACING: &str = "tablet-h-spacing";
    pub const MOBILE_V_SPACING: &str = "mobile-v-spacing";
    pub const TABLET_V_SPACING: &str = "tablet-v-spacing";
    pub const COLLAPSE_DIRECTION: &str = "collapse-direction";
    pub const CUSTOM_CLASS: &str = "custom-class-name";

    pub const HIDE_ON_MOBILE: &str = "hide-on-mobile";
    pub const HIDE_ON_TABLET: &str = "hide-on-tablet";
    pub const MOBILE_MIN_HEIGHT: &str = "mobile-min-height";
    pub const TABLET_MIN_HEIGHT: &str = "tablet-min-height";
    pub const MOBILE_INDEX: &str = "mobile-index";
    pub const TABLET_INDEX: &str = "tablet-index";
    pub const NEEDS_AUTO_HEIGHT: &str = "needs-auto-height";
    pub const SLIDE_PAGE_ITEM: &str = "slide-page-item";

    pub const MOBILE_FIT: &str = "mobile-fit";
    pub const TABLET_FIT: &str = "tablet-fit";
    pub const MOBILE_TOP_MARGIN: &str = "mobile-top-margin";
    pub const MOBILE_RIGHT_MARGIN: &str = "mobile-right-margin";
    pub const MOBILE_BOTTOM_MARGIN: &str = "mobile-bottom-margin";
    pub const MOBILE_LEFT_MARGIN: &str = "mobile-left-margin";
    pub const MOBILE_SPACING: &str = "mobile-spacing";
    pub const TABLET_TOP_MARGIN: &str = "tablet-top-margin";
    pub const TABLET_RIGHT_MARGIN: &str = "tablet-right-margin";
    pub const TABLET_BOTTOM_MARGIN: &str = "tablet-bottom-margin";
    pub const TABLET_LEFT_MARGIN: &str = "tablet-left-margin";
    pub const TABLET_SPACING: &str = "tablet-spacing";
}

/// A string-keyed, string-valued attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Set an attribute, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove an attribute.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Whether the attribute is present with a non-blank value.
    pub fn is_declared(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.trim().is_empty())
    }

    /// Whether the attribute is the literal `"true"`.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// `Some(true)` / `Some(false)` for the literals, `None` otherwise.
    pub fn tri_state(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    /// A length, with an optional `px` suffix.
    pub fn number(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(parse_number)
    }

    /// An integer such as an order index.
    pub fn integer(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn parse_number(raw: &str) -> Option<f32> {
    let raw = raw.trim();
    let raw = raw.strip_suffix("px").unwrap_or(raw).trim_end();
    raw.parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Picks the per-profile attribute name; the default profile has none.
fn profile_key(profile: Profile, mobile: &'static str, tablet: &'static str) -> Option<&'static str> {
    match profile {
        Profile::Mobile => Some(mobile),
        Profile::Tablet => Some(tablet),
        Profile::Default => None,
    }
}

/// Order in which the form packer fills the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CollapseDirection {
    /// Row-major: ties broken by original row, then column.
    #[default]
    Horizontal,
    /// Column-major: ties broken by original column, then row.
    Vertical,
}

impl CollapseDirection {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("vertical") => Self::Vertical,
            _ => Self::Horizontal,
        }
    }
}

/// Form settings for one compact profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFormSettings {
    pub column_count: Option<usize>,
    pub horizontal_margin: Option<f32>,
    pub vertical_margin: Option<f32>,
    pub horizontal_spacing: Option<f32>,
    pub vertical_spacing: Option<f32>,
}

impl ProfileFormSettings {
    fn parse(attrs: &Attributes, profile: Profile) -> Self {
        use names::*;
        let key = |mobile, tablet| profile_key(profile, mobile, tablet);
        Self {
            column_count: key(MOBILE_COLUMN_COUNT, TABLET_COLUMN_COUNT)
                .and_then(|k| attrs.integer(k))
                .and_then(|n| usize::try_from(n).ok()),
            horizontal_margin: key(MOBILE_H_MARGIN, TABLET_H_MARGIN).and_then(|k| attrs.number(k)),
            vertical_margin: key(MOBILE_V_MARGIN, TABLET_V_MARGIN).and_then(|k| attrs.number(k)),
            horizontal_spacing: key(MOBILE_H_SPACING, TABLET_H_SPACING)
                .and_then(|k| attrs.number(k)),
            vertical_spacing: key(MOBILE_V_SPACING, TABLET_V_SPACING)
                .and_then(|k| attrs.number(k)),
        }
    }
}

/// Container-level settings of a responsive form layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSettings {
    pub mobile: ProfileFormSettings,
    pub tablet: ProfileFormSettings,
    pub collapse_direction: CollapseDirection,
    pub custom_class: Option<String>,
}

impl FormSettings {
    /// Parse from container attributes.
    pub fn parse(attrs: &Attributes) -> Self {
        Self {
            mobile: ProfileFormSettings::parse(attrs, Profile::Mobile),
            tablet: ProfileFormSettings::parse(attrs, Profile::Tablet),
            collapse_direction: CollapseDirection::parse(attrs.get(names::COLLAPSE_DIRECTION)),
            custom_class: attrs
                .get(names::CUSTOM_CLASS)
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_owned),
        }
    }

    /// Settings for a compact profile.
    pub fn profile(&self, profile: Profile) -> Option<&ProfileFormSettings> {
        match profile {
            Profile::Mobile => Some(&self.mobile),
            Profile::Tablet => Some(&self.tablet),
            Profile::Default => None,
        }
    }

    /// Declared column count for a profile.
    pub fn column_count(&self, profile: Profile) -> Option<usize> {
        self.profile(profile).and_then(|p| p.column_count)
    }
}

/// Per-child settings consumed by ordering, visibility and packing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildSettings {
    pub hide_on_mobile: bool,
    pub hide_on_tablet: bool,
    pub mobile_min_height: Option<f32>,
    pub tablet_min_height: Option<f32>,
    pub mobile_index: Option<i32>,
    pub tablet_index: Option<i32>,
    pub needs_auto_height: bool,
    /// Excluded from reflow entirely (e.g. a pagination strip).
    pub excluded: bool,
    /// Carries the configured label style class.
    pub is_label: bool,
    /// Name starts with the configured action-control prefix.
    pub is_action_control: bool,
}

impl ChildSettings {
    /// Parse from a child's attributes, name and classes.
    pub fn from_child(child: &Child, config: &EngineConfig) -> Self {
        let attrs = child.attributes();
        Self {
            hide_on_mobile: attrs.flag(names::HIDE_ON_MOBILE),
            hide_on_tablet: attrs.flag(names::HIDE_ON_TABLET),
            mobile_min_height: attrs.number(names::MOBILE_MIN_HEIGHT),
            tablet_min_height: attrs.number(names::TABLET_MIN_HEIGHT),
            mobile_index: attrs.integer(names::MOBILE_INDEX),
            tablet_index: attrs.integer(names::TABLET_INDEX),
            needs_auto_height: attrs.flag(names::NEEDS_AUTO_HEIGHT),
            excluded: is_excluded(child),
            is_label: child.has_class(&config.label_class),
            is_action_control: config.is_action_control(child.name()),
        }
    }

    /// Whether the child asks to be hidden on a profile.
    pub fn hidden_on(&self, profile: Profile) -> bool {
        match profile {
            Profile::Mobile => self.hide_on_mobile,
            Profile::Tablet => self.hide_on_tablet,
            Profile::Default => false,
        }
    }

    /// Minimum row height requested on a profile.
    pub fn min_height(&self, profile: Profile) -> Option<f32> {
        match profile {
            Profile::Mobile => self.mobile_min_height,
            Profile::Tablet => self.tablet_min_height,
            Profile::Default => None,
        }
    }

    /// Explicit order index on a profile.
    pub fn order_index(&self, profile: Profile) -> Option<i32> {
        match profile {
            Profile::Mobile => self.mobile_index,
            Profile::Tablet => self.tablet_index,
            Profile::Default => None,
        }
    }
}

/// Whether a child is excluded from reflow.
pub fn is_excluded(child: &Child) -> bool {
    child.attributes().flag(names::SLIDE_PAGE_ITEM)
}

/// Vertical layout settings for one compact profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileVerticalSettings {
    /// Fit the layout on this profile (`"true"` only).
    pub fit: bool,
    /// Whether a fit attribute is present at all, whatever its value.
    pub declares_fit: bool,
    pub top_margin: Option<f32>,
    pub right_margin: Option<f32>,
    pub bottom_margin: Option<f32>,
    pub left_margin: Option<f32>,
    pub spacing: Option<f32>,
    /// Explicit `"true"` / `"false"` hide flag.
    pub hide: Option<bool>,
}

impl ProfileVerticalSettings {
    fn parse(attrs: &Attributes, profile: Profile) -> Self {
        use names::*;
        let key = |mobile, tablet| profile_key(profile, mobile, tablet);
        let number = |mobile, tablet| key(mobile, tablet).and_then(|k| attrs.number(k));
        Self {
            fit: key(MOBILE_FIT, TABLET_FIT).is_some_and(|k| attrs.flag(k)),
            declares_fit: key(MOBILE_FIT, TABLET_FIT).is_some_and(|k| attrs.is_declared(k)),
            top_margin: number(MOBILE_TOP_MARGIN, TABLET_TOP_MARGIN),
            right_margin: number(MOBILE_RIGHT_MARGIN, TABLET_RIGHT_MARGIN),
            bottom_margin: number(MOBILE_BOTTOM_MARGIN, TABLET_BOTTOM_MARGIN),
            left_margin: number(MOBILE_LEFT_MARGIN, TABLET_LEFT_MARGIN),
            spacing: number(MOBILE_SPACING, TABLET_SPACING),
            hide: key(HIDE_ON_MOBILE, HIDE_ON_TABLET).and_then(|k| attrs.tri_state(k)),
        }
    }
}

/// Container-level settings of a responsive vertical layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalSettings {
    pub mobile: ProfileVerticalSettings,
    pub tablet: ProfileVerticalSettings,
}

impl VerticalSettings {
    /// Parse from container attributes.
    pub fn parse(attrs: &Attributes) -> Self {
        Self {
            mobile: ProfileVerticalSettings::parse(attrs, Profile::Mobile),
            tablet: ProfileVerticalSettings::parse(attrs, Profile::Tablet),
        }
    }

    /// Settings for a compact profile.
    pub fn profile(&self, profile: Profile) -> Option<&ProfileVerticalSettings> {
        match profile {
            Profile::Mobile => Some(&self.mobile),
            Profile::Tablet => Some(&self.tablet),
            Profile::Default => None,
        }
    }

    /// Whether any profile declares a `fit` attribute.
    pub fn is_responsive(&self) -> bool {
        self.mobile.declares_fit || self.tablet.declares_fit
    }

    /// Whether the container is meant only for compact screens.
    pub fn compact_only(&self) -> bool {
        self.mobile.hide == Some(false) || self.tablet.hide == Some(false)
    }
}
