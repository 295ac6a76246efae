//! Row and column track definitions.

use std::fmt;

/// The length expression of a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// A fixed size in pixels (`"120px"`).
    Px(f32),
    /// A flexible share of the remaining space (`"1fr"`).
    Fr(f32),
}

impl Length {
    /// Parse a length expression such as `"120px"`, `"120"` or `"2fr"`.
    ///
    /// Returns `None` for anything that is not a finite, non-negative number
    /// with an optional `px` or `fr` suffix.
    pub fn parse(expr: &str) -> Option<Self> {
        let expr = expr.trim();
        let (number, flexible) = if let Some(number) = expr.strip_suffix("fr") {
            (number, true)
        } else if let Some(number) = expr.strip_suffix("px") {
            (number, false)
        } else {
            (expr, false)
        };
        let value: f32 = number.trim().parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(if flexible {
            Self::Fr(value)
        } else {
            Self::Px(value)
        })
    }

    /// The numeric part of the expression, with the unit stripped.
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Self::Px(v) | Self::Fr(v) => v,
        }
    }

    /// Whether this is a flexible (`fr`) length.
    #[inline]
    pub fn is_flexible(self) -> bool {
        matches!(self, Self::Fr(_))
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::Fr(1.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Fr(v) => write!(f, "{v}fr"),
        }
    }
}

/// A single row or column track.
///
/// Divisions are value objects: the engine copies them whenever it reuses
/// one, it never shares them between layouts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Division {
    /// Track length.
    pub length: Length,
    /// Minimum length in pixels (meaningful for flexible tracks).
    pub min_length: f32,
    /// Whether the track grows to fit its content.
    pub auto_sizing: bool,
    /// Whether the track is hidden.
    pub hidden: bool,
    /// Whether the track is shaded.
    pub shades: bool,
    /// Custom shade color, if any.
    pub shade_color: Option<String>,
}

impl Division {
    /// Create a track with the given length and default styling.
    pub fn new(length: Length) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Create a fixed pixel track.
    pub fn fixed(px: f32) -> Self {
        Self::new(Length::Px(px))
    }

    /// Create a flexible track.
    pub fn flex(fr: f32) -> Self {
        Self::new(Length::Fr(fr))
    }

    /// Set the minimum length.
    pub fn with_min_length(mut self, min_length: f32) -> Self {
        self.min_length = min_length;
        self
    }

    /// Mark the track hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Shade the track, optionally with a custom color.
    pub fn shaded(mut self, color: Option<&str>) -> Self {
        self.shades = true;
        self.shade_color = color.map(str::to_owned);
        self
    }

    /// Enable auto-sizing.
    pub fn auto_sized(mut self) -> Self {
        self.auto_sizing = true;
        self
    }

    /// Whether the track is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    /// Raise the track's height floor to at least `height`.
    ///
    /// Flexible tracks raise their minimum length, fixed tracks raise their
    /// length. Never shrinks.
    pub fn raise_floor(&mut self, height: f32) {
        match self.length {
            Length::Fr(_) => self.min_length = self.min_length.max(height),
            Length::Px(px) => self.length = Length::Px(px.max(height)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_parse() {
        assert_eq!(Length::parse("120px"), Some(Length::Px(120.0)));
        assert_eq!(Length::parse(" 40 "), Some(Length::Px(40.0)));
        assert_eq!(Length::parse("2fr"), Some(Length::Fr(2.0)));
        assert_eq!(Length::parse("auto"), None);
        assert_eq!(Length::parse("-3px"), None);
    }

    #[test]
    fn test_length_display() {
        assert_eq!(Length::Px(25.0).to_string(), "25px");
        assert_eq!(Length::Fr(1.0).to_string(), "1fr");
        assert_eq!(Length::parse(&Length::Fr(1.5).to_string()), Some(Length::Fr(1.5)));
    }

    #[test]
    fn test_raise_floor_is_monotonic() {
        let mut flexible = Division::flex(1.0).with_min_length(30.0);
        flexible.raise_floor(20.0);
        assert_eq!(flexible.min_length, 30.0);
        flexible.raise_floor(80.0);
        assert_eq!(flexible.min_length, 80.0);

        let mut fixed = Division::fixed(25.0);
        fixed.raise_floor(60.0);
        assert_eq!(fixed.length, Length::Px(60.0));
        fixed.raise_floor(10.0);
        assert_eq!(fixed.length, Length::Px(60.0));
    }

    #[test]
    fn test_builders() {
        let division = Division::fixed(100.0).hidden().shaded(Some("#eee"));
        assert!(!division.is_visible());
        assert!(division.shades);
        assert_eq!(division.shade_color.as_deref(), Some("#eee"));
    }
}
