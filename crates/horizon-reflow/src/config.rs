//! Engine configuration.
//!
//! [`EngineConfig`] carries everything the host supplies once at startup:
//! the screen names recognized for each profile, the label style class, the
//! action-control prefix, and the row length constants used by the packer.
//! It is an explicit value passed into resolvers and controllers, never
//! global state.
//!
//! # Loading
//!
//! ```toml
//! label_class = "label"
//! action_control_prefix = "btnSearch"
//!
//! [screens]
//! default = ["desktop"]
//! tablet = ["tablet", "tablet-landscape"]
//! mobile = ["phone"]
//! ```
//!
//! ```ignore
//! let config = EngineConfig::load("reflow.toml")?;
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use horizon_reflow_core::logging::targets;

use crate::error::{Error, Result};
use crate::profile::Profile;

/// Default floor for the reflowed row template's minimum length.
pub const DEFAULT_ROW_MIN_LENGTH: f32 = 10.0;

/// Default fixed length of a row holding an auto-height child.
pub const DEFAULT_AUTO_HEIGHT_ROW_LENGTH: f32 = 25.0;

/// Default style class marking label-role children.
pub const DEFAULT_LABEL_CLASS: &str = "label";

/// Screen names recognized for each profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenNames {
    pub default: Vec<String>,
    pub tablet: Vec<String>,
    pub mobile: Vec<String>,
}

impl ScreenNames {
    /// Screen names for a profile.
    pub fn for_profile(&self, profile: Profile) -> &[String] {
        match profile {
            Profile::Default => &self.default,
            Profile::Tablet => &self.tablet,
            Profile::Mobile => &self.mobile,
        }
    }

    fn for_profile_mut(&mut self, profile: Profile) -> &mut Vec<String> {
        match profile {
            Profile::Default => &mut self.default,
            Profile::Tablet => &mut self.tablet,
            Profile::Mobile => &mut self.mobile,
        }
    }
}

impl Default for ScreenNames {
    fn default() -> Self {
        Self {
            default: vec![Profile::Default.label().to_owned()],
            tablet: vec![Profile::Tablet.label().to_owned()],
            mobile: vec![Profile::Mobile.label().to_owned()],
        }
    }
}

/// Configuration shared by every responsive layout in a process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Host screen names per profile.
    pub screens: ScreenNames,
    /// Style class marking label-role children.
    pub label_class: String,
    /// Child-name prefix identifying the trailing action control.
    pub action_control_prefix: Option<String>,
    /// Floor for the reflowed row template's minimum length.
    pub row_min_length: f32,
    /// Fixed length installed for rows holding auto-height children.
    pub auto_height_row_length: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screens: ScreenNames::default(),
            label_class: DEFAULT_LABEL_CLASS.to_owned(),
            action_control_prefix: None,
            row_min_length: DEFAULT_ROW_MIN_LENGTH,
            auto_height_row_length: DEFAULT_AUTO_HEIGHT_ROW_LENGTH,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::config_io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Parse and validate a TOML configuration string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Check the semantic rules serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let mut owners: HashMap<&str, Profile> = HashMap::new();
        for profile in Profile::ALL {
            let names = self.screens.for_profile(profile);
            let field = format!("screens.{profile}");
            if names.is_empty() {
                return Err(Error::invalid_config(field, "at least one screen name is required"));
            }
            for name in names {
                if name.trim().is_empty() {
                    return Err(Error::invalid_config(field, "screen names must not be blank"));
                }
                if let Some(other) = owners.insert(name.as_str(), profile)
                    && other != profile
                {
                    return Err(Error::invalid_config(
                        field,
                        format!("screen '{name}' is already mapped to profile '{other}'"),
                    ));
                }
            }
        }

        for (field, value) in [
            ("row_min_length", self.row_min_length),
            ("auto_height_row_length", self.auto_height_row_length),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_config(
                    field,
                    format!("expected a non-negative length, got {value}"),
                ));
            }
        }

        if self.label_class.trim().is_empty() {
            return Err(Error::invalid_config("label_class", "must not be blank"));
        }
        Ok(())
    }

    /// Replace the screen names recognized for a profile.
    pub fn with_screens<I, S>(mut self, profile: Profile, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.screens.for_profile_mut(profile) = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the label style class.
    pub fn with_label_class(mut self, class: impl Into<String>) -> Self {
        self.label_class = class.into();
        self
    }

    /// Set the action-control name prefix.
    pub fn with_action_control_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.action_control_prefix = Some(prefix.into());
        self
    }

    /// Set the row template floor.
    pub fn with_row_min_length(mut self, length: f32) -> Self {
        self.row_min_length = length;
        self
    }

    /// Set the auto-height row length.
    pub fn with_auto_height_row_length(mut self, length: f32) -> Self {
        self.auto_height_row_length = length;
        self
    }

    /// Whether a child name identifies the trailing action control.
    pub fn is_action_control(&self, name: &str) -> bool {
        self.action_control_prefix
            .as_deref()
            .is_some_and(|prefix| !prefix.is_empty() && name.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.screens.for_profile(Profile::Mobile), ["mobile"]);
        assert_eq!(config.label_class, "label");
        assert_eq!(config.row_min_length, 10.0);
        assert_eq!(config.auto_height_row_length, 25.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = EngineConfig::from_toml_str(
            r#"
            action_control_prefix = "btnSearch"

            [screens]
            mobile = ["phone", "phone-landscape"]
            "#,
        )
        .unwrap();

        assert_eq!(config.screens.mobile, ["phone", "phone-landscape"]);
        assert_eq!(config.screens.tablet, ["tablet"]);
        assert!(config.is_action_control("btnSearchMain"));
        assert!(!config.is_action_control("btnReset"));
    }

    #[test]
    fn test_from_json() {
        let config =
            EngineConfig::from_json_str(r#"{"label_class": "caption", "row_min_length": 20}"#)
                .unwrap();
        assert_eq!(config.label_class, "caption");
        assert_eq!(config.row_min_length, 20.0);
    }

    #[test]
    fn test_duplicate_screen_rejected() {
        let config = EngineConfig::default()
            .with_screens(Profile::Mobile, ["small"])
            .with_screens(Profile::Tablet, ["small"]);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "screens.tablet"));
    }

    #[test]
    fn test_empty_screen_list_rejected() {
        let config = EngineConfig::default().with_screens(Profile::Default, Vec::<String>::new());
        assert!(matches!(config.validate(), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_negative_length_rejected() {
        let err = EngineConfig::from_toml_str("row_min_length = -1.0").unwrap_err();
        assert!(err.to_string().contains("row_min_length"));
    }

    #[test]
    fn test_parse_error() {
        let err = EngineConfig::from_toml_str("label_class = [").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/nonexistent/reflow.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigIo { .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::default().with_action_control_prefix("btn");
        let text = config.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_empty_prefix_matches_nothing() {
        let config = EngineConfig::default().with_action_control_prefix("");
        assert!(!config.is_action_control("anything"));
    }
}
