//! Screen profiles and their resolution from host screen names.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// A logical screen profile, the unit of responsive configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Desktop-sized screens; the layout as authored.
    Default,
    /// Medium screens.
    Tablet,
    /// Small screens.
    Mobile,
}

impl Profile {
    /// All profiles, in resolution priority order.
    pub const ALL: [Profile; 3] = [Profile::Mobile, Profile::Tablet, Profile::Default];

    /// The profile's own label, also its default screen name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
        }
    }

    /// Whether this is one of the compact (non-default) profiles.
    #[inline]
    pub fn is_compact(self) -> bool {
        !matches!(self, Self::Default)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "tablet" => Ok(Self::Tablet),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("unknown profile '{other}'")),
        }
    }
}

/// Maps host screen names to profiles.
///
/// Each profile recognizes the list of screen names configured in
/// [`EngineConfig::screens`]. Unknown screen names resolve to no profile,
/// which callers treat as "no active transform".
#[derive(Debug, Clone)]
pub struct ScreenProfileResolver {
    config: Arc<EngineConfig>,
}

impl ScreenProfileResolver {
    /// Create a resolver over the given configuration.
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    /// Resolve a host screen name to a profile.
    pub fn resolve(&self, screen: &str) -> Option<Profile> {
        Profile::ALL
            .into_iter()
            .find(|&profile| self.screens(profile).iter().any(|name| name == screen))
    }

    /// Screen names recognized for a profile.
    pub fn screens(&self, profile: Profile) -> &[String] {
        self.config.screens.for_profile(profile)
    }

    /// The configuration this resolver reads.
    pub fn config(&self) -> &Arc<EngineConfig> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_names() {
        let resolver = ScreenProfileResolver::new(Arc::new(EngineConfig::default()));
        assert_eq!(resolver.resolve("default"), Some(Profile::Default));
        assert_eq!(resolver.resolve("tablet"), Some(Profile::Tablet));
        assert_eq!(resolver.resolve("mobile"), Some(Profile::Mobile));
        assert_eq!(resolver.resolve("watch"), None);
    }

    #[test]
    fn test_configured_screen_names() {
        let config = EngineConfig::default()
            .with_screens(Profile::Mobile, ["phone", "phone-landscape"])
            .with_screens(Profile::Default, ["desktop", "wide"]);
        let resolver = ScreenProfileResolver::new(Arc::new(config));

        assert_eq!(resolver.resolve("phone-landscape"), Some(Profile::Mobile));
        assert_eq!(resolver.resolve("wide"), Some(Profile::Default));
        assert_eq!(resolver.resolve("mobile"), None);
        assert_eq!(resolver.resolve("tablet"), Some(Profile::Tablet));
    }

    #[test]
    fn test_profile_round_trip_label() {
        for profile in Profile::ALL {
            assert_eq!(profile.label().parse::<Profile>(), Ok(profile));
        }
        assert!("desktop".parse::<Profile>().is_err());
        assert!(!Profile::Default.is_compact());
    }
}
