use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved value meaning an integration point has no backend wired up.
pub const NOT_CONFIGURED: &str = "not-configured";

/// A configuration value that may be absent.
///
/// Absent, empty and sentinel inputs all collapse to [`Setting::NotConfigured`],
/// which renders back as the sentinel string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Setting {
    Configured(String),
    #[default]
    NotConfigured,
}

impl Setting {
    /// Builds a setting from a raw, possibly missing, value.
    pub fn from_raw(raw: Option<String>) -> Self {
        match raw {
            Some(value) if !value.is_empty() && value != NOT_CONFIGURED => {
                Self::Configured(value)
            }
            _ => Self::NotConfigured,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }

    /// Returns the configured value, or the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Configured(value) => value,
            Self::NotConfigured => NOT_CONFIGURED,
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Setting {
    fn from(value: String) -> Self {
        Self::from_raw(Some(value))
    }
}

impl From<&str> for Setting {
    fn from(value: &str) -> Self {
        Self::from_raw(Some(value.to_string()))
    }
}

impl From<Setting> for String {
    fn from(setting: Setting) -> Self {
        match setting {
            Setting::Configured(value) => value,
            Setting::NotConfigured => NOT_CONFIGURED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_are_not_configured() {
        assert_eq!(Setting::from_raw(None), Setting::NotConfigured);
        assert_eq!(Setting::from_raw(Some(String::new())), Setting::NotConfigured);
    }

    #[test]
    fn sentinel_is_not_configured() {
        let setting = Setting::from("not-configured");
        assert!(!setting.is_configured());
        assert_eq!(setting.as_str(), NOT_CONFIGURED);
    }

    #[test]
    fn real_value_is_configured() {
        let setting = Setting::from("arn:test");
        assert!(setting.is_configured());
        assert_eq!(setting.to_string(), "arn:test");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Setting::NotConfigured).unwrap();
        assert_eq!(json, "\"not-configured\"");

        let setting: Setting = serde_json::from_str("\"mongodb://x\"").unwrap();
        assert_eq!(setting, Setting::Configured("mongodb://x".to_string()));
    }
}
