use serde::Deserialize;

use crate::consts::{STORAGE_KEY, THEME_ATTRIBUTE, TOGGLE_ID};
use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Identifiers the toggle binds to.
///
/// The defaults match the stock page markup. A host page with different
/// markup passes a JSON object to `install_with_config`; omitted fields keep
/// their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    /// Key under which the theme string is persisted.
    pub storage_key: String,
    /// Attribute set on the document root element.
    pub attribute: String,
    /// Element id of the checkbox.
    pub toggle_id: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
            toggle_id: TOGGLE_ID.to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Parse and validate a config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input or unknown fields and
    /// [`ConfigError::Empty`] when an identifier is blank.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Empty("storage_key"));
        }
        if self.attribute.is_empty() {
            return Err(ConfigError::Empty("attribute"));
        }
        if self.toggle_id.is_empty() {
            return Err(ConfigError::Empty("toggle_id"));
        }
        Ok(())
    }
}
