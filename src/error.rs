//! Error types.
//!
//! Every fallible operation returns one of these. Nothing is retried: the
//! browser entry points convert [`ToggleError`] into a `JsValue` and let it
//! surface as an uncaught exception.

use wasm_bindgen::JsValue;

/// Error returned when parsing a [`crate::Theme`] from its string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown theme: {0:?}")]
    Unknown(String),
}

/// Error returned by [`crate::ToggleConfig::from_json`] and
/// [`crate::ToggleConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The host passed malformed JSON or an unknown field.
    #[error("invalid toggle config: {0}")]
    Json(#[from] serde_json::Error),
    /// A required identifier is empty.
    #[error("toggle config field `{0}` must not be empty")]
    Empty(&'static str),
}

/// Error returned by the store, the view, and the toggle built on them.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no root element")]
    MissingRoot,
    /// No element carries the configured checkbox id.
    #[error("no element with id {0:?}")]
    MissingElement(String),
    /// The element exists but is not an `<input>`.
    #[error("element {0:?} is not an input")]
    NotAnInput(String),
    /// `window.localStorage` is absent or access was denied.
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("failed to set attribute: {0}")]
    Attribute(String),
    #[error("failed to register listener: {0}")]
    Listener(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<ToggleError> for JsValue {
    fn from(err: ToggleError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
