//! View binding capability: the document root attribute and the checkbox.
//!
//! The browser implementation lives in [`crate::web::DocumentView`];
//! [`MemoryView`] stands in for it in tests.

use std::collections::BTreeMap;

use crate::error::ToggleError;

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// The parts of the page the toggle mutates.
pub trait ViewBinding {
    /// Set attribute `name` on the document root to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Attribute`] if the document rejects the attribute.
    fn set_theme_attribute(&mut self, name: &str, value: &str) -> Result<(), ToggleError>;

    /// Set the checkbox's checked state.
    ///
    /// # Errors
    ///
    /// Implementations backed by a live page may fail; the fake never does.
    fn set_toggle_checked(&mut self, checked: bool) -> Result<(), ToggleError>;

    /// Current checked state of the checkbox.
    ///
    /// # Errors
    ///
    /// Implementations backed by a live page may fail; the fake never does.
    fn toggle_checked(&self) -> Result<bool, ToggleError>;
}

/// In-memory view. Starts with no attributes and the checkbox unchecked,
/// like a freshly parsed page.
#[derive(Clone, Debug, Default)]
pub struct MemoryView {
    attributes: BTreeMap<String, String>,
    checked: bool,
}

impl MemoryView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a root attribute, or `None` if it was never set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Simulate the user clicking the checkbox to `checked`.
    pub fn click(&mut self, checked: bool) {
        self.checked = checked;
    }
}

impl ViewBinding for MemoryView {
    fn set_theme_attribute(&mut self, name: &str, value: &str) -> Result<(), ToggleError> {
        self.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_toggle_checked(&mut self, checked: bool) -> Result<(), ToggleError> {
        self.checked = checked;
        Ok(())
    }

    fn toggle_checked(&self) -> Result<bool, ToggleError> {
        Ok(self.checked)
    }
}
