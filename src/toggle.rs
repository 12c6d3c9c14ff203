use log::{debug, warn};

use crate::config::ToggleConfig;
use crate::error::ToggleError;
use crate::store::PreferenceStore;
use crate::theme::Theme;
use crate::view::ViewBinding;

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

/// Theme initializer and change handler.
///
/// Owns the two capabilities it mutates. After [`ThemeToggle::restore`] or
/// any [`ThemeToggle::handle_change`], a recorded preference, the root
/// attribute, and the checkbox agree: checked iff the theme is light.
pub struct ThemeToggle<S, V> {
    store: S,
    view: V,
    config: ToggleConfig,
}

impl<S: PreferenceStore, V: ViewBinding> ThemeToggle<S, V> {
    #[must_use]
    pub fn new(store: S, view: V, config: ToggleConfig) -> Self {
        Self { store, view, config }
    }

    /// Re-apply the saved value, if any. Run once the page structure exists.
    ///
    /// Any non-empty saved value is copied onto the root attribute as is, and
    /// the checkbox is checked only for `"light"`. With nothing saved (or an
    /// empty string) the page keeps its default state. Nothing is written.
    ///
    /// # Errors
    ///
    /// Propagates store and view failures.
    pub fn restore(&mut self) -> Result<Option<String>, ToggleError> {
        let saved = self.store.get(&self.config.storage_key)?;
        let Some(value) = saved.filter(|value| !value.is_empty()) else {
            debug!("no saved theme under {:?}", self.config.storage_key);
            return Ok(None);
        };

        self.view.set_theme_attribute(&self.config.attribute, &value)?;
        self.view.set_toggle_checked(value == Theme::Light.as_str())?;
        debug!("restored theme {value}");
        Ok(Some(value))
    }

    /// Apply and persist the theme selected by a checkbox state.
    ///
    /// # Errors
    ///
    /// Propagates store and view failures. The attribute is set before the
    /// write, so a failed write leaves the page themed but unsaved.
    pub fn handle_change(&mut self, checked: bool) -> Result<Theme, ToggleError> {
        let theme = Theme::from_checked(checked);
        self.view.set_theme_attribute(&self.config.attribute, theme.as_str())?;
        self.store.set(&self.config.storage_key, theme.as_str())?;
        debug!("theme changed to {theme}");
        Ok(theme)
    }

    /// Change handler: read the checkbox and apply what it selects.
    ///
    /// # Errors
    ///
    /// Propagates store and view failures.
    pub fn on_toggle_changed(&mut self) -> Result<Theme, ToggleError> {
        let checked = self.view.toggle_checked()?;
        self.handle_change(checked)
    }

    /// The saved theme, without touching the page. A saved value that is not
    /// `"light"` or `"dark"` reads as `None`.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn current(&self) -> Result<Option<Theme>, ToggleError> {
        let Some(raw) = self.store.get(&self.config.storage_key)? else {
            return Ok(None);
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Ok(Some(theme)),
            Err(err) => {
                warn!("saved value under {:?} is not a theme: {err}", self.config.storage_key);
                Ok(None)
            }
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable view access, for simulating user input in tests and hosts.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
