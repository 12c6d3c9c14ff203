//! Browser capabilities and the JavaScript entry points.
//!
//! The page loads the generated module and calls `install()` (or
//! `install_with_config(json)`). Installation waits for `DOMContentLoaded`
//! when the document is still loading, then restores the saved theme and
//! listens for checkbox changes for the rest of the page's life.

use log::{Level, debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement, Storage, Window};

use crate::config::ToggleConfig;
use crate::error::ToggleError;
use crate::store::PreferenceStore;
use crate::toggle::ThemeToggle;
use crate::view::ViewBinding;

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

/// [`PreferenceStore`] backed by `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Bind to the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::StorageUnavailable`] when the window has no
    /// storage and [`ToggleError::Storage`] with the thrown reason when access
    /// is denied (a `SecurityError` in sandboxed frames).
    pub fn from_window(window: &Window) -> Result<Self, ToggleError> {
        storage_from(window.local_storage()).map(|storage| Self { storage })
    }
}

fn storage_from(lookup: Result<Option<Storage>, JsValue>) -> Result<Storage, ToggleError> {
    match lookup {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(ToggleError::StorageUnavailable),
        Err(err) => Err(ToggleError::Storage(describe(&err))),
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ToggleError> {
        self.storage.get_item(key).map_err(|err| ToggleError::Storage(describe(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ToggleError> {
        self.storage.set_item(key, value).map_err(|err| ToggleError::Storage(describe(&err)))
    }
}

/// [`ViewBinding`] over the live document: `<html>` and the checkbox.
pub struct DocumentView {
    root: Element,
    toggle: HtmlInputElement,
}

impl DocumentView {
    /// Look up the document root and the checkbox with id `toggle_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::MissingElement`] if no element has the id and
    /// [`ToggleError::NotAnInput`] if it is not an `<input>`.
    pub fn bind(document: &Document, toggle_id: &str) -> Result<Self, ToggleError> {
        let root = document.document_element().ok_or(ToggleError::MissingRoot)?;
        let toggle = document
            .get_element_by_id(toggle_id)
            .ok_or_else(|| ToggleError::MissingElement(toggle_id.to_owned()))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| ToggleError::NotAnInput(toggle_id.to_owned()))?;
        Ok(Self { root, toggle })
    }

    /// The bound checkbox element.
    #[must_use]
    pub fn toggle_element(&self) -> &HtmlInputElement {
        &self.toggle
    }
}

impl ViewBinding for DocumentView {
    fn set_theme_attribute(&mut self, name: &str, value: &str) -> Result<(), ToggleError> {
        self.root
            .set_attribute(name, value)
            .map_err(|err| ToggleError::Attribute(describe(&err)))
    }

    fn set_toggle_checked(&mut self, checked: bool) -> Result<(), ToggleError> {
        self.toggle.set_checked(checked);
        Ok(())
    }

    fn toggle_checked(&self) -> Result<bool, ToggleError> {
        Ok(self.toggle.checked())
    }
}

/// Install the toggle with the default identifiers.
///
/// # Errors
///
/// Throws if there is no window or document, or, when the document is
/// already parsed, if the checkbox is missing.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    install_config(ToggleConfig::default())
}

/// Install the toggle with identifiers from a JSON object, e.g.
/// `{"storage_key": "site-theme", "toggle_id": "mode-switch"}`.
///
/// # Errors
///
/// Throws on an invalid config, and otherwise as [`install`].
#[wasm_bindgen]
pub fn install_with_config(json: &str) -> Result<(), JsValue> {
    let config = ToggleConfig::from_json(json).map_err(ToggleError::from)?;
    install_config(config)
}

/// Install with an already-built config.
///
/// # Errors
///
/// See [`install`].
pub fn install_config(config: ToggleConfig) -> Result<(), JsValue> {
    init_logging();

    let window = web_sys::window().ok_or(ToggleError::MissingWindow)?;
    let document = window.document().ok_or(ToggleError::MissingDocument)?;

    if document.ready_state() != "loading" {
        start(&window, &document, &config)?;
        return Ok(());
    }

    debug!("document still loading; waiting for DOMContentLoaded");
    let document_for_cb = document.clone();
    let on_ready = Closure::wrap(Box::new(move |_event: Event| -> Result<(), JsValue> {
        start(&window, &document_for_cb, &config)?;
        Ok(())
    }) as Box<dyn FnMut(Event) -> Result<(), JsValue>>);
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|err| ToggleError::Listener(describe(&err)))?;
    on_ready.forget();
    Ok(())
}

/// Restore the saved theme and attach the change listener.
///
/// The listener owns its [`ThemeToggle`] and lives as long as the page.
///
/// # Errors
///
/// Fails if storage is unavailable, the checkbox is missing, or restoring
/// the saved theme fails.
pub fn start(window: &Window, document: &Document, config: &ToggleConfig) -> Result<(), ToggleError> {
    let store = LocalStorage::from_window(window)?;
    let view = DocumentView::bind(document, &config.toggle_id)?;
    let input = view.toggle_element().clone();

    let mut toggle = ThemeToggle::new(store, view, config.clone());
    let restored = toggle.restore()?;

    let on_change = Closure::wrap(Box::new(move |_event: Event| -> Result<(), JsValue> {
        toggle.on_toggle_changed()?;
        Ok(())
    }) as Box<dyn FnMut(Event) -> Result<(), JsValue>>);
    input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(|err| ToggleError::Listener(describe(&err)))?;
    on_change.forget();

    match restored {
        Some(value) => info!("theme toggle ready on #{} ({value})", config.toggle_id),
        None => info!("theme toggle ready on #{} (no saved theme)", config.toggle_id),
    }
    Ok(())
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // A second install on the same page finds the logger already set.
    if let Err(err) = console_log::init_with_level(LOG_LEVEL) {
        debug!("console logger not installed: {err}");
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "web_test.rs"]
mod web_test;
