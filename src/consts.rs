//! Default identifiers shared between the page markup and the crate.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the saved theme.
pub const STORAGE_KEY: &str = "theme";

// ── Document ────────────────────────────────────────────────────

/// Attribute set on `<html>` that stylesheets select on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Element id of the theme checkbox.
pub const TOGGLE_ID: &str = "theme-toggle";

// ── Theme strings ───────────────────────────────────────────────

pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";
