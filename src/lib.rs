//! Light/dark theme toggle for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and loaded by the page. On load it
//! restores the visitor's saved theme from `localStorage` onto the document
//! root (`data-theme`) and the `#theme-toggle` checkbox, then listens for
//! checkbox changes and persists each new choice.
//!
//! The state machine in [`toggle`] never touches browser globals. It talks to
//! a [`store::PreferenceStore`] and a [`view::ViewBinding`], so the same code
//! runs against in-memory fakes in native tests and against `web-sys` in the
//! browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`toggle`] | Initializer and change handler ([`toggle::ThemeToggle`]) |
//! | [`theme`] | The [`theme::Theme`] value and its string form |
//! | [`store`] | Preference store capability and the in-memory fake |
//! | [`view`] | View binding capability and the in-memory fake |
//! | [`config`] | Storage key, attribute name and checkbox id |
//! | [`error`] | Error types shared by all modules |
//! | [`web`] | Browser capabilities and the `install` entry points |
//! | [`consts`] | Default identifiers |

pub mod config;
pub mod consts;
pub mod error;
pub mod store;
pub mod theme;
pub mod toggle;
pub mod view;
pub mod web;

pub use config::ToggleConfig;
pub use error::ToggleError;
pub use theme::Theme;
pub use toggle::ThemeToggle;
