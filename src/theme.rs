use std::fmt;
use std::str::FromStr;

use crate::consts::{DARK, LIGHT};
use crate::error::ThemeError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual mode of the page.
///
/// The checkbox is the source of truth for a change: checked means
/// [`Theme::Light`], unchecked means [`Theme::Dark`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Map a checkbox state to the theme it selects.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Light } else { Self::Dark }
    }

    /// Checkbox state that represents this theme.
    #[must_use]
    pub fn is_checked(self) -> bool {
        self == Self::Light
    }

    /// String form used for both the stored value and the document attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    /// Parse the stored form. Matching is exact: `"Light"` is not a theme.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LIGHT => Ok(Self::Light),
            DARK => Ok(Self::Dark),
            other => Err(ThemeError::Unknown(other.to_owned())),
        }
    }
}
