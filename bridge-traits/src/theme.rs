//! Day/night theme selection and the CSS variable palette each theme maps to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BridgeError;

/// CSS custom property receiving the foreground color triplet.
pub const COLOR_DARK_VAR: &str = "--color-dark";
/// CSS custom property receiving the background color triplet.
pub const COLOR_LIGHT_VAR: &str = "--color-light";

const INK: &str = "10, 10, 20";
const PAPER: &str = "255, 255, 255";

/// Color scheme offered by the settings overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// Pick the theme matching the host's `prefers-color-scheme`.
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Night
        } else {
            Theme::Day
        }
    }

    /// Lenient decoding for the settings form.
    ///
    /// Parses like [`FromStr`](std::str::FromStr) (trimmed, case-insensitive)
    /// and falls back to day for any value that is not a theme name.
    pub fn from_form_value(value: &str) -> Self {
        value.parse().unwrap_or(Theme::Day)
    }

    /// Value used for the `<select>` option and form submissions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    /// RGB triplets written into the document's CSS variables.
    pub fn palette(&self) -> ThemePalette {
        match self {
            Theme::Day => ThemePalette {
                color_dark: INK,
                color_light: PAPER,
            },
            Theme::Night => ThemePalette {
                color_dark: PAPER,
                color_light: INK,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(BridgeError::OperationFailed(format!(
                "unknown theme '{}'",
                other
            ))),
        }
    }
}

/// Pair of `r, g, b` strings assigned to [`COLOR_DARK_VAR`] and [`COLOR_LIGHT_VAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub color_dark: &'static str,
    pub color_light: &'static str,
}

impl ThemePalette {
    /// `(variable, value)` pairs in the order they are applied.
    pub fn css_variables(&self) -> [(&'static str, &'static str); 2] {
        [
            (COLOR_DARK_VAR, self.color_dark),
            (COLOR_LIGHT_VAR, self.color_light),
        ]
    }
}
