use serde::{Deserialize, Serialize};

/// The page color scheme, written to `data-color-scheme` on the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }

    /// Parse a stored preference. Anything unrecognized yields `None` so the
    /// caller can fall back to the default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ColorScheme::Dark),
            "light" => Some(ColorScheme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    /// Icon shown on the toggle: the dark scheme offers the sun, the light
    /// scheme offers the moon.
    pub fn icon_class(self) -> &'static str {
        match self {
            ColorScheme::Dark => "fas fa-sun",
            ColorScheme::Light => "fas fa-moon",
        }
    }
}
