//! Theme preference persisted alongside the sets

use std::fmt;

use crate::constants::theme::{DARK, LIGHT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name written to the data file
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// Parse a stored theme name. Unknown names fall back to light.
    pub fn from_name(name: &str) -> Self {
        match name {
            DARK => Theme::Dark,
            LIGHT => Theme::Light,
            other => {
                tracing::warn!(theme = %other, "Unrecognized theme name, using light");
                Theme::Light
            }
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known() {
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("light"), Theme::Light);
    }

    #[test]
    fn test_from_name_unknown_defaults_to_light() {
        assert_eq!(Theme::from_name("solarized"), Theme::Light);
        assert_eq!(Theme::from_name(""), Theme::Light);
    }

    #[test]
    fn test_toggle_roundtrip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_name_matches_parse() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_name(theme.name()), theme);
        }
    }
}
