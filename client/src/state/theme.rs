//! Device-level UI theme preference.
//!
//! The theme is persisted independently of identity and survives logout.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Two-valued UI theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal stored in durable storage and written to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored literal. Anything unrecognized yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Tooltip for the toggle button, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to Dark Mode",
            Self::Dark => "Switch to Light Mode",
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
