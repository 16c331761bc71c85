//! Colour theme preference
//!
//! Resolved once at startup: a saved choice wins, then the system's colour
//! scheme preference, then dark. Every change is written straight back.

pub mod store;

pub use store::{InMemoryStore, JsonFileStore, KeyValueStore};

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{self, FolioError, Result};

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(error::invalid_theme(other)),
        }
    }
}

/// What the operating system or browser reports as preferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemPreference {
    Light,
    Dark,
    #[default]
    NoPreference,
}

/// Where the current theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Saved,
    System,
    Default,
}

/// The site's theme, backed by a key-value store
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    current: Theme,
    source: ThemeSource,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Read the saved preference, falling back to the system preference.
    ///
    /// An unrecognised saved value is ignored.
    pub fn load(store: S, system: SystemPreference) -> Result<Self> {
        if let Some(saved) = store.get(THEME_KEY)? {
            match saved.parse::<Theme>() {
                Ok(theme) => {
                    debug!(theme = %theme, "using saved theme");
                    return Ok(Self {
                        store,
                        current: theme,
                        source: ThemeSource::Saved,
                    });
                }
                Err(_) => warn!(value = %saved, "ignoring unrecognised saved theme"),
            }
        }

        let (current, source) = if system == SystemPreference::Light {
            (Theme::Light, ThemeSource::System)
        } else {
            (Theme::Dark, ThemeSource::Default)
        };
        Ok(Self {
            store,
            current,
            source,
        })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    /// Change the theme and persist it.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.current = theme;
        self.source = ThemeSource::Saved;
        Ok(())
    }

    /// Flip between dark and light, persisting the result.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_and_display() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_load_defaults_to_dark() {
        let pref = ThemePreference::load(InMemoryStore::new(), SystemPreference::NoPreference).unwrap();
        assert_eq!(pref.current(), Theme::Dark);
        assert_eq!(pref.source(), ThemeSource::Default);
    }

    #[test]
    fn test_load_follows_system_light() {
        let pref = ThemePreference::load(InMemoryStore::new(), SystemPreference::Light).unwrap();
        assert_eq!(pref.current(), Theme::Light);
        assert_eq!(pref.source(), ThemeSource::System);
    }

    #[test]
    fn test_saved_preference_wins_over_system() {
        let mut store = InMemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        let pref = ThemePreference::load(store, SystemPreference::Light).unwrap();
        assert_eq!(pref.current(), Theme::Dark);
        assert_eq!(pref.source(), ThemeSource::Saved);
    }

    #[test]
    fn test_invalid_saved_value_ignored() {
        let mut store = InMemoryStore::new();
        store.set(THEME_KEY, "purple").unwrap();
        let pref = ThemePreference::load(store, SystemPreference::Light).unwrap();
        assert_eq!(pref.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_writes_every_time() {
        let mut pref = ThemePreference::load(InMemoryStore::new(), SystemPreference::NoPreference).unwrap();
        assert_eq!(pref.toggle().unwrap(), Theme::Light);
        assert_eq!(pref.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(pref.toggle().unwrap(), Theme::Dark);
        assert_eq!(pref.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_set_persists() {
        let mut pref = ThemePreference::load(InMemoryStore::new(), SystemPreference::NoPreference).unwrap();
        pref.set(Theme::Light).unwrap();
        assert_eq!(pref.current(), Theme::Light);
        assert_eq!(pref.source(), ThemeSource::Saved);
    }
}
