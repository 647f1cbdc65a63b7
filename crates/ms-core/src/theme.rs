//! Visual themes and their persistence.
//!
//! The site offers a small fixed palette of themes. The visitor's selection
//! is persisted under a single storage key and read back on the next visit;
//! anything unrecognized in storage silently falls back to the default.

use serde::{Deserialize, Serialize};

/// Storage key under which the selected theme identifier is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// One of the site's selectable visual themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Ocean,
    Violet,
    Sunset,
    Slate,
}

/// Style tokens for a theme: Tailwind utility classes applied by the
/// rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub name: &'static str,
    pub bg: &'static str,
    pub hero_glow: &'static str,
    pub card: &'static str,
    pub accent: &'static str,
    pub button: &'static str,
    pub ring: &'static str,
}

const OCEAN: ThemeTokens = ThemeTokens {
    name: "Ocean",
    bg: "from-sky-50 via-blue-50 to-cyan-100",
    hero_glow: "bg-cyan-400/30",
    card: "hover:border-cyan-300/60 hover:shadow-cyan-200/50",
    accent: "text-cyan-700",
    button: "bg-cyan-600 hover:bg-cyan-700",
    ring: "focus:ring-cyan-500/40",
};

const VIOLET: ThemeTokens = ThemeTokens {
    name: "Violet",
    bg: "from-fuchsia-50 via-purple-50 to-indigo-100",
    hero_glow: "bg-fuchsia-400/30",
    card: "hover:border-fuchsia-300/60 hover:shadow-fuchsia-200/50",
    accent: "text-fuchsia-700",
    button: "bg-fuchsia-600 hover:bg-fuchsia-700",
    ring: "focus:ring-fuchsia-500/40",
};

const SUNSET: ThemeTokens = ThemeTokens {
    name: "Sunset",
    bg: "from-rose-50 via-orange-50 to-amber-100",
    hero_glow: "bg-amber-400/30",
    card: "hover:border-amber-300/60 hover:shadow-amber-200/50",
    accent: "text-orange-700",
    button: "bg-orange-600 hover:bg-orange-700",
    ring: "focus:ring-orange-500/40",
};

const SLATE: ThemeTokens = ThemeTokens {
    name: "Slate",
    bg: "from-slate-50 via-slate-100 to-zinc-100",
    hero_glow: "bg-slate-400/20",
    card: "hover:border-slate-300/60 hover:shadow-slate-200/50",
    accent: "text-slate-700",
    button: "bg-slate-800 hover:bg-slate-900",
    ring: "focus:ring-slate-500/40",
};

impl Theme {
    /// All themes, in picker order.
    pub const ALL: [Theme; 4] = [Theme::Ocean, Theme::Violet, Theme::Sunset, Theme::Slate];

    /// Identifier used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Ocean => "ocean",
            Theme::Violet => "violet",
            Theme::Sunset => "sunset",
            Theme::Slate => "slate",
        }
    }

    /// Parse a stored identifier. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "ocean" => Some(Theme::Ocean),
            "violet" => Some(Theme::Violet),
            "sunset" => Some(Theme::Sunset),
            "slate" => Some(Theme::Slate),
            _ => None,
        }
    }

    /// Parse a stored identifier, normalizing anything unrecognized to the
    /// default theme.
    pub fn from_name_or_default(name: &str) -> Theme {
        Theme::from_name(name).unwrap_or_default()
    }

    /// Style tokens for this theme.
    pub fn tokens(&self) -> &'static ThemeTokens {
        match self {
            Theme::Ocean => &OCEAN,
            Theme::Violet => &VIOLET,
            Theme::Sunset => &SUNSET,
            Theme::Slate => &SLATE,
        }
    }
}

/// Durable storage for the theme selection.
///
/// The site backs this with browser localStorage; tests and the server use
/// [`MemoryStorage`].
pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn store(&mut self, value: &str);
}

/// In-memory theme storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    value: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage preloaded with a raw value, as if left by an earlier visit.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn store(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

/// Owner of the current theme selection.
///
/// Reads the persisted value once at construction and writes every change
/// back synchronously. Never errors: absent or unrecognized stored values
/// resolve to the default theme.
#[derive(Debug)]
pub struct ThemeStore<S: ThemeStorage> {
    current: Theme,
    storage: S,
}

impl<S: ThemeStorage> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        let current = storage
            .load()
            .as_deref()
            .map(Theme::from_name_or_default)
            .unwrap_or_default();
        Self { current, storage }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Tokens of the current theme.
    pub fn tokens(&self) -> &'static ThemeTokens {
        self.current.tokens()
    }

    /// Update the selection, persisting it before returning.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.storage.store(theme.as_str());
    }

    /// Hand back the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_ocean() {
        assert_eq!(Theme::default(), Theme::Ocean);
        let store = ThemeStore::new(MemoryStorage::new());
        assert_eq!(store.current(), Theme::Ocean);
    }

    #[test]
    fn test_unknown_stored_values_fall_back_to_default() {
        for garbage in ["", "midnight", "OCEAN", "null", "42"] {
            let store = ThemeStore::new(MemoryStorage::with_value(garbage));
            assert_eq!(store.current(), Theme::Ocean, "value: {garbage:?}");
        }
    }

    #[test]
    fn test_selection_survives_reload() {
        let mut store = ThemeStore::new(MemoryStorage::new());
        store.set(Theme::Violet);

        // Fresh store over the same storage, as after a page reload.
        let reloaded = ThemeStore::new(store.into_storage());
        assert_eq!(reloaded.current(), Theme::Violet);
    }

    #[test]
    fn test_set_persists_identifier() {
        let mut store = ThemeStore::new(MemoryStorage::new());
        store.set(Theme::Sunset);
        assert_eq!(store.into_storage().load().as_deref(), Some("sunset"));
    }

    #[test]
    fn test_round_trip_names() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn test_tokens_match_theme() {
        assert_eq!(Theme::Ocean.tokens().name, "Ocean");
        assert_eq!(Theme::Slate.tokens().button, "bg-slate-800 hover:bg-slate-900");
    }
}
