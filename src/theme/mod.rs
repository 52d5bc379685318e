//! Display preference store: dark/light mode and accent color.
//!
//! Purely local, one writer per key, persisted on every change. The hover
//! shade is derived, never stored.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::storage::Database;

/// Durable storage key for the display mode.
pub const THEME_KEY: &str = "theme";
/// Durable storage key for the accent color.
pub const ACCENT_KEY: &str = "accent";

/// Built-in accent used until the user picks one.
pub const DEFAULT_ACCENT: &str = "#854CE6";

/// Amount subtracted from each RGB channel for the hover shade.
const HOVER_DELTA: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a persisted value; anything unrecognized means the default.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::default(),
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

pub struct ThemeStore<'a> {
    db: &'a Database,
    mode: ThemeMode,
    accent: String,
}

impl<'a> ThemeStore<'a> {
    /// Resolve initial state: durable storage, then built-in defaults.
    pub fn load(db: &'a Database) -> Result<Self> {
        let mode = ThemeMode::from_stored(db.get(THEME_KEY)?.as_deref());
        let accent = db
            .get(ACCENT_KEY)?
            .unwrap_or_else(|| DEFAULT_ACCENT.to_string());
        Ok(Self { db, mode, accent })
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn accent(&self) -> &str {
        &self.accent
    }

    /// Flip between dark and light; persists immediately.
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        self.mode = self.mode.toggled();
        self.db.set(THEME_KEY, self.mode.as_str())?;
        debug!(mode = self.mode.as_str(), "display mode toggled");
        Ok(self.mode)
    }

    /// Set the accent color; persists immediately.
    ///
    /// The value is stored as given; format assumptions belong to the
    /// consumer.
    pub fn set_accent(&mut self, color: &str) -> Result<()> {
        self.accent = color.to_string();
        self.db.set(ACCENT_KEY, color)?;
        debug!(accent = color, "accent color changed");
        Ok(())
    }

    /// Derived hover shade: each channel reduced by a fixed amount, floored
    /// at zero. `None` when the accent is not a `#RRGGBB` value.
    #[must_use]
    pub fn hover_shade(&self) -> Option<String> {
        let hex = self.accent.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(format!(
            "rgb({}, {}, {})",
            r.saturating_sub(HOVER_DELTA),
            g.saturating_sub(HOVER_DELTA),
            b.saturating_sub(HOVER_DELTA)
        ))
    }
}

impl std::fmt::Debug for ThemeStore<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("accent", &self.accent)
            .finish()
    }
}
