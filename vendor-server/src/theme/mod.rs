//! Theme context
//!
//! Five colours plus light/dark mode, loaded once at startup and written
//! back to redb on every change.

mod store;

pub use store::{COLORS_KEY, MODE_KEY, StoredTheme, ThemeStore};

use crate::db::StorageError;
use parking_lot::RwLock;
use shared::error::AppError;
use shared::models::{ColorKey, InvalidThemeValue, ThemeColors, ThemeMode, ThemeState, is_hex_color};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Invalid(#[from] InvalidThemeValue),
}

pub type ThemeResult<T> = Result<T, ThemeError>;

impl From<ThemeError> for AppError {
    fn from(err: ThemeError) -> Self {
        match err {
            ThemeError::Storage(e) => e.into(),
            ThemeError::Invalid(e) => {
                let app = AppError::validation(e.to_string());
                match e {
                    InvalidThemeValue::Mode(mode) => app.with_detail("mode", mode),
                    InvalidThemeValue::Key(key) => app.with_detail("key", key),
                    InvalidThemeValue::Color { key, value } => app
                        .with_detail("key", key.as_str())
                        .with_detail("value", value),
                }
            }
        }
    }
}

/// Theme state shared by all handlers
#[derive(Debug)]
pub struct ThemeService {
    store: ThemeStore,
    state: RwLock<ThemeState>,
}

impl ThemeService {
    /// Restore the saved theme.
    ///
    /// A missing mode follows `prefers_dark`; missing or unreadable colours
    /// fall back to the light palette. The resolved theme is written back so
    /// later starts restore it regardless of the system preference.
    pub fn load(store: ThemeStore, prefers_dark: bool) -> ThemeResult<Self> {
        let stored = store.load()?;

        let mut resolved = true;

        let mode = match stored.mode.as_deref().map(str::parse::<ThemeMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Stored theme mode unreadable, using system preference");
                resolved = false;
                system_mode(prefers_dark)
            }
            None => {
                resolved = false;
                system_mode(prefers_dark)
            }
        };

        let colors = match stored.colors.as_deref() {
            Some(raw) => match parse_colors(raw) {
                Ok(colors) => colors,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to parse saved theme, using light palette");
                    resolved = false;
                    ThemeColors::light()
                }
            },
            None => {
                resolved = false;
                ThemeColors::light()
            }
        };

        // 首次启动或数据损坏时写回，之后不再跟随系统偏好
        if !resolved {
            store.save(&colors, mode)?;
        }

        tracing::info!(mode = mode.as_str(), "Theme loaded");
        Ok(Self {
            store,
            state: RwLock::new(ThemeState { colors, mode }),
        })
    }

    pub fn state(&self) -> ThemeState {
        self.state.read().clone()
    }

    pub fn css(&self) -> String {
        self.state.read().colors.to_css()
    }

    /// Change one colour slot
    pub fn set_color(&self, key: ColorKey, value: &str) -> ThemeResult<ThemeState> {
        let value = value.trim();
        if !is_hex_color(value) {
            return Err(InvalidThemeValue::Color {
                key,
                value: value.to_string(),
            }
            .into());
        }
        self.update(|state| state.colors.set(key, value))
    }

    /// Replace all five colours
    pub fn apply(&self, colors: ThemeColors) -> ThemeResult<ThemeState> {
        colors.validate()?;
        self.update(|state| state.colors = colors)
    }

    /// Switch mode; the colours become that mode's default palette
    pub fn set_mode(&self, mode: ThemeMode) -> ThemeResult<ThemeState> {
        self.update(|state| {
            state.mode = mode;
            state.colors = mode.default_colors();
        })
    }

    /// Restore the default palette for the current mode
    pub fn reset(&self) -> ThemeResult<ThemeState> {
        self.update(|state| state.colors = state.mode.default_colors())
    }

    fn update(&self, f: impl FnOnce(&mut ThemeState)) -> ThemeResult<ThemeState> {
        let mut state = self.state.write();
        let mut next = state.clone();
        f(&mut next);
        self.store.save(&next.colors, next.mode)?;
        *state = next.clone();
        tracing::info!(mode = next.mode.as_str(), primary = %next.colors.primary, "Theme updated");
        Ok(next)
    }
}

fn system_mode(prefers_dark: bool) -> ThemeMode {
    if prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

fn parse_colors(raw: &str) -> Result<ThemeColors, String> {
    let colors: ThemeColors = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    colors.validate().map_err(|e| e.to_string())?;
    Ok(colors)
}
