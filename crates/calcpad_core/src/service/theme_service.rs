//! Theme preference service.
//!
//! # Invariants
//! - Theme is stored under key `theme` as `light` or `dark`.
//! - A missing or unrecognized stored value reads as `Theme::Light`.

use crate::model::theme::Theme;
use crate::db::StoreResult;
use crate::repo::preference_repo::PreferenceRepository;
use log::info;

pub const THEME_KEY: &str = "theme";

/// Use-case wrapper for reading and switching the display theme.
pub struct ThemeService<R: PreferenceRepository> {
    repo: R,
}

impl<R: PreferenceRepository> ThemeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the stored theme, defaulting to light.
    pub fn current_theme(&self) -> StoreResult<Theme> {
        Ok(self
            .repo
            .get(THEME_KEY)?
            .map_or(Theme::default(), |value| Theme::from_stored(&value)))
    }

    pub fn set_theme(&self, theme: Theme) -> StoreResult<()> {
        self.repo.set(THEME_KEY, theme.as_str())?;
        info!(
            "event=theme_set module=service status=ok theme={}",
            theme.as_str()
        );
        Ok(())
    }

    /// Flips the stored theme and returns the new value.
    pub fn toggle_theme(&self) -> StoreResult<Theme> {
        let next = self.current_theme()?.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
