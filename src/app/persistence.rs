// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Preferences are written back to `settings.toml` as soon as the user
//! changes them. The rest of the file is preserved. A file that fails to
//! parse is left untouched.

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Loads the config, applies `edit`, and saves it back.
fn update_config(base_dir: Option<PathBuf>, edit: impl FnOnce(&mut Config)) -> Result<()> {
    let (mut cfg, warning) = config::load_with_override(base_dir.clone());
    if warning.is_some() {
        return Err(Error::Config(
            "existing settings file is unreadable, not overwriting it".to_string(),
        ));
    }
    edit(&mut cfg);
    config::save_with_override(&cfg, base_dir)
}

/// Applies the newly selected locale and persists it to config.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    base_dir: Option<PathBuf>,
) -> Result<()> {
    i18n.set_locale(locale.clone());
    update_config(base_dir, |cfg| cfg.general.language = Some(locale.to_string()))
}

/// Persists the selected theme mode.
pub fn apply_theme_change(theme_mode: ThemeMode, base_dir: Option<PathBuf>) -> Result<()> {
    update_config(base_dir, |cfg| cfg.general.theme_mode = theme_mode)
}
