// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection and the color scheme used by page styles.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_card: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_soft: Color,

    pub border: Color,
    pub backdrop: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::ZINC_100,
            surface_card: palette::WHITE,

            text_primary: palette::ZINC_900,
            text_secondary: palette::ZINC_500,

            brand_primary: palette::VIOLET_600,
            brand_soft: Color {
                a: opacity::TINT,
                ..palette::VIOLET_500
            },

            border: Color {
                a: opacity::TINT,
                ..palette::BLACK
            },
            backdrop: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    /// Dark theme (Dark mode), black with a violet accent.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::BLACK,
            surface_card: Color {
                a: opacity::GLASS,
                ..palette::WHITE
            },

            text_primary: palette::WHITE,
            text_secondary: palette::ZINC_400,

            brand_primary: palette::VIOLET_400,
            brand_soft: Color {
                a: opacity::TINT,
                ..palette::VIOLET_500
            },

            border: Color {
                a: opacity::TINT,
                ..palette::WHITE
            },
            backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    /// Returns the scheme for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Returns the built-in iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_is_black() {
        let scheme = ColorScheme::dark();
        assert_eq!(scheme.surface_primary, palette::BLACK);
    }

    #[test]
    fn both_themes_use_violet_brand() {
        assert!(ColorScheme::light().brand_primary.b > ColorScheme::light().brand_primary.g);
        assert!(ColorScheme::dark().brand_primary.b > ColorScheme::dark().brand_primary.g);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        let _ = ThemeMode::System.is_dark();
    }
}
