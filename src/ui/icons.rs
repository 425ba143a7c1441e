// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. They are stroke icons drawn with `currentColor`,
//! so callers tint them through [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(check, "check.svg", "Check mark icon.");
define_icon!(cross, "cross.svg", "Cross (X) icon.");
define_icon!(info, "info.svg", "Letter i inside a circle.");
define_icon!(mail, "mail.svg", "Envelope icon.");
define_icon!(code, "code.svg", "Angle brackets with a slash.");
define_icon!(briefcase, "briefcase.svg", "Briefcase icon.");
define_icon!(link, "link.svg", "Box with an outgoing arrow.");
define_icon!(globe, "globe.svg", "Globe icon.");

/// Resizes an icon to a square of `size` pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Resizes and tints an icon.
pub fn tinted<'a>(icon: Svg<'a>, size: f32, color: Color) -> Svg<'a> {
    sized(icon, size).style(move |_theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_load_without_panicking() {
        let _ = check();
        let _ = cross();
        let _ = info();
        let _ = mail();
        let _ = code();
        let _ = briefcase();
        let _ = link();
        let _ = globe();
    }

    #[test]
    fn sized_icon_can_be_tinted() {
        let _ = tinted(check(), 24.0, Color::WHITE);
    }
}
