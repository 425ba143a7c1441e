// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`navbar`] - Handle, language switch and theme switch
//! - [`sections`] - Hero, about, tech stack, projects, experience, contact
//! - [`toast`] - Self-dismissing notification overlay
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod sections;
pub mod theming;
pub mod toast;
