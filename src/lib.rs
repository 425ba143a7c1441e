// SPDX-License-Identifier: MPL-2.0
//! `iced_portfolio` is a personal portfolio page built with the Iced GUI
//! framework.
//!
//! It renders a profile, tech stack, projects and experience, and offers a
//! contact form delivered through the EmailJS relay, with outcomes reported
//! by a self-dismissing toast. The `generate-sitemap` binary writes the
//! static `sitemap.xml` for the web deployment.

pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod i18n;
pub mod sitemap;
pub mod ui;
