// SPDX-License-Identifier: MPL-2.0
//! Static `sitemap.xml` generation.
//!
//! The page list starts from [`default_pages`], is optionally extended by
//! scanning a pages directory ([`discover_pages`]), and is rendered with
//! [`render`]. The list is owned by the caller for the duration of one run.

mod discover;
mod xml;

pub use discover::discover_pages;
pub use xml::{render, write_sitemap, SITEMAP_NS, XSI_NS};

use std::fmt;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<url>` of the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Route path, starting with `/`.
    pub path: String,
    pub changefreq: ChangeFreq,
    /// Between 0.0 and 1.0.
    pub priority: f32,
}

impl SitemapEntry {
    pub fn new(path: impl Into<String>, changefreq: ChangeFreq, priority: f32) -> Self {
        Self {
            path: path.into(),
            changefreq,
            priority,
        }
    }

    /// Absolute URL of this entry under `site_url`.
    #[must_use]
    pub fn url(&self, site_url: &str) -> String {
        format!("{}{}", site_url, self.path)
    }
}

/// Pages that are always listed.
#[must_use]
pub fn default_pages() -> Vec<SitemapEntry> {
    vec![SitemapEntry::new("/", ChangeFreq::Weekly, 1.0)]
}
