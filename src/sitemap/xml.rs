// SPDX-License-Identifier: MPL-2.0
//! Sitemap XML rendering and output.

use super::SitemapEntry;
use crate::error::Result;
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;

/// Sitemap protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

const SCHEMA_LOCATION: &str = "http://www.sitemaps.org/schemas/sitemap/0.9 \
                               http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";

/// Renders `entries` as a sitemap document. Every entry gets `date` as its
/// `lastmod`.
///
/// # Errors
///
/// Returns an error if the XML writer fails.
pub fn render(site_url: &str, entries: &[SitemapEntry], date: NaiveDate) -> Result<String> {
    let lastmod = date.format("%Y-%m-%d").to_string();
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let urlset = BytesStart::new("urlset").with_attributes([
        ("xmlns", SITEMAP_NS),
        ("xmlns:xsi", XSI_NS),
        ("xsi:schemaLocation", SCHEMA_LOCATION),
    ]);
    writer.write_event(Event::Start(urlset))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        writer
            .create_element("loc")
            .write_text_content(BytesText::new(&entry.url(site_url)))?;
        writer
            .create_element("lastmod")
            .write_text_content(BytesText::new(&lastmod))?;
        writer
            .create_element("changefreq")
            .write_text_content(BytesText::new(entry.changefreq.as_str()))?;
        writer
            .create_element("priority")
            .write_text_content(BytesText::new(&format!("{:.1}", entry.priority)))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

/// Writes `contents` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_sitemap(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::{default_pages, ChangeFreq};
    use tempfile::tempdir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 7).unwrap()
    }

    #[test]
    fn renders_declaration_and_namespaces() {
        let xml = render("https://example.com", &default_pages(), date()).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
        assert!(xml.contains(r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#));
        assert!(xml.contains("xsi:schemaLocation="));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn renders_one_url_per_entry() {
        let mut entries = default_pages();
        entries.push(SitemapEntry::new("/about", ChangeFreq::Monthly, 0.8));

        let xml = render("https://example.com", &entries, date()).unwrap();

        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert_eq!(xml.matches("<lastmod>2025-01-07</lastmod>").count(), 2);
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.8</priority>"));
    }

    #[test]
    fn escapes_special_characters_in_urls() {
        let entries = vec![SitemapEntry::new("/?a=1&b=2", ChangeFreq::Never, 0.5)];
        let xml = render("https://example.com", &entries, date()).unwrap();
        assert!(xml.contains("a=1&amp;b=2"));
    }

    #[test]
    fn empty_list_still_renders_urlset() {
        let xml = render("https://example.com", &[], date()).unwrap();
        assert!(xml.contains("<urlset"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("public").join("sitemap.xml");

        write_sitemap(&path, "<urlset/>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<urlset/>");
    }
}
