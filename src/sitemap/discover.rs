// SPDX-License-Identifier: MPL-2.0
//! Page discovery from a source directory.
//!
//! A heuristic: every file with a matching extension is assumed to be one
//! page, routed by its lowercased file stem.

use super::{ChangeFreq, SitemapEntry};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Stems that map to the site root.
const ROOT_STEMS: &[&str] = &["home", "index"];

/// Module plumbing files that never are pages.
const IGNORED_STEMS: &[&str] = &["mod", "lib", "main"];

/// Priority given to discovered pages.
const DISCOVERED_PRIORITY: f32 = 0.8;

fn route_for(stem: &str) -> Option<String> {
    let stem = stem.to_lowercase();
    if IGNORED_STEMS.contains(&stem.as_str()) {
        return None;
    }
    if ROOT_STEMS.contains(&stem.as_str()) {
        return Some("/".to_string());
    }
    Some(format!("/{stem}"))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}

/// Scans `dir` and appends one entry per new page to `entries`.
///
/// Does nothing if `dir` does not exist. Routes already present in `entries`
/// are skipped. Returns the number of entries added.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be read.
pub fn discover_pages(
    dir: &Path,
    extensions: &[String],
    entries: &mut Vec<SitemapEntry>,
) -> Result<usize> {
    if !dir.is_dir() {
        log::debug!("pages directory {} not found, skipping discovery", dir.display());
        return Ok(0);
    }

    log::info!("Scanning pages directory {}", dir.display());

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && has_extension(path, extensions))
        .collect();
    files.sort();

    let mut added = 0;
    for file in files {
        let Some(route) = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(route_for)
        else {
            continue;
        };

        if entries.iter().any(|entry| entry.path == route) {
            continue;
        }

        log::info!("  found page: {} -> {}", file.display(), route);
        entries.push(SitemapEntry::new(route, ChangeFreq::Monthly, DISCOVERED_PRIORITY));
        added += 1;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::default_pages;
    use std::fs;
    use tempfile::tempdir;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn route_mapping() {
        assert_eq!(route_for("Home").as_deref(), Some("/"));
        assert_eq!(route_for("index").as_deref(), Some("/"));
        assert_eq!(route_for("Projects").as_deref(), Some("/projects"));
        assert_eq!(route_for("mod"), None);
    }

    #[test]
    fn missing_directory_adds_nothing() {
        let dir = tempdir().unwrap();
        let mut entries = default_pages();

        let added = discover_pages(&dir.path().join("nope"), &exts(&["rs"]), &mut entries).unwrap();

        assert_eq!(added, 0);
        assert_eq!(entries, default_pages());
    }

    #[test]
    fn discovers_pages_in_sorted_order_and_skips_duplicates() {
        let dir = tempdir().unwrap();
        for name in ["Portfolio.tsx", "About.jsx", "Home.tsx", "notes.md", "mod.tsx"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.tsx")).unwrap();

        let mut entries = default_pages();
        let added = discover_pages(dir.path(), &exts(&["tsx", "jsx"]), &mut entries).unwrap();

        assert_eq!(added, 2);
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/about", "/portfolio"]);
        assert_eq!(entries[0].changefreq, ChangeFreq::Weekly);
        assert_eq!(entries[1].changefreq, ChangeFreq::Monthly);
        assert_eq!(entries[1].priority, 0.8);
    }

    #[test]
    fn second_scan_is_idempotent() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("contact.rs"), "").unwrap();

        let mut entries = default_pages();
        discover_pages(dir.path(), &exts(&["rs"]), &mut entries).unwrap();
        let added = discover_pages(dir.path(), &exts(&["rs"]), &mut entries).unwrap();

        assert_eq!(added, 0);
        assert_eq!(entries.len(), 2);
    }
}
