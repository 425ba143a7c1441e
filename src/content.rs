// SPDX-License-Identifier: MPL-2.0
//! Page content: profile, tech stack, projects and experience.
//!
//! The content ships inside the binary as `assets/content/profile.toml`.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const PROFILE_FILE: &str = "profile.toml";

/// A labelled value shown on the profile card.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// GitHub username.
    pub handle: String,
    pub full_name: String,
    pub role: String,
    pub location: String,
    pub headline: String,
    pub tagline: String,
    pub about: String,
    pub contact_pitch: String,
    pub github_url: String,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TechGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

/// One step of the experience timeline.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub period: String,
    pub title: String,
    pub description: String,
}

/// Everything the page displays besides UI labels.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub tech_groups: Vec<TechGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl Content {
    /// Loads the embedded content.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded file is missing or malformed.
    pub fn load() -> Result<Self> {
        let file = Asset::get(PROFILE_FILE)
            .ok_or_else(|| Error::Content(format!("{PROFILE_FILE} is not embedded")))?;
        let source = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| Error::Content(format!("{PROFILE_FILE}: {e}")))?;
        Self::parse(source)
    }

    /// Parses content from TOML source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not valid content TOML.
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::Content(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = Content::load().expect("embedded content should parse");
        assert_eq!(content.profile.handle, "lhwza007");
        assert_eq!(content.tech_groups.len(), 6);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.experience[0].period, "2024 - Present");
    }

    #[test]
    fn projects_link_to_github() {
        let content = Content::load().unwrap();
        assert!(content
            .projects
            .iter()
            .all(|p| p.github.as_deref() == Some(content.profile.github_url.as_str())));
        assert!(content.projects.iter().all(|p| p.demo.is_none()));
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let source = r#"
            [profile]
            handle = "h"
            full_name = "F"
            role = "r"
            location = "l"
            headline = "hl"
            tagline = "t"
            about = "a"
            contact_pitch = "c"
            github_url = "https://github.com/h"
        "#;
        let content = Content::parse(source).unwrap();
        assert!(content.projects.is_empty());
        assert!(content.profile.badges.is_empty());
    }

    #[test]
    fn missing_profile_is_a_content_error() {
        let result = Content::parse("[[projects]]\ntitle = \"x\"\n");
        assert!(matches!(result, Err(Error::Content(_))));
    }
}
