//! Reading content files from disk.
//!
//! Each file is decoded into an untyped YAML value and then validated against
//! the schema of its content domain. Errors carry the file path so the
//! caller can point the author at the right file.

use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, info};

use crate::{
    about::AboutContent,
    config::Config,
    content::ContentKind,
    error::{CoreError, Result},
    experiences::ExperiencesContent,
    navbar::NavbarContent,
    projects::ProjectContent,
    schema::{self, Schema, Validated},
    skills::SkillsContent,
};

/// Decode a YAML file into an untyped value.
pub fn read_value(path: &Path) -> Result<Value> {
    let source = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&source).map_err(|e| CoreError::yaml(path, e))
}

/// Load and validate a single content file as `T`.
pub fn load_file<T: Schema>(path: &Path) -> Result<Validated<T>> {
    debug!(path = %path.display(), schema = T::TABLE.label, "loading content file");

    let raw = read_value(path)?;
    schema::validate(raw).map_err(|e| CoreError::content(path, e))
}

/// Validate a content file without keeping the typed value.
pub fn check_file(kind: ContentKind, path: &Path) -> Result<()> {
    debug!(path = %path.display(), %kind, "checking content file");

    let raw = read_value(path)?;
    let checked = match kind {
        ContentKind::About => schema::check::<AboutContent>(&raw),
        ContentKind::Projects => schema::check::<ProjectContent>(&raw),
        ContentKind::Skills => schema::check::<SkillsContent>(&raw),
        ContentKind::Experiences => schema::check::<ExperiencesContent>(&raw),
        ContentKind::Navbar => schema::check::<NavbarContent>(&raw),
    };

    checked.map_err(|e| CoreError::content(path, e))
}

/// Every content document of the site, validated.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub navbar: Validated<NavbarContent>,
    pub about: Validated<AboutContent>,
    pub projects: Validated<ProjectContent>,
    pub skills: Validated<SkillsContent>,
    pub experiences: Validated<ExperiencesContent>,
}

impl SiteContent {
    /// Load all content files named by `config`, stopping at the first error.
    pub fn load(config: &Config) -> Result<Self> {
        info!(dir = %config.content.dir.display(), "loading site content");

        let content = Self {
            navbar: load_file(&config.content_path(ContentKind::Navbar))?,
            about: load_file(&config.content_path(ContentKind::About))?,
            projects: load_file(&config.content_path(ContentKind::Projects))?,
            skills: load_file(&config.content_path(ContentKind::Skills))?,
            experiences: load_file(&config.content_path(ContentKind::Experiences))?,
        };

        info!(
            projects = content.projects.projects.len(),
            experiences = content.experiences.experiences.len(),
            "site content loaded"
        );
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("navbar.yml");
        std::fs::write(
            &path,
            "title: Daniel Zhou\ncontact_buttons:\n  - svgName: mail\n    link: mailto:d@x.dev\n",
        )
        .expect("write");

        let navbar = load_file::<NavbarContent>(&path).expect("load");
        assert_eq!(navbar.contact_buttons[0].link, "mailto:d@x.dev");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_file::<NavbarContent>(Path::new("/nonexistent/navbar.yml")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("skills.yml");
        std::fs::write(&path, "description: [unterminated\n").expect("write");

        let err = check_file(ContentKind::Skills, &path).unwrap_err();
        assert!(matches!(err, CoreError::Yaml { .. }));
    }

    #[test]
    fn test_schema_error_carries_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("project.yml");
        std::fs::write(&path, "description: []\nprojects:\n  - name: x\n").expect("write");

        let err = check_file(ContentKind::Projects, &path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("project.yml"), "{message}");
        assert!(
            message.ends_with("Projects[0]: requires description as string"),
            "{message}"
        );
    }

    #[test]
    fn test_empty_file_is_not_an_object() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("aboutme.yml");
        std::fs::write(&path, "").expect("write");

        let err = check_file(ContentKind::About, &path).unwrap_err();
        assert_eq!(
            err.schema_error().map(ToString::to_string).as_deref(),
            Some("About: must be an object")
        );
    }
}
