//! Site content configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    content::ContentKind,
    error::{CoreError, Result},
};

/// Main configuration structure, read from `folio.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the content files live.
    #[serde(default)]
    pub content: ContentConfig,
}

/// Content directory and per-domain file names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding the YAML files.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_about")]
    pub about: String,

    #[serde(default = "default_projects")]
    pub projects: String,

    #[serde(default = "default_skills")]
    pub skills: String,

    #[serde(default = "default_experiences")]
    pub experiences: String,

    #[serde(default = "default_navbar")]
    pub navbar: String,
}

// Default value functions
fn default_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_about() -> String {
    ContentKind::About.default_file().to_string()
}

fn default_projects() -> String {
    ContentKind::Projects.default_file().to_string()
}

fn default_skills() -> String {
    ContentKind::Skills.default_file().to_string()
}

fn default_experiences() -> String {
    ContentKind::Experiences.default_file().to_string()
}

fn default_navbar() -> String {
    ContentKind::Navbar.default_file().to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            about: default_about(),
            projects: default_projects(),
            skills: default_skills(),
            experiences: default_experiences(),
            navbar: default_navbar(),
        }
    }
}

impl ContentConfig {
    /// Configured file name for a content domain.
    pub fn file_name(&self, kind: ContentKind) -> &str {
        match kind {
            ContentKind::About => &self.about,
            ContentKind::Projects => &self.projects,
            ContentKind::Skills => &self.skills,
            ContentKind::Experiences => &self.experiences,
            ContentKind::Navbar => &self.navbar,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `FOLIO__` environment overrides,
    /// e.g. `FOLIO__CONTENT__DIR=site/content`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.content.dir.as_os_str().is_empty() {
            return Err(CoreError::config("content.dir cannot be empty"));
        }

        for kind in ContentKind::ALL {
            let name = self.content.file_name(kind);
            if name.is_empty() {
                return Err(CoreError::config(format!(
                    "content.{kind} cannot be empty"
                )));
            }

            let is_yaml = Path::new(name)
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(ContentKind::is_content_extension);
            if !is_yaml {
                tracing::warn!(file = name, "content.{kind} does not have a .yml extension");
            }
        }

        Ok(())
    }

    /// Full path of the file holding a content domain.
    pub fn content_path(&self, kind: ContentKind) -> PathBuf {
        self.content.dir.join(self.content.file_name(kind))
    }
}
