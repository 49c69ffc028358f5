//! Content domains and their files.

use std::{fmt, str::FromStr};

/// One content domain of the site; each lives in its own YAML file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    About,
    Projects,
    Skills,
    Experiences,
    Navbar,
}

impl ContentKind {
    /// Every domain, in the order the site renders them.
    pub const ALL: [Self; 5] = [
        Self::Navbar,
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Experiences,
    ];

    /// Root context used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Experiences => "Experiences",
            Self::Navbar => "Navbar",
        }
    }

    /// Name used on the command line and in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experiences => "experiences",
            Self::Navbar => "navbar",
        }
    }

    /// File name used when the configuration does not override it.
    pub fn default_file(&self) -> &'static str {
        match self {
            Self::About => "aboutme.yml",
            Self::Projects => "project.yml",
            Self::Skills => "skills.yml",
            Self::Experiences => "experiences.yml",
            Self::Navbar => "navbar.yml",
        }
    }

    /// Whether a file extension denotes YAML content.
    pub fn is_content_extension(ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "yml" | "yaml")
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "about" | "aboutme" => Ok(Self::About),
            "projects" | "project" => Ok(Self::Projects),
            "skills" => Ok(Self::Skills),
            "experiences" | "experience" => Ok(Self::Experiences),
            "navbar" => Ok(Self::Navbar),
            other => Err(format!(
                "unknown content kind '{other}' (expected one of: about, projects, skills, experiences, navbar)"
            )),
        }
    }
}
