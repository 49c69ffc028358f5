//! Folio Content Library
//!
//! Schema validation and loading for the YAML content of a portfolio site:
//! the about page, projects, skills, experiences, and the navbar.

pub mod about;
pub mod action_button;
pub mod config;
pub mod content;
pub mod error;
pub mod experiences;
pub mod loader;
pub mod navbar;
pub mod projects;
pub mod schema;
pub mod skills;

pub use config::Config;
pub use content::ContentKind;
pub use error::{CoreError, Result};
pub use loader::SiteContent;
pub use schema::{SchemaError, Validated};
