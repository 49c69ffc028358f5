//! Validate command - check a single content file

use std::path::Path;

use color_eyre::eyre::{Result, eyre};
use folio_content::{
    ContentKind,
    about::AboutContent,
    experiences::ExperiencesContent,
    loader::load_file,
    navbar::NavbarContent,
    projects::ProjectContent,
    schema::Schema,
    skills::SkillsContent,
};
use serde::Serialize;

/// Run the validate command.
///
/// When `kind` is not given it is inferred from the file name
/// (`project.yml` → projects). With `json`, the validated content is printed
/// to stdout in the shape the page renderer consumes.
pub fn run(file: &Path, kind: Option<ContentKind>, json: bool) -> Result<()> {
    let kind = match kind {
        Some(kind) => kind,
        None => infer_kind(file)?,
    };
    tracing::info!(?file, %kind, json, "Validating content file");

    let rendered = match kind {
        ContentKind::About => validate_as::<AboutContent>(file, json)?,
        ContentKind::Projects => validate_as::<ProjectContent>(file, json)?,
        ContentKind::Skills => validate_as::<SkillsContent>(file, json)?,
        ContentKind::Experiences => validate_as::<ExperiencesContent>(file, json)?,
        ContentKind::Navbar => validate_as::<NavbarContent>(file, json)?,
    };

    match rendered {
        Some(output) => println!("{output}"),
        None => println!("✓ {} is valid {kind} content", file.display()),
    }

    Ok(())
}

fn validate_as<T: Schema + Serialize>(file: &Path, json: bool) -> Result<Option<String>> {
    let content = load_file::<T>(file)?;

    if json {
        Ok(Some(serde_json::to_string_pretty(&content)?))
    } else {
        Ok(None)
    }
}

/// Infer the content kind from a file stem such as `aboutme` or `skills`.
fn infer_kind(file: &Path) -> Result<ContentKind> {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| eyre!("Cannot infer content kind from {}", file.display()))?;

    stem.parse::<ContentKind>().map_err(|e| {
        eyre!(
            "Cannot infer content kind from {}: {e}; pass --kind",
            file.display()
        )
    })
}
