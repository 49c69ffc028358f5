//! Check command - validate configuration and every content file

use std::{collections::HashSet, path::Path};

use color_eyre::eyre::{Result, bail};
use folio_content::{Config, ContentKind, loader::check_file};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and all content files.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    match crate::load_config(config_path) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            check_site(&config, &mut result);
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
        }
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check the content directory and every configured content file.
pub fn check_site(config: &Config, result: &mut ValidationResult) {
    let content_dir = &config.content.dir;
    if !content_dir.is_dir() {
        result.add_error(format!(
            "Content directory does not exist: {}",
            content_dir.display()
        ));
        println!("  ✗ {}/ missing", content_dir.display());
        return;
    }

    println!("\nChecking content files...");
    validate_content_files(config, result);

    println!("\nChecking for unrecognized files...");
    check_unrecognized_files(config, result);
}

/// Validate each content domain's file against its schema.
fn validate_content_files(config: &Config, result: &mut ValidationResult) {
    let mut failed = 0;

    for kind in ContentKind::ALL {
        let path = config.content_path(kind);

        if !path.exists() {
            result.add_error(format!(
                "{}: Missing {} content file",
                path.display(),
                kind.label()
            ));
            println!("  ✗ {} missing", path.display());
            failed += 1;
            continue;
        }

        match check_file(kind, &path) {
            Ok(()) => println!("  ✓ {} ({kind})", path.display()),
            Err(e) => {
                tracing::debug!(error = %e, %kind, "content file failed validation");
                result.add_error(e.to_string());
                println!("  ✗ {} ({kind})", path.display());
                failed += 1;
            }
        }
    }

    let total = ContentKind::ALL.len();
    if failed == 0 {
        println!("  ✓ All {total} content files valid");
    } else {
        println!("  ✗ {failed}/{total} content files have errors");
    }
}

/// Warn about YAML files in the content directory that no domain reads.
fn check_unrecognized_files(config: &Config, result: &mut ValidationResult) {
    let known: HashSet<&str> = ContentKind::ALL
        .iter()
        .map(|kind| config.content.file_name(*kind))
        .collect();

    let mut unrecognized = 0;

    for entry in walkdir::WalkDir::new(&config.content.dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !ContentKind::is_content_extension(ext) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !known.contains(&*name) {
            result.add_warning(format!(
                "Unrecognized content file: {} (not read by any page)",
                path.display()
            ));
            unrecognized += 1;
        }
    }

    if unrecognized == 0 {
        println!("  ✓ No unrecognized content files");
    } else {
        println!("  ⚠ {unrecognized} unrecognized content file(s)");
    }
}
