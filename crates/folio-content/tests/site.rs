//! End-to-end tests against the fixture content directories.

use std::path::{Path, PathBuf};

use folio_content::{
    Config, ContentKind, CoreError, SiteContent,
    config::ContentConfig,
    loader::{check_file, load_file},
    projects::ProjectContent,
    schema::ErrorKind,
};

fn fixtures(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn config_for(dir: PathBuf) -> Config {
    Config {
        content: ContentConfig {
            dir,
            ..ContentConfig::default()
        },
    }
}

#[test]
fn test_sample_site_loads() {
    let site = SiteContent::load(&config_for(fixtures("site"))).expect("site should load");

    assert_eq!(site.navbar.title, "Daniel Zhou");
    assert_eq!(site.navbar.contact_buttons.len(), 3);
    assert_eq!(site.navbar.external_links().len(), 2);

    let sections: Vec<_> = site.about.sections().map(|(name, _)| name).collect();
    assert_eq!(sections, ["Education", "Currently"]);

    assert_eq!(site.projects.projects.len(), 2);
    assert_eq!(site.projects.projects[1].actions().len(), 2);

    let groups: Vec<_> = site.skills.groups().map(|(name, _)| name).collect();
    assert_eq!(groups, ["Languages", "Cloud", "Tooling"]);

    assert_eq!(
        site.experiences.experiences[0].date.as_deref(),
        Some("2023 - Present")
    );
}

#[test]
fn test_every_sample_file_checks() {
    let config = config_for(fixtures("site"));
    for kind in ContentKind::ALL {
        check_file(kind, &config.content_path(kind))
            .unwrap_or_else(|e| panic!("{kind} should be valid: {e}"));
    }
}

#[test]
fn test_broken_projects_reports_action_path() {
    let path = fixtures("broken").join("project.yml");
    let err = load_file::<ProjectContent>(&path).unwrap_err();

    let schema_err = err.schema_error().expect("schema error");
    assert_eq!(schema_err.context(), "Projects[0] action[0]");
    assert!(schema_err.to_string().contains("text"));
    assert_eq!(schema_err.kind(), ErrorKind::NestedItemInvalid);
}

#[test]
fn test_broken_skills_reports_group() {
    let path = fixtures("broken").join("skills.yml");
    let err = check_file(ContentKind::Skills, &path).unwrap_err();

    assert_eq!(
        err.schema_error().map(ToString::to_string).as_deref(),
        Some(r#"Skills["Languages"]: all items must be strings"#)
    );
}

#[test]
fn test_broken_about_reports_description() {
    let path = fixtures("broken").join("aboutme.yml");
    let err = check_file(ContentKind::About, &path).unwrap_err();
    assert!(err.to_string().contains("requires description as array"));
}

#[test]
fn test_broken_site_fails_on_first_error() {
    // The broken directory has no navbar.yml, which is loaded first.
    let err = SiteContent::load(&config_for(fixtures("broken"))).unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}
