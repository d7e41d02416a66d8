//! Integration tests for the scaffolding workflow
//!
//! These tests exercise the validate → fetch → customize sequence without
//! network access: fetch failures are asserted through preconditions, and
//! the customization step runs against a directory populated by hand the
//! way a template fetch would populate it.

use aiva_scaffold::{catalog, customize_manifest, Error, ScaffoldOptions};
use camino::Utf8PathBuf;
use serde_json::Value;
use tempfile::TempDir;

fn temp_path(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from(dir.path().to_str().unwrap())
}

/// Unknown template key fails before any filesystem write
#[test]
fn unknown_template_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let target = temp_path(&dir).join("shop1");

    let options = ScaffoldOptions {
        name: target.to_string(),
        template: "no-such-template".to_string(),
        vertical: None,
        skip_install: true,
    };

    assert!(matches!(
        options.validate(),
        Err(Error::UnknownTemplate { .. })
    ));
    assert!(!target.exists());
}

/// Existing target directory fails before any filesystem write
#[test]
fn existing_directory_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let target = temp_path(&dir).join("shop1");
    std::fs::create_dir(&target).unwrap();

    let options = ScaffoldOptions {
        name: target.to_string(),
        template: "customer-portal".to_string(),
        vertical: None,
        skip_install: true,
    };

    assert!(matches!(
        options.validate(),
        Err(Error::ProjectExists { .. })
    ));
    // The pre-existing directory is untouched
    assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
}

/// Spec scenario: customer-portal + coffee vertical, install skipped
#[test]
fn coffee_vertical_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let project = temp_path(&dir).join("shop1");

    let options = ScaffoldOptions {
        name: project.to_string(),
        template: "customer-portal".to_string(),
        vertical: Some("coffee".to_string()),
        skip_install: true,
    };
    options.validate().unwrap();

    // Stand in for the fetch step: a template payload with a manifest
    std::fs::create_dir_all(project.join("src")).unwrap();
    std::fs::write(project.join("src/index.ts"), "export {};\n").unwrap();
    std::fs::write(
        project.join("package.json"),
        r#"{"name": "customer-portal-starter", "version": "0.1.0"}"#,
    )
    .unwrap();

    let patched =
        customize_manifest(&project, "shop1", options.effective_vertical()).unwrap();
    assert!(patched);

    let manifest: Value = serde_json::from_str(
        &std::fs::read_to_string(project.join("package.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["name"], "shop1");
    assert_eq!(manifest["aiva"]["vertical"], "coffee");
    assert_eq!(manifest["version"], "0.1.0");

    // Template payload is opaque and untouched
    assert_eq!(
        std::fs::read_to_string(project.join("src/index.ts")).unwrap(),
        "export {};\n"
    );
}

/// Default vertical adds no annotation
#[test]
fn generic_vertical_adds_no_annotation() {
    let dir = tempfile::tempdir().unwrap();
    let project = temp_path(&dir).join("shop2");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::write(
        project.join("package.json"),
        r#"{"name": "customer-portal-starter"}"#,
    )
    .unwrap();

    let options = ScaffoldOptions {
        name: project.to_string(),
        template: "customer-portal".to_string(),
        vertical: Some("generic".to_string()),
        skip_install: true,
    };

    customize_manifest(&project, "shop2", options.effective_vertical()).unwrap();

    let manifest: Value = serde_json::from_str(
        &std::fs::read_to_string(project.join("package.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["name"], "shop2");
    assert!(manifest.get("aiva").is_none());
}

/// Every catalog template resolves to a usable repo identifier
#[test]
fn catalog_templates_are_complete() {
    for template in catalog::templates() {
        assert!(!template.repo.is_empty());
        assert!(!template.description.is_empty());
        assert_eq!(catalog::template(template.key), Some(template));
    }
}
