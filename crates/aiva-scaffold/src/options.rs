//! Resolved scaffolding options and precondition validation

use crate::catalog;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Fully-resolved options for one scaffolding run
///
/// Built once per invocation from CLI arguments and interactive prompts,
/// then validated before any filesystem write happens.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Project name; doubles as the target directory name
    pub name: String,
    /// Template catalog key
    pub template: String,
    /// Vertical catalog key (only meaningful for the customer-portal template)
    pub vertical: Option<String>,
    /// Skip the npm install step
    pub skip_install: bool,
}

impl ScaffoldOptions {
    /// Target directory for the new project, relative to the working directory
    pub fn project_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(&self.name)
    }

    /// The vertical to record in the manifest, if any
    ///
    /// Returns `Some` only when a non-default vertical was chosen; the
    /// default "generic" vertical produces no manifest annotation.
    pub fn effective_vertical(&self) -> Option<&str> {
        self.vertical
            .as_deref()
            .filter(|v| *v != catalog::DEFAULT_VERTICAL)
    }

    /// Validate all preconditions
    ///
    /// Checks, in order: non-empty project name, target directory does not
    /// exist, template key is in the catalog, vertical key (when supplied)
    /// is in the catalog. Nothing is written to disk until every check
    /// passes.
    ///
    /// # Errors
    /// Returns the first failing precondition as an [`Error`].
    pub fn validate(&self) -> Result<()> {
        validate_project_name(&self.name)?;

        if catalog::template(&self.template).is_none() {
            return Err(Error::unknown_template(
                &self.template,
                catalog::template_keys(),
            ));
        }

        if let Some(vertical) = &self.vertical {
            if catalog::vertical(vertical).is_none() {
                return Err(Error::unknown_vertical(
                    vertical,
                    catalog::vertical_keys(),
                ));
            }
        }

        Ok(())
    }
}

/// Validate a project name: non-empty and not an existing path
///
/// Used both by the interactive prompt's inline validator and by
/// [`ScaffoldOptions::validate`], so an argument-supplied name gets the
/// same checks a prompted name does.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::EmptyProjectName);
    }

    if Utf8Path::new(name).exists() {
        return Err(Error::project_exists(name));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(name: &str, template: &str, vertical: Option<&str>) -> ScaffoldOptions {
        ScaffoldOptions {
            name: name.to_string(),
            template: template.to_string(),
            vertical: vertical.map(String::from),
            skip_install: true,
        }
    }

    #[test]
    fn test_validate_accepts_known_template() {
        let opts = options("fresh-project-name", "customer-portal", None);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_template() {
        let opts = options("fresh-project-name", "no-such-template", None);
        assert!(matches!(
            opts.validate(),
            Err(Error::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_vertical() {
        let opts = options("fresh-project-name", "customer-portal", Some("plumbing"));
        assert!(matches!(
            opts.validate(),
            Err(Error::UnknownVertical { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("shop1");
        std::fs::create_dir(&existing).unwrap();

        let opts = options(existing.to_str().unwrap(), "customer-portal", None);
        assert!(matches!(opts.validate(), Err(Error::ProjectExists { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        assert!(matches!(
            validate_project_name(""),
            Err(Error::EmptyProjectName)
        ));
        assert!(matches!(
            validate_project_name("   "),
            Err(Error::EmptyProjectName)
        ));
    }

    #[test]
    fn test_effective_vertical() {
        let opts = options("p", "customer-portal", Some("coffee"));
        assert_eq!(opts.effective_vertical(), Some("coffee"));

        let opts = options("p", "customer-portal", Some("generic"));
        assert_eq!(opts.effective_vertical(), None);

        let opts = options("p", "merchant-dashboard", None);
        assert_eq!(opts.effective_vertical(), None);
    }
}
