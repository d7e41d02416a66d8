//! # aiva-scaffold
//!
//! Scaffolding library for the create-aiva-app CLI providing:
//! - Static template and vertical catalogs
//! - Option resolution and precondition validation
//! - Template repository fetch (history-free snapshot)
//! - Manifest (`package.json`) customization
//! - Dependency installation
//!
//! # Examples
//!
//! ## Validate options, then scaffold
//!
//! ```no_run
//! use aiva_scaffold::{catalog, fetch_template, ScaffoldOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ScaffoldOptions {
//!     name: "shop1".to_string(),
//!     template: "customer-portal".to_string(),
//!     vertical: Some("coffee".to_string()),
//!     skip_install: true,
//! };
//!
//! options.validate()?;
//!
//! let template = catalog::template(&options.template).unwrap();
//! fetch_template(template.repo, &options.project_dir()).await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod install;
pub mod manifest;
pub mod options;

pub use error::{Error, Result};

// Re-export the workflow surface for convenience
pub use fetch::fetch_template;
pub use install::install_dependencies;
pub use manifest::customize_manifest;
pub use options::{validate_project_name, ScaffoldOptions};
