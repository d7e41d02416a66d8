//! Error types for aiva-scaffold

use thiserror::Error;

/// Result type alias using aiva-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Target directory already exists
    #[error("Directory \"{path}\" already exists")]
    ProjectExists { path: String },

    /// Project name is empty or whitespace
    #[error("Project name is required")]
    EmptyProjectName,

    /// Unknown template key
    #[error("Unknown template \"{template}\". Available templates: {available}")]
    UnknownTemplate {
        template: String,
        available: String,
    },

    /// Unknown vertical key
    #[error("Unknown vertical \"{vertical}\". Available verticals: {available}")]
    UnknownVertical {
        vertical: String,
        available: String,
    },

    /// Invalid repository identifier
    #[error("Invalid repository identifier: {repo}")]
    InvalidRepo { repo: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// Clone failed
    #[error("Failed to download template: {message}")]
    CloneFailed { message: String },

    /// npm command not found
    #[error("npm not found. Please ensure Node.js is installed and in PATH")]
    NpmNotFound,

    /// Dependency installation failed
    #[error("npm install failed: {message}")]
    InstallFailed { message: String },

    /// JSON parsing error
    #[error("Failed to parse package.json: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create an unknown template error
    pub fn unknown_template(template: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownTemplate {
            template: template.into(),
            available: available.into(),
        }
    }

    /// Create an unknown vertical error
    pub fn unknown_vertical(vertical: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownVertical {
            vertical: vertical.into(),
            available: available.into(),
        }
    }

    /// Create an invalid repo error
    pub fn invalid_repo(repo: impl Into<String>) -> Self {
        Self::InvalidRepo { repo: repo.into() }
    }

    /// Create a clone failed error
    pub fn clone_failed(message: impl Into<String>) -> Self {
        Self::CloneFailed {
            message: message.into(),
        }
    }

    /// Create an install failed error
    pub fn install_failed(message: impl Into<String>) -> Self {
        Self::InstallFailed {
            message: message.into(),
        }
    }
}
