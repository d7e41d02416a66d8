//! Template repository fetching
//!
//! Templates are remote starter repositories. A fetch is a history-free
//! snapshot: shallow clone into the destination, then drop the `.git`
//! directory so the result is plain files rather than a checkout.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

/// Fetch a template repository into a destination directory
///
/// # Arguments
/// * `repo` - Repository identifier (`owner/name` shorthand or full URL)
/// * `destination` - Destination directory path
///
/// # Returns
/// Path to the populated directory
///
/// # Errors
/// Returns error if:
/// - git is not installed
/// - The repository identifier is invalid
/// - The destination already exists
/// - The clone operation fails
pub async fn fetch_template(repo: &str, destination: &Utf8Path) -> Result<Utf8PathBuf> {
    let url = repo_url(repo)?;
    info!("Fetching template: {} -> {}", url, destination);

    if destination.exists() {
        return Err(Error::project_exists(destination.as_str()));
    }

    check_git_available()?;

    let output = Command::new("git")
        .args(["clone", "--depth", "1"])
        .arg(&url)
        .arg(destination.as_str())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::clone_failed(stderr.trim().to_string()));
    }

    // Snapshot semantics: the scaffolded project is not a clone of the
    // template, so its git metadata must not survive.
    let git_dir = destination.join(".git");
    if git_dir.exists() {
        debug!("Removing {}", git_dir);
        tokio::fs::remove_dir_all(&git_dir).await?;
    }

    info!("Template fetched successfully");
    Ok(destination.to_path_buf())
}

/// Check that git is installed and in PATH
fn check_git_available() -> Result<()> {
    which::which("git").map_err(|_| Error::GitNotFound)?;
    Ok(())
}

/// Expand a repository identifier to a clone URL
///
/// `owner/name` shorthand expands to a GitHub HTTPS URL; `https://`,
/// `http://`, and `git@` identifiers pass through unchanged.
fn repo_url(repo: &str) -> Result<String> {
    if repo.starts_with("https://") || repo.starts_with("http://") || repo.starts_with("git@") {
        return Ok(repo.to_string());
    }

    let mut parts = repo.splitn(2, '/');
    let owner = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();

    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return Err(Error::invalid_repo(repo));
    }

    Ok(format!("https://github.com/{}/{}.git", owner, name))
}
