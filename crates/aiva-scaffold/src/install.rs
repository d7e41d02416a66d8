//! Dependency installation
//!
//! Runs `npm install` inside the new project directory with output captured,
//! so the install stream never interleaves with the progress spinner. A
//! non-zero exit is fatal for the whole workflow.

use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

/// How much captured stderr to surface in an install failure
const STDERR_TAIL_LINES: usize = 10;

/// Install project dependencies with npm
///
/// # Arguments
/// * `project_dir` - Working directory for the install
///
/// # Errors
/// Returns error if npm is not installed or exits non-zero.
pub async fn install_dependencies(project_dir: &Utf8Path) -> Result<()> {
    check_npm_available()?;

    info!("Installing dependencies in {}", project_dir);
    debug!("Running: npm install");

    let output = Command::new("npm")
        .arg("install")
        .current_dir(project_dir)
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::install_failed(stderr_tail(&stderr)));
    }

    info!("Dependencies installed successfully");
    Ok(())
}

/// Check that npm is installed and in PATH
fn check_npm_available() -> Result<()> {
    which::which("npm").map_err(|_| Error::NpmNotFound)?;
    Ok(())
}

/// Last few lines of captured stderr, enough to diagnose without flooding
fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.trim().lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_tail_short_input() {
        assert_eq!(stderr_tail("one error\n"), "one error");
        assert_eq!(stderr_tail(""), "");
    }

    #[test]
    fn test_stderr_tail_truncates() {
        let long: String = (0..40).map(|i| format!("line {}\n", i)).collect();
        let tail = stderr_tail(&long);

        assert_eq!(tail.lines().count(), STDERR_TAIL_LINES);
        assert!(tail.starts_with("line 30"));
        assert!(tail.ends_with("line 39"));
    }
}
