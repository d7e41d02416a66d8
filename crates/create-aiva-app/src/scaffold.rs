//! The scaffolding workflow
//!
//! Strictly forward flow: resolve inputs, validate preconditions, fetch the
//! template, customize the manifest, install dependencies, report. Any
//! collaborator failure aborts with no rollback; whatever landed on disk
//! stays there for the user to inspect.

use anyhow::{Context, Result};
use tracing::debug;

use aiva_scaffold::{
    catalog, customize_manifest, fetch_template, install_dependencies, ScaffoldOptions,
};

use crate::cli::Cli;
use crate::output;
use crate::prompts;

/// Run the workflow end to end
pub async fn run(cli: Cli) -> Result<()> {
    output::banner();

    let options = resolve_options(cli)?;

    // Defensive re-check: argument-supplied values bypassed the prompt
    // validators, and prompt-supplied values were checked against a
    // filesystem that may have changed since.
    options.validate()?;

    debug!("Resolved options: {:?}", options);

    let template = catalog::template(&options.template)
        .with_context(|| format!("Unknown template \"{}\"", options.template))?;
    let project_dir = options.project_dir();

    // Fetch
    let spinner = output::spinner("Downloading template...");
    match fetch_template(template.repo, &project_dir).await {
        Ok(_) => spinner.finish_with_message("Template downloaded"),
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e).context("Failed to create project");
        }
    }

    // Customize
    let vertical = options.effective_vertical();
    let message = match vertical {
        Some(v) => format!("Applying {} vertical...", v),
        None => "Customizing project...".to_string(),
    };
    let spinner = output::spinner(&message);
    match customize_manifest(&project_dir, &options.name, vertical) {
        Ok(_) => match vertical {
            Some(v) => spinner.finish_with_message(format!("Applied {} vertical", v)),
            None => spinner.finish_with_message("Project customized"),
        },
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e).context("Failed to customize project");
        }
    }

    // Install
    if options.skip_install {
        debug!("Skipping npm install");
    } else {
        let spinner = output::spinner("Installing dependencies...");
        match install_dependencies(&project_dir).await {
            Ok(()) => spinner.finish_with_message("Dependencies installed"),
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e).context("Failed to install dependencies");
            }
        }
    }

    report_success(&options.name);
    Ok(())
}

/// Resolve options from arguments, falling back to interactive prompts
///
/// Argument precedence: a value supplied on the command line is never
/// re-prompted for. The vertical prompt only appears for the
/// customer-portal template.
fn resolve_options(cli: Cli) -> Result<ScaffoldOptions> {
    let name = match cli.project_name {
        Some(name) => name,
        None => prompts::prompt_project_name()?,
    };

    let template = match cli.template {
        Some(template) => template,
        None => prompts::prompt_template()?,
    };

    let vertical = if needs_vertical_prompt(&template, cli.vertical.as_deref()) {
        Some(prompts::prompt_vertical()?)
    } else {
        cli.vertical
    };

    Ok(ScaffoldOptions {
        name,
        template,
        vertical,
        skip_install: cli.skip_install,
    })
}

/// Whether the vertical prompt should appear
fn needs_vertical_prompt(template: &str, vertical: Option<&str>) -> bool {
    template == catalog::VERTICAL_TEMPLATE && vertical.is_none()
}

/// Success message and the fixed next-step instructions
fn report_success(name: &str) {
    println!();
    output::success(&format!("Success! Created {}", name));
    println!();
    output::info("Next steps:");
    println!();
    output::step(&format!("cd {}", name));
    output::step("cp .env.example .env.local");
    output::note("# Add your AIVA_API_KEY to .env.local");
    output::step("npm run dev");
    println!();
    output::note("Open in Cursor or Claude Code for AI-assisted development.");
    output::note("See CLAUDE.md for project context.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_prompt_only_for_customer_portal() {
        assert!(needs_vertical_prompt("customer-portal", None));
        assert!(!needs_vertical_prompt("customer-portal", Some("coffee")));
        assert!(!needs_vertical_prompt("merchant-dashboard", None));
        assert!(!needs_vertical_prompt("liquid-widgets", None));
    }
}
