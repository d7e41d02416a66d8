//! Interactive prompt fallbacks for missing CLI arguments
//!
//! Values supplied as arguments are never re-prompted for; each prompt here
//! covers exactly one missing field. The name prompt re-validates inline so
//! the user gets an immediate reject-and-retry instead of a late error.

use aiva_scaffold::{catalog, validate_project_name};
use anyhow::Result;
use dialoguer::{Input, Select};

/// Default suggestion offered by the project-name prompt
const DEFAULT_PROJECT_NAME: &str = "my-aiva-app";

/// Prompt for a project name with inline validation
pub fn prompt_project_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Project name")
        .default(DEFAULT_PROJECT_NAME.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            validate_project_name(input).map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(name)
}

/// Prompt for a template from the template catalog
pub fn prompt_template() -> Result<String> {
    let templates = catalog::templates();
    let items: Vec<String> = templates
        .iter()
        .map(|t| format!("{} - {}", t.key, t.description))
        .collect();

    let selection = Select::new()
        .with_prompt("Select a template")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(templates[selection].key.to_string())
}

/// Prompt for a vertical from the vertical catalog
pub fn prompt_vertical() -> Result<String> {
    let verticals = catalog::verticals();
    let items: Vec<String> = verticals
        .iter()
        .map(|v| format!("{} - {}", v.key, v.description))
        .collect();

    let selection = Select::new()
        .with_prompt("Select a vertical (pre-built components)")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(verticals[selection].key.to_string())
}
