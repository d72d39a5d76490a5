//! Whole-resume command handlers: preview, score, import, reset

use std::path::Path;

use anyhow::{Context, Result};

use resumecraft_core::{read_resume_json, score, ResumeStore, TemplateId};

use crate::editor::confirm;
use crate::output::{Output, OutputFormat};

use super::warn_if_unsaved;

/// Render the resume with the selected template, or `template` if given
///
/// Previewing with another template does not change the selection.
pub fn preview(store: &ResumeStore, template: Option<String>, output: &Output) -> Result<()> {
    let id = match template {
        Some(name) => name.parse::<TemplateId>()?,
        None => store.selected_template(),
    };
    let text = id.render(store.resume());

    match output.format {
        OutputFormat::Json => output.print_json(&serde_json::json!({
            "template": id,
            "text": text
        }))?,
        OutputFormat::Human | OutputFormat::Quiet => print!("{}", text),
    }
    Ok(())
}

/// Show the completeness score
pub fn show_score(store: &ResumeStore, output: &Output) -> Result<()> {
    output.print_score(&score::score(store.resume()))
}

/// Replace the whole resume with a JSON document
pub fn import(store: &mut ResumeStore, path: &Path, yes: bool, output: &Output) -> Result<()> {
    let resume = read_resume_json(path)
        .with_context(|| format!("Failed to import resume from {:?}", path))?;

    if output.should_prompt() && !yes && !store.resume().is_empty() {
        println!("This replaces your current resume.");
        if !confirm("Continue?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.load_resume(resume);
    warn_if_unsaved(store, output);

    output.success(&format!("Imported resume from {}", path.display()));
    Ok(())
}

/// Clear the resume and template selection
pub fn reset(store: &mut ResumeStore, yes: bool, output: &Output) -> Result<()> {
    if output.should_prompt() && !yes {
        println!("This deletes everything in your resume.");
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.reset();
    warn_if_unsaved(store, output);

    output.success("Resume reset");
    Ok(())
}
