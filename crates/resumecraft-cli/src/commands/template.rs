//! Template command handlers

use anyhow::{bail, Result};

use resumecraft_core::{ResumeStore, TemplateId};

use crate::output::{Output, OutputFormat};

use super::warn_if_unsaved;

/// List every template, marking the selected one
pub fn list(store: &ResumeStore, output: &Output) -> Result<()> {
    output.print_templates(store.selected_template())
}

/// Show the selected template
pub fn show(store: &ResumeStore, output: &Output) -> Result<()> {
    let id = store.selected_template();
    match output.format {
        OutputFormat::Human => {
            println!("{} ({})", id.name(), id);
            println!("{}", id.description());
        }
        OutputFormat::Json => output.print_json(&serde_json::json!({
            "id": id,
            "name": id.name(),
            "description": id.description()
        }))?,
        OutputFormat::Quiet => println!("{}", id),
    }
    Ok(())
}

/// Select a template by ID
pub fn set(store: &mut ResumeStore, id: String, output: &Output) -> Result<()> {
    if !store.set_selected_template(&id) {
        let valid: Vec<_> = TemplateId::ALL.iter().map(|t| t.as_str()).collect();
        bail!(
            "Unknown template: '{}'\nValid templates: {}",
            id,
            valid.join(", ")
        );
    }
    warn_if_unsaved(store, output);

    let selected = store.selected_template();
    output.success(&format!("Selected template: {}", selected.name()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumecraft_core::MemoryStorage;

    #[test]
    fn test_set_template() {
        let mut store =
            ResumeStore::with_storage(Box::new(MemoryStorage::new()), "resume-storage");
        let output = Output::new(OutputFormat::Quiet);

        set(&mut store, "classic".to_string(), &output).unwrap();
        assert_eq!(store.selected_template(), TemplateId::Classic);

        let err = set(&mut store, "fancy".to_string(), &output).unwrap_err();
        assert!(err.to_string().contains("Unknown template: 'fancy'"));
        // Selection is unchanged after a bad name
        assert_eq!(store.selected_template(), TemplateId::Classic);
    }
}
