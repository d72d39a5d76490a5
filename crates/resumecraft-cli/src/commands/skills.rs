//! Skills command handlers

use anyhow::{bail, Result};

use resumecraft_core::{ResumeStore, Skills};

use crate::output::Output;

use super::{split_list, warn_if_unsaved};

/// Show both skill lists
pub fn show(store: &ResumeStore, output: &Output) -> Result<()> {
    output.print_skills(&store.resume().skills)
}

/// Replace one or both skill lists; a list not given is kept
pub fn set(
    store: &mut ResumeStore,
    technical: Option<String>,
    soft: Option<String>,
    output: &Output,
) -> Result<()> {
    if technical.is_none() && soft.is_none() {
        bail!("Nothing to set. Pass --technical and/or --soft");
    }

    let current = &store.resume().skills;
    let skills = Skills::new(
        technical
            .as_deref()
            .map(split_list)
            .unwrap_or_else(|| current.technical.clone()),
        soft.as_deref()
            .map(split_list)
            .unwrap_or_else(|| current.soft.clone()),
    );

    store.update_skills(skills);
    warn_if_unsaved(store, output);

    output.success("Skills updated");
    output.print_skills(&store.resume().skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use resumecraft_core::MemoryStorage;

    #[test]
    fn test_set_keeps_missing_list() {
        let mut store =
            ResumeStore::with_storage(Box::new(MemoryStorage::new()), "resume-storage");
        let output = Output::new(OutputFormat::Quiet);

        set(
            &mut store,
            Some("Rust,Go".to_string()),
            Some("Mentoring".to_string()),
            &output,
        )
        .unwrap();
        set(&mut store, Some("Rust".to_string()), None, &output).unwrap();

        let skills = &store.resume().skills;
        assert_eq!(skills.technical, vec!["Rust"]);
        assert_eq!(skills.soft, vec!["Mentoring"]);

        // Empty string clears a list
        set(&mut store, None, Some(String::new()), &output).unwrap();
        assert!(store.resume().skills.soft.is_empty());
    }

    #[test]
    fn test_set_requires_a_list() {
        let mut store =
            ResumeStore::with_storage(Box::new(MemoryStorage::new()), "resume-storage");
        let output = Output::new(OutputFormat::Quiet);

        assert!(set(&mut store, None, None, &output).is_err());
    }
}
