//! Education command handlers

use anyhow::{bail, Result};
use clap::Args;

use resumecraft_core::{EducationEntry, EducationPatch, ResumeStore};

use crate::editor::confirm;
use crate::output::{short_id, Output};

use super::{resolve_id, warn_if_unsaved};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// School or university
    pub institution: String,
    /// Degree earned
    pub degree: String,
    /// Field of study
    #[arg(long)]
    pub field: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Start date (YYYY-MM)
    #[arg(long)]
    pub start: Option<String>,
    /// End date (YYYY-MM)
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub gpa: Option<String>,
}

impl AddArgs {
    fn into_entry(self) -> EducationEntry {
        EducationEntry {
            field: self.field.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            start_date: self.start.unwrap_or_default(),
            end_date: self.end.unwrap_or_default(),
            gpa: self.gpa.unwrap_or_default(),
            ..EducationEntry::new(self.institution, self.degree)
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Entry ID (full or prefix)
    pub id: String,
    #[arg(long)]
    pub institution: Option<String>,
    #[arg(long)]
    pub degree: Option<String>,
    #[arg(long)]
    pub field: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub gpa: Option<String>,
}

impl UpdateArgs {
    fn into_patch(self) -> EducationPatch {
        EducationPatch {
            institution: self.institution,
            degree: self.degree,
            field: self.field,
            location: self.location,
            start_date: self.start,
            end_date: self.end,
            gpa: self.gpa,
        }
    }
}

fn resolve(store: &ResumeStore, query: &str) -> Result<String> {
    resolve_id(
        "education",
        query,
        store
            .resume()
            .education
            .iter()
            .map(|e| (e.id.as_str(), format!("{}, {}", e.degree, e.institution))),
    )
}

/// Add an education entry
pub fn add(store: &mut ResumeStore, args: AddArgs, output: &Output) -> Result<()> {
    let entry = args.into_entry();
    let id = entry.id.clone();

    store.add_education(entry);
    warn_if_unsaved(store, output);

    output.success(&format!("Added education: {}", short_id(&id)));
    if let Some(entry) = store.find_education(&id) {
        output.print_education(entry)?;
    }
    Ok(())
}

/// List education entries in display order
pub fn list(store: &ResumeStore, output: &Output) -> Result<()> {
    output.print_education_list(&store.resume().education)
}

/// Update fields of one entry
pub fn update(store: &mut ResumeStore, args: UpdateArgs, output: &Output) -> Result<()> {
    let id = resolve(store, &args.id)?;
    let patch = args.into_patch();

    if patch.is_empty() {
        bail!("Nothing to update. Pass at least one field, e.g. --degree");
    }

    if !store.update_education(&id, patch) {
        bail!("Education not found: {}", id);
    }
    warn_if_unsaved(store, output);

    output.success("Education updated");
    if let Some(entry) = store.find_education(&id) {
        output.print_education(entry)?;
    }
    Ok(())
}

/// Remove an entry
pub fn remove(store: &mut ResumeStore, query: String, yes: bool, output: &Output) -> Result<()> {
    let id = resolve(store, &query)?;

    if output.should_prompt() && !yes {
        if let Some(entry) = store.find_education(&id) {
            println!(
                "Remove education: {} - {}, {}",
                short_id(&entry.id),
                entry.degree,
                entry.institution
            );
        }
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if !store.remove_education(&id) {
        bail!("Education not found: {}", id);
    }
    warn_if_unsaved(store, output);

    output.success(&format!("Removed education: {}", id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use resumecraft_core::MemoryStorage;

    #[test]
    fn test_add_and_update() {
        let mut store =
            ResumeStore::with_storage(Box::new(MemoryStorage::new()), "resume-storage");
        let output = Output::new(OutputFormat::Quiet);

        let args = AddArgs {
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            field: Some("Mathematics".to_string()),
            location: None,
            start: Some("2010-09".to_string()),
            end: Some("2014-06".to_string()),
            gpa: None,
        };
        add(&mut store, args, &output).unwrap();

        let id = store.resume().education[0].id.clone();
        let args = UpdateArgs {
            id: id.clone(),
            gpa: Some("3.9".to_string()),
            ..UpdateArgs::default()
        };
        update(&mut store, args, &output).unwrap();

        let entry = store.find_education(&id).unwrap();
        assert_eq!(entry.field, "Mathematics");
        assert_eq!(entry.gpa, "3.9");

        remove(&mut store, id, true, &output).unwrap();
        assert!(store.resume().education.is_empty());
    }
}
