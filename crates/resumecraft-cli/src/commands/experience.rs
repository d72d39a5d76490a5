//! Experience command handlers

use anyhow::{bail, Result};
use clap::Args;

use resumecraft_core::{ExperienceEntry, ExperiencePatch, ResumeStore};

use crate::editor::confirm;
use crate::output::{short_id, Output};

use super::{resolve_id, warn_if_unsaved};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Company name
    pub company: String,
    /// Job title
    pub position: String,
    #[arg(long)]
    pub location: Option<String>,
    /// Start date (YYYY-MM)
    #[arg(long)]
    pub start: Option<String>,
    /// End date (YYYY-MM)
    #[arg(long, conflicts_with = "current")]
    pub end: Option<String>,
    /// Still in this position
    #[arg(long)]
    pub current: bool,
    /// Bullet point (repeatable)
    #[arg(short, long = "bullet")]
    pub bullets: Vec<String>,
}

impl AddArgs {
    fn into_entry(self) -> ExperienceEntry {
        ExperienceEntry {
            location: self.location.unwrap_or_default(),
            start_date: self.start.unwrap_or_default(),
            end_date: self.end.unwrap_or_default(),
            current: self.current,
            description: self.bullets,
            ..ExperienceEntry::new(self.company, self.position)
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Entry ID (full or prefix)
    pub id: String,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    /// Mark as current (true) or ended (false)
    #[arg(long)]
    pub current: Option<bool>,
    /// Replace all bullet points (repeatable)
    #[arg(short, long = "bullet")]
    pub bullets: Vec<String>,
    /// Remove all bullet points
    #[arg(long, conflicts_with = "bullets")]
    pub clear_bullets: bool,
}

impl UpdateArgs {
    fn into_patch(self) -> ExperiencePatch {
        let description = if self.clear_bullets {
            Some(Vec::new())
        } else if self.bullets.is_empty() {
            None
        } else {
            Some(self.bullets)
        };

        ExperiencePatch {
            company: self.company,
            position: self.position,
            location: self.location,
            start_date: self.start,
            end_date: self.end,
            current: self.current,
            description,
        }
    }
}

fn resolve(store: &ResumeStore, query: &str) -> Result<String> {
    resolve_id(
        "experience",
        query,
        store
            .resume()
            .experience
            .iter()
            .map(|e| (e.id.as_str(), format!("{} at {}", e.position, e.company))),
    )
}

/// Add an experience entry
pub fn add(store: &mut ResumeStore, args: AddArgs, output: &Output) -> Result<()> {
    let entry = args.into_entry();
    let id = entry.id.clone();

    store.add_experience(entry);
    warn_if_unsaved(store, output);

    output.success(&format!("Added experience: {}", short_id(&id)));
    if let Some(entry) = store.find_experience(&id) {
        output.print_experience(entry)?;
    }
    Ok(())
}

/// List experience entries in display order
pub fn list(store: &ResumeStore, output: &Output) -> Result<()> {
    output.print_experience_list(&store.resume().experience)
}

/// Update fields of one entry
pub fn update(store: &mut ResumeStore, args: UpdateArgs, output: &Output) -> Result<()> {
    let id = resolve(store, &args.id)?;
    let patch = args.into_patch();

    if patch.is_empty() {
        bail!("Nothing to update. Pass at least one field, e.g. --position");
    }

    if !store.update_experience(&id, patch) {
        bail!("Experience not found: {}", id);
    }
    warn_if_unsaved(store, output);

    output.success("Experience updated");
    if let Some(entry) = store.find_experience(&id) {
        output.print_experience(entry)?;
    }
    Ok(())
}

/// Remove an entry
pub fn remove(store: &mut ResumeStore, query: String, yes: bool, output: &Output) -> Result<()> {
    let id = resolve(store, &query)?;

    if output.should_prompt() && !yes {
        if let Some(entry) = store.find_experience(&id) {
            println!(
                "Remove experience: {} - {} at {}",
                short_id(&entry.id),
                entry.position,
                entry.company
            );
        }
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if !store.remove_experience(&id) {
        bail!("Experience not found: {}", id);
    }
    warn_if_unsaved(store, output);

    output.success(&format!("Removed experience: {}", id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use resumecraft_core::MemoryStorage;

    fn test_store() -> ResumeStore {
        ResumeStore::with_storage(Box::new(MemoryStorage::new()), "resume-storage")
    }

    fn add_args() -> AddArgs {
        AddArgs {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: Some("Remote".to_string()),
            start: Some("2020-01".to_string()),
            end: None,
            current: true,
            bullets: vec!["Shipped things".to_string()],
        }
    }

    #[test]
    fn test_add_update_remove() {
        let mut store = test_store();
        let output = Output::new(OutputFormat::Quiet);

        add(&mut store, add_args(), &output).unwrap();
        let entry = store.resume().experience[0].clone();
        assert_eq!(entry.company, "Acme");
        assert!(entry.current);
        assert_eq!(entry.description, vec!["Shipped things"]);

        let args = UpdateArgs {
            id: short_id(&entry.id),
            current: Some(false),
            end: Some("2023-04".to_string()),
            ..UpdateArgs::default()
        };
        update(&mut store, args, &output).unwrap();

        let updated = store.find_experience(&entry.id).unwrap();
        assert!(!updated.current);
        assert_eq!(updated.end_date, "2023-04");
        // Untouched fields survive
        assert_eq!(updated.description, vec!["Shipped things"]);

        remove(&mut store, entry.id.clone(), true, &output).unwrap();
        assert!(store.resume().experience.is_empty());
    }

    #[test]
    fn test_update_empty_patch_fails() {
        let mut store = test_store();
        let output = Output::new(OutputFormat::Quiet);
        add(&mut store, add_args(), &output).unwrap();
        let id = store.resume().experience[0].id.clone();

        let args = UpdateArgs {
            id,
            ..UpdateArgs::default()
        };
        assert!(update(&mut store, args, &output).is_err());
    }

    #[test]
    fn test_clear_bullets() {
        let args = UpdateArgs {
            id: "e1".to_string(),
            clear_bullets: true,
            ..UpdateArgs::default()
        };
        assert_eq!(args.into_patch().description, Some(Vec::new()));
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = test_store();
        let output = Output::new(OutputFormat::Quiet);

        assert!(remove(&mut store, "missing".to_string(), true, &output).is_err());
    }
}
