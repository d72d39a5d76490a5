//! Project command handlers

use anyhow::{bail, Result};
use clap::Args;

use resumecraft_core::{ProjectEntry, ProjectPatch, ResumeStore};

use crate::editor::confirm;
use crate::output::{short_id, Output};

use super::{resolve_id, split_list, warn_if_unsaved};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project name
    pub name: String,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Comma-separated list, e.g. "Rust,SQLite"
    #[arg(short, long)]
    pub tech: Option<String>,
    /// Live or demo URL
    #[arg(long)]
    pub link: Option<String>,
    /// Source repository URL
    #[arg(long)]
    pub github: Option<String>,
}

impl AddArgs {
    fn into_entry(self) -> ProjectEntry {
        ProjectEntry {
            description: self.description.unwrap_or_default(),
            technologies: self.tech.as_deref().map(split_list).unwrap_or_default(),
            link: self.link.unwrap_or_default(),
            github: self.github.unwrap_or_default(),
            ..ProjectEntry::new(self.name)
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Project ID (full or prefix)
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Replace technologies with a comma-separated list
    #[arg(short, long)]
    pub tech: Option<String>,
    #[arg(long)]
    pub link: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
}

impl UpdateArgs {
    fn into_patch(self) -> ProjectPatch {
        ProjectPatch {
            name: self.name,
            description: self.description,
            technologies: self.tech.as_deref().map(split_list),
            link: self.link,
            github: self.github,
        }
    }
}

fn resolve(store: &ResumeStore, query: &str) -> Result<String> {
    resolve_id(
        "project",
        query,
        store
            .resume()
            .projects
            .iter()
            .map(|p| (p.id.as_str(), p.name.clone())),
    )
}

/// Add a project
pub fn add(store: &mut ResumeStore, args: AddArgs, output: &Output) -> Result<()> {
    let entry = args.into_entry();
    let id = entry.id.clone();

    store.add_project(entry);
    warn_if_unsaved(store, output);

    output.success(&format!("Added project: {}", short_id(&id)));
    if let Some(project) = store.find_project(&id) {
        output.print_project(project)?;
    }
    Ok(())
}

/// List projects in display order
pub fn list(store: &ResumeStore, output: &Output) -> Result<()> {
    output.print_projects(&store.resume().projects)
}

/// Update fields of one project
pub fn update(store: &mut ResumeStore, args: UpdateArgs, output: &Output) -> Result<()> {
    let id = resolve(store, &args.id)?;
    let patch = args.into_patch();

    if patch.is_empty() {
        bail!("Nothing to update. Pass at least one field, e.g. --description");
    }

    if !store.update_project(&id, patch) {
        bail!("Project not found: {}", id);
    }
    warn_if_unsaved(store, output);

    output.success("Project updated");
    if let Some(project) = store.find_project(&id) {
        output.print_project(project)?;
    }
    Ok(())
}

/// Remove a project
pub fn remove(store: &mut ResumeStore, query: String, yes: bool, output: &Output) -> Result<()> {
    let id = resolve(store, &query)?;

    if output.should_prompt() && !yes {
        if let Some(project) = store.find_project(&id) {
            println!("Remove project: {} - {}", short_id(&project.id), project.name);
        }
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if !store.remove_project(&id) {
        bail!("Project not found: {}", id);
    }
    warn_if_unsaved(store, output);

    output.success(&format!("Removed project: {}", id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use resumecraft_core::MemoryStorage;

    #[test]
    fn test_add_splits_technologies() {
        let mut store =
            ResumeStore::with_storage(Box::new(MemoryStorage::new()), "resume-storage");
        let output = Output::new(OutputFormat::Quiet);

        let args = AddArgs {
            name: "resumecraft".to_string(),
            description: None,
            tech: Some("Rust, serde".to_string()),
            link: None,
            github: Some("https://github.com/example/resumecraft".to_string()),
        };
        add(&mut store, args, &output).unwrap();

        let project = &store.resume().projects[0];
        assert_eq!(project.technologies, vec!["Rust", "serde"]);
        assert_eq!(project.github, "https://github.com/example/resumecraft");
    }

    #[test]
    fn test_update_keeps_technologies_unless_given() {
        let args = UpdateArgs {
            id: "p1".to_string(),
            name: Some("Renamed".to_string()),
            ..UpdateArgs::default()
        };
        let patch = args.into_patch();
        assert_eq!(patch.name.as_deref(), Some("Renamed"));
        assert!(patch.technologies.is_none());
    }
}
