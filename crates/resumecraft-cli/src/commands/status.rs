//! Status command handler

use anyhow::Result;

use resumecraft_core::{score, Config, FileStorage, ResumeStore};

use crate::output::{Output, OutputFormat};

/// Show where the resume is stored and what it contains
pub fn show(store: &ResumeStore, config: &Config, output: &Output) -> Result<()> {
    let resume = store.resume();
    let template = store.selected_template();
    let state_path = config.state_path();
    let size = FileStorage::new(config.data_dir.clone()).size_of(store.storage_key());
    let rating = score::score(resume);

    match output.format {
        OutputFormat::Json => {
            output.print_json(&serde_json::json!({
                "name": resume.full_name(),
                "template": template,
                "score": rating.score,
                "storage": {
                    "key": store.storage_key(),
                    "path": state_path,
                    "exists": size.is_some(),
                    "size": size
                },
                "counts": {
                    "experience": resume.experience.len(),
                    "education": resume.education.len(),
                    "projects": resume.projects.len(),
                    "technical_skills": resume.skills.technical.len(),
                    "soft_skills": resume.skills.soft.len()
                }
            }))?;
        }
        OutputFormat::Quiet => {
            println!("{}", state_path.display());
        }
        OutputFormat::Human => {
            let name = resume.full_name();
            println!("ResumeCraft Status");
            println!("==================");
            println!();
            println!(
                "Resume:   {}",
                if name.is_empty() { "(unnamed)" } else { &name }
            );
            println!("Template: {} ({})", template.name(), template);
            println!("Score:    {}/{}", rating.score, score::MAX_SCORE);
            println!();
            println!("Storage:");
            println!("  Key:      {}", store.storage_key());
            println!("  Location: {}", state_path.display());
            match size {
                Some(bytes) => println!("  Size:     {}", format_size(bytes)),
                None => println!("  Size:     (not saved yet)"),
            }
            println!();
            println!("Contents:");
            println!("  Experience: {}", resume.experience.len());
            println!("  Education:  {}", resume.education.len());
            println!("  Projects:   {}", resume.projects.len());
            println!(
                "  Skills:     {} technical, {} soft",
                resume.skills.technical.len(),
                resume.skills.soft.len()
            );
        }
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}
