//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use anyhow::{Context, Result};
use serde::Serialize;

use resumecraft_core::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeScore, Skills, TemplateId,
};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print any serializable value as pretty JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{}", json);
        Ok(())
    }

    /// Print contact details and summary
    pub fn print_personal(&self, info: &PersonalInfo) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                let fields = [
                    ("Name", info.full_name()),
                    ("Title", info.title.clone()),
                    ("Email", info.email.clone()),
                    ("Phone", info.phone.clone()),
                    ("Location", info.location.clone()),
                    ("LinkedIn", info.linkedin.clone()),
                    ("Website", info.website.clone()),
                ];
                for (label, value) in fields {
                    println!("{:<10}{}", format!("{}:", label), or_unset(&value));
                }
                if !info.summary.is_empty() {
                    println!();
                    println!("{}", info.summary);
                }
            }
            OutputFormat::Json => self.print_json(info)?,
            OutputFormat::Quiet => println!("{}", info.full_name()),
        }
        Ok(())
    }

    /// Print a single experience entry
    pub fn print_experience(&self, entry: &ExperienceEntry) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("ID:        {}", entry.id);
                println!("Company:   {}", or_unset(&entry.company));
                println!("Position:  {}", or_unset(&entry.position));
                if !entry.location.is_empty() {
                    println!("Location:  {}", entry.location);
                }
                println!(
                    "Dates:     {}",
                    span(&entry.start_date, &entry.end_date, entry.current)
                );
                for bullet in &entry.description {
                    println!("  • {}", bullet);
                }
            }
            OutputFormat::Json => self.print_json(entry)?,
            OutputFormat::Quiet => println!("{}", entry.id),
        }
        Ok(())
    }

    /// Print experience entries, one per line
    pub fn print_experience_list(&self, entries: &[ExperienceEntry]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                if entries.is_empty() {
                    println!("No experience entries.");
                    return Ok(());
                }
                for entry in entries {
                    println!(
                        "{} | {} | {} | {}",
                        short_id(&entry.id),
                        truncate(&entry.position, 30),
                        truncate(&entry.company, 25),
                        span(&entry.start_date, &entry.end_date, entry.current)
                    );
                }
                println!("\n{} entry(ies)", entries.len());
            }
            OutputFormat::Json => self.print_json(entries)?,
            OutputFormat::Quiet => {
                for entry in entries {
                    println!("{}", entry.id);
                }
            }
        }
        Ok(())
    }

    /// Print a single education entry
    pub fn print_education(&self, entry: &EducationEntry) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("ID:          {}", entry.id);
                println!("Institution: {}", or_unset(&entry.institution));
                println!("Degree:      {}", or_unset(&entry.degree));
                if !entry.field.is_empty() {
                    println!("Field:       {}", entry.field);
                }
                if !entry.location.is_empty() {
                    println!("Location:    {}", entry.location);
                }
                println!(
                    "Dates:       {}",
                    span(&entry.start_date, &entry.end_date, false)
                );
                if !entry.gpa.is_empty() {
                    println!("GPA:         {}", entry.gpa);
                }
            }
            OutputFormat::Json => self.print_json(entry)?,
            OutputFormat::Quiet => println!("{}", entry.id),
        }
        Ok(())
    }

    /// Print education entries, one per line
    pub fn print_education_list(&self, entries: &[EducationEntry]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                if entries.is_empty() {
                    println!("No education entries.");
                    return Ok(());
                }
                for entry in entries {
                    println!(
                        "{} | {} | {} | {}",
                        short_id(&entry.id),
                        truncate(&entry.degree, 30),
                        truncate(&entry.institution, 30),
                        span(&entry.start_date, &entry.end_date, false)
                    );
                }
                println!("\n{} entry(ies)", entries.len());
            }
            OutputFormat::Json => self.print_json(entries)?,
            OutputFormat::Quiet => {
                for entry in entries {
                    println!("{}", entry.id);
                }
            }
        }
        Ok(())
    }

    /// Print a single project
    pub fn print_project(&self, project: &ProjectEntry) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("ID:           {}", project.id);
                println!("Name:         {}", or_unset(&project.name));
                if !project.description.is_empty() {
                    println!("Description:  {}", project.description);
                }
                if !project.technologies.is_empty() {
                    println!("Technologies: {}", project.technologies.join(", "));
                }
                if !project.link.is_empty() {
                    println!("Link:         {}", project.link);
                }
                if !project.github.is_empty() {
                    println!("GitHub:       {}", project.github);
                }
            }
            OutputFormat::Json => self.print_json(project)?,
            OutputFormat::Quiet => println!("{}", project.id),
        }
        Ok(())
    }

    /// Print projects, one per line
    pub fn print_projects(&self, projects: &[ProjectEntry]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                if projects.is_empty() {
                    println!("No projects.");
                    return Ok(());
                }
                for project in projects {
                    println!(
                        "{} | {} | {}",
                        short_id(&project.id),
                        truncate(&project.name, 30),
                        truncate(&project.technologies.join(", "), 40)
                    );
                }
                println!("\n{} project(s)", projects.len());
            }
            OutputFormat::Json => self.print_json(projects)?,
            OutputFormat::Quiet => {
                for project in projects {
                    println!("{}", project.id);
                }
            }
        }
        Ok(())
    }

    /// Print both skill lists
    pub fn print_skills(&self, skills: &Skills) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("Technical: {}", or_unset(&skills.technical.join(", ")));
                println!("Soft:      {}", or_unset(&skills.soft.join(", ")));
            }
            OutputFormat::Json => self.print_json(skills)?,
            OutputFormat::Quiet => {
                for skill in skills.technical.iter().chain(&skills.soft) {
                    println!("{}", skill);
                }
            }
        }
        Ok(())
    }

    /// Print the template catalogue, marking the selected one
    pub fn print_templates(&self, selected: TemplateId) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                for id in TemplateId::ALL {
                    let marker = if id == selected { "*" } else { " " };
                    println!(
                        "{} {:<10} {:<22} {}",
                        marker,
                        id.as_str(),
                        id.name(),
                        id.description()
                    );
                }
            }
            OutputFormat::Json => {
                let templates: Vec<_> = TemplateId::ALL
                    .iter()
                    .map(|id| {
                        serde_json::json!({
                            "id": id,
                            "name": id.name(),
                            "description": id.description(),
                            "selected": *id == selected
                        })
                    })
                    .collect();
                self.print_json(&templates)?;
            }
            OutputFormat::Quiet => {
                for id in TemplateId::ALL {
                    println!("{}", id);
                }
            }
        }
        Ok(())
    }

    /// Print a completeness score with its issues and suggestions
    pub fn print_score(&self, score: &ResumeScore) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!(
                    "Score: {}/{} ({})",
                    score.score,
                    resumecraft_core::score::MAX_SCORE,
                    score.grade().label()
                );
                if !score.issues.is_empty() {
                    println!();
                    println!("Issues:");
                    for issue in &score.issues {
                        println!("  ✗ {}", issue);
                    }
                }
                if !score.suggestions.is_empty() {
                    println!();
                    println!("Suggestions:");
                    for suggestion in &score.suggestions {
                        println!("  - {}", suggestion);
                    }
                }
            }
            OutputFormat::Json => {
                self.print_json(&serde_json::json!({
                    "score": score.score,
                    "grade": score.grade(),
                    "issues": score.issues,
                    "suggestions": score.suggestions
                }))?;
            }
            OutputFormat::Quiet => println!("{}", score.score),
        }
        Ok(())
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a warning to stderr (suppressed in quiet mode)
    pub fn warn(&self, message: &str) {
        if !self.is_quiet() {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// First eight characters of an entry ID
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}

/// Raw date span as entered, e.g. "2020-01 - Present"
fn span(start: &str, end: &str, current: bool) -> String {
    let end = if current { "Present" } else { end };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => "-".to_string(),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (false, false) => format!("{} - {}", start, end),
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
