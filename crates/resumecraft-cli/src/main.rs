//! ResumeCraft CLI
//!
//! Command-line interface for building a resume: edit sections, pick a
//! template, preview, score and export.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use resumecraft_core::{Config, ResumeStore};

mod commands;
mod editor;
mod logging;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "resumecraft")]
#[command(about = "ResumeCraft - build, preview and export your resume")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or set contact details and summary
    Personal {
        #[command(subcommand)]
        command: Option<PersonalCommands>,
    },
    /// Manage work experience
    Experience {
        #[command(subcommand)]
        command: ExperienceCommands,
    },
    /// Manage education
    Education {
        #[command(subcommand)]
        command: EducationCommands,
    },
    /// Manage projects
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Show or set skills
    Skills {
        #[command(subcommand)]
        command: Option<SkillsCommands>,
    },
    /// List, show or select templates
    Template {
        #[command(subcommand)]
        command: Option<TemplateCommands>,
    },
    /// Render the resume as text
    Preview {
        /// Preview with this template without selecting it
        #[arg(short, long)]
        template: Option<String>,
    },
    /// Score the resume for completeness
    Score,
    /// Export the resume
    Export {
        #[command(subcommand)]
        command: ExportCommands,
    },
    /// Replace the resume with a JSON document
    Import {
        /// JSON file written by `export json`
        file: PathBuf,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Clear the resume and template selection
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show storage location and resume contents
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum PersonalCommands {
    /// Show contact details and summary
    Show,
    /// Set one or more fields
    Set(commands::personal::SetArgs),
}

#[derive(Subcommand)]
enum ExperienceCommands {
    /// Add a position
    Add(commands::experience::AddArgs),
    /// List positions
    #[command(alias = "ls")]
    List,
    /// Update fields of a position
    #[command(alias = "edit")]
    Update(commands::experience::UpdateArgs),
    /// Remove a position
    #[command(alias = "rm")]
    Remove {
        /// Entry ID (full or prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum EducationCommands {
    /// Add a degree
    Add(commands::education::AddArgs),
    /// List degrees
    #[command(alias = "ls")]
    List,
    /// Update fields of a degree
    #[command(alias = "edit")]
    Update(commands::education::UpdateArgs),
    /// Remove a degree
    #[command(alias = "rm")]
    Remove {
        /// Entry ID (full or prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// Add a project
    Add(commands::project::AddArgs),
    /// List projects
    #[command(alias = "ls")]
    List,
    /// Update fields of a project
    #[command(alias = "edit")]
    Update(commands::project::UpdateArgs),
    /// Remove a project
    #[command(alias = "rm")]
    Remove {
        /// Project ID (full or prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SkillsCommands {
    /// Show skills
    Show,
    /// Replace skill lists
    Set {
        /// Comma-separated technical skills
        #[arg(long)]
        technical: Option<String>,
        /// Comma-separated soft skills
        #[arg(long)]
        soft: Option<String>,
    },
}

#[derive(Subcommand)]
enum TemplateCommands {
    /// List available templates
    #[command(alias = "ls")]
    List,
    /// Show the selected template
    Show,
    /// Select a template
    Set {
        /// Template ID (modern, classic, minimal, creative, executive, tech)
        id: String,
    },
}

#[derive(Subcommand)]
enum ExportCommands {
    /// Rendered text using the selected template
    Text {
        /// Output file (default: <data_dir>/exports/resume.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// JSON document, re-importable with `import`
    Json {
        /// Output file (default: <data_dir>/exports/resume.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Shareable link
    Link,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, storage_key, share_base_url, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config_path = cli.config.as_ref();

    // Config commands must work even when the store can't be opened
    if let Commands::Config { command } = &cli.command {
        logging::init(None, cli.verbose);
        return handle_config_command(command.clone(), config_path, &output);
    }

    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;
    logging::init(config.log_file.as_deref(), cli.verbose);
    debug!("Using data directory {:?}", config.data_dir);

    let mut store = ResumeStore::open_with_config(&config);

    match cli.command {
        Commands::Personal { command } => handle_personal_command(command, &mut store, &output),
        Commands::Experience { command } => {
            handle_experience_command(command, &mut store, &output)
        }
        Commands::Education { command } => handle_education_command(command, &mut store, &output),
        Commands::Project { command } => handle_project_command(command, &mut store, &output),
        Commands::Skills { command } => handle_skills_command(command, &mut store, &output),
        Commands::Template { command } => handle_template_command(command, &mut store, &output),
        Commands::Preview { template } => commands::resume::preview(&store, template, &output),
        Commands::Score => commands::resume::show_score(&store, &output),
        Commands::Export { command } => handle_export_command(command, &store, &config, &output),
        Commands::Import { file, yes } => {
            commands::resume::import(&mut store, &file, yes, &output)
        }
        Commands::Reset { yes } => commands::resume::reset(&mut store, yes, &output),
        Commands::Status => commands::status::show(&store, &config, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_personal_command(
    command: Option<PersonalCommands>,
    store: &mut ResumeStore,
    output: &Output,
) -> Result<()> {
    match command {
        Some(PersonalCommands::Show) | None => commands::personal::show(store, output),
        Some(PersonalCommands::Set(args)) => commands::personal::set(store, args, output),
    }
}

fn handle_experience_command(
    command: ExperienceCommands,
    store: &mut ResumeStore,
    output: &Output,
) -> Result<()> {
    match command {
        ExperienceCommands::Add(args) => commands::experience::add(store, args, output),
        ExperienceCommands::List => commands::experience::list(store, output),
        ExperienceCommands::Update(args) => commands::experience::update(store, args, output),
        ExperienceCommands::Remove { id, yes } => {
            commands::experience::remove(store, id, yes, output)
        }
    }
}

fn handle_education_command(
    command: EducationCommands,
    store: &mut ResumeStore,
    output: &Output,
) -> Result<()> {
    match command {
        EducationCommands::Add(args) => commands::education::add(store, args, output),
        EducationCommands::List => commands::education::list(store, output),
        EducationCommands::Update(args) => commands::education::update(store, args, output),
        EducationCommands::Remove { id, yes } => {
            commands::education::remove(store, id, yes, output)
        }
    }
}

fn handle_project_command(
    command: ProjectCommands,
    store: &mut ResumeStore,
    output: &Output,
) -> Result<()> {
    match command {
        ProjectCommands::Add(args) => commands::project::add(store, args, output),
        ProjectCommands::List => commands::project::list(store, output),
        ProjectCommands::Update(args) => commands::project::update(store, args, output),
        ProjectCommands::Remove { id, yes } => commands::project::remove(store, id, yes, output),
    }
}

fn handle_skills_command(
    command: Option<SkillsCommands>,
    store: &mut ResumeStore,
    output: &Output,
) -> Result<()> {
    match command {
        Some(SkillsCommands::Show) | None => commands::skills::show(store, output),
        Some(SkillsCommands::Set { technical, soft }) => {
            commands::skills::set(store, technical, soft, output)
        }
    }
}

fn handle_template_command(
    command: Option<TemplateCommands>,
    store: &mut ResumeStore,
    output: &Output,
) -> Result<()> {
    match command {
        Some(TemplateCommands::List) | None => commands::template::list(store, output),
        Some(TemplateCommands::Show) => commands::template::show(store, output),
        Some(TemplateCommands::Set { id }) => commands::template::set(store, id, output),
    }
}

fn handle_export_command(
    command: ExportCommands,
    store: &ResumeStore,
    config: &Config,
    output: &Output,
) -> Result<()> {
    match command {
        ExportCommands::Text { output: path } => {
            commands::export::text(store, config, path, output)
        }
        ExportCommands::Json { output: path } => {
            commands::export::json(store, config, path, output)
        }
        ExportCommands::Link => commands::export::link(store, config, output),
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}
