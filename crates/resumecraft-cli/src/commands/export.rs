//! Export command handlers

use std::path::PathBuf;

use anyhow::{Context, Result};

use resumecraft_core::{
    Config, ExportArtifact, ExportSink, JsonExport, ResumeStore, ShareLink, TextExport,
};

use crate::output::{Output, OutputFormat};

/// Render the selected template to a text file
pub fn text(
    store: &ResumeStore,
    config: &Config,
    path: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let path = path.unwrap_or_else(|| config.export_dir().join(TextExport::DEFAULT_FILE_NAME));
    run(&TextExport::new(path), store, output)
}

/// Write the document as JSON
pub fn json(
    store: &ResumeStore,
    config: &Config,
    path: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let path = path.unwrap_or_else(|| config.export_dir().join(JsonExport::DEFAULT_FILE_NAME));
    run(&JsonExport::new(path), store, output)
}

/// Generate a share link
pub fn link(store: &ResumeStore, config: &Config, output: &Output) -> Result<()> {
    run(&ShareLink::new(config.share_base_url.as_str()), store, output)
}

fn run(sink: &dyn ExportSink, store: &ResumeStore, output: &Output) -> Result<()> {
    let artifact = sink
        .export(&store.snapshot())
        .context("Export failed")?;

    match output.format {
        OutputFormat::Human => match &artifact {
            ExportArtifact::File(path) => println!("✓ Exported resume to {}", path.display()),
            ExportArtifact::Link(url) => {
                println!("Share link: {}", url);
                println!("(The resume itself is not uploaded.)");
            }
        },
        OutputFormat::Json => {
            let kind = match artifact {
                ExportArtifact::File(_) => "file",
                ExportArtifact::Link(_) => "link",
            };
            output.print_json(&serde_json::json!({
                "kind": kind,
                "target": artifact.describe()
            }))?;
        }
        OutputFormat::Quiet => println!("{}", artifact.describe()),
    }
    Ok(())
}
