//! Exporting a resume
//!
//! An [`ExportSink`] takes a [`Snapshot`] and produces something outside the
//! store: a file on disk or a link. Sinks never touch the store; callers log
//! failures and carry on.
//!
//! Built-in sinks:
//! - [`TextExport`]: the selected template rendered to a text file
//! - [`JsonExport`]: the document as JSON, re-importable with `load_resume`
//! - [`ShareLink`]: a placeholder link (nothing is uploaded)

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use crate::models::ResumeDocument;
use crate::snapshot::Snapshot;
use crate::storage::backend::atomic_write;
use crate::storage::StorageError;

/// Errors that can occur while exporting
#[derive(Error, Debug)]
pub enum ExportError {
    /// Could not write the output file
    #[error("Failed to write export to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: StorageError,
    },

    /// Could not serialize the document
    #[error("Failed to serialize resume: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Could not read an import file
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportArtifact {
    File(PathBuf),
    Link(String),
}

impl ExportArtifact {
    pub fn describe(&self) -> String {
        match self {
            ExportArtifact::File(path) => path.display().to_string(),
            ExportArtifact::Link(url) => url.clone(),
        }
    }
}

/// Destination for an exported resume
pub trait ExportSink {
    fn export(&self, snapshot: &Snapshot) -> Result<ExportArtifact, ExportError>;
}

fn write_file(path: &Path, content: &str) -> Result<ExportArtifact, ExportError> {
    atomic_write(path, content.as_bytes()).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Exported resume to {:?}", path);
    Ok(ExportArtifact::File(path.to_path_buf()))
}

/// Renders the selected template to a text file
pub struct TextExport {
    path: PathBuf,
}

impl TextExport {
    pub const DEFAULT_FILE_NAME: &'static str = "resume.txt";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExportSink for TextExport {
    fn export(&self, snapshot: &Snapshot) -> Result<ExportArtifact, ExportError> {
        write_file(&self.path, &snapshot.render())
    }
}

/// Writes the document as pretty-printed JSON
pub struct JsonExport {
    path: PathBuf,
}

impl JsonExport {
    pub const DEFAULT_FILE_NAME: &'static str = "resume.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExportSink for JsonExport {
    fn export(&self, snapshot: &Snapshot) -> Result<ExportArtifact, ExportError> {
        let json = serde_json::to_string_pretty(&snapshot.resume_data)?;
        write_file(&self.path, &json)
    }
}

/// Produces a shareable link
///
/// The link is `<base_url>/<unix millis>`; the resume itself is not uploaded.
pub struct ShareLink {
    base_url: String,
}

impl ShareLink {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn link_at(&self, millis: i64) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), millis)
    }
}

impl ExportSink for ShareLink {
    fn export(&self, _snapshot: &Snapshot) -> Result<ExportArtifact, ExportError> {
        let url = self.link_at(Utc::now().timestamp_millis());
        info!("Generated share link {}", url);
        Ok(ExportArtifact::Link(url))
    }
}

/// Read a document previously written by [`JsonExport`]
///
/// Missing fields take defaults, as with saved state.
pub fn read_resume_json(path: &Path) -> Result<ResumeDocument, ExportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SHARE_BASE_URL;
    use crate::template::tests::sample_document;
    use crate::template::TemplateId;
    use std::fs;
    use tempfile::TempDir;

    fn sample_snapshot() -> Snapshot {
        Snapshot::new(sample_document(), TemplateId::Minimal)
    }

    #[test]
    fn test_text_export_uses_selected_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join(TextExport::DEFAULT_FILE_NAME);
        let snapshot = sample_snapshot();

        let artifact = TextExport::new(&path).export(&snapshot).unwrap();

        assert_eq!(artifact, ExportArtifact::File(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), snapshot.render());
    }

    #[test]
    fn test_json_export_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(JsonExport::DEFAULT_FILE_NAME);
        let snapshot = sample_snapshot();

        JsonExport::new(&path).export(&snapshot).unwrap();

        let doc = read_resume_json(&path).unwrap();
        assert_eq!(doc, snapshot.resume_data);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_resume_json(Path::new("/nonexistent/resume.json")).unwrap_err();
        assert!(matches!(err, ExportError::Read { .. }));
    }

    #[test]
    fn test_read_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "[1, 2").unwrap();

        let err = read_resume_json(&path).unwrap_err();
        assert!(matches!(err, ExportError::Serialize(_)));
    }

    #[test]
    fn test_share_link() {
        let sink = ShareLink::new(DEFAULT_SHARE_BASE_URL);
        assert_eq!(
            sink.link_at(1700000000000),
            "https://resumecraft.pro/view/1700000000000"
        );

        let artifact = sink.export(&sample_snapshot()).unwrap();
        let ExportArtifact::Link(url) = artifact else {
            panic!("expected a link");
        };
        let millis = url.rsplit('/').next().unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
    }

    #[test]
    fn test_share_link_trims_trailing_slash() {
        let sink = ShareLink::new("https://cv.example.com/r/");
        assert_eq!(sink.link_at(42), "https://cv.example.com/r/42");
    }

    #[test]
    fn test_artifact_describe() {
        assert_eq!(
            ExportArtifact::Link("https://x/1".to_string()).describe(),
            "https://x/1"
        );
        assert_eq!(
            ExportArtifact::File(PathBuf::from("/tmp/resume.txt")).describe(),
            "/tmp/resume.txt"
        );
    }
}
