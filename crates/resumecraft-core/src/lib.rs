//! ResumeCraft Core Library
//!
//! This crate provides the core functionality for ResumeCraft, a local
//! resume builder: a typed resume document, the store that owns and mutates
//! it, persistence across sessions, six rendering templates, a completeness
//! score and export sinks.
//!
//! # Architecture
//!
//! - **Store**: sole owner of the document and selected template; persists
//!   and notifies subscribers after every change
//! - **Storage**: key-value media and the persistence adapter
//!
//! # Quick Start
//!
//! ```text
//! let mut store = ResumeStore::open()?;
//!
//! // Add an experience entry
//! let mut exp = ExperienceEntry::new("Acme", "Engineer");
//! exp.start_date = "2020-01".into();
//! store.add_experience(exp);
//!
//! // Render with the selected template
//! println!("{}", store.snapshot().render());
//! ```
//!
//! # Modules
//!
//! - `store`: document store (main entry point)
//! - `models`: document types and partial-update patches
//! - `snapshot`: immutable state copy, also the persisted layout
//! - `storage`: key-value media and persistence
//! - `template`: the six layouts
//! - `score`: completeness scoring
//! - `export`: export sinks
//! - `config`: application configuration

pub mod config;
pub mod export;
pub mod models;
pub mod score;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod template;

pub use config::Config;
pub use export::{
    read_resume_json, ExportArtifact, ExportError, ExportSink, JsonExport, ShareLink, TextExport,
};
pub use models::{
    new_entry_id, EducationEntry, EducationPatch, ExperienceEntry, ExperiencePatch, PersonalInfo,
    PersonalInfoPatch, ProjectEntry, ProjectPatch, ResumeDocument, Skills,
};
pub use score::{ResumeScore, ScoreGrade};
pub use snapshot::Snapshot;
pub use storage::{
    validate_key, FileStorage, KeyValueStorage, MemoryStorage, Persistence, StorageError,
};
pub use store::{ResumeStore, SaveFailure, SaveStatus, SubscriptionId};
pub use template::{Template, TemplateId, UnknownTemplate};
