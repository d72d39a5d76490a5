//! Resume document store
//!
//! The `ResumeStore` is the only owner of the resume document and the
//! selected template. Every change goes through one of its methods, and each
//! successful change:
//!
//! 1. persists the full state (best-effort; failures are logged and reflected
//!    in [`ResumeStore::save_status`], never returned)
//! 2. notifies every subscriber with the new [`Snapshot`], in subscription
//!    order, before the method returns
//!
//! Operations that match nothing (unknown ID, unknown template) leave the
//! state untouched and neither persist nor notify. They report this by
//! returning `false`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = ResumeStore::open()?;
//!
//! store.update_personal_info(PersonalInfoPatch {
//!     first_name: Some("Ada".into()),
//!     ..Default::default()
//! });
//! store.add_experience(ExperienceEntry::new("Acme", "Engineer"));
//! store.set_selected_template("tech");
//!
//! println!("{}", store.snapshot().render());
//! ```

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::{
    EducationEntry, EducationPatch, ExperienceEntry, ExperiencePatch, PersonalInfoPatch,
    ProjectEntry, ProjectPatch, ResumeDocument, Skills,
};
use crate::snapshot::Snapshot;
use crate::storage::{FileStorage, KeyValueStorage, Persistence, StorageError, StorageResult};
use crate::template::TemplateId;

/// Callback invoked after every change
pub type Subscriber = Box<dyn FnMut(&Snapshot)>;

/// Handle returned by [`ResumeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Outcome of the most recent persistence write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing written yet this session
    Idle,
    /// Last write succeeded
    Saved,
    /// Last write failed; in-memory state is ahead of storage
    Error,
}

/// Why the last persistence write failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFailure {
    pub message: String,
    /// What the user can do about it
    pub hint: Option<&'static str>,
}

impl From<&StorageError> for SaveFailure {
    fn from(err: &StorageError) -> Self {
        Self {
            message: err.to_string(),
            hint: err.hint(),
        }
    }
}

/// Sole owner and mutator of resume state
pub struct ResumeStore {
    resume: ResumeDocument,
    selected_template: TemplateId,
    persistence: Persistence<Box<dyn KeyValueStorage>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    save_status: SaveStatus,
    last_save_error: Option<SaveFailure>,
}

impl ResumeStore {
    /// Open the store using the default configuration
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Ok(Self::open_with_config(&config))
    }

    /// Open the store over the file storage described by `config`
    ///
    /// Saved state is restored if present and readable; otherwise the store
    /// starts empty.
    pub fn open_with_config(config: &Config) -> Self {
        let storage = FileStorage::new(config.data_dir.clone());
        Self::with_storage(Box::new(storage), config.storage_key.clone())
    }

    /// Open the store over any medium, restoring state saved under `key`
    pub fn with_storage(storage: Box<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let persistence = Persistence::new(storage, key);
        let state = persistence.load_or_default();

        Self {
            resume: state.resume_data,
            selected_template: state.selected_template,
            persistence,
            subscribers: Vec::new(),
            next_subscription: 0,
            save_status: SaveStatus::Idle,
            last_save_error: None,
        }
    }

    // ==================== Reads ====================

    /// Current document
    pub fn resume(&self) -> &ResumeDocument {
        &self.resume
    }

    /// Currently selected template
    pub fn selected_template(&self) -> TemplateId {
        self.selected_template
    }

    /// Immutable copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.resume.clone(), self.selected_template)
    }

    /// Outcome of the last persistence write
    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    /// Why the last write failed; cleared by the next successful write
    pub fn last_save_error(&self) -> Option<&SaveFailure> {
        self.last_save_error.as_ref()
    }

    /// Storage key state is saved under
    pub fn storage_key(&self) -> &str {
        self.persistence.key()
    }

    pub fn find_experience(&self, id: &str) -> Option<&ExperienceEntry> {
        self.resume.experience.iter().find(|e| e.id == id)
    }

    pub fn find_education(&self, id: &str) -> Option<&EducationEntry> {
        self.resume.education.iter().find(|e| e.id == id)
    }

    pub fn find_project(&self, id: &str) -> Option<&ProjectEntry> {
        self.resume.projects.iter().find(|p| p.id == id)
    }

    // ==================== Subscriptions ====================

    /// Register a callback invoked with the new snapshot after every change
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    // ==================== Personal Info ====================

    /// Merge the given fields into personal info
    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        patch.apply(&mut self.resume.personal_info);
        self.commit("update_personal_info");
    }

    // ==================== Experience ====================

    /// Append an experience entry as given
    pub fn add_experience(&mut self, entry: ExperienceEntry) {
        debug!(id = %entry.id, "Adding experience");
        self.resume.experience.push(entry);
        self.commit("add_experience");
    }

    /// Merge fields into the first entry with `id`
    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) -> bool {
        let Some(entry) = self.resume.experience.iter_mut().find(|e| e.id == id) else {
            debug!(id, "No experience entry to update");
            return false;
        };
        patch.apply(entry);
        self.commit("update_experience");
        true
    }

    /// Remove every entry with `id`
    pub fn remove_experience(&mut self, id: &str) -> bool {
        if !remove_matching(&mut self.resume.experience, |e| e.id == id) {
            debug!(id, "No experience entry to remove");
            return false;
        }
        self.commit("remove_experience");
        true
    }

    // ==================== Education ====================

    /// Append an education entry as given
    pub fn add_education(&mut self, entry: EducationEntry) {
        debug!(id = %entry.id, "Adding education");
        self.resume.education.push(entry);
        self.commit("add_education");
    }

    /// Merge fields into the first entry with `id`
    pub fn update_education(&mut self, id: &str, patch: EducationPatch) -> bool {
        let Some(entry) = self.resume.education.iter_mut().find(|e| e.id == id) else {
            debug!(id, "No education entry to update");
            return false;
        };
        patch.apply(entry);
        self.commit("update_education");
        true
    }

    /// Remove every entry with `id`
    pub fn remove_education(&mut self, id: &str) -> bool {
        if !remove_matching(&mut self.resume.education, |e| e.id == id) {
            debug!(id, "No education entry to remove");
            return false;
        }
        self.commit("remove_education");
        true
    }

    // ==================== Skills ====================

    /// Replace both skill lists
    pub fn update_skills(&mut self, skills: Skills) {
        self.resume.skills = skills;
        self.commit("update_skills");
    }

    // ==================== Projects ====================

    /// Append a project as given
    pub fn add_project(&mut self, entry: ProjectEntry) {
        debug!(id = %entry.id, "Adding project");
        self.resume.projects.push(entry);
        self.commit("add_project");
    }

    /// Merge fields into the first project with `id`
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> bool {
        let Some(entry) = self.resume.projects.iter_mut().find(|p| p.id == id) else {
            debug!(id, "No project to update");
            return false;
        };
        patch.apply(entry);
        self.commit("update_project");
        true
    }

    /// Remove every project with `id`
    pub fn remove_project(&mut self, id: &str) -> bool {
        if !remove_matching(&mut self.resume.projects, |p| p.id == id) {
            debug!(id, "No project to remove");
            return false;
        }
        self.commit("remove_project");
        true
    }

    // ==================== Template ====================

    /// Select a template by name
    ///
    /// Unknown names are ignored and return false.
    pub fn set_selected_template(&mut self, name: &str) -> bool {
        match name.parse::<TemplateId>() {
            Ok(id) => {
                self.selected_template = id;
                self.commit("set_selected_template");
                true
            }
            Err(e) => {
                debug!("Ignoring template change: {}", e);
                false
            }
        }
    }

    // ==================== Whole Document ====================

    /// Replace the whole document without validation
    pub fn load_resume(&mut self, resume: ResumeDocument) {
        self.resume = resume;
        self.commit("load_resume");
    }

    /// Clear everything back to an empty document and the default template
    pub fn reset(&mut self) {
        self.resume = ResumeDocument::default();
        self.selected_template = TemplateId::default();
        self.commit("reset");
    }

    /// Write the current state now
    ///
    /// Every change is already saved automatically; this is for callers that
    /// need to know whether the write succeeded.
    pub fn save_resume(&mut self) -> StorageResult<()> {
        let result = self.persistence.save(&self.snapshot());
        self.record_save(&result);
        result
    }

    fn record_save(&mut self, result: &StorageResult<()>) {
        match result {
            Ok(()) => {
                self.save_status = SaveStatus::Saved;
                self.last_save_error = None;
            }
            Err(e) => {
                self.save_status = SaveStatus::Error;
                self.last_save_error = Some(SaveFailure::from(e));
            }
        }
    }

    /// Persist and broadcast after a successful change
    fn commit(&mut self, operation: &str) {
        let snapshot = self.snapshot();

        let result = self.persistence.save(&snapshot);
        if let Err(e) = &result {
            warn!(operation, "Failed to save resume: {}", e);
        }
        self.record_save(&result);

        debug!(
            operation,
            subscribers = self.subscribers.len(),
            "Resume changed"
        );
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&snapshot);
        }
    }
}

/// Drop every element matching `pred`; true if anything was removed
fn remove_matching<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !pred(item));
    items.len() != before
}
