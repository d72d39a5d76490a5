//! Data models for ResumeCraft
//!
//! Defines the resume document and its sections: personal info, experience,
//! education, skills and projects. Field names serialize in camelCase so the
//! persisted layout stays compatible with existing saved resumes.
//!
//! Each entry type has a matching patch type. A patch carries only the fields
//! being changed; `apply` overwrites those and leaves the rest untouched.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a new entry ID
///
/// Random UUIDs cannot collide when entries are created in quick succession.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// The root resume document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    /// Work history, in display order
    pub experience: Vec<ExperienceEntry>,
    /// Education history, in display order
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    /// Projects, in display order
    pub projects: Vec<ProjectEntry>,
}

impl ResumeDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// True if nothing has been entered yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Full name as "First Last", trimmed when either half is missing
    pub fn full_name(&self) -> String {
        self.personal_info.full_name()
    }
}

/// Contact details and summary
///
/// Every field is optional free-form text; an empty string means unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    /// Professional title (e.g. "Senior Engineer")
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
}

impl PersonalInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A position held
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    /// Ignored by renderers while `current` is set
    pub end_date: String,
    /// Still in this position
    pub current: bool,
    /// Bullet points
    pub description: Vec<String>,
}

impl ExperienceEntry {
    /// Create an entry with a fresh ID
    pub fn new(company: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id: new_entry_id(),
            company: company.into(),
            position: position.into(),
            ..Self::default()
        }
    }

    /// Create an entry with a specific ID
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A degree or course of study
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    /// Field of study
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

impl EducationEntry {
    /// Create an entry with a fresh ID
    pub fn new(institution: impl Into<String>, degree: impl Into<String>) -> Self {
        Self {
            id: new_entry_id(),
            institution: institution.into(),
            degree: degree.into(),
            ..Self::default()
        }
    }

    /// Create an entry with a specific ID
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Skill lists, in display order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl Skills {
    pub fn new(technical: Vec<String>, soft: Vec<String>) -> Self {
        Self { technical, soft }
    }

    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }
}

/// A showcased project
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Live/demo URL
    pub link: String,
    /// Source repository URL
    pub github: String,
}

impl ProjectEntry {
    /// Create a project with a fresh ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_entry_id(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a project with a specific ID
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Overwrite `target` when the patch carries a value
fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Partial update for [`PersonalInfo`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfoPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, info: &mut PersonalInfo) {
        merge(&mut info.first_name, self.first_name);
        merge(&mut info.last_name, self.last_name);
        merge(&mut info.title, self.title);
        merge(&mut info.email, self.email);
        merge(&mut info.phone, self.phone);
        merge(&mut info.location, self.location);
        merge(&mut info.linkedin, self.linkedin);
        merge(&mut info.website, self.website);
        merge(&mut info.summary, self.summary);
    }
}

/// Partial update for [`ExperienceEntry`]
///
/// The ID is not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<Vec<String>>,
}

impl ExperiencePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, entry: &mut ExperienceEntry) {
        merge(&mut entry.company, self.company);
        merge(&mut entry.position, self.position);
        merge(&mut entry.location, self.location);
        merge(&mut entry.start_date, self.start_date);
        merge(&mut entry.end_date, self.end_date);
        merge(&mut entry.current, self.current);
        merge(&mut entry.description, self.description);
    }
}

/// Partial update for [`EducationEntry`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
}

impl EducationPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, entry: &mut EducationEntry) {
        merge(&mut entry.institution, self.institution);
        merge(&mut entry.degree, self.degree);
        merge(&mut entry.field, self.field);
        merge(&mut entry.location, self.location);
        merge(&mut entry.start_date, self.start_date);
        merge(&mut entry.end_date, self.end_date);
        merge(&mut entry.gpa, self.gpa);
    }
}

/// Partial update for [`ProjectEntry`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub link: Option<String>,
    pub github: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, entry: &mut ProjectEntry) {
        merge(&mut entry.name, self.name);
        merge(&mut entry.description, self.description);
        merge(&mut entry.technologies, self.technologies);
        merge(&mut entry.link, self.link);
        merge(&mut entry.github, self.github);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_empty() {
        let doc = ResumeDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.personal_info.first_name, "");
        assert!(doc.experience.is_empty());
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_new_entry_ids_are_unique() {
        let a = ExperienceEntry::new("Acme", "Engineer");
        let b = ExperienceEntry::new("Acme", "Engineer");
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_full_name() {
        let mut info = PersonalInfo::default();
        assert_eq!(info.full_name(), "");

        info.first_name = "Ada".to_string();
        assert_eq!(info.full_name(), "Ada");

        info.last_name = "Lovelace".to_string();
        assert_eq!(info.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_personal_info_patch_merges() {
        let mut info = PersonalInfo {
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..PersonalInfo::default()
        };

        let patch = PersonalInfoPatch {
            email: Some("ada@engine.org".to_string()),
            phone: Some(String::new()),
            ..PersonalInfoPatch::default()
        };
        patch.apply(&mut info);

        assert_eq!(info.first_name, "Ada");
        assert_eq!(info.email, "ada@engine.org");
        assert_eq!(info.phone, "");
    }

    #[test]
    fn test_experience_patch_keeps_id() {
        let mut entry = ExperienceEntry::with_id("exp-1");
        entry.company = "Acme".to_string();

        ExperiencePatch {
            current: Some(true),
            description: Some(vec!["Shipped things".to_string()]),
            ..ExperiencePatch::default()
        }
        .apply(&mut entry);

        assert_eq!(entry.id, "exp-1");
        assert_eq!(entry.company, "Acme");
        assert!(entry.current);
        assert_eq!(entry.description, vec!["Shipped things"]);
    }

    #[test]
    fn test_camel_case_serialization() {
        let mut doc = ResumeDocument::new();
        doc.personal_info.first_name = "Ada".to_string();
        let mut exp = ExperienceEntry::with_id("1");
        exp.start_date = "2020-01".to_string();
        doc.experience.push(exp);

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["personalInfo"]["firstName"], "Ada");
        assert_eq!(json["experience"][0]["startDate"], "2020-01");
        assert_eq!(json["skills"]["technical"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_and_unknown_keys_tolerated() {
        let json = r#"{
            "personalInfo": { "firstName": "Ada", "nickname": "countess" },
            "projects": [{ "id": "p1", "name": "Engine" }],
            "legacyField": true
        }"#;

        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.personal_info.first_name, "Ada");
        assert_eq!(doc.personal_info.last_name, "");
        assert_eq!(doc.projects[0].name, "Engine");
        assert!(doc.projects[0].technologies.is_empty());
        assert!(doc.education.is_empty());
    }

    #[test]
    fn test_patch_from_json() {
        let patch: ProjectPatch =
            serde_json::from_str(r#"{ "technologies": ["Rust"], "github": "gh/x" }"#).unwrap();
        assert!(patch.name.is_none());
        assert_eq!(patch.technologies, Some(vec!["Rust".to_string()]));
        assert!(!patch.is_empty());
        assert!(EducationPatch::default().is_empty());
    }
}
