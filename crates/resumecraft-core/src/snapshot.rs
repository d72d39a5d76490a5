//! Point-in-time copy of store state
//!
//! A `Snapshot` is what subscribers and export sinks see, and it is also the
//! persisted layout:
//!
//! ```json
//! { "resumeData": { ... }, "selectedTemplate": "modern" }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::ResumeDocument;
use crate::template::TemplateId;

/// Immutable copy of the resume and the selected template
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub resume_data: ResumeDocument,
    pub selected_template: TemplateId,
}

impl Snapshot {
    pub fn new(resume_data: ResumeDocument, selected_template: TemplateId) -> Self {
        Self {
            resume_data,
            selected_template,
        }
    }

    /// Render with the selected template
    pub fn render(&self) -> String {
        self.selected_template.render(&self.resume_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let snapshot = Snapshot::default();
        assert!(snapshot.resume_data.is_empty());
        assert_eq!(snapshot.selected_template, TemplateId::Modern);
    }

    #[test]
    fn test_persisted_layout() {
        let snapshot = Snapshot::new(ResumeDocument::new(), TemplateId::Tech);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["selectedTemplate"], "tech");
        assert!(json["resumeData"]["personalInfo"].is_object());
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_render_uses_selected_template() {
        let mut doc = ResumeDocument::new();
        doc.personal_info.first_name = "Ada".to_string();

        let snapshot = Snapshot::new(doc, TemplateId::Tech);
        assert!(snapshot.render().starts_with("~/resume.dev"));
    }
}
