//! Minimal Elegant layout
//!
//! No rules or banners: short uppercase headings, bullet-separated contact
//! and skill lists, untitled summary.

use super::{date_range, degree_line, join_present, Page, Template, TemplateId};
use crate::models::ResumeDocument;

const SEP: &str = " • ";

pub struct MinimalTemplate;

fn heading(page: &mut Page, title: &str) {
    page.blank();
    page.line(title.to_uppercase());
    page.blank();
}

impl Template for MinimalTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Minimal
    }

    fn render(&self, doc: &ResumeDocument) -> String {
        let info = &doc.personal_info;
        let mut page = Page::new();

        page.line_if(doc.full_name());
        page.line_if(info.title.as_str());
        page.line_if(join_present(
            &[info.email.as_str(), info.phone.as_str(), info.location.as_str()],
            SEP,
        ));
        page.line_if(join_present(
            &[info.linkedin.as_str(), info.website.as_str()],
            SEP,
        ));

        if !info.summary.is_empty() {
            page.blank();
            page.line(info.summary.as_str());
        }

        if !doc.experience.is_empty() {
            heading(&mut page, "Experience");
            for exp in &doc.experience {
                let dates = date_range(&exp.start_date, &exp.end_date, exp.current);
                page.line_if(join_present(&[exp.position.as_str(), dates.as_str()], "  "));
                page.line_if(join_present(
                    &[exp.company.as_str(), exp.location.as_str()],
                    ", ",
                ));
                for bullet in &exp.description {
                    page.line(format!("  {}", bullet));
                }
                page.blank();
            }
        }

        if !doc.education.is_empty() {
            heading(&mut page, "Education");
            for edu in &doc.education {
                let degree = degree_line(&edu.degree, &edu.field);
                let dates = date_range(&edu.start_date, &edu.end_date, false);
                page.line_if(join_present(&[degree.as_str(), dates.as_str()], "  "));
                page.line_if(edu.institution.as_str());
                if !edu.gpa.is_empty() {
                    page.line(format!("GPA {}", edu.gpa));
                }
                page.blank();
            }
        }

        if !doc.skills.is_empty() {
            heading(&mut page, "Skills");
            page.line_if(doc.skills.technical.join(SEP));
            page.line_if(doc.skills.soft.join(SEP));
        }

        if !doc.projects.is_empty() {
            heading(&mut page, "Projects");
            for project in &doc.projects {
                page.line_if(project.name.as_str());
                page.line_if(project.description.as_str());
                page.line_if(project.technologies.join(SEP));
                page.blank();
            }
        }

        page.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::tests::sample_document;

    #[test]
    fn test_minimal_layout() {
        let out = MinimalTemplate.render(&sample_document());

        assert!(out.contains("ada@example.com • 555-0100 • London"));
        assert!(out.contains("linkedin.com/in/ada • ada.dev"));
        assert!(out.contains("EXPERIENCE"));
        assert!(out.contains("Mathematics • Punch cards"));
        assert!(!out.contains("SUMMARY"));
        // Links are not part of this layout
        assert!(!out.contains("github.com/ada/note-g"));
    }
}
