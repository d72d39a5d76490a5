//! Modern Professional layout
//!
//! Underlined uppercase headings; summary, experience, education, skills,
//! projects.

use super::{contact_fields, date_range, degree_line, join_present, Page, Template, TemplateId};
use crate::models::ResumeDocument;

const RULE_WIDTH: usize = 60;

pub struct ModernTemplate;

fn heading(page: &mut Page, title: &str) {
    page.blank();
    page.line(title);
    page.line("-".repeat(title.len()));
}

impl Template for ModernTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn render(&self, doc: &ResumeDocument) -> String {
        let info = &doc.personal_info;
        let mut page = Page::new();

        page.line_if(doc.full_name());
        page.line_if(info.title.as_str());
        page.line_if(contact_fields(info).join(" | "));
        page.line("=".repeat(RULE_WIDTH));

        if !info.summary.is_empty() {
            heading(&mut page, "PROFESSIONAL SUMMARY");
            page.line(info.summary.as_str());
        }

        if !doc.experience.is_empty() {
            heading(&mut page, "PROFESSIONAL EXPERIENCE");
            for exp in &doc.experience {
                page.line_if(exp.position.as_str());
                page.line_if(join_present(&[exp.company.as_str(), exp.location.as_str()], " | "));
                page.line_if(date_range(&exp.start_date, &exp.end_date, exp.current));
                for bullet in &exp.description {
                    page.line(format!("  • {}", bullet));
                }
                page.blank();
            }
        }

        if !doc.education.is_empty() {
            heading(&mut page, "EDUCATION");
            for edu in &doc.education {
                page.line_if(degree_line(&edu.degree, &edu.field));
                page.line_if(join_present(&[edu.institution.as_str(), edu.location.as_str()], " | "));
                page.line_if(date_range(&edu.start_date, &edu.end_date, false));
                if !edu.gpa.is_empty() {
                    page.line(format!("GPA: {}", edu.gpa));
                }
                page.blank();
            }
        }

        if !doc.skills.is_empty() {
            heading(&mut page, "SKILLS");
            if !doc.skills.technical.is_empty() {
                page.line(format!("Technical Skills: {}", doc.skills.technical.join(", ")));
            }
            if !doc.skills.soft.is_empty() {
                page.line(format!("Soft Skills: {}", doc.skills.soft.join(", ")));
            }
        }

        if !doc.projects.is_empty() {
            heading(&mut page, "PROJECTS");
            for project in &doc.projects {
                page.line_if(project.name.as_str());
                page.line_if(project.description.as_str());
                if !project.technologies.is_empty() {
                    page.line(format!("Technologies: {}", project.technologies.join(", ")));
                }
                if !project.link.is_empty() {
                    page.line(format!("Link: {}", project.link));
                }
                if !project.github.is_empty() {
                    page.line(format!("GitHub: {}", project.github));
                }
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
    fn test_modern_layout() {
        let out = ModernTemplate.render(&sample_document());

        assert!(out.starts_with("Ada Lovelace\nAnalyst\n"));
        assert!(out.contains("ada@example.com | 555-0100 | London | ada.dev | linkedin.com/in/ada"));
        assert!(out.contains("PROFESSIONAL SUMMARY\n--------------------\nFirst programmer."));
        assert!(out.contains("Analytical Engine Co | London"));
        assert!(out.contains("  • Wrote the first algorithm"));
        assert!(out.contains("Mathematics in Logic"));
        assert!(out.contains("GPA: 4.0"));
        assert!(out.contains("Technical Skills: Mathematics, Punch cards"));
        assert!(out.contains("GitHub: github.com/ada/note-g"));
        assert!(!out.contains("Link:"));
    }
}
