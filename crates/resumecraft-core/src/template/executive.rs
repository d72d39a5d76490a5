//! Executive Leadership layout
//!
//! Double-ruled header and headings framed around leadership: summary,
//! experience, core competencies, strategic initiatives, education.

use super::{contact_fields, date_range, degree_line, join_present, Page, Template, TemplateId};
use crate::models::ResumeDocument;

const RULE_WIDTH: usize = 72;

pub struct ExecutiveTemplate;

fn heading(page: &mut Page, title: &str) {
    page.blank();
    page.line(title);
    page.line("=".repeat(RULE_WIDTH));
}

impl Template for ExecutiveTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Executive
    }

    fn render(&self, doc: &ResumeDocument) -> String {
        let info = &doc.personal_info;
        let mut page = Page::new();

        page.line("=".repeat(RULE_WIDTH));
        page.line_if(doc.full_name().to_uppercase());
        page.line_if(info.title.as_str());
        page.line_if(contact_fields(info).join("   "));
        page.line("=".repeat(RULE_WIDTH));

        if !info.summary.is_empty() {
            heading(&mut page, "EXECUTIVE SUMMARY");
            page.line(format!("| {}", info.summary));
        }

        if !doc.experience.is_empty() {
            heading(&mut page, "LEADERSHIP EXPERIENCE");
            for exp in &doc.experience {
                let dates = date_range(&exp.start_date, &exp.end_date, exp.current);
                page.line(exp.position.as_str());
                page.line_if(join_present(
                    &[exp.company.as_str(), exp.location.as_str(), dates.as_str()],
                    " | ",
                ));
                for bullet in &exp.description {
                    page.line(format!("  > {}", bullet));
                }
                page.blank();
            }
        }

        if !doc.skills.is_empty() {
            heading(&mut page, "CORE COMPETENCIES");
            if !doc.skills.technical.is_empty() {
                page.line("Technical Leadership:");
                page.line(format!("  {}", doc.skills.technical.join(" | ")));
            }
            if !doc.skills.soft.is_empty() {
                page.line("Executive Skills:");
                page.line(format!("  {}", doc.skills.soft.join(" | ")));
            }
        }

        if !doc.projects.is_empty() {
            heading(&mut page, "STRATEGIC INITIATIVES");
            for project in &doc.projects {
                page.line_if(project.name.as_str());
                page.line_if(project.description.as_str());
                if !project.technologies.is_empty() {
                    page.line(format!("Technologies: {}", project.technologies.join(", ")));
                }
                page.blank();
            }
        }

        if !doc.education.is_empty() {
            heading(&mut page, "EDUCATION");
            for edu in &doc.education {
                let dates = date_range(&edu.start_date, &edu.end_date, false);
                page.line_if(degree_line(&edu.degree, &edu.field));
                page.line_if(join_present(&[edu.institution.as_str(), dates.as_str()], " | "));
                if !edu.gpa.is_empty() {
                    page.line(format!("GPA: {}", edu.gpa));
                }
                page.blank();
            }
        }

        page.finish()
    }
}
