//! Classic Traditional layout
//!
//! Centered uppercase name and headings with full-width rules. The summary is
//! titled "Objective".

use super::{contact_fields, date_range, degree_line, Page, Template, TemplateId};
use crate::models::ResumeDocument;

const WIDTH: usize = 72;

pub struct ClassicTemplate;

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= WIDTH {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((WIDTH - len) / 2), text)
}

fn heading(page: &mut Page, title: &str) {
    page.blank();
    page.line(center(title));
    page.line("_".repeat(WIDTH));
    page.blank();
}

/// Left text and right-aligned text on one line
fn spread(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    if right.is_empty() {
        left.to_string()
    } else if used + 2 > WIDTH {
        format!("{}  {}", left, right)
    } else {
        format!("{}{}{}", left, " ".repeat(WIDTH - used), right)
    }
}

impl Template for ClassicTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Classic
    }

    fn render(&self, doc: &ResumeDocument) -> String {
        let info = &doc.personal_info;
        let mut page = Page::new();

        let name = doc.full_name().to_uppercase();
        if !name.is_empty() {
            page.line(center(&name));
        }
        if !info.title.is_empty() {
            page.line(center(&info.title));
        }
        let contacts = contact_fields(info);
        if !contacts.is_empty() {
            page.line(center(&contacts.join(" • ")));
        }

        if !info.summary.is_empty() {
            heading(&mut page, "OBJECTIVE");
            page.line(info.summary.as_str());
        }

        if !doc.experience.is_empty() {
            heading(&mut page, "EXPERIENCE");
            for exp in &doc.experience {
                page.line(spread(
                    &exp.position,
                    &date_range(&exp.start_date, &exp.end_date, exp.current),
                ));
                page.line_if(spread(&exp.company, &exp.location));
                for bullet in &exp.description {
                    page.line(format!("  - {}", bullet));
                }
                page.blank();
            }
        }

        if !doc.education.is_empty() {
            heading(&mut page, "EDUCATION");
            for edu in &doc.education {
                page.line(spread(
                    &degree_line(&edu.degree, &edu.field),
                    &date_range(&edu.start_date, &edu.end_date, false),
                ));
                page.line_if(spread(&edu.institution, &edu.location));
                if !edu.gpa.is_empty() {
                    page.line(format!("GPA: {}", edu.gpa));
                }
                page.blank();
            }
        }

        if !doc.skills.is_empty() {
            heading(&mut page, "SKILLS");
            if !doc.skills.technical.is_empty() {
                page.line(format!("Technical: {}", doc.skills.technical.join(", ")));
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
                page.line_if(project.link.as_str());
                page.line_if(project.github.as_str());
                page.blank();
            }
        }

        page.finish()
    }
}
