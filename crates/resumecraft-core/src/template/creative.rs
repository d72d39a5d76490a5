//! Creative Designer layout
//!
//! Banner header, playful headings, numbered experience, and education last.

use super::{contact_fields, date_range, degree_line, join_present, Page, Template, TemplateId};
use crate::models::ResumeDocument;

const BANNER_WIDTH: usize = 60;

pub struct CreativeTemplate;

fn heading(page: &mut Page, title: &str) {
    page.blank();
    page.line(format!("~*~ {} ~*~", title));
    page.blank();
}

impl Template for CreativeTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn render(&self, doc: &ResumeDocument) -> String {
        let info = &doc.personal_info;
        let mut page = Page::new();

        let banner = "*".repeat(BANNER_WIDTH);
        page.line(banner.as_str());
        page.line_if(format!("  {}", doc.full_name()));
        page.line_if(format!("  {}", info.title));
        let contacts = contact_fields(info);
        if !contacts.is_empty() {
            page.line(format!("  {}", contacts.join("  ·  ")));
        }
        page.line(banner);

        if !info.summary.is_empty() {
            heading(&mut page, "Creative Vision");
            page.line(format!("\"{}\"", info.summary));
        }

        if !doc.experience.is_empty() {
            heading(&mut page, "Experience Journey");
            for (index, exp) in doc.experience.iter().enumerate() {
                page.line(format!("{}. {}", index + 1, exp.position));
                page.line_if(format!(
                    "   {}",
                    join_present(&[exp.company.as_str(), exp.location.as_str()], " @ ")
                ));
                page.line_if(format!(
                    "   {}",
                    date_range(&exp.start_date, &exp.end_date, exp.current)
                ));
                for bullet in &exp.description {
                    page.line(format!("   ✦ {}", bullet));
                }
                page.blank();
            }
        }

        if !doc.skills.is_empty() {
            heading(&mut page, "Creative Skills");
            if !doc.skills.technical.is_empty() {
                page.line("Technical Expertise");
                for skill in &doc.skills.technical {
                    page.line(format!("  ◆ {}", skill));
                }
            }
            if !doc.skills.soft.is_empty() {
                page.line("Creative Abilities");
                for skill in &doc.skills.soft {
                    page.line(format!("  ◆ {}", skill));
                }
            }
        }

        if !doc.projects.is_empty() {
            heading(&mut page, "Creative Portfolio");
            for project in &doc.projects {
                page.line_if(project.name.as_str());
                page.line_if(format!("  {}", project.description));
                if !project.technologies.is_empty() {
                    page.line(format!("  [{}]", project.technologies.join("] [")));
                }
                page.line_if(format!(
                    "  {}",
                    join_present(&[project.link.as_str(), project.github.as_str()], "  ")
                ));
                page.blank();
            }
        }

        if !doc.education.is_empty() {
            heading(&mut page, "Education");
            for edu in &doc.education {
                page.line_if(degree_line(&edu.degree, &edu.field));
                page.line_if(format!("  {}", edu.institution));
                page.line_if(format!(
                    "  {}",
                    date_range(&edu.start_date, &edu.end_date, false)
                ));
                if !edu.gpa.is_empty() {
                    page.line(format!("  GPA: {}", edu.gpa));
                }
                page.blank();
            }
        }

        page.finish()
    }
}
