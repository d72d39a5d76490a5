//! Tech Developer layout
//!
//! Terminal-style: each section is introduced by a shell prompt. Skills come
//! before experience.

use super::{date_range, degree_line, join_present, Page, Template, TemplateId};
use crate::models::ResumeDocument;

pub struct TechTemplate;

fn prompt(page: &mut Page, command: &str) {
    page.blank();
    page.line(format!("$ {}", command));
}

impl Template for TechTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Tech
    }

    fn render(&self, doc: &ResumeDocument) -> String {
        let info = &doc.personal_info;
        let mut page = Page::new();

        page.line("~/resume.dev");
        prompt(&mut page, "whoami");
        page.line_if(doc.full_name());
        if !info.title.is_empty() {
            page.line(format!("// {}", info.title));
        }
        for (label, value) in [
            ("email", &info.email),
            ("phone", &info.phone),
            ("location", &info.location),
            ("website", &info.website),
        ] {
            if !value.is_empty() {
                page.line(format!("  {:<9}{}", label, value));
            }
        }

        if !info.summary.is_empty() {
            prompt(&mut page, "cat about.txt");
            page.line(info.summary.as_str());
        }

        if !doc.skills.is_empty() {
            prompt(&mut page, "ls -la skills/");
            for skill in &doc.skills.technical {
                page.line(format!("  ▶ {}", skill));
            }
            if !doc.skills.soft.is_empty() {
                page.line(format!("  soft: {}", doc.skills.soft.join(", ")));
            }
        }

        if !doc.experience.is_empty() {
            prompt(&mut page, "git log --oneline experience");
            for (index, exp) in doc.experience.iter().enumerate() {
                page.line(format!(
                    "#{} {}",
                    index + 1,
                    join_present(&[exp.position.as_str(), exp.company.as_str()], " @ ")
                ));
                page.line_if(format!(
                    "   {}",
                    date_range(&exp.start_date, &exp.end_date, exp.current)
                ));
                for bullet in &exp.description {
                    page.line(format!("   → {}", bullet));
                }
            }
        }

        if !doc.projects.is_empty() {
            prompt(&mut page, "ls -la projects/");
            for project in &doc.projects {
                page.line_if(project.name.as_str());
                page.line_if(format!("   {}", project.description));
                if !project.technologies.is_empty() {
                    page.line(format!("   stack: {}", project.technologies.join(", ")));
                }
                if !project.github.is_empty() {
                    page.line(format!("   git: {}", project.github));
                }
                if !project.link.is_empty() {
                    page.line(format!("   url: {}", project.link));
                }
            }
        }

        if !doc.education.is_empty() {
            prompt(&mut page, "cat education.log");
            for edu in &doc.education {
                let dates = date_range(&edu.start_date, &edu.end_date, false);
                page.line_if(degree_line(&edu.degree, &edu.field));
                page.line_if(format!(
                    "   {}",
                    join_present(&[edu.institution.as_str(), dates.as_str()], " | ")
                ));
                if !edu.gpa.is_empty() {
                    page.line(format!("   gpa: {}", edu.gpa));
                }
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
    fn test_tech_layout() {
        let out = TechTemplate.render(&sample_document());

        assert!(out.starts_with("~/resume.dev\n\n$ whoami\nAda Lovelace\n// Analyst\n"));
        assert!(out.contains("  email    ada@example.com"));
        assert!(out.contains("  ▶ Punch cards"));
        assert!(out.contains("#1 Programmer @ Analytical Engine Co"));
        assert!(out.contains("   git: github.com/ada/note-g"));

        // Skills before experience
        let skills = out.find("ls -la skills/").unwrap();
        let experience = out.find("git log").unwrap();
        assert!(skills < experience);
    }
}
