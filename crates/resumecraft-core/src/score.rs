//! Resume completeness score
//!
//! Scores a document out of 100 and lists what is missing. Missing essentials
//! (name, contact, summary, experience) are reported as issues; missing
//! extras as suggestions.
//!
//! | Section | Points |
//! |---|---|
//! | Full name, email, phone, title | 5 each |
//! | Summary (>50 chars 15, >20 chars 10, else 5) | 15 |
//! | Any experience / any with bullet points | 15 + 15 |
//! | Any education | 15 |
//! | Technical / soft skills | 5 + 5 |
//! | Any project | 10 |

use serde::Serialize;

use crate::models::ResumeDocument;

/// Highest possible score
pub const MAX_SCORE: u32 = 100;

/// Score with the reasons points were lost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeScore {
    pub score: u32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Coarse rating of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreGrade {
    Strong,
    Fair,
    Weak,
}

impl ScoreGrade {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::Strong => "strong",
            ScoreGrade::Fair => "fair",
            ScoreGrade::Weak => "weak",
        }
    }
}

impl ResumeScore {
    /// 80+ strong, 60+ fair, below weak
    pub fn grade(&self) -> ScoreGrade {
        match self.score {
            80.. => ScoreGrade::Strong,
            60..=79 => ScoreGrade::Fair,
            _ => ScoreGrade::Weak,
        }
    }
}

/// Score a document
pub fn score(doc: &ResumeDocument) -> ResumeScore {
    let info = &doc.personal_info;
    let mut score = 0;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    let mut check = |ok: bool, points: u32, missing: &str, is_issue: bool| {
        if ok {
            score += points;
        } else if is_issue {
            issues.push(missing.to_string());
        } else {
            suggestions.push(missing.to_string());
        }
    };

    // Personal info
    check(
        !info.first_name.is_empty() && !info.last_name.is_empty(),
        5,
        "Add your full name",
        true,
    );
    check(!info.email.is_empty(), 5, "Add your email address", true);
    check(!info.phone.is_empty(), 5, "Add your phone number", true);
    check(!info.title.is_empty(), 5, "Add a professional title", false);

    // Summary
    let summary_len = info.summary.chars().count();
    let summary_points = match summary_len {
        0 => 0,
        1..=20 => 5,
        21..=50 => 10,
        _ => 15,
    };
    check(
        summary_len > 0,
        summary_points,
        "Add a professional summary",
        true,
    );

    // Experience
    let has_experience = !doc.experience.is_empty();
    check(has_experience, 15, "Add work experience", true);
    if has_experience {
        check(
            doc.experience.iter().any(|e| !e.description.is_empty()),
            15,
            "Add descriptions to your work experience",
            false,
        );
    }

    check(!doc.education.is_empty(), 15, "Add your education", false);

    check(
        !doc.skills.technical.is_empty(),
        5,
        "Add technical skills",
        false,
    );
    check(!doc.skills.soft.is_empty(), 5, "Add soft skills", false);

    check(
        !doc.projects.is_empty(),
        10,
        "Add projects to showcase your work",
        false,
    );

    ResumeScore {
        score,
        issues,
        suggestions,
    }
}
