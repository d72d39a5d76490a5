//! Resume templates
//!
//! A template turns a [`ResumeDocument`] into a rendered page. There are six
//! fixed layouts; [`TemplateId`] names them and dispatches to the matching
//! [`Template`] implementation.
//!
//! Rendering produces plain text. Every layout shows the same data, differing
//! only in section order, headings and decoration. Empty sections are left
//! out.

mod classic;
mod creative;
mod executive;
mod minimal;
mod modern;
mod tech;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{PersonalInfo, ResumeDocument};

pub use classic::ClassicTemplate;
pub use creative::CreativeTemplate;
pub use executive::ExecutiveTemplate;
pub use minimal::MinimalTemplate;
pub use modern::ModernTemplate;
pub use tech::TechTemplate;

/// A visual layout for a resume
pub trait Template {
    /// Which layout this is
    fn id(&self) -> TemplateId;

    /// Render the document
    fn render(&self, doc: &ResumeDocument) -> String;
}

/// Identifier of one of the built-in templates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    Executive,
    Tech,
}

/// Returned when parsing a name that is not a known template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown template '{0}'. Valid templates: modern, classic, minimal, creative, executive, tech")]
pub struct UnknownTemplate(pub String);

impl TemplateId {
    /// All templates, in gallery order
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Minimal,
        TemplateId::Creative,
        TemplateId::Executive,
        TemplateId::Tech,
    ];

    /// Identifier as stored and accepted on input
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
            TemplateId::Executive => "executive",
            TemplateId::Tech => "tech",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            TemplateId::Modern => "Modern Professional",
            TemplateId::Classic => "Classic Traditional",
            TemplateId::Minimal => "Minimal Elegant",
            TemplateId::Creative => "Creative Designer",
            TemplateId::Executive => "Executive Leadership",
            TemplateId::Tech => "Tech Developer",
        }
    }

    /// One-line description for the gallery
    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::Modern => "Clean design with subtle color accents and modern typography",
            TemplateId::Classic => "Timeless format perfect for conservative industries",
            TemplateId::Minimal => "Simple and elegant design focusing on content clarity",
            TemplateId::Creative => "Bold design for creative professionals and designers",
            TemplateId::Executive => "Sophisticated design for senior-level positions",
            TemplateId::Tech => "Optimized for software developers and tech professionals",
        }
    }

    /// Parse a template name, falling back to [`TemplateId::Modern`]
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// The layout implementation for this identifier
    pub fn template(&self) -> &'static dyn Template {
        match self {
            TemplateId::Modern => &ModernTemplate,
            TemplateId::Classic => &ClassicTemplate,
            TemplateId::Minimal => &MinimalTemplate,
            TemplateId::Creative => &CreativeTemplate,
            TemplateId::Executive => &ExecutiveTemplate,
            TemplateId::Tech => &TechTemplate,
        }
    }

    /// Render a document with this layout
    pub fn render(&self, doc: &ResumeDocument) -> String {
        self.template().render(doc)
    }
}

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line buffer used by the layouts
#[derive(Debug, Default)]
pub(crate) struct Page {
    lines: Vec<String>,
}

impl Page {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Add a line only if it has content
    pub(crate) fn line_if(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.trim().is_empty() {
            self.lines.push(text);
        }
    }

    /// Add a blank separator (never two in a row, never at the start)
    pub(crate) fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    pub(crate) fn finish(mut self) -> String {
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Format a `YYYY-MM` or `YYYY-MM-DD` date as `Mon YYYY`
///
/// Anything else is returned unchanged.
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d"));
    match parsed {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Format a start/end span; `current` replaces the end with "Present"
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let start = format_date(start);
    let end = if current {
        "Present".to_string()
    } else {
        format_date(end)
    };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start,
        (true, false) => end,
        (false, false) => format!("{} - {}", start, end),
    }
}

/// Contact fields that are set, in header order
pub(crate) fn contact_fields(info: &PersonalInfo) -> Vec<&str> {
    [
        &info.email,
        &info.phone,
        &info.location,
        &info.website,
        &info.linkedin,
    ]
    .into_iter()
    .map(String::as_str)
    .filter(|s| !s.is_empty())
    .collect()
}

/// "Degree in Field", either half optional
pub(crate) fn degree_line(degree: &str, field: &str) -> String {
    match (degree.is_empty(), field.is_empty()) {
        (_, true) => degree.to_string(),
        (true, false) => field.to_string(),
        (false, false) => format!("{} in {}", degree, field),
    }
}

/// Join non-empty parts with a separator
pub(crate) fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .copied()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}
