use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ReportKind {
    Tutorial,
    DesignDoc,
}

impl ReportKind {
    /// Download name the dashboard has always used.
    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::Tutorial => "tutorial_build_steps.txt",
            ReportKind::DesignDoc => "technical_design_document.txt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

/// A finished document. Content is fixed at construction; the generation
/// stamp is metadata and does not take part in `content_eq`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    kind: ReportKind,
    title: String,
    sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<DateTime<Utc>>,
}

impl Report {
    pub fn new(kind: ReportKind, title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            kind,
            title: title.into(),
            sections,
            generated_at: None,
        }
    }

    /// Same content, stamped with a generation time.
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }

    /// Document body without the generation stamp.
    pub fn body(&self) -> String {
        let mut out = String::with_capacity(1024);
        for section in &self.sections {
            out.push_str("## ");
            out.push_str(&section.heading);
            out.push('\n');
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    /// Full text as offered for download.
    pub fn to_text(&self) -> String {
        let mut out = format!("# {}\n\n", self.title);
        if let Some(at) = self.generated_at {
            out.push_str("Generated: ");
            out.push_str(&at.to_rfc3339_opts(SecondsFormat::Secs, true));
            out.push_str("\n\n");
        }
        out.push_str(&self.body());
        out
    }

    /// Equality ignoring the generation stamp.
    pub fn content_eq(&self, other: &Report) -> bool {
        self.kind == other.kind && self.title == other.title && self.sections == other.sections
    }
}
