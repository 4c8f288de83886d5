//! Composition export to downloadable document formats.
//!
//! HTML maps each brick to a fixed fragment by type. Every other format is
//! the raw brick content joined by a blank line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::brick::{Brick, BrickType};

/// Separator between bricks in the plain (non-HTML) export.
pub const PLAIN_SEPARATOR: &str = "\n\n";

/// Separator between fragments in the HTML export.
pub const HTML_SEPARATOR: &str = "\n";

/// Base name of every exported file.
pub const EXPORT_FILE_STEM: &str = "content";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Html,
    Markdown,
    Pdf,
    Text,
}

impl ExportFormat {
    /// Parse a requested format. Anything unrecognised exports as plain text.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Self::Html,
            "markdown" | "md" => Self::Markdown,
            "pdf" => Self::Pdf,
            _ => Self::Text,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
            Self::Pdf => "pdf",
            Self::Text => "text",
        }
    }

    /// Download file extension.
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Pdf | Self::Text => "txt",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            Self::Html => "text/html; charset=utf-8",
            Self::Markdown => "text/markdown; charset=utf-8",
            Self::Pdf | Self::Text => "text/plain; charset=utf-8",
        }
    }

    pub fn file_name(self) -> String {
        format!("{EXPORT_FILE_STEM}.{}", self.file_extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An export ready to be written out or offered as a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedFile {
    pub file_name: String,
    pub media_type: &'static str,
    pub content: String,
}

/// Serialize a document in the requested format.
pub fn export(document: &[Brick], format: ExportFormat) -> String {
    match format {
        ExportFormat::Html => document
            .iter()
            .map(html_fragment)
            .collect::<Vec<_>>()
            .join(HTML_SEPARATOR),
        // Markdown and PDF currently share the plain concatenation.
        ExportFormat::Markdown | ExportFormat::Pdf | ExportFormat::Text => document
            .iter()
            .map(|b| b.content.as_str())
            .collect::<Vec<_>>()
            .join(PLAIN_SEPARATOR),
    }
}

pub fn export_file(document: &[Brick], format: ExportFormat) -> ExportedFile {
    ExportedFile {
        file_name: format.file_name(),
        media_type: format.media_type(),
        content: export(document, format),
    }
}

fn html_fragment(brick: &Brick) -> String {
    let content = &brick.content;
    match brick.brick_type() {
        BrickType::Text => format!(
            "<div class=\"text-content\">{}</div>",
            content.replace('\n', "<br>")
        ),
        BrickType::Cta => format!("<div class=\"cta-content\"><button>{content}</button></div>"),
        BrickType::Quote => format!("<blockquote>{content}</blockquote>"),
        BrickType::Image | BrickType::Faq | BrickType::Video => format!("<div>{content}</div>"),
    }
}
