//! Markdown parsing utilities using pulldown-cmark

use std::path::Path;

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Represents a markdown heading
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownHeading {
    /// Heading level (1-6)
    pub level: u8,
    /// Heading text content, inline markup removed
    pub text: String,
}

/// Extract all headings from markdown content
pub fn extract_headings(content: &str) -> Vec<MarkdownHeading> {
    let mut headings = Vec::new();
    let mut in_heading = false;
    let mut current_level = 1;
    let mut current_text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = true;
                current_level = heading_level(level);
                current_text.clear();
            }
            Event::Text(text) | Event::Code(text) => {
                if in_heading {
                    current_text.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if in_heading {
                    headings.push(MarkdownHeading {
                        level: current_level,
                        text: current_text.trim().to_string(),
                    });
                }
                in_heading = false;
            }
            _ => {}
        }
    }

    headings
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Text of the first non-empty level 1 heading
pub fn first_heading(content: &str) -> Option<String> {
    extract_headings(content)
        .into_iter()
        .find(|h| h.level == 1 && !h.text.is_empty())
        .map(|h| h.text)
}

/// Post title: first H1 of the body, or the file stem
pub fn extract_title(note_path: &Path, body: &str) -> String {
    first_heading(body).unwrap_or_else(|| {
        note_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| crate::constants::UNTITLED_NOTE_TITLE.to_string())
    })
}
