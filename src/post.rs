//! Hexo post header synthesis

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use crate::config::OutputStyle;
use crate::constants as C;
use crate::date::{DateSource, ResolvedDate};
use crate::util;

/// Permalink for a post: `/YYYY/MM/DD/slug/`
pub fn permalink(title: &str, date: NaiveDateTime) -> String {
    format!(
        "/{}/{:02}/{:02}/{}/",
        date.year(),
        date.month(),
        date.day(),
        util::permalink_slug(title)
    )
}

/// Output filename for a note with the given stem
pub fn output_filename(stem: &str, date: NaiveDateTime, style: OutputStyle) -> String {
    let safe = util::sanitize_filename(stem);
    match style {
        OutputStyle::Enhanced => format!(
            "{}-{}.{}",
            date.format(C::FILENAME_DATE_FORMAT),
            safe,
            C::MARKDOWN_EXTENSION
        ),
        OutputStyle::Basic => format!("{}.{}", safe, C::MARKDOWN_EXTENSION),
    }
}

/// Header block written at the top of every post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostHeader {
    pub title: String,
    pub date: String,
    pub updated: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub permalink: String,
    pub author: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_source: Option<DateSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,
}

/// Inputs for [`PostHeader::new`]
#[derive(Debug, Clone)]
pub struct HeaderInput<'a> {
    pub title: &'a str,
    pub date: ResolvedDate,
    pub now: NaiveDateTime,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub author: &'a str,
    pub original_path: &'a str,
    pub style: OutputStyle,
}

impl PostHeader {
    pub fn new(input: HeaderInput<'_>) -> Self {
        let enhanced = input.style == OutputStyle::Enhanced;
        Self {
            title: input.title.to_string(),
            date: input.date.value.format(C::HEADER_TIME_FORMAT).to_string(),
            updated: input.now.format(C::HEADER_TIME_FORMAT).to_string(),
            categories: input.categories,
            tags: input.tags,
            permalink: permalink(input.title, input.date.value),
            author: input.author.to_string(),
            description: format!(
                "{}...",
                util::truncate_chars(input.title, C::DESCRIPTION_MAX_CHARS)
            ),
            date_source: enhanced.then_some(input.date.source),
            original_path: enhanced.then(|| input.original_path.to_string()),
        }
    }

    /// Render the header followed by the post body
    pub fn render(&self, body: &str) -> Result<String, serde_yaml::Error> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!(
            "{delim}\n{yaml}{delim}\n\n{body}",
            delim = C::HEADER_DELIMITER
        ))
    }
}
