//! Note header parsing
//!
//! A note may start with a header block delimited by `---` lines. The block is
//! parsed into an ordered list of `key: value` entries (scalars, block lists
//! and inline `[a, b]` lists), and [`NoteMetadata`] reads the fields the
//! converter cares about through typed accessors.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants as C;

/// Split content into its header block and body.
///
/// The header must open on the very first line with a line consisting solely
/// of `---` and close on the next such line. Without both delimiters the whole
/// input is body.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let mut lines = content.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, content);
    };
    if first.trim_end() != C::HEADER_DELIMITER {
        return (None, content);
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim() == C::HEADER_DELIMITER {
            return (
                Some(&content[header_start..offset]),
                &content[offset + line.len()..],
            );
        }
        offset += line.len();
    }

    (None, content)
}

/// Syntactic form of a list value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListForm {
    /// `key:` followed by indented `- item` lines
    Block,
    /// `key: [a, b, c]`
    Inline,
}

/// A raw header value
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Scalar(String),
    List { items: Vec<String>, form: ListForm },
}

/// Parsed header block, entries kept in source order (repeated keys included)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderBlock {
    entries: Vec<(String, HeaderValue)>,
}

impl HeaderBlock {
    /// Parse the text between the header delimiters
    pub fn parse(header: &str) -> Self {
        let lines: Vec<&str> = header.lines().collect();
        let mut entries = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            i += 1;

            let Some((key, rest)) = split_key_line(line) else {
                continue;
            };
            let rest = rest.trim();

            if rest.is_empty() {
                let mut items = Vec::new();
                while i < lines.len() {
                    match block_item(lines[i]) {
                        Some(item) => items.push(item.to_string()),
                        None => break,
                    }
                    i += 1;
                }
                let value = if items.is_empty() {
                    HeaderValue::Scalar(String::new())
                } else {
                    HeaderValue::List { items, form: ListForm::Block }
                };
                entries.push((key.to_string(), value));
            } else if let Some(inner) = rest.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
                let items = inner.split(',').map(|s| s.trim().to_string()).collect();
                entries.push((key.to_string(), HeaderValue::List { items, form: ListForm::Inline }));
            } else {
                entries.push((key.to_string(), HeaderValue::Scalar(unquote(rest).to_string())));
            }
        }

        Self { entries }
    }

    /// All entries in source order
    pub fn entries(&self) -> &[(String, HeaderValue)] {
        &self.entries
    }

    /// First scalar value for `key`
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.entries.iter().find_map(|(k, v)| match v {
            HeaderValue::Scalar(s) if k == key => Some(s.as_str()),
            _ => None,
        })
    }

    /// First list value for `key` in the given form
    pub fn list_in_form(&self, key: &str, wanted: ListForm) -> Option<&[String]> {
        self.entries.iter().find_map(|(k, v)| match v {
            HeaderValue::List { items, form } if k == key && *form == wanted => Some(items.as_slice()),
            _ => None,
        })
    }

    /// List value for `key`; a block list wins over an inline one
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.list_in_form(key, ListForm::Block)
            .or_else(|| self.list_in_form(key, ListForm::Inline))
    }
}

/// Split `key: rest` at the first colon. Indented lines, list items and
/// comments are not keys.
fn split_key_line(line: &str) -> Option<(&str, &str)> {
    if line.starts_with(char::is_whitespace) || line.starts_with('-') || line.starts_with('#') {
        return None;
    }
    let (key, rest) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, rest))
}

/// Value of an indented `- item` line
fn block_item(line: &str) -> Option<&str> {
    if !line.starts_with(char::is_whitespace) {
        return None;
    }
    let item = line.trim_start().strip_prefix('-')?;
    if !item.starts_with(char::is_whitespace) {
        return None;
    }
    let item = item.trim();
    if item.is_empty() {
        None
    } else {
        Some(item)
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Time fields a note header may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeField {
    Ctime,
    Mtime,
    Created,
    Updated,
    Date,
}

impl TimeField {
    pub const ALL: [TimeField; 5] = [
        TimeField::Ctime,
        TimeField::Mtime,
        TimeField::Created,
        TimeField::Updated,
        TimeField::Date,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeField::Ctime => "ctime",
            TimeField::Mtime => "mtime",
            TimeField::Created => "created",
            TimeField::Updated => "updated",
            TimeField::Date => "date",
        }
    }
}

/// Metadata extracted from a note header
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NoteMetadata {
    times: BTreeMap<TimeField, String>,
    tags: Option<Vec<String>>,
    public: Option<Vec<String>>,
}

impl NoteMetadata {
    /// Parse a whole note, returning its metadata and body
    pub fn parse(content: &str) -> (Self, &str) {
        match split_frontmatter(content) {
            (Some(header), body) => (Self::from_header(&HeaderBlock::parse(header)), body),
            (None, body) => (Self::default(), body),
        }
    }

    /// Read recognized fields out of a parsed header
    pub fn from_header(header: &HeaderBlock) -> Self {
        let times = TimeField::ALL
            .iter()
            .filter_map(|&field| {
                header
                    .scalar(field.as_str())
                    .filter(|v| is_time_value(v))
                    .map(|v| (field, v.trim().to_string()))
            })
            .collect();

        let tags = header
            .list(C::TAGS_KEY)
            .map(|items| items.iter().filter_map(|t| clean_tag(t)).collect());

        let public = header.list_in_form(C::PUBLIC_KEY, ListForm::Block).map(|items| {
            items
                .iter()
                .filter(|p| p.chars().all(|c| c.is_alphanumeric() || c == '_'))
                .cloned()
                .collect()
        });

        Self { times, tags, public }
    }

    /// Raw value of a time field, if present and well-formed
    pub fn time(&self, field: TimeField) -> Option<&str> {
        self.times.get(&field).map(String::as_str)
    }

    /// Tags in source order; `None` when the header has no tag list
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Publication targets from the `public:` block list
    pub fn public(&self) -> Option<&[String]> {
        self.public.as_deref()
    }

    /// Whether the note lists `platform` as a publication target
    pub fn is_public_on(&self, platform: &str) -> bool {
        self.public
            .as_ref()
            .is_some_and(|targets| targets.iter().any(|t| t == platform))
    }
}

/// Time values may only hold digits, hyphens, slashes, spaces and colons.
/// Anything else (timezone suffixes, words) makes the field absent.
fn is_time_value(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '/' | ' ' | ':'))
}

/// Strip surrounding quotes and a leading `#`
fn clean_tag(raw: &str) -> Option<String> {
    let tag = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim_start_matches('#')
        .trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_frontmatter() {
        let content = "---\nctime: 2025-09-26\n---\n# Title\nbody\n";
        let (header, body) = split_frontmatter(content);
        assert_eq!(header, Some("ctime: 2025-09-26\n"));
        assert_eq!(body, "# Title\nbody\n");
    }

    #[test]
    fn test_split_frontmatter_without_header() {
        let content = "# Title\n---\nbody";
        assert_eq!(split_frontmatter(content), (None, content));
    }

    #[test]
    fn test_split_frontmatter_unclosed() {
        let content = "---\nctime: 2025-09-26\n# Title";
        assert_eq!(split_frontmatter(content), (None, content));
    }

    #[test]
    fn test_split_frontmatter_crlf() {
        let content = "---\r\ntags: [a]\r\n---\r\nbody";
        let (header, body) = split_frontmatter(content);
        assert_eq!(header, Some("tags: [a]\r\n"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_header_block_parse() {
        let block = HeaderBlock::parse("title: Hello\ntags:\n  - a\n  - b\npublic: [x]\nempty:\n");
        assert_eq!(block.scalar("title"), Some("Hello"));
        assert_eq!(block.list("tags"), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(block.list_in_form("public", ListForm::Inline).map(|l| l.len()), Some(1));
        assert_eq!(block.scalar("empty"), Some(""));
        assert_eq!(block.entries().len(), 4);
    }

    #[test]
    fn test_time_fields() {
        let (meta, body) = NoteMetadata::parse(
            "---\nctime: 2025-09-26 10:06\nmtime: 2025/09/01\nupdated: yesterday\n---\nbody",
        );
        assert_eq!(meta.time(TimeField::Ctime), Some("2025-09-26 10:06"));
        assert_eq!(meta.time(TimeField::Mtime), Some("2025/09/01"));
        assert_eq!(meta.time(TimeField::Updated), None);
        assert_eq!(meta.time(TimeField::Created), None);
        assert_eq!(body, "body");
    }

    #[test]
    fn test_time_field_with_timezone_is_absent() {
        let (meta, _) = NoteMetadata::parse("---\nctime: 2025-09-26T10:06:00+08:00\n---\n");
        assert_eq!(meta.time(TimeField::Ctime), None);
    }

    #[test]
    fn test_first_time_field_wins() {
        let (meta, _) = NoteMetadata::parse("---\nctime: 2024-01-01\nctime: 2025-01-01\n---\n");
        assert_eq!(meta.time(TimeField::Ctime), Some("2024-01-01"));
    }

    #[test]
    fn test_block_tags() {
        let (meta, _) = NoteMetadata::parse(
            "---\ntags:\n  - \"rust\"\n  - '#cli'\n  - \"\"\n---\n",
        );
        assert_eq!(meta.tags(), Some(&["rust".to_string(), "cli".to_string()][..]));
    }

    #[test]
    fn test_inline_tags() {
        let (meta, _) = NoteMetadata::parse("---\ntags: [\"a\", #b, , 'c']\n---\n");
        assert_eq!(
            meta.tags(),
            Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
        );
    }

    #[test]
    fn test_block_tags_win_over_inline() {
        let (meta, _) = NoteMetadata::parse("---\ntags: [inline]\ntags:\n  - block\n---\n");
        assert_eq!(meta.tags(), Some(&["block".to_string()][..]));
    }

    #[test]
    fn test_no_tags() {
        let (meta, _) = NoteMetadata::parse("---\nctime: 2025-01-01\n---\n");
        assert_eq!(meta.tags(), None);
    }

    #[test]
    fn test_public_targets() {
        let (meta, _) = NoteMetadata::parse("---\npublic:\n  - hexo\n  - wechat\n---\n");
        assert_eq!(meta.public().map(|p| p.len()), Some(2));
        assert!(meta.is_public_on("hexo"));
        assert!(!meta.is_public_on("zhihu"));
    }

    #[test]
    fn test_no_header_is_empty_metadata() {
        let (meta, body) = NoteMetadata::parse("plain text");
        assert_eq!(meta, NoteMetadata::default());
        assert_eq!(body, "plain text");
    }
}
