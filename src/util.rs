//! Utility functions for path handling and slug generation

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants as C;

/// Anything that is not a word character (CJK included), whitespace or hyphen
static SLUG_STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SLUG_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").unwrap());
static FILENAME_UNSAFE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w-]").unwrap());
static HYPHEN_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Convert a title to a permalink slug.
///
/// Punctuation is dropped, whitespace and hyphen runs become a single `-`,
/// the result is lower-cased and cut to at most 50 characters.
pub fn permalink_slug(title: &str) -> String {
    let stripped = SLUG_STRIP_RE.replace_all(title, "");
    let slug = SLUG_SEPARATOR_RE
        .replace_all(&stripped, "-")
        .trim_matches('-')
        .to_lowercase();

    if slug.chars().count() > C::SLUG_MAX_CHARS {
        let cut: String = slug.chars().take(C::SLUG_MAX_CHARS).collect();
        cut.trim_end_matches('-').to_string()
    } else {
        slug
    }
}

/// Make a file stem safe for an output filename
pub fn sanitize_filename(stem: &str) -> String {
    let replaced = FILENAME_UNSAFE_RE.replace_all(stem, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&replaced, "-");
    let safe = collapsed.trim_matches('-');
    if safe.is_empty() {
        C::UNTITLED_NOTE_TITLE.to_string()
    } else {
        safe.to_string()
    }
}

/// First `max` characters of `s`
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest.trim_start_matches(['/', '\\']));
            }
        }
    }
    PathBuf::from(path)
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
