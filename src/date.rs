//! Publish date resolution
//!
//! A note's date comes from the first header time field that parses, in the
//! fixed order of [`DATE_PRIORITY`]. When none does, the file's modification
//! time is used, and failing that the current time. Resolution never fails.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::constants as C;
use crate::frontmatter::{NoteMetadata, TimeField};

/// Which source produced a resolved date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSource {
    Ctime,
    Created,
    Mtime,
    Updated,
    FileMtime,
    Default,
}

impl DateSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DateSource::Ctime => "ctime",
            DateSource::Created => "created",
            DateSource::Mtime => "mtime",
            DateSource::Updated => "updated",
            DateSource::FileMtime => "file_mtime",
            DateSource::Default => "default",
        }
    }

    /// Human readable origin, used in reports
    pub fn describe(self) -> &'static str {
        match self {
            DateSource::Ctime => "`ctime` header field",
            DateSource::Created => "`created` header field",
            DateSource::Mtime => "`mtime` header field",
            DateSource::Updated => "`updated` header field",
            DateSource::FileMtime => "file modification time",
            DateSource::Default => "conversion time (default)",
        }
    }
}

impl fmt::Display for DateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header fields consulted for the publish date, highest priority first
pub const DATE_PRIORITY: [(TimeField, DateSource); 4] = [
    (TimeField::Ctime, DateSource::Ctime),
    (TimeField::Created, DateSource::Created),
    (TimeField::Mtime, DateSource::Mtime),
    (TimeField::Updated, DateSource::Updated),
];

/// A publish date and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedDate {
    pub value: NaiveDateTime,
    pub source: DateSource,
}

/// Resolve the publish date of a note.
///
/// `file_mtime` is the note's modification time captured at conversion time,
/// `None` when it could not be read.
pub fn resolve_date(
    meta: &NoteMetadata,
    file_mtime: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> ResolvedDate {
    DATE_PRIORITY
        .iter()
        .find_map(|&(field, source)| {
            meta.time(field)
                .and_then(parse_time_string)
                .map(|value| ResolvedDate { value, source })
        })
        .or_else(|| {
            file_mtime.map(|value| ResolvedDate {
                value,
                source: DateSource::FileMtime,
            })
        })
        .unwrap_or(ResolvedDate {
            value: now,
            source: DateSource::Default,
        })
}

/// Parse a header time value against the accepted formats.
///
/// The whole (trimmed) string must match one format; date-only formats give
/// midnight.
pub fn parse_time_string(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    C::ACCEPTED_TIME_FORMATS.iter().find_map(|fmt| {
        if fmt.contains("%H") {
            NaiveDateTime::parse_from_str(value, fmt).ok()
        } else {
            NaiveDate::parse_from_str(value, fmt)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        }
    })
}

/// Local modification time of a file (symlinks followed)
pub fn file_mtime(path: &Path) -> Option<NaiveDateTime> {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
    let local: DateTime<Local> = modified.into();
    Some(local.naive_local())
}

/// Current local time, allowing override via EMX_HEXO_TIMESTAMP for testing
pub fn now() -> NaiveDateTime {
    if let Ok(ts) = std::env::var(C::ENV_TIMESTAMP) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&ts, C::OVERRIDE_TIME_FORMAT) {
            return naive;
        }
    }
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn meta(header: &str) -> NoteMetadata {
        NoteMetadata::parse(&format!("---\n{header}\n---\nbody")).0
    }

    #[test]
    fn test_parse_time_string_formats() {
        assert_eq!(parse_time_string("2025-09-26 10:06:30"), Some(dt("2025-09-26 10:06:30")));
        assert_eq!(parse_time_string("2025-09-26 10:06"), Some(dt("2025-09-26 10:06:00")));
        assert_eq!(parse_time_string("2025-09-26"), Some(dt("2025-09-26 00:00:00")));
        assert_eq!(parse_time_string("2025/09/26 10:06:30"), Some(dt("2025-09-26 10:06:30")));
        assert_eq!(parse_time_string("2025/09/26 10:06"), Some(dt("2025-09-26 10:06:00")));
        assert_eq!(parse_time_string(" 2025/09/26 "), Some(dt("2025-09-26 00:00:00")));
    }

    #[test]
    fn test_parse_time_string_rejects_partial() {
        assert_eq!(parse_time_string("2025-09-26 10"), None);
        assert_eq!(parse_time_string("2025-13-01"), None);
        assert_eq!(parse_time_string("2025-02-30"), None);
        assert_eq!(parse_time_string("2025"), None);
        assert_eq!(parse_time_string(""), None);
    }

    #[test]
    fn test_ctime_minutes() {
        let resolved = resolve_date(&meta("ctime: 2025-09-26 10:06"), None, dt("2026-01-01 00:00:00"));
        assert_eq!(resolved.value, dt("2025-09-26 10:06:00"));
        assert_eq!(resolved.source, DateSource::Ctime);
    }

    #[test]
    fn test_ctime_wins_over_everything() {
        let m = meta("updated: 2023-01-01\nmtime: 2024-01-01\ncreated: 2022-05-05\nctime: 2021-01-01");
        let resolved = resolve_date(&m, Some(dt("2020-01-01 00:00:00")), dt("2026-01-01 00:00:00"));
        assert_eq!(resolved.source, DateSource::Ctime);
        assert_eq!(resolved.value, dt("2021-01-01 00:00:00"));
    }

    #[test]
    fn test_mtime_with_slashes() {
        let resolved = resolve_date(&meta("mtime: 2025/09/01"), None, dt("2026-01-01 00:00:00"));
        assert_eq!(resolved.value, dt("2025-09-01 00:00:00"));
        assert_eq!(resolved.source, DateSource::Mtime);
    }

    #[test]
    fn test_unparseable_falls_through() {
        let m = meta("ctime: 2025-99-99\ncreated: 2025-02-30\nupdated: 2024-06-01 08:00");
        let resolved = resolve_date(&m, None, dt("2026-01-01 00:00:00"));
        assert_eq!(resolved.source, DateSource::Updated);
        assert_eq!(resolved.value, dt("2024-06-01 08:00:00"));
    }

    #[test]
    fn test_file_mtime_fallback() {
        let mtime = dt("2024-03-04 05:06:07");
        let resolved = resolve_date(&NoteMetadata::default(), Some(mtime), dt("2026-01-01 00:00:00"));
        assert_eq!(resolved, ResolvedDate { value: mtime, source: DateSource::FileMtime });
    }

    #[test]
    fn test_date_field_is_not_consulted() {
        let mtime = dt("2024-03-04 05:06:07");
        let resolved = resolve_date(&meta("date: 2020-01-01"), Some(mtime), dt("2026-01-01 00:00:00"));
        assert_eq!(resolved.source, DateSource::FileMtime);
    }

    #[test]
    fn test_default_to_now() {
        let now = dt("2026-10-19 12:00:00");
        let resolved = resolve_date(&NoteMetadata::default(), None, now);
        assert_eq!(resolved, ResolvedDate { value: now, source: DateSource::Default });
    }

    #[test]
    fn test_file_mtime_reads_filesystem() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("note.md");
        std::fs::write(&path, "x").unwrap();
        assert!(file_mtime(&path).is_some());
        assert!(file_mtime(&temp_dir.path().join("missing.md")).is_none());
    }

    #[test]
    fn test_date_source_names() {
        assert_eq!(DateSource::FileMtime.to_string(), "file_mtime");
        assert_eq!(
            serde_json::to_string(&DateSource::FileMtime).unwrap(),
            "\"file_mtime\""
        );
    }
}
