//! Batch conversion report
//!
//! Aggregates the records of one run (date sources, categories, yearly and
//! monthly counts) and renders them as a markdown document.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use crate::constants as C;
use crate::date::{DateSource, ResolvedDate};
use crate::util;

/// Result of converting one note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRecord {
    /// Source filename
    pub original: String,
    /// Written post filename
    pub target: String,
    pub title: String,
    pub date: ResolvedDate,
    pub categories: Vec<String>,
}

/// Aggregated statistics over a batch
#[derive(Debug, Clone)]
pub struct Report {
    generated_at: NaiveDateTime,
    records: Vec<ConversionRecord>,
    date_sources: BTreeMap<DateSource, usize>,
    categories: Vec<(String, usize)>,
    years: BTreeMap<i32, usize>,
    recent_months: BTreeMap<String, usize>,
}

impl Report {
    /// Build a report; `None` when nothing was converted
    pub fn build(mut records: Vec<ConversionRecord>, now: NaiveDateTime) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        records.sort_by_key(|r| r.date.value);

        let mut date_sources = BTreeMap::new();
        let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut years = BTreeMap::new();
        let mut recent_months = BTreeMap::new();

        for record in &records {
            *date_sources.entry(record.date.source).or_insert(0) += 1;
            for category in &record.categories {
                *category_counts.entry(category.clone()).or_insert(0) += 1;
            }

            let date = record.date.value;
            *years.entry(date.year()).or_insert(0) += 1;
            if date.year() == now.year() {
                *recent_months
                    .entry(date.format("%Y-%m").to_string())
                    .or_insert(0) += 1;
            }
        }

        let mut categories: Vec<(String, usize)> = category_counts.into_iter().collect();
        categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Some(Self {
            generated_at: now,
            records,
            date_sources,
            categories,
            years,
            recent_months,
        })
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Records ordered by resolved date, oldest first
    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn date_source_count(&self, source: DateSource) -> usize {
        self.date_sources.get(&source).copied().unwrap_or(0)
    }

    /// Category histogram, most frequent first
    pub fn categories(&self) -> &[(String, usize)] {
        &self.categories
    }

    pub fn category_count(&self, label: &str) -> usize {
        self.categories
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, n)| *n)
    }

    pub fn years(&self) -> &BTreeMap<i32, usize> {
        &self.years
    }

    /// Monthly counts within the year the report was generated
    pub fn recent_months(&self) -> &BTreeMap<String, usize> {
        &self.recent_months
    }

    /// Year with the most posts; ties go to the later year
    pub fn most_active_year(&self) -> Option<(i32, usize)> {
        self.years
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)))
            .map(|(year, count)| (*year, *count))
    }

    fn share(&self, count: usize) -> f64 {
        count as f64 / self.total() as f64
    }

    /// Observations about date quality and content trends
    pub fn insights(&self) -> Vec<String> {
        let mut insights = Vec::new();

        if let Some((year, count)) = self.most_active_year() {
            insights.push(format!("Most active year: {year} ({count} posts)"));
        }

        let ctime = self.date_source_count(DateSource::Ctime);
        let ctime_share = self.share(ctime);
        if ctime_share > C::CTIME_SHARE_GOOD {
            insights.push("✅ Most posts carry an accurate creation time (ctime)".to_string());
        } else if ctime_share < C::CTIME_SHARE_GOOD {
            insights.push(format!(
                "⚠️  Only {ctime} of {} posts ({:.0}%) have a ctime field; add ctime to the remaining notes for accurate dates",
                self.total(),
                ctime_share * 100.0
            ));
        }

        insights
    }

    /// Suggestions about the category spread
    pub fn category_suggestions(&self) -> Vec<String> {
        let mut suggestions = Vec::new();

        if self.share(self.category_count(C::CATEGORY_TECHNICAL)) > C::TECHNICAL_SHARE_HIGH {
            suggestions.push(
                "📚 Technical content dominates, consider finer technical sub-categories".to_string(),
            );
        }
        if self.categories.len() < C::MIN_CATEGORY_VARIETY {
            suggestions.push(
                "🔄 Few categories in use, consider publishing more varied content".to_string(),
            );
        }

        suggestions
    }

    /// Render the report as markdown
    pub fn render(&self) -> String {
        let mut out = String::new();
        let first = &self.records[0];
        let last = &self.records[self.records.len() - 1];

        _ = writeln!(out, "# Article Conversion Report\n");
        _ = writeln!(
            out,
            "> Generated at: {}\n",
            self.generated_at.format(C::HEADER_TIME_FORMAT)
        );

        _ = writeln!(out, "## 📊 Summary\n");
        _ = writeln!(out, "- **Converted files**: {}", self.total());
        _ = writeln!(
            out,
            "- **Date span**: {} to {}\n",
            first.date.value.format(C::FILENAME_DATE_FORMAT),
            last.date.value.format(C::FILENAME_DATE_FORMAT)
        );

        _ = writeln!(out, "### 📅 Date Sources\n");
        for (source, count) in &self.date_sources {
            _ = writeln!(out, "- **{}**: {} posts", source.describe(), count);
        }

        _ = writeln!(out, "\n### 🏷️ Categories\n");
        for (category, count) in &self.categories {
            _ = writeln!(out, "- **{category}**: {count} posts");
        }

        _ = writeln!(out, "\n## 📝 Records\n");
        _ = writeln!(out, "| # | Title | Date | Date Source | Categories |");
        _ = writeln!(out, "|---|-------|------|-------------|------------|");
        for (i, record) in self.records.iter().enumerate() {
            let title = util::truncate_chars(&record.title, C::REPORT_TITLE_MAX_CHARS);
            let ellipsis = if title.len() < record.title.len() { "..." } else { "" };
            _ = writeln!(
                out,
                "| {} | {}{} | {} | {} | {} |",
                i + 1,
                title,
                ellipsis,
                record.date.value.format(C::FILENAME_DATE_FORMAT),
                record.date.source,
                record.categories.join(" / ")
            );
        }

        _ = writeln!(out, "\n## 🔄 Timeline\n");
        _ = writeln!(out, "### By Year\n");
        for (year, count) in &self.years {
            _ = writeln!(out, "- **{year}**: {count} posts");
        }

        _ = writeln!(out, "\n### By Month ({})\n", self.generated_at.year());
        for (month, count) in &self.recent_months {
            _ = writeln!(out, "- **{month}**: {count} posts");
        }

        _ = writeln!(out, "\n## 💡 Findings\n");
        _ = writeln!(out, "### Content Trends\n");
        for insight in self.insights() {
            _ = writeln!(out, "- {insight}");
        }

        _ = writeln!(out, "\n### Categories\n");
        for suggestion in self.category_suggestions() {
            _ = writeln!(out, "- {suggestion}");
        }

        _ = writeln!(out, "\n---\n\n*Generated by `emx-hexo convert`*");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn record(title: &str, date: &str, source: DateSource, categories: &[&str]) -> ConversionRecord {
        ConversionRecord {
            original: format!("{title}.md"),
            target: format!("{}-{title}.md", &date[..10]),
            title: title.to_string(),
            date: ResolvedDate { value: dt(date), source },
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn sample() -> Vec<ConversionRecord> {
        vec![
            record("c", "2026-03-01 00:00:00", DateSource::Ctime, &["Technical Articles", "Artificial Intelligence"]),
            record("a", "2024-05-01 00:00:00", DateSource::FileMtime, &["Other"]),
            record("b", "2025-01-01 00:00:00", DateSource::Ctime, &["Technical Articles"]),
            record("d", "2026-03-15 00:00:00", DateSource::Mtime, &["Project Practice", "Personal Project"]),
        ]
    }

    #[test]
    fn test_empty_batch_has_no_report() {
        assert!(Report::build(Vec::new(), dt("2026-10-19 00:00:00")).is_none());
    }

    #[test]
    fn test_aggregates() {
        let report = Report::build(sample(), dt("2026-10-19 00:00:00")).unwrap();
        assert_eq!(report.total(), 4);

        let titles: Vec<&str> = report.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c", "d"]);

        assert_eq!(report.date_source_count(DateSource::Ctime), 2);
        assert_eq!(report.date_source_count(DateSource::FileMtime), 1);
        assert_eq!(report.date_source_count(DateSource::Default), 0);

        assert_eq!(report.categories()[0], ("Technical Articles".to_string(), 2));
        assert_eq!(report.category_count("Other"), 1);

        assert_eq!(report.years().get(&2026), Some(&2));
        assert_eq!(report.recent_months().len(), 1);
        assert_eq!(report.recent_months().get("2026-03"), Some(&2));
        assert_eq!(report.most_active_year(), Some((2026, 2)));
    }

    #[test]
    fn test_most_active_year_prefers_count() {
        let records = vec![
            record("a", "2023-01-01 00:00:00", DateSource::Ctime, &["Other"]),
            record("b", "2023-02-01 00:00:00", DateSource::Ctime, &["Other"]),
            record("c", "2025-01-01 00:00:00", DateSource::Ctime, &["Other"]),
        ];
        let report = Report::build(records, dt("2026-10-19 00:00:00")).unwrap();
        assert_eq!(report.most_active_year(), Some((2023, 2)));
    }

    #[test]
    fn test_ctime_warning() {
        let report = Report::build(sample(), dt("2026-10-19 00:00:00")).unwrap();
        let insights = report.insights();
        assert!(insights.iter().any(|i| i.contains("Only 2 of 4 posts (50%)")));
    }

    #[test]
    fn test_ctime_praise() {
        let records = (1..=5)
            .map(|d| record("x", &format!("2025-01-0{d} 00:00:00"), DateSource::Ctime, &["Other"]))
            .collect();
        let report = Report::build(records, dt("2026-10-19 00:00:00")).unwrap();
        assert!(report.insights().iter().any(|i| i.starts_with("✅")));
    }

    #[test]
    fn test_ctime_share_at_threshold_is_neutral() {
        let mut records: Vec<ConversionRecord> = (1..=4)
            .map(|d| record("x", &format!("2025-01-0{d} 00:00:00"), DateSource::Ctime, &["Other"]))
            .collect();
        records.push(record("y", "2025-01-05 00:00:00", DateSource::FileMtime, &["Other"]));
        let report = Report::build(records, dt("2026-10-19 00:00:00")).unwrap();

        let insights = report.insights();
        assert_eq!(insights, ["Most active year: 2025 (5 posts)"]);
    }

    #[test]
    fn test_category_suggestions() {
        let records = vec![
            record("a", "2025-01-01 00:00:00", DateSource::Ctime, &["Technical Articles"]),
            record("b", "2025-01-02 00:00:00", DateSource::Ctime, &["Technical Articles"]),
        ];
        let report = Report::build(records, dt("2026-10-19 00:00:00")).unwrap();
        let suggestions = report.category_suggestions();
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_render() {
        let mut records = sample();
        records[0].title = "A very long title that exceeds thirty characters".to_string();
        let report = Report::build(records, dt("2026-10-19 00:00:00")).unwrap();
        let text = report.render();

        assert!(text.starts_with("# Article Conversion Report"));
        assert!(text.contains("- **Converted files**: 4"));
        assert!(text.contains("- **Date span**: 2024-05-01 to 2026-03-15"));
        assert!(text.contains("- **`ctime` header field**: 2 posts"));
        assert!(text.contains("- **file modification time**: 1 posts"));
        assert!(text.contains("| 1 | a | 2024-05-01 | file_mtime | Other |"));
        assert!(text.contains("A very long title that exceeds..."));
        assert!(text.contains("Technical Articles / Artificial Intelligence"));
        assert!(text.contains("### By Month (2026)"));
        assert!(text.contains("- **2026-03**: 2 posts"));
        assert!(text.contains("Most active year: 2026 (2 posts)"));
    }
}
