//! Path based categorization
//!
//! Categories are derived from the directory names a note lives under. Rules
//! are evaluated in order and the first whose directory appears in the path
//! decides the labels.

use std::path::Path;

use crate::constants as C;

/// One top-level categorization rule
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Directory segment that selects this rule
    pub segment: &'static str,
    /// Labels always emitted by this rule
    pub base: &'static [&'static str],
    /// Sub-branches, first present segment wins
    pub branches: &'static [(&'static str, &'static [&'static str])],
    /// Labels appended when no branch matches
    pub fallback: &'static [&'static str],
}

impl CategoryRule {
    fn labels(&self, segments: &[&str]) -> Vec<String> {
        let extra = self
            .branches
            .iter()
            .find(|(segment, _)| segments.contains(segment))
            .map_or(self.fallback, |(_, labels)| *labels);

        self.base
            .iter()
            .chain(extra.iter())
            .map(|label| label.to_string())
            .collect()
    }
}

/// Rules of the vault taxonomy, highest priority first
pub const DEFAULT_RULES: &[CategoryRule] = &[
    CategoryRule {
        segment: C::DIR_COMPUTER,
        base: &[C::CATEGORY_TECHNICAL],
        branches: &[
            (C::DIR_AI, &[C::CATEGORY_AI]),
            (C::DIR_SYSTEM_DESIGN, &[C::CATEGORY_SYSTEMS]),
            (C::DIR_ALGORITHMS, &[C::CATEGORY_ALGORITHMS]),
            (C::DIR_ARCHITECTURE, &[C::CATEGORY_ARCHITECTURE]),
        ],
        fallback: &[],
    },
    CategoryRule {
        segment: C::DIR_AREA,
        base: &[],
        branches: &[
            (C::DIR_STARTUP, &[C::CATEGORY_BUSINESS, C::CATEGORY_STARTUP]),
            (C::DIR_PROFESSIONAL, &[C::CATEGORY_CAREER, C::CATEGORY_GROWTH]),
        ],
        fallback: &[C::CATEGORY_KNOWLEDGE],
    },
    CategoryRule {
        segment: C::DIR_PROJECT,
        base: &[C::CATEGORY_PROJECT],
        branches: &[(C::DIR_WORK_PROJECT, &[C::CATEGORY_WORK_PROJECT])],
        fallback: &[C::CATEGORY_PERSONAL_PROJECT],
    },
];

/// Maps note paths to category labels
#[derive(Debug, Clone, Copy)]
pub struct Categorizer {
    rules: &'static [CategoryRule],
    default_label: &'static str,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(DEFAULT_RULES, C::CATEGORY_OTHER)
    }
}

impl Categorizer {
    pub fn new(rules: &'static [CategoryRule], default_label: &'static str) -> Self {
        Self { rules, default_label }
    }

    /// Categories for a note path. Never empty.
    ///
    /// Segments are compared exactly, so `computers` or `ai` do not match.
    pub fn categorize(&self, path: &Path) -> Vec<String> {
        let segments: Vec<&str> = path
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();

        self.rules
            .iter()
            .find(|rule| segments.contains(&rule.segment))
            .map(|rule| rule.labels(&segments))
            .filter(|labels| !labels.is_empty())
            .unwrap_or_else(|| vec![self.default_label.to_string()])
    }
}
