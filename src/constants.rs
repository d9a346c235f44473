//! Constants for emx-hexo
//!
//! Default paths, format strings, category labels and other hardcoded values
//! shared across the converter.

// === Default Locations ===

/// Directory holding the notes to publish (usually symlinks into the vault)
pub const DEFAULT_SOURCE_DIR: &str = "../public";

/// Hexo posts directory
pub const DEFAULT_OUTPUT_DIR: &str = "source/_posts";

/// Vault root; symlinked notes must resolve inside it
pub const DEFAULT_BASE_DIR: &str = "../..";

/// Where the conversion report is written
pub const DEFAULT_REPORT_PATH: &str = "../conversion-report.md";

// === Environment Variables ===

pub const ENV_SOURCE_DIR: &str = "EMX_HEXO_SOURCE";
pub const ENV_OUTPUT_DIR: &str = "EMX_HEXO_OUTPUT";
pub const ENV_BASE_DIR: &str = "EMX_HEXO_BASE";

/// Overrides the current time ("YYYY-MM-DD HH:MM"), used by tests
pub const ENV_TIMESTAMP: &str = "EMX_HEXO_TIMESTAMP";

// === File Names ===

/// Default file extension for notes
pub const MARKDOWN_EXTENSION: &str = "md";

/// Files that are never published
pub const IGNORED_FILENAMES: &[&str] = &["README.md"];

/// Stem used when a filename sanitizes to nothing
pub const UNTITLED_NOTE_TITLE: &str = "untitled";

// === Header Block ===

/// Line delimiting a header block
pub const HEADER_DELIMITER: &str = "---";

pub const TAGS_KEY: &str = "tags";
pub const PUBLIC_KEY: &str = "public";

// === Date and Time Format Strings ===

/// Accepted metadata time formats, tried in order
pub const ACCEPTED_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d",
];

/// Format of `date` and `updated` in generated headers
pub const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output filename date prefix
pub const FILENAME_DATE_FORMAT: &str = "%Y-%m-%d";

/// Console display format
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format accepted by the timestamp override
pub const OVERRIDE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// === Post Header ===

pub const DEFAULT_AUTHOR: &str = "陈浩";
pub const DEFAULT_TAG: &str = "Tech Sharing";

/// Maximum permalink slug length in characters
pub const SLUG_MAX_CHARS: usize = 50;

/// Title characters kept in the description
pub const DESCRIPTION_MAX_CHARS: usize = 100;

// === Category Taxonomy ===

pub const CATEGORY_TECHNICAL: &str = "Technical Articles";
pub const CATEGORY_AI: &str = "Artificial Intelligence";
pub const CATEGORY_SYSTEMS: &str = "Systems Architecture";
pub const CATEGORY_ALGORITHMS: &str = "Algorithms & Data Structures";
pub const CATEGORY_ARCHITECTURE: &str = "Architecture Design";
pub const CATEGORY_BUSINESS: &str = "Business Thinking";
pub const CATEGORY_STARTUP: &str = "Startup Analysis";
pub const CATEGORY_CAREER: &str = "Career Development";
pub const CATEGORY_GROWTH: &str = "Professional Growth";
pub const CATEGORY_KNOWLEDGE: &str = "Knowledge Management";
pub const CATEGORY_PROJECT: &str = "Project Practice";
pub const CATEGORY_WORK_PROJECT: &str = "Work Project";
pub const CATEGORY_PERSONAL_PROJECT: &str = "Personal Project";
pub const CATEGORY_OTHER: &str = "Other";

/// Vault directory names the categorizer keys off
pub const DIR_COMPUTER: &str = "computer";
pub const DIR_AI: &str = "AI";
pub const DIR_SYSTEM_DESIGN: &str = "系统设计";
pub const DIR_ALGORITHMS: &str = "算法和数据结构";
pub const DIR_ARCHITECTURE: &str = "架构设计";
pub const DIR_AREA: &str = "AREA";
pub const DIR_STARTUP: &str = "创业认知";
pub const DIR_PROFESSIONAL: &str = "专业力";
pub const DIR_PROJECT: &str = "Project";
pub const DIR_WORK_PROJECT: &str = "meituan";

// === Report ===

/// Report table title width
pub const REPORT_TITLE_MAX_CHARS: usize = 30;

/// Share of `ctime`-dated records considered well documented
pub const CTIME_SHARE_GOOD: f64 = 0.8;

/// Share of technical articles that triggers the sub-category hint
pub const TECHNICAL_SHARE_HIGH: f64 = 0.7;

/// Fewer distinct categories than this triggers the diversity hint
pub const MIN_CATEGORY_VARIETY: usize = 5;
