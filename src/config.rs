//! Converter configuration

use std::path::PathBuf;

use clap::ValueEnum;

use crate::constants as C;
use crate::util;

/// Shape of the generated posts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputStyle {
    /// Date-prefixed filenames, header carries `date_source` and `original_path`
    #[default]
    Enhanced,
    /// Sanitized stem as filename, plain Hexo header
    Basic,
}

/// Everything a conversion run needs to know
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory with the notes to publish
    pub source_dir: PathBuf,
    /// Hexo posts directory
    pub output_dir: PathBuf,
    /// Symlinked notes must resolve inside this directory
    pub base_dir: PathBuf,
    /// Report destination, `None` disables the report
    pub report_path: Option<PathBuf>,
    pub author: String,
    /// Tag used when a note has none
    pub default_tag: String,
    pub style: OutputStyle,
    /// Only publish notes whose `public:` list names this platform
    pub platform: Option<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(C::DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(C::DEFAULT_OUTPUT_DIR),
            base_dir: PathBuf::from(C::DEFAULT_BASE_DIR),
            report_path: Some(PathBuf::from(C::DEFAULT_REPORT_PATH)),
            author: C::DEFAULT_AUTHOR.to_string(),
            default_tag: C::DEFAULT_TAG.to_string(),
            style: OutputStyle::default(),
            platform: None,
        }
    }
}

impl ConvertConfig {
    /// Config with the three directories set, `~` expanded
    pub fn new(source_dir: &str, output_dir: &str, base_dir: &str) -> Self {
        Self {
            source_dir: util::expand_home(source_dir),
            output_dir: util::expand_home(output_dir),
            base_dir: util::expand_home(base_dir),
            ..Self::default()
        }
    }

    pub fn with_report(mut self, report_path: Option<&str>) -> Self {
        self.report_path = report_path.map(util::expand_home);
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_platform(mut self, platform: Option<String>) -> Self {
        self.platform = platform.filter(|p| !p.is_empty());
        self
    }
}
