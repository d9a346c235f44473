//! Batch conversion of vault notes into Hexo posts
//!
//! The [`Converter`] walks the source directory one file at a time: resolve
//! symlinks, parse the header, resolve the date, categorize, rewrite the body
//! and write the post. A failing file is logged and skipped; only a missing
//! source directory stops the run.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::category::Categorizer;
use crate::config::ConvertConfig;
use crate::constants as C;
use crate::date::{self, ResolvedDate};
use crate::error::{ConvertError, Result};
use crate::frontmatter::NoteMetadata;
use crate::markdown;
use crate::post::{self, HeaderInput, PostHeader};
use crate::report::{ConversionRecord, Report};
use crate::rewrite;
use crate::safety::{self, SourceResolution};
use crate::util;
use crate::log;

/// Why a note was not converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Symlink target lies outside the base directory
    Unsafe(PathBuf),
    /// Symlink target does not exist
    Dangling,
    /// Note is not published on the configured platform
    NotPublic(String),
}

/// Outcome of one file
#[derive(Debug)]
pub enum FileOutcome {
    Converted(ConversionRecord),
    Skipped(SkipReason),
    Failed(ConvertError),
}

/// What a batch run did
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub records: Vec<ConversionRecord>,
    pub skipped: Vec<(String, SkipReason)>,
    pub failed: Vec<(String, String)>,
    /// Where the report was written, if one was
    pub report_path: Option<PathBuf>,
}

/// Everything the converter derives from a single note, without writing it
#[derive(Debug, Clone, Serialize)]
pub struct NoteInspection {
    pub file: String,
    pub resolved_path: String,
    pub title: String,
    pub metadata: NoteMetadata,
    pub date: ResolvedDate,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub permalink: String,
    pub output_filename: String,
}

/// Converts notes according to a [`ConvertConfig`]
pub struct Converter {
    config: ConvertConfig,
    categorizer: Categorizer,
    now: NaiveDateTime,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            config,
            categorizer: Categorizer::default(),
            now: date::now(),
        }
    }

    /// Pin the conversion time (`updated` field, `default` dates, report)
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    /// Markdown files of the source directory, sorted by name.
    ///
    /// Hidden files and `README.md` are left out.
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.config.source_dir;
        if !dir.is_dir() {
            return Err(ConvertError::SourceDirMissing(dir.clone()));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| ConvertError::io(dir, e))? {
            let path = entry.map_err(|e| ConvertError::io(dir, e))?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let is_markdown = path
                .extension()
                .is_some_and(|ext| ext == C::MARKDOWN_EXTENSION);
            if !is_markdown || name.starts_with('.') || C::IGNORED_FILENAMES.contains(&name) {
                continue;
            }
            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    /// Convert every note of the source directory and write the report
    pub fn run(&self) -> Result<BatchSummary> {
        let files = self.source_files()?;
        let mut summary = BatchSummary::default();

        for path in &files {
            let name = file_name(path);
            log!("convert"; "processing {}", name);

            match self.convert_file(path) {
                FileOutcome::Converted(record) => {
                    log!(
                        "convert";
                        "✅ {} | {} ({}) -> {}",
                        record.title,
                        record.date.value.format(C::DISPLAY_TIME_FORMAT),
                        record.date.source,
                        record.target
                    );
                    summary.records.push(record);
                }
                FileOutcome::Skipped(reason) => {
                    match &reason {
                        SkipReason::Unsafe(target) => log!(
                            "warn";
                            "{} -> {} is outside {}, skipped",
                            name,
                            util::display_path(target),
                            util::display_path(&self.config.base_dir)
                        ),
                        SkipReason::Dangling => log!("warn"; "{} points to a missing file, skipped", name),
                        SkipReason::NotPublic(platform) => {
                            log!("convert"; "{} is not published on {}, skipped", name, platform)
                        }
                    }
                    summary.skipped.push((name, reason));
                }
                FileOutcome::Failed(err) => {
                    let message = err.chain();
                    log!("error"; "{}: {}", name, message);
                    summary.failed.push((name, message));
                }
            }
        }

        if let Some(report_path) = &self.config.report_path {
            if let Some(report) = Report::build(summary.records.clone(), self.now) {
                match fs::write(report_path, report.render()) {
                    Ok(()) => {
                        log!("report"; "written to {}", util::display_path(report_path));
                        summary.report_path = Some(report_path.clone());
                    }
                    Err(e) => log!("error"; "cannot write report {}: {}", util::display_path(report_path), e),
                }
            }
        }

        Ok(summary)
    }

    /// Convert one note and write its post
    pub fn convert_file(&self, path: &Path) -> FileOutcome {
        match self.prepare(path) {
            Ok(Prepared::Ready(note)) => match self.write_post(path, note) {
                Ok(record) => FileOutcome::Converted(record),
                Err(err) => FileOutcome::Failed(err),
            },
            Ok(Prepared::Skip(reason)) => FileOutcome::Skipped(reason),
            Err(err) => FileOutcome::Failed(err),
        }
    }

    /// Derive everything about a note without writing anything
    pub fn inspect(&self, path: &Path) -> Result<std::result::Result<NoteInspection, SkipReason>> {
        let note = match self.prepare(path)? {
            Prepared::Ready(note) => note,
            Prepared::Skip(reason) => return Ok(Err(reason)),
        };

        Ok(Ok(NoteInspection {
            file: file_name(path),
            resolved_path: util::display_path(&note.read_path),
            permalink: post::permalink(&note.title, note.date.value),
            output_filename: self.output_filename(path, &note),
            title: note.title,
            metadata: note.metadata,
            date: note.date,
            categories: note.categories,
            tags: note.tags,
        }))
    }

    /// Symlinks of the source directory with their safety verdict
    pub fn check_links(&self) -> Result<Vec<(String, SourceResolution)>> {
        Ok(self
            .source_files()?
            .into_iter()
            .map(|path| {
                let resolution = safety::resolve_source(&path, &self.config.base_dir);
                (file_name(&path), resolution)
            })
            .filter(|(_, resolution)| resolution.is_link())
            .collect())
    }

    fn prepare(&self, path: &Path) -> Result<Prepared> {
        let resolution = safety::resolve_source(path, &self.config.base_dir);
        let read_path = match resolution {
            SourceResolution::Regular(p) => p,
            SourceResolution::Linked { target, .. } => target,
            SourceResolution::Escapes { target, .. } => {
                return Ok(Prepared::Skip(SkipReason::Unsafe(target)));
            }
            SourceResolution::Dangling(_) => return Ok(Prepared::Skip(SkipReason::Dangling)),
        };

        let content = fs::read_to_string(&read_path).map_err(|e| ConvertError::io(&read_path, e))?;
        let (metadata, body) = NoteMetadata::parse(&content);

        if let Some(platform) = &self.config.platform {
            if !metadata.is_public_on(platform) {
                return Ok(Prepared::Skip(SkipReason::NotPublic(platform.clone())));
            }
        }

        let date = date::resolve_date(&metadata, date::file_mtime(&read_path), self.now);
        let body = rewrite::strip_frontmatter(body);
        let title = markdown::extract_title(path, body);
        let categories = self.categorizer.categorize(&read_path);
        let tags = match metadata.tags() {
            Some(tags) if !tags.is_empty() => tags.to_vec(),
            _ => vec![self.config.default_tag.clone()],
        };
        let body = rewrite::rewrite_links(body);

        Ok(Prepared::Ready(PreparedNote {
            read_path,
            metadata,
            date,
            title,
            categories,
            tags,
            body,
        }))
    }

    fn output_filename(&self, path: &Path, note: &PreparedNote) -> String {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        post::output_filename(&stem, note.date.value, self.config.style)
    }

    fn write_post(&self, path: &Path, note: PreparedNote) -> Result<ConversionRecord> {
        let target = self.output_filename(path, &note);
        let original_path = util::display_path(&note.read_path);
        let header = PostHeader::new(HeaderInput {
            title: &note.title,
            date: note.date,
            now: self.now,
            categories: note.categories.clone(),
            tags: note.tags,
            author: &self.config.author,
            original_path: &original_path,
            style: self.config.style,
        });
        let content = header.render(&note.body)?;

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| ConvertError::io(output_dir, e))?;
        let target_path = output_dir.join(&target);
        fs::write(&target_path, content).map_err(|e| ConvertError::io(&target_path, e))?;

        Ok(ConversionRecord {
            original: file_name(path),
            target,
            title: note.title,
            date: note.date,
            categories: note.categories,
        })
    }
}

enum Prepared {
    Ready(PreparedNote),
    Skip(SkipReason),
}

struct PreparedNote {
    read_path: PathBuf,
    metadata: NoteMetadata,
    date: ResolvedDate,
    title: String,
    categories: Vec<String>,
    tags: Vec<String>,
    body: String,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| util::display_path(path))
}
