pub mod logger;

pub mod category;
pub mod cli;
pub mod config;
pub mod constants;
pub mod convert;
pub mod date;
pub mod error;
pub mod frontmatter;
pub mod markdown;
pub mod post;
pub mod report;
pub mod rewrite;
pub mod safety;
pub mod util;

pub use category::Categorizer;
pub use cli::{Cli, Command};
pub use config::{ConvertConfig, OutputStyle};
pub use convert::{BatchSummary, Converter, FileOutcome, NoteInspection, SkipReason};
pub use date::{resolve_date, DateSource, ResolvedDate};
pub use error::{ConvertError, Result};
pub use frontmatter::{HeaderBlock, NoteMetadata, TimeField};
pub use report::{ConversionRecord, Report};
pub use safety::{is_safe_path, resolve_source, SourceResolution};
