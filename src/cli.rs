use clap::{Parser, Subcommand};

use crate::config::OutputStyle;
use crate::constants as C;

/// emx-hexo - publish Obsidian-style notes as Hexo posts
///
/// # Quick Reference
///
/// ```bash
/// emx-hexo convert                          # ../public -> source/_posts
/// emx-hexo convert -s ~/vault/public -o blog/source/_posts -b ~/vault
/// emx-hexo convert --style basic --no-report
/// emx-hexo convert --platform hexo           # only notes with `public: [hexo]`
/// emx-hexo check                            # verify symlinks stay inside the vault
/// emx-hexo inspect ../public/note.md --json  # show derived date, categories, tags
/// ```
///
/// ## Environment Variables
///
/// - `EMX_HEXO_SOURCE`: source directory (default: ../public)
/// - `EMX_HEXO_OUTPUT`: Hexo posts directory (default: source/_posts)
/// - `EMX_HEXO_BASE`: vault root for the symlink check (default: ../..)
/// - `EMX_HEXO_TIMESTAMP`: pin the conversion time ("YYYY-MM-DD HH:MM")
///
/// ## Publish Date
///
/// The first header field that parses wins: ctime, created, mtime, updated.
/// Otherwise the file modification time is used, then the current time.
#[derive(Parser, Debug)]
#[command(name = "emx-hexo")]
#[command(author = "nzinfo <li.monan@gmail.com>")]
#[command(version = "0.1.0")]
#[command(about = "Publish Obsidian-style notes as Hexo posts")]
pub struct Cli {
    /// Directory with the notes to publish
    #[arg(short, long, global = true, env = C::ENV_SOURCE_DIR, default_value = C::DEFAULT_SOURCE_DIR)]
    pub source: String,

    /// Vault root; symlinked notes must resolve inside it
    #[arg(short, long, global = true, env = C::ENV_BASE_DIR, default_value = C::DEFAULT_BASE_DIR)]
    pub base: String,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert all notes of the source directory into Hexo posts
    #[command(alias = "c")]
    Convert {
        /// Hexo posts directory
        #[arg(short, long, env = C::ENV_OUTPUT_DIR, default_value = C::DEFAULT_OUTPUT_DIR)]
        output: String,

        /// Where to write the conversion report
        #[arg(short, long, default_value = C::DEFAULT_REPORT_PATH)]
        report: String,

        /// Do not write a conversion report
        #[arg(long, conflicts_with = "report")]
        no_report: bool,

        /// Post author
        #[arg(long, default_value = C::DEFAULT_AUTHOR)]
        author: String,

        /// Tag for notes without tags
        #[arg(long, default_value = C::DEFAULT_TAG)]
        default_tag: String,

        /// Filename and header style
        #[arg(long, value_enum, default_value_t = OutputStyle::Enhanced)]
        style: OutputStyle,

        /// Only convert notes listing this platform under `public:`
        #[arg(short, long)]
        platform: Option<String>,
    },

    /// Check that symlinked notes resolve inside the vault
    Check,

    /// Show what the converter derives from a note, without writing
    #[command(alias = "i")]
    Inspect {
        /// Note file
        note: String,
    },
}
