//! Command-line interface

mod notify;
pub mod style;

pub use notify::run_notify;

use clap::Parser;
use notion_merge_log::config::Language;
use std::path::PathBuf;

/// Log a merged GitHub pull request as a Notion database page
#[derive(Debug, Parser)]
#[command(name = "merge-log", version, about)]
pub struct Args {
    /// Webhook payload file [default: $PR_PAYLOAD_JSON, then $GITHUB_EVENT_PATH]
    #[arg(long, value_name = "PATH")]
    pub event: Option<PathBuf>,

    /// TOML file with database ID, property names and limits
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the page that would be created, without calling Notion
    #[arg(long)]
    pub dry_run: bool,

    /// Language of the page body (ko, en)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<Language>,

    /// Maximum summary length in characters
    #[arg(long, value_name = "CHARS")]
    pub summary_limit: Option<usize>,

    /// Maximum length of Notion error bodies in error messages
    #[arg(long, value_name = "CHARS")]
    pub error_body_limit: Option<usize>,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Errors only
    #[arg(short, long)]
    pub quiet: bool,
}
