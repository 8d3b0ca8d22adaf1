//! notion-merge-log: record merged GitHub pull requests in a Notion database
//!
//! One run handles one `pull_request` event. A merged PR is written to the
//! configured database as a page keyed by a stable source ID: the first run
//! creates the page with a templated body (summary, checklist, metadata),
//! later runs for the same PR only refresh its properties.

pub mod config;
pub mod error;
pub mod event;
pub mod extract;
pub mod notifier;
pub mod notion;
pub mod page;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use notifier::{run, upsert_record};
pub use notion::{NotionClient, RecordStore};
pub use types::{PullRequestEvent, RecordRef, RunOutcome, SourceId, TodoItem, UpsertOutcome};
