//! Page content for a merged PR
//!
//! Everything here is pure: a [`PageDraft`] is computed from the event and
//! the configuration before any network call is made.

mod blocks;
mod properties;
mod template;

pub use blocks::{build_children, checklist, clean_summary, rich_text};
pub use properties::{PropertyMap, build_properties};
pub use template::Template;

use crate::config::Config;
use crate::types::{PullRequestEvent, SourceId};
use serde_json::Value;

/// Properties and body of the page for one merge event
#[derive(Debug, Clone)]
pub struct PageDraft {
    /// Idempotency key of the record
    pub source_id: SourceId,
    /// Properties, written on both create and update
    pub properties: PropertyMap,
    /// Body blocks, written only when the page is created
    pub children: Vec<Value>,
}

impl PageDraft {
    /// Compute the draft for `pr` under `config`.
    pub fn from_event(pr: &PullRequestEvent, config: &Config) -> Self {
        let source_id = SourceId::new(&config.repository, pr.number);
        let properties =
            build_properties(pr, &source_id, &config.schema, &config.status_done);
        let children = build_children(
            pr,
            &config.repository,
            Template::for_language(config.language),
            config.summary_limit,
        );
        Self {
            source_id,
            properties,
            children,
        }
    }
}
