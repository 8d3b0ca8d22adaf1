//! Single-run entry point

use crate::config::Config;
use crate::error::Result;
use crate::notifier::upsert::upsert_record;
use crate::notion::RecordStore;
use crate::page::PageDraft;
use crate::types::{PullRequestEvent, RunOutcome};
use tracing::info;

/// Record one merge event.
///
/// Non-merged PRs are skipped before any store call. Otherwise the page
/// draft is computed up front and upserted.
pub async fn run(
    pr: &PullRequestEvent,
    config: &Config,
    store: &dyn RecordStore,
) -> Result<RunOutcome> {
    if !pr.is_merged() {
        info!(pr_number = pr.number, "PR not merged, skipping");
        return Ok(RunOutcome::Skipped);
    }

    let draft = PageDraft::from_event(pr, config);
    let outcome = upsert_record(store, &draft).await?;
    Ok(RunOutcome::Written(outcome))
}
