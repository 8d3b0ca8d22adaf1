//! Idempotent upsert of a merge record
//!
//! Query-before-create keyed by [`SourceId`](crate::types::SourceId): a page
//! is created at most once per key, and later runs only patch properties so
//! manual edits to the body survive.

use crate::error::Result;
use crate::notion::RecordStore;
use crate::page::PageDraft;
use crate::types::UpsertOutcome;
use tracing::{debug, info};

/// Update the page for `draft.source_id` if it exists, otherwise create it.
///
/// Exactly one lookup, then exactly one of update or create. An error from
/// the store is returned as-is; nothing is retried.
pub async fn upsert_record(store: &dyn RecordStore, draft: &PageDraft) -> Result<UpsertOutcome> {
    debug!(source_id = %draft.source_id, "upserting record");

    if let Some(existing) = store.find_by_source_id(&draft.source_id).await? {
        let updated = store
            .update_properties(&existing.id, &draft.properties)
            .await?;
        info!(page_id = %updated.id, "updated existing page");
        return Ok(UpsertOutcome::Updated(updated));
    }

    let created = store
        .create_page(&draft.properties, &draft.children)
        .await?;
    info!(page_id = %created.id, url = ?created.url, "created page");
    Ok(UpsertOutcome::Created(created))
}
