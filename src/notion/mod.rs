//! Notion record store
//!
//! The notifier talks to the database only through [`RecordStore`], so the
//! upsert logic can be exercised without HTTP.

mod client;
mod payload;

pub use client::{NOTION_VERSION, NotionClient};
pub use payload::{CreatePageRequest, QueryRequest, UpdatePageRequest, decode_body};

use crate::error::Result;
use crate::page::PropertyMap;
use crate::types::{RecordRef, SourceId};
use async_trait::async_trait;
use serde_json::Value;

/// Storage operations needed to upsert one merge record
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Find the page whose source-id property equals `source_id`
    ///
    /// At most one page is requested; `None` when there is no match.
    async fn find_by_source_id(&self, source_id: &SourceId) -> Result<Option<RecordRef>>;

    /// Patch the properties of an existing page. Never touches the body.
    async fn update_properties(&self, page_id: &str, properties: &PropertyMap)
    -> Result<RecordRef>;

    /// Create a page with properties and body blocks
    async fn create_page(&self, properties: &PropertyMap, children: &[Value]) -> Result<RecordRef>;
}
