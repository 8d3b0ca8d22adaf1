//! Mock record store for testing
//!
//! These are test utilities - not all may be used in current tests.

#![allow(dead_code)]

use async_trait::async_trait;
use notion_merge_log::error::{Error, Result};
use notion_merge_log::notion::RecordStore;
use notion_merge_log::page::PropertyMap;
use notion_merge_log::types::{RecordRef, SourceId};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `update_properties`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCall {
    pub page_id: String,
    pub properties: PropertyMap,
}

/// Call record for `create_page`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCall {
    pub properties: PropertyMap,
    pub children: Vec<Value>,
}

/// In-memory record store
///
/// Created pages are indexed by the value of their source-id property, so a
/// second run for the same SourceId finds the page created by the first.
///
/// Features:
/// - Call tracking for verification
/// - Pre-seeded pages
/// - Error injection for failure path testing
pub struct MockRecordStore {
    source_id_property: String,
    pages: Mutex<HashMap<String, RecordRef>>,
    // Call tracking
    find_calls: Mutex<Vec<String>>,
    update_calls: Mutex<Vec<UpdateCall>>,
    create_calls: Mutex<Vec<CreateCall>>,
    // Error injection
    error_on_find: Mutex<Option<u16>>,
    error_on_update: Mutex<Option<u16>>,
    error_on_create: Mutex<Option<u16>>,
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRecordStore {
    /// Store keyed by the default `Source ID` property
    pub fn new() -> Self {
        Self::with_source_id_property("Source ID")
    }

    /// Store keyed by a custom source-id property
    pub fn with_source_id_property(name: &str) -> Self {
        Self {
            source_id_property: name.to_string(),
            pages: Mutex::new(HashMap::new()),
            find_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
            create_calls: Mutex::new(Vec::new()),
            error_on_find: Mutex::new(None),
            error_on_update: Mutex::new(None),
            error_on_create: Mutex::new(None),
        }
    }

    // === Setup methods ===

    /// Pretend a page already exists for `source_id`
    pub fn seed_page(&self, source_id: &SourceId, page_id: &str) {
        self.pages.lock().unwrap().insert(
            source_id.as_str().to_string(),
            RecordRef {
                id: page_id.to_string(),
                url: Some(format!("https://www.notion.so/{page_id}")),
            },
        );
    }

    // === Error injection methods ===

    /// Make `find_by_source_id` fail with `status`
    pub fn fail_find(&self, status: u16) {
        *self.error_on_find.lock().unwrap() = Some(status);
    }

    /// Make `update_properties` fail with `status`
    pub fn fail_update(&self, status: u16) {
        *self.error_on_update.lock().unwrap() = Some(status);
    }

    /// Make `create_page` fail with `status`
    pub fn fail_create(&self, status: u16) {
        *self.error_on_create.lock().unwrap() = Some(status);
    }

    // === Call verification methods ===

    /// Source IDs that were looked up
    pub fn get_find_calls(&self) -> Vec<String> {
        self.find_calls.lock().unwrap().clone()
    }

    /// All `update_properties` calls
    pub fn get_update_calls(&self) -> Vec<UpdateCall> {
        self.update_calls.lock().unwrap().clone()
    }

    /// All `create_page` calls
    pub fn get_create_calls(&self) -> Vec<CreateCall> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Total number of store calls of any kind
    pub fn call_count(&self) -> usize {
        self.find_calls.lock().unwrap().len()
            + self.update_calls.lock().unwrap().len()
            + self.create_calls.lock().unwrap().len()
    }

    /// Number of pages the store holds
    pub fn page_count(&self) -> usize {
        self.pages.lock().unwrap().len()
    }

    fn injected(status: u16) -> Error {
        Error::NotionApi {
            status,
            reason: "Injected".to_string(),
            body: "{\"message\":\"injected failure\"}".to_string(),
        }
    }
}

/// Plain text of a rich-text property value
fn rich_text_content(value: &Value) -> Option<String> {
    value["rich_text"]
        .as_array()?
        .iter()
        .map(|run| run["text"]["content"].as_str())
        .collect()
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn find_by_source_id(&self, source_id: &SourceId) -> Result<Option<RecordRef>> {
        self.find_calls
            .lock()
            .unwrap()
            .push(source_id.as_str().to_string());

        if let Some(status) = *self.error_on_find.lock().unwrap() {
            return Err(Self::injected(status));
        }

        Ok(self.pages.lock().unwrap().get(source_id.as_str()).cloned())
    }

    async fn update_properties(
        &self,
        page_id: &str,
        properties: &PropertyMap,
    ) -> Result<RecordRef> {
        self.update_calls.lock().unwrap().push(UpdateCall {
            page_id: page_id.to_string(),
            properties: properties.clone(),
        });

        if let Some(status) = *self.error_on_update.lock().unwrap() {
            return Err(Self::injected(status));
        }

        Ok(RecordRef {
            id: page_id.to_string(),
            url: Some(format!("https://www.notion.so/{page_id}")),
        })
    }

    async fn create_page(&self, properties: &PropertyMap, children: &[Value]) -> Result<RecordRef> {
        self.create_calls.lock().unwrap().push(CreateCall {
            properties: properties.clone(),
            children: children.to_vec(),
        });

        if let Some(status) = *self.error_on_create.lock().unwrap() {
            return Err(Self::injected(status));
        }

        let id = uuid::Uuid::new_v4().simple().to_string();
        let page = RecordRef {
            id: id.clone(),
            url: Some(format!("https://www.notion.so/{id}")),
        };
        if let Some(key) = properties
            .get(&self.source_id_property)
            .and_then(rich_text_content)
        {
            self.pages.lock().unwrap().insert(key, page.clone());
        }
        Ok(page)
    }
}
