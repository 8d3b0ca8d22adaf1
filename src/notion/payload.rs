//! Request and response shapes of the Notion REST API

use crate::page::PropertyMap;
use crate::types::RecordRef;
use serde::Serialize;
use serde_json::{Value, json};

/// Body of `POST /databases/{id}/query`
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    page_size: u32,
    filter: QueryFilter<'a>,
}

#[derive(Debug, Serialize)]
struct QueryFilter<'a> {
    property: &'a str,
    rich_text: TextEquals<'a>,
}

#[derive(Debug, Serialize)]
struct TextEquals<'a> {
    equals: &'a str,
}

impl<'a> QueryRequest<'a> {
    /// Single-result query for pages whose rich-text `property` equals `value`
    pub const fn text_equals(property: &'a str, value: &'a str) -> Self {
        Self {
            page_size: 1,
            filter: QueryFilter {
                property,
                rich_text: TextEquals { equals: value },
            },
        }
    }
}

/// Body of `PATCH /pages/{id}`: properties only, there is no body field
#[derive(Debug, Serialize)]
pub struct UpdatePageRequest<'a> {
    properties: &'a PropertyMap,
}

impl<'a> UpdatePageRequest<'a> {
    /// Patch `properties`
    pub const fn new(properties: &'a PropertyMap) -> Self {
        Self { properties }
    }
}

/// Body of `POST /pages`
#[derive(Debug, Serialize)]
pub struct CreatePageRequest<'a> {
    parent: Parent<'a>,
    properties: &'a PropertyMap,
    children: &'a [Value],
}

#[derive(Debug, Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

impl<'a> CreatePageRequest<'a> {
    /// Create a page in `database_id`
    pub const fn new(
        database_id: &'a str,
        properties: &'a PropertyMap,
        children: &'a [Value],
    ) -> Self {
        Self {
            parent: Parent { database_id },
            properties,
            children,
        }
    }
}

/// Decode a response body leniently.
///
/// Empty text becomes `{}`; text that is not JSON is wrapped as
/// `{"raw": <text>}` instead of failing.
pub fn decode_body(text: &str) -> Value {
    if text.is_empty() {
        return json!({});
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

/// `id` of the first entry in a query response's `results`
pub(crate) fn first_result_id(response: &Value) -> Option<String> {
    response["results"]
        .as_array()?
        .first()?
        .get("id")?
        .as_str()
        .map(ToString::to_string)
}

/// Page reference from a page response, falling back to `fallback_id`
pub(crate) fn page_ref(response: &Value, fallback_id: &str) -> RecordRef {
    RecordRef {
        id: response["id"]
            .as_str()
            .unwrap_or(fallback_id)
            .to_string(),
        url: response["url"].as_str().map(ToString::to_string),
    }
}
