//! Notion REST client

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::truncate_chars;
use crate::notion::RecordStore;
use crate::notion::payload::{
    CreatePageRequest, QueryRequest, UpdatePageRequest, decode_body, first_result_id, page_ref,
};
use crate::page::PropertyMap;
use crate::types::{RecordRef, SourceId};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Notion API version sent with every request
pub const NOTION_VERSION: &str = "2022-06-28";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Notion service using reqwest
pub struct NotionClient {
    client: Client,
    base_url: String,
    database_id: String,
    source_id_property: String,
    error_body_limit: usize,
}

impl NotionClient {
    /// Create a client for the database named in `config`
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| Error::InvalidConfig("token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert("Notion-Version", HeaderValue::from_static(NOTION_VERSION));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(concat!("notion-merge-log/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            database_id: config.database_id.clone(),
            source_id_property: config.schema.source_id.clone(),
            error_body_limit: config.error_body_limit,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a JSON request and decode the response leniently.
    async fn send<B: Serialize + Sync>(&self, method: Method, path: &str, body: &B) -> Result<Value> {
        let response = self
            .client
            .request(method, self.api_url(path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::NotionApi {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body: truncate_chars(&text, self.error_body_limit).to_string(),
            });
        }

        Ok(decode_body(&text))
    }
}

#[async_trait]
impl RecordStore for NotionClient {
    async fn find_by_source_id(&self, source_id: &SourceId) -> Result<Option<RecordRef>> {
        debug!(%source_id, "querying for existing page");
        let path = format!("/databases/{}/query", self.database_id);
        let query = QueryRequest::text_equals(&self.source_id_property, source_id.as_str());

        let response = self.send(Method::POST, &path, &query).await?;

        let result = first_result_id(&response).map(|id| page_ref(&response["results"][0], &id));
        if let Some(ref page) = result {
            debug!(page_id = %page.id, "found existing page");
        } else {
            debug!("no existing page found");
        }
        Ok(result)
    }

    async fn update_properties(
        &self,
        page_id: &str,
        properties: &PropertyMap,
    ) -> Result<RecordRef> {
        debug!(page_id, "updating page properties");
        let path = format!("/pages/{page_id}");

        let response = self
            .send(Method::PATCH, &path, &UpdatePageRequest::new(properties))
            .await?;

        debug!(page_id, "updated page properties");
        Ok(page_ref(&response, page_id))
    }

    async fn create_page(&self, properties: &PropertyMap, children: &[Value]) -> Result<RecordRef> {
        debug!(blocks = children.len(), "creating page");
        let request = CreatePageRequest::new(&self.database_id, properties, children);

        let response = self.send(Method::POST, "/pages", &request).await?;

        let page = page_ref(&response, "");
        debug!(page_id = %page.id, "created page");
        Ok(page)
    }
}
