//! Database property values for a merge record

use crate::config::PropertySchema;
use crate::page::blocks::rich_text;
use crate::types::{PullRequestEvent, SourceId};
use serde_json::{Map, Value, json};

/// Property name → Notion property value
pub type PropertyMap = Map<String, Value>;

/// Build the property map written on both create and update.
pub fn build_properties(
    pr: &PullRequestEvent,
    source_id: &SourceId,
    schema: &PropertySchema,
    status_done: &str,
) -> PropertyMap {
    let labels: Vec<Value> = pr
        .label_names()
        .into_iter()
        .map(|name| json!({ "name": name }))
        .collect();

    let mut props = Map::new();
    props.insert(
        schema.title.clone(),
        json!({ "title": rich_text(&pr.record_title()) }),
    );
    props.insert(
        schema.status.clone(),
        json!({ "status": { "name": status_done } }),
    );
    props.insert(
        schema.date.clone(),
        json!({ "date": { "start": pr.merged_at } }),
    );
    props.insert(schema.url.clone(), json!({ "url": pr.html_url }));
    props.insert(schema.labels.clone(), json!({ "multi_select": labels }));
    props.insert(
        schema.merge_commit.clone(),
        json!({ "rich_text": rich_text(pr.merge_sha()) }),
    );
    props.insert(
        schema.source_id.clone(),
        json!({ "rich_text": rich_text(source_id.as_str()) }),
    );
    props
}
