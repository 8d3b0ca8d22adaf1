//! Notion block construction for the page body
//!
//! The body has four sections, always in this order: title, summary,
//! checklist, closing. It is written once, when the page is created.

use crate::extract::{extract_summary, extract_todos, strip_markdown, truncate_chars};
use crate::page::template::Template;
use crate::types::{PullRequestEvent, TodoItem};
use serde_json::{Value, json};

/// Rich-text array holding one plain text run
pub fn rich_text(content: &str) -> Value {
    json!([{ "type": "text", "text": { "content": content } }])
}

fn heading(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "heading_2",
        "heading_2": { "rich_text": rich_text(text) },
    })
}

fn paragraph(text: &str) -> Value {
    paragraph_runs(rich_text(text))
}

fn paragraph_runs(runs: Value) -> Value {
    json!({
        "object": "block",
        "type": "paragraph",
        "paragraph": { "rich_text": runs },
    })
}

fn bullet(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "bulleted_list_item",
        "bulleted_list_item": { "rich_text": rich_text(text) },
    })
}

fn to_do(item: &TodoItem) -> Value {
    json!({
        "object": "block",
        "type": "to_do",
        "to_do": {
            "checked": item.checked,
            "rich_text": rich_text(&item.text),
        },
    })
}

/// Summary text as stored on the page: markdown stripped, truncated to
/// `limit` characters, placeholder when nothing is left.
pub fn clean_summary(body: &str, limit: usize, template: &Template) -> String {
    let stripped = strip_markdown(&extract_summary(body));
    let truncated = truncate_chars(&stripped, limit);
    if truncated.is_empty() {
        template.no_summary.to_string()
    } else {
        truncated.to_string()
    }
}

/// Checklist for the page: parsed items, or the template defaults when the
/// body has none.
pub fn checklist(body: &str, template: &Template) -> Vec<TodoItem> {
    let todos = extract_todos(body);
    if todos.is_empty() {
        template
            .default_todos
            .iter()
            .map(|t| TodoItem::unchecked(*t))
            .collect()
    } else {
        todos
    }
}

/// Build all body blocks for a newly created page.
pub fn build_children(
    pr: &PullRequestEvent,
    repository: &str,
    template: &Template,
    summary_limit: usize,
) -> Vec<Value> {
    let mut blocks = Vec::new();
    let body = pr.body_text();

    blocks.push(heading(template.title_heading));
    blocks.push(paragraph_runs(json!([{
        "type": "text",
        "text": { "content": pr.record_title() },
        "annotations": { "bold": true },
    }])));
    let link = pr.html_url.as_ref().map(|url| json!({ "url": url }));
    blocks.push(paragraph_runs(json!([
        { "type": "text", "text": { "content": "PR: " } },
        { "type": "text", "text": { "content": pr.url(), "link": link } },
    ])));
    blocks.push(bullet(&format!("Repo: {repository}")));
    blocks.push(bullet(&format!(
        "Branch: {} ← {}",
        pr.base_ref(),
        pr.head_ref()
    )));
    if let Some(author) = pr.author() {
        blocks.push(bullet(&format!("Author: {author}")));
    }
    if let Some(merged_by) = pr.merged_by_login() {
        blocks.push(bullet(&format!("Merged by: {merged_by}")));
    }

    blocks.push(heading(template.summary_heading));
    blocks.push(paragraph(&clean_summary(body, summary_limit, template)));
    let labels = pr.label_names();
    if !labels.is_empty() {
        blocks.push(paragraph(&format!("Labels: {}", labels.join(", "))));
    }
    blocks.push(paragraph(&format!("Stats: {}", pr.stats())));

    blocks.push(heading(template.checklist_heading));
    blocks.extend(checklist(body, template).iter().map(to_do));

    blocks.push(heading(template.closing_heading));
    blocks.push(bullet(&format!("Merge commit: {}", pr.merge_sha())));
    blocks.push(bullet(&format!("PR link: {}", pr.url())));
    blocks.push(paragraph(template.notes));

    blocks
}
