//! Shared test fixtures

mod mock_store;

#[allow(unused_imports)]
pub use mock_store::{CreateCall, MockRecordStore, UpdateCall};

use notion_merge_log::config::{Config, Language};
use notion_merge_log::types::{Account, BranchRef, Label, PullRequestEvent};

/// Config for `acme/widgets` with the English template
#[allow(dead_code)]
pub fn test_config() -> Config {
    let mut config = Config::new("test-token", "db-123");
    config.repository = "acme/widgets".to_string();
    config.language = Language::En;
    config
}

/// A merged PR with a full set of fields
#[allow(dead_code)]
pub fn make_merged_pr(number: u64, body: Option<&str>) -> PullRequestEvent {
    PullRequestEvent {
        number,
        title: Some(format!("Change {number}")),
        html_url: Some(format!("https://github.com/acme/widgets/pull/{number}")),
        body: body.map(ToString::to_string),
        merged: Some(true),
        merged_at: Some("2024-06-01T12:00:00Z".to_string()),
        merge_commit_sha: Some(format!("sha{number}")),
        labels: vec![Label {
            name: Some("feature".to_string()),
        }],
        user: Some(Account {
            login: Some("alice".to_string()),
        }),
        merged_by: Some(Account {
            login: Some("bob".to_string()),
        }),
        base: Some(BranchRef {
            ref_name: "main".to_string(),
        }),
        head: Some(BranchRef {
            ref_name: format!("feat/{number}"),
        }),
        changed_files: Some(2),
        additions: Some(30),
        deletions: Some(5),
    }
}

/// Webhook JSON for a PR
#[allow(dead_code)]
pub fn payload_json(pr: &PullRequestEvent) -> String {
    serde_json::json!({ "action": "closed", "pull_request": pr }).to_string()
}
