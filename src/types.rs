//! Core types for notion-merge-log

use serde::{Deserialize, Serialize};

/// Top-level GitHub webhook payload
///
/// Only the `pull_request` object is consumed; every other field of the
/// webhook (action, repository, sender, ...) is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPayload {
    /// The pull request the event refers to (absent for non-PR events)
    pub pull_request: Option<PullRequestEvent>,
}

/// A pull request as delivered in a `pull_request` webhook event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PullRequestEvent {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: Option<String>,
    /// Web URL for the PR
    pub html_url: Option<String>,
    /// PR description (markdown)
    pub body: Option<String>,
    /// Whether the PR was merged
    pub merged: Option<bool>,
    /// When the PR was merged, as sent by GitHub (ISO 8601)
    pub merged_at: Option<String>,
    /// SHA of the merge commit
    pub merge_commit_sha: Option<String>,
    /// Labels attached to the PR
    #[serde(default)]
    pub labels: Vec<Label>,
    /// PR author
    pub user: Option<Account>,
    /// User who merged the PR
    pub merged_by: Option<Account>,
    /// Base branch
    pub base: Option<BranchRef>,
    /// Head branch
    pub head: Option<BranchRef>,
    /// Number of files changed
    pub changed_files: Option<u64>,
    /// Lines added
    pub additions: Option<u64>,
    /// Lines deleted
    pub deletions: Option<u64>,
}

/// A PR label
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Label {
    /// Label name
    pub name: Option<String>,
}

/// A GitHub account reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    /// Login handle
    pub login: Option<String>,
}

/// A branch reference on either side of a PR
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchRef {
    /// Branch name
    #[serde(rename = "ref")]
    pub ref_name: String,
}

/// Change statistics of a PR
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Files changed
    pub files_changed: u64,
    /// Lines added
    pub additions: u64,
    /// Lines deleted
    pub deletions: u64,
}

impl std::fmt::Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "files {}, +{}, -{}",
            self.files_changed, self.additions, self.deletions
        )
    }
}

impl PullRequestEvent {
    /// Whether the PR was merged (`null`/absent counts as not merged)
    pub fn is_merged(&self) -> bool {
        self.merged.unwrap_or(false)
    }

    /// PR title, falling back to `PR #<number>` when missing or empty
    pub fn display_title(&self) -> String {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => format!("PR #{}", self.number),
        }
    }

    /// Title used for the record: `<title> (#<number>)`
    pub fn record_title(&self) -> String {
        format!("{} (#{})", self.display_title(), self.number)
    }

    /// Non-empty label names, in payload order
    pub fn label_names(&self) -> Vec<String> {
        self.labels
            .iter()
            .filter_map(|l| l.name.as_deref())
            .filter(|n| !n.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Web URL for the PR, empty when absent
    pub fn url(&self) -> &str {
        self.html_url.as_deref().unwrap_or_default()
    }

    /// PR description, empty when absent
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// Merge commit SHA, empty when absent
    pub fn merge_sha(&self) -> &str {
        self.merge_commit_sha.as_deref().unwrap_or_default()
    }

    /// Author login, if known
    pub fn author(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|a| a.login.as_deref())
            .filter(|l| !l.is_empty())
    }

    /// Login of the merging user, if known
    pub fn merged_by_login(&self) -> Option<&str> {
        self.merged_by
            .as_ref()
            .and_then(|a| a.login.as_deref())
            .filter(|l| !l.is_empty())
    }

    /// Base branch name
    pub fn base_ref(&self) -> &str {
        self.base.as_ref().map_or("", |b| b.ref_name.as_str())
    }

    /// Head branch name
    pub fn head_ref(&self) -> &str {
        self.head.as_ref().map_or("", |b| b.ref_name.as_str())
    }

    /// Change statistics, zero where the payload omits them
    pub fn stats(&self) -> DiffStats {
        DiffStats {
            files_changed: self.changed_files.unwrap_or(0),
            additions: self.additions.unwrap_or(0),
            deletions: self.deletions.unwrap_or(0),
        }
    }
}

/// Stable identifier of one merge event: `github:<owner>/<repo>#PR<number>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Derive the identifier for a PR in `repository` (`owner/repo`)
    pub fn new(repository: &str, pr_number: u64) -> Self {
        Self(format!("github:{repository}#PR{pr_number}"))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A markdown checklist entry from the PR description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Whether the box is ticked
    pub checked: bool,
    /// Item text
    pub text: String,
}

impl TodoItem {
    /// An unticked item
    pub fn unchecked(text: impl Into<String>) -> Self {
        Self {
            checked: false,
            text: text.into(),
        }
    }
}

/// Reference to a Notion page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRef {
    /// Page ID
    pub id: String,
    /// Web URL of the page, when the API returned one
    pub url: Option<String>,
}

impl std::fmt::Display for RecordRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.url {
            Some(url) => f.write_str(url),
            None => f.write_str(&self.id),
        }
    }
}

/// Result of writing a record for a SourceId
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// An existing page was found and its properties patched
    Updated(RecordRef),
    /// No page existed; a new one was created with a body
    Created(RecordRef),
}

impl UpsertOutcome {
    /// The page that was written
    pub const fn record(&self) -> &RecordRef {
        match self {
            Self::Updated(r) | Self::Created(r) => r,
        }
    }
}

/// Result of one run over a merge event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The PR was not merged; nothing was done
    Skipped,
    /// A page was updated or created
    Written(UpsertOutcome),
}
