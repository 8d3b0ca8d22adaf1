//! Run configuration
//!
//! Values come from three layers, highest precedence first: environment,
//! optional TOML file, built-in defaults. CLI flags are applied by the binary
//! on top of the loaded [`Config`]. The environment is never read directly;
//! callers pass a lookup function so loading stays testable.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Env var holding the Notion integration token
pub const ENV_TOKEN: &str = "NOTION_TOKEN";
/// Env var holding the target database ID
pub const ENV_DATABASE_ID: &str = "NOTION_DATABASE_ID";
/// Env var holding `owner/repo` (set by GitHub Actions)
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
/// Env var overriding the title property name
pub const ENV_TITLE_PROP: &str = "NOTION_TITLE_PROP";
/// Env var overriding the Notion API base URL
pub const ENV_API_URL: &str = "NOTION_API_URL";
/// Env var selecting the page template language
pub const ENV_LANG: &str = "MERGE_LOG_LANG";

/// Default Notion API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.notion.com/v1";
/// Repository used when none is configured
pub const DEFAULT_REPOSITORY: &str = "unknown/unknown";
/// Maximum summary length in characters (Notion caps rich text at 2000)
pub const DEFAULT_SUMMARY_LIMIT: usize = 1800;
/// Maximum length of an error response body kept in error messages
pub const DEFAULT_ERROR_BODY_LIMIT: usize = 500;
/// Status value written to the status property
pub const DEFAULT_STATUS_DONE: &str = "완료";

/// Language of the generated page body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Korean headings and default checklist
    #[default]
    Ko,
    /// English headings and default checklist
    En,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Self::Ko),
            "en" | "english" => Ok(Self::En),
            other => Err(format!("unknown language '{other}' (expected 'ko' or 'en')")),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ko => write!(f, "ko"),
            Self::En => write!(f, "en"),
        }
    }
}

/// Names of the database properties this tool writes
///
/// The database schema is not created here; these must match the columns of
/// the target database exactly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropertySchema {
    /// Title property
    pub title: String,
    /// Status property
    pub status: String,
    /// Date property
    pub date: String,
    /// URL property holding the PR link
    pub url: String,
    /// Multi-select property holding labels
    pub labels: String,
    /// Rich-text property holding the merge commit
    pub merge_commit: String,
    /// Rich-text property holding the SourceId (lookup key)
    pub source_id: String,
}

impl Default for PropertySchema {
    fn default() -> Self {
        Self {
            title: "name".to_string(),
            status: "상태".to_string(),
            date: "날짜".to_string(),
            url: "PR 링크".to_string(),
            labels: "라벨".to_string(),
            merge_commit: "Merge Commit".to_string(),
            source_id: "Source ID".to_string(),
        }
    }
}

/// Optional TOML configuration file
///
/// Every field is optional. The token is deliberately not accepted here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Target database ID
    pub database_id: Option<String>,
    /// `owner/repo`
    pub repository: Option<String>,
    /// Notion API base URL
    pub api_url: Option<String>,
    /// Page template language
    pub language: Option<Language>,
    /// Status value for merged PRs
    pub status: Option<String>,
    /// Summary length limit
    pub summary_limit: Option<usize>,
    /// Error body length limit
    pub error_body_limit: Option<usize>,
    /// Property name overrides
    pub properties: Option<PropertySchema>,
}

impl ConfigFile {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("failed to parse {}: {e}", path.display())))
    }
}

/// Fully resolved configuration for one run
#[derive(Clone)]
pub struct Config {
    /// Notion integration token
    pub token: String,
    /// Target database ID
    pub database_id: String,
    /// `owner/repo` the PR belongs to
    pub repository: String,
    /// Notion API base URL, without trailing slash
    pub api_base_url: String,
    /// Page template language
    pub language: Language,
    /// Status value for merged PRs
    pub status_done: String,
    /// Database property names
    pub schema: PropertySchema,
    /// Summary length limit in characters
    pub summary_limit: usize,
    /// Error body length limit in characters
    pub error_body_limit: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("repository", &self.repository)
            .field("api_base_url", &self.api_base_url)
            .field("language", &self.language)
            .field("status_done", &self.status_done)
            .field("schema", &self.schema)
            .field("summary_limit", &self.summary_limit)
            .field("error_body_limit", &self.error_body_limit)
            .finish()
    }
}

impl Config {
    /// Create a configuration with defaults for everything but the required values.
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            database_id: database_id.into(),
            repository: DEFAULT_REPOSITORY.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            language: Language::default(),
            status_done: DEFAULT_STATUS_DONE.to_string(),
            schema: PropertySchema::default(),
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            error_body_limit: DEFAULT_ERROR_BODY_LIMIT,
        }
    }

    /// Resolve configuration from an env lookup and an optional file.
    ///
    /// Empty values count as absent. All missing required values are
    /// reported together in a single [`Error::MissingConfig`].
    pub fn load<F>(file: Option<&ConfigFile>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let file = file.cloned().unwrap_or_default();

        let token = get(ENV_TOKEN);
        let database_id = get(ENV_DATABASE_ID).or(file.database_id);

        let mut missing = Vec::new();
        if token.is_none() {
            missing.push(ENV_TOKEN.to_string());
        }
        if database_id.is_none() {
            missing.push(ENV_DATABASE_ID.to_string());
        }
        let (Some(token), Some(database_id)) = (token, database_id) else {
            return Err(Error::MissingConfig(missing));
        };

        let language = match get(ENV_LANG) {
            Some(raw) => raw.parse().map_err(Error::InvalidConfig)?,
            None => file.language.unwrap_or_default(),
        };

        let mut schema = file.properties.unwrap_or_default();
        if let Some(title) = get(ENV_TITLE_PROP) {
            schema.title = title;
        }

        let api_base_url = get(ENV_API_URL)
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let config = Self {
            token,
            database_id,
            repository: get(ENV_REPOSITORY)
                .or(file.repository)
                .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string()),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            language,
            status_done: file
                .status
                .unwrap_or_else(|| DEFAULT_STATUS_DONE.to_string()),
            schema,
            summary_limit: file.summary_limit.unwrap_or(DEFAULT_SUMMARY_LIMIT),
            error_body_limit: file.error_body_limit.unwrap_or(DEFAULT_ERROR_BODY_LIMIT),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values that can be wrong without being missing.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api_base_url).map_err(|e| {
            Error::InvalidConfig(format!("invalid API URL '{}': {e}", self.api_base_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "API URL must be http(s), got '{}'",
                self.api_base_url
            )));
        }
        if self.database_id.contains('/') {
            return Err(Error::InvalidConfig(format!(
                "database ID must not contain '/': '{}'",
                self.database_id
            )));
        }
        Ok(())
    }
}
