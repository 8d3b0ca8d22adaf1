//! Locating and parsing the webhook payload

use crate::error::{Error, Result};
use crate::types::EventPayload;
use std::path::{Path, PathBuf};

/// Env var holding the payload JSON inline
pub const ENV_PAYLOAD_JSON: &str = "PR_PAYLOAD_JSON";
/// Env var holding the path of the payload file (set by GitHub Actions)
pub const ENV_EVENT_PATH: &str = "GITHUB_EVENT_PATH";

/// Where the payload comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    /// JSON file on disk
    File(PathBuf),
    /// JSON text
    Inline(String),
}

impl EventSource {
    /// Pick the payload source: explicit path, then inline env JSON, then
    /// the GitHub Actions event file.
    pub fn resolve<F>(explicit: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(path) = explicit {
            return Ok(Self::File(path.to_path_buf()));
        }
        if let Some(json) = get(ENV_PAYLOAD_JSON) {
            return Ok(Self::Inline(json));
        }
        if let Some(path) = get(ENV_EVENT_PATH) {
            return Ok(Self::File(PathBuf::from(path)));
        }
        Err(Error::MissingConfig(vec![ENV_PAYLOAD_JSON.to_string()]))
    }

    /// Read and parse the payload.
    pub fn load(&self) -> Result<EventPayload> {
        match self {
            Self::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_payload(&text)
            }
            Self::Inline(text) => parse_payload(text),
        }
    }
}

/// Parse a webhook payload.
pub fn parse_payload(text: &str) -> Result<EventPayload> {
    serde_json::from_str(text).map_err(|e| Error::InvalidEvent(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let source = EventSource::resolve(Some(Path::new("/tmp/e.json")), |_| {
            Some("{}".to_string())
        })
        .unwrap();
        assert_eq!(source, EventSource::File(PathBuf::from("/tmp/e.json")));
    }

    #[test]
    fn test_inline_json_before_event_path() {
        let source = EventSource::resolve(None, |k| match k {
            ENV_PAYLOAD_JSON => Some("{\"pull_request\":null}".to_string()),
            ENV_EVENT_PATH => Some("/github/workflow/event.json".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(matches!(source, EventSource::Inline(_)));
    }

    #[test]
    fn test_event_path_fallback() {
        let source = EventSource::resolve(None, |k| {
            (k == ENV_EVENT_PATH).then(|| "/github/workflow/event.json".to_string())
        })
        .unwrap();
        assert_eq!(
            source,
            EventSource::File(PathBuf::from("/github/workflow/event.json"))
        );
    }

    #[test]
    fn test_no_source_is_missing_config() {
        let err = EventSource::resolve(None, |_| None).unwrap_err();
        assert!(matches!(err, Error::MissingConfig(ref names) if names == &[ENV_PAYLOAD_JSON]));
    }

    #[test]
    fn test_invalid_json_is_invalid_event() {
        let err = EventSource::Inline("{not json".to_string()).load().unwrap_err();
        assert!(matches!(err, Error::InvalidEvent(_)));
    }

    #[test]
    fn test_payload_without_pull_request() {
        let payload = parse_payload(r#"{"action":"opened"}"#).unwrap();
        assert!(payload.pull_request.is_none());
    }
}
