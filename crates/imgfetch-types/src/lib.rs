//! Shared types for imgfetch
//!
//! This crate contains the plain data structures shared between
//! the CLI and the core library.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory images are written to when none is configured
pub const DEFAULT_DOWNLOAD_DIR: &str = "Fetched_Images";

/// Filename used when a URL has no trailing path segment
pub const DEFAULT_FILENAME: &str = "downloaded_image.jpg";

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Options
// ============================================================================

/// Options controlling how images are fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    pub download_dir: PathBuf,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("imgfetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

// ============================================================================
// Fetch Records
// ============================================================================

/// How a single URL ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    Saved,
    NotImage,
    Duplicate,
    TransportError,
    LocalError,
}

impl FetchStatus {
    /// Whether the image ended up on disk
    pub fn is_saved(self) -> bool {
        self == FetchStatus::Saved
    }
}

/// Serializable summary of one fetch, used for machine-readable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRecord {
    pub url: String,
    pub status: FetchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FetchRecord {
    pub fn new(url: impl Into<String>, status: FetchStatus) -> Self {
        Self {
            url: url.into(),
            status,
            filename: None,
            path: None,
            digest: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_original_behavior() {
        let options = FetchOptions::default();
        assert_eq!(options.download_dir, PathBuf::from("Fetched_Images"));
        assert_eq!(options.timeout_secs, 10);
        assert!(options.user_agent.starts_with("imgfetch/"));
    }

    #[test]
    fn partial_options_fill_in_defaults() {
        let options: FetchOptions = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(options.timeout_secs, 3);
        assert_eq!(options.download_dir, PathBuf::from(DEFAULT_DOWNLOAD_DIR));
    }

    #[test]
    fn record_omits_empty_fields() {
        let record = FetchRecord::new("https://example.com/x", FetchStatus::NotImage);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"url":"https://example.com/x","status":"not_image"}"#);
    }
}
