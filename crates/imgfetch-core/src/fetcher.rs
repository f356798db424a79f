//! Fetch one image: GET, check the content type, hash, dedup, save.
//!
//! Each call is self-contained. The caller owns the [`KnownHashes`] set and
//! lends it to every call of a run, so duplicates are caught across URLs
//! without any shared state inside the fetcher.

use crate::error::FetchError;
use crate::filename::filename_from_url;
use crate::hashes::{ContentHasher, KnownHashes};
use crate::report;
use crate::storage::ImageStore;
use futures::StreamExt;
use imgfetch_types::FetchOptions;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Result of a fetch that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Written to disk
    Saved {
        filename: String,
        path: PathBuf,
        digest: String,
    },
    /// Declared content type was not `image/*`
    NotImage { content_type: String },
    /// Same bytes were already saved in this run
    Duplicate { filename: String, digest: String },
}

/// HTTP image fetcher
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// The timeout bounds connecting and each wait for data, not the whole
    /// transfer, so a large image that keeps streaming is not cut off.
    pub fn new(options: &FetchOptions) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(options.timeout_secs);
        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch `url` into `download_dir`.
    ///
    /// With `known_hashes` present, content already in the set is skipped and
    /// the digest of newly saved content is added after the write succeeds.
    pub async fn fetch(
        &self,
        url: &str,
        download_dir: &Path,
        known_hashes: Option<&mut KnownHashes>,
    ) -> Result<FetchOutcome, FetchError> {
        let store = ImageStore::open(download_dir).await?;

        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!("{} -> {} ({})", url, response.status(), response.url());

        // raw bytes: values may carry non-ASCII parameters
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| v.as_bytes())
            .unwrap_or_default();

        if !content_type.starts_with(b"image/") {
            return Ok(FetchOutcome::NotImage {
                content_type: String::from_utf8_lossy(content_type).into_owned(),
            });
        }

        let filename = filename_from_url(url);

        let mut hasher = ContentHasher::new();
        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            hasher.update(&chunk);
            body.extend_from_slice(&chunk);
        }
        let digest = hasher.finalize_hex();

        if let Some(known) = known_hashes.as_deref() {
            if known.contains(&digest) {
                return Ok(FetchOutcome::Duplicate { filename, digest });
            }
        }

        let path = store.save(&filename, &body).await?;
        info!("Saved {} bytes from {} to {}", body.len(), url, path.display());

        if let Some(known) = known_hashes {
            known.insert(digest.clone());
        }

        Ok(FetchOutcome::Saved {
            filename,
            path,
            digest,
        })
    }

    /// Fetch `url`, print the status lines, and return the saved path.
    ///
    /// Never fails: every error is reported on stdout and becomes `None`.
    pub async fn fetch_image(
        &self,
        url: &str,
        download_dir: &Path,
        known_hashes: Option<&mut KnownHashes>,
    ) -> Option<PathBuf> {
        let result = self.fetch(url, download_dir, known_hashes).await;

        match &result {
            Ok(FetchOutcome::Saved { .. }) => {}
            Ok(other) => debug!("Skipped {}: {:?}", url, other),
            Err(e) => warn!(status = ?e.status(), "Fetching {} failed: {}", url, e),
        }

        for line in report::status_lines(url, &result) {
            println!("{}", line);
        }

        match result {
            Ok(FetchOutcome::Saved { path, .. }) => Some(path),
            _ => None,
        }
    }
}
