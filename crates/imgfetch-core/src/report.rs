//! Turning fetch results into console lines and serializable records

use crate::error::FetchError;
use crate::fetcher::FetchOutcome;
use imgfetch_types::{FetchRecord, FetchStatus};

/// Human-readable status lines for one fetch
pub fn status_lines(url: &str, result: &Result<FetchOutcome, FetchError>) -> Vec<String> {
    match result {
        Ok(FetchOutcome::Saved { filename, path, .. }) => vec![
            format!("✓ Successfully fetched: {}", filename),
            format!("✓ Image saved to {}", path.display()),
        ],
        Ok(FetchOutcome::NotImage { .. }) => vec![format!("✗ Skipped (not an image): {}", url)],
        Ok(FetchOutcome::Duplicate { filename, .. }) => {
            vec![format!("✗ Duplicate skipped: {}", filename)]
        }
        Err(FetchError::Transport(e)) => vec![format!("✗ Connection error: {}", e)],
        Err(e @ FetchError::Io(_)) => vec![format!("✗ An error occurred: {}", e)],
    }
}

/// Machine-readable record for one fetch
pub fn record(url: &str, result: &Result<FetchOutcome, FetchError>) -> FetchRecord {
    match result {
        Ok(FetchOutcome::Saved {
            filename,
            path,
            digest,
        }) => FetchRecord {
            filename: Some(filename.clone()),
            path: Some(path.clone()),
            digest: Some(digest.clone()),
            ..FetchRecord::new(url, FetchStatus::Saved)
        },
        Ok(FetchOutcome::NotImage { content_type }) => FetchRecord {
            error: Some(format!("content type {:?} is not an image", content_type)),
            ..FetchRecord::new(url, FetchStatus::NotImage)
        },
        Ok(FetchOutcome::Duplicate { filename, digest }) => FetchRecord {
            filename: Some(filename.clone()),
            digest: Some(digest.clone()),
            ..FetchRecord::new(url, FetchStatus::Duplicate)
        },
        Err(e) => {
            let status = if e.is_transport() {
                FetchStatus::TransportError
            } else {
                FetchStatus::LocalError
            };
            FetchRecord {
                error: Some(e.to_string()),
                ..FetchRecord::new(url, status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn saved_prints_two_lines() {
        let result = Ok(FetchOutcome::Saved {
            filename: "a.png".to_string(),
            path: PathBuf::from("Fetched_Images").join("a.png"),
            digest: "00".to_string(),
        });
        let lines = status_lines("https://example.com/a.png", &result);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "✓ Successfully fetched: a.png");
        assert!(lines[1].starts_with("✓ Image saved to Fetched_Images"));
    }

    #[test]
    fn skips_print_one_line() {
        let not_image = Ok(FetchOutcome::NotImage {
            content_type: "text/html".to_string(),
        });
        assert_eq!(
            status_lines("https://example.com/x", &not_image),
            vec!["✗ Skipped (not an image): https://example.com/x".to_string()]
        );

        let dup = Ok(FetchOutcome::Duplicate {
            filename: "b.png".to_string(),
            digest: "00".to_string(),
        });
        assert_eq!(
            status_lines("https://example.com/b.png", &dup),
            vec!["✗ Duplicate skipped: b.png".to_string()]
        );
    }

    #[test]
    fn local_errors_use_generic_message() {
        let result = Err(FetchError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        )));
        assert_eq!(
            status_lines("https://example.com/a.png", &result),
            vec!["✗ An error occurred: permission denied".to_string()]
        );

        let rec = record("https://example.com/a.png", &result);
        assert_eq!(rec.status, FetchStatus::LocalError);
        assert_eq!(rec.error.as_deref(), Some("permission denied"));
        assert_eq!(rec.path, None);
    }

    #[test]
    fn saved_record_carries_path_and_digest() {
        let result = Ok(FetchOutcome::Saved {
            filename: "a.png".to_string(),
            path: PathBuf::from("out/a.png"),
            digest: "abc".to_string(),
        });
        let rec = record("https://example.com/a.png", &result);
        assert!(rec.status.is_saved());
        assert_eq!(rec.filename.as_deref(), Some("a.png"));
        assert_eq!(rec.path, Some(PathBuf::from("out/a.png")));
        assert_eq!(rec.digest.as_deref(), Some("abc"));
        assert_eq!(rec.error, None);
    }
}
