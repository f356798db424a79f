//! Filename derivation from the request URL.

use imgfetch_types::DEFAULT_FILENAME;
use url::Url;

/// Last segment of the URL path, or [`DEFAULT_FILENAME`] when there is none.
///
/// Different URLs can map to the same name; the later write wins.
pub fn filename_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path()
                .rsplit('/')
                .next()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}
