//! URL-to-filename mapping for persisted page content.
//!
//! Derives a relative filesystem path from a URL: the hostname first, then
//! the slugged path segments, with `.html` appended unless the extension
//! already looks like HTML.

mod slug;

pub use slug::slugify;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use url::Url;

/// Derives the relative path a fetched page is persisted under.
///
/// The URL's path is split on `/`, empty segments are dropped, and each
/// remaining segment is percent-decoded and slugged; the hostname becomes
/// the leading path component. The query string is not part of the path
/// component and does not contribute.
///
/// # Examples
///
/// - `url_to_filename("http://example.com/")` → `"example.com.html"`
/// - `url_to_filename("http://example.com/some/page")` → `"example.com/some/page.html"`
/// - `url_to_filename("http://example.com/index.htm")` → `"example.com/index.htm"`
pub fn url_to_filename(url: &str) -> Result<String> {
    let parsed = Url::parse(url).with_context(|| format!("invalid URL '{url}'"))?;
    let host = parsed
        .host_str()
        .with_context(|| format!("URL '{url}' has no host"))?;

    let mut path = PathBuf::from(host);
    for segment in parsed.path().split('/') {
        if segment.is_empty() {
            continue;
        }
        let slugged = slugify(&slug::percent_decode(segment));
        if !slugged.is_empty() {
            path.push(slugged);
        }
    }

    let mut filename = path.to_string_lossy().into_owned();
    // Literal substring test kept for compatibility with existing mirror
    // layouts: any extension containing "htm" (".htm", ".html", also
    // ".xhtml") is left alone, while anything else gets ".html" appended,
    // even an already-structured extension like ".json".
    if !extension_contains_htm(&filename) {
        filename.push_str(".html");
    }
    Ok(filename)
}

fn extension_contains_htm(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().contains("htm"))
        .unwrap_or(false)
}
