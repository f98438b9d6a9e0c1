//! Catalog URL derivation and normalization.
//!
//! All helpers here are plain string manipulation; the catalog origin is
//! always passed in explicitly (no trailing slash).

/// Returns `true` for `http://` and `https://` URLs.
fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Prefix `origin` onto anything that isn't already an absolute URL.
///
/// Used for poster images, which the catalog serves either absolute or
/// root-relative.
pub fn absolute_url(url: &str, origin: &str) -> String {
    if is_absolute(url) { url.to_string() } else { format!("{origin}{url}") }
}

/// Normalize an embed locator into an absolute URL.
///
/// ```
/// use reel_extract::normalize_locator;
/// let origin = "https://himovies.sx";
/// assert_eq!(normalize_locator("https://vidsrc.to/e/1", origin), "https://vidsrc.to/e/1");
/// assert_eq!(normalize_locator("//cdn.example.com/e", origin), "https://cdn.example.com/e");
/// assert_eq!(normalize_locator("/ajax/embed/1", origin), "https://himovies.sx/ajax/embed/1");
/// assert_eq!(normalize_locator("vidplay.net/e/1", origin), "https://vidplay.net/e/1");
/// ```
pub fn normalize_locator(locator: &str, origin: &str) -> String {
    if is_absolute(locator) {
        locator.to_string()
    } else if locator.starts_with("//") {
        format!("https:{locator}")
    } else if locator.starts_with('/') {
        format!("{origin}{locator}")
    } else {
        format!("https://{locator}")
    }
}

/// Map a catalog reference path onto its watch-page path (no leading slash).
///
/// Series default to their first episode.
///
/// ```
/// use reel_extract::watch_path;
/// assert_eq!(watch_path("/movie/avatar-19690"), "watch-movie/avatar-19690");
/// assert_eq!(watch_path("/tv/the-office-4221"), "watch-tv/the-office-4221.1");
/// assert_eq!(watch_path("/anime/naruto-1"), "anime/naruto-1");
/// ```
pub fn watch_path(reference_path: &str) -> String {
    let slug = reference_path.strip_prefix('/').unwrap_or(reference_path);
    if let Some(rest) = slug.strip_prefix("movie/") {
        format!("watch-movie/{rest}")
    } else if let Some(rest) = slug.strip_prefix("tv/") {
        format!("watch-tv/{rest}.1")
    } else {
        slug.to_string()
    }
}

/// Full watch-page URL for a catalog reference path.
pub fn watch_url(reference_path: &str, origin: &str) -> String {
    format!("{origin}/{}", watch_path(reference_path))
}
