mod consts;
pub mod error;
mod extract;
pub mod models;
mod url;

use tracing::instrument;

pub use crate::consts::LISTING_LIMIT;
pub use crate::extract::{ListingExtractor, PageExtractor, PlayerExtractor, SearchExtractor};
use crate::models::PlayerResolution;
pub use crate::url::{absolute_url, normalize_locator, watch_path, watch_url};

/// Easy, top-level entrypoint for resolving a watch page to something playable.
///
/// - Runs the player strategy chain over the watch page HTML,
/// - Normalizes embed locators against `origin`, and
/// - Falls back to the watch page itself when no player was found.
///
/// ```
/// use reel_extract::{models::ResolutionKind, resolve_player};
/// let html = r#"<iframe id="iframe-embed" src="//vidsrc.to/embed/movie/19690"></iframe>"#;
/// let resolution = resolve_player(html, "https://himovies.sx", "/movie/avatar-19690");
/// assert_eq!(resolution.resolution_kind, ResolutionKind::Iframe);
/// assert_eq!(resolution.player_url, "https://vidsrc.to/embed/movie/19690");
/// assert_eq!(resolution.watch_url, "https://himovies.sx/watch-movie/avatar-19690");
/// ```
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn resolve_player(html: &str, origin: &str, reference_path: &str) -> PlayerResolution {
    let locator = PlayerExtractor.extract(html);
    PlayerResolution::from_locator(locator, origin, watch_url(reference_path, origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FALLBACK_MESSAGE, ResolutionKind};

    const ORIGIN: &str = "https://himovies.sx";

    #[test]
    fn test_resolve_direct_media() {
        let html = r#"<script>var src="https://cdn.x/video.m3u8?t=1";</script>"#;
        let resolution = resolve_player(html, ORIGIN, "/tv/the-office-4221");
        assert!(resolution.success);
        assert_eq!(resolution.resolution_kind, ResolutionKind::Hls);
        assert_eq!(resolution.player_url, "https://cdn.x/video.m3u8?t=1");
        assert_eq!(resolution.watch_url, "https://himovies.sx/watch-tv/the-office-4221.1");
    }

    #[test]
    fn test_resolve_root_relative_embed() {
        let html = r#"<div data-embed-url="/ajax/embed/19690"></div>"#;
        let resolution = resolve_player(html, ORIGIN, "/movie/avatar-19690");
        assert_eq!(resolution.resolution_kind, ResolutionKind::Iframe);
        assert_eq!(resolution.player_url, "https://himovies.sx/ajax/embed/19690");
    }

    #[test]
    fn test_resolve_falls_back_to_watch_page() {
        let resolution = resolve_player("<html><body><p>Coming soon</p></body></html>", ORIGIN, "/movie/avatar-19690");
        assert!(resolution.success);
        assert_eq!(resolution.resolution_kind, ResolutionKind::Page);
        assert_eq!(resolution.player_url, "https://himovies.sx/watch-movie/avatar-19690");
        assert_eq!(resolution.player_url, resolution.watch_url);
        assert_eq!(resolution.message.as_deref(), Some(FALLBACK_MESSAGE));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_resolution_json_shape() {
        let resolution = resolve_player("", ORIGIN, "/movie/avatar-19690");
        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(json["resolutionKind"], "page");
        assert_eq!(json["playerUrl"], "https://himovies.sx/watch-movie/avatar-19690");
        assert_eq!(json["message"], FALLBACK_MESSAGE);
    }
}
