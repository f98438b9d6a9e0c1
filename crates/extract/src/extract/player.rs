use scraper::Html;
use tracing::instrument;

use super::PageExtractor;
use super::item::first_attr;
use crate::consts;
use crate::models::{Locator, ResolutionKind};

/// Result of a single player-discovery strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// Nothing here, try the next strategy.
    NoMatch,
    /// An embed reference that still needs normalizing. An empty reference
    /// counts as [`Step::NoMatch`].
    Embed(String),
    /// A direct media source; the chain stops and the URL is used verbatim.
    Direct(Locator),
}

type Strategy = fn(&Html) -> Step;

/// Strategies in priority order. The first one to produce a locator wins.
const STRATEGIES: [(&str, Strategy); 4] = [
    ("embed_container", embed_container),
    ("inline_script", inline_script),
    ("data_attribute", data_attribute),
    ("generic_iframe", generic_iframe),
];

/// Finds the best player locator on a watch page.
///
/// Returns `None` when every strategy comes up empty; the caller decides
/// what to fall back to.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerExtractor;
impl PageExtractor for PlayerExtractor {
    type Output = Option<Locator>;

    #[instrument(level = "trace", skip_all)]
    fn extract_document(&self, document: &Html) -> Self::Output {
        for (name, strategy) in STRATEGIES {
            let locator = match strategy(document) {
                Step::NoMatch => continue,
                Step::Embed(url) if url.trim().is_empty() => continue,
                Step::Embed(url) => Locator::iframe(url),
                Step::Direct(locator) => locator,
            };
            tracing::debug!(strategy = name, kind = %locator.kind, url = %locator.url, "player located");
            return Some(locator);
        }
        tracing::debug!("no player strategy matched");
        None
    }
}

/// A known player container or deferred-load iframe.
fn embed_container(document: &Html) -> Step {
    document
        .select(&consts::EMBED_CONTAINER_SELECTOR)
        .next()
        .and_then(|el| first_attr(&el, &["src", "data-src"]))
        .map_or(Step::NoMatch, |url| Step::Embed(url.to_string()))
}

/// Scan inline scripts in document order.
///
/// Within one script a known embed host outranks an `.m3u8`, which outranks
/// an `.mp4`. An embed host match stops the scan even though the chain goes
/// on to normalize it.
fn inline_script(document: &Html) -> Step {
    for script in document.select(&consts::SCRIPT_SELECTOR) {
        let body: String = script.text().collect();
        if body.trim().is_empty() {
            continue;
        }
        if let Some(found) = consts::EMBED_HOST_REGEX.find(&body) {
            return Step::Embed(format!("https://{}", found.as_str()));
        }
        if let Some(found) = consts::HLS_REGEX.captures(&body).and_then(|c| c.get(1)) {
            return Step::Direct(Locator::new(found.as_str(), ResolutionKind::Hls));
        }
        if let Some(found) = consts::MP4_REGEX.captures(&body).and_then(|c| c.get(1)) {
            return Step::Direct(Locator::new(found.as_str(), ResolutionKind::Video));
        }
    }
    Step::NoMatch
}

/// The first element carrying any deferred-load data attribute.
fn data_attribute(document: &Html) -> Step {
    document
        .select(&consts::DATA_ATTRIBUTE_SELECTOR)
        .next()
        .and_then(|el| first_attr(&el, &consts::DATA_ATTRIBUTES))
        .map_or(Step::NoMatch, |url| Step::Embed(url.to_string()))
}

/// Any iframe whose source mentions a player keyword.
fn generic_iframe(document: &Html) -> Step {
    document
        .select(&consts::IFRAME_SELECTOR)
        .filter_map(|iframe| first_attr(&iframe, &["src", "data-src"]))
        .find(|src| consts::IFRAME_KEYWORDS.iter().any(|keyword| src.contains(keyword)))
        .map_or(Step::NoMatch, |url| Step::Embed(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn locate(body: &str) -> Option<Locator> {
        PlayerExtractor.extract(&format!("<html><body>{body}</body></html>"))
    }

    #[rstest]
    #[case::container_src(r#"<iframe id="iframe-embed" src="https://vidsrc.to/embed/movie/1"></iframe>"#, "https://vidsrc.to/embed/movie/1")]
    #[case::container_data_src(r#"<div class="player-iframe" data-src="//rabbitstream.net/e/1"></div>"#, "//rabbitstream.net/e/1")]
    #[case::lazy_iframe(r#"<iframe data-src="/ajax/embed/1"></iframe>"#, "/ajax/embed/1")]
    #[case::data_embed_url(r#"<div data-embed-url="https://a.example/e" data-player="https://b.example/p"></div>"#, "https://a.example/e")]
    #[case::data_player(r#"<button data-player="/player/2"></button>"#, "/player/2")]
    #[case::keyword_iframe(r#"<iframe src="https://ads.example/banner"></iframe><iframe src="https://host.example/player/9"></iframe>"#, "https://host.example/player/9")]
    fn test_embed_strategies(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(locate(body), Some(Locator::iframe(expected)));
    }

    #[test]
    fn test_hls_in_script() {
        let locator = locate(r#"<script>var src="https://cdn.x/video.m3u8?t=1";</script>"#).unwrap();
        assert_eq!(locator.kind, ResolutionKind::Hls);
        assert_eq!(locator.url, "https://cdn.x/video.m3u8?t=1");
    }

    #[test]
    fn test_mp4_in_script() {
        let locator = locate(r#"<script>player.load('https://cdn.x/movie.mp4');</script>"#).unwrap();
        assert_eq!(locator, Locator::new("https://cdn.x/movie.mp4", ResolutionKind::Video));
    }

    #[test]
    fn test_embed_host_outranks_media_in_the_same_script() {
        let locator = locate(
            r#"<script>
                var stream = "https://cdn.x/video.m3u8";
                var embed = "https://vidplay.net/e/abc";
            </script>"#,
        )
        .unwrap();
        assert_eq!(locator, Locator::iframe("https://vidplay.net/e/abc"));
    }

    #[test]
    fn test_embed_host_match_is_prefixed() {
        let locator = locate(r#"<script>load("//VIDSRC.pro/embed/tv/5");</script>"#).unwrap();
        assert_eq!(locator, Locator::iframe("https://VIDSRC.pro/embed/tv/5"));
    }

    #[test]
    fn test_earlier_script_wins() {
        let locator = locate(
            r#"<script>var a = "https://cdn.x/first.mp4";</script>
               <script>var b = "https://cdn.x/second.m3u8";</script>"#,
        )
        .unwrap();
        assert_eq!(locator.url, "https://cdn.x/first.mp4");
    }

    #[test]
    fn test_embed_host_in_earlier_script_stops_the_scan() {
        let locator = locate(
            r#"<script>var embed = "https://vidplay.net/e/x";</script>
               <script>var src = "https://cdn.x/v.m3u8";</script>"#,
        )
        .unwrap();
        assert_eq!(locator, Locator::iframe("https://vidplay.net/e/x"));
    }

    #[test]
    fn test_container_outranks_script() {
        let locator = locate(
            r#"<iframe id="player-iframe" src="/e/1"></iframe>
               <script>var src = "https://cdn.x/video.m3u8";</script>"#,
        )
        .unwrap();
        assert_eq!(locator, Locator::iframe("/e/1"));
    }

    #[test]
    fn test_empty_container_continues_the_chain() {
        let locator = locate(
            r#"<div id="iframe-embed" src=""></div>
               <script>var src = "https://cdn.x/video.m3u8";</script>"#,
        )
        .unwrap();
        assert_eq!(locator.kind, ResolutionKind::Hls);
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(locate(r#"<iframe src="https://ads.example/banner"></iframe><script>init();</script>"#), None);
        assert_eq!(locate(""), None);
    }
}
