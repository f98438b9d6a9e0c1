use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

/// Listings are truncated to this many entries per section.
pub const LISTING_LIMIT: usize = 20;

/// Substrings that mark a generic `<iframe>` as a player embed.
pub(crate) const IFRAME_KEYWORDS: [&str; 3] = ["embed", "player", "vidsrc"];

/// Deferred-load data attributes probed on arbitrary elements, in priority order.
pub(crate) const DATA_ATTRIBUTES: [&str; 3] = ["data-embed-url", "data-src", "data-player"];

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Listing and search pages.
selector!(BLOCK_SELECTOR, ".block_area");
selector!(BLOCK_HEADING_SELECTOR, "h2");
selector!(ITEM_SELECTOR, ".film_list-wrap .flw-item");
selector!(POSTER_LINK_SELECTOR, ".film-poster a");
selector!(POSTER_IMAGE_SELECTOR, ".film-poster img");
selector!(QUALITY_SELECTOR, ".film-poster .fdi-item");
selector!(DETAIL_SELECTOR, ".film-detail");
selector!(NAME_SELECTOR, ".film-name a");
selector!(YEAR_SELECTOR, ".fd-infor .fdi-item");

// Watch pages.
selector!(EMBED_CONTAINER_SELECTOR, "#iframe-embed, #player-iframe, .player-iframe, iframe[data-src]");
selector!(SCRIPT_SELECTOR, "script");
selector!(DATA_ATTRIBUTE_SELECTOR, "[data-embed-url], [data-src], [data-player]");
selector!(IFRAME_SELECTOR, "iframe");
regex!(EMBED_HOST_REGEX, r#"(?i)(?:vidsrc|vidplay|embed)\.(?:to|pro|net|cc)/[^\s"']+"#);
regex!(HLS_REGEX, r#"(https?://[^\s"']+\.m3u8[^\s"']*)"#);
regex!(MP4_REGEX, r#"(https?://[^\s"']+\.mp4[^\s"']*)"#);
