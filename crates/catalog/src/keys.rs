//! Cache key derivation for each operation.

use regex::Regex;
use reel_cache::{CacheCategory, CacheKey};
use reel_extract::models::Section;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// `movies_{section}`
pub(crate) fn listing(section: Section) -> CacheKey {
    CacheKey::new(CacheCategory::Movies, format!("movies_{}", section.as_str()))
}

/// `search_{query}`, lowercased with whitespace runs collapsed to `_`.
pub(crate) fn search(query: &str) -> CacheKey {
    let query = query.to_lowercase();
    CacheKey::new(CacheCategory::Search, format!("search_{}", WHITESPACE.replace_all(&query, "_")))
}

/// `player_{href}` with every `/` replaced by `_`.
pub(crate) fn player(href: &str) -> CacheKey {
    CacheKey::new(CacheCategory::Player, format!("player_{}", href.replace('/', "_")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Section::Trending, "cache/movies/movies_trending")]
    #[case(Section::LatestMovies, "cache/movies/movies_latest-movies")]
    #[case(Section::LatestTv, "cache/movies/movies_latest-tv")]
    fn test_listing(#[case] section: Section, #[case] expected: &str) {
        assert_eq!(listing(section).to_string(), expected);
    }

    #[rstest]
    #[case("Dune", "search_dune")]
    #[case("The  Office", "search_the_office")]
    #[case(" star\twars ", "search__star_wars_")]
    fn test_search(#[case] query: &str, #[case] expected: &str) {
        assert_eq!(search(query).key(), expected);
    }

    #[test]
    fn test_player() {
        assert_eq!(player("/movie/avatar-19690").key(), "player__movie_avatar-19690");
        assert_eq!(player("/tv/the-office-4221").category(), CacheCategory::Player);
    }
}
