use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Top-level namespace of a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheCategory {
    Movies,
    Search,
    Player,
}
impl CacheCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheCategory::Movies => "movies",
            CacheCategory::Search => "search",
            CacheCategory::Player => "player",
        }
    }
}
impl FromStr for CacheCategory {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "movies" => Self::Movies,
            "search" => Self::Search,
            "player" => Self::Player,
            _ => exn::bail!(ErrorKind::InvalidData("category")),
        })
    }
}
impl Display for CacheCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A hierarchical cache address, displayed as `cache/{category}/{key}`.
///
/// ```
/// use reel_cache::{CacheCategory, CacheKey};
/// let key = CacheKey::new(CacheCategory::Movies, "movies_trending");
/// assert_eq!(key.to_string(), "cache/movies/movies_trending");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    category: CacheCategory,
    key: String,
}
impl CacheKey {
    pub fn new(category: CacheCategory, key: impl Into<String>) -> Self {
        Self {
            category,
            key: key.into(),
        }
    }

    pub fn category(&self) -> CacheCategory {
        self.category
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
impl Display for CacheKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "cache/{}/{}", self.category, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CacheCategory::Movies, "movies_latest-tv", "cache/movies/movies_latest-tv")]
    #[case(CacheCategory::Search, "search_the_office", "cache/search/search_the_office")]
    #[case(CacheCategory::Player, "player__movie_avatar-19690", "cache/player/player__movie_avatar-19690")]
    fn test_display(#[case] category: CacheCategory, #[case] key: &str, #[case] expected: &str) {
        assert_eq!(CacheKey::new(category, key).to_string(), expected);
    }

    #[test]
    fn test_category_round_trip() {
        for category in [CacheCategory::Movies, CacheCategory::Search, CacheCategory::Player] {
            assert_eq!(category.as_str().parse::<CacheCategory>().unwrap(), category);
        }
        assert!("episodes".parse::<CacheCategory>().is_err());
    }
}
