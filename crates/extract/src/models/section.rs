use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::{Error, ErrorKind};

/// A titled block of the catalog's home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Section {
    #[default]
    Trending,
    LatestMovies,
    LatestTv,
}
impl Section {
    pub const ALL: [Section; 3] = [Section::Trending, Section::LatestMovies, Section::LatestTv];

    /// Query-string form, also used in cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Trending => "trending",
            Section::LatestMovies => "latest-movies",
            Section::LatestTv => "latest-tv",
        }
    }

    /// Heading text of the block on the home page.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Trending => "Trending",
            Section::LatestMovies => "Latest Movies",
            Section::LatestTv => "Latest TV Shows",
        }
    }

    /// Parse for query parameters: only the exact query forms are
    /// recognised, anything else is [`Trending`](Section::Trending).
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}
impl FromStr for Section {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "trending" => Self::Trending,
            "latest-movies" => Self::LatestMovies,
            "latest-tv" => Self::LatestTv,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "section",
                value: s.to_string(),
            }),
        })
    }
}
impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
