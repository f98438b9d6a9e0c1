use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use super::sanitize;
use crate::error::{Error, ErrorKind};
use crate::url::normalize_locator;

/// Message attached to a resolution that fell back to the watch page.
pub const FALLBACK_MESSAGE: &str = "no embedded player found";

/// How the player URL of a [`PlayerResolution`] should be consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResolutionKind {
    /// An `.m3u8` adaptive stream, playable directly.
    Hls,
    /// A progressive `.mp4` file, playable directly.
    Video,
    /// A third-party embed to be framed.
    Iframe,
    /// Nothing better was found; the watch page itself.
    Page,
}
impl ResolutionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionKind::Hls => "hls",
            ResolutionKind::Video => "video",
            ResolutionKind::Iframe => "iframe",
            ResolutionKind::Page => "page",
        }
    }

    /// Direct media sources are returned verbatim, never normalized.
    pub fn is_direct_media(&self) -> bool {
        matches!(self, Self::Hls | Self::Video)
    }
}
impl FromStr for ResolutionKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "hls" | "m3u8" => Self::Hls,
            "video" | "mp4" => Self::Video,
            "iframe" | "embed" => Self::Iframe,
            "page" => Self::Page,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "resolution_kind",
                value: s.to_string(),
            }),
        })
    }
}
impl Display for ResolutionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A player reference found on a watch page, not yet normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub url: String,
    pub kind: ResolutionKind,
}
impl Locator {
    pub fn new(url: impl Into<String>, kind: ResolutionKind) -> Self {
        Self { url: url.into(), kind }
    }

    pub fn iframe(url: impl Into<String>) -> Self {
        Self::new(url, ResolutionKind::Iframe)
    }
}

/// The outcome of resolving one catalog entry to something playable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerResolution {
    pub success: bool,
    pub resolution_kind: ResolutionKind,
    pub player_url: String,
    pub watch_url: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub message: Option<String>,
}
impl PlayerResolution {
    /// Turn the result of the strategy chain into a resolution.
    ///
    /// - Direct media locators (`hls`, `video`) are used verbatim.
    /// - Embed locators are normalized against `origin`.
    /// - No locator at all falls back to the watch page itself.
    pub fn from_locator(locator: Option<Locator>, origin: &str, watch_url: impl Into<String>) -> Self {
        let watch_url = watch_url.into();
        match locator {
            Some(Locator { url, kind }) if kind.is_direct_media() => Self {
                success: true,
                resolution_kind: kind,
                player_url: url,
                watch_url,
                message: None,
            },
            Some(Locator { url, .. }) => Self {
                success: true,
                resolution_kind: ResolutionKind::Iframe,
                player_url: normalize_locator(&url, origin),
                watch_url,
                message: None,
            },
            None => Self::fallback(watch_url),
        }
    }

    /// The degraded-but-successful outcome: play the watch page itself.
    pub fn fallback(watch_url: impl Into<String>) -> Self {
        let watch_url = watch_url.into();
        Self {
            success: true,
            resolution_kind: ResolutionKind::Page,
            player_url: watch_url.clone(),
            watch_url,
            message: Some(FALLBACK_MESSAGE.to_string()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.resolution_kind == ResolutionKind::Page
    }
}
