use std::fmt::{Display, Formatter, Result as FmtResult};

/// Whether a catalog entry is a film or a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    Movie,
    Tv,
}
impl MediaKind {
    /// `Tv` iff the path contains a `/tv/` segment.
    pub fn from_reference_path(path: &str) -> Self {
        if path.contains("/tv/") { Self::Tv } else { Self::Movie }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}
impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
