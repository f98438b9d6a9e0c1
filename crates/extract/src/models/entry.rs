use super::MediaKind;

/// One movie or series as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CatalogEntry {
    /// Trailing numeric-ish suffix of the reference path (may be empty).
    pub id: String,
    pub title: String,
    /// Catalog-relative path, e.g. `/movie/avatar-19690`.
    pub reference_path: String,
    /// Always absolute.
    pub poster_url: String,
    pub media_kind: MediaKind,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub quality: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub year: Option<String>,
    /// Year and quality joined by a space, trimmed.
    pub info_label: String,
}
impl CatalogEntry {
    /// The substring after the last `-` of the final path segment.
    ///
    /// When that segment has no hyphen the last `-` of the whole path is used
    /// instead, so the id is only empty for paths without any hyphen.
    ///
    /// ```
    /// use reel_extract::models::CatalogEntry;
    /// assert_eq!(CatalogEntry::id_from_reference_path("/movie/avatar-19690"), "19690");
    /// assert_eq!(CatalogEntry::id_from_reference_path("/watch-movie/avatar"), "movie/avatar");
    /// assert_eq!(CatalogEntry::id_from_reference_path("/movie/avatar"), "");
    /// ```
    pub fn id_from_reference_path(path: &str) -> &str {
        let path = path.trim_end_matches('/');
        let segment = path.rsplit('/').next().unwrap_or_default();
        segment
            .rsplit_once('-')
            .or_else(|| path.rsplit_once('-'))
            .map(|(_, id)| id)
            .unwrap_or_default()
    }

    /// Build the human-readable info label from the optional parts.
    pub fn info_label(year: Option<&str>, quality: Option<&str>) -> String {
        format!("{} {}", year.unwrap_or_default(), quality.unwrap_or_default()).trim().to_string()
    }
}
