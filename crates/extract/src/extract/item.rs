//! Extraction of a single `.flw-item` card, shared by listings and search.

use crate::consts;
use crate::models::{CatalogEntry, MediaKind};
use crate::url::absolute_url;
use scraper::{ElementRef, Selector};
use tracing::instrument;

/// Which optional badges a card is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Badges {
    /// Home-page cards carry a quality badge on the poster.
    QualityAndYear,
    /// Search-result cards only carry the year.
    YearOnly,
}

/// Trimmed text of the first descendant matching `selector`.
fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// First non-empty attribute out of `names`, in order.
pub(crate) fn first_attr<'a>(element: &ElementRef<'a>, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| element.value().attr(name).filter(|v| !v.is_empty()))
}

#[instrument(level = "trace", skip(item), fields(href))]
pub(crate) fn catalog_entry(item: ElementRef<'_>, origin: &str, badges: Badges) -> CatalogEntry {
    let link = item.select(&consts::POSTER_LINK_SELECTOR).next();
    let detail = item.select(&consts::DETAIL_SELECTOR).next();
    let href = link.and_then(|a| a.value().attr("href")).unwrap_or_default().to_string();
    tracing::Span::current().record("href", href.as_str());
    let title = link
        .and_then(|a| a.value().attr("title"))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| detail.and_then(|d| first_text(d, &consts::NAME_SELECTOR)))
        .unwrap_or_default();
    let poster = item
        .select(&consts::POSTER_IMAGE_SELECTOR)
        .next()
        .and_then(|img| first_attr(&img, &["data-src", "src"]))
        .unwrap_or_default();
    let quality = match badges {
        Badges::QualityAndYear => first_text(item, &consts::QUALITY_SELECTOR),
        Badges::YearOnly => None,
    };
    let year = detail.and_then(|d| first_text(d, &consts::YEAR_SELECTOR));
    CatalogEntry {
        id: CatalogEntry::id_from_reference_path(&href).to_string(),
        title,
        poster_url: absolute_url(poster, origin),
        media_kind: MediaKind::from_reference_path(&href),
        info_label: CatalogEntry::info_label(year.as_deref(), quality.as_deref()),
        quality,
        year,
        reference_path: href,
    }
}
