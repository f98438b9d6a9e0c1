use scraper::Html;
use tracing::instrument;

use super::PageExtractor;
use super::item::{Badges, catalog_entry};
use crate::consts;
use crate::models::CatalogEntry;

/// Extracts every result card of a search page.
///
/// Search results carry no quality badge and are not truncated.
#[derive(Debug, Clone)]
pub struct SearchExtractor {
    origin: String,
}
impl SearchExtractor {
    pub fn new(origin: impl Into<String>) -> Self {
        Self { origin: origin.into() }
    }
}
impl PageExtractor for SearchExtractor {
    type Output = Vec<CatalogEntry>;

    #[instrument(level = "trace", skip_all)]
    fn extract_document(&self, document: &Html) -> Self::Output {
        document
            .select(&consts::ITEM_SELECTOR)
            .map(|item| catalog_entry(item, &self.origin, Badges::YearOnly))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://himovies.sx";

    #[test]
    fn test_search_results() {
        let results: String = (0..30)
            .map(|n| {
                format!(
                    r#"<div class="flw-item">
                        <div class="film-poster">
                            <span class="fdi-item">HD</span>
                            <img src="https://img.himovies.sx/{n}.jpg">
                            <a href="/movie/batman-{n}" title="Batman {n}"></a>
                        </div>
                        <div class="film-detail"><div class="fd-infor"><span class="fdi-item">19{n:02}</span></div></div>
                    </div>"#
                )
            })
            .collect();
        let html = format!(r#"<div class="film_list-wrap">{results}</div>"#);
        let entries = SearchExtractor::new(ORIGIN).extract(&html);
        assert_eq!(entries.len(), 30);
        assert_eq!(entries[7].id, "7");
        assert_eq!(entries[7].title, "Batman 7");
        assert_eq!(entries[7].poster_url, "https://img.himovies.sx/7.jpg");
        assert_eq!(entries[7].quality, None);
        assert_eq!(entries[7].year.as_deref(), Some("1907"));
        assert_eq!(entries[7].info_label, "1907");
    }

    #[test]
    fn test_no_results() {
        let html = r#"<div class="film_list-wrap"><p>No results found</p></div>"#;
        assert!(SearchExtractor::new(ORIGIN).extract(html).is_empty());
    }
}
