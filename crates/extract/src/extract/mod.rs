//! Page extraction for the three upstream page types.
//!
//! Each page type sits behind its own [`PageExtractor`], so when the catalog
//! changes its markup only one implementation needs replacing.

mod item;
mod listing;
mod player;
mod search;

pub use self::listing::ListingExtractor;
pub use self::player::PlayerExtractor;
pub use self::search::SearchExtractor;
use scraper::Html;

/// Turns one kind of upstream page into structured data.
///
/// Extraction never fails. Markup that doesn't match simply yields empty
/// fields, empty lists or no locator; structural absence is data.
///
/// # Examples
///
/// ```rust
/// use reel_extract::{PageExtractor, SearchExtractor};
/// let html = r#"
///     <div class="film_list-wrap">
///         <div class="flw-item">
///             <div class="film-poster">
///                 <a href="/movie/avatar-19690" title="Avatar"></a>
///                 <img data-src="/posters/avatar.jpg">
///             </div>
///         </div>
///     </div>
/// "#;
///
/// let entries = SearchExtractor::new("https://himovies.sx").extract(html);
/// assert_eq!(entries[0].id, "19690");
/// assert_eq!(entries[0].poster_url, "https://himovies.sx/posters/avatar.jpg");
/// ```
pub trait PageExtractor {
    type Output;

    /// Parse raw HTML and extract from it.
    fn extract(&self, html: &str) -> Self::Output {
        self.extract_document(&Html::parse_document(html))
    }

    /// Extract from an already-parsed document.
    fn extract_document(&self, document: &Html) -> Self::Output;
}
