mod entry;
mod kind;
mod player;
mod section;

pub use self::entry::CatalogEntry;
pub use self::kind::MediaKind;
pub use self::player::{FALLBACK_MESSAGE, Locator, PlayerResolution, ResolutionKind};
pub use self::section::Section;

fn sanitize(s: impl AsRef<str>) -> String {
    s.as_ref().trim().to_lowercase().replace(['-', '_', ' '], "")
}
