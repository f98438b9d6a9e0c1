use scraper::{ElementRef, Html};
use tracing::instrument;

use super::PageExtractor;
use super::item::{Badges, catalog_entry};
use crate::consts;
use crate::models::{CatalogEntry, Section};

/// Extracts one titled section of the catalog's home page.
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    origin: String,
    section: Section,
}
impl ListingExtractor {
    pub fn new(origin: impl Into<String>, section: Section) -> Self {
        Self {
            origin: origin.into(),
            section,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Whether a `.block_area` is headed by this extractor's section label.
    fn is_section_block(&self, block: &ElementRef<'_>) -> bool {
        block
            .select(&consts::BLOCK_HEADING_SELECTOR)
            .any(|h2| h2.text().collect::<String>().contains(self.section.label()))
    }

    /// Whether a matching block sits inside another matching block, whose
    /// items already include its own.
    fn is_nested_block(&self, block: &ElementRef<'_>) -> bool {
        block
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|outer| consts::BLOCK_SELECTOR.matches(&outer) && self.is_section_block(&outer))
    }
}
impl PageExtractor for ListingExtractor {
    type Output = Vec<CatalogEntry>;

    #[instrument(level = "trace", skip_all, fields(section = %self.section))]
    fn extract_document(&self, document: &Html) -> Self::Output {
        let entries: Vec<CatalogEntry> = document
            .select(&consts::BLOCK_SELECTOR)
            .filter(|block| self.is_section_block(block) && !self.is_nested_block(block))
            .flat_map(|block| block.select(&consts::ITEM_SELECTOR))
            .take(consts::LISTING_LIMIT)
            .map(|item| catalog_entry(item, &self.origin, Badges::QualityAndYear))
            .collect();
        tracing::trace!(count = entries.len(), "extracted listing");
        entries
    }
}
