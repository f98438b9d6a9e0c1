//! The catalog pipeline: fetch, extract and cache.
//!
//! [`Catalog`] is constructed once at startup from an explicit fetcher and
//! cache store and shared by every caller. Nothing in the pipeline reaches
//! for a global client or cache.

mod catalog;
pub mod error;
mod keys;
mod ttl;

pub use crate::catalog::{AllSections, Catalog};
pub use crate::ttl::Ttl;
