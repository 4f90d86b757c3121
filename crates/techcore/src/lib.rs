//! TechCore catalog core: product model, catalog store, and the filter/sampler
//! that decides which products the grid shows for a selection.
//!
//! Layout
//! - `product`: tagged product kinds and the flat wire record.
//! - `store`: the immutable, ordered catalog (built-in or loaded).
//! - `selection`: `(category, subcategory)` state and navigation transitions.
//! - `filter`: exact filtering vs. capped random sampling.
//! - `sample`: Fisher–Yates sampling, replay tokens, sampling config.
//! - `links`: marketplace search URLs.
//!
//! Randomness is always passed in as `&mut impl Rng`; nothing here touches
//! global state.

pub mod filter;
pub mod links;
pub mod product;
pub mod sample;
pub mod selection;
pub mod store;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use filter::{visible_products, FilterPlan};
pub use product::{Category, GeneralCategory, Peripheral, Product, ProductKind, ProductRecord};
pub use sample::{ReplayToken, SampleCfg};
pub use selection::{CategoryFilter, NavTarget, Selection, SubCategoryFilter};
pub use store::{CatalogError, CatalogStore};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::filter::{
        expected_inclusion, inclusion_frequencies, visible_indices, visible_products, FilterPlan,
    };
    pub use crate::links::{encode_uri_component, marketplace_search_url};
    pub use crate::product::{
        Category, GeneralCategory, Peripheral, Product, ProductKind, ProductRecord,
    };
    pub use crate::sample::{
        sample, session_rng, shuffle, ReplayToken, SampleCfg, DEFAULT_SAMPLE_CAP,
    };
    pub use crate::selection::{
        CategoryFilter, NavEffect, NavTarget, Selection, SubCategoryFilter,
    };
    pub use crate::store::{CatalogError, CatalogStore};
}
