//! Catalog store: the fixed, ordered product sequence for a session.
//!
//! The store is built once and never mutated; callers only ever see `&[Product]`.
//! Record validation happens at construction (`from_records`, `from_json_str`),
//! so everything downstream works on well-formed products.

use rand::Rng;
use std::fmt;

use crate::filter::visible_products;
use crate::product::{Product, ProductKind, ProductRecord};
use crate::sample::SampleCfg;
use crate::selection::Selection;

const BUILTIN_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Data-integrity defects in a catalog source.
#[derive(Debug)]
pub enum CatalogError {
    UnknownCategory { index: usize, value: String },
    UnknownSubCategory { index: usize, value: String },
    MissingSubCategory { index: usize, title: String },
    UnexpectedSubCategory { index: usize, title: String },
    EmptyTitle { index: usize },
    Json(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory { index, value } => {
                write!(f, "record {index}: unknown category {value:?}")
            }
            Self::UnknownSubCategory { index, value } => {
                write!(f, "record {index}: unknown subcategory {value:?}")
            }
            Self::MissingSubCategory { index, title } => {
                write!(f, "record {index} ({title}): peripheral without subcategory")
            }
            Self::UnexpectedSubCategory { index, title } => {
                write!(f, "record {index} ({title}): subcategory on a non-peripheral")
            }
            Self::EmptyTitle { index } => write!(f, "record {index}: empty title"),
            Self::Json(msg) => write!(f, "invalid catalog json: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Immutable, ordered product catalog.
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Validate flat records in order; the first bad record aborts construction.
    pub fn from_records(records: Vec<ProductRecord>) -> Result<Self, CatalogError> {
        let products = records
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.into_product(i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { products })
    }

    /// Parse a JSON array of `ProductRecord`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// The compiled-in TechCore catalog (48 records).
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    /// Complete ordered catalog.
    #[inline]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products with exactly this kind.
    pub fn count_by(&self, kind: ProductKind) -> usize {
        self.products.iter().filter(|p| p.kind == kind).count()
    }

    pub fn records(&self) -> Vec<ProductRecord> {
        self.products.iter().map(Product::to_record).collect()
    }

    /// Shorthand for `visible_products(self.all(), ..)`.
    pub fn visible<R: Rng + ?Sized>(
        &self,
        selection: Selection,
        cfg: SampleCfg,
        rng: &mut R,
    ) -> Vec<&Product> {
        visible_products(&self.products, selection, cfg, rng)
    }
}

impl<'a> IntoIterator for &'a CatalogStore {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
