//! Product records and the closed category/subcategory vocabulary.
//!
//! Model
//! - A product is either a general item (computer or notebook) or a peripheral
//!   with a concrete peripheral kind. The tagged `ProductKind` keeps
//!   "peripherals always have a subcategory, nothing else does" unrepresentable
//!   to violate.
//! - `ProductRecord` is the flat wire shape (`category` + optional `subCategory`)
//!   used by catalog sources. Conversion into `Product` is the single place the
//!   vocabulary is checked.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::links::marketplace_search_url;
use crate::store::CatalogError;

/// Top-level catalog category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Computadores,
    Notebooks,
    Perifericos,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Computadores,
        Category::Notebooks,
        Category::Perifericos,
    ];

    /// Wire label, as stored in catalog records.
    pub fn label(self) -> &'static str {
        match self {
            Category::Computadores => "COMPUTADORES",
            Category::Notebooks => "NOTEBOOKS",
            Category::Perifericos => "PERIFERICOS",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categories whose products carry no subcategory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    Computadores,
    Notebooks,
}

impl GeneralCategory {
    #[inline]
    pub fn category(self) -> Category {
        match self {
            GeneralCategory::Computadores => Category::Computadores,
            GeneralCategory::Notebooks => Category::Notebooks,
        }
    }
}

/// Peripheral subcategory (only meaningful under `Category::Perifericos`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Peripheral {
    Mouse,
    Teclado,
    Monitor,
    PlacaDeVideo,
}

impl Peripheral {
    pub const ALL: [Peripheral; 4] = [
        Peripheral::Mouse,
        Peripheral::Teclado,
        Peripheral::Monitor,
        Peripheral::PlacaDeVideo,
    ];

    /// Wire label, as stored in catalog records.
    pub fn label(self) -> &'static str {
        match self {
            Peripheral::Mouse => "MOUSE",
            Peripheral::Teclado => "TECLADO",
            Peripheral::Monitor => "MONITOR",
            Peripheral::PlacaDeVideo => "PLACA DE VIDEO",
        }
    }

    /// Name shown on the filter bar; differs from the label only by accents.
    pub fn display_name(self) -> &'static str {
        match self {
            Peripheral::PlacaDeVideo => "PLACA DE VÍDEO",
            other => other.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category plus (for peripherals) the subcategory, as one tagged value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductKind {
    General(GeneralCategory),
    Peripheral(Peripheral),
}

impl ProductKind {
    #[inline]
    pub fn category(self) -> Category {
        match self {
            ProductKind::General(g) => g.category(),
            ProductKind::Peripheral(_) => Category::Perifericos,
        }
    }

    #[inline]
    pub fn sub_category(self) -> Option<Peripheral> {
        match self {
            ProductKind::General(_) => None,
            ProductKind::Peripheral(p) => Some(p),
        }
    }
}

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub image: String,
    pub title: String,
    pub desc: String,
    /// Pre-formatted for display (e.g. "R$ 8.490"); never parsed.
    pub price: String,
    pub kind: ProductKind,
}

impl Product {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        desc: impl Into<String>,
        price: impl Into<String>,
        kind: ProductKind,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            desc: desc.into(),
            price: price.into(),
            kind,
        }
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    #[inline]
    pub fn sub_category(&self) -> Option<Peripheral> {
        self.kind.sub_category()
    }

    /// Marketplace search link built from the title.
    pub fn search_url(&self) -> String {
        marketplace_search_url(&self.title)
    }

    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            image: self.image.clone(),
            title: self.title.clone(),
            desc: self.desc.clone(),
            price: self.price.clone(),
            category: self.category().label().to_string(),
            sub_category: self.sub_category().map(|p| p.label().to_string()),
        }
    }
}

/// Flat record shape used by JSON/CSV catalog sources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub image: String,
    pub title: String,
    pub desc: String,
    pub price: String,
    pub category: String,
    #[serde(
        rename = "subCategory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_category: Option<String>,
}

impl ProductRecord {
    /// Validate against the closed vocabulary. `index` is the record's position
    /// in its source and only feeds error messages.
    pub fn into_product(self, index: usize) -> Result<Product, CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle { index });
        }
        let category =
            Category::from_label(&self.category).ok_or_else(|| CatalogError::UnknownCategory {
                index,
                value: self.category.clone(),
            })?;
        // Blank cells from tabular sources count as absent.
        let sub = self.sub_category.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let kind = match (category, sub) {
            (Category::Perifericos, Some(raw)) => {
                let p = Peripheral::from_label(raw).ok_or_else(|| {
                    CatalogError::UnknownSubCategory {
                        index,
                        value: raw.to_string(),
                    }
                })?;
                ProductKind::Peripheral(p)
            }
            (Category::Perifericos, None) => {
                return Err(CatalogError::MissingSubCategory {
                    index,
                    title: self.title,
                })
            }
            (_, Some(_)) => {
                return Err(CatalogError::UnexpectedSubCategory {
                    index,
                    title: self.title,
                })
            }
            (Category::Computadores, None) => ProductKind::General(GeneralCategory::Computadores),
            (Category::Notebooks, None) => ProductKind::General(GeneralCategory::Notebooks),
        };
        Ok(Product {
            image: self.image,
            title: self.title,
            desc: self.desc,
            price: self.price,
            kind,
        })
    }
}
