//! Lenient parsing of category/subcategory names from the command line.

use techcore::{Category, CategoryFilter, Peripheral, SubCategoryFilter};

/// Uppercase, `-`/`_` as spaces, accents on the vowels the labels use dropped.
fn normalize(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .replace(['-', '_'], " ")
        .replace('Í', "I")
        .replace('É', "E")
}

pub fn parse_category(raw: &str) -> Result<CategoryFilter, String> {
    let label = normalize(raw);
    if label == "TODOS" {
        return Ok(CategoryFilter::Todos);
    }
    Category::from_label(&label)
        .map(CategoryFilter::Only)
        .ok_or_else(|| {
            format!("unknown category {raw:?}; expected todos, computadores, notebooks or perifericos")
        })
}

pub fn parse_sub_category(raw: &str) -> Result<SubCategoryFilter, String> {
    let label = normalize(raw);
    if label == "TODOS" {
        return Ok(SubCategoryFilter::Todos);
    }
    Peripheral::from_label(&label)
        .map(SubCategoryFilter::Only)
        .ok_or_else(|| {
            format!(
                "unknown subcategory {raw:?}; expected todos, mouse, teclado, monitor or placa-de-video"
            )
        })
}
