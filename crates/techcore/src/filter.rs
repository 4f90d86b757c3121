//! Visible-product computation: exact filtering or capped random sampling.
//!
//! Purpose
//! - Map a `Selection` to the ordered products the grid shows.
//! - Keep the decision (`FilterPlan`) separate from its execution so the
//!   deterministic paths can be checked without a random source.
//!
//! Rules
//! - `TODOS`: sample `min(cap, |catalog|)` from the whole catalog.
//! - `PERIFERICOS` + `TODOS`: sample `min(cap, |peripherals|)`.
//! - `PERIFERICOS` + concrete subcategory: every match, catalog order.
//! - `COMPUTADORES`/`NOTEBOOKS`: every match, catalog order. A subcategory
//!   attached to these selections is ignored.

use rand::Rng;

use crate::product::{Category, GeneralCategory, Peripheral, Product, ProductKind};
use crate::sample::{sample, SampleCfg};
use crate::selection::{CategoryFilter, Selection, SubCategoryFilter};

/// What a selection asks for, independent of the catalog contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterPlan {
    SampleAll,
    SamplePeripherals,
    General(GeneralCategory),
    Peripheral(Peripheral),
}

impl FilterPlan {
    pub fn for_selection(selection: Selection) -> Self {
        match selection.category {
            CategoryFilter::Todos => FilterPlan::SampleAll,
            CategoryFilter::Only(Category::Computadores) => {
                FilterPlan::General(GeneralCategory::Computadores)
            }
            CategoryFilter::Only(Category::Notebooks) => {
                FilterPlan::General(GeneralCategory::Notebooks)
            }
            CategoryFilter::Only(Category::Perifericos) => match selection.sub_category {
                SubCategoryFilter::Todos => FilterPlan::SamplePeripherals,
                SubCategoryFilter::Only(p) => FilterPlan::Peripheral(p),
            },
        }
    }

    /// Random, capped result (vs. exact, ordered, uncapped).
    #[inline]
    pub fn is_sampled(self) -> bool {
        matches!(self, FilterPlan::SampleAll | FilterPlan::SamplePeripherals)
    }

    /// Candidate predicate applied before any sampling.
    #[inline]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            FilterPlan::SampleAll => true,
            FilterPlan::SamplePeripherals => product.category() == Category::Perifericos,
            FilterPlan::General(g) => product.kind == ProductKind::General(g),
            FilterPlan::Peripheral(p) => product.kind == ProductKind::Peripheral(p),
        }
    }
}

/// Catalog positions of the visible products, in display order.
pub fn visible_indices<R: Rng + ?Sized>(
    catalog: &[Product],
    selection: Selection,
    cfg: SampleCfg,
    rng: &mut R,
) -> Vec<usize> {
    let plan = FilterPlan::for_selection(selection);
    let candidates: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, p)| plan.matches(p))
        .map(|(i, _)| i)
        .collect();
    if plan.is_sampled() {
        sample(candidates, cfg.cap, rng)
    } else {
        candidates
    }
}

/// Products to display for `selection`. Never fails; no matches gives an empty vec.
///
/// Sampled selections draw a fresh sample on every call.
pub fn visible_products<'a, R: Rng + ?Sized>(
    catalog: &'a [Product],
    selection: Selection,
    cfg: SampleCfg,
    rng: &mut R,
) -> Vec<&'a Product> {
    visible_indices(catalog, selection, cfg, rng)
        .into_iter()
        .map(|i| &catalog[i])
        .collect()
}

/// Observed per-product inclusion frequency over `trials` independent views.
///
/// Entry `i` belongs to `catalog[i]`; products the plan never admits stay at 0.
pub fn inclusion_frequencies<R: Rng + ?Sized>(
    catalog: &[Product],
    selection: Selection,
    cfg: SampleCfg,
    trials: usize,
    rng: &mut R,
) -> Vec<f64> {
    if trials == 0 {
        return vec![0.0; catalog.len()];
    }
    let mut hits = vec![0usize; catalog.len()];
    for _ in 0..trials {
        for i in visible_indices(catalog, selection, cfg, rng) {
            hits[i] += 1;
        }
    }
    hits.into_iter()
        .map(|h| h as f64 / trials as f64)
        .collect()
}

/// Inclusion probability a fair sampler gives each candidate, `min(cap, n) / n`.
/// Exact plans include every candidate, so they report 1 (or 0 with no candidates).
pub fn expected_inclusion(catalog: &[Product], selection: Selection, cfg: SampleCfg) -> f64 {
    let plan = FilterPlan::for_selection(selection);
    let n = catalog.iter().filter(|p| plan.matches(p)).count();
    if n == 0 {
        return 0.0;
    }
    if plan.is_sampled() {
        cfg.cap.min(n) as f64 / n as f64
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests;
