//! Filter scenarios against the built-in catalog plus small hand-made ones.

use super::*;
use crate::store::CatalogStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn builtin() -> CatalogStore {
    CatalogStore::builtin().expect("builtin catalog")
}

fn titles(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.title.clone()).collect()
}

fn general(title: &str, g: GeneralCategory) -> Product {
    Product::new("img", title, "", "R$ 1", ProductKind::General(g))
}

fn peripheral(title: &str, p: Peripheral) -> Product {
    Product::new("img", title, "", "R$ 1", ProductKind::Peripheral(p))
}

#[test]
fn plan_for_each_selection() {
    assert_eq!(
        FilterPlan::for_selection(Selection::home()),
        FilterPlan::SampleAll
    );
    assert_eq!(
        FilterPlan::for_selection(Selection::category(Category::Notebooks)),
        FilterPlan::General(GeneralCategory::Notebooks)
    );
    assert_eq!(
        FilterPlan::for_selection(Selection::category(Category::Perifericos)),
        FilterPlan::SamplePeripherals
    );
    assert_eq!(
        FilterPlan::for_selection(Selection::peripheral(Peripheral::Mouse)),
        FilterPlan::Peripheral(Peripheral::Mouse)
    );
    assert!(FilterPlan::SampleAll.is_sampled());
    assert!(FilterPlan::SamplePeripherals.is_sampled());
    assert!(!FilterPlan::General(GeneralCategory::Computadores).is_sampled());
}

#[test]
fn notebooks_are_returned_in_catalog_order() {
    let store = builtin();
    let mut rng = StdRng::seed_from_u64(1);
    let got = store.visible(
        Selection::category(Category::Notebooks),
        SampleCfg::default(),
        &mut rng,
    );
    let expected: Vec<&Product> = store
        .iter()
        .filter(|p| p.category() == Category::Notebooks)
        .collect();
    assert_eq!(got.len(), 8);
    assert_eq!(got, expected);
    assert_eq!(got[0].title, "Notebook Pro Elite 16\"");
}

#[test]
fn computers_are_uncapped() {
    let mut catalog: Vec<Product> = (0..12)
        .map(|i| general(&format!("pc-{i}"), GeneralCategory::Computadores))
        .collect();
    catalog.push(general("nb", GeneralCategory::Notebooks));
    let mut rng = StdRng::seed_from_u64(2);
    let got = visible_products(
        &catalog,
        Selection::category(Category::Computadores),
        SampleCfg::default(),
        &mut rng,
    );
    assert_eq!(got.len(), 12);
    assert_eq!(titles(&got)[11], "pc-11");
}

#[test]
fn mouse_subcategory_is_exact() {
    let store = builtin();
    let mut rng = StdRng::seed_from_u64(3);
    let got = store.visible(
        Selection::peripheral(Peripheral::Mouse),
        SampleCfg::default(),
        &mut rng,
    );
    assert_eq!(got.len(), 8);
    assert!(got
        .iter()
        .all(|p| p.sub_category() == Some(Peripheral::Mouse)));
    assert_eq!(got[0].title, "Mouse Precision Elite");
    assert_eq!(got[7].title, "Mouse Trackball Expert");
}

#[test]
fn exact_paths_are_idempotent() {
    let store = builtin();
    let cfg = SampleCfg::default();
    for sel in [
        Selection::category(Category::Computadores),
        Selection::category(Category::Notebooks),
        Selection::peripheral(Peripheral::PlacaDeVideo),
    ] {
        let a = store.visible(sel, cfg, &mut StdRng::seed_from_u64(10));
        let b = store.visible(sel, cfg, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b, "{sel:?}");
    }
}

#[test]
fn todos_samples_eight_distinct_products() {
    let store = builtin();
    let mut rng = StdRng::seed_from_u64(4);
    let got = store.visible(Selection::home(), SampleCfg::default(), &mut rng);
    assert_eq!(got.len(), 8);
    let distinct: HashSet<&str> = got.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(distinct.len(), 8);
    assert!(got.iter().all(|p| store.all().contains(p)));
}

#[test]
fn peripherals_todos_samples_only_peripherals() {
    let store = builtin();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let got = store.visible(
            Selection::category(Category::Perifericos),
            SampleCfg::default(),
            &mut rng,
        );
        assert_eq!(got.len(), 8);
        assert!(got.iter().all(|p| p.category() == Category::Perifericos));
    }
}

#[test]
fn sampled_views_resample_each_call() {
    let store = builtin();
    let mut rng = StdRng::seed_from_u64(6);
    let views: HashSet<Vec<String>> = (0..20)
        .map(|_| titles(&store.visible(Selection::home(), SampleCfg::default(), &mut rng)))
        .collect();
    assert!(views.len() > 1);
}

#[test]
fn small_candidate_sets_are_shuffled_not_truncated() {
    let catalog = vec![
        peripheral("m1", Peripheral::Mouse),
        general("pc", GeneralCategory::Computadores),
        peripheral("k1", Peripheral::Teclado),
        peripheral("g1", Peripheral::PlacaDeVideo),
    ];
    let mut rng = StdRng::seed_from_u64(7);
    let got = visible_products(
        &catalog,
        Selection::category(Category::Perifericos),
        SampleCfg::default(),
        &mut rng,
    );
    let mut names = titles(&got);
    names.sort();
    assert_eq!(names, ["g1", "k1", "m1"]);

    let all = visible_products(&catalog, Selection::home(), SampleCfg::default(), &mut rng);
    assert_eq!(all.len(), 4);
}

#[test]
fn empty_catalog_gives_empty_views() {
    let mut rng = StdRng::seed_from_u64(8);
    let cfg = SampleCfg::default();
    let mut selections = vec![Selection::home()];
    selections.extend(Category::ALL.map(Selection::category));
    selections.extend(Peripheral::ALL.map(Selection::peripheral));
    for sel in selections {
        assert!(visible_products(&[], sel, cfg, &mut rng).is_empty());
    }
}

#[test]
fn sub_category_outside_peripherals_is_ignored() {
    let store = builtin();
    let sel = Selection {
        category: CategoryFilter::Only(Category::Computadores),
        sub_category: SubCategoryFilter::Only(Peripheral::Monitor),
    };
    let mut rng = StdRng::seed_from_u64(9);
    let got = store.visible(sel, SampleCfg::default(), &mut rng);
    let plain = store.visible(
        Selection::category(Category::Computadores),
        SampleCfg::default(),
        &mut rng,
    );
    assert_eq!(got, plain);
}

#[test]
fn custom_cap_bounds_sampled_views_only() {
    let store = builtin();
    let cfg = SampleCfg { cap: 3 };
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(store.visible(Selection::home(), cfg, &mut rng).len(), 3);
    assert_eq!(
        store
            .visible(Selection::category(Category::Notebooks), cfg, &mut rng)
            .len(),
        8
    );
    assert!(store
        .visible(Selection::home(), SampleCfg { cap: 0 }, &mut rng)
        .is_empty());
}

#[test]
fn todos_inclusion_is_fair() {
    let store = builtin();
    let cfg = SampleCfg::default();
    let mut rng = StdRng::seed_from_u64(2025);
    let freqs = inclusion_frequencies(store.all(), Selection::home(), cfg, 6000, &mut rng);
    let expected = expected_inclusion(store.all(), Selection::home(), cfg);
    assert!((expected - 8.0 / 48.0).abs() < 1e-12);
    for (p, f) in store.iter().zip(&freqs) {
        // sd of the estimate ≈ 0.0048
        assert!((f - expected).abs() < 0.03, "{}: {f}", p.title);
    }
}

#[test]
fn peripheral_inclusion_is_fair_and_excludes_others() {
    let store = builtin();
    let cfg = SampleCfg::default();
    let sel = Selection::category(Category::Perifericos);
    let mut rng = StdRng::seed_from_u64(77);
    let freqs = inclusion_frequencies(store.all(), sel, cfg, 4000, &mut rng);
    let expected = expected_inclusion(store.all(), sel, cfg);
    assert!((expected - 0.25).abs() < 1e-12);
    for (p, f) in store.iter().zip(&freqs) {
        if p.category() == Category::Perifericos {
            assert!((f - expected).abs() < 0.04, "{}: {f}", p.title);
        } else {
            assert_eq!(*f, 0.0);
        }
    }
}

#[test]
fn frequencies_with_zero_trials_are_zero() {
    let store = builtin();
    let mut rng = StdRng::seed_from_u64(0);
    let freqs = inclusion_frequencies(
        store.all(),
        Selection::home(),
        SampleCfg::default(),
        0,
        &mut rng,
    );
    assert_eq!(freqs.len(), 48);
    assert!(freqs.iter().all(|f| *f == 0.0));
    assert_eq!(expected_inclusion(&[], Selection::home(), SampleCfg::default()), 0.0);
}
