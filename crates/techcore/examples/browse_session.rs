//! Walk through a short browsing session against the built-in catalog.
//!
//! Run: `cargo run -p techcore --example browse_session -- [seed]`

use techcore::prelude::*;

fn main() -> Result<(), CatalogError> {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);
    let store = CatalogStore::builtin()?;
    let cfg = SampleCfg::default();
    let mut tok = ReplayToken::new(seed, 0);
    let mut selection = Selection::home();

    let steps: [(&str, fn(&mut Selection)); 5] = [
        ("ver catálogo", |s| {
            s.navigate(NavTarget::Todos);
        }),
        ("notebooks", |s| {
            s.navigate(NavTarget::Category(Category::Notebooks));
        }),
        ("periféricos", |s| {
            s.navigate(NavTarget::Category(Category::Perifericos));
        }),
        ("monitores", |s| {
            s.pick_sub_category(SubCategoryFilter::Only(Peripheral::Monitor))
        }),
        ("início", |s| {
            s.navigate(NavTarget::Inicio);
        }),
    ];

    for (name, step) in steps {
        step(&mut selection);
        let view = store.visible(selection, cfg, &mut tok.to_std_rng());
        println!(
            "== {name}: {} / {} ({} items)",
            selection.category.label(),
            selection.sub_category.label(),
            view.len()
        );
        for p in view {
            println!("  {:<32} {:>10}  {}", p.title, p.price, p.search_url());
        }
        tok = tok.next();
    }
    Ok(())
}
