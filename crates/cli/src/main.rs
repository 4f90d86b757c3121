use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use rand::rngs::StdRng;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use techcore::prelude::*;

mod args;
mod provenance;
mod source;

use provenance::{current_git_rev, write_sidecar, Payload};
use source::CatalogSource;

#[derive(Parser)]
#[command(name = "techcore")]
#[command(about = "Browse and sample the TechCore hardware catalog")]
struct Cmd {
    /// Catalog file (.json, .csv or .parquet); the built-in catalog when omitted
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Optional run tag; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy, Debug)]
struct SelectionArgs {
    /// todos | computadores | notebooks | perifericos
    #[arg(long, default_value = "todos", value_parser = args::parse_category)]
    category: CategoryFilter,

    /// todos | mouse | teclado | monitor | placa-de-video (perifericos only)
    #[arg(long, default_value = "todos", value_parser = args::parse_sub_category)]
    sub: SubCategoryFilter,

    /// Size of sampled views
    #[arg(long, default_value_t = DEFAULT_SAMPLE_CAP)]
    cap: usize,
}

impl SelectionArgs {
    fn selection(&self) -> Selection {
        Selection {
            category: self.category,
            sub_category: self.sub,
        }
    }

    fn cfg(&self) -> SampleCfg {
        SampleCfg { cap: self.cap }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print every catalog record with its search link
    Catalog,
    /// Print the products visible for a selection
    Show {
        #[command(flatten)]
        sel: SelectionArgs,
        /// Seed for a reproducible sample; entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// View index within the seeded session
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Also write the listing here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Measure per-product inclusion frequency of the sampler
    Fairness {
        #[command(flatten)]
        sel: SelectionArgs,
        #[arg(long, default_value_t = 10_000)]
        trials: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a small provenance JSON block
    Report,
}

/// One card in a listing.
#[derive(Serialize)]
struct ListingEntry {
    #[serde(flatten)]
    record: ProductRecord,
    search_url: String,
}

impl ListingEntry {
    fn new(product: &Product) -> Self {
        Self {
            record: product.to_record(),
            search_url: product.search_url(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let source = CatalogSource::from_arg(cmd.catalog.clone());
    match cmd.action {
        Action::Catalog => catalog(&source),
        Action::Show {
            sel,
            seed,
            index,
            out,
        } => show(&source, sel, seed, index, out.as_deref(), cmd.tag),
        Action::Fairness { sel, trials, seed } => fairness(&source, sel, trials, seed),
        Action::Report => report(&source, cmd.tag),
    }
}

fn session_or_replay(seed: Option<u64>, index: u64) -> StdRng {
    match seed {
        Some(seed) => ReplayToken::new(seed, index).to_std_rng(),
        None => session_rng(),
    }
}

fn catalog(source: &CatalogSource) -> Result<()> {
    let store = source.load()?;
    tracing::info!(source = %source, products = store.len(), "catalog");
    let entries: Vec<ListingEntry> = store.iter().map(ListingEntry::new).collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn selection_json(selection: Selection) -> Value {
    json!({
        "category": selection.category.label(),
        "sub_category": selection.sub_category.label()
    })
}

fn listing_json(selection: Selection, view: &[&Product]) -> Value {
    json!({
        "selection": selection_json(selection),
        "sampled": FilterPlan::for_selection(selection).is_sampled(),
        "products": view.iter().map(|p| ListingEntry::new(p)).collect::<Vec<_>>()
    })
}

/// What `show` needs to regenerate a listing.
fn listing_params(
    source: &CatalogSource,
    sel: SelectionArgs,
    seed: Option<u64>,
    index: u64,
) -> Value {
    json!({
        "catalog": source.to_string(),
        "category": sel.category.label(),
        "sub_category": sel.sub.label(),
        "cap": sel.cap,
        "seed": seed,
        "index": index
    })
}

/// Write `listing` to `out` (creating parent dirs) plus its sidecar.
fn write_listing(out: &Path, listing: &Value, payload: Payload) -> Result<PathBuf> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(out, serde_json::to_vec_pretty(listing)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(out, payload)
}

fn show(
    source: &CatalogSource,
    sel: SelectionArgs,
    seed: Option<u64>,
    index: u64,
    out: Option<&Path>,
    tag: Option<String>,
) -> Result<()> {
    let store = source.load()?;
    let selection = sel.selection();
    let view = store.visible(selection, sel.cfg(), &mut session_or_replay(seed, index));
    let listing = listing_json(selection, &view);
    tracing::info!(
        category = selection.category.label(),
        sub = selection.sub_category.label(),
        sampled = listing["sampled"].as_bool(),
        seed = ?seed,
        index,
        visible = view.len(),
        tag = ?tag,
        "show"
    );
    println!("{}", serde_json::to_string_pretty(&listing)?);

    if let Some(out) = out {
        let mut payload = Payload::new(listing_params(source, sel, seed, index), view.len());
        payload.tag = tag;
        let sidecar = write_listing(out, &listing, payload)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "listing_written");
    }
    Ok(())
}

/// Observed inclusion frequency of every candidate next to the expected one.
fn fairness_json(
    store: &CatalogStore,
    sel: SelectionArgs,
    trials: usize,
    rng: &mut StdRng,
) -> Value {
    let selection = sel.selection();
    let cfg = sel.cfg();
    let plan = FilterPlan::for_selection(selection);
    let freqs = inclusion_frequencies(store.all(), selection, cfg, trials, rng);
    let expected = expected_inclusion(store.all(), selection, cfg);

    let candidates: Vec<(&Product, f64)> = store
        .iter()
        .zip(freqs)
        .filter(|(p, _)| plan.matches(p))
        .collect();
    let max_dev = candidates
        .iter()
        .map(|(_, f)| (f - expected).abs())
        .fold(0.0, f64::max);
    tracing::info!(
        category = selection.category.label(),
        sub = selection.sub_category.label(),
        trials,
        candidates = candidates.len(),
        expected,
        max_dev,
        "fairness"
    );
    json!({
        "selection": selection_json(selection),
        "trials": trials,
        "expected": expected,
        "max_abs_deviation": max_dev,
        "products": candidates
            .iter()
            .map(|(p, f)| json!({ "title": p.title, "frequency": f }))
            .collect::<Vec<_>>()
    })
}

fn fairness(
    source: &CatalogSource,
    sel: SelectionArgs,
    trials: usize,
    seed: Option<u64>,
) -> Result<()> {
    let store = source.load()?;
    let summary = fairness_json(&store, sel, trials, &mut session_or_replay(seed, 0));
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report(source: &CatalogSource, tag: Option<String>) -> Result<()> {
    let store = source.load()?;
    let obj = json!({
        "code_rev": current_git_rev(),
        "version": techcore::VERSION,
        "tag": tag,
        "catalog": source.to_string(),
        "products": store.len()
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
