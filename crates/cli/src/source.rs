//! Where the catalog comes from: the built-in dataset or a file.
//!
//! JSON files hold an array of `ProductRecord`. CSV and Parquet tables are read
//! through Polars and must carry the record columns; `subCategory` may be
//! absent or blank for non-peripherals.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

use techcore::{CatalogStore, ProductRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(CatalogSource::Builtin, CatalogSource::File)
    }

    pub fn load(&self) -> Result<CatalogStore> {
        match self {
            CatalogSource::Builtin => Ok(CatalogStore::builtin()?),
            CatalogSource::File(path) => load_file(path)
                .with_context(|| format!("loading catalog {}", path.display())),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Builtin => f.write_str("builtin"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_file(path: &Path) -> Result<CatalogStore> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => {
            let text = std::fs::read_to_string(path)?;
            Ok(CatalogStore::from_json_str(&text)?)
        }
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()?;
            records_from_frame(&lf.collect()?)
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?;
            records_from_frame(&lf.collect()?)
        }
        _ => bail!("unsupported catalog format (expected .json, .csv or .parquet)"),
    }
}

fn records_from_frame(df: &DataFrame) -> Result<CatalogStore> {
    tracing::info!(rows = df.height(), cols = df.width(), "catalog_table_shape");
    let image = required_column(df, "image")?;
    let title = required_column(df, "title")?;
    let desc = required_column(df, "desc")?;
    let price = required_column(df, "price")?;
    let category = required_column(df, "category")?;
    let sub_category = if df.column("subCategory").is_ok() {
        string_column(df, "subCategory")?
    } else {
        vec![None; df.height()]
    };

    let records = image
        .into_iter()
        .zip(title)
        .zip(desc)
        .zip(price)
        .zip(category)
        .zip(sub_category)
        .map(
            |(((((image, title), desc), price), category), sub_category)| ProductRecord {
                image,
                title,
                desc,
                price,
                category,
                sub_category,
            },
        )
        .collect();
    Ok(CatalogStore::from_records(records)?)
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(name)
        .with_context(|| format!("catalog table has no {name:?} column"))?
        .cast(&DataType::String)?;
    let values = series
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_owned))
        .collect();
    Ok(values)
}

/// Null cells in these columns become empty strings; record validation
/// rejects the ones that matter (title, category).
fn required_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    Ok(string_column(df, name)?
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
