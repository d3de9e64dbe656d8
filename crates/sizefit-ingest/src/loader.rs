//! Chart-file loading.
//!
//! Charts live at `<data root>/<brand>/<category>/size_chart.json`. The
//! loader fills in missing slugs from the directory names so downstream
//! code can rely on them being present.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};
use sizefit_model::ChartDocument;

/// File name of a chart inside its brand/category directory.
pub const CHART_FILE_NAME: &str = "size_chart.json";

const DATA_ENV_VAR: &str = "SIZEFIT_DATA_DIR";

/// Resolves the data root: `SIZEFIT_DATA_DIR` when set, else `./data`.
pub fn default_data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from("data")
}

/// Path of the chart file for a brand/category pair.
pub fn chart_path(data_dir: &Path, brand: &str, category: &str) -> PathBuf {
    data_dir.join(brand).join(category).join(CHART_FILE_NAME)
}

/// Loads and parses one chart document.
///
/// A missing file maps to [`IngestError::ChartNotFound`]; empty
/// `brand_slug`/`category_slug` fields default to the directory names.
pub fn load_chart(data_dir: &Path, brand: &str, category: &str) -> Result<ChartDocument> {
    let path = chart_path(data_dir, brand, category);
    if !path.is_file() {
        return Err(IngestError::ChartNotFound {
            brand: brand.to_string(),
            category: category.to_string(),
        });
    }

    let content = std::fs::read_to_string(&path).map_err(|source| IngestError::FileRead {
        path: path.clone(),
        source,
    })?;
    let mut document: ChartDocument =
        serde_json::from_str(&content).map_err(|source| IngestError::Json {
            path: path.clone(),
            source,
        })?;

    if document.brand_slug.is_empty() {
        document.brand_slug = brand.to_string();
    }
    if document.category_slug.is_empty() {
        document.category_slug = category.to_string();
    }

    debug!(
        brand = %document.brand_slug,
        category = %document.category_slug,
        path = %path.display(),
        "loaded size chart"
    );
    Ok(document)
}
