//! Brand and category discovery over the data directory.

use std::path::Path;

use tracing::warn;

use crate::error::{IngestError, Result};
use crate::loader::{CHART_FILE_NAME, load_chart};

/// One entry of the brand catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandInfo {
    /// Directory name under the data root.
    pub slug: String,
    /// Display name, taken from the brand's first loadable chart.
    pub name: String,
    /// Category slugs that hold a chart file, sorted.
    pub categories: Vec<String>,
}

/// Walks the data directory and builds the brand catalogue.
///
/// A brand is listed only when at least one of its category directories
/// contains a chart file. The display name comes from the first category's
/// chart, falling back to the slug when that chart fails to load. A missing
/// data root yields an empty catalogue rather than an error. Brands are
/// sorted by display name.
pub fn discover_brands(data_dir: &Path) -> Result<Vec<BrandInfo>> {
    if !data_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut brands = Vec::new();
    for brand_slug in subdirectories(data_dir)? {
        let brand_dir = data_dir.join(&brand_slug);
        let mut categories = Vec::new();
        for category_slug in subdirectories(&brand_dir)? {
            if brand_dir.join(&category_slug).join(CHART_FILE_NAME).is_file() {
                categories.push(category_slug);
            }
        }
        if categories.is_empty() {
            continue;
        }

        let name = match load_chart(data_dir, &brand_slug, &categories[0]) {
            Ok(document) if !document.brand.is_empty() => document.brand,
            Ok(_) => brand_slug.clone(),
            Err(error) => {
                warn!(brand = %brand_slug, %error, "failed to load chart for brand name");
                brand_slug.clone()
            }
        };

        brands.push(BrandInfo {
            slug: brand_slug,
            name,
            categories,
        });
    }

    brands.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.slug.cmp(&b.slug)));
    Ok(brands)
}

/// Immediate subdirectory names of `dir`, sorted for determinism.
fn subdirectories(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}
