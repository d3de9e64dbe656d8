//! Per-locale message bundles.
//!
//! A bundle carries the converter and table UI strings plus three label
//! dictionaries: unit labels keyed by the raw unit keys, table-header
//! translations keyed by the raw header strings, and category names keyed
//! by category slug. Bundles are loaded from `<dir>/<locale>.json`; the
//! built-in default is English.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::locale::Locale;
use sizefit_model::Unit;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("failed to read messages file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse messages file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Converter-widget strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterMessages {
    pub title: String,
    pub placeholder: String,
    pub result: String,
    pub no_match: String,
    pub closest_match: String,
}

impl Default for ConverterMessages {
    fn default() -> Self {
        Self {
            title: "Size Converter".to_string(),
            placeholder: "Enter your size".to_string(),
            result: "Exact match".to_string(),
            no_match: "No match found".to_string(),
            closest_match: "Closest match".to_string(),
        }
    }
}

/// Size-table strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableMessages {
    pub title: String,
    pub highlight: String,
}

impl Default for TableMessages {
    fn default() -> Self {
        Self {
            title: "Size Chart".to_string(),
            highlight: "Matched row highlighted".to_string(),
        }
    }
}

/// One locale's message bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub converter: ConverterMessages,
    pub table: TableMessages,
    /// Unit labels keyed by raw unit key (`us_men`, `length_cm`, ...).
    pub units: BTreeMap<String, String>,
    /// Header translations keyed by the raw header string.
    pub table_headers: BTreeMap<String, String>,
    /// Category display names keyed by category slug.
    pub categories: BTreeMap<String, String>,
}

impl Messages {
    /// Column label for a unit: the locale dictionary entry when present
    /// (keyed by either the unit key or its `length_cm` chart spelling),
    /// else the built-in English label.
    pub fn unit_label(&self, unit: Unit) -> &str {
        if let Some(label) = self.units.get(unit.as_str()) {
            return label;
        }
        if unit == Unit::Cm
            && let Some(label) = self.units.get("length_cm")
        {
            return label;
        }
        unit.label()
    }

    /// Category display name for a slug, else the given fallback.
    pub fn category_label<'a>(&'a self, slug: &str, fallback: &'a str) -> &'a str {
        self.categories.get(slug).map_or(fallback, String::as_str)
    }
}

/// Loads the bundle for one locale from `<dir>/<locale>.json`.
pub fn load_messages(dir: &Path, locale: Locale) -> Result<Messages, I18nError> {
    let path = dir.join(format!("{}.json", locale.as_str()));
    let content = std::fs::read_to_string(&path).map_err(|source| I18nError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| I18nError::Json { path, source })
}

/// Loads a bundle with fallback: the requested locale, then English, then
/// the built-in defaults. Missing files only warn; rendering must always
/// have labels to work with.
pub fn load_messages_or_default(dir: Option<&Path>, locale: Locale) -> Messages {
    let Some(dir) = dir else {
        return Messages::default();
    };
    match load_messages(dir, locale) {
        Ok(messages) => messages,
        Err(error) => {
            warn!(locale = %locale, %error, "falling back to default messages");
            if locale != Locale::En
                && let Ok(messages) = load_messages(dir, Locale::En)
            {
                return messages;
            }
            Messages::default()
        }
    }
}
