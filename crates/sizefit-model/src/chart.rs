#![deny(unsafe_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// One cell of a clothing-layout row. Chart files occasionally carry
/// explicit `null` cells next to plain strings; absent keys are simply
/// absent from the row map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value.as_str()),
            CellValue::Missing => None,
        }
    }
}

/// One row of a clothing-layout table, keyed by the raw data-file column
/// names (which need not match the declared presentation headers).
pub type ClothingRow = BTreeMap<String, CellValue>;

/// One row of a shoe-layout table. All fields are optional; within a single
/// chart every row is expected to expose the same subset, but inconsistent
/// rows are tolerated rather than validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeEntry {
    pub us_men: Option<String>,
    pub us_women: Option<String>,
    pub uk: Option<String>,
    pub eu: Option<String>,
    pub length_cm: Option<String>,
}

impl ShoeEntry {
    /// The raw value for a unit axis. Empty strings count as absent, the
    /// same way the source data treated them.
    pub fn value(&self, unit: Unit) -> Option<&str> {
        let field = match unit {
            Unit::Cm => &self.length_cm,
            Unit::UsMen => &self.us_men,
            Unit::UsWomen => &self.us_women,
            Unit::Uk => &self.uk,
            Unit::Eu => &self.eu,
        };
        field.as_deref().filter(|value| !value.is_empty())
    }
}

/// A headers/rows block of a clothing chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<ClothingRow>,
}

/// Borrowed view of one renderable section of a clothing chart.
#[derive(Debug, Clone, Copy)]
pub struct SectionRef<'a> {
    /// Sub-table title when the chart is split (`Standard` / `Plus Size`).
    pub title: Option<&'static str>,
    pub headers: &'a [String],
    pub rows: &'a [ClothingRow],
}

/// The object-layout chart shape: either a single top-level headers/rows
/// block, or a split into `standard` and `plus` sub-tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClothingChart {
    #[serde(default)]
    pub headers: Option<Vec<String>>,
    #[serde(default)]
    pub rows: Option<Vec<ClothingRow>>,
    #[serde(default)]
    pub standard: Option<Section>,
    #[serde(default)]
    pub plus: Option<Section>,
}

impl ClothingChart {
    /// Sections in presentation order. A split chart yields `standard` then
    /// `plus`; otherwise the top-level headers/rows form one untitled
    /// section. A chart with neither shape yields nothing.
    pub fn sections(&self) -> Vec<SectionRef<'_>> {
        if let Some(standard) = &self.standard {
            let mut sections = vec![SectionRef {
                title: Some("Standard"),
                headers: &standard.headers,
                rows: &standard.rows,
            }];
            if let Some(plus) = &self.plus {
                sections.push(SectionRef {
                    title: Some("Plus Size"),
                    headers: &plus.headers,
                    rows: &plus.rows,
                });
            }
            return sections;
        }
        if let (Some(headers), Some(rows)) = (&self.headers, &self.rows) {
            return vec![SectionRef {
                title: None,
                headers,
                rows,
            }];
        }
        Vec::new()
    }
}

/// A size chart, shape decided once at parse time: an array parses as the
/// shoe layout, an object as the clothing layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeChart {
    Shoe(Vec<ShoeEntry>),
    Clothing(ClothingChart),
}

impl SizeChart {
    pub fn as_shoe(&self) -> Option<&[ShoeEntry]> {
        match self {
            SizeChart::Shoe(entries) => Some(entries),
            SizeChart::Clothing(_) => None,
        }
    }

    pub fn as_clothing(&self) -> Option<&ClothingChart> {
        match self {
            SizeChart::Shoe(_) => None,
            SizeChart::Clothing(chart) => Some(chart),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementGuide {
    pub how_to_measure: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// One brand/category chart document as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDocument {
    pub brand: String,
    #[serde(default)]
    pub brand_slug: String,
    pub category: String,
    #[serde(default)]
    pub category_slug: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub collected_date: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub unit_system: Option<Vec<String>>,
    pub size_chart: SizeChart,
    #[serde(default)]
    pub fit_notes: Option<String>,
    #[serde(default)]
    pub measurement_guide: Option<MeasurementGuide>,
}

impl ChartDocument {
    /// The collection date as a date, when `collected_date` is ISO-formatted.
    pub fn last_updated(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.collected_date.trim(), "%Y-%m-%d").ok()
    }
}
