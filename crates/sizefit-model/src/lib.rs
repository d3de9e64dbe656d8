pub mod chart;
pub mod unit;

pub use chart::{
    CellValue, ChartDocument, ClothingChart, ClothingRow, MeasurementGuide, Section, SectionRef,
    ShoeEntry, SizeChart,
};
pub use unit::{ALL_UNITS, Unit, available_units};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shoe_chart_parses_from_array() {
        let json = r#"[
            {"us_men": "8", "uk": "7.5", "eu": "41", "length_cm": "26"},
            {"us_men": "9", "uk": "8.5", "eu": "42", "length_cm": "27"}
        ]"#;
        let chart: SizeChart = serde_json::from_str(json).expect("parse shoe chart");
        let entries = chart.as_shoe().expect("array parses as shoe layout");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value(Unit::Eu), Some("41"));
        assert_eq!(entries[0].value(Unit::UsWomen), None);
    }

    #[test]
    fn clothing_chart_parses_from_object() {
        let json = r#"{
            "headers": ["Size", "Chest (CM)"],
            "rows": [{"Size": "S", "Chest_CM": "86"}, {"Size": "M", "Chest_CM": null}]
        }"#;
        let chart: SizeChart = serde_json::from_str(json).expect("parse clothing chart");
        let clothing = chart.as_clothing().expect("object parses as clothing layout");
        let sections = clothing.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, None);
        assert_eq!(sections[0].headers, ["Size", "Chest (CM)"]);
        assert_eq!(
            sections[0].rows[1].get("Chest_CM"),
            Some(&CellValue::Missing)
        );
    }

    #[test]
    fn split_chart_yields_standard_then_plus() {
        let json = r#"{
            "standard": {"headers": ["Size"], "rows": [{"Size": "M"}]},
            "plus": {"headers": ["Size"], "rows": [{"Size": "1X"}]}
        }"#;
        let chart: ClothingChart = serde_json::from_str(json).expect("parse split chart");
        let sections = chart.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, Some("Standard"));
        assert_eq!(sections[1].title, Some("Plus Size"));
    }

    #[test]
    fn document_round_trips() {
        let json = r#"{
            "brand": "Acme",
            "category": "sneakers",
            "gender": "men",
            "source_url": "https://example.com/sizes",
            "collected_date": "2025-11-02",
            "size_chart": [{"us_men": "9", "eu": "42"}]
        }"#;
        let doc: ChartDocument = serde_json::from_str(json).expect("parse document");
        assert_eq!(doc.brand, "Acme");
        assert!(doc.brand_slug.is_empty());
        assert_eq!(
            doc.last_updated(),
            chrono::NaiveDate::from_ymd_opt(2025, 11, 2)
        );
        let round = serde_json::to_string(&doc).expect("serialize document");
        let back: ChartDocument = serde_json::from_str(&round).expect("deserialize document");
        assert_eq!(back.category, "sneakers");
    }

    #[test]
    fn available_units_follow_first_entry() {
        let entries = vec![ShoeEntry {
            us_men: Some("9".to_string()),
            eu: Some("42".to_string()),
            length_cm: Some(String::new()),
            ..ShoeEntry::default()
        }];
        assert_eq!(available_units(&entries), vec![Unit::UsMen, Unit::Eu]);
        assert!(available_units(&[]).is_empty());
    }

    #[test]
    fn unit_parses_chart_spellings() {
        assert_eq!("length_cm".parse::<Unit>(), Ok(Unit::Cm));
        assert_eq!("US_MEN".parse::<Unit>(), Ok(Unit::UsMen));
        assert_eq!("us-women".parse::<Unit>(), Ok(Unit::UsWomen));
        assert!("inch".parse::<Unit>().is_err());
    }
}
