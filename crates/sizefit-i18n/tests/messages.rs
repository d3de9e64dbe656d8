use std::fs;
use std::path::Path;

use tempfile::TempDir;

use sizefit_i18n::{Locale, load_messages, load_messages_or_default};

fn write_bundle(dir: &Path, locale: &str, json: &str) {
    fs::write(dir.join(format!("{locale}.json")), json).unwrap();
}

#[test]
fn loads_locale_bundle() {
    let dir = TempDir::new().unwrap();
    write_bundle(
        dir.path(),
        "zh",
        r#"{
            "converter": {"title": "尺码转换", "no_match": "未找到匹配"},
            "units": {"eu": "欧码"},
            "table_headers": {"Chest (CM)": "胸围 (厘米)"}
        }"#,
    );

    let messages = load_messages(dir.path(), Locale::Zh).unwrap();
    assert_eq!(messages.converter.title, "尺码转换");
    assert_eq!(messages.converter.no_match, "未找到匹配");
    // Fields absent from the bundle keep their defaults.
    assert_eq!(messages.converter.closest_match, "Closest match");
    assert_eq!(messages.units.get("eu").map(String::as_str), Some("欧码"));
    assert_eq!(messages.table.title, "Size Chart");
}

#[test]
fn missing_locale_falls_back_to_english_bundle() {
    let dir = TempDir::new().unwrap();
    write_bundle(
        dir.path(),
        "en",
        r#"{"table": {"title": "Sizing"}}"#,
    );

    let messages = load_messages_or_default(Some(dir.path()), Locale::Zh);
    assert_eq!(messages.table.title, "Sizing");
}

#[test]
fn no_directory_yields_builtin_defaults() {
    let messages = load_messages_or_default(None, Locale::Zh);
    assert_eq!(messages.table.title, "Size Chart");
    assert!(messages.units.is_empty());
}

#[test]
fn unreadable_bundle_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_bundle(dir.path(), "en", "not json");
    assert!(load_messages(dir.path(), Locale::En).is_err());
}
