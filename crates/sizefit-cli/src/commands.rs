use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use sizefit_i18n::{Messages, load_messages_or_default};
use sizefit_ingest::{default_data_root, discover_brands, load_chart};
use sizefit_match::match_size;
use sizefit_model::{ChartDocument, SizeChart, available_units};

use crate::cli::{ChartArgs, ConvertArgs, DataArgs, ShowArgs};
use sizefit_cli::render::{apply_table_style, clothing_table, header_cell, match_panel, shoe_table};

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let (document, messages) = load_chart_and_messages(&args.chart)?;
    let span = info_span!("convert", brand = %document.brand_slug, unit = %args.unit);
    let _guard = span.enter();

    let Some(entries) = document.size_chart.as_shoe() else {
        bail!(
            "{}/{} is a clothing chart; unit conversion applies to shoe charts",
            args.chart.brand,
            args.chart.category
        );
    };

    print_chart_heading(&document, &messages);
    match match_size(entries, &args.value, args.unit) {
        Some(result) => {
            let outcome = if result.exact {
                &messages.converter.result
            } else {
                &messages.converter.closest_match
            };
            println!("{} (row {})", outcome, result.index + 1);
            println!("{}", match_panel(result.entry, &messages));
        }
        None => println!("{}", messages.converter.no_match),
    }
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let (document, messages) = load_chart_and_messages(&args.chart)?;
    let span = info_span!("show", brand = %document.brand_slug, category = %document.category_slug);
    let _guard = span.enter();

    print_chart_heading(&document, &messages);
    if !document.source_url.is_empty() {
        println!("Source: {}", document.source_url);
    }
    if !document.collected_date.is_empty() {
        println!("Updated: {}", document.collected_date);
    }
    println!();

    match &document.size_chart {
        SizeChart::Shoe(entries) => {
            let highlight = args
                .highlight
                .as_deref()
                .and_then(|value| match_size(entries, value, args.unit))
                .map(|result| result.index);
            println!("{}", messages.table.title);
            println!("{}", shoe_table(entries, &messages, highlight));
            if highlight.is_some() {
                println!("{}", messages.table.highlight);
            }
        }
        SizeChart::Clothing(chart) => {
            let sections = chart.sections();
            if sections.is_empty() {
                println!("No size data available");
                return Ok(());
            }
            for section in sections {
                match section.title {
                    Some(title) => println!("{} - {}", messages.table.title, title),
                    None => println!("{}", messages.table.title),
                }
                println!("{}", clothing_table(&section, &messages));
            }
        }
    }

    if let Some(notes) = document.fit_notes.as_deref().filter(|notes| !notes.is_empty()) {
        println!("Fit notes: {notes}");
    }
    Ok(())
}

pub fn run_brands(args: &DataArgs) -> Result<()> {
    let data_dir = resolve_data_dir(args);
    let brands = discover_brands(&data_dir).context("discover brands")?;
    if brands.is_empty() {
        println!("No brands found in {}", data_dir.display());
        return Ok(());
    }

    let mut table = comfy_table::Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Brand"),
        header_cell("Slug"),
        header_cell("Categories"),
    ]);
    for brand in brands {
        table.add_row(vec![
            brand.name,
            brand.slug,
            brand.categories.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_units(args: &ChartArgs) -> Result<()> {
    let (document, messages) = load_chart_and_messages(args)?;

    let Some(entries) = document.size_chart.as_shoe() else {
        println!("Clothing charts list measurements directly; unit conversion applies to shoe charts");
        return Ok(());
    };

    let units = available_units(entries);
    if units.is_empty() {
        println!("The chart exposes no unit columns");
        return Ok(());
    }

    let mut table = comfy_table::Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Unit"), header_cell("Label")]);
    for unit in units {
        table.add_row(vec![unit.as_str(), messages.unit_label(unit)]);
    }
    println!("{table}");
    Ok(())
}

fn load_chart_and_messages(args: &ChartArgs) -> Result<(ChartDocument, Messages)> {
    let data_dir = resolve_data_dir(&args.data);
    debug!(data_dir = %data_dir.display(), "resolved data directory");
    let document = load_chart(&data_dir, &args.brand, &args.category)
        .with_context(|| format!("load size chart {}/{}", args.brand, args.category))?;
    let messages = load_messages_or_default(args.messages_dir.as_deref(), args.locale);
    Ok((document, messages))
}

fn resolve_data_dir(args: &DataArgs) -> PathBuf {
    args.data_dir.clone().unwrap_or_else(default_data_root)
}

fn print_chart_heading(document: &ChartDocument, messages: &Messages) {
    let category = messages.category_label(&document.category_slug, &document.category);
    println!("{} - {}", document.brand, category);
}
