// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::options::WidgetOptions;
use crate::dom::{self, Selector};
use crate::error::{CardFilterError, Result};
use crate::matcher::Selection;
use crate::widget::FilterWidget;
use crate::{file, render};

/// Headless run: mount, apply selections, pick a page, write the markup.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Filter and paginate an HTML card wall")]
pub struct CliArgs {
    /// HTML file holding the card container
    pub input: PathBuf,

    /// Widget options (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Container selector: #id, .class or a tag name (default: first element)
    #[arg(long, default_value = "")]
    pub container: String,

    /// Select a filter value, as attribute=value; repeatable, applied in order
    #[arg(short, long = "select", value_name = "ATTR=VALUE", value_parser = parse_selection)]
    pub select: Vec<Selection>,

    /// Page to show after filtering, as numbered in the controls (from 1)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print every filter's options (attribute, value, label) instead of markup
    #[arg(long)]
    pub list_options: bool,
}

/// GUI launch arguments; everything can also be filled in from the window.
#[derive(Debug, Default, Parser)]
#[command(name = "cardfilter", version, about = "Card wall filter (GUI)")]
pub struct GuiArgs {
    /// HTML file to load on startup
    pub input: Option<PathBuf>,

    /// Widget options (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Container selector: #id, .class or a tag name
    #[arg(long, default_value = "")]
    pub container: String,
}

pub fn parse_selection(s: &str) -> std::result::Result<Selection, String> {
    let bad = || CardFilterError::BadSelection(s!(s)).to_string();
    let (attr, value) = s.split_once('=').ok_or_else(bad)?;
    let attr = attr.trim();
    if attr.is_empty() {
        return Err(bad());
    }
    Ok(Selection::new(attr, value.trim()))
}

pub fn run(args: &CliArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(args, &mut out)
}

/// Same as [`run`], writing results to `out` instead of stdout.
pub fn run_with(args: &CliArgs, out: &mut dyn Write) -> Result<()> {
    let mut doc = file::load_document(&args.input)?;
    let options = match &args.config {
        Some(path) => file::load_options(path)?,
        None => WidgetOptions::default(),
    };

    let selector = Selector::parse(&args.container);
    let container = dom::find(&doc, &selector)
        .cloned()
        .ok_or_else(|| CardFilterError::ContainerNotFound(selector.to_string()))?;

    let mut widget = FilterWidget::mount(container, options);

    for sel in &args.select {
        widget.select(&sel.attribute, &sel.value)?;
    }
    if !args.select.is_empty() {
        widget.search();
    }
    if let Some(page) = args.page {
        // Controls are labelled from 1; there is no page 0 to click.
        let index = page
            .checked_sub(1)
            .ok_or(CardFilterError::PageOutOfRange { page, count: widget.page_count() })?;
        widget.change_page(index)?;
    }

    if args.list_options {
        for select in widget.panel().selects() {
            for opt in select.options() {
                writeln!(out, "{}\t{}\t{}", select.name, opt.value, opt.label)
                    .map_err(|e| CardFilterError::io("<stdout>", e))?;
            }
        }
        return Ok(());
    }

    render::splice_into(&mut doc, &selector, &widget)?;
    let html = dom::to_html(&doc);

    match &args.out {
        Some(path) => file::write_html(path, &html)?,
        None => out
            .write_all(html.as_bytes())
            .map_err(|e| CardFilterError::io("<stdout>", e))?,
    }

    eprintln!(
        "Showing page {}/{}: {} of {} card(s)",
        widget.current_page() + 1,
        widget.page_count().max(1),
        widget.visible().len(),
        widget.cards().len()
    );
    Ok(())
}
