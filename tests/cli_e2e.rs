// tests/cli_e2e.rs
//
// Full CLI pass on files in a scratch directory: parse args, load,
// filter, paginate, write markup.
//
use std::fs;
use std::path::{Path, PathBuf};

use cardfilter::cli::{self, CliArgs};
use cardfilter::CardFilterError;
use clap::Parser;

const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<h1>Cards</h1>
<section id="wall" class="row">
  <div class="card" data-progetto="Alpha" data-tag="rust, web">A1</div>
  <div class="card" data-progetto="Alpha" data-tag="web">A2</div>
  <div class="card" data-progetto="Beta" data-tag="rust">B1</div>
  <div class="card" data-progetto="Beta" data-tag="go">B2</div>
  <div class="card" data-progetto="Gamma">G1</div>
</section>
<footer>end</footer>
</body></html>"#;

const OPTIONS: &str = r#"{
    "pagination": { "limit": 2 },
    "selects": { "config": [
        { "filter": "progetto", "label": "Progetto", "order": "DESC" },
        { "filter": "tag", "label": "Tag" }
    ] }
}"#;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cardfilter_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("wall.html"), PAGE).unwrap();
    fs::write(dir.join("options.json"), OPTIONS).unwrap();
    dir
}

fn args(dir: &Path, extra: &[&str]) -> CliArgs {
    let input = dir.join("wall.html");
    let config = dir.join("options.json");
    let mut argv = vec![
        "cli".to_string(),
        input.to_string_lossy().into_owned(),
        "-c".to_string(),
        config.to_string_lossy().into_owned(),
        "--container".to_string(),
        "#wall".to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    CliArgs::parse_from(argv)
}

#[test]
fn filters_and_writes_the_document() {
    let dir = scratch("filter");
    let out = dir.join("out").join("filtered.html");
    let out_s = out.to_string_lossy().into_owned();
    let a = args(&dir, &["-s", "tag=rust", "-o", &out_s]);

    let mut sink = Vec::new();
    cli::run_with(&a, &mut sink).unwrap();
    assert!(sink.is_empty());

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<h1>Cards</h1>"));
    assert!(html.contains("<footer>end</footer>"));
    assert!(html.contains(r#"class="filter-container""#));
    assert!(html.contains(r#"<option value="rust" selected="selected">rust</option>"#));
    assert!(html.contains(">A1</div>"));
    assert!(html.contains(">B1</div>"));
    assert!(!html.contains(">A2</div>"));
    assert!(!html.contains(">G1</div>"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn page_flag_is_one_based() {
    let dir = scratch("page");
    let a = args(&dir, &["-p", "2"]);

    let mut sink = Vec::new();
    cli::run_with(&a, &mut sink).unwrap();
    let html = String::from_utf8(sink).unwrap();

    assert!(html.contains(r#"<div class="page pagetab row show" data-page="1">"#));
    assert!(html.contains(r#"<li class="page-item active" data-page="1">"#));

    let a = args(&dir, &["-p", "0"]);
    let err = cli::run_with(&a, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CardFilterError::PageOutOfRange { page: 0, count: 3 }));

    let a = args(&dir, &["-p", "9"]);
    let err = cli::run_with(&a, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CardFilterError::PageOutOfRange { page: 8, count: 3 }));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn list_options_prints_a_table() {
    let dir = scratch("list");
    let a = args(&dir, &["--list-options"]);

    let mut sink = Vec::new();
    cli::run_with(&a, &mut sink).unwrap();
    let text = String::from_utf8(sink).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "progetto\tGamma\tGamma",
            "progetto\tBeta\tBeta",
            "progetto\tAlpha\tAlpha",
            "tag\tgo\tgo",
            "tag\trust\trust",
            "tag\tweb\tweb",
        ]
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn bad_input_is_reported() {
    let dir = scratch("bad");

    assert!(CliArgs::try_parse_from(["cli", "x.html", "-s", "no-equals"]).is_err());
    assert!(CliArgs::try_parse_from(["cli", "x.html", "-s", "=value"]).is_err());

    let mut a = args(&dir, &[]);
    a.container = "#nope".into();
    let err = cli::run_with(&a, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CardFilterError::ContainerNotFound(_)));

    let a = args(&dir, &["-s", "colore=rosso"]);
    let err = cli::run_with(&a, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CardFilterError::UnknownFilter(_)));

    let mut a = args(&dir, &[]);
    a.input = dir.join("missing.html");
    let err = cli::run_with(&a, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CardFilterError::Io { .. }));

    fs::write(dir.join("options.json"), "{ broken").unwrap();
    let err = cli::run_with(&args(&dir, &[]), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CardFilterError::Options { .. }));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn selection_parser() {
    let sel = cli::parse_selection(" citta = Roma ").unwrap();
    assert_eq!(sel.attribute, "citta");
    assert_eq!(sel.value, "Roma");

    let blank = cli::parse_selection("citta=").unwrap();
    assert!(!blank.is_active());
}
