// tests/widget.rs
//
// A mounted widget end to end: panel, dependent selects, search, pages,
// observers and the rendered markup.
//
use std::cell::RefCell;
use std::rc::Rc;

use cardfilter::config::options::{FilterDefinition, WidgetOptions};
use cardfilter::core::html::parse_fragment;
use cardfilter::dom::{self, Element, Selector};
use cardfilter::{render, CardFilterError, FilterWidget};

const WALL: &str = r#"<section id="wall" class="row">
  <div class="card" data-progetto="Alpha" data-citta="Roma" data-tag="rust, web">A1</div>
  <div class="card" data-progetto="Alpha" data-citta="Milano" data-tag="web">A2</div>
  <div class="card" data-progetto="Beta" data-citta="Napoli" data-tag="rust">B1</div>
  <div class="card" data-progetto="Beta" data-citta="Roma" data-tag="go">B2</div>
  <div class="card" data-progetto="Gamma" data-citta="Torino">G1</div>
</section>"#;

fn container() -> Element {
    let doc = parse_fragment(WALL);
    dom::find(&doc, &Selector::parse("#wall")).cloned().unwrap()
}

fn options() -> WidgetOptions {
    let mut opts = WidgetOptions::default();
    opts.pagination.limit = 2;
    opts.selects.config = vec![
        FilterDefinition::new("progetto", "Progetto"),
        FilterDefinition::new("citta", "Città").depends_on("progetto"),
        FilterDefinition::new("tag", "Tag"),
    ];
    opts
}

fn values(widget: &FilterWidget, name: &str) -> Vec<String> {
    widget.panel().select(name).unwrap().options().iter().map(|o| o.value.clone()).collect()
}

fn texts(widget: &FilterWidget) -> Vec<String> {
    widget.visible_cards().map(|c| c.text()).collect()
}

#[test]
fn init_builds_panel_and_first_pages() {
    let widget = FilterWidget::mount(container(), options());

    assert!(widget.is_initialized());
    assert_eq!(widget.cards().len(), 5);
    assert_eq!(widget.visible(), &[0, 1, 2, 3, 4]);
    assert_eq!(widget.page_count(), 3);
    assert_eq!(widget.pages().iter().map(|p| p.cards.len()).collect::<Vec<_>>(), vec![2, 2, 1]);
    assert_eq!(widget.current_page(), 0);
    assert_eq!(widget.shown_cards().map(|c| c.text()).collect::<Vec<_>>(), vec!["A1", "A2"]);

    assert_eq!(values(&widget, "progetto"), vec!["Alpha", "Beta", "Gamma"]);
    assert!(values(&widget, "citta").is_empty());
    assert_eq!(values(&widget, "tag"), vec!["go", "rust", "web"]);
    assert_eq!(widget.panel().select("progetto").unwrap().placeholder, "Scegli Progetto");
    assert_eq!(widget.button().text, "Cerca");

    assert!(widget.container().has_class("row-pages"));
    assert!(!widget.container().has_class("row"));
    assert_eq!(widget.page_class(), "row");
}

#[test]
fn dependent_select_follows_its_dependency() {
    let mut widget = FilterWidget::mount(container(), options());

    widget.select("progetto", "Alpha").unwrap();
    assert_eq!(values(&widget, "citta"), vec!["Milano", "Roma"]);

    widget.select("citta", "Roma").unwrap();
    assert_eq!(widget.panel().select("citta").unwrap().value(), "Roma");

    widget.select("progetto", "Beta").unwrap();
    assert_eq!(values(&widget, "citta"), vec!["Napoli", "Roma"]);
    assert_eq!(widget.panel().select("citta").unwrap().value(), "");

    widget.select("progetto", "").unwrap();
    assert!(values(&widget, "citta").is_empty());

    // Independent selects never change.
    assert_eq!(values(&widget, "tag"), vec!["go", "rust", "web"]);
}

#[test]
fn chained_dependents_reset_together() {
    let mut opts = options();
    opts.selects.config.push(FilterDefinition::new("tag", "Tag").depends_on("citta"));
    opts.selects.config.remove(2);
    let mut widget = FilterWidget::mount(container(), opts);

    widget.select("progetto", "Alpha").unwrap();
    widget.select("citta", "Roma").unwrap();
    assert_eq!(values(&widget, "tag"), vec!["go", "rust, web"]);

    widget.select("progetto", "Beta").unwrap();
    assert_eq!(values(&widget, "citta"), vec!["Napoli", "Roma"]);
    assert!(values(&widget, "tag").is_empty());
}

#[test]
fn bad_selections_are_rejected() {
    let mut widget = FilterWidget::mount(container(), options());

    let err = widget.select("colore", "rosso").unwrap_err();
    assert!(matches!(err, CardFilterError::UnknownFilter(name) if name == "colore"));

    // Nothing to choose until the dependency is set.
    let err = widget.select("citta", "Roma").unwrap_err();
    assert!(matches!(err, CardFilterError::UnknownOption { .. }));

    assert!(widget.select("progetto", "Delta").is_err());
    assert_eq!(widget.panel().select("progetto").unwrap().value(), "");
}

#[test]
fn search_refilters_from_the_full_set() {
    let mut widget = FilterWidget::mount(container(), options());

    widget.select("tag", "rust").unwrap();
    widget.search();
    assert_eq!(texts(&widget), vec!["A1", "B1"]);
    assert_eq!(widget.page_count(), 1);

    widget.search();
    assert_eq!(texts(&widget), vec!["A1", "B1"]);

    widget.select("progetto", "Beta").unwrap();
    widget.search();
    assert_eq!(texts(&widget), vec!["B1"]);

    widget.select("progetto", "").unwrap();
    widget.select("tag", "").unwrap();
    widget.search();
    assert_eq!(widget.visible().len(), 5);
}

#[test]
fn repeated_search_rebuilds_the_same_pages() {
    let mut opts = options();
    opts.pagination.limit = 1;
    let mut widget = FilterWidget::mount(container(), opts);

    widget.select("tag", "rust").unwrap();
    widget.search();
    let pages = widget.pages().to_vec();
    let controls = widget.controls();
    assert_eq!(pages.len(), 2);
    assert_eq!(controls.len(), 2);

    widget.change_page(1).unwrap();
    widget.search();
    assert_eq!(widget.pages().to_vec(), pages);
    assert_eq!(widget.controls(), controls);
    assert_eq!(widget.current_page(), 0);
}

#[test]
fn list_items_without_end_tags_are_separate_cards() {
    let doc = parse_fragment(r#"<ul id="wall"><li data-tag="a">A<li data-tag="b">B<li data-tag="c">C</ul>"#);
    let list = dom::find(&doc, &Selector::parse("#wall")).cloned().unwrap();
    let mut opts = WidgetOptions::default();
    opts.selects.config = vec![FilterDefinition::new("tag", "Tag")];
    let mut widget = FilterWidget::mount(list, opts);

    assert_eq!(widget.cards().len(), 3);
    assert_eq!(values(&widget, "tag"), vec!["a", "b", "c"]);

    widget.select("tag", "a").unwrap();
    widget.search();
    assert_eq!(texts(&widget), vec!["A"]);
}

#[test]
fn search_with_no_hits_leaves_no_pages() {
    let mut widget = FilterWidget::mount(container(), options());
    widget.select("progetto", "Gamma").unwrap();
    widget.select("tag", "go").unwrap();
    widget.search();

    assert!(widget.visible().is_empty());
    assert_eq!(widget.page_count(), 0);
    assert!(widget.controls().is_empty());
    assert!(widget.change_page(0).is_err());
}

#[test]
fn change_page_switches_the_shown_page() {
    let mut widget = FilterWidget::mount(container(), options());

    widget.change_page(2).unwrap();
    assert_eq!(widget.current_page(), 2);
    assert_eq!(widget.pages().iter().map(|p| p.shown).collect::<Vec<_>>(), vec![false, false, true]);
    assert_eq!(widget.shown_cards().map(|c| c.text()).collect::<Vec<_>>(), vec!["G1"]);

    let controls = widget.controls();
    assert_eq!(controls.len(), 3);
    assert!(controls[2].active);

    let err = widget.change_page(3).unwrap_err();
    assert!(matches!(err, CardFilterError::PageOutOfRange { page: 3, count: 3 }));
    assert_eq!(widget.current_page(), 2);

    // A new search starts over at the first page.
    widget.search();
    assert_eq!(widget.current_page(), 0);
}

#[test]
fn pagination_off_shows_everything() {
    let mut opts = options();
    opts.pagination.enabled = false;
    let widget = FilterWidget::mount(container(), opts);

    assert_eq!(widget.page_count(), 1);
    assert_eq!(widget.shown_cards().count(), 5);
    assert!(widget.controls().is_empty());
    assert!(!render::render_html(&widget).contains("pagination__wrapper"));
}

#[test]
fn observers_fire_in_order() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let mut widget = FilterWidget::new(container(), options());

    let log = Rc::clone(&seen);
    widget.on_after_init(move |container| {
        log.borrow_mut().push(format!("init {}", container.has_class("row-pages")));
    });
    let log = Rc::clone(&seen);
    widget.on_search(move || log.borrow_mut().push("search".into()));
    let log = Rc::clone(&seen);
    widget.on_change_page(move |page| log.borrow_mut().push(format!("page {page}")));
    let log = Rc::clone(&seen);
    widget.on_change_page(move |page| log.borrow_mut().push(format!("again {page}")));

    assert!(!widget.is_initialized());
    widget.init();
    widget.init();
    widget.search();
    widget.change_page(1).unwrap();
    let _ = widget.change_page(9);

    assert_eq!(*seen.borrow(), vec!["init true", "search", "page 1", "again 1"]);
}

#[test]
fn renders_panel_pages_and_nav() {
    let mut widget = FilterWidget::mount(container(), options());
    widget.select("progetto", "Alpha").unwrap();
    let html = render::render_html(&widget);

    assert!(html.starts_with(r#"<div class="filter-container"><div class="row">"#));
    assert!(html.contains(r#"<select name="progetto" class="form-select me-3 mb-3">"#));
    assert!(html.contains(r#"<option value="">Scegli Progetto</option>"#));
    assert!(html.contains(r#"<option value="Alpha" selected="selected">Alpha</option>"#));
    assert!(html.contains(r#"<option value="Milano">Milano</option>"#));
    assert!(html.contains(r#"<button type="button" class="primary">Cerca</button>"#));

    assert!(html.contains(r#"<section id="wall" class="row-pages">"#));
    assert!(html.contains(r#"<div class="page pagetab row show" data-page="0">"#));
    assert!(html.contains(r#"<div class="page pagetab row" data-page="2">"#));
    assert!(html.contains(r#"data-progetto="Gamma""#));

    assert!(html.contains(
        r#"<li class="page-item active" data-page="0"><a class="page-link">1</a></li>"#
    ));
    assert!(html.ends_with("</ul></nav>"));
}
