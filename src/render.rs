// src/render.rs
//
// Turns a mounted widget into host-page markup: the filter panel, the
// container holding one block per page, and the page-number nav.
// Purely a view over FilterWidget; nothing here changes widget state.

use crate::config::consts::*;
use crate::dom::{self, Element, Node, Selector};
use crate::error::{CardFilterError, Result};
use crate::panel::{FilterPanel, FilterSelect};
use crate::widget::FilterWidget;

/// `[panel, container, nav?]`, in that order.
pub fn render_nodes(widget: &FilterWidget) -> Vec<Node> {
    let mut out = vec![
        Node::Element(render_panel(widget.panel())),
        Node::Element(render_container(widget)),
    ];
    if widget.options().pagination.enabled {
        out.push(Node::Element(render_nav(widget)));
    }
    out
}

/// Put the rendered widget where the container was in `doc`.
pub fn splice_into(doc: &mut Vec<Node>, container: &Selector, widget: &FilterWidget) -> Result<()> {
    if dom::splice(doc, container, render_nodes(widget)) {
        Ok(())
    } else {
        Err(CardFilterError::ContainerNotFound(container.to_string()))
    }
}

pub fn render_html(widget: &FilterWidget) -> String {
    dom::to_html(&render_nodes(widget))
}

pub fn render_panel(panel: &FilterPanel) -> Element {
    let mut row = Element::new("div").with_class(PANEL_ROW_CLASS);

    for select in panel.selects() {
        row.children.push(Node::Element(
            Element::new("div")
                .with_class(FILTER_CELL_CLASS)
                .with_child(render_select(select)),
        ));
    }

    let button = Element::new("button")
        .with_attr("type", "button")
        .with_class(&panel.button.class)
        .with_child(panel.button.text.as_str());
    row.children.push(Node::Element(
        Element::new("div").with_class(BUTTON_CELL_CLASS).with_child(button),
    ));

    Element::new("div").with_class(PANEL_CLASS).with_child(row)
}

pub fn render_select(select: &FilterSelect) -> Element {
    let mut el = Element::new("select")
        .with_attr("name", &select.name)
        .with_class(&select.class)
        .with_class(SELECT_EXTRA_CLASS);

    let placeholder = option("", &select.placeholder, select.value().is_empty());
    el.children.push(Node::Element(placeholder));

    for opt in select.options() {
        let selected = !select.value().is_empty() && opt.value == select.value();
        el.children.push(Node::Element(option(&opt.value, &opt.label, selected)));
    }
    el
}

fn option(value: &str, label: &str, selected: bool) -> Element {
    let mut el = Element::new("option").with_attr("value", value).with_child(label);
    if selected {
        el.set_attr("selected", "selected");
    }
    el
}

/// The original container (class swapped) holding one block per page.
pub fn render_container(widget: &FilterWidget) -> Element {
    let mut container = widget.container().clone();
    container.children.clear();

    for page in widget.pages() {
        let mut block = Element::new("div")
            .with_class(PAGE_CLASS)
            .with_attr("data-page", page.index.to_string())
            .with_class(widget.page_class());
        if page.shown {
            block.add_class(PAGE_SHOWN_CLASS);
        }
        for &ix in &page.cards {
            block.children.push(Node::Element(widget.cards()[ix].element().clone()));
        }
        container.children.push(Node::Element(block));
    }
    container
}

pub fn render_nav(widget: &FilterWidget) -> Element {
    let mut list = Element::new("ul").with_class(NAV_LIST_CLASS);
    for link in widget.controls() {
        let mut item = Element::new("li")
            .with_class(NAV_ITEM_CLASS)
            .with_attr("data-page", link.index.to_string());
        if link.active {
            item.add_class(NAV_ITEM_ACTIVE_CLASS);
        }
        let anchor = Element::new("a").with_class(NAV_LINK_CLASS).with_child(link.label());
        list.children.push(Node::Element(item.with_child(anchor)));
    }
    Element::new("nav").with_class(NAV_CLASS).with_child(list)
}
