// src/widget.rs
//! One mounted card filter: owns the cards, the panel, the current visible
//! set and pages, and the registered observers.
//!
//! Flow: `init` builds panel + pages → `select` (change events) →
//! `search` (button) → `change_page` (pagination controls).

use crate::card::Card;
use crate::config::options::WidgetOptions;
use crate::dom::Element;
use crate::error::{CardFilterError, Result};
use crate::events::Listeners;
use crate::matcher;
use crate::panel::{self, FilterPanel, SearchButton};
use crate::paginator::{self, Page, PageLink};

#[derive(Debug)]
pub struct FilterWidget {
    options: WidgetOptions,
    /// The container with its children moved out into `cards`.
    container: Element,
    /// Container class before mounting; every page inherits it.
    page_class: String,
    cards: Vec<Card>,
    visible: Vec<usize>,
    pages: Vec<Page>,
    current_page: usize,
    panel: FilterPanel,
    listeners: Listeners,
    initialized: bool,
}

impl FilterWidget {
    /// Take over `container`: its element children become the cards.
    /// Nothing is built until [`init`](Self::init).
    pub fn new(mut container: Element, options: WidgetOptions) -> Self {
        let options = options.normalized();
        let page_class = s!(container.attr("class").unwrap_or(""));

        let cards: Vec<Card> = std::mem::take(&mut container.children)
            .into_iter()
            .filter_map(|node| match node {
                crate::dom::Node::Element(el) => Some(Card::new(el)),
                crate::dom::Node::Text(_) => None,
            })
            .collect();

        Self {
            options,
            container,
            page_class,
            cards,
            visible: Vec::new(),
            pages: Vec::new(),
            current_page: 0,
            panel: FilterPanel::empty(),
            listeners: Listeners::default(),
            initialized: false,
        }
    }

    /// `new` + `init`, for callers with no observers to register first.
    pub fn mount(container: Element, options: WidgetOptions) -> Self {
        let mut widget = Self::new(container, options);
        widget.init();
        widget
    }

    /* ---------- observers ---------- */

    pub fn on_after_init(&mut self, f: impl FnMut(&Element) + 'static) {
        self.listeners.on_after_init(f);
    }

    pub fn on_search(&mut self, f: impl FnMut() + 'static) {
        self.listeners.on_search(f);
    }

    pub fn on_change_page(&mut self, f: impl FnMut(usize) + 'static) {
        self.listeners.on_change_page(f);
    }

    /* ---------- lifecycle ---------- */

    /// Build the panel and the first pages (every card visible), then fire
    /// `afterInit`. Runs once; later calls are ignored.
    pub fn init(&mut self) {
        if self.initialized {
            logd!("Widget: init called twice, ignoring");
            return;
        }
        self.initialized = true;

        self.panel = panel::build_panel(&self.options, &self.cards);
        self.visible = (0..self.cards.len()).collect();
        self.rebuild_pages();

        self.container.remove_class(crate::config::consts::CONTAINER_OLD_CLASS);
        self.container.add_class(crate::config::consts::CONTAINER_CLASS);

        logf!(
            "Widget: mounted {} card(s), {} filter(s), {} page(s)",
            self.cards.len(),
            self.panel.selects().len(),
            self.pages.len()
        );
        self.listeners.emit_after_init(&self.container);
    }

    /// Change event on the select named `name`.
    pub fn select(&mut self, name: &str, value: &str) -> Result<()> {
        let refreshed = self.panel.change(name, value, &self.cards)?;
        logd!("Widget: {}={:?}, refreshed {:?}", name, value, refreshed);
        Ok(())
    }

    /// Search button: re-filter from the full card set, rebuild pages,
    /// show page 0, then fire `searchButtonClick`.
    pub fn search(&mut self) {
        let selections = self.panel.selections();
        self.visible = matcher::apply_filters(&self.cards, &selections);
        self.rebuild_pages();
        logf!(
            "Widget: search → {} of {} card(s), {} page(s)",
            self.visible.len(),
            self.cards.len(),
            self.pages.len()
        );
        self.listeners.emit_search();
    }

    /// Pagination control click: show page `index`, fire `changePage`.
    /// Does not re-filter.
    pub fn change_page(&mut self, index: usize) -> Result<()> {
        if index >= self.pages.len() {
            return Err(CardFilterError::PageOutOfRange { page: index, count: self.pages.len() });
        }
        for page in &mut self.pages {
            page.shown = page.index == index;
        }
        self.current_page = index;
        logd!("Widget: page {} of {}", index + 1, self.pages.len());
        self.listeners.emit_change_page(index);
        Ok(())
    }

    fn rebuild_pages(&mut self) {
        let pg = &self.options.pagination;
        self.pages = paginator::build_pages(&self.visible, pg.limit, pg.enabled);
        self.current_page = 0;
    }

    /* ---------- read access ---------- */

    pub fn options(&self) -> &WidgetOptions { &self.options }
    pub fn container(&self) -> &Element { &self.container }
    pub fn page_class(&self) -> &str { &self.page_class }
    pub fn cards(&self) -> &[Card] { &self.cards }
    pub fn panel(&self) -> &FilterPanel { &self.panel }
    pub fn button(&self) -> &SearchButton { &self.panel.button }
    pub fn is_initialized(&self) -> bool { self.initialized }

    /// Indexes into [`cards`](Self::cards) of the cards passing the last search.
    pub fn visible(&self) -> &[usize] { &self.visible }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.visible.iter().map(|&ix| &self.cards[ix])
    }

    pub fn pages(&self) -> &[Page] { &self.pages }
    pub fn page_count(&self) -> usize { self.pages.len() }
    pub fn current_page(&self) -> usize { self.current_page }

    /// Cards on the page currently shown.
    pub fn shown_cards(&self) -> impl Iterator<Item = &Card> {
        self.pages
            .iter()
            .filter(|p| p.shown)
            .flat_map(|p| p.cards.iter())
            .map(|&ix| &self.cards[ix])
    }

    /// Page-number controls for the current page; none with pagination off.
    pub fn controls(&self) -> Vec<PageLink> {
        if !self.options.pagination.enabled {
            return Vec::new();
        }
        paginator::build_pagination_controls(self.pages.len(), self.current_page)
    }
}
