// src/events.rs
use crate::dom::Element;

pub type AfterInitFn = Box<dyn FnMut(&Element)>;
pub type SearchFn = Box<dyn FnMut()>;
pub type ChangePageFn = Box<dyn FnMut(usize)>;

/// Observers registered on one widget. Each event calls its listeners in
/// registration order.
#[derive(Default)]
pub struct Listeners {
    after_init: Vec<AfterInitFn>,
    search: Vec<SearchFn>,
    change_page: Vec<ChangePageFn>,
}

impl Listeners {
    pub fn on_after_init(&mut self, f: impl FnMut(&Element) + 'static) {
        self.after_init.push(Box::new(f));
    }

    pub fn on_search(&mut self, f: impl FnMut() + 'static) {
        self.search.push(Box::new(f));
    }

    pub fn on_change_page(&mut self, f: impl FnMut(usize) + 'static) {
        self.change_page.push(Box::new(f));
    }

    pub fn emit_after_init(&mut self, container: &Element) {
        logd!("Event: afterInit ({} listener(s))", self.after_init.len());
        for f in &mut self.after_init {
            f(container);
        }
    }

    pub fn emit_search(&mut self) {
        logd!("Event: searchButtonClick ({} listener(s))", self.search.len());
        for f in &mut self.search {
            f();
        }
    }

    pub fn emit_change_page(&mut self, page: usize) {
        logd!("Event: changePage {} ({} listener(s))", page, self.change_page.len());
        for f in &mut self.change_page {
            f(page);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("after_init", &self.after_init.len())
            .field("search", &self.search.len())
            .field("change_page", &self.change_page.len())
            .finish()
    }
}
