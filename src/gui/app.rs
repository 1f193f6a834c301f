// src/gui/app.rs
use std::{
    error::Error,
    path::Path,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    cli::GuiArgs,
    config::{options::WidgetOptions, state::GuiState},
    dom::{self, Selector},
    error::{CardFilterError, Result},
    file,
    widget::FilterWidget,
};

pub fn run(options: eframe::NativeOptions, args: GuiArgs) -> std::result::Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Card Filter",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(args)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: GuiState,

    // None until a document has been loaded
    pub widget: Option<FilterWidget>,

    // status line (widget observers write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(args: GuiArgs) -> Self {
        let state = GuiState {
            source_path_text: args
                .input
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            options_path_text: args
                .config
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            container_text: args.container.clone(),
            ..GuiState::default()
        };

        let mut app = Self {
            state,
            widget: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        if args.input.is_some() {
            app.load();
        }
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut line) = self.status.lock() {
            *line = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// (Re)load the document and options named in the top bar and mount a
    /// fresh widget over the container.
    pub fn load(&mut self) {
        match self.build_widget() {
            Ok(widget) => {
                self.widget = Some(widget);
            }
            Err(e) => {
                loge!("UI: load failed: {}", e);
                self.status(format!("Load failed: {e}"));
            }
        }
    }

    fn build_widget(&self) -> Result<FilterWidget> {
        let source = self.state.source_path_text.trim();
        if source.is_empty() {
            return Err(CardFilterError::io("(no file)", std::io::ErrorKind::NotFound.into()));
        }
        let doc = file::load_document(Path::new(source))?;

        let options_path = self.state.options_path_text.trim();
        let options = if options_path.is_empty() {
            WidgetOptions::default()
        } else {
            file::load_options(Path::new(options_path))?
        };

        let selector = Selector::parse(&self.state.container_text);
        let container = dom::find(&doc, &selector)
            .cloned()
            .ok_or_else(|| CardFilterError::ContainerNotFound(selector.to_string()))?;

        let mut widget = FilterWidget::new(container, options);

        let status = Arc::clone(&self.status);
        let cards = widget.cards().len();
        widget.on_after_init(move |container| {
            if let Ok(mut line) = status.lock() {
                *line = format!("Loaded {cards} card(s) into <{}>", container.tag);
            }
        });

        let status = Arc::clone(&self.status);
        widget.on_search(move || {
            if let Ok(mut line) = status.lock() {
                *line = s!("Search applied");
            }
        });

        let status = Arc::clone(&self.status);
        widget.on_change_page(move |page| {
            if let Ok(mut line) = status.lock() {
                *line = format!("Page {}", page + 1);
            }
        });

        widget.init();
        logf!("UI: mounted {} on {}", source, selector);
        Ok(widget)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            crate::gui::components::top_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("pager").show(ctx, |ui| {
            crate::gui::components::pager::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::filter_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::card_grid::draw(ui, self);
        });
    }
}
