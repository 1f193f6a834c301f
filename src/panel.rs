// src/panel.rs
//! Filter panel builder: one select per filter definition plus the search
//! button, and the change handling that keeps dependent selects in step.

use crate::card::AttributeSource;
use crate::config::options::WidgetOptions;
use crate::error::{CardFilterError, Result};
use crate::matcher::Selection;
use crate::scanner::{self, SelectOption};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSelect {
    /// Card attribute key; also the select's `name`.
    pub name: String,
    /// First entry, with the empty value.
    pub placeholder: String,
    pub class: String,
    pub depends_on: Option<String>,
    options: Vec<SelectOption>,
    selected: String,
}

impl FilterSelect {
    pub fn new(name: impl Into<String>, placeholder: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
            class: class.into(),
            depends_on: None,
            options: Vec::new(),
            selected: s!(),
        }
    }

    /// Options after the placeholder.
    pub fn options(&self) -> &[SelectOption] { &self.options }

    /// Current value; empty while the placeholder is selected.
    pub fn value(&self) -> &str { &self.selected }

    pub fn selected_label(&self) -> &str {
        self.options
            .iter()
            .find(|o| !self.selected.is_empty() && o.value == self.selected)
            .map(|o| o.label.as_str())
            .unwrap_or(&self.placeholder)
    }

    pub fn has_option(&self, value: &str) -> bool {
        value.is_empty() || self.options.iter().any(|o| o.value == value)
    }

    /// Pick a value. Only the placeholder or an existing option is accepted.
    pub fn set_value(&mut self, value: &str) -> bool {
        if !self.has_option(value) {
            return false;
        }
        self.selected = s!(value);
        true
    }

    /// Drop every option and the selection, then load `options`.
    pub fn replace_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.selected.clear();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchButton {
    pub class: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterPanel {
    selects: Vec<FilterSelect>,
    pub button: SearchButton,
}

/// Build every select from the configured definitions. Independent selects
/// are filled from the cards now; dependent ones start with the
/// placeholder only and are filled when their dependency changes.
pub fn build_panel<T: AttributeSource>(options: &WidgetOptions, cards: &[T]) -> FilterPanel {
    let selects = options
        .selects
        .config
        .iter()
        .map(|def| {
            let placeholder = format!("{}{}", options.selects.first_item, def.label);
            let mut select = FilterSelect::new(&def.attribute, placeholder, &options.selects.class);
            match def.dependency() {
                Some(dep) => {
                    select.depends_on = Some(s!(dep));
                    logd!("Panel: `{}` waits on `{}`", def.attribute, dep);
                }
                None => {
                    select.options = scanner::options_for(def, cards);
                    logd!("Panel: `{}` has {} option(s)", def.attribute, select.options.len());
                }
            }
            select
        })
        .collect();

    FilterPanel {
        selects,
        button: SearchButton {
            class: options.button.class.clone(),
            text: options.button.text.clone(),
        },
    }
}

impl FilterPanel {
    /// Placeholder for a widget that has not been initialised yet.
    pub(crate) fn empty() -> Self {
        Self {
            selects: Vec::new(),
            button: SearchButton { class: s!(), text: s!() },
        }
    }

    pub fn selects(&self) -> &[FilterSelect] { &self.selects }

    pub fn select(&self, name: &str) -> Option<&FilterSelect> {
        self.selects.iter().find(|s| s.name == name)
    }

    /// Live `(name, value)` of every select, in panel order. Placeholder
    /// values are included; the matcher skips them.
    pub fn selections(&self) -> Vec<Selection> {
        self.selects
            .iter()
            .map(|s| Selection::new(&s.name, &s.selected))
            .collect()
    }

    /// Change event on select `name`. Returns the names of the selects whose
    /// options were rebuilt as a consequence.
    pub fn change<T: AttributeSource>(&mut self, name: &str, value: &str, cards: &[T]) -> Result<Vec<String>> {
        let select = self
            .selects
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| CardFilterError::UnknownFilter(s!(name)))?;

        if !select.set_value(value) {
            return Err(CardFilterError::UnknownOption { filter: s!(name), value: s!(value) });
        }

        let mut visited = vec![s!(name)];
        self.refresh_dependents(name, value, cards, &mut visited);
        visited.remove(0);
        Ok(visited)
    }

    fn refresh_dependents<T: AttributeSource>(
        &mut self,
        name: &str,
        value: &str,
        cards: &[T],
        visited: &mut Vec<String>,
    ) {
        let dependents: Vec<usize> = self
            .selects
            .iter()
            .enumerate()
            .filter(|(_, s)| s.depends_on.as_deref() == Some(name))
            .map(|(ix, _)| ix)
            .collect();

        for ix in dependents {
            let dep_name = self.selects[ix].name.clone();
            if visited.contains(&dep_name) {
                continue;
            }

            let options = if value.is_empty() {
                Vec::new()
            } else {
                scanner::dependent_values(cards, name, value, &dep_name)
                    .into_iter()
                    .map(SelectOption::plain)
                    .collect()
            };
            logd!("Panel: `{}`={:?} → `{}` has {} option(s)", name, value, dep_name, options.len());
            self.selects[ix].replace_options(options);
            visited.push(dep_name.clone());

            // The dependent is back on its placeholder; cascade that.
            self.refresh_dependents(&dep_name, "", cards, visited);
        }
    }
}
