// src/config/options.rs
use serde::{Deserialize, Serialize};

use super::consts::*;

/// Everything a mounted widget can be configured with. Field names follow
/// the JSON the host page passes in (`firstItem`, `filter`, `dependencie`, …).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    pub pagination: PaginationOptions,
    pub button: ButtonOptions,
    pub selects: SelectOptions,
}

impl WidgetOptions {
    pub fn from_json_str(text: &str) -> crate::error::Result<Self> {
        let opts: WidgetOptions = serde_json::from_str(text)?;
        Ok(opts.normalized())
    }

    /// Clamp values the paginator cannot work with.
    pub fn normalized(mut self) -> Self {
        if self.pagination.limit == 0 {
            logd!("Options: pagination.limit=0, using 1");
            self.pagination.limit = 1;
        }
        self
    }

    /// Filter definition for an attribute name, if configured.
    pub fn filter(&self, attribute: &str) -> Option<&FilterDefinition> {
        self.selects.config.iter().find(|d| d.attribute == attribute)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    pub enabled: bool,
    pub limit: usize,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_PAGINATION_ENABLED,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonOptions {
    pub class: String,
    pub text: String,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            class: s!(DEFAULT_BUTTON_CLASS),
            text: s!(DEFAULT_BUTTON_TEXT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOptions {
    pub class: String,
    #[serde(rename = "firstItem")]
    pub first_item: String,
    pub config: Vec<FilterDefinition>,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            class: s!(DEFAULT_SELECT_CLASS),
            first_item: s!(DEFAULT_FIRST_ITEM),
            // One blank entry, same as an unconfigured widget in the browser.
            config: vec![FilterDefinition::default()],
        }
    }
}

/// One dropdown: which card attribute feeds it and how.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefinition {
    #[serde(rename = "filter", alias = "attribute")]
    pub attribute: String,
    pub label: String,
    pub order: SortOrder,
    #[serde(rename = "type")]
    pub kind: FilterKind,
    #[serde(rename = "dependencie", alias = "dependsOn", skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
}

impl FilterDefinition {
    pub fn new(attribute: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn descending(mut self) -> Self {
        self.order = SortOrder::Desc;
        self
    }

    pub fn dates(mut self) -> Self {
        self.kind = FilterKind::Date;
        self
    }

    pub fn depends_on(mut self, attribute: impl Into<String>) -> Self {
        self.depends_on = Some(attribute.into());
        self
    }

    /// The dependency attribute; an empty string counts as none.
    pub fn dependency(&self) -> Option<&str> {
        self.depends_on.as_deref().filter(|d| !d.trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<String> for SortOrder {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") { SortOrder::Desc } else { SortOrder::Asc }
    }
}

impl From<SortOrder> for String {
    fn from(o: SortOrder) -> Self {
        match o {
            SortOrder::Asc => s!("ASC"),
            SortOrder::Desc => s!("DESC"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterKind {
    #[default]
    Text,
    Date,
}

impl From<String> for FilterKind {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("date") { FilterKind::Date } else { FilterKind::Text }
    }
}

impl From<FilterKind> for String {
    fn from(k: FilterKind) -> Self {
        match k {
            FilterKind::Text => s!("text"),
            FilterKind::Date => s!("date"),
        }
    }
}
