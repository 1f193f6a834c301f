// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod card;
pub mod dom;
pub mod events;
pub mod file;
pub mod gui;
pub mod matcher;
pub mod paginator;
pub mod panel;
pub mod render;
pub mod scanner;
pub mod widget;

pub use card::{AttributeSource, Card};
pub use config::options::{FilterDefinition, WidgetOptions};
pub use error::{CardFilterError, Result};
pub use widget::FilterWidget;
