// src/gui/components/mod.rs
pub mod card_grid;
pub mod filter_bar;
pub mod pager;
pub mod top_bar;
